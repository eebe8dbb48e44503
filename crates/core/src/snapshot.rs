//! Game snapshot - the (grid, score) pair exchanged with storage
//!
//! The board is stored as a JSON blob: a row-major array of rows, each tile a
//! `{"color": "RED", "kind": "regular"}` record. A stored board is always full.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
}

impl GameSnapshot {
    /// Fresh game state: score starts at zero
    pub fn new(grid: Grid) -> Self {
        Self { grid, score: 0 }
    }

    /// Serialize the board to its storage blob
    pub fn encode_board(&self) -> EngineResult<String> {
        if !self.grid.is_full() {
            return Err(EngineError::MalformedBoard {
                reason: format!("{} empty cells in a stored board", self.grid.empty_count()),
            });
        }
        Ok(serde_json::to_string(&self.grid)?)
    }

    /// Rebuild a snapshot from a stored board blob and score
    pub fn decode(board_json: &str, score: u32) -> EngineResult<Self> {
        let grid: Grid = serde_json::from_str(board_json)?;
        Ok(Self { grid, score })
    }
}

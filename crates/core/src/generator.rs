//! Initial board generation
//!
//! Cells are filled row by row, left to right. For each cell the candidate set
//! starts as the whole palette; the colour of the two cells to the left is removed
//! if they agree, and likewise for the two cells above. A new run of three can only
//! be completed by extending such a pair, so the finished board has no matches.

use arrayvec::ArrayVec;
use tracing::{instrument, trace};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::grid::Grid;
use crate::rng::TileRng;
use crate::types::{Color, Tile, COLOR_COUNT};

/// Produces match-free starting boards
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    config: EngineConfig,
}

impl BoardGenerator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Generate a full board with no run of three or more
    ///
    /// Only fails with palettes of fewer than three colours, where a cell can have
    /// both of its constraints rule out every colour.
    #[instrument(skip(self, rng), fields(size = self.config.board_size()))]
    pub fn generate<R: TileRng>(&self, rng: &mut R) -> EngineResult<Grid> {
        let size = self.config.board_size();
        let mut grid = Grid::empty(size);

        for row in 0..size {
            for col in 0..size {
                let mut candidates: ArrayVec<Color, COLOR_COUNT> =
                    self.config.palette().iter().copied().collect();

                if col >= 2 {
                    if let Some(color) = pair_color(&grid, (row, col - 1), (row, col - 2)) {
                        candidates.retain(|c| *c != color);
                    }
                }
                if row >= 2 {
                    if let Some(color) = pair_color(&grid, (row - 1, col), (row - 2, col)) {
                        candidates.retain(|c| *c != color);
                    }
                }

                if candidates.is_empty() {
                    return Err(EngineError::PaletteExhausted { row, col });
                }

                let pick = rng.next_range(candidates.len() as u32) as usize;
                grid.put(row, col, Some(Tile::new(candidates[pick])));
            }
        }

        trace!(board = %grid, "generated board");
        Ok(grid)
    }
}

/// Colour shared by two cells, if both are filled and agree
fn pair_color(grid: &Grid, a: (usize, usize), b: (usize, usize)) -> Option<Color> {
    let first = grid.cell(a.0, a.1)?.color;
    let second = grid.cell(b.0, b.1)?.color;
    (first == second).then_some(first)
}

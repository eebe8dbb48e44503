//! Move validation
//!
//! A swap is legal when the two cells are orthogonal neighbours and the swap
//! introduces at least one matched cell that was not matched before. Keeping an
//! existing match alive is not enough.
//!
//! Validation never touches the caller's grid: it works on its own clone.

use tracing::{debug, instrument};

use crate::error::EngineResult;
use crate::grid::Grid;
use crate::matcher::MatchDetector;
use crate::types::Swap;

/// Why a swap was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Cells are not exactly one step apart.
    NotAdjacent,
    /// The swap creates no match that did not already exist.
    NoNewMatch,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::NotAdjacent => "not_adjacent",
            RejectReason::NoNewMatch => "no_new_match",
        }
    }
}

/// Decides whether proposed swaps are legal
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveValidator {
    detector: MatchDetector,
}

impl MoveValidator {
    pub fn new(detector: MatchDetector) -> Self {
        Self { detector }
    }

    /// Classify a swap
    ///
    /// Returns `Ok(None)` for a legal swap, `Ok(Some(reason))` for an illegal one,
    /// and `Err(InvalidCoordinate)` if either cell is off the board.
    #[instrument(level = "debug", skip(self, grid))]
    pub fn check(&self, grid: &Grid, swap: Swap) -> EngineResult<Option<RejectReason>> {
        grid.check(swap.from)?;
        grid.check(swap.to)?;

        if !swap.is_adjacent() {
            debug!("cells are not adjacent");
            return Ok(Some(RejectReason::NotAdjacent));
        }

        let mut trial = grid.clone();
        let before = self.detector.detect(&trial);
        trial.swap(swap.from, swap.to)?;
        let after = self.detector.detect(&trial);

        if after.has_new_since(&before) {
            Ok(None)
        } else {
            debug!("swap creates no new match");
            Ok(Some(RejectReason::NoNewMatch))
        }
    }

    /// Pure predicate form of [`check`](Self::check); off-board swaps are illegal
    pub fn is_legal(&self, grid: &Grid, swap: Swap) -> bool {
        matches!(self.check(grid, swap), Ok(None))
    }
}

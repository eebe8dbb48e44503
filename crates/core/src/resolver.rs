//! Move resolution
//!
//! A move runs to completion in one call:
//!
//! ```text
//! Validating -> Rejected
//!            -> Swapping -> Detecting -> Stable
//!                             ^     |
//!                             |     v
//!                           Clearing/Cascading
//! ```
//!
//! Each Clearing/Cascading pass empties every matched cell, scores the cleared
//! cells, lets the survivors in each column fall to the bottom (keeping their
//! order), and refills the vacated top cells with random tiles. Newly fallen or
//! filled tiles may form fresh runs, so detection repeats until the board is
//! stable. The loop is bounded by `EngineConfig::max_cascades`.

use arrayvec::ArrayVec;
use tracing::{debug, instrument, trace, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::grid::Grid;
use crate::matcher::{MatchDetector, MatchMask};
use crate::rng::TileRng;
use crate::scoring::{accumulate, score_delta};
use crate::snapshot::GameSnapshot;
use crate::types::{Color, Swap, Tile, MAX_BOARD_SIZE};
use crate::validator::{MoveValidator, RejectReason};

/// One clear-and-cascade pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeStep {
    pub cleared: usize,
    pub score_delta: u32,
}

/// What a resolved move did, generation by generation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveReport {
    /// First entry is the swap's own match; later entries are chain reactions.
    pub cascades: Vec<CascadeStep>,
    pub score_delta: u32,
}

impl MoveReport {
    pub fn cleared(&self) -> usize {
        self.cascades.iter().map(|step| step.cleared).sum()
    }

    /// Number of generations beyond the first
    pub fn chain_reactions(&self) -> usize {
        self.cascades.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Snapshot returned unchanged.
    Rejected(RejectReason),
    Resolved(MoveReport),
}

/// Snapshot after the move plus what happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub snapshot: GameSnapshot,
    pub outcome: MoveOutcome,
}

impl MoveResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, MoveOutcome::Resolved(_))
    }
}

/// Resolution state
#[derive(Debug)]
enum Phase {
    Validating,
    Swapping,
    Detecting,
    Clearing(MatchMask),
    Stable,
}

/// Runs the validate, swap, cascade-until-stable lifecycle of a move
#[derive(Debug, Clone)]
pub struct Resolver {
    config: EngineConfig,
    detector: MatchDetector,
    validator: MoveValidator,
}

impl Resolver {
    pub fn new(config: EngineConfig) -> Self {
        let detector = MatchDetector::new();
        Self {
            config,
            detector,
            validator: MoveValidator::new(detector),
        }
    }

    pub fn validator(&self) -> &MoveValidator {
        &self.validator
    }

    /// Apply `swap` to `snapshot`
    ///
    /// An illegal swap is not an error: the result carries the unchanged snapshot and
    /// a [`MoveOutcome::Rejected`]. Errors are reserved for off-board coordinates and
    /// for a cascade that exceeds the configured bound; in both cases the input
    /// snapshot is untouched.
    #[instrument(skip(self, snapshot, rng), fields(score = snapshot.score))]
    pub fn resolve<R: TileRng>(
        &self,
        snapshot: &GameSnapshot,
        swap: Swap,
        rng: &mut R,
    ) -> EngineResult<MoveResult> {
        let mut grid = snapshot.grid.clone();
        let mut score = snapshot.score;
        let mut report = MoveReport::default();
        let mut phase = Phase::Validating;

        loop {
            phase = match phase {
                Phase::Validating => match self.validator.check(&grid, swap)? {
                    Some(reason) => {
                        warn!(reason = reason.as_str(), "move rejected");
                        return Ok(MoveResult {
                            snapshot: snapshot.clone(),
                            outcome: MoveOutcome::Rejected(reason),
                        });
                    }
                    None => Phase::Swapping,
                },
                Phase::Swapping => {
                    grid.swap(swap.from, swap.to)?;
                    Phase::Detecting
                }
                Phase::Detecting => {
                    let mask = self.detector.detect(&grid);
                    if mask.is_empty() {
                        Phase::Stable
                    } else if report.cascades.len() >= self.config.max_cascades() {
                        return Err(EngineError::CascadeLimitExceeded {
                            iterations: report.cascades.len(),
                        });
                    } else {
                        Phase::Clearing(mask)
                    }
                }
                Phase::Clearing(mask) => {
                    let cleared = clear_matches(&mut grid, &mask);
                    let delta = score_delta(cleared);
                    score = accumulate(score, delta);
                    cascade(&mut grid, self.config.palette(), rng);

                    debug!(
                        generation = report.cascades.len() + 1,
                        cleared, score, "cleared and cascaded"
                    );
                    trace!(board = %grid, "after cascade");

                    report.cascades.push(CascadeStep {
                        cleared,
                        score_delta: delta,
                    });
                    report.score_delta = accumulate(report.score_delta, delta);
                    Phase::Detecting
                }
                Phase::Stable => break,
            };
        }

        Ok(MoveResult {
            snapshot: GameSnapshot { grid, score },
            outcome: MoveOutcome::Resolved(report),
        })
    }
}

/// Empty every masked cell, returning how many held a tile
pub fn clear_matches(grid: &mut Grid, mask: &MatchMask) -> usize {
    let mut cleared = 0;
    for (row, col) in mask.positions() {
        if grid.cell(row, col).is_some() {
            grid.put(row, col, None);
            cleared += 1;
        }
    }
    cleared
}

/// Let tiles fall and refill every column
///
/// Survivors keep their relative order and settle at the bottom. Vacated cells are
/// filled from the topmost one downward, each with an independent uniform draw
/// from `palette`. No attempt is made to avoid creating new runs.
pub fn cascade<R: TileRng>(grid: &mut Grid, palette: &[Color], rng: &mut R) {
    let size = grid.size();

    for col in 0..size {
        // Bottom to top.
        let mut survivors: ArrayVec<Tile, MAX_BOARD_SIZE> = ArrayVec::new();
        for row in (0..size).rev() {
            if let Some(tile) = grid.cell(row, col) {
                survivors.push(tile);
            }
        }

        let vacant = size - survivors.len();
        for (offset, tile) in survivors.into_iter().enumerate() {
            grid.put(size - 1 - offset, col, Some(tile));
        }

        for row in 0..vacant {
            let pick = rng.next_range(palette.len() as u32) as usize;
            grid.put(row, col, Some(Tile::new(palette[pick])));
        }
    }
}

//! Engine facade - the CreateGame / ApplyMove contract
//!
//! Bundles a validated [`EngineConfig`], the board generator, the resolver and one
//! RNG. Callers own the snapshots: the engine takes one in and hands a new one back,
//! and never remembers games between calls.

use tracing::{info, instrument};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::generator::BoardGenerator;
use crate::resolver::{MoveResult, Resolver};
use crate::rng::{SimpleRng, TileRng};
use crate::snapshot::GameSnapshot;
use crate::types::{PlayerId, Swap};
use crate::validator::MoveValidator;

#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    generator: BoardGenerator,
    resolver: Resolver,
    rng: R,
}

impl Engine<SimpleRng> {
    /// Engine driven by the built-in LCG
    pub fn with_seed(config: EngineConfig, seed: u32) -> Self {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl<R: TileRng> Engine<R> {
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self {
            generator: BoardGenerator::new(config.clone()),
            resolver: Resolver::new(config),
            rng,
        }
    }

    pub fn validator(&self) -> &MoveValidator {
        self.resolver.validator()
    }

    /// Start a game: a freshly generated match-free board and a score of zero
    #[instrument(skip(self))]
    pub fn create_game(&mut self, player: PlayerId) -> EngineResult<GameSnapshot> {
        let grid = self.generator.generate(&mut self.rng)?;
        info!(size = grid.size(), "new game created");
        Ok(GameSnapshot::new(grid))
    }

    /// Apply a swap; see [`Resolver::resolve`]
    #[instrument(skip(self, snapshot))]
    pub fn apply_move(
        &mut self,
        snapshot: &GameSnapshot,
        swap: Swap,
    ) -> EngineResult<MoveResult> {
        self.resolver.resolve(snapshot, swap, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchDetector;
    use crate::resolver::MoveOutcome;
    use crate::validator::RejectReason;

    #[test]
    fn test_create_game() {
        let mut engine = Engine::with_seed(EngineConfig::default(), 99);
        let snapshot = engine.create_game(PlayerId(1)).unwrap();

        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.grid.size(), 8);
        assert!(snapshot.grid.is_full());
        assert!(!MatchDetector::new().has_match(&snapshot.grid));
    }

    #[test]
    fn test_rejected_move_returns_same_snapshot() {
        let mut engine = Engine::with_seed(EngineConfig::default(), 5);
        let snapshot = engine.create_game(PlayerId(1)).unwrap();

        let result = engine
            .apply_move(&snapshot, Swap::from_coords(0, 0, 2, 0))
            .unwrap();
        assert!(!result.is_accepted());
        assert_eq!(result.outcome, MoveOutcome::Rejected(RejectReason::NotAdjacent));
        assert_eq!(result.snapshot, snapshot);
    }
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the match-3 resolution engine. It has **no dependencies** on
//! storage, networking or terminal I/O:
//!
//! - **Deterministic**: randomness is injected through [`TileRng`], so a seed
//!   reproduces a game exactly
//! - **Testable**: detector, validator and resolver are independent components
//! - **Snapshot-in, snapshot-out**: callers own game state; the engine keeps none
//!
//! # Module Structure
//!
//! - [`config`]: validated board size, palette and cascade bound
//! - [`grid`]: N x N board of optional tiles
//! - [`generator`]: match-free starting boards
//! - [`matcher`]: run detection producing a [`MatchMask`]
//! - [`validator`]: swap legality
//! - [`resolver`]: swap, clear, cascade, repeat until stable
//! - [`scoring`]: 10 points per cleared cell
//! - [`snapshot`]: (grid, score) pair and its storage blob
//! - [`engine`]: CreateGame / ApplyMove facade
//!
//! # Game Rules
//!
//! - A swap must join two orthogonally adjacent cells
//! - A swap is legal only if it creates a match that did not exist before
//! - Illegal swaps leave the snapshot unchanged
//! - Chain reactions are resolved within the same move and all score
//!
//! # Example
//!
//! ```
//! use match3_core::{Engine, EngineConfig, MoveOutcome};
//! use match3_types::{PlayerId, Swap};
//!
//! let mut engine = Engine::with_seed(EngineConfig::default(), 12345);
//! let game = engine.create_game(PlayerId(1)).unwrap();
//! assert_eq!(game.score, 0);
//!
//! // Cells two steps apart are never a legal swap.
//! let result = engine.apply_move(&game, Swap::from_coords(0, 0, 0, 2)).unwrap();
//! assert!(matches!(result.outcome, MoveOutcome::Rejected(_)));
//! assert_eq!(result.snapshot, game);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod grid;
pub mod matcher;
pub mod resolver;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod validator;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{ConfigError, EngineError, EngineResult};
pub use generator::BoardGenerator;
pub use grid::Grid;
pub use matcher::{MatchDetector, MatchMask};
pub use resolver::{CascadeStep, MoveOutcome, MoveReport, MoveResult, Resolver};
pub use rng::{ScriptedRng, SimpleRng, TileRng};
pub use scoring::score_delta;
pub use snapshot::GameSnapshot;
pub use validator::{MoveValidator, RejectReason};

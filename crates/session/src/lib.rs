//! Session module - in-process stand-in for the storage/API layer
//!
//! The engine is snapshot-in, snapshot-out and keeps no games. This crate provides
//! the collaborator around it: players, games keyed by id, boards kept as JSON
//! blobs, and per-game serialization of moves.
//!
//! # Operations
//!
//! - **register_player**: create a player and return its id
//! - **create_game**: generate a fresh board for an existing player
//! - **game**: fetch the current board and score
//! - **make_move**: apply a swap; illegal swaps return the game unchanged
//!
//! # Example
//!
//! ```
//! use match3_core::{Engine, EngineConfig};
//! use match3_session::GameRegistry;
//! use match3_types::Swap;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let registry = GameRegistry::new(Engine::with_seed(EngineConfig::default(), 1));
//! let player = registry.register_player("ada").await;
//! let game = registry.create_game(player.id).await.unwrap();
//!
//! let reply = registry
//!     .make_move(game.id, Swap::from_coords(0, 0, 5, 5))
//!     .await
//!     .unwrap();
//! assert!(!reply.is_accepted());
//! assert_eq!(reply.game, game);
//! # });
//! ```

pub mod error;
pub mod registry;

pub use match3_core as core;
pub use match3_types as types;

pub use error::{SessionError, SessionResult};
pub use registry::{GameRegistry, GameView, MoveReply, Player};

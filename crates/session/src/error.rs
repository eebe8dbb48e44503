//! Session error types.

use derive_more::{Display, Error, From};

use crate::core::EngineError;
use crate::types::{GameId, PlayerId};

#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    #[display("player not found with id: {}", id.0)]
    PlayerNotFound { id: PlayerId },

    #[display("game not found with id: {}", id.0)]
    GameNotFound { id: GameId },

    /// Engine failure (bad coordinates, corrupt stored board, ...).
    #[from]
    #[display("{_0}")]
    Engine(#[error(source)] EngineError),
}

pub type SessionResult<T> = Result<T, SessionError>;

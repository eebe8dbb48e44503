//! Engine error types.

use derive_more::{Display, Error, From};

use crate::types::Color;

/// Rejected [`EngineConfig`](crate::config::EngineConfig) values.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Board size outside `1..=MAX_BOARD_SIZE`.
    #[display("board size {size} is outside 1..={max}")]
    BoardSizeOutOfRange { size: usize, max: usize },
    /// Palette has no colours.
    #[display("palette is empty")]
    EmptyPalette,
    /// Palette lists a colour twice.
    #[display("colour {color:?} appears more than once in the palette")]
    DuplicateColor { color: Color },
    /// Palette names a colour the engine does not know.
    #[display("unknown colour {name:?} in palette")]
    UnknownColor { name: String },
    /// Cascade guard must allow at least one iteration.
    #[display("max_cascades must be at least 1")]
    ZeroCascadeLimit,
}

/// Errors surfaced by engine operations.
///
/// An illegal move is deliberately not an error: it resolves to
/// [`MoveOutcome::Rejected`](crate::resolver::MoveOutcome::Rejected) with the
/// snapshot left untouched.
#[derive(Debug, Display, Error, From)]
pub enum EngineError {
    /// A coordinate lies outside the board.
    #[from(ignore)]
    #[display("coordinate ({row}, {col}) is outside a {size}x{size} board")]
    InvalidCoordinate { row: i32, col: i32, size: usize },

    /// Engine configuration failed validation.
    #[display("invalid engine configuration: {_0}")]
    InvalidConfig(#[error(source)] ConfigError),

    /// Board generation ran out of legal colours for a cell.
    #[from(ignore)]
    #[display("no colour can be placed at ({row}, {col}) without completing a run")]
    PaletteExhausted { row: usize, col: usize },

    /// The cascade loop did not settle within the configured bound.
    #[from(ignore)]
    #[display("board did not stabilise after {iterations} cascade iterations")]
    CascadeLimitExceeded { iterations: usize },

    /// A stored board is not a full square grid.
    #[from(ignore)]
    #[display("malformed board: {reason}")]
    MalformedBoard { reason: String },

    /// Board JSON could not be read or written.
    #[display("board codec error: {_0}")]
    Codec(#[error(source)] serde_json::Error),
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

//! Engine configuration
//!
//! Board size and palette are fixed per game, validated once, and handed to the
//! components by value. Nothing in the engine reads mutable globals.
//!
//! # Environment Variables
//!
//! - `MATCH3_BOARD_SIZE`: Board edge length (default: 8)
//! - `MATCH3_PALETTE`: Comma-separated colour names (default: all six)
//! - `MATCH3_MAX_CASCADES`: Cascade iterations allowed per move (default: 1000)

use arrayvec::ArrayVec;

use crate::error::ConfigError;
use crate::types::{Color, COLOR_COUNT, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

/// Default bound on cascade iterations within one move
pub const DEFAULT_MAX_CASCADES: usize = 1000;

/// Colours a game draws from
pub type Palette = ArrayVec<Color, COLOR_COUNT>;

/// Validated, immutable engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    board_size: usize,
    palette: Palette,
    max_cascades: usize,
}

impl EngineConfig {
    /// Validate a board size and palette
    ///
    /// The size must lie in `1..=MAX_BOARD_SIZE`; the palette must be non-empty and
    /// must not repeat a colour.
    pub fn new(board_size: usize, palette: &[Color]) -> Result<Self, ConfigError> {
        if board_size == 0 || board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSizeOutOfRange {
                size: board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let mut colors = Palette::new();
        for &color in palette {
            if colors.contains(&color) {
                return Err(ConfigError::DuplicateColor { color });
            }
            // Cannot overflow: every entry is a distinct Color.
            colors.push(color);
        }

        Ok(Self {
            board_size,
            palette: colors,
            max_cascades: DEFAULT_MAX_CASCADES,
        })
    }

    /// Replace the cascade iteration bound
    pub fn with_max_cascades(mut self, max_cascades: usize) -> Result<Self, ConfigError> {
        if max_cascades == 0 {
            return Err(ConfigError::ZeroCascadeLimit);
        }
        self.max_cascades = max_cascades;
        Ok(self)
    }

    /// Build from `MATCH3_*` environment variables
    ///
    /// See [`from_lookup`](Self::from_lookup) for the fallback rules.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a key lookup using the `MATCH3_*` names
    ///
    /// Absent, blank or non-numeric sizes and cascade limits fall back to the
    /// defaults. An absent or blank palette means all six colours; a palette naming
    /// an unknown colour is rejected. The result is then validated like [`new`](Self::new).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let board_size = lookup("MATCH3_BOARD_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let palette = match lookup("MATCH3_PALETTE").filter(|s| !s.trim().is_empty()) {
            Some(s) => parse_palette(&s)?,
            None => Color::ALL.to_vec(),
        };

        let max_cascades = lookup("MATCH3_MAX_CASCADES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_CASCADES);

        Self::new(board_size, &palette)?.with_max_cascades(max_cascades)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn max_cascades(&self) -> usize {
        self.max_cascades
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            palette: Palette::from(Color::ALL),
            max_cascades: DEFAULT_MAX_CASCADES,
        }
    }
}

/// Parse a comma-separated colour list; empty entries are skipped
fn parse_palette(s: &str) -> Result<Vec<Color>, ConfigError> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            Color::from_str(name).ok_or_else(|| ConfigError::UnknownColor {
                name: name.to_string(),
            })
        })
        .collect()
}

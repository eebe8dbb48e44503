//! Core types module - shared data structures and constants
//!
//! This module defines the plain data used throughout the workspace: tile colours,
//! tiles, cells and board coordinates. Nothing here knows about matching, scoring
//! or randomness, so the types can be shared by the engine, the session layer and
//! any front end.
//!
//! # Board geometry
//!
//! - **Shape**: square, `N x N`, fixed for the lifetime of a game
//! - **Default size**: 8 (`DEFAULT_BOARD_SIZE`)
//! - **Coordinates**: `(row, col)`, 0-indexed, origin at the top-left
//!
//! # Scoring constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCORE_PER_TILE` | 10 | Points awarded per cleared cell |
//! | `MATCH_RUN_MIN` | 3 | Shortest run that counts as a match |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Color, Position, Swap, Tile, TileKind};
//!
//! let tile = Tile::new(Color::Blue);
//! assert_eq!(tile.kind, TileKind::Regular);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Color::from_str("blue"), Some(Color::Blue));
//! assert_eq!(Color::Blue.as_str(), "BLUE");
//!
//! let swap = Swap::new(Position::new(0, 2), Position::new(0, 3));
//! assert_eq!(swap.manhattan_distance(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Board edge length used when no configuration is supplied
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Largest supported board edge length
pub const MAX_BOARD_SIZE: usize = 16;

/// Points awarded for each cleared cell
pub const SCORE_PER_TILE: u32 = 10;

/// Minimum length of a horizontal or vertical run that counts as a match
pub const MATCH_RUN_MIN: usize = 3;

/// Number of colours in the full palette
pub const COLOR_COUNT: usize = 6;

/// Tile colour
///
/// Colours carry no ordering semantics; the engine only compares them for equality.
/// On the wire they are written as upper-case names (`"RED"`, `"BLUE"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    /// Every colour, in declaration order
    pub const ALL: [Color; COLOR_COUNT] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    /// Parse colour from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::Color;
    ///
    /// assert_eq!(Color::from_str("RED"), Some(Color::Red));
    /// assert_eq!(Color::from_str("purple"), Some(Color::Purple));
    /// assert_eq!(Color::from_str("teal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Some(Color::Red),
            "blue" => Some(Color::Blue),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "purple" => Some(Color::Purple),
            "orange" => Some(Color::Orange),
            _ => None,
        }
    }

    /// Convert to the upper-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Purple => "PURPLE",
            Color::Orange => "ORANGE",
        }
    }

    /// Single-letter abbreviation used by text renderings of the board
    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Purple => 'P',
            Color::Orange => 'O',
        }
    }
}

/// Tile kind tag
///
/// Only regular tiles exist today; the tag is carried through serialization so
/// stored boards stay readable if more kinds are introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    #[default]
    Regular,
}

/// A coloured tile occupying one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub color: Color,
    #[serde(default)]
    pub kind: TileKind,
}

impl Tile {
    /// Create a regular tile of the given colour
    pub fn new(color: Color) -> Self {
        Self {
            color,
            kind: TileKind::Regular,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell (only between clearing and cascade-fill)
/// - `Some(Tile)`: Cell holding a tile
pub type Cell = Option<Tile>;

/// Board coordinate, row before column
///
/// Components are signed so that out-of-range input coming from callers can be
/// represented and rejected instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// A proposed swap of two cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swap {
    pub from: Position,
    pub to: Position,
}

impl Swap {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Build a swap from the four raw coordinates callers usually send
    pub fn from_coords(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self::new(Position::new(from_row, from_col), Position::new(to_row, to_col))
    }

    /// Manhattan distance between the two cells
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::Swap;
    ///
    /// assert_eq!(Swap::from_coords(0, 0, 0, 1).manhattan_distance(), 1);
    /// assert_eq!(Swap::from_coords(0, 0, 1, 1).manhattan_distance(), 2);
    /// assert_eq!(Swap::from_coords(3, 3, 3, 3).manhattan_distance(), 0);
    /// ```
    pub fn manhattan_distance(&self) -> u64 {
        u64::from(self.from.row.abs_diff(self.to.row))
            + u64::from(self.from.col.abs_diff(self.to.col))
    }

    /// True for orthogonal neighbours only
    pub fn is_adjacent(&self) -> bool {
        self.manhattan_distance() == 1
    }
}

/// Opaque player reference handed to game creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

/// Opaque game identifier assigned by whoever stores snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_string_roundtrip() {
        for color in Color::ALL {
            assert_eq!(Color::from_str(color.as_str()), Some(color));
        }
    }

    #[test]
    fn test_tile_wire_format() {
        let json = serde_json::to_string(&Tile::new(Color::Orange)).unwrap();
        assert_eq!(json, r#"{"color":"ORANGE","kind":"regular"}"#);

        // Records without a kind default to regular.
        let tile: Tile = serde_json::from_str(r#"{"color":"GREEN"}"#).unwrap();
        assert_eq!(tile, Tile::new(Color::Green));
    }

    #[test]
    fn test_swap_adjacency() {
        assert!(Swap::from_coords(4, 4, 3, 4).is_adjacent());
        assert!(Swap::from_coords(4, 4, 4, 5).is_adjacent());
        assert!(!Swap::from_coords(4, 4, 4, 4).is_adjacent());
        assert!(!Swap::from_coords(4, 4, 5, 5).is_adjacent());
        assert!(!Swap::from_coords(0, 0, 0, 2).is_adjacent());
    }

    #[test]
    fn test_swap_distance_at_coordinate_extremes() {
        let far = Swap::from_coords(i32::MIN, 0, i32::MAX, 2);
        assert_eq!(far.manhattan_distance(), u64::from(u32::MAX) + 2);
        assert!(!far.is_adjacent());

        let corner = Swap::from_coords(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(corner.manhattan_distance(), 2 * u64::from(u32::MAX));
        assert!(!corner.is_adjacent());

        assert!(Swap::from_coords(i32::MAX, i32::MIN, i32::MAX - 1, i32::MIN).is_adjacent());
    }
}

//! Grid module - the square tile board
//!
//! The grid is an N x N board where each cell is either empty or holds a tile.
//! Uses a flat vector in row-major order (`row * size + col`) for cache locality.
//! Coordinates: (row, col), 0-indexed, origin at the top-left.
//!
//! Outside of a resolution cycle every cell holds a tile; empty cells only exist
//! between clearing and cascade-fill.

use std::fmt;

use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};
use crate::types::{Cell, Color, Position, Tile, MAX_BOARD_SIZE};

/// The game board - `size` x `size` cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>")]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a board of empty cells
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a full board from row-major tiles
    ///
    /// Fails unless the rows form a non-empty square of at most `MAX_BOARD_SIZE`.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> EngineResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::MalformedBoard {
                reason: "board has no rows".to_string(),
            });
        }
        if size > MAX_BOARD_SIZE {
            return Err(EngineError::MalformedBoard {
                reason: format!("board has {} rows, at most {} supported", size, MAX_BOARD_SIZE),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, tiles) in rows.into_iter().enumerate() {
            if tiles.len() != size {
                return Err(EngineError::MalformedBoard {
                    reason: format!("row {} has {} cells, expected {}", row, tiles.len(), size),
                });
            }
            cells.extend(tiles.into_iter().map(Some));
        }

        Ok(Self { size, cells })
    }

    /// Build a full board of regular tiles from a colour matrix
    pub fn from_colors(colors: &[Vec<Color>]) -> EngineResult<Self> {
        Self::from_rows(
            colors
                .iter()
                .map(|row| row.iter().copied().map(Tile::new).collect())
                .collect(),
        )
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let size = self.size as i32;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some((row as usize) * self.size + (col as usize))
    }

    /// Flat index for in-range `usize` coordinates
    #[inline(always)]
    pub(crate) fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Edge length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a position lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos.row, pos.col).is_some()
    }

    /// Reject positions that are off the board
    pub fn check(&self, pos: Position) -> EngineResult<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::InvalidCoordinate {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Cell at in-range `usize` coordinates
    #[inline(always)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.idx(row, col)]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.idx(row, col);
        self.cells[idx] = cell;
    }

    /// Colour at (row, col), `None` if empty or out of bounds
    pub fn color_at(&self, row: i32, col: i32) -> Option<Color> {
        self.get(row, col).flatten().map(|tile| tile.color)
    }

    /// Exchange the contents of two cells
    pub fn swap(&mut self, a: Position, b: Position) -> EngineResult<()> {
        self.check(a)?;
        self.check(b)?;
        let ia = self.idx(a.row as usize, a.col as usize);
        let ib = self.idx(b.row as usize, b.col as usize);
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Check that no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Count empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Copy one column, top to bottom
    pub fn column(&self, col: usize) -> Vec<Cell> {
        (0..self.size).map(|row| self.cell(row, col)).collect()
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

/// Serializes as an array of rows. Empty cells have no wire form, so a grid with
/// holes fails to serialize instead of producing ragged rows.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(i) = self.cells.iter().position(Option::is_none) {
            return Err(S::Error::custom(format!(
                "empty cell at ({}, {}) cannot be serialized",
                i / self.size,
                i % self.size
            )));
        }

        let mut rows = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            let tiles: Vec<Tile> = row.iter().flatten().copied().collect();
            rows.serialize_element(&tiles)?;
        }
        rows.end()
    }
}

impl fmt::Display for Grid {
    /// One letter per tile, `.` for empty cells, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                let c = cell.map(|tile| tile.color.letter()).unwrap_or('.');
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::*;

    fn sample() -> Grid {
        Grid::from_colors(&[
            vec![Red, Blue, Green],
            vec![Yellow, Purple, Orange],
            vec![Blue, Red, Green],
        ])
        .unwrap()
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::empty(8);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 7), Some(7));
        assert_eq!(grid.index(1, 0), Some(8));
        assert_eq!(grid.index(7, 7), Some(63));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(0, 8), None);
        assert_eq!(grid.index(8, 0), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_colors(&[vec![Red, Blue], vec![Red]]).unwrap_err();
        assert!(matches!(err, EngineError::MalformedBoard { .. }));
        assert!(Grid::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_swap_and_bounds() {
        let mut grid = sample();
        grid.swap(Position::new(0, 0), Position::new(0, 1)).unwrap();
        assert_eq!(grid.color_at(0, 0), Some(Blue));
        assert_eq!(grid.color_at(0, 1), Some(Red));

        let err = grid
            .swap(Position::new(0, 0), Position::new(3, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidCoordinate {
                row: 3,
                col: 0,
                size: 3
            }
        ));
    }

    #[test]
    fn test_display() {
        let mut grid = sample();
        grid.set(1, 1, None);
        assert_eq!(grid.to_string(), "R B G\nY . O\nB R G");
        assert!(!grid.is_full());
        assert_eq!(grid.empty_count(), 1);
    }

    #[test]
    fn test_wire_format() {
        let grid = Grid::from_colors(&[vec![Red, Blue], vec![Green, Red]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(
            json,
            r#"[[{"color":"RED","kind":"regular"},{"color":"BLUE","kind":"regular"}],[{"color":"GREEN","kind":"regular"},{"color":"RED","kind":"regular"}]]"#
        );
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);

        assert!(serde_json::from_str::<Grid>(r#"[[{"color":"RED"}],[]]"#).is_err());
    }

    #[test]
    fn test_grid_with_holes_does_not_serialize() {
        let mut grid = sample();
        grid.set(2, 1, None);

        let err = serde_json::to_string(&grid).unwrap_err();
        assert!(err.to_string().contains("(2, 1)"), "{}", err);
        assert!(serde_json::to_value(&grid).is_err());
    }
}

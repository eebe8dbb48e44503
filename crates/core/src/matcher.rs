//! Match detection
//!
//! A cell is matched when it belongs to a horizontal or vertical run of at least
//! [`MATCH_RUN_MIN`] consecutive tiles of the same colour. Detection is two
//! independent linear passes (rows, then columns) OR-combined into a [`MatchMask`].
//! Cells where a horizontal and a vertical run cross are simply marked once.

use crate::grid::Grid;
use crate::types::{Color, MATCH_RUN_MIN};

/// Boolean mask with the same shape as the grid it was computed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMask {
    size: usize,
    marks: Vec<bool>,
}

impl MatchMask {
    /// An all-false mask
    pub fn new(size: usize) -> Self {
        Self {
            size,
            marks: vec![false; size * size],
        }
    }

    /// Whether (row, col) is matched; false when out of bounds
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.marks[row * self.size + col]
    }

    fn mark(&mut self, row: usize, col: usize) {
        self.marks[row * self.size + col] = true;
    }

    /// True when no cell is matched
    pub fn is_empty(&self) -> bool {
        !self.marks.iter().any(|m| *m)
    }

    /// Number of matched cells
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|m| **m).count()
    }

    /// True if some cell is matched here but was not matched in `before`
    pub fn has_new_since(&self, before: &MatchMask) -> bool {
        self.marks
            .iter()
            .zip(&before.marks)
            .any(|(after, before)| *after && !*before)
    }

    /// Matched cells as (row, col), row-major
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(i, _)| (i / size, i % size))
    }
}

/// Finds runs of equal colours
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchDetector;

impl MatchDetector {
    pub fn new() -> Self {
        Self
    }

    /// Compute the match mask of `grid`
    pub fn detect(&self, grid: &Grid) -> MatchMask {
        let size = grid.size();
        let mut mask = MatchMask::new(size);

        for row in 0..size {
            scan_line(
                size,
                |i| grid.cell(row, i).map(|t| t.color),
                |i| mask.mark(row, i),
            );
        }
        for col in 0..size {
            scan_line(
                size,
                |i| grid.cell(i, col).map(|t| t.color),
                |i| mask.mark(i, col),
            );
        }

        mask
    }

    /// Shorthand for `!detect(grid).is_empty()`
    pub fn has_match(&self, grid: &Grid) -> bool {
        !self.detect(grid).is_empty()
    }
}

/// Scan one line of `len` cells, calling `mark` for every cell in a qualifying run
fn scan_line(
    len: usize,
    color_at: impl Fn(usize) -> Option<Color>,
    mut mark: impl FnMut(usize),
) {
    if len == 0 {
        return;
    }

    let mut streak = 1usize;
    for i in 1..len {
        let same = match (color_at(i), color_at(i - 1)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        if same {
            streak += 1;
        } else {
            if streak >= MATCH_RUN_MIN {
                (i - streak..i).for_each(&mut mark);
            }
            streak = 1;
        }
    }

    // Final streak runs into the edge of the board.
    if streak >= MATCH_RUN_MIN {
        (len - streak..len).for_each(&mut mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color::*;

    fn checkerboard(size: usize) -> Vec<Vec<Color>> {
        let palette = [Red, Green, Orange, Purple];
        (0..size)
            .map(|r| (0..size).map(|c| palette[(r + c) % palette.len()]).collect())
            .collect()
    }

    #[test]
    fn test_no_match_on_diagonal_pattern() {
        let grid = Grid::from_colors(&checkerboard(8)).unwrap();
        assert!(MatchDetector::new().detect(&grid).is_empty());
    }

    #[test]
    fn test_horizontal_run_at_right_edge() {
        let mut colors = checkerboard(8);
        colors[0][5] = Blue;
        colors[0][6] = Blue;
        colors[0][7] = Blue;
        let grid = Grid::from_colors(&colors).unwrap();
        let mask = MatchDetector::new().detect(&grid);

        assert_eq!(mask.count(), 3);
        assert!(mask.get(0, 5) && mask.get(0, 6) && mask.get(0, 7));
    }

    #[test]
    fn test_vertical_run_of_four() {
        let mut colors = checkerboard(8);
        for row in 2..6 {
            colors[row][3] = Yellow;
        }
        let grid = Grid::from_colors(&colors).unwrap();
        let mask = MatchDetector::new().detect(&grid);

        assert_eq!(
            mask.positions().collect::<Vec<_>>(),
            vec![(2, 3), (3, 3), (4, 3), (5, 3)]
        );
    }

    #[test]
    fn test_pair_is_not_a_match() {
        let mut colors = checkerboard(8);
        colors[4][0] = Blue;
        colors[4][1] = Blue;
        let grid = Grid::from_colors(&colors).unwrap();
        assert!(!MatchDetector::new().has_match(&grid));
    }

    #[test]
    fn test_l_shape_marks_corner_once() {
        let mut colors = checkerboard(8);
        for col in 0..3 {
            colors[5][col] = Blue;
        }
        colors[6][0] = Blue;
        colors[7][0] = Blue;
        let grid = Grid::from_colors(&colors).unwrap();
        let mask = MatchDetector::new().detect(&grid);

        assert_eq!(mask.count(), 5);
        assert!(mask.get(5, 0));
    }

    #[test]
    fn test_empty_cells_break_runs() {
        let mut grid = Grid::from_colors(&vec![vec![Red; 5]; 5]).unwrap();
        for row in 0..5 {
            grid.set(row, 2, None);
        }
        for col in 0..5 {
            grid.set(2, col, None);
        }
        let mask = MatchDetector::new().detect(&grid);

        // Only the pairs around the empty cross remain, none long enough.
        assert!(mask.is_empty());
    }

    #[test]
    fn test_has_new_since() {
        let mut before = MatchMask::new(3);
        before.mark(0, 0);
        let mut after = before.clone();
        assert!(!after.has_new_since(&before));
        after.mark(2, 2);
        assert!(after.has_new_since(&before));
        assert!(!before.has_new_since(&after));
    }
}

//! Move validation tests - adjacency and "must create a new match"

use match3::core::{Grid, MatchDetector, MoveValidator, RejectReason};
use match3::types::{Color, Swap};

use Color::*;

/// 8x8 diagonal stripes of four colours: no runs anywhere, and Blue/Yellow unused
fn base() -> Vec<Vec<Color>> {
    let stripes = [Red, Green, Orange, Purple];
    (0..8)
        .map(|r| (0..8).map(|c| stripes[(r + c) % stripes.len()]).collect())
        .collect()
}

fn legal(colors: &[Vec<Color>], swap: Swap) -> bool {
    let grid = Grid::from_colors(colors).unwrap();
    MoveValidator::default().is_legal(&grid, swap)
}

#[test]
fn test_base_has_no_matches() {
    let grid = Grid::from_colors(&base()).unwrap();
    assert!(MatchDetector::new().detect(&grid).is_empty());
}

#[test]
fn test_non_adjacent_move_is_invalid() {
    let grid = Grid::from_colors(&base()).unwrap();
    let validator = MoveValidator::default();

    // Diagonal and two-step swaps, whatever the colours.
    for swap in [
        Swap::from_coords(0, 0, 2, 2),
        Swap::from_coords(0, 0, 1, 1),
        Swap::from_coords(3, 3, 3, 5),
        Swap::from_coords(7, 0, 5, 0),
    ] {
        assert_eq!(
            validator.check(&grid, swap).unwrap(),
            Some(RejectReason::NotAdjacent),
            "{:?}",
            swap
        );
    }
}

#[test]
fn test_distance_two_rejected_even_when_it_would_match() {
    let mut colors = base();
    colors[0][0] = Blue;
    colors[0][1] = Blue;
    colors[0][2] = Yellow;
    colors[0][3] = Orange;
    colors[0][4] = Blue;
    // Swapping (0,2) with (0,4) would line up three blues, but is two steps away.
    assert!(!legal(&colors, Swap::from_coords(0, 2, 0, 4)));
}

#[test]
fn test_adjacent_but_no_match_is_invalid() {
    let mut colors = base();
    colors[0][2] = Green;
    colors[0][3] = Blue;
    let grid = Grid::from_colors(&colors).unwrap();

    assert_eq!(
        MoveValidator::default()
            .check(&grid, Swap::from_coords(0, 2, 0, 3))
            .unwrap(),
        Some(RejectReason::NoNewMatch)
    );
}

#[test]
fn test_valid_horizontal_match_move() {
    // Row 0 starts [BLUE, BLUE, RED, BLUE]; swapping columns 2 and 3 lines up three blues.
    let mut colors = base();
    colors[0][0] = Blue;
    colors[0][1] = Blue;
    colors[0][2] = Red;
    colors[0][3] = Blue;
    assert!(legal(&colors, Swap::from_coords(0, 2, 0, 3)));
    // Direction of the swap does not matter.
    assert!(legal(&colors, Swap::from_coords(0, 3, 0, 2)));
}

#[test]
fn test_valid_vertical_match_move() {
    let mut colors = base();
    colors[0][0] = Blue;
    colors[1][0] = Blue;
    colors[2][0] = Yellow;
    colors[2][1] = Blue;
    assert!(legal(&colors, Swap::from_coords(2, 0, 2, 1)));
}

#[test]
fn test_valid_edge_of_board_horizontal_match() {
    let mut colors = base();
    colors[0][4] = Blue;
    colors[0][5] = Yellow;
    colors[0][6] = Blue;
    colors[0][7] = Blue;
    assert!(legal(&colors, Swap::from_coords(0, 4, 0, 5)));
}

#[test]
fn test_valid_edge_of_board_vertical_match() {
    let mut colors = base();
    colors[4][7] = Blue;
    colors[5][7] = Yellow;
    colors[6][7] = Blue;
    colors[7][7] = Blue;
    assert!(legal(&colors, Swap::from_coords(4, 7, 5, 7)));
}

#[test]
fn test_valid_l_shaped_match() {
    let mut colors = base();
    colors[3][2] = Blue;
    colors[3][3] = Blue;
    colors[3][4] = Yellow;
    colors[2][4] = Blue;
    colors[4][4] = Blue;
    colors[5][4] = Blue;
    let swap = Swap::from_coords(2, 4, 3, 4);
    assert!(legal(&colors, swap));

    let mut grid = Grid::from_colors(&colors).unwrap();
    grid.swap(swap.from, swap.to).unwrap();
    let mask = MatchDetector::new().detect(&grid);
    assert_eq!(mask.count(), 5);
    assert!(mask.get(3, 4), "corner belongs to both runs");
}

#[test]
fn test_valid_t_shaped_match() {
    let mut colors = base();
    colors[5][2] = Blue;
    colors[5][3] = Yellow;
    colors[5][4] = Blue;
    colors[4][3] = Blue;
    colors[6][3] = Blue;
    colors[7][3] = Blue;
    let swap = Swap::from_coords(4, 3, 5, 3);
    assert!(legal(&colors, swap));

    let mut grid = Grid::from_colors(&colors).unwrap();
    grid.swap(swap.from, swap.to).unwrap();
    assert_eq!(MatchDetector::new().detect(&grid).count(), 5);
}

#[test]
fn test_preserving_an_existing_match_is_not_enough() {
    // Everything already matches; swapping two same-coloured neighbours adds nothing.
    let mut colors = vec![vec![Red; 8]; 8];
    colors[7][7] = Blue;
    let grid = Grid::from_colors(&colors).unwrap();
    let validator = MoveValidator::default();

    assert_eq!(
        validator
            .check(&grid, Swap::from_coords(0, 0, 0, 1))
            .unwrap(),
        Some(RejectReason::NoNewMatch)
    );
    assert!(!validator.is_legal(&grid, Swap::from_coords(3, 3, 4, 3)));
}

#[test]
fn test_swap_inside_existing_run_is_invalid() {
    let mut colors = base();
    colors[7][0] = Blue;
    colors[7][1] = Blue;
    colors[7][2] = Blue;
    assert!(!legal(&colors, Swap::from_coords(7, 0, 7, 1)));
}

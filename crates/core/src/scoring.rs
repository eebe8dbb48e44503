//! Scoring module
//!
//! Every cleared cell is worth [`SCORE_PER_TILE`] points, in every cascade
//! iteration of a move. There are no combo multipliers: a chain reaction pays for
//! each generation it clears and nothing more.

use crate::types::SCORE_PER_TILE;

/// Points for clearing `cleared` cells in one pass
pub fn score_delta(cleared: usize) -> u32 {
    u32::try_from(cleared)
        .unwrap_or(u32::MAX)
        .saturating_mul(SCORE_PER_TILE)
}

/// Add a delta to a running score without wrapping
pub fn accumulate(score: u32, delta: u32) -> u32 {
    score.saturating_add(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_delta() {
        assert_eq!(score_delta(0), 0);
        assert_eq!(score_delta(3), 30);
        assert_eq!(score_delta(5), 50);
        assert_eq!(score_delta(64), 640);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(score_delta(usize::MAX), u32::MAX);
        assert_eq!(accumulate(u32::MAX - 5, 30), u32::MAX);
        assert_eq!(accumulate(120, 30), 150);
    }
}

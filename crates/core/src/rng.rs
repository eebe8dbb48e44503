//! RNG module - injectable randomness for board generation and cascade fill
//!
//! The engine never reaches for a global RNG. Everything that needs randomness
//! takes a [`TileRng`], so games are reproducible from a seed and tests can script
//! the exact colours that fall into the board.
//!
//! Also provides a simple LCG for deterministic play.

use std::collections::VecDeque;

/// Source of uniform random indices
pub trait TileRng {
    /// Generate random value in range [0, max)
    ///
    /// `max` is always at least 1.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl TileRng for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle with a short period, use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of indices, then falls back to an inner [`SimpleRng`]
///
/// Used to force specific colours into cascade fills, e.g. to stage chain reactions.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    script: VecDeque<u32>,
    fallback: SimpleRng,
}

impl ScriptedRng {
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: SimpleRng::default(),
        }
    }

    /// Number of scripted values not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl TileRng for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        match self.script.pop_front() {
            Some(v) => v % max.max(1),
            None => self.fallback.next_range(max),
        }
    }
}

//! Random tile placement.

use smallvec::SmallVec;

use super::outcome::Spawn;
use crate::core::config::sanitize_probability;
use crate::core::{GameRng, GameRngState, Grid, Position, CELL_COUNT};

/// Places new tiles on uniformly chosen empty cells.
///
/// A spawned tile is a 2 (exponent 1) with probability `two_probability`,
/// otherwise a 4 (exponent 2).
#[derive(Clone, Debug)]
pub struct Spawner {
    rng: GameRng,
    two_probability: f64,
}

impl Spawner {
    /// Create a spawner from an RNG.
    ///
    /// The probability is clamped to [0, 1]; NaN falls back to 0.9.
    #[must_use]
    pub fn new(rng: GameRng, two_probability: f64) -> Self {
        Self {
            rng,
            two_probability: sanitize_probability(two_probability),
        }
    }

    /// Place one tile. Returns `None` when the grid is full.
    pub fn spawn(&mut self, grid: &mut Grid) -> Option<Spawn> {
        let empty: SmallVec<[Position; CELL_COUNT]> = grid.enumerate_empty().collect();
        if empty.is_empty() {
            return None;
        }
        let position = empty[self.rng.gen_range_usize(0..empty.len())];
        let value = if self.rng.gen_bool(self.two_probability) { 1 } else { 2 };
        grid.put(position, value);
        Some(Spawn { position, value })
    }

    /// Restart the spawn sequence from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    /// Seed of the current spawn sequence.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Capture the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

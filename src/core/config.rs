//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::grid::CELL_COUNT;

/// Default number of undo snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Default probability that a spawned tile is a 2 (exponent 1).
pub const DEFAULT_TWO_PROBABILITY: f64 = 0.9;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum undo snapshots retained; the oldest is evicted past this.
    pub history_capacity: usize,

    /// Probability that a spawned tile is a 2 rather than a 4.
    pub two_probability: f64,

    /// Tiles spawned when a new game starts.
    pub initial_tiles: usize,

    /// Spawn RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            two_probability: DEFAULT_TWO_PROBABILITY,
            initial_tiles: 2,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom history capacity (at least 1).
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Create a new config with a custom 2-tile probability, clamped to [0, 1].
    ///
    /// A NaN or infinite probability falls back to the default.
    #[must_use]
    pub fn with_two_probability(mut self, probability: f64) -> Self {
        self.two_probability = sanitize_probability(probability);
        self
    }

    /// Create a new config with a custom number of starting tiles (at most 16).
    #[must_use]
    pub fn with_initial_tiles(mut self, tiles: usize) -> Self {
        self.initial_tiles = tiles.min(CELL_COUNT);
        self
    }

    /// Check fields that arrived without going through the builders.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.two_probability) {
            return Err(EngineError::CorruptData("spawn probability outside [0, 1]"));
        }
        if self.initial_tiles > CELL_COUNT {
            return Err(EngineError::CorruptData("more opening tiles than cells"));
        }
        Ok(())
    }
}

/// Clamp a probability to [0, 1], replacing NaN and infinities with the default.
pub(crate) fn sanitize_probability(probability: f64) -> f64 {
    if probability.is_finite() {
        probability.clamp(0.0, 1.0)
    } else {
        DEFAULT_TWO_PROBABILITY
    }
}

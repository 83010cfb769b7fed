//! Full-fidelity engine checkpoints.
//!
//! Unlike a `.2048game` save, a checkpoint keeps the undo history and the
//! spawn RNG position, so a restored game continues with exactly the same
//! tiles the original would have spawned.

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, EngineError, GameRngState, Grid, Result};
use crate::history::Snapshot;

/// Serializable capture of a whole game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub config: EngineConfig,
    pub grid: Grid,
    pub score: u32,
    pub undo_count: u32,
    pub undo_locked: bool,
    pub high_tile_reached: bool,
    /// Oldest first.
    pub history: Vec<Snapshot>,
    pub rng: GameRngState,
}

impl Checkpoint {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode with bincode and re-check the config and every grid.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let checkpoint: Checkpoint = bincode::deserialize(bytes)?;
        checkpoint.config.validate()?;
        let grids = std::iter::once(&checkpoint.grid)
            .chain(checkpoint.history.iter().map(|s| &s.grid));
        for grid in grids {
            Grid::from_rows(*grid.rows())
                .map_err(|_| EngineError::CorruptData("checkpoint grid value out of range"))?;
        }
        Ok(checkpoint)
    }
}

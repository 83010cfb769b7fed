//! Direct-manipulation entry points for a debug console.
//!
//! These bypass the move engine, so each one validates its arguments the
//! same way normal play would and rejects the whole call before writing
//! anything.

use log::warn;

use super::Game;
use crate::core::{EngineError, Position, Result, GRID_SIZE, MAX_EXPONENT};
use crate::engine::Spawn;
use crate::persist::MAX_COUNTER;

impl Game {
    /// Write one cell.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        let pos = Position::new(row, col).map_err(rejected)?;
        self.grid.set(pos, value).map_err(rejected)
    }

    /// Override the score. It must stay representable in a save file.
    pub fn set_score(&mut self, score: u32) -> Result<()> {
        if score > MAX_COUNTER {
            return Err(rejected(EngineError::InvalidValue {
                value: i64::from(score),
                max: i64::from(MAX_COUNTER),
            }));
        }
        self.score = score;
        Ok(())
    }

    /// Restart the spawn RNG without touching the board.
    pub fn reseed(&mut self, seed: u64) {
        self.spawner.reseed(seed);
    }

    /// Fill the half-open rectangle `start..end` with one exponent.
    ///
    /// Corners may range over `0..=GRID_SIZE`; an empty rectangle is a no-op.
    pub fn fill_region(
        &mut self,
        start: (usize, usize),
        end: (usize, usize),
        value: u8,
    ) -> Result<()> {
        for (row, col) in [start, end] {
            if row > GRID_SIZE || col > GRID_SIZE {
                return Err(rejected(EngineError::InvalidPosition {
                    row,
                    col,
                    size: GRID_SIZE,
                }));
            }
        }
        if value > MAX_EXPONENT {
            return Err(rejected(EngineError::invalid_exponent(i64::from(value))));
        }

        for row in start.0..end.0 {
            for col in start.1..end.1 {
                self.grid.put(Position::at(row, col), value);
            }
        }
        Ok(())
    }

    /// Spawn one random tile outside of a move.
    pub fn spawn_random(&mut self) -> Option<Spawn> {
        self.spawner.spawn(&mut self.grid)
    }

    /// Fill the grid with exponents 1..=16 in row-major order.
    ///
    /// The result is a full grid with no legal move.
    pub fn fill_sequence(&mut self) {
        for (i, pos) in Position::all().enumerate() {
            // i < 16, so the exponent stays within range.
            self.grid.put(pos, i as u8 + 1);
        }
    }
}

fn rejected(err: EngineError) -> EngineError {
    warn!("debug command rejected: {err}");
    err
}

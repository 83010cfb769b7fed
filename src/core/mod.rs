//! Core engine types: grid, RNG, configuration, errors.
//!
//! Everything here is free of game flow; the move engine and the
//! [`Game`](crate::game::Game) facade build on these.

pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{EngineConfig, DEFAULT_HISTORY_CAPACITY, DEFAULT_TWO_PROBABILITY};
pub use error::{EngineError, Result};
pub use grid::{Grid, Position, CELL_COUNT, GRID_SIZE, HIGH_TILE_EXPONENT, MAX_EXPONENT};
pub use rng::{GameRng, GameRngState};

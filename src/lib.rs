//! # rust-2048
//!
//! A deterministic game-state engine for the 2048 sliding-tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **No UI**: The engine renders nothing and reads no input. A front end
//!    calls into [`Game`] and replays the returned [`MoveOutcome`].
//!
//! 2. **Validated Mutation**: Every write, including debug commands, goes
//!    through range checks and fails without touching the grid.
//!
//! 3. **Reproducible**: Spawns come from a seedable ChaCha8 stream, so a seed
//!    and a move list always replay the same game.
//!
//! ## Cells
//!
//! Cells store exponents: `v > 0` is the tile `2^v`, `0` is empty, and 17
//! (the 131072 tile) is the largest value a cell may hold.
//!
//! ## Modules
//!
//! - `core`: Grid, positions, RNG, configuration, errors
//! - `engine`: Directions, slide/merge algorithm, spawner, move outcomes
//! - `history`: Bounded undo stack
//! - `persist`: `.2048game` save layout and bincode checkpoints
//! - `game`: The `Game` facade tying everything together

pub mod core;
pub mod engine;
pub mod game;
pub mod history;
pub mod persist;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, EngineError, GameRng, GameRngState, Grid, Position, Result, GRID_SIZE,
    MAX_EXPONENT,
};

pub use crate::engine::{Direction, Merge, Milestone, MoveOutcome, Slide, Spawn};

pub use crate::game::Game;

pub use crate::history::{History, Snapshot};

pub use crate::persist::{SaveState, MAX_COUNTER, SAVE_EXTENSION, SAVE_LEN};

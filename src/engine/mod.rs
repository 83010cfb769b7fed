//! Move engine: directions, the slide/merge algorithm, and tile spawning.
//!
//! The functions here operate on a bare [`Grid`](crate::core::Grid). The
//! [`Game`](crate::game::Game) facade adds scoring, history and milestones.

mod direction;
mod moves;
mod outcome;
mod spawn;

pub use direction::Direction;
pub use moves::{can_shift, shift};
pub use outcome::{Merge, Milestone, MoveOutcome, Slide, Spawn};
pub use spawn::Spawner;

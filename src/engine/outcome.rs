//! What a move did, in replay order.
//!
//! A UI animates a move by replaying `slides` and `merges` in order and then
//! the optional `spawned` tile. The engine never drives timing itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::Direction;
use crate::core::Position;

/// A tile that slid into an empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub from: Position,
    pub to: Position,
}

/// A tile that merged into an equal neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merge {
    pub from: Position,
    pub to: Position,
    /// Exponent of the merged tile.
    pub value: u8,
}

/// A tile placed by the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub position: Position,
    /// Exponent of the new tile (1 or 2).
    pub value: u8,
}

/// Notable tiles reached by a merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Milestone {
    /// The first 2048 tile of the game. Reported at most once per game.
    FirstHighTile { position: Position },
    /// A 131072 tile, the largest the grid can hold. The game continues.
    MaxTile { position: Position },
}

/// Result of applying a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The direction that was applied.
    pub direction: Direction,

    /// Whether any tile moved or merged. False means the call was a no-op.
    pub changed: bool,

    /// Merges in processing order.
    pub merges: SmallVec<[Merge; 8]>,

    /// Slides in processing order.
    pub slides: SmallVec<[Slide; 12]>,

    /// The tile spawned after a changing move, if any cell was free.
    pub spawned: Option<Spawn>,

    /// Points gained from merges.
    pub score_delta: u32,

    /// Milestones reached during this move.
    pub milestones: SmallVec<[Milestone; 2]>,
}

impl MoveOutcome {
    /// An outcome for a move that changed nothing.
    #[must_use]
    pub fn unchanged(direction: Direction) -> Self {
        Self {
            direction,
            changed: false,
            merges: SmallVec::new(),
            slides: SmallVec::new(),
            spawned: None,
            score_delta: 0,
            milestones: SmallVec::new(),
        }
    }

    /// Number of merges performed.
    #[must_use]
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }
}

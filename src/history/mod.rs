//! Bounded undo history.
//!
//! Snapshots are pushed before every move that changed the grid. When the
//! history is at capacity the oldest snapshot is evicted, so after
//! `capacity + 1` pushes the first one can no longer be undone to.
//!
//! Backed by `im::Vector`, which gives O(1) access at both ends and keeps
//! cloning a whole game cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Grid, DEFAULT_HISTORY_CAPACITY};

/// Grid and score captured immediately before a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: u32,
}

impl Snapshot {
    /// Capture a snapshot.
    #[must_use]
    pub fn new(grid: Grid, score: u32) -> Self {
        Self { grid, score }
    }
}

/// Undo stack with evict-oldest overflow.
#[derive(Clone, Debug)]
pub struct History {
    entries: Vector<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create an empty history holding at most `capacity` snapshots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity: capacity.max(1),
        }
    }

    /// Push a snapshot, evicting the oldest when full.
    pub fn push(&mut self, snapshot: Snapshot) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Pop the newest snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }
}

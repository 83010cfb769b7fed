//! The directional slide-and-merge algorithm.
//!
//! Lines along the move direction are independent. Within a line, tiles are
//! processed from the wall outward; each tile either slides to the wall,
//! merges into the nearest tile ahead of it, or stops next to that tile.
//!
//! A tile that was produced by a merge in this move cannot merge again, so
//! `[2, 2, 2, 2]` moved left becomes `[4, 4, 0, 0]`.

use super::direction::Direction;
use super::outcome::{Merge, MoveOutcome, Slide};
use crate::core::{Grid, Position, GRID_SIZE, MAX_EXPONENT};

/// Per-move record of cells that already absorbed a merge.
struct MergeMask([[bool; GRID_SIZE]; GRID_SIZE]);

impl MergeMask {
    fn new() -> Self {
        Self([[false; GRID_SIZE]; GRID_SIZE])
    }

    fn contains(&self, pos: Position) -> bool {
        self.0[pos.row()][pos.col()]
    }

    fn insert(&mut self, pos: Position) {
        self.0[pos.row()][pos.col()] = true;
    }
}

/// Slide and merge every line of `grid` toward `direction`.
///
/// Spawning, history and milestones are the caller's concern; the returned
/// outcome carries the slides, merges and score delta only.
pub fn shift(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let mut merged = MergeMask::new();
    let mut outcome = MoveOutcome::unchanged(direction);

    for line in 0..GRID_SIZE {
        for depth in 1..GRID_SIZE {
            let from = direction.cell(line, depth);
            let value = grid.get(from);
            if value == 0 {
                continue;
            }

            let blocker = (0..depth)
                .rev()
                .find(|&d| grid.get(direction.cell(line, d)) != 0);

            match blocker {
                None => {
                    let to = direction.cell(line, 0);
                    relocate(grid, from, to);
                    outcome.slides.push(Slide { from, to });
                }
                Some(d) => {
                    let target = direction.cell(line, d);
                    if can_merge(grid, &merged, value, target) {
                        let new_value = value + 1;
                        grid.put(target, new_value);
                        grid.put(from, 0);
                        merged.insert(target);
                        outcome.score_delta += 1u32 << new_value;
                        outcome.merges.push(Merge {
                            from,
                            to: target,
                            value: new_value,
                        });
                    } else if d + 1 != depth {
                        let to = direction.cell(line, d + 1);
                        relocate(grid, from, to);
                        outcome.slides.push(Slide { from, to });
                    }
                }
            }
        }
    }

    outcome.changed = !outcome.slides.is_empty() || !outcome.merges.is_empty();
    outcome
}

/// Whether moving toward `direction` would change `grid`.
#[must_use]
pub fn can_shift(grid: &Grid, direction: Direction) -> bool {
    let mut scratch = *grid;
    shift(&mut scratch, direction).changed
}

fn can_merge(grid: &Grid, merged: &MergeMask, value: u8, target: Position) -> bool {
    // Two max tiles stay apart; their merge would leave the grid's range.
    !merged.contains(target) && grid.get(target) == value && value < MAX_EXPONENT
}

fn relocate(grid: &mut Grid, from: Position, to: Position) {
    let value = grid.get(from);
    grid.put(to, value);
    grid.put(from, 0);
}

//! Move directions and line traversal.

use serde::{Deserialize, Serialize};

use crate::core::{Position, GRID_SIZE};

/// The four directions a move can slide tiles toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Convert a u8 to a Direction (0=Up, 1=Down, 2=Left, 3=Right).
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    /// All four directions.
    #[must_use]
    pub const fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Cell of a line at a given depth from the wall the move slides toward.
    ///
    /// `line` indexes columns for vertical moves and rows for horizontal
    /// ones. Depth 0 is the wall cell.
    pub(crate) fn cell(self, line: usize, depth: usize) -> Position {
        let far = GRID_SIZE - 1 - depth;
        match self {
            Direction::Up => Position::at(depth, line),
            Direction::Down => Position::at(far, line),
            Direction::Left => Position::at(line, depth),
            Direction::Right => Position::at(line, far),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

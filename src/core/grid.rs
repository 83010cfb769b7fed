//! The tile grid: a fixed 4x4 matrix of tile exponents.
//!
//! A cell holding `v > 0` displays the tile `2^v`; `0` is an empty cell.
//! Exponents never exceed [`MAX_EXPONENT`] (the 131072 tile).
//!
//! `Grid` is `Copy`, so snapshots taken for undo are plain value copies
//! and never alias the live grid.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Side length of the grid.
pub const GRID_SIZE: usize = 4;

/// Number of cells in the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Largest exponent a cell may hold (tile 131072).
pub const MAX_EXPONENT: u8 = 17;

/// Exponent of the 2048 tile, the first milestone.
pub const HIGH_TILE_EXPONENT: u8 = 11;

/// A cell coordinate, always inside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Create a position, rejecting coordinates outside the grid.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(EngineError::InvalidPosition {
                row,
                col,
                size: GRID_SIZE,
            });
        }
        Ok(Self { row, col })
    }

    /// Unchecked constructor for coordinates produced by engine loops.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0 = top).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column index (0 = left).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Position::at(i / GRID_SIZE, i % GRID_SIZE))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size matrix of tile exponents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from row-major exponents, validating every cell.
    pub fn from_rows(rows: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self> {
        if let Some(&bad) = rows.iter().flatten().find(|&&v| v > MAX_EXPONENT) {
            return Err(EngineError::invalid_exponent(i64::from(bad)));
        }
        Ok(Self { cells: rows })
    }

    /// Row-major view of the exponents.
    #[must_use]
    pub fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Exponent at a position (0 = empty).
    #[must_use]
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Write an exponent, rejecting values above [`MAX_EXPONENT`].
    pub fn set(&mut self, pos: Position, value: u8) -> Result<()> {
        if value > MAX_EXPONENT {
            return Err(EngineError::invalid_exponent(i64::from(value)));
        }
        self.cells[pos.row][pos.col] = value;
        Ok(())
    }

    /// Write without validation. Callers guarantee `value <= MAX_EXPONENT`.
    pub(crate) fn put(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= MAX_EXPONENT);
        self.cells[pos.row][pos.col] = value;
    }

    /// Zero every cell.
    pub fn clear(&mut self) {
        self.cells = [[0; GRID_SIZE]; GRID_SIZE];
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Lazily enumerate empty positions in row-major order.
    ///
    /// Each call starts a fresh iteration over the current contents.
    pub fn enumerate_empty(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&pos| self.get(pos) == 0)
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Largest exponent on the grid (0 for an empty grid).
    #[must_use]
    pub fn max_exponent(&self) -> u8 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of displayed tile values (`2^v` per occupied cell).
    #[must_use]
    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&v| v != 0)
            .map(|&v| 1u64 << v)
            .sum()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for &v in row {
                if v == 0 {
                    write!(f, "{:>7}", ".")?;
                } else {
                    write!(f, "{:>7}", 1u32 << v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

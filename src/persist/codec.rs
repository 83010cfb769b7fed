//! The `.2048game` save format.
//!
//! Fixed layout, native-endian, no header:
//!
//! | offset | size      | field                          |
//! |--------|-----------|--------------------------------|
//! | 0      | 4         | score (`i32`)                  |
//! | 4      | 4         | undo counter (`i32`)           |
//! | 8      | 4 × 16    | grid exponents, row-major (`i32`) |
//! | 72     | 1         | undo lock (`0` or `1`)         |
//!
//! Decoding checks the exact length and every field range before building
//! anything, so a bad buffer never yields a partially populated state.

use crate::core::{
    EngineError, Grid, Position, Result, CELL_COUNT, HIGH_TILE_EXPONENT, MAX_EXPONENT,
};

/// Conventional file extension for save files.
pub const SAVE_EXTENSION: &str = "2048game";

/// Exact length of an encoded save.
pub const SAVE_LEN: usize = 4 + 4 + 4 * CELL_COUNT + 1;

/// Largest score or undo counter the layout can hold.
pub const MAX_COUNTER: u32 = i32::MAX as u32;

const SCORE_OFFSET: usize = 0;
const UNDO_COUNT_OFFSET: usize = 4;
const GRID_OFFSET: usize = 8;
const LOCK_OFFSET: usize = GRID_OFFSET + 4 * CELL_COUNT;

/// The persisted part of a game.
///
/// The undo history is not part of a save; loading always starts with an
/// empty history while keeping the lifetime undo counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveState {
    pub score: u32,
    pub undo_count: u32,
    pub grid: Grid,
    pub undo_locked: bool,
}

impl SaveState {
    /// Whether the grid holds a 2048 tile or better.
    #[must_use]
    pub fn high_tile_reached(&self) -> bool {
        self.grid.max_exponent() >= HIGH_TILE_EXPONENT
    }

    /// Check that both counters fit the on-disk `i32` fields.
    pub fn validate(&self) -> Result<()> {
        for value in [self.score, self.undo_count] {
            if value > MAX_COUNTER {
                return Err(EngineError::InvalidValue {
                    value: i64::from(value),
                    max: i64::from(MAX_COUNTER),
                });
            }
        }
        Ok(())
    }
}

/// Encode a state into the fixed save layout.
///
/// Counters above [`MAX_COUNTER`] are saturated; the engine never produces them.
#[must_use]
pub fn encode(state: &SaveState) -> Vec<u8> {
    let mut out = Vec::with_capacity(SAVE_LEN);
    out.extend_from_slice(&saturate(state.score).to_ne_bytes());
    out.extend_from_slice(&saturate(state.undo_count).to_ne_bytes());
    for &v in state.grid.rows().iter().flatten() {
        out.extend_from_slice(&i32::from(v).to_ne_bytes());
    }
    out.push(u8::from(state.undo_locked));
    debug_assert_eq!(out.len(), SAVE_LEN);
    out
}

/// Decode a save buffer.
pub fn decode(bytes: &[u8]) -> Result<SaveState> {
    if bytes.len() != SAVE_LEN {
        return Err(EngineError::CorruptData("length mismatch"));
    }

    let score = read_counter(bytes, SCORE_OFFSET, "negative score")?;
    let undo_count = read_counter(bytes, UNDO_COUNT_OFFSET, "negative undo counter")?;

    let mut grid = Grid::new();
    for (i, pos) in Position::all().enumerate() {
        let raw = read_i32(bytes, GRID_OFFSET + 4 * i)
            .ok_or(EngineError::CorruptData("truncated grid"))?;
        let value = u8::try_from(raw)
            .ok()
            .filter(|&v| v <= MAX_EXPONENT)
            .ok_or(EngineError::CorruptData("grid value out of range"))?;
        grid.put(pos, value);
    }

    let undo_locked = match bytes[LOCK_OFFSET] {
        0 => false,
        1 => true,
        _ => return Err(EngineError::CorruptData("undo lock flag is not 0 or 1")),
    };

    Ok(SaveState {
        score,
        undo_count,
        grid,
        undo_locked,
    })
}

#[inline]
fn read_i32(bytes: &[u8], offset: usize) -> Option<i32> {
    let raw: [u8; 4] = bytes.get(offset..offset + 4)?.try_into().ok()?;
    Some(i32::from_ne_bytes(raw))
}

fn read_counter(bytes: &[u8], offset: usize, negative: &'static str) -> Result<u32> {
    let raw = read_i32(bytes, offset).ok_or(EngineError::CorruptData("truncated header"))?;
    u32::try_from(raw).map_err(|_| EngineError::CorruptData(negative))
}

fn saturate(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

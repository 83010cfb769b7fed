//! Engine error type.
//!
//! Every variant is a local, recoverable rejection: the operation that
//! produced it left the engine exactly as it was before the call.

use thiserror::Error;

use super::grid::MAX_EXPONENT;

/// Errors raised by validated engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A tile exponent (or score override) outside the accepted range.
    #[error("invalid value {value}: expected 0..={max}")]
    InvalidValue {
        /// The rejected value.
        value: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A row or column outside the grid.
    #[error("invalid position ({row}, {col}): grid is {size}x{size}")]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid side length.
        size: usize,
    },

    /// A save blob that is short, oversized, or holds out-of-range fields.
    #[error("corrupt save data: {0}")]
    CorruptData(&'static str),

    /// A checkpoint that bincode could not encode or decode.
    #[error("checkpoint error: {0}")]
    Checkpoint(#[from] bincode::Error),
}

impl EngineError {
    /// Rejection for a tile exponent above the grid maximum.
    #[must_use]
    pub fn invalid_exponent(value: i64) -> Self {
        Self::InvalidValue {
            value,
            max: i64::from(MAX_EXPONENT),
        }
    }
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, EngineError>;

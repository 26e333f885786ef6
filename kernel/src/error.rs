//! Typed grid construction errors.

use thiserror::Error;

/// Why a caller-supplied arrangement is not a valid grid.
///
/// A valid grid is square, has side length of at least 2, and holds each
/// of `0..side*side` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid side must be at least 2, got {side}")]
    TooSmall { side: usize },

    #[error("grid side {side} is too large")]
    TooLarge { side: usize },

    #[error("row {row} has {len} cells, expected {side}")]
    NotSquare { row: usize, len: usize, side: usize },

    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("value {value} at ({row},{col}) is out of range for side {side}")]
    ValueOutOfRange {
        value: u32,
        row: usize,
        col: usize,
        side: usize,
    },

    #[error("value {value} appears more than once")]
    DuplicateValue { value: u32 },
}

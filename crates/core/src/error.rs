//! Error types for the cube core.
//!
//! Only recoverable conditions live here. Contract violations (doubling an
//! empty cell, scoring a value that is not a power of two) panic instead.

use crate::types::{Position, MAX_CUBE_SIZE, MAX_TILE_VALUE};

/// Errors raised while building or restoring a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Edge length outside `1..=MAX_CUBE_SIZE`.
    #[error("unsupported cube size {0} (expected 1..={max})", max = MAX_CUBE_SIZE)]
    UnsupportedSize(usize),

    /// Cell storage does not hold exactly `size^3` cells.
    #[error("cube of size {size} needs {expected} cells, got {actual}")]
    CellCount {
        size: usize,
        expected: usize,
        actual: usize,
    },

    /// A stored number is not a power of two in `2..=MAX_TILE_VALUE`.
    #[error("invalid cell value {0}: must be a power of two in 2..={max}", max = MAX_TILE_VALUE)]
    InvalidValue(u32),

    /// A coordinate lies outside the lattice.
    #[error("position {0:?} is outside a cube of size {1}")]
    OutOfBounds(Position, usize),
}

/// Errors raised by undo/redo navigation or history restore.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    /// The cursor must point at or before the end of the turn log.
    #[error("history cursor {index} is past the end of {len} turns")]
    CursorOutOfRange { index: usize, len: usize },
}

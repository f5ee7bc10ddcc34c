//! Error types for grid construction and access.

use calor_core::CellCoord;
use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A coordinate is outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: CellCoord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A value buffer does not match the grid's cell count.
    LengthMismatch {
        /// `width * height`.
        expected: usize,
        /// Length supplied.
        got: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::CoordOutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(f, "coordinate {coord} out of bounds: [0, {width}) x [0, {height})")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "expected {expected} values, got {got}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}

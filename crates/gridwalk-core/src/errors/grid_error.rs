//! Grid construction and coordinate errors.

use super::error_code::{self, GridwalkErrorCode};

/// Errors that can occur while building or editing the grid graph.
/// A failed operation leaves the grid unchanged.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimension {rows}x{cols}: both counts must be positive")]
    InvalidDimension { rows: u32, cols: u32 },

    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },
}

impl GridwalkErrorCode for GridError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDimension { .. } => error_code::INVALID_DIMENSION,
            Self::OutOfRange { .. } => error_code::OUT_OF_RANGE,
        }
    }
}

//! Error type shared by the simulation engine

use thiserror::Error;

/// Errors signalled by grid construction, access and seeding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive (got {rows}x{cols})")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("alive probability must be within [0, 1] (got {0})")]
    InvalidProbability(f64),

    #[error("buffer is {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
}

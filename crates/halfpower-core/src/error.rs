//! Error types for sample series validation.

use thiserror::Error;

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Precondition violations on numeric input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// The x and y columns have different lengths.
    #[error("length mismatch: {x} x values, {y} y values")]
    LengthMismatch { x: usize, y: usize },

    /// A value is NaN or infinite.
    #[error("non-finite value at sample {index}")]
    NonFinite { index: usize },

    /// The frequency column does not strictly increase.
    #[error("frequency not strictly increasing at sample {index}")]
    NotIncreasing { index: usize },

    /// A table does not have exactly two columns.
    #[error("expected a two-column table, got {columns} columns")]
    InvalidShape { columns: usize },
}

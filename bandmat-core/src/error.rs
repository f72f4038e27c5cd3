//! Error types for banded matrix operations

use thiserror::Error;

/// Errors that can occur while constructing, indexing or converting banded matrices
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandedError {
    /// Physical buffer does not match the `(l + u + 1) x ncols` storage invariant
    #[error("Shape error: bandwidths ({lower}, {upper}) need a buffer of {expected_rows} x {ncols}, got {actual_rows} rows and {actual_len} elements")]
    Shape {
        lower: isize,
        upper: isize,
        expected_rows: usize,
        actual_rows: usize,
        ncols: usize,
        actual_len: usize,
    },

    /// Logical index outside `[0, nrows) x [0, ncols)`
    #[error("Index out of range: ({row}, {col}) is out of range for a ({nrows}, {ncols}) matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },

    /// Nonzero value assigned to a position outside the storable band
    #[error("Band error: cannot assign a nonzero value to diagonal {band}, bandwidths are ({lower}, {upper})")]
    Band { band: isize, lower: isize, upper: isize },

    /// Payload shape disagrees with the addressed range
    #[error("Dimension mismatch: expected ({expected_rows}, {expected_cols}), got ({actual_rows}, {actual_cols})")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// Mutable view requested over a slice whose band cannot alias the parent storage
    #[error("Misaligned view: shift {shift} is outside [-{upper}, {lower}]; take an owned slice instead")]
    MisalignedView { shift: isize, lower: isize, upper: isize },

    /// Bandwidths the requested operation cannot accept
    #[error("Invalid bandwidths ({lower}, {upper}): {reason}")]
    InvalidBandwidths {
        lower: isize,
        upper: isize,
        reason: &'static str,
    },

    /// Unparsable band range text
    #[error("Invalid band range: {input:?}")]
    InvalidRange { input: String },
}

impl BandedError {
    /// Shorthand for a vector payload whose length disagrees with the addressed range
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        BandedError::DimensionMismatch {
            expected_rows: expected,
            expected_cols: 1,
            actual_rows: actual,
            actual_cols: 1,
        }
    }
}

/// Result type for banded matrix operations
pub type Result<T> = std::result::Result<T, BandedError>;

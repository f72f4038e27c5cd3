//! Extent and payload shape validation
//!
//! Pure checks of logical indices against the matrix extent and of payload
//! sizes against the addressed range.

use core::ops::Range;

use crate::{BandedError, Result};

/// Validate that `(row, col)` lies inside an `nrows x ncols` matrix
#[inline]
pub fn check_index(row: usize, col: usize, nrows: usize, ncols: usize) -> Result<()> {
    if row >= nrows || col >= ncols {
        return Err(BandedError::IndexOutOfRange {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate a row index
#[inline]
pub fn check_row(row: usize, nrows: usize, ncols: usize) -> Result<()> {
    if row >= nrows {
        return Err(BandedError::IndexOutOfRange {
            row,
            col: 0,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate a column index
#[inline]
pub fn check_col(col: usize, nrows: usize, ncols: usize) -> Result<()> {
    if col >= ncols {
        return Err(BandedError::IndexOutOfRange {
            row: 0,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate that the rectangle `rows x cols` lies inside an `nrows x ncols` matrix
///
/// Empty ranges are accepted as long as they are not inverted and start
/// within the extent.
pub fn check_range(rows: &Range<usize>, cols: &Range<usize>, nrows: usize, ncols: usize) -> Result<()> {
    let bad_rows = rows.start > rows.end || rows.end > nrows;
    let bad_cols = cols.start > cols.end || cols.end > ncols;
    if bad_rows || bad_cols {
        return Err(BandedError::IndexOutOfRange {
            row: if bad_rows { rows.end.max(rows.start) } else { rows.start },
            col: if bad_cols { cols.end.max(cols.start) } else { cols.start },
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate a vector payload length
#[inline]
pub fn check_length(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(BandedError::length_mismatch(expected, actual));
    }
    Ok(())
}

/// Validate a matrix payload shape
#[inline]
pub fn check_shape(expected: (usize, usize), actual: (usize, usize)) -> Result<()> {
    if expected != actual {
        return Err(BandedError::DimensionMismatch {
            expected_rows: expected.0,
            expected_cols: expected.1,
            actual_rows: actual.0,
            actual_cols: actual.1,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 0, 3, 4), Ok(()));
        assert_eq!(check_index(2, 3, 3, 4), Ok(()));
        assert_eq!(
            check_index(3, 0, 3, 4),
            Err(BandedError::IndexOutOfRange {
                row: 3,
                col: 0,
                nrows: 3,
                ncols: 4
            })
        );
        assert!(check_index(0, 4, 3, 4).is_err());
        assert!(check_index(0, 0, 0, 0).is_err());
    }

    #[test]
    fn test_check_row_col() {
        assert_eq!(check_row(2, 3, 1), Ok(()));
        assert!(check_row(3, 3, 1).is_err());
        // a column index is checked even when the matrix has no rows
        assert_eq!(check_col(0, 0, 1), Ok(()));
        assert!(check_col(1, 0, 1).is_err());
    }

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(&(0..3), &(1..4), 3, 4), Ok(()));
        assert_eq!(check_range(&(3..3), &(0..0), 3, 4), Ok(()));
        assert!(check_range(&(0..4), &(0..1), 3, 4).is_err());
        assert!(check_range(&(0..1), &(2..5), 3, 4).is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = 2..1;
        assert!(check_range(&inverted, &(0..1), 3, 4).is_err());
    }

    #[test]
    fn test_check_payload() {
        assert_eq!(check_length(3, 3), Ok(()));
        assert_eq!(
            check_length(3, 2),
            Err(BandedError::DimensionMismatch {
                expected_rows: 3,
                expected_cols: 1,
                actual_rows: 2,
                actual_cols: 1
            })
        );
        assert_eq!(check_shape((2, 3), (2, 3)), Ok(()));
        assert!(check_shape((2, 3), (3, 2)).is_err());
    }
}

//! Coordinate translation between logical positions and compact storage
//!
//! The physical buffer is column-major with height `ld = lower + upper + 1`.
//! Logical column `j` lives in physical column `j`, and the in-band entry
//! `(k, j)` sits at physical row `upper + k - j`. Every function here is pure
//! arithmetic on that single mapping.

use core::ops::Range;

use crate::band::{Band, Bandwidths};

/// Physical row of the in-band logical position `(k, j)`
///
/// No bounds check is performed; the caller must already know that
/// `(k, j)` is in band.
#[inline(always)]
pub const fn in_bands_offset(upper: isize, k: usize, j: usize) -> usize {
    (upper + k as isize - j as isize) as usize
}

/// Linear index into the column-major buffer for the in-band position `(k, j)`
#[inline(always)]
pub const fn in_bands_index(bands: Bandwidths, k: usize, j: usize) -> usize {
    j * bands.storage_rows() + in_bands_offset(bands.upper, k, j)
}

/// Clamp a signed bound into `[0, max]`
#[inline(always)]
const fn clamp_index(value: isize, max: usize) -> usize {
    if value < 0 {
        0
    } else if value as usize > max {
        max
    } else {
        value as usize
    }
}

/// Logical rows holding in-band entries of column `j`: `max(0, j-u)..min(m, j+l+1)`
///
/// Returns an empty range (`start == end`) when the column has no in-band rows.
pub const fn column_range(bands: Bandwidths, nrows: usize, _ncols: usize, j: usize) -> Range<usize> {
    let j = j as isize;
    let start = clamp_index(j - bands.upper, nrows);
    let end = clamp_index(j + bands.lower + 1, nrows);
    if end < start {
        start..start
    } else {
        start..end
    }
}

/// Logical columns holding in-band entries of row `k`: `max(0, k-l)..min(n, k+u+1)`
pub const fn row_range(bands: Bandwidths, _nrows: usize, ncols: usize, k: usize) -> Range<usize> {
    let k = k as isize;
    let start = clamp_index(k - bands.lower, ncols);
    let end = clamp_index(k + bands.upper + 1, ncols);
    if end < start {
        start..start
    } else {
        start..end
    }
}

/// Strided run of physical buffer indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSlice {
    /// Linear index of the first element
    pub start: usize,
    /// Distance between consecutive elements
    pub step: usize,
    /// Number of elements
    pub len: usize,
}

impl PhysicalSlice {
    pub const EMPTY: PhysicalSlice = PhysicalSlice {
        start: 0,
        step: 1,
        len: 0,
    };

    /// True when the elements are adjacent in memory
    #[inline]
    pub const fn is_contiguous(&self) -> bool {
        self.step == 1 || self.len <= 1
    }

    /// Contiguous range equivalent, if the slice is contiguous
    pub fn as_range(&self) -> Option<Range<usize>> {
        self.is_contiguous().then(|| self.start..self.start + self.len)
    }

    /// Linear indices in order
    pub fn indices(&self) -> impl Iterator<Item = usize> + Clone {
        let PhysicalSlice { start, step, len } = *self;
        (0..len).map(move |i| start + i * step)
    }
}

/// Buffer indices backing the in-band part of logical column `j`
///
/// Always contiguous: consecutive logical rows map to consecutive physical rows.
pub fn physical_column_slice(bands: Bandwidths, nrows: usize, ncols: usize, j: usize) -> PhysicalSlice {
    let rows = column_range(bands, nrows, ncols, j);
    if rows.is_empty() {
        return PhysicalSlice::EMPTY;
    }
    PhysicalSlice {
        start: in_bands_index(bands, rows.start, j),
        step: 1,
        len: rows.len(),
    }
}

/// Buffer indices backing the in-band part of logical row `k`
///
/// Moving one column right moves one buffer column right and one physical row
/// up, so the step is `ld - 1`.
pub fn physical_row_slice(bands: Bandwidths, nrows: usize, ncols: usize, k: usize) -> PhysicalSlice {
    let cols = row_range(bands, nrows, ncols, k);
    if cols.is_empty() {
        return PhysicalSlice::EMPTY;
    }
    PhysicalSlice {
        start: in_bands_index(bands, k, cols.start),
        step: bands.storage_rows() - 1,
        len: cols.len(),
    }
}

/// Number of logical positions on diagonal `band` of an `nrows x ncols` matrix
///
/// `min(ncols, nrows + i)` for `i <= 0` and `min(ncols - i, nrows)` for `i > 0`,
/// clamped at zero.
pub const fn diagonal_length(nrows: usize, ncols: usize, band: Band) -> usize {
    let i = band.0;
    let (m, n) = (nrows as isize, ncols as isize);
    let len = if i <= 0 {
        let a = m + i;
        if n < a {
            n
        } else {
            a
        }
    } else {
        let a = n - i;
        if a < m {
            a
        } else {
            m
        }
    };
    if len < 0 {
        0
    } else {
        len as usize
    }
}

/// First logical position `(row, col)` on diagonal `band`
#[inline]
pub const fn diagonal_start(band: Band) -> (usize, usize) {
    if band.0 >= 0 {
        (0, band.0 as usize)
    } else {
        ((-band.0) as usize, 0)
    }
}

/// Buffer indices backing diagonal `band`, which must be inside `bands`
///
/// A diagonal is one physical row, so the step is the leading dimension.
pub fn physical_diagonal_slice(bands: Bandwidths, nrows: usize, ncols: usize, band: Band) -> PhysicalSlice {
    let len = diagonal_length(nrows, ncols, band);
    if len == 0 || !bands.contains(band) {
        return PhysicalSlice::EMPTY;
    }
    let (k, j) = diagonal_start(band);
    PhysicalSlice {
        start: in_bands_index(bands, k, j),
        step: bands.storage_rows(),
        len,
    }
}

/// Number of in-band logical positions
pub fn stored_len(bands: Bandwidths, nrows: usize, ncols: usize) -> usize {
    if bands.is_empty_band() {
        return 0;
    }
    bands
        .diagonals()
        .map(|i| diagonal_length(nrows, ncols, Band(i)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tridiag() -> Bandwidths {
        Bandwidths::new(1, 1)
    }

    #[test]
    fn test_in_bands_offset() {
        // main diagonal sits on physical row `upper`
        assert_eq!(in_bands_offset(1, 2, 2), 1);
        // super-diagonal one row above, sub-diagonal one below
        assert_eq!(in_bands_offset(1, 1, 2), 0);
        assert_eq!(in_bands_offset(1, 3, 2), 2);
        assert_eq!(in_bands_index(tridiag(), 3, 2), 2 * 3 + 2);
    }

    #[test]
    fn test_column_range() {
        let b = tridiag();
        assert_eq!(column_range(b, 4, 4, 0), 0..2);
        assert_eq!(column_range(b, 4, 4, 2), 1..4);
        assert_eq!(column_range(b, 4, 4, 3), 2..4);
        // short wide matrix: trailing columns have no band at all
        assert_eq!(column_range(b, 2, 6, 5), 2..2);
        assert!(column_range(Bandwidths::new(-2, 1), 4, 4, 2).is_empty());
    }

    #[test]
    fn test_row_range() {
        let b = Bandwidths::new(2, 1);
        assert_eq!(row_range(b, 5, 5, 0), 0..2);
        assert_eq!(row_range(b, 5, 5, 3), 1..5);
        assert_eq!(row_range(b, 5, 5, 4), 2..5);
        assert_eq!(row_range(b, 9, 3, 8), 3..3);
    }

    #[test]
    fn test_physical_slices() {
        let b = tridiag();
        // column 0 holds rows 0..2 at physical rows 1, 2
        assert_eq!(
            physical_column_slice(b, 4, 4, 0),
            PhysicalSlice { start: 1, step: 1, len: 2 }
        );
        // row 1: columns 0..3 at indices 0*3+2, 1*3+1, 2*3+0
        let row = physical_row_slice(b, 4, 4, 1);
        assert_eq!(row, PhysicalSlice { start: 2, step: 2, len: 3 });
        assert_eq!(row.indices().collect::<Vec<_>>(), vec![2, 4, 6]);
        assert!(!row.is_contiguous());
        assert_eq!(physical_column_slice(b, 4, 4, 2).as_range(), Some(6..9));
    }

    #[test]
    fn test_diagonal_length() {
        assert_eq!(diagonal_length(4, 4, Band(0)), 4);
        assert_eq!(diagonal_length(4, 4, Band(1)), 3);
        assert_eq!(diagonal_length(4, 4, Band(-3)), 1);
        assert_eq!(diagonal_length(4, 4, Band(5)), 0);
        assert_eq!(diagonal_length(3, 5, Band(1)), 3);
        assert_eq!(diagonal_length(3, 5, Band(-1)), 2);
        assert_eq!(diagonal_length(5, 3, Band(-1)), 3);
        assert_eq!(diagonal_length(5, 3, Band(-7)), 0);
    }

    #[test]
    fn test_physical_diagonal_slice() {
        let b = tridiag();
        assert_eq!(
            physical_diagonal_slice(b, 4, 4, Band(1)),
            PhysicalSlice { start: 3, step: 3, len: 3 }
        );
        assert_eq!(
            physical_diagonal_slice(b, 4, 4, Band(-1)),
            PhysicalSlice { start: 2, step: 3, len: 3 }
        );
        assert_eq!(physical_diagonal_slice(b, 4, 4, Band(2)).len, 0);
    }

    #[test]
    fn test_stored_len() {
        assert_eq!(stored_len(tridiag(), 4, 4), 10);
        assert_eq!(stored_len(Bandwidths::new(-3, 1), 4, 4), 0);
        assert_eq!(stored_len(Bandwidths::new(0, 0), 3, 5), 3);
    }
}

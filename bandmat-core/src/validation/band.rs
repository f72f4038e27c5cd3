//! Band membership and storage invariant validation
//!
//! Writing zero outside the band is always allowed (it is a no-op);
//! writing anything else there is a `Band` error. Every check in this
//! module encodes that rule.

use core::ops::Range;

use num_traits::Zero;

use crate::band::{Band, Bandwidths};
use crate::{BandedError, Result};

/// Validate a physical buffer against the `(l + u + 1) x ncols` invariant
///
/// The degenerate empty band (`-l > u`) requires a buffer height of zero.
pub fn check_storage_shape(bands: Bandwidths, storage_rows: usize, ncols: usize, len: usize) -> Result<()> {
    let expected_rows = bands.storage_rows();
    if storage_rows != expected_rows || storage_rows.checked_mul(ncols) != Some(len) {
        return Err(BandedError::Shape {
            lower: bands.lower,
            upper: bands.upper,
            expected_rows,
            actual_rows: storage_rows,
            ncols,
            actual_len: len,
        });
    }
    Ok(())
}

/// Number of stored cells for `ncols` columns, failing on `usize` overflow
pub fn storage_len(bands: Bandwidths, ncols: usize) -> Result<usize> {
    bands
        .storage_rows()
        .checked_mul(ncols)
        .ok_or(BandedError::InvalidBandwidths {
            lower: bands.lower,
            upper: bands.upper,
            reason: "buffer size overflows usize",
        })
}

#[inline]
fn band_error(bands: Bandwidths, band: Band) -> BandedError {
    BandedError::Band {
        band: band.0,
        lower: bands.lower,
        upper: bands.upper,
    }
}

/// Validate a single write: out-of-band positions only accept zero
#[inline]
pub fn check_band_write(bands: Bandwidths, row: usize, col: usize, is_zero: bool) -> Result<()> {
    let band = Band::of(row, col);
    if !is_zero && !bands.contains(band) {
        return Err(band_error(bands, band));
    }
    Ok(())
}

/// Diagonal on which the rectangle `rows x cols` leaves the band, if it does
///
/// Only the two extreme corners are inspected: the bottom-left corner has the
/// lowest diagonal and the top-right corner the highest.
pub fn block_band_violation(bands: Bandwidths, rows: &Range<usize>, cols: &Range<usize>) -> Option<Band> {
    if rows.is_empty() || cols.is_empty() {
        return None;
    }
    let lowest = Band::of(rows.end - 1, cols.start);
    let highest = Band::of(rows.start, cols.end - 1);
    if !bands.contains(lowest) {
        Some(lowest)
    } else if !bands.contains(highest) {
        Some(highest)
    } else {
        None
    }
}

/// Fail on the first out-of-band position carrying a nonzero value
pub fn first_nonzero_outside<'a, T, I>(bands: Bandwidths, entries: I) -> Result<()>
where
    T: Zero + 'a,
    I: IntoIterator<Item = (usize, usize, &'a T)>,
{
    for (row, col, value) in entries {
        check_band_write(bands, row, col, value.is_zero())?;
    }
    Ok(())
}

/// Fail with a `Band` error naming `band`
pub fn reject_band(bands: Bandwidths, band: Band) -> Result<()> {
    Err(band_error(bands, band))
}

//! Core matrix abstraction traits
//!
//! These traits are implemented by the owning banded matrix and by its
//! sub-views, so generic code can read any of them the same way.

use super::element::BandedElement;
use crate::band::{Band, Bandwidths};
use crate::layout;
use crate::Result;

/// Read access shared by every banded matrix representation
pub trait BandedRead {
    /// The element type stored in this matrix
    type Element: BandedElement;

    /// Get an element at the specified position
    ///
    /// Out-of-band positions read as zero; positions outside the logical
    /// extent are an `IndexOutOfRange` error.
    fn get_element(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Lower and upper bandwidths
    fn bandwidths(&self) -> Bandwidths;

    fn nrows(&self) -> usize {
        self.dimensions().0
    }

    fn ncols(&self) -> usize {
        self.dimensions().1
    }

    /// Whether `(row, col)` can hold a nonzero value
    fn is_in_band(&self, row: usize, col: usize) -> bool {
        self.bandwidths().contains(Band::of(row, col))
    }

    /// Number of in-band logical positions
    fn stored_len(&self) -> usize {
        let (m, n) = self.dimensions();
        layout::stored_len(self.bandwidths(), m, n)
    }
}

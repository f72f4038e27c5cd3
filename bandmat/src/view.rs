//! Borrowed banded views and the banded slice mechanism
//!
//! A view borrows the physical columns it covers. Slicing rows `r0..r1` and
//! columns `c0..c1` keeps the parent's buffer layout: with
//! `shift = r0 - c0`, the slice is banded with bandwidths
//! `(l - shift, u + shift)` and its entry `(k, j)` sits at exactly the
//! physical row the parent uses for `(k + r0, j + c0)`. When either shifted
//! bandwidth would be negative the slice is materialized into a zero-padded
//! owned matrix instead of aliasing the parent.

use core::ops::Range;

use bandmat_core::{layout, validation, BandedElement, BandedError, Bandwidths, Result};

use crate::storage::BandedMatrix;

/// Immutable banded view over borrowed storage
#[derive(Debug)]
pub struct BandedView<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    bands: Bandwidths,
}

impl<T> Clone for BandedView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BandedView<'_, T> {}

/// Mutable banded view over borrowed storage
#[derive(Debug)]
pub struct BandedViewMut<'a, T> {
    data: &'a mut [T],
    nrows: usize,
    ncols: usize,
    bands: Bandwidths,
}

/// Result of slicing a banded matrix
#[derive(Debug, Clone)]
pub enum BandedSlice<'a, T> {
    /// Shares the parent's storage
    Aliased(BandedView<'a, T>),
    /// Zero-padded copy; the slice's band did not line up with stored diagonals
    Padded(BandedMatrix<T>),
}

/// Shifted bandwidths of the slice starting at `(row, col)`, and whether they
/// can alias the parent's storage
#[inline]
fn slice_bands(bands: Bandwidths, row: usize, col: usize) -> (isize, Bandwidths, bool) {
    let shift = row as isize - col as isize;
    let shifted = bands.shifted(shift);
    (shift, shifted, shifted.is_nonnegative())
}

impl<'a, T: BandedElement> BandedView<'a, T> {
    pub(crate) fn from_parts(data: &'a [T], nrows: usize, ncols: usize, bands: Bandwidths) -> Self {
        debug_assert_eq!(data.len(), bands.storage_rows() * ncols);
        Self {
            data,
            nrows,
            ncols,
            bands,
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn bandwidths(&self) -> Bandwidths {
        self.bands
    }

    pub fn leading_dimension(&self) -> usize {
        self.bands.storage_rows()
    }

    /// Physical columns covered by this view
    pub fn storage(&self) -> &'a [T] {
        self.data
    }

    /// Slice rows `rows` and columns `cols` out of this view
    ///
    /// Aliases the storage when `-u <= shift <= l`; otherwise copies the slice
    /// into a new matrix whose offending bandwidth is clamped to zero.
    pub fn slice(&self, rows: Range<usize>, cols: Range<usize>) -> Result<BandedSlice<'a, T>> {
        validation::check_range(&rows, &cols, self.nrows, self.ncols)?;
        let (shift, shifted, aligned) = slice_bands(self.bands, rows.start, cols.start);
        let ld = self.leading_dimension();

        if aligned {
            let data = &self.data[cols.start * ld..cols.end * ld];
            return Ok(BandedSlice::Aliased(BandedView::from_parts(
                data,
                rows.len(),
                cols.len(),
                shifted,
            )));
        }

        log::warn!(
            target: "bandmat_perf",
            "slice shift {shift} falls outside [-{}, {}]; copying into a zero-padded band",
            self.bands.upper,
            self.bands.lower
        );
        let (m, n) = (rows.len(), cols.len());
        let mut padded = BandedMatrix::zeros(m, n, shifted.clamped());
        {
            let mut dst = padded.as_view_mut();
            for j in 0..n {
                for k in layout::column_range(shifted, m, n, j) {
                    let value = self.data[layout::in_bands_index(self.bands, k + rows.start, j + cols.start)];
                    dst.write(k, j, value);
                }
            }
        }
        Ok(BandedSlice::Padded(padded))
    }

    /// Copy into an owned matrix with the same bandwidths
    ///
    /// Only logical entries are copied; cells overhanging the view's rows are zero.
    pub fn to_owned(&self) -> BandedMatrix<T> {
        BandedMatrix::from_fn(self.nrows, self.ncols, self.bands, |k, j| self.read(k, j))
    }

    /// Logical equality: same shape and the same value at every position
    pub fn logically_eq(&self, other: BandedView<'_, T>) -> bool {
        if self.dimensions() != other.dimensions() {
            return false;
        }
        let union = self.bands.max(other.bands);
        (0..self.ncols).all(|j| {
            layout::column_range(union, self.nrows, self.ncols, j).all(|k| self.read(k, j) == other.read(k, j))
        })
    }

    /// Value at an in-range position, zero outside the band
    #[inline]
    pub(crate) fn read(&self, k: usize, j: usize) -> T {
        if self.bands.contains_position(k, j) {
            self.data[layout::in_bands_index(self.bands, k, j)]
        } else {
            T::zero()
        }
    }
}

impl<'a, T: BandedElement> BandedViewMut<'a, T> {
    pub(crate) fn from_parts(data: &'a mut [T], nrows: usize, ncols: usize, bands: Bandwidths) -> Self {
        debug_assert_eq!(data.len(), bands.storage_rows() * ncols);
        Self {
            data,
            nrows,
            ncols,
            bands,
        }
    }

    /// Reborrow as an immutable view
    pub fn rb(&self) -> BandedView<'_, T> {
        BandedView::from_parts(&*self.data, self.nrows, self.ncols, self.bands)
    }

    /// Reborrow as a shorter-lived mutable view
    pub fn rb_mut(&mut self) -> BandedViewMut<'_, T> {
        BandedViewMut::from_parts(self.data, self.nrows, self.ncols, self.bands)
    }

    /// Give up mutability, keeping the full borrow
    pub fn into_const(self) -> BandedView<'a, T> {
        BandedView::from_parts(self.data, self.nrows, self.ncols, self.bands)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn bandwidths(&self) -> Bandwidths {
        self.bands
    }

    pub fn leading_dimension(&self) -> usize {
        self.bands.storage_rows()
    }

    pub fn storage(&self) -> &[T] {
        &*self.data
    }

    pub fn storage_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub(crate) fn into_storage_mut(self) -> &'a mut [T] {
        self.data
    }

    /// Mutable sub-view over rows `rows` and columns `cols`
    ///
    /// Fails with `MisalignedView` when the slice's band would need zero
    /// padding; take an owned copy through [`BandedView::slice`] in that case.
    pub fn into_view_mut(self, rows: Range<usize>, cols: Range<usize>) -> Result<BandedViewMut<'a, T>> {
        validation::check_range(&rows, &cols, self.nrows, self.ncols)?;
        let (shift, shifted, aligned) = slice_bands(self.bands, rows.start, cols.start);
        if !aligned {
            return Err(BandedError::MisalignedView {
                shift,
                lower: self.bands.lower,
                upper: self.bands.upper,
            });
        }
        let ld = self.bands.storage_rows();
        let data = self.data;
        let data = &mut data[cols.start * ld..cols.end * ld];
        Ok(BandedViewMut::from_parts(data, rows.len(), cols.len(), shifted))
    }

    pub fn view_mut(&mut self, rows: Range<usize>, cols: Range<usize>) -> Result<BandedViewMut<'_, T>> {
        self.rb_mut().into_view_mut(rows, cols)
    }
}

impl<'a, T: BandedElement> BandedSlice<'a, T> {
    /// Read access regardless of how the slice is backed
    pub fn view(&self) -> BandedView<'_, T> {
        match self {
            BandedSlice::Aliased(view) => *view,
            BandedSlice::Padded(matrix) => matrix.as_view(),
        }
    }

    /// Whether the slice shares the parent's storage
    pub fn is_aliased(&self) -> bool {
        matches!(self, BandedSlice::Aliased(_))
    }

    /// Owned matrix holding the slice
    pub fn into_owned(self) -> BandedMatrix<T> {
        match self {
            BandedSlice::Aliased(view) => view.to_owned(),
            BandedSlice::Padded(matrix) => matrix,
        }
    }
}

impl<T: BandedElement> BandedMatrix<T> {
    /// Slice rows `rows` and columns `cols`; see [`BandedView::slice`]
    pub fn slice(&self, rows: Range<usize>, cols: Range<usize>) -> Result<BandedSlice<'_, T>> {
        self.as_view().slice(rows, cols)
    }

    /// Mutable sub-view; see [`BandedViewMut::into_view_mut`]
    pub fn view_mut(&mut self, rows: Range<usize>, cols: Range<usize>) -> Result<BandedViewMut<'_, T>> {
        self.as_view_mut().into_view_mut(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandmat_core::Band;
    use ndarray::array;

    fn numbered(m: usize, n: usize, bands: impl Into<Bandwidths>) -> BandedMatrix<f64> {
        BandedMatrix::from_fn(m, n, bands, |k, j| (10 * (k + 1) + j + 1) as f64)
    }

    fn assert_unchanged_outside(
        before: &BandedMatrix<f64>,
        after: &BandedMatrix<f64>,
        rows: &Range<usize>,
        cols: &Range<usize>,
        what: &str,
    ) {
        let (m, n) = before.dimensions();
        for k in 0..m {
            for j in 0..n {
                if rows.contains(&k) && cols.contains(&j) {
                    continue;
                }
                assert_eq!(after.get(k, j), before.get(k, j), "{what}: parent ({k}, {j}) changed");
            }
        }
    }

    #[test]
    fn test_centered_slice_keeps_bandwidths() {
        let a = numbered(5, 5, (2usize, 2usize));
        let s = a.slice(1..4, 1..4).unwrap();
        assert!(s.is_aliased());

        let v = s.view();
        assert_eq!(v.dimensions(), (3, 3));
        assert_eq!(v.bandwidths(), Bandwidths::new(2, 2));
        for k in 0..3 {
            for j in 0..3 {
                assert_eq!(v.get(k, j), a.get(k + 1, j + 1));
            }
        }
    }

    #[test]
    fn test_shifted_slice_bandwidths() {
        let a = numbered(6, 6, (2usize, 1usize));
        // rows start one below columns: one fewer sub-diagonal, one more super-diagonal
        let s = a.slice(2..5, 1..5).unwrap();
        let v = s.view();
        assert!(s.is_aliased());
        assert_eq!(v.bandwidths(), Bandwidths::new(1, 2));
        for k in 0..3 {
            for j in 0..4 {
                assert_eq!(v.get(k, j), a.get(k + 2, j + 1));
            }
        }
    }

    #[test]
    fn test_misaligned_slice_is_padded() {
        let a = numbered(6, 6, (1usize, 1usize));
        // shift 3 > l = 1: only diagonals 2..=4 of the slice can hold parent entries
        let s = a.slice(3..6, 0..6).unwrap();
        assert!(!s.is_aliased());
        let v = s.view();
        assert_eq!(v.bandwidths(), Bandwidths::new(0, 4));
        for k in 0..3 {
            for j in 0..6 {
                assert_eq!(v.get(k, j), a.get(k + 3, j));
            }
        }
        // the padded diagonal reads as zero
        assert_eq!(v.diagonal(Band::MAIN), vec![0.0; 3]);
    }

    #[test]
    fn test_view_mut_writes_through() {
        let mut a = numbered(5, 5, (1usize, 1usize));
        {
            let mut v = a.view_mut(1..4, 1..4).unwrap();
            v.set(0, 1, -1.0).unwrap();
            assert!(matches!(v.set(0, 2, 1.0), Err(BandedError::Band { band: 2, .. })));
            assert_eq!(v.set(0, 2, 0.0), Ok(()));
        }
        assert_eq!(a.get(1, 2), Ok(-1.0));
    }

    #[test]
    fn test_view_mut_rejects_misaligned() {
        let mut a = numbered(5, 5, (1usize, 1usize));
        assert!(matches!(
            a.view_mut(3..5, 0..2),
            Err(BandedError::MisalignedView { shift: 3, .. })
        ));
        assert!(a.view_mut(0..2, 3..6).is_err());
    }

    #[test]
    fn test_nested_views() {
        let mut a = numbered(8, 8, (2usize, 2usize));
        let expected = a.get(4, 5).unwrap();
        let mut outer = a.view_mut(2..8, 2..8).unwrap();
        let inner = outer.view_mut(1..4, 2..5).unwrap();
        assert_eq!(inner.rb().get(1, 1), Ok(expected));
        assert_eq!(inner.bandwidths(), Bandwidths::new(3, 1));
    }

    #[test]
    fn test_view_bulk_writes_stay_inside_view() {
        type Write = for<'v> fn(&mut BandedViewMut<'v, f64>) -> Result<()>;
        let writes: [(&str, Write); 12] = [
            ("fill zero", |v| v.fill(0.0)),
            ("fill_block", |v| v.fill_block(0..2, 0..2, 7.0)),
            ("set_block", |v| v.set_block(0..2, 0..2, array![[1.0, 2.0], [3.0, 4.0]].view())),
            ("assign", |v| v.assign(numbered(3, 3, (1usize, 1usize)).to_dense().view())),
            ("copy_from", |v| v.copy_from(numbered(3, 3, (1usize, 1usize)).as_view())),
            ("set_diagonal", |v| v.set_diagonal(Band::MAIN, &[5.0, 5.0, 5.0])),
            ("set_row_segment", |v| v.set_row_segment(1, 0..3, &[1.0, 2.0, 3.0])),
            ("set_column_segment", |v| v.set_column_segment(0..3, 1, &[1.0, 2.0, 3.0])),
            ("set_band_row", |v| v.set_band_row(1, &[1.0, 2.0, 3.0])),
            ("set_band_column", |v| v.set_band_column(1, &[1.0, 2.0, 3.0])),
            ("set_row", |v| v.set_row(0, &[1.0, 2.0, 0.0])),
            ("map_inplace", |v| {
                v.map_inplace(|x| -x);
                Ok(())
            }),
        ];

        // shift 0, then rows one below columns
        for (rows, cols) in [(2..5, 2..5), (3..6, 2..5)] {
            for (what, write) in writes {
                let before = numbered(7, 7, (2usize, 2usize));
                let mut after = before.clone();
                {
                    let mut v = after.view_mut(rows.clone(), cols.clone()).unwrap();
                    write(&mut v).unwrap_or_else(|e| panic!("{what}: {e}"));
                }
                assert_unchanged_outside(&before, &after, &rows, &cols, what);
            }
        }
    }

    #[test]
    fn test_view_fill() {
        let mut a = numbered(5, 5, (1usize, 1usize));
        a.view_mut(1..3, 1..3).unwrap().fill(0.0).unwrap();
        assert_eq!(a.get(0, 1), Ok(12.0));
        assert_eq!(a.get(3, 2), Ok(43.0));
        for k in 1..3 {
            for j in 1..3 {
                assert_eq!(a.get(k, j), Ok(0.0));
            }
        }

        let mut a = numbered(5, 5, (1usize, 1usize));
        a.view_mut(2..3, 2..3).unwrap().fill(9.0).unwrap();
        assert_eq!(a.column(2), Ok(vec![0.0, 23.0, 9.0, 43.0, 0.0]));
    }

    #[test]
    fn test_to_owned_zeroes_overhang() {
        let a = numbered(5, 5, (1usize, 1usize));
        let s = a.slice(1..3, 1..3).unwrap();
        assert!(s.is_aliased());
        let owned = s.view().to_owned();
        assert_eq!(owned.bandwidths(), Bandwidths::new(1, 1));
        // column 0 starts above row 0, column 1 ends below row 1
        assert_eq!(owned.storage(), &[0.0, 22.0, 32.0, 23.0, 33.0, 0.0]);
        assert!(owned.as_view().logically_eq(s.view()));
    }
}

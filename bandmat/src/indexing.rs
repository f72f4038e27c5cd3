//! Indexed reads and writes
//!
//! Every write obeys one rule: a position outside the band accepts zero as a
//! no-op and rejects anything else with a `Band` error. Bulk writes validate
//! their whole payload before touching storage, so a failed call leaves the
//! matrix unchanged.

use core::ops::Range;

use bandmat_core::{layout, validation, Band, BandedElement, Result};
use ndarray::{Array2, ArrayView2, ShapeBuilder};
use num_traits::Zero;

use crate::storage::BandedMatrix;
use crate::view::{BandedView, BandedViewMut};

#[inline]
fn intersect(a: Range<usize>, b: &Range<usize>) -> Range<usize> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    start..end.max(start)
}

impl<'a, T: BandedElement> BandedView<'a, T> {
    /// Entry `(k, j)`, zero outside the band
    pub fn get(&self, k: usize, j: usize) -> Result<T> {
        validation::check_index(k, j, self.nrows(), self.ncols())?;
        Ok(self.read(k, j))
    }

    /// Entry `(k, j)` without any checks
    ///
    /// # Safety
    ///
    /// `(k, j)` must be inside the matrix and inside the band.
    #[inline]
    pub unsafe fn get_unchecked(&self, k: usize, j: usize) -> T {
        debug_assert!(k < self.nrows() && j < self.ncols());
        debug_assert!(self.bandwidths().contains_position(k, j));
        *self.storage().get_unchecked(layout::in_bands_index(self.bandwidths(), k, j))
    }

    /// Rows of column `j` that lie in the band
    pub fn column_range(&self, j: usize) -> Result<Range<usize>> {
        validation::check_col(j, self.nrows(), self.ncols())?;
        Ok(layout::column_range(self.bandwidths(), self.nrows(), self.ncols(), j))
    }

    /// Columns of row `k` that lie in the band
    pub fn row_range(&self, k: usize) -> Result<Range<usize>> {
        validation::check_row(k, self.nrows(), self.ncols())?;
        Ok(layout::row_range(self.bandwidths(), self.nrows(), self.ncols(), k))
    }

    /// In-band part of column `j`, borrowed straight from storage
    pub fn band_column(&self, j: usize) -> Result<&'a [T]> {
        validation::check_col(j, self.nrows(), self.ncols())?;
        let phys = layout::physical_column_slice(self.bandwidths(), self.nrows(), self.ncols(), j);
        Ok(&self.storage()[phys.start..phys.start + phys.len])
    }

    /// In-band part of row `k`
    pub fn band_row(&self, k: usize) -> Result<Vec<T>> {
        validation::check_row(k, self.nrows(), self.ncols())?;
        let phys = layout::physical_row_slice(self.bandwidths(), self.nrows(), self.ncols(), k);
        let data = self.storage();
        Ok(phys.indices().map(|i| data[i]).collect())
    }

    /// Whole row `k`, zeros outside the band
    pub fn row(&self, k: usize) -> Result<Vec<T>> {
        self.row_segment(k, 0..self.ncols())
    }

    /// Whole column `j`, zeros outside the band
    pub fn column(&self, j: usize) -> Result<Vec<T>> {
        self.column_segment(0..self.nrows(), j)
    }

    /// Entries `(k, cols)`
    pub fn row_segment(&self, k: usize, cols: Range<usize>) -> Result<Vec<T>> {
        validation::check_range(&(k..k + 1), &cols, self.nrows(), self.ncols())?;
        Ok(cols.map(|j| self.read(k, j)).collect())
    }

    /// Entries `(rows, j)`
    pub fn column_segment(&self, rows: Range<usize>, j: usize) -> Result<Vec<T>> {
        validation::check_range(&rows, &(j..j + 1), self.nrows(), self.ncols())?;
        let band = layout::column_range(self.bandwidths(), self.nrows(), self.ncols(), j);
        let stored = intersect(band, &rows);
        let mut out = vec![T::zero(); rows.len()];
        if !stored.is_empty() {
            let first = layout::in_bands_index(self.bandwidths(), stored.start, j);
            let offset = stored.start - rows.start;
            out[offset..offset + stored.len()].copy_from_slice(&self.storage()[first..first + stored.len()]);
        }
        Ok(out)
    }

    pub fn diagonal_length(&self, band: Band) -> usize {
        layout::diagonal_length(self.nrows(), self.ncols(), band)
    }

    /// Diagonal `band` as a vector, all zeros when it lies outside the band
    pub fn diagonal(&self, band: Band) -> Vec<T> {
        let len = self.diagonal_length(band);
        if !self.bandwidths().contains(band) {
            return vec![T::zero(); len];
        }
        let phys = layout::physical_diagonal_slice(self.bandwidths(), self.nrows(), self.ncols(), band);
        let data = self.storage();
        phys.indices().map(|i| data[i]).collect()
    }

    /// Dense copy of the rectangle `rows x cols`
    pub fn block(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Array2<T>> {
        validation::check_range(&rows, &cols, self.nrows(), self.ncols())?;
        let (r0, c0) = (rows.start, cols.start);
        Ok(Array2::from_shape_fn((rows.len(), cols.len()).f(), |(i, j)| {
            self.read(r0 + i, c0 + j)
        }))
    }

    /// `(row, col, value)` of every in-band position, column by column
    pub fn iter_stored(&self) -> impl Iterator<Item = (usize, usize, T)> + 'a {
        let view = *self;
        (0..view.ncols()).flat_map(move |j| {
            layout::column_range(view.bandwidths(), view.nrows(), view.ncols(), j)
                .map(move |k| (k, j, view.storage()[layout::in_bands_index(view.bandwidths(), k, j)]))
        })
    }

    /// Number of in-band positions holding a nonzero value
    pub fn count_nonzero(&self) -> usize {
        self.iter_stored().filter(|(_, _, v)| !v.is_zero()).count()
    }
}

impl<'a, T: BandedElement> BandedViewMut<'a, T> {
    #[inline]
    pub(crate) fn write(&mut self, k: usize, j: usize, value: T) {
        let idx = layout::in_bands_index(self.bandwidths(), k, j);
        self.storage_mut()[idx] = value;
    }

    pub fn get(&self, k: usize, j: usize) -> Result<T> {
        self.rb().get(k, j)
    }

    /// Store `value` at `(k, j)`; zero outside the band is a no-op
    pub fn set(&mut self, k: usize, j: usize, value: T) -> Result<()> {
        validation::check_index(k, j, self.nrows(), self.ncols())?;
        if self.bandwidths().contains_position(k, j) {
            self.write(k, j, value);
            return Ok(());
        }
        validation::check_band_write(self.bandwidths(), k, j, value.is_zero())
    }

    /// Store `value` at `(k, j)` without any checks
    ///
    /// # Safety
    ///
    /// `(k, j)` must be inside the matrix and inside the band.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, k: usize, j: usize, value: T) {
        debug_assert!(k < self.nrows() && j < self.ncols());
        debug_assert!(self.bandwidths().contains_position(k, j));
        let idx = layout::in_bands_index(self.bandwidths(), k, j);
        *self.storage_mut().get_unchecked_mut(idx) = value;
    }

    /// In-band part of column `j` as a mutable slice of storage
    pub fn into_band_column_mut(self, j: usize) -> Result<&'a mut [T]> {
        validation::check_col(j, self.nrows(), self.ncols())?;
        let phys = layout::physical_column_slice(self.bandwidths(), self.nrows(), self.ncols(), j);
        let data = self.into_storage_mut();
        Ok(&mut data[phys.start..phys.start + phys.len])
    }

    pub fn band_column_mut(&mut self, j: usize) -> Result<&mut [T]> {
        self.rb_mut().into_band_column_mut(j)
    }

    /// Overwrite the in-band part of column `j`
    pub fn set_band_column(&mut self, j: usize, values: &[T]) -> Result<()> {
        let target = self.band_column_mut(j)?;
        validation::check_length(target.len(), values.len())?;
        target.copy_from_slice(values);
        Ok(())
    }

    /// Overwrite the in-band part of row `k`
    pub fn set_band_row(&mut self, k: usize, values: &[T]) -> Result<()> {
        validation::check_row(k, self.nrows(), self.ncols())?;
        let phys = layout::physical_row_slice(self.bandwidths(), self.nrows(), self.ncols(), k);
        validation::check_length(phys.len, values.len())?;
        let data = self.storage_mut();
        for (i, &v) in phys.indices().zip(values) {
            data[i] = v;
        }
        Ok(())
    }

    /// Assign a full-length row; entries outside the band must be zero
    pub fn set_row(&mut self, k: usize, values: &[T]) -> Result<()> {
        let ncols = self.ncols();
        self.set_row_segment(k, 0..ncols, values)
    }

    /// Assign a full-length column; entries outside the band must be zero
    pub fn set_column(&mut self, j: usize, values: &[T]) -> Result<()> {
        let nrows = self.nrows();
        self.set_column_segment(0..nrows, j, values)
    }

    /// Assign `(k, cols)`; entries landing outside the band must be zero
    pub fn set_row_segment(&mut self, k: usize, cols: Range<usize>, values: &[T]) -> Result<()> {
        validation::check_range(&(k..k + 1), &cols, self.nrows(), self.ncols())?;
        validation::check_length(cols.len(), values.len())?;
        let band = layout::row_range(self.bandwidths(), self.nrows(), self.ncols(), k);
        let outside = cols
            .clone()
            .zip(values)
            .filter(|(j, _)| !band.contains(j))
            .map(|(j, v)| (k, j, v));
        validation::first_nonzero_outside(self.bandwidths(), outside)?;

        for j in intersect(band, &cols) {
            self.write(k, j, values[j - cols.start]);
        }
        Ok(())
    }

    /// Assign `(rows, j)`; entries landing outside the band must be zero
    pub fn set_column_segment(&mut self, rows: Range<usize>, j: usize, values: &[T]) -> Result<()> {
        validation::check_range(&rows, &(j..j + 1), self.nrows(), self.ncols())?;
        validation::check_length(rows.len(), values.len())?;
        let band = layout::column_range(self.bandwidths(), self.nrows(), self.ncols(), j);
        let outside = rows
            .clone()
            .zip(values)
            .filter(|(k, _)| !band.contains(k))
            .map(|(k, v)| (k, j, v));
        validation::first_nonzero_outside(self.bandwidths(), outside)?;

        let stored = intersect(band, &rows);
        if !stored.is_empty() {
            let first = layout::in_bands_index(self.bandwidths(), stored.start, j);
            let offset = stored.start - rows.start;
            self.storage_mut()[first..first + stored.len()]
                .copy_from_slice(&values[offset..offset + stored.len()]);
        }
        Ok(())
    }

    /// Overwrite diagonal `band`
    ///
    /// `values` must have exactly `diagonal_length(band)` entries. A diagonal
    /// outside the band only accepts zeros.
    pub fn set_diagonal(&mut self, band: Band, values: &[T]) -> Result<()> {
        let len = layout::diagonal_length(self.nrows(), self.ncols(), band);
        validation::check_length(len, values.len())?;
        if !self.bandwidths().contains(band) {
            if values.iter().all(T::is_zero) {
                return Ok(());
            }
            return validation::reject_band(self.bandwidths(), band);
        }
        let phys = layout::physical_diagonal_slice(self.bandwidths(), self.nrows(), self.ncols(), band);
        let data = self.storage_mut();
        for (i, &v) in phys.indices().zip(values) {
            data[i] = v;
        }
        Ok(())
    }

    /// Set every entry to `value`
    ///
    /// Zero clears every in-band entry. A nonzero value is only accepted when
    /// every position of the matrix is in band. Storage cells outside this
    /// view's rows are left alone.
    pub fn fill(&mut self, value: T) -> Result<()> {
        let (m, n) = self.dimensions();
        let bands = self.bandwidths();
        if !value.is_zero() {
            if let Some(band) = validation::block_band_violation(bands, &(0..m), &(0..n)) {
                return validation::reject_band(bands, band);
            }
        }
        let data = self.storage_mut();
        for j in 0..n {
            let phys = layout::physical_column_slice(bands, m, n, j);
            data[phys.start..phys.start + phys.len].fill(value);
        }
        Ok(())
    }

    /// Set every entry of `rows x cols` to `value`
    ///
    /// Zero is written to the in-band part of the rectangle only; a nonzero
    /// value fails when any corner of the rectangle leaves the band.
    pub fn fill_block(&mut self, rows: Range<usize>, cols: Range<usize>, value: T) -> Result<()> {
        validation::check_range(&rows, &cols, self.nrows(), self.ncols())?;
        if !value.is_zero() {
            if let Some(band) = validation::block_band_violation(self.bandwidths(), &rows, &cols) {
                return validation::reject_band(self.bandwidths(), band);
            }
        }
        for j in cols {
            let band = layout::column_range(self.bandwidths(), self.nrows(), self.ncols(), j);
            let stored = intersect(band, &rows);
            if stored.is_empty() {
                continue;
            }
            let first = layout::in_bands_index(self.bandwidths(), stored.start, j);
            self.storage_mut()[first..first + stored.len()].fill(value);
        }
        Ok(())
    }

    /// Copy a dense payload into `rows x cols`
    ///
    /// The payload shape must match the rectangle, and every payload entry
    /// that lands outside the band must be zero.
    pub fn set_block(&mut self, rows: Range<usize>, cols: Range<usize>, values: ArrayView2<'_, T>) -> Result<()> {
        validation::check_range(&rows, &cols, self.nrows(), self.ncols())?;
        validation::check_shape((rows.len(), cols.len()), values.dim())?;
        let bands = self.bandwidths();
        let (r0, c0) = (rows.start, cols.start);
        let outside = values
            .indexed_iter()
            .map(|((i, j), v)| (r0 + i, c0 + j, v))
            .filter(|&(k, j, _)| !bands.contains_position(k, j));
        validation::first_nonzero_outside(bands, outside)?;

        for j in cols {
            let band = layout::column_range(bands, self.nrows(), self.ncols(), j);
            for k in intersect(band, &rows) {
                self.write(k, j, values[[k - r0, j - c0]]);
            }
        }
        Ok(())
    }

    /// Replace the whole matrix from a dense payload of the same shape
    pub fn assign(&mut self, values: ArrayView2<'_, T>) -> Result<()> {
        let (m, n) = self.dimensions();
        self.set_block(0..m, 0..n, values)
    }

    /// Replace the whole matrix from another banded matrix of the same shape
    ///
    /// The source may have any bandwidths; its nonzero entries must fit in ours.
    pub fn copy_from(&mut self, src: BandedView<'_, T>) -> Result<()> {
        validation::check_shape(self.dimensions(), src.dimensions())?;
        let bands = self.bandwidths();
        for (k, j, v) in src.iter_stored() {
            if !bands.contains_position(k, j) {
                validation::check_band_write(bands, k, j, v.is_zero())?;
            }
        }

        let (m, n) = self.dimensions();
        for j in 0..n {
            for k in layout::column_range(bands, m, n, j) {
                self.write(k, j, src.read(k, j));
            }
        }
        Ok(())
    }

    /// Apply `f` to every in-band entry
    pub fn map_inplace<F>(&mut self, mut f: F)
    where
        F: FnMut(T) -> T,
    {
        let (m, n) = self.dimensions();
        let bands = self.bandwidths();
        let data = self.storage_mut();
        for j in 0..n {
            let phys = layout::physical_column_slice(bands, m, n, j);
            for x in &mut data[phys.start..phys.start + phys.len] {
                *x = f(*x);
            }
        }
    }
}

impl<T: BandedElement> BandedMatrix<T> {
    forward_to_view!(
        /// Entry `(k, j)`, zero outside the band
        fn get(&self, k: usize, j: usize) -> Result<T>
    );
    forward_to_view!(fn column_range(&self, j: usize) -> Result<Range<usize>>);
    forward_to_view!(fn row_range(&self, k: usize) -> Result<Range<usize>>);
    forward_to_view!(fn band_column(&self, j: usize) -> Result<&[T]>);
    forward_to_view!(fn band_row(&self, k: usize) -> Result<Vec<T>>);
    forward_to_view!(fn row(&self, k: usize) -> Result<Vec<T>>);
    forward_to_view!(fn column(&self, j: usize) -> Result<Vec<T>>);
    forward_to_view!(fn row_segment(&self, k: usize, cols: Range<usize>) -> Result<Vec<T>>);
    forward_to_view!(fn column_segment(&self, rows: Range<usize>, j: usize) -> Result<Vec<T>>);
    forward_to_view!(fn diagonal_length(&self, band: Band) -> usize);
    forward_to_view!(fn diagonal(&self, band: Band) -> Vec<T>);
    forward_to_view!(fn block(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Array2<T>>);
    forward_to_view!(fn count_nonzero(&self) -> usize);

    forward_to_view!(
        /// Store `value` at `(k, j)`; zero outside the band is a no-op
        fn set(&mut self, k: usize, j: usize, value: T) -> Result<()>
    );
    forward_to_view!(fn set_band_column(&mut self, j: usize, values: &[T]) -> Result<()>);
    forward_to_view!(fn set_band_row(&mut self, k: usize, values: &[T]) -> Result<()>);
    forward_to_view!(fn set_row(&mut self, k: usize, values: &[T]) -> Result<()>);
    forward_to_view!(fn set_column(&mut self, j: usize, values: &[T]) -> Result<()>);
    forward_to_view!(fn set_row_segment(&mut self, k: usize, cols: Range<usize>, values: &[T]) -> Result<()>);
    forward_to_view!(fn set_column_segment(&mut self, rows: Range<usize>, j: usize, values: &[T]) -> Result<()>);
    forward_to_view!(fn set_diagonal(&mut self, band: Band, values: &[T]) -> Result<()>);
    forward_to_view!(fn fill(&mut self, value: T) -> Result<()>);
    forward_to_view!(fn fill_block(&mut self, rows: Range<usize>, cols: Range<usize>, value: T) -> Result<()>);
    forward_to_view!(
        fn set_block(&mut self, rows: Range<usize>, cols: Range<usize>, values: ArrayView2<'_, T>) -> Result<()>
    );
    forward_to_view!(fn assign(&mut self, values: ArrayView2<'_, T>) -> Result<()>);
    forward_to_view!(fn copy_from(&mut self, src: BandedView<'_, T>) -> Result<()>);

    /// # Safety
    ///
    /// `(k, j)` must be inside the matrix and inside the band.
    #[inline]
    pub unsafe fn get_unchecked(&self, k: usize, j: usize) -> T {
        self.as_view().get_unchecked(k, j)
    }

    /// # Safety
    ///
    /// `(k, j)` must be inside the matrix and inside the band.
    #[inline]
    pub unsafe fn set_unchecked(&mut self, k: usize, j: usize, value: T) {
        self.as_view_mut().set_unchecked(k, j, value)
    }

    pub fn band_column_mut(&mut self, j: usize) -> Result<&mut [T]> {
        self.as_view_mut().into_band_column_mut(j)
    }

    pub fn iter_stored(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.as_view().iter_stored()
    }

    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(T) -> T,
    {
        self.as_view_mut().map_inplace(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandmat_core::{BandedError, Bandwidths};
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn tridiag_identity() -> BandedMatrix<f64> {
        BandedMatrix::identity(4, 4, (1usize, 1usize)).unwrap()
    }

    #[test]
    fn test_tridiagonal_point_writes() {
        let mut a = tridiag_identity();
        a.set(1, 2, 5.0).unwrap();
        assert_eq!(a.get(1, 2), Ok(5.0));
        assert_eq!(a.get(2, 1), Ok(0.0));

        let err = a.set(0, 3, 5.0);
        assert!(matches!(err, Err(BandedError::Band { band: 3, lower: 1, upper: 1 })));
        assert_eq!(a.set(0, 3, 0.0), Ok(()));
        assert_eq!(a.get(0, 3), Ok(0.0));
    }

    #[test]
    fn test_out_of_range() {
        let mut a = tridiag_identity();
        assert!(matches!(a.get(4, 0), Err(BandedError::IndexOutOfRange { row: 4, .. })));
        assert!(a.set(0, 4, 0.0).is_err());
        assert!(a.column_range(4).is_err());
        assert!(a.row_segment(0, 2..5).is_err());
        assert!(a.block(3..5, 0..1).is_err());
    }

    #[test]
    fn test_band_containment_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let m = rng.gen_range(0..8);
            let n = rng.gen_range(0..8);
            let lower = rng.gen_range(0..4isize);
            let upper = rng.gen_range(0..4isize);
            let a = BandedMatrix::<f64>::random(m, n, (lower, upper), &mut rng);
            for k in 0..m {
                for j in 0..n {
                    let band = j as isize - k as isize;
                    if band < -lower || band > upper {
                        assert_eq!(a.get(k, j), Ok(0.0));
                    }
                }
            }
        }
    }

    #[test]
    fn test_write_rejection_everywhere() {
        let mut a = BandedMatrix::<i64>::zeros(5, 6, (1usize, 2usize));
        for k in 0..5 {
            for j in 0..6 {
                let band = j as isize - k as isize;
                if (-1..=2).contains(&band) {
                    assert_eq!(a.set(k, j, 3), Ok(()));
                } else {
                    assert!(matches!(a.set(k, j, 3), Err(BandedError::Band { band: b, .. }) if b == band));
                    assert_eq!(a.set(k, j, 0), Ok(()));
                }
            }
        }
        assert_eq!(a.count_nonzero(), a.as_view().iter_stored().count());
    }

    #[test]
    fn test_diagonal_round_trip() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut a = BandedMatrix::<f64>::zeros(6, 4, (3usize, 2usize));
        for i in -3..=2 {
            let band = Band(i);
            let v: Vec<f64> = (0..a.diagonal_length(band)).map(|_| rng.gen()).collect();
            a.set_diagonal(band, &v).unwrap();
            assert_eq!(a.diagonal(band), v);
        }
        assert!(matches!(
            a.set_diagonal(Band(1), &[1.0]),
            Err(BandedError::DimensionMismatch { .. })
        ));
        // outside the band: zeros are accepted, anything else is not
        assert_eq!(a.set_diagonal(Band(3), &[0.0]), Ok(()));
        assert!(matches!(a.set_diagonal(Band(3), &[1.0]), Err(BandedError::Band { band: 3, .. })));
        assert_eq!(a.diagonal(Band(-5)), vec![0.0]);
    }

    #[test]
    fn test_band_column_and_row() {
        let mut a = BandedMatrix::<f64>::from_fn(4, 4, (1usize, 1usize), |k, j| (10 * k + j) as f64);
        assert_eq!(a.band_column(0), Ok(&[0.0, 10.0][..]));
        assert_eq!(a.band_column(2), Ok(&[12.0, 22.0, 32.0][..]));
        assert_eq!(a.band_row(1), Ok(vec![10.0, 11.0, 12.0]));
        assert_eq!(a.column_range(3), Ok(2..4));
        assert_eq!(a.row_range(0), Ok(0..2));

        a.set_band_column(3, &[-1.0, -2.0]).unwrap();
        assert_eq!(a.get(2, 3), Ok(-1.0));
        assert_eq!(a.get(3, 3), Ok(-2.0));
        assert!(a.set_band_column(3, &[1.0]).is_err());

        a.set_band_row(3, &[7.0, 8.0]).unwrap();
        assert_eq!(a.row(3), Ok(vec![0.0, 0.0, 7.0, 8.0]));

        a.band_column_mut(0).unwrap()[1] = 99.0;
        assert_eq!(a.get(1, 0), Ok(99.0));
    }

    #[test]
    fn test_full_row_assignment() {
        let mut a = BandedMatrix::<f64>::zeros(4, 5, (1usize, 1usize));
        a.set_row(2, &[0.0, 1.0, 2.0, 3.0, 0.0]).unwrap();
        assert_eq!(a.row(2), Ok(vec![0.0, 1.0, 2.0, 3.0, 0.0]));

        // any nonzero outside the row's band fails, before or after it
        let before = a.clone();
        assert!(matches!(
            a.set_row(2, &[4.0, 1.0, 2.0, 3.0, 0.0]),
            Err(BandedError::Band { band: -2, .. })
        ));
        assert!(matches!(
            a.set_row(2, &[0.0, 1.0, 2.0, 3.0, 4.0]),
            Err(BandedError::Band { band: 2, .. })
        ));
        assert_eq!(a, before);
        assert!(a.set_row(2, &[0.0; 4]).is_err());
    }

    #[test]
    fn test_column_segments() {
        let mut a = BandedMatrix::<i32>::zeros(6, 3, (2usize, 0usize));
        a.set_column_segment(1..5, 1, &[1, 2, 3, 0]).unwrap();
        assert_eq!(a.column(1), Ok(vec![0, 1, 2, 3, 0, 0]));
        assert_eq!(a.column_segment(2..6, 1), Ok(vec![2, 3, 0, 0]));
        assert!(a.set_column_segment(0..2, 1, &[5, 1]).is_err());
        assert_eq!(a.row_segment(3, 0..3), Ok(vec![0, 3, 0]));

        a.set_column(0, &[1, 1, 1, 0, 0, 0]).unwrap();
        assert_eq!(a.count_nonzero(), 6);
    }

    #[test]
    fn test_fill() {
        let mut a = BandedMatrix::<f64>::ones(3, 3, (1usize, 1usize));
        assert!(matches!(a.fill(2.0), Err(BandedError::Band { .. })));
        a.fill(0.0).unwrap();
        assert_eq!(a.count_nonzero(), 0);

        // a band covering the whole rectangle accepts any value
        let mut full = BandedMatrix::<f64>::zeros(3, 3, (2usize, 2usize));
        full.fill(4.0).unwrap();
        assert_eq!(full.block(0..3, 0..3).unwrap(), Array2::from_elem((3, 3), 4.0));
    }

    #[test]
    fn test_fill_block() {
        let mut a = BandedMatrix::<f64>::ones(5, 5, (1usize, 1usize));
        a.fill_block(1..3, 1..3, 7.0).unwrap();
        assert_eq!(a.get(1, 2), Ok(7.0));
        assert_eq!(a.get(2, 1), Ok(7.0));

        assert!(matches!(
            a.fill_block(0..3, 0..3, 7.0),
            Err(BandedError::Band { band: -2, .. })
        ));
        a.fill_block(0..5, 0..5, 0.0).unwrap();
        assert_eq!(a.count_nonzero(), 0);
    }

    #[test]
    fn test_set_block() {
        let mut a = BandedMatrix::<f64>::zeros(4, 4, (1usize, 1usize));
        let payload = array![[1.0, 2.0, 0.0], [3.0, 4.0, 5.0], [0.0, 6.0, 7.0]];
        a.set_block(1..4, 1..4, payload.view()).unwrap();
        assert_eq!(a.block(1..4, 1..4).unwrap(), payload);

        let before = a.clone();
        let bad = array![[1.0, 2.0, 9.0], [3.0, 4.0, 5.0], [0.0, 6.0, 7.0]];
        assert!(matches!(
            a.set_block(1..4, 1..4, bad.view()),
            Err(BandedError::Band { band: 2, .. })
        ));
        assert_eq!(a, before);

        let wrong = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            a.set_block(1..4, 1..4, wrong.view()),
            Err(BandedError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_assign_and_copy_from() {
        let dense = array![[1.0, 2.0, 0.0], [0.0, 3.0, 4.0], [0.0, 0.0, 5.0]];
        let mut a = BandedMatrix::<f64>::zeros(3, 3, (0usize, 1usize));
        a.assign(dense.view()).unwrap();
        assert_eq!(a.block(0..3, 0..3).unwrap(), dense);

        let mut wide = BandedMatrix::<f64>::zeros(3, 3, (2usize, 2usize));
        wide.copy_from(a.as_view()).unwrap();
        assert_eq!(wide, a);

        wide.set(2, 0, 1.0).unwrap();
        assert!(matches!(a.copy_from(wide.as_view()), Err(BandedError::Band { band: -2, .. })));
    }

    #[test]
    fn test_iter_stored_and_map() {
        let mut a = BandedMatrix::<i32>::from_fn(3, 3, (0usize, 1usize), |k, j| (k + j) as i32);
        let stored: Vec<_> = a.iter_stored().collect();
        assert_eq!(stored, vec![(0, 0, 0), (0, 1, 1), (1, 1, 2), (1, 2, 3), (2, 2, 4)]);

        a.map_inplace(|x| x * 10);
        assert_eq!(a.get(1, 2), Ok(30));
        assert_eq!(a.get(2, 1), Ok(0));
    }

    #[test]
    fn test_unchecked_access() {
        let mut a = BandedMatrix::<f64>::zeros(3, 3, Bandwidths::new(1, 0));
        unsafe {
            a.set_unchecked(2, 1, 6.0);
            assert_eq!(a.get_unchecked(2, 1), 6.0);
        }
        assert_eq!(a.get(2, 1), Ok(6.0));
    }
}

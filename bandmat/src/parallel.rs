//! Column-partitioned parallel mutation
//!
//! Physical columns never overlap in storage, so each rayon worker can own a
//! disjoint set of columns without synchronization.

use core::ops::Range;

use bandmat_core::{layout, BandedElement};
use rayon::prelude::*;

use crate::storage::BandedMatrix;
use crate::view::BandedViewMut;

impl<T: BandedElement> BandedViewMut<'_, T> {
    /// Run `f(j, rows, values)` for every column in parallel
    ///
    /// `rows` is the in-band row range of column `j` and `values` its stored
    /// entries, one per row of `rows`.
    pub fn par_for_each_column<F>(&mut self, f: F)
    where
        F: Fn(usize, Range<usize>, &mut [T]) + Sync + Send,
    {
        let (m, n) = self.dimensions();
        let bands = self.bandwidths();
        let ld = bands.storage_rows();
        if ld == 0 {
            (0..n).for_each(|j| f(j, 0..0, &mut []));
            return;
        }
        self.storage_mut()
            .par_chunks_mut(ld)
            .enumerate()
            .for_each(|(j, column)| {
                let rows = layout::column_range(bands, m, n, j);
                if rows.is_empty() {
                    f(j, rows, &mut []);
                    return;
                }
                let offset = layout::in_bands_offset(bands.upper, rows.start, j);
                let len = rows.len();
                f(j, rows, &mut column[offset..offset + len]);
            });
    }

    /// Parallel [`map_inplace`](Self::map_inplace)
    pub fn par_map_inplace<F>(&mut self, f: F)
    where
        F: Fn(T) -> T + Sync + Send,
    {
        self.par_for_each_column(|_, _, values| {
            for x in values {
                *x = f(*x);
            }
        });
    }
}

impl<T: BandedElement> BandedMatrix<T> {
    pub fn par_for_each_column<F>(&mut self, f: F)
    where
        F: Fn(usize, Range<usize>, &mut [T]) + Sync + Send,
    {
        self.as_view_mut().par_for_each_column(f)
    }

    pub fn par_map_inplace<F>(&mut self, f: F)
    where
        F: Fn(T) -> T + Sync + Send,
    {
        self.as_view_mut().par_map_inplace(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandmat_core::Bandwidths;

    #[test]
    fn test_par_for_each_column() {
        let mut a = BandedMatrix::<f64>::zeros(6, 5, (2usize, 1usize));
        a.par_for_each_column(|j, rows, values| {
            assert_eq!(rows.len(), values.len());
            for (k, v) in rows.zip(values.iter_mut()) {
                *v = (10 * k + j) as f64;
            }
        });
        let expected = BandedMatrix::from_fn(6, 5, (2usize, 1usize), |k, j| (10 * k + j) as f64);
        assert_eq!(a, expected);
    }

    #[test]
    fn test_par_map_matches_serial() {
        let mut a = BandedMatrix::<i64>::from_fn(7, 7, (1usize, 3usize), |k, j| (k * 7 + j) as i64);
        let mut b = a.clone();
        a.par_map_inplace(|x| x * x - 1);
        b.map_inplace(|x| x * x - 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_par_on_view_and_empty_band() {
        let mut a = BandedMatrix::<f64>::zeros(5, 5, (1usize, 1usize));
        {
            let mut v = a.view_mut(1..4, 1..4).unwrap();
            v.par_map_inplace(|x| x + 1.0);
        }
        assert_eq!(a.get(0, 0), Ok(0.0));
        assert_eq!(a.get(2, 2), Ok(1.0));
        assert_eq!(a.count_nonzero(), 7);

        let mut empty = BandedMatrix::<f64>::zeros(3, 3, Bandwidths::new(-2, 1));
        empty.par_for_each_column(|_, rows, values| {
            assert!(rows.is_empty());
            assert!(values.is_empty());
        });
    }
}

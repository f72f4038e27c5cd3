//! Dense, triplet and sparse conversions, and transposition

use bandmat_core::{layout, validation, BandedElement, Bandwidths, Result};
use ndarray::{Array2, ArrayView2, ShapeBuilder};

use crate::storage::BandedMatrix;
use crate::view::BandedView;

impl<T: BandedElement> BandedView<'_, T> {
    /// Fully expanded column-major copy, zeros outside the band
    pub fn to_dense(&self) -> Array2<T> {
        let (m, n) = self.dimensions();
        log::debug!("materializing {m}x{n} banded matrix as dense");
        let mut dense = Array2::zeros((m, n).f());
        for (k, j, v) in self.iter_stored() {
            dense[[k, j]] = v;
        }
        dense
    }

    /// One `(row, col, value)` triplet per physical storage cell
    ///
    /// Cells overhanging the top or bottom edge of the matrix are reported on
    /// the nearest valid row with a zero value, so the list always has
    /// `ld * ncols` entries (none at all when the matrix has no rows).
    pub fn to_triplets(&self) -> Vec<(usize, usize, T)> {
        let (m, n) = self.dimensions();
        if m == 0 {
            return Vec::new();
        }
        let ld = self.leading_dimension();
        let upper = self.bandwidths().upper;
        let data = self.storage();
        let mut triplets = Vec::with_capacity(ld * n);
        for j in 0..n {
            for p in 0..ld {
                let k = p as isize + j as isize - upper;
                let entry = if k < 0 {
                    (0, j, T::zero())
                } else if k as usize >= m {
                    (m - 1, j, T::zero())
                } else {
                    (k as usize, j, data[j * ld + p])
                };
                triplets.push(entry);
            }
        }
        triplets
    }

    /// Copy with rows and columns exchanged
    pub fn transpose(&self) -> BandedMatrix<T> {
        let (m, n) = self.dimensions();
        log::debug!("transposing {m}x{n} banded matrix with bandwidths {}", self.bandwidths());
        let mut out = BandedMatrix::zeros(n, m, self.bandwidths().transposed());
        {
            let mut dst = out.as_view_mut();
            for (k, j, v) in self.iter_stored() {
                dst.write(j, k, v);
            }
        }
        out
    }

    #[cfg(feature = "sprs")]
    pub fn to_sprs(&self) -> sprs::TriMat<T> {
        let triplets = self.to_triplets();
        let mut tri = sprs::TriMat::with_capacity(self.dimensions(), triplets.len());
        for (k, j, v) in triplets {
            tri.add_triplet(k, j, v);
        }
        tri
    }
}

impl<T: BandedElement> BandedMatrix<T> {
    /// Band `bands` of a dense matrix; nonzero entries outside it are a `Band` error
    pub fn from_dense(dense: ArrayView2<'_, T>, bands: impl Into<Bandwidths>) -> Result<Self> {
        let (m, n) = dense.dim();
        let mut out = Self::zeros(m, n, bands);
        out.assign(dense)?;
        Ok(out)
    }

    /// Build from `(row, col, value)` triplets, summing duplicates
    ///
    /// Every triplet must be inside the matrix, and a triplet outside the band
    /// must carry zero.
    pub fn from_triplets<I>(nrows: usize, ncols: usize, bands: impl Into<Bandwidths>, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut out = Self::zeros(nrows, ncols, bands);
        let bands = out.bandwidths();
        {
            let data = out.storage_mut();
            for (k, j, v) in triplets {
                validation::check_index(k, j, nrows, ncols)?;
                if bands.contains_position(k, j) {
                    let idx = layout::in_bands_index(bands, k, j);
                    data[idx] = data[idx] + v;
                } else {
                    validation::check_band_write(bands, k, j, v.is_zero())?;
                }
            }
        }
        Ok(out)
    }

    #[cfg(feature = "sprs")]
    pub fn from_sprs(tri: &sprs::TriMat<T>, bands: impl Into<Bandwidths>) -> Result<Self> {
        let (m, n) = (tri.rows(), tri.cols());
        let entries = tri
            .row_inds()
            .iter()
            .zip(tri.col_inds())
            .zip(tri.data())
            .map(|((&k, &j), &v)| (k, j, v));
        Self::from_triplets(m, n, bands, entries)
    }

    forward_to_view!(fn to_dense(&self) -> Array2<T>);
    forward_to_view!(fn to_triplets(&self) -> Vec<(usize, usize, T)>);
    forward_to_view!(fn transpose(&self) -> BandedMatrix<T>);

    #[cfg(feature = "sprs")]
    pub fn to_sprs(&self) -> sprs::TriMat<T> {
        self.as_view().to_sprs()
    }
}

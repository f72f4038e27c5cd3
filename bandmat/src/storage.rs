//! Owning banded matrix and its factories
//!
//! The buffer is a single `Vec<T>` holding `(l + u + 1) x ncols` elements in
//! column-major order. It is allocated once at construction and never resized.

use bandmat_core::{validation, BandedElement, Bandwidths, Result};
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::view::{BandedView, BandedViewMut};

/// How a freshly allocated buffer is initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocPolicy {
    /// Contents are unspecified; every position must be written before it is read.
    /// Filled with `T::default()` since safe Rust has no uninitialized generic buffers.
    Uninitialized,
    /// Every stored cell is the additive identity
    #[default]
    ZeroFilled,
}

/// Banded matrix owning its compact storage
///
/// Equality is logical: two matrices are equal when they have the same shape
/// and every logical entry matches, whatever their bandwidths or the contents
/// of physical cells overhanging the matrix edges.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BandedParts<T>",
        bound(deserialize = "T: BandedElement + serde::Deserialize<'de>")
    )
)]
pub struct BandedMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
    bands: Bandwidths,
}

impl<T: BandedElement> BandedMatrix<T> {
    /// Wrap a pre-filled buffer of shape `storage_shape = (rows, ncols)`
    ///
    /// Fails with a `Shape` error unless `rows == l + u + 1` (or zero for the
    /// degenerate empty band) and `data.len() == rows * ncols`.
    pub fn from_storage(
        data: Vec<T>,
        storage_shape: (usize, usize),
        nrows: usize,
        bands: impl Into<Bandwidths>,
    ) -> Result<Self> {
        let bands = bands.into();
        let (storage_rows, ncols) = storage_shape;
        validation::check_storage_shape(bands, storage_rows, ncols, data.len())?;
        Ok(Self::from_parts(data, nrows, ncols, bands))
    }

    /// Assemble a matrix from a buffer already known to be valid
    pub(crate) fn from_parts(data: Vec<T>, nrows: usize, ncols: usize, bands: Bandwidths) -> Self {
        debug_assert_eq!(data.len(), bands.storage_rows() * ncols);
        Self {
            data,
            nrows,
            ncols,
            bands,
        }
    }

    /// Allocate an `nrows x ncols` matrix with the given bandwidths
    ///
    /// Fails with `InvalidBandwidths` when `(l + u + 1) * ncols` overflows `usize`.
    pub fn try_with_policy(
        nrows: usize,
        ncols: usize,
        bands: impl Into<Bandwidths>,
        policy: AllocPolicy,
    ) -> Result<Self> {
        let bands = bands.into();
        let len = validation::storage_len(bands, ncols)?;
        log::debug!(
            "allocating {nrows}x{ncols} banded matrix, bandwidths {bands}, {len} stored cells, {policy:?}"
        );
        let fill = match policy {
            AllocPolicy::Uninitialized => T::default(),
            AllocPolicy::ZeroFilled => T::zero(),
        };
        Ok(Self::from_parts(vec![fill; len], nrows, ncols, bands))
    }

    /// Infallible [`try_with_policy`](Self::try_with_policy)
    ///
    /// # Panics
    ///
    /// Panics when the buffer size overflows `usize`.
    pub fn with_policy(nrows: usize, ncols: usize, bands: impl Into<Bandwidths>, policy: AllocPolicy) -> Self {
        match Self::try_with_policy(nrows, ncols, bands, policy) {
            Ok(matrix) => matrix,
            Err(e) => panic!("bandmat: {e}"),
        }
    }

    /// Matrix with unspecified contents
    pub fn uninit(nrows: usize, ncols: usize, bands: impl Into<Bandwidths>) -> Self {
        Self::with_policy(nrows, ncols, bands, AllocPolicy::Uninitialized)
    }

    pub fn zeros(nrows: usize, ncols: usize, bands: impl Into<Bandwidths>) -> Self {
        Self::with_policy(nrows, ncols, bands, AllocPolicy::ZeroFilled)
    }

    /// Every in-band entry is one
    pub fn ones(nrows: usize, ncols: usize, bands: impl Into<Bandwidths>) -> Self {
        let mut matrix = Self::uninit(nrows, ncols, bands);
        matrix.data.fill(T::one());
        matrix
    }

    /// Zero matrix with ones on the main diagonal
    ///
    /// Fails with a `Band` error when the bandwidths exclude the main diagonal
    /// of a non-empty matrix.
    pub fn identity(nrows: usize, ncols: usize, bands: impl Into<Bandwidths>) -> Result<Self> {
        let mut matrix = Self::zeros(nrows, ncols, bands);
        let n = nrows.min(ncols);
        matrix.set_diagonal(bandmat_core::Band::MAIN, &vec![T::one(); n])?;
        Ok(matrix)
    }

    /// Every in-band entry drawn from the standard distribution of `T`
    pub fn random<R>(nrows: usize, ncols: usize, bands: impl Into<Bandwidths>, rng: &mut R) -> Self
    where
        R: Rng,
        Standard: Distribution<T>,
    {
        let mut matrix = Self::uninit(nrows, ncols, bands);
        matrix.data.iter_mut().for_each(|x| *x = rng.gen());
        matrix
    }

    /// In-band entries computed from their logical position
    pub fn from_fn<F>(nrows: usize, ncols: usize, bands: impl Into<Bandwidths>, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut matrix = Self::zeros(nrows, ncols, bands);
        let bands = matrix.bands;
        for j in 0..ncols {
            for k in bandmat_core::column_range(bands, nrows, ncols, j) {
                let idx = bandmat_core::in_bands_index(bands, k, j);
                matrix.data[idx] = f(k, j);
            }
        }
        matrix
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

    pub fn lower(&self) -> isize {
        self.bands.lower
    }

    pub fn upper(&self) -> isize {
        self.bands.upper
    }

    /// Height of the physical buffer, which is also its column stride
    pub fn leading_dimension(&self) -> usize {
        self.bands.storage_rows()
    }

    /// Physical buffer, column-major
    pub fn storage(&self) -> &[T] {
        &self.data
    }

    /// Mutable physical buffer; cells overhanging the matrix edges are never read back
    pub fn storage_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Take the physical buffer
    pub fn into_storage(self) -> Vec<T> {
        self.data
    }

    /// Borrow the whole matrix as a view
    pub fn as_view(&self) -> BandedView<'_, T> {
        BandedView::from_parts(&self.data, self.nrows, self.ncols, self.bands)
    }

    /// Mutably borrow the whole matrix as a view
    pub fn as_view_mut(&mut self) -> BandedViewMut<'_, T> {
        BandedViewMut::from_parts(&mut self.data, self.nrows, self.ncols, self.bands)
    }
}

impl<T: BandedElement> PartialEq for BandedMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_view().logically_eq(other.as_view())
    }
}

/// Serialized form of a [`BandedMatrix`], validated on the way in
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BandedParts<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
    bands: Bandwidths,
}

#[cfg(feature = "serde")]
impl<T: BandedElement> TryFrom<BandedParts<T>> for BandedMatrix<T> {
    type Error = bandmat_core::BandedError;

    fn try_from(parts: BandedParts<T>) -> Result<Self> {
        let storage_shape = (parts.bands.storage_rows(), parts.ncols);
        Self::from_storage(parts.data, storage_shape, parts.nrows, parts.bands)
    }
}

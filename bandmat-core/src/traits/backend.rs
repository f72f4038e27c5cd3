//! Storage capability traits for handing band storage to external kernels

use crate::band::Bandwidths;
use crate::{BandedError, Result};

/// Band storage parameters in the LAPACK `?gbmv` / `?gbtrf` convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlasBandLayout {
    /// Logical rows
    pub m: usize,
    /// Logical columns
    pub n: usize,
    /// Sub-diagonals
    pub kl: usize,
    /// Super-diagonals
    pub ku: usize,
    /// Leading dimension of the band array, at least `kl + ku + 1`
    pub ldab: usize,
}

/// Contiguous band storage that external numerical kernels can read directly
///
/// Implemented by the owning matrix and by aligned sub-views. Views whose band
/// had to be zero-padded are owned copies and do not alias the parent, so they
/// never reach this trait through the parent's buffer.
pub trait BandStorage<T> {
    /// Physical columns backing this matrix, column-major
    fn as_slice(&self) -> &[T];

    /// Distance between consecutive physical columns
    fn leading_dimension(&self) -> usize;

    /// Lower and upper bandwidths of the stored band
    fn band(&self) -> Bandwidths;

    /// Logical (rows, cols)
    fn shape(&self) -> (usize, usize);

    /// Pointer to the first physical element
    fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Parameters for a band-oriented BLAS/LAPACK call
    ///
    /// Fails when a bandwidth is negative, since BLAS has no encoding for a
    /// band that does not touch the main diagonal.
    fn blas_layout(&self) -> Result<BlasBandLayout> {
        let band = self.band();
        if !band.is_nonnegative() {
            return Err(BandedError::InvalidBandwidths {
                lower: band.lower,
                upper: band.upper,
                reason: "BLAS band storage needs non-negative bandwidths",
            });
        }
        let (m, n) = self.shape();
        Ok(BlasBandLayout {
            m,
            n,
            kl: band.lower as usize,
            ku: band.upper as usize,
            ldab: self.leading_dimension().max(1),
        })
    }
}

/// Mutable counterpart of [`BandStorage`]
pub trait BandStorageMut<T>: BandStorage<T> {
    fn as_mut_slice(&mut self) -> &mut [T];

    fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }
}

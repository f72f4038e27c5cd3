//! Trait implementations for generic readers and external band kernels
//!
//! The owning matrix and aligned views expose their physical storage through
//! [`BandStorage`]. An aligned view's slice starts at the parent's physical
//! column `cols.start`, so its pointer is the parent's pointer advanced by
//! `ld * cols.start` elements with the same leading dimension. Padded slices
//! are independent copies and are only reachable through [`BandedSlice::aliased`]
//! returning `None`.

use bandmat_core::{BandStorage, BandStorageMut, BandedElement, BandedRead, Bandwidths, Result};

use crate::storage::BandedMatrix;
use crate::view::{BandedSlice, BandedView, BandedViewMut};

macro_rules! impl_band_traits {
    ($ty:ty) => {
        impl<T: BandedElement> BandedRead for $ty {
            type Element = T;

            #[inline]
            fn get_element(&self, row: usize, col: usize) -> Result<T> {
                self.get(row, col)
            }

            fn dimensions(&self) -> (usize, usize) {
                (self.nrows(), self.ncols())
            }

            fn bandwidths(&self) -> Bandwidths {
                self.bandwidths()
            }
        }

        impl<T: BandedElement> BandStorage<T> for $ty {
            fn as_slice(&self) -> &[T] {
                self.storage()
            }

            fn leading_dimension(&self) -> usize {
                self.bandwidths().storage_rows()
            }

            fn band(&self) -> Bandwidths {
                self.bandwidths()
            }

            fn shape(&self) -> (usize, usize) {
                (self.nrows(), self.ncols())
            }
        }
    };
}

impl_band_traits!(BandedMatrix<T>);
impl_band_traits!(BandedView<'_, T>);
impl_band_traits!(BandedViewMut<'_, T>);

impl<T: BandedElement> BandStorageMut<T> for BandedMatrix<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage_mut()
    }
}

impl<T: BandedElement> BandStorageMut<T> for BandedViewMut<'_, T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage_mut()
    }
}

impl<T: BandedElement> BandedRead for BandedSlice<'_, T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Result<T> {
        self.view().get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        self.view().dimensions()
    }

    fn bandwidths(&self) -> Bandwidths {
        self.view().bandwidths()
    }
}

impl<'a, T: BandedElement> BandedSlice<'a, T> {
    /// The slice as parent-aliasing band storage, if it is one
    pub fn aliased(&self) -> Option<BandedView<'a, T>> {
        match self {
            BandedSlice::Aliased(view) => Some(*view),
            BandedSlice::Padded(_) => None,
        }
    }
}

impl<T: BandedElement + bytemuck::Pod> BandedMatrix<T> {
    /// Physical buffer as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.storage())
    }
}

impl<T: BandedElement + bytemuck::Pod> BandedView<'_, T> {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.storage())
    }
}

//! Elementwise numeric operations
//!
//! Every operation allocates a fresh matrix. Results are computed over the
//! in-band positions of the result only.

use core::ops::{Div, Mul, Neg};

use bandmat_core::{validation, BandedElement, Bandwidths, Result};

use crate::storage::BandedMatrix;
use crate::view::BandedView;

impl<'a, T: BandedElement> BandedView<'a, T> {
    /// Apply `f` to every in-band entry, keeping the bandwidths
    pub fn map<U, F>(&self, mut f: F) -> BandedMatrix<U>
    where
        U: BandedElement,
        F: FnMut(T) -> U,
    {
        let (m, n) = self.dimensions();
        BandedMatrix::from_fn(m, n, self.bandwidths(), |k, j| f(self.read(k, j)))
    }

    pub fn scale(&self, alpha: T) -> BandedMatrix<T> {
        self.map(|x| x * alpha)
    }

    pub fn div_scalar(&self, alpha: T) -> BandedMatrix<T> {
        self.map(|x| x / alpha)
    }

    pub fn neg(&self) -> BandedMatrix<T>
    where
        T: Neg<Output = T>,
    {
        self.map(|x| -x)
    }

    /// Real part of every entry
    pub fn real(&self) -> BandedMatrix<T::Real> {
        self.map(T::real)
    }

    /// Imaginary part of every entry
    pub fn imag(&self) -> BandedMatrix<T::Real> {
        self.map(T::imag)
    }

    /// Combine two matrices of the same shape position by position over `bands`
    fn zip_with<F>(&self, other: BandedView<'_, T>, bands: Bandwidths, f: F) -> Result<BandedMatrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        validation::check_shape(self.dimensions(), other.dimensions())?;
        let (m, n) = self.dimensions();
        Ok(BandedMatrix::from_fn(m, n, bands, |k, j| f(self.read(k, j), other.read(k, j))))
    }

    /// Elementwise product; the result keeps the narrower band on each side
    pub fn hadamard(&self, other: BandedView<'_, T>) -> Result<BandedMatrix<T>> {
        self.zip_with(other, self.bandwidths().min(other.bandwidths()), |a, b| a * b)
    }

    /// Sum; the result keeps the wider band on each side
    pub fn try_add(&self, other: BandedView<'_, T>) -> Result<BandedMatrix<T>> {
        self.zip_with(other, self.bandwidths().max(other.bandwidths()), |a, b| a + b)
    }

    /// Difference; the result keeps the wider band on each side
    pub fn try_sub(&self, other: BandedView<'_, T>) -> Result<BandedMatrix<T>> {
        self.zip_with(other, self.bandwidths().max(other.bandwidths()), |a, b| a - b)
    }

    /// Reverse both the row and the column order
    ///
    /// Entry `(k, j)` of the result is entry `(m - 1 - k, n - 1 - j)` of this
    /// matrix. For non-square shapes the band moves by `n - m` diagonals.
    pub fn flip(&self) -> BandedMatrix<T> {
        let (m, n) = self.dimensions();
        let offset = n as isize - m as isize;
        let bands = self.bandwidths();
        let flipped = Bandwidths::new(bands.upper - offset, bands.lower + offset);
        BandedMatrix::from_fn(m, n, flipped, |k, j| self.read(m - 1 - k, n - 1 - j))
    }
}

impl<T: BandedElement> BandedMatrix<T> {
    pub fn map<U, F>(&self, f: F) -> BandedMatrix<U>
    where
        U: BandedElement,
        F: FnMut(T) -> U,
    {
        self.as_view().map(f)
    }

    forward_to_view!(fn scale(&self, alpha: T) -> BandedMatrix<T>);
    forward_to_view!(fn div_scalar(&self, alpha: T) -> BandedMatrix<T>);
    forward_to_view!(fn real(&self) -> BandedMatrix<T::Real>);
    forward_to_view!(fn imag(&self) -> BandedMatrix<T::Real>);
    forward_to_view!(fn flip(&self) -> BandedMatrix<T>);

    pub fn neg(&self) -> BandedMatrix<T>
    where
        T: Neg<Output = T>,
    {
        self.as_view().neg()
    }

    pub fn hadamard(&self, other: &BandedMatrix<T>) -> Result<BandedMatrix<T>> {
        self.as_view().hadamard(other.as_view())
    }

    pub fn try_add(&self, other: &BandedMatrix<T>) -> Result<BandedMatrix<T>> {
        self.as_view().try_add(other.as_view())
    }

    pub fn try_sub(&self, other: &BandedMatrix<T>) -> Result<BandedMatrix<T>> {
        self.as_view().try_sub(other.as_view())
    }
}

macro_rules! impl_scalar_ops {
    ($mat:ty) => {
        impl<T: BandedElement> Mul<T> for $mat {
            type Output = BandedMatrix<T>;

            #[inline]
            fn mul(self, alpha: T) -> BandedMatrix<T> {
                self.scale(alpha)
            }
        }

        impl<T: BandedElement> Div<T> for $mat {
            type Output = BandedMatrix<T>;

            #[inline]
            fn div(self, alpha: T) -> BandedMatrix<T> {
                self.div_scalar(alpha)
            }
        }

        impl<T: BandedElement + Neg<Output = T>> Neg for $mat {
            type Output = BandedMatrix<T>;

            #[inline]
            fn neg(self) -> BandedMatrix<T> {
                self.map(|x| -x)
            }
        }
    };
}

impl_scalar_ops!(BandedMatrix<T>);
impl_scalar_ops!(&BandedMatrix<T>);
impl_scalar_ops!(BandedView<'_, T>);

macro_rules! impl_left_scalar_mul {
    ($scalar:ty) => {
        impl Mul<BandedMatrix<$scalar>> for $scalar {
            type Output = BandedMatrix<$scalar>;

            #[inline]
            fn mul(self, matrix: BandedMatrix<$scalar>) -> BandedMatrix<$scalar> {
                matrix.scale(self)
            }
        }

        impl Mul<&BandedMatrix<$scalar>> for $scalar {
            type Output = BandedMatrix<$scalar>;

            #[inline]
            fn mul(self, matrix: &BandedMatrix<$scalar>) -> BandedMatrix<$scalar> {
                matrix.scale(self)
            }
        }
    };
}

impl_left_scalar_mul!(f32);
impl_left_scalar_mul!(f64);

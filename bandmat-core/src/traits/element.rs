//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored in a banded matrix, and the data type tag handed to external
//! numerical kernels.

use core::fmt::Debug;

use num_complex::Complex;
use num_traits::{NumOps, One, Zero};

/// Element data types understood by band-oriented kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataType {
    F32 = 0,
    F64 = 1,
    I32 = 2,
    I64 = 3,
    U32 = 4,
    U64 = 5,
    C32 = 6,
    C64 = 7,
}

impl DataType {
    /// Get the size in bytes for this data type
    pub const fn size_bytes(&self) -> usize {
        match self {
            DataType::F32 | DataType::I32 | DataType::U32 => 4,
            DataType::F64 | DataType::I64 | DataType::U64 | DataType::C32 => 8,
            DataType::C64 => 16,
        }
    }

    /// BLAS routine prefix (`s`, `d`, `c`, `z`), `None` for integer types
    pub const fn blas_prefix(&self) -> Option<char> {
        match self {
            DataType::F32 => Some('s'),
            DataType::F64 => Some('d'),
            DataType::C32 => Some('c'),
            DataType::C64 => Some('z'),
            _ => None,
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
            DataType::U32 => write!(f, "u32"),
            DataType::U64 => write!(f, "u64"),
            DataType::C32 => write!(f, "c32"),
            DataType::C64 => write!(f, "c64"),
        }
    }
}

/// Trait for types that can be stored as banded matrix elements
///
/// Elements must have an additive identity (the implicit value of every
/// out-of-band position), a multiplicative identity (for identity
/// factories) and the four arithmetic operators.
pub trait BandedElement:
    Copy + PartialEq + Debug + Default + Zero + One + NumOps + Send + Sync + 'static
{
    /// Real counterpart, `Self` for real types
    type Real: BandedElement;

    /// Get the data type tag for this element type
    fn data_type() -> DataType;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Real part
    fn real(self) -> Self::Real;

    /// Imaginary part, zero for real types
    fn imag(self) -> Self::Real;
}

macro_rules! impl_real_element {
    ($type:ty, $tag:ident) => {
        impl BandedElement for $type {
            type Real = $type;

            fn data_type() -> DataType {
                DataType::$tag
            }

            #[inline]
            fn real(self) -> Self::Real {
                self
            }

            #[inline]
            fn imag(self) -> Self::Real {
                <$type as Zero>::zero()
            }
        }
    };
}

impl_real_element!(f32, F32);
impl_real_element!(f64, F64);
impl_real_element!(i32, I32);
impl_real_element!(i64, I64);
impl_real_element!(u32, U32);
impl_real_element!(u64, U64);

macro_rules! impl_complex_element {
    ($real:ty, $tag:ident) => {
        impl BandedElement for Complex<$real> {
            type Real = $real;

            fn data_type() -> DataType {
                DataType::$tag
            }

            #[inline]
            fn real(self) -> Self::Real {
                self.re
            }

            #[inline]
            fn imag(self) -> Self::Real {
                self.im
            }
        }
    };
}

impl_complex_element!(f32, C32);
impl_complex_element!(f64, C64);

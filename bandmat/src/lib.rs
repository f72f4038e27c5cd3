//! bandmat - Compact banded matrix storage
//!
//! This library stores rectangular matrices whose nonzero entries lie in a
//! band of diagonals, keeping only the band in a `(l + u + 1) x ncols`
//! column-major buffer, and exposes band-aware indexing, banded sub-views and
//! a pointer/stride surface for external band kernels.
//!
//! ## Architecture
//!
//! bandmat follows a specification/implementation separation:
//!
//! - **bandmat-core**: Bandwidths, coordinate translation, validation and traits (no storage)
//! - **bandmat**: The owning matrix, borrowed views, conversions and numeric operations
//!
//! Read algorithms live on [`BandedView`], write algorithms on
//! [`BandedViewMut`]; [`BandedMatrix`] forwards to both.
//!
//! ## Quick Start
//!
//! ```rust
//! use bandmat::{Band, BandedError, BandedMatrix};
//!
//! fn example() -> Result<(), BandedError> {
//!     // 4x4 tridiagonal identity
//!     let mut a = BandedMatrix::<f64>::identity(4, 4, (1usize, 1usize))?;
//!     a.set(1, 2, 5.0)?;
//!     assert_eq!(a.get(2, 1)?, 0.0);
//!
//!     // writing a nonzero outside the band fails, zero is a no-op
//!     assert!(a.set(0, 3, 5.0).is_err());
//!     a.set(0, 3, 0.0)?;
//!
//!     a.set_diagonal(Band(-1), &[1.0, 2.0, 3.0])?;
//!     let dense = a.to_dense();
//!     assert_eq!(dense[[3, 2]], 3.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **rayon** (default): Column-partitioned parallel mutation
//! - **sprs** (default): Conversion to and from `sprs::TriMat`
//! - **serde**: Serialization of bandwidths and matrices

// Re-export core abstractions
pub use bandmat_core::{
    // Value types
    Band, Bandwidths,
    // Traits
    BandStorage, BandStorageMut, BandedElement, BandedRead, BlasBandLayout, DataType,
    // Error handling
    BandedError, Result,
    // Parsing
    parse_band_range,
};
pub use bandmat_core::layout;

#[macro_use]
mod macros;

mod convert;
mod indexing;
mod interop;
mod ops;
#[cfg(feature = "rayon")]
mod parallel;
pub mod storage;
pub mod view;

pub use storage::{AllocPolicy, BandedMatrix};
pub use view::{BandedSlice, BandedView, BandedViewMut};

/// Common imports
pub mod prelude {
    pub use crate::{
        AllocPolicy, Band, BandStorage, BandStorageMut, BandedElement, BandedError, BandedMatrix, BandedRead,
        BandedSlice, BandedView, BandedViewMut, Bandwidths,
    };
}

//! bandmat core - banded matrix storage definitions
//!
//! This crate provides the pure pieces of compact banded storage: bandwidth
//! and diagonal types, the coordinate translation between logical positions
//! and the `(l + u + 1) x ncols` column-major buffer, validation predicates,
//! and the traits concrete matrices and views implement. Nothing here owns a
//! buffer.

pub mod band;
pub mod error;
pub mod layout;
pub mod traits;
pub mod validation;

pub use band::{Band, Bandwidths};
pub use error::*;
pub use layout::{
    column_range, diagonal_length, in_bands_index, in_bands_offset, physical_column_slice,
    physical_diagonal_slice, physical_row_slice, row_range, PhysicalSlice,
};
pub use traits::*;
pub use validation::parse_band_range;

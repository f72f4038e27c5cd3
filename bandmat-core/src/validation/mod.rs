//! Validation utilities for banded matrix access
//!
//! This module contains pure boundary checks with no storage dependencies.
//! The safe access API runs them before every read or write; the
//! `*_unchecked` paths skip them.

pub mod band;
pub mod bounds;
pub mod parsing;

pub use band::{
    block_band_violation, check_band_write, check_storage_shape, first_nonzero_outside, reject_band, storage_len,
};
pub use bounds::{check_col, check_index, check_length, check_range, check_row, check_shape};
pub use parsing::parse_band_range;

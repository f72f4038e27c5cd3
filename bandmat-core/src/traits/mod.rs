//! Abstract interfaces for banded matrices
//!
//! This module defines all trait abstractions shared by the owning matrix
//! and its views. Traits are pure interfaces - no concrete storage.

pub mod backend;
pub mod element;
pub mod matrix;

pub use backend::{BandStorage, BandStorageMut, BlasBandLayout};
pub use element::{BandedElement, DataType};
pub use matrix::BandedRead;

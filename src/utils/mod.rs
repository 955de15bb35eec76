//! Utilities shared across quire.
//!
//! - [`fs`] - atomic writes, checksums and modification-time queries

pub mod fs;

pub use fs::{atomic_write, calculate_checksum};

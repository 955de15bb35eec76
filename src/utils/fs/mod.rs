//! File system utilities used by the lockfile writer and staleness oracle.
//!
//! - [`atomic`] - temp-file-and-rename writes
//! - [`metadata`] - checksums and modification times

pub mod atomic;
pub mod metadata;

pub use atomic::atomic_write;
pub use metadata::{calculate_checksum, compare_file_times, get_modified_time};

//! File metadata queries: checksums and modification times.
//!
//! # Examples
//!
//! ```rust,no_run
//! use quire::utils::fs::metadata::{calculate_checksum, compare_file_times};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let checksum = calculate_checksum(Path::new("quire.lock"))?;
//! println!("Lockfile checksum: {}", checksum);
//!
//! let ordering = compare_file_times(Path::new("quire.toml"), Path::new("quire.lock"))?;
//! println!("Manifest vs lockfile: {:?}", ordering);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Calculates the SHA-256 checksum of a file, formatted as `sha256:<hex>`.
///
/// The whole file is read into memory, which is fine for lockfiles.
///
/// # Errors
/// Returns an error if the file cannot be read
pub fn calculate_checksum(path: &Path) -> Result<String> {
    let content = fs::read(path)
        .with_context(|| format!("Failed to read file for checksum: {}", path.display()))?;

    let mut hasher = Sha256::new();
    hasher.update(&content);
    let result = hasher.finalize();

    Ok(format!("sha256:{}", hex::encode(result)))
}

/// Gets the modification time of a file.
///
/// # Errors
/// Returns an error if the file metadata cannot be read
pub fn get_modified_time(path: &Path) -> Result<std::time::SystemTime> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

    metadata
        .modified()
        .with_context(|| format!("Failed to get modification time for: {}", path.display()))
}

/// Compares the modification times of two files.
///
/// # Returns
/// - `Ok(Ordering::Less)` if path1 is older than path2
/// - `Ok(Ordering::Greater)` if path1 is newer than path2
/// - `Ok(Ordering::Equal)` if they have the same modification time
///
/// # Errors
/// Returns an error if either file's metadata cannot be read
pub fn compare_file_times(path1: &Path, path2: &Path) -> Result<std::cmp::Ordering> {
    let time1 = get_modified_time(path1)?;
    let time2 = get_modified_time(path2)?;

    Ok(time1.cmp(&time2))
}

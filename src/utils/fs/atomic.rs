//! Atomic file write operations using temp-and-rename strategy.
//!
//! This module provides safe, atomic file writing that prevents corruption
//! from interrupted writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// This function ensures atomic writes by:
/// 1. Writing content to a temporary file (`.tmp` extension) next to the target
/// 2. Syncing the temporary file to disk
/// 3. Renaming the temporary file over the target path
///
/// Readers see either the old content or the new content, never a partial
/// write. The temporary file is removed if any step before the rename fails.
///
/// # Examples
///
/// ```rust,no_run
/// use quire::utils::fs::atomic_write;
/// use std::path::Path;
///
/// # fn example() -> std::io::Result<()> {
/// atomic_write(Path::new("quire.lock"), b"version = 1\n")?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the first I/O error from creating, writing, syncing or renaming.
/// The parent directory must already exist.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");

    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(content)?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })
}

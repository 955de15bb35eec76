//! Staleness detection: deciding whether the lockfile needs rewriting.
//!
//! The writer treats staleness as an opaque yes/no question about a project
//! root. [`ManifestMtimeOracle`] answers it from file modification times; any
//! `Fn(&Path) -> bool` can stand in for it.

use std::cmp::Ordering;
use std::path::Path;

use tracing::debug;

use crate::core::ProjectPaths;
use crate::utils::fs::compare_file_times;

/// Decides whether the lockfile under a project root is outdated.
pub trait StalenessOracle {
    /// `true` when the lockfile under `root` should be rewritten.
    fn is_outdated(&self, root: &Path) -> bool;
}

impl<F> StalenessOracle for F
where
    F: Fn(&Path) -> bool,
{
    fn is_outdated(&self, root: &Path) -> bool {
        self(root)
    }
}

/// Compares the manifest's modification time with the lockfile's.
///
/// The lockfile is outdated when:
/// - it does not exist
/// - either file's modification time cannot be read
/// - the manifest was modified strictly after the lockfile
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestMtimeOracle;

impl StalenessOracle for ManifestMtimeOracle {
    fn is_outdated(&self, root: &Path) -> bool {
        let paths = ProjectPaths::new(root);
        let lockfile = paths.lockfile_path();
        if !lockfile.exists() {
            debug!("{} does not exist, treating as outdated", lockfile.display());
            return true;
        }

        match compare_file_times(&paths.manifest_path(), &lockfile) {
            Ok(ordering) => ordering == Ordering::Greater,
            Err(e) => {
                debug!("Cannot compare manifest and lockfile times ({e:#}), treating as outdated");
                true
            }
        }
    }
}

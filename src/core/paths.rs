//! core::paths
//!
//! Centralized path routing for the files quire owns inside a project.
//!
//! Every component that touches the manifest or the lockfile resolves its
//! location through [`ProjectPaths`], so the writer, the loader and the
//! staleness oracle can never disagree about where the lockfile lives.
//!
//! # Example
//!
//! ```
//! use quire::core::ProjectPaths;
//! use std::path::PathBuf;
//!
//! let paths = ProjectPaths::new("/work/app");
//!
//! assert_eq!(paths.lockfile_path(), PathBuf::from("/work/app/quire.lock"));
//! assert_eq!(paths.manifest_path(), PathBuf::from("/work/app/quire.toml"));
//! ```

use std::path::{Path, PathBuf};

use crate::constants::{LOCKFILE_NAME, MANIFEST_NAME};

/// Locations of the manifest and lockfile for one project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Route paths relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/quire.toml`
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_NAME)
    }

    /// `<root>/quire.lock`
    pub fn lockfile_path(&self) -> PathBuf {
        self.root.join(LOCKFILE_NAME)
    }
}

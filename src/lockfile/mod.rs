//! Lockfile management for reproducible dependency graphs.
//!
//! The lockfile (`quire.lock`) is a deterministic snapshot of the graph the
//! resolver produced. Writing it lets a later run skip resolution entirely
//! when nothing changed; reading it hands back a graph shaped like the
//! resolver's output.
//!
//! # Data flow
//!
//! ```text
//! DependencyGraph --synthesize--> LockDocument --save--> quire.lock
//! quire.lock --load + version gate--> LockDocument --reconstruct--> DependencyGraph
//! ```
//!
//! - [`synthesize`] - graph to document, pure and infallible
//! - [`LockfileWriter`], [`generate`], [`overwrite`] - document to disk, gated by staleness
//! - [`read`], [`LockDocument::load`] - disk to document, with the schema version check
//! - [`reconstruct`] - document to graph
//!
//! # Lockfile Format
//!
//! ```toml
//! # This file is automatically generated by quire.
//! # It is not intended for manual editing.
//! version = 1
//!
//! [[package]]
//! name = "app-core"
//! version = "1.0.0"
//! dependencies = ["fmt", "spdlog"]
//!
//! [[package]]
//! name = "fmt"
//! version = "10.1.0"
//! ```
//!
//! Packages are sorted by name, then version. `dependencies` holds names only
//! and is omitted when empty.
//!
//! # Lossy by design
//!
//! Transitive version requirements are never written. They are re-derived by
//! resolving again rather than trusted from an old lockfile. Consequently a
//! graph survives a round trip only up to:
//!
//! - every inner dependency's requirement becomes `""`
//! - a node whose inner dependencies were recorded but empty comes back as
//!   [`InnerDeps::Absent`](crate::resolver::InnerDeps::Absent)
//!
//! # Examples
//!
//! ```rust,no_run
//! use quire::lockfile;
//! use quire::resolver::{DependencyGraph, InnerDeps, PackageId, ResolvedDependencyEdge};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), quire::core::LockfileError> {
//! let root = Path::new(".");
//!
//! let graph = match lockfile::read(root)? {
//!     Some(graph) => graph,
//!     None => {
//!         // First run: resolve from scratch (external), then persist.
//!         let mut graph = DependencyGraph::new();
//!         graph.insert(
//!             PackageId::new("app-core", "1.0.0"),
//!             InnerDeps::Recorded(vec![ResolvedDependencyEdge::new("fmt", "^10")]),
//!         );
//!         lockfile::generate(root, &graph)?;
//!         graph
//!     }
//! };
//! # let _ = graph;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::LOCKFILE_VERSION;
use crate::core::{LockfileError, ProjectPaths};
use crate::resolver::{DependencyGraph, ResolvedDependencyEdge};

pub mod helpers;
pub mod io;
pub mod reconstruct;
pub mod staleness;
pub mod synthesize;
pub mod writer;

pub use reconstruct::reconstruct;
pub use staleness::{ManifestMtimeOracle, StalenessOracle};
pub use synthesize::synthesize;
pub use writer::{GenerateOutcome, LockfileWriter};

/// A complete lock document, as stored in `quire.lock`.
///
/// The header comment is not part of the value; it is added when the document
/// is rendered and ignored when it is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockDocument {
    /// Schema version of the document. Must equal [`LOCKFILE_VERSION`] to load.
    pub version: i64,

    /// Locked packages, serialized as `[[package]]` tables.
    #[serde(default, rename = "package", skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<LockedPackage>,
}

/// One package entry of the lock document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedPackage {
    /// Package name.
    pub name: String,

    /// Exact resolved version.
    pub version: String,

    /// Names of the package's inner dependencies, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<LockedDependencyName>,
}

/// A dependency reference inside the lock document: the name and nothing else.
///
/// Unlike [`ResolvedDependencyEdge`], this type has no requirement field.
/// Converting between the two is explicit and lossy in one direction:
///
/// - [`LockedDependencyName::from_edge`] drops the requirement
/// - [`LockedDependencyName::to_placeholder_edge`] restores an edge whose
///   requirement is the empty string, because the real one is gone
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockedDependencyName {
    name: String,
}

impl LockedDependencyName {
    /// Create a name reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
        }
    }

    /// Project a resolver edge down to its name, discarding the requirement.
    pub fn from_edge(edge: &ResolvedDependencyEdge) -> Self {
        Self::new(edge.name.clone())
    }

    /// Rebuild a resolver edge with an empty placeholder requirement.
    pub fn to_placeholder_edge(&self) -> ResolvedDependencyEdge {
        ResolvedDependencyEdge::new(self.name.clone(), "")
    }

    /// The referenced package name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl LockDocument {
    /// An empty document at the current schema version.
    pub fn new() -> Self {
        Self {
            version: LOCKFILE_VERSION,
            packages: Vec::new(),
        }
    }

    /// Build a document at the current version with packages in canonical order.
    pub fn from_packages(packages: Vec<LockedPackage>) -> Self {
        let mut document = Self {
            version: LOCKFILE_VERSION,
            packages,
        };
        document.sort_packages();
        document
    }

    /// A copy of this document with packages in canonical order.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mut normalized = self.clone();
        normalized.sort_packages();
        normalized
    }

    /// Stable sort by name, then version.
    fn sort_packages(&mut self) {
        self.packages
            .sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.version.cmp(&b.version)));
    }

    /// First package with the given name, in document order.
    pub fn get_package(&self, name: &str) -> Option<&LockedPackage> {
        self.packages.iter().find(|p| p.name == name)
    }

    /// Whether any package has the given name.
    pub fn has_package(&self, name: &str) -> bool {
        self.get_package(name).is_some()
    }

    /// Reject any document whose version is not exactly [`LOCKFILE_VERSION`].
    pub fn check_version(&self) -> Result<(), LockfileError> {
        if self.version == LOCKFILE_VERSION {
            Ok(())
        } else {
            Err(LockfileError::InvalidLockfileVersion {
                found: self.version,
            })
        }
    }
}

impl Default for LockDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the lockfile under `base_dir` and reconstruct its graph.
///
/// # Returns
///
/// * `Ok(None)` - there is no lockfile; resolve from scratch
/// * `Ok(Some(graph))` - the lockfile was valid
/// * `Err(LockfileError::FailedToReadLockfile)` - unreadable or malformed document
/// * `Err(LockfileError::InvalidLockfileVersion)` - unsupported schema version
pub fn read(base_dir: &Path) -> Result<Option<DependencyGraph>, LockfileError> {
    let path = ProjectPaths::new(base_dir).lockfile_path();
    Ok(LockDocument::load(&path)?.map(|document| reconstruct(&document)))
}

/// Write the lockfile under `root` if the manifest is newer than it.
///
/// Uses [`ManifestMtimeOracle`]. See [`LockfileWriter::generate`].
pub fn generate(root: &Path, graph: &DependencyGraph) -> Result<GenerateOutcome, LockfileError> {
    LockfileWriter::new(ProjectPaths::new(root)).generate(graph)
}

/// Unconditionally write the lockfile under `root`.
///
/// See [`LockfileWriter::overwrite`].
pub fn overwrite(root: &Path, graph: &DependencyGraph) -> Result<(), LockfileError> {
    LockfileWriter::new(ProjectPaths::new(root)).overwrite(graph)
}

//! quire - lockfile bookkeeping for a package manager
//!
//! quire turns the dependency graph produced by a version solver into a
//! deterministic, diff-friendly lock document (`quire.lock`), and turns that
//! document back into a graph on a later run so resolution can be skipped when
//! nothing changed.
//!
//! # Architecture Overview
//!
//! ```text
//!              synthesize                 save (atomic)
//! DependencyGraph ------> LockDocument ----------------> quire.lock
//!        ^                     |                            |
//!        |    reconstruct      |  load + version gate       |
//!        +---------------------+<---------------------------+
//! ```
//!
//! - The resolver (external) builds a [`resolver::DependencyGraph`]
//! - [`lockfile::synthesize`] projects it into a [`lockfile::LockDocument`],
//!   keeping dependency names and dropping their version requirements
//! - [`lockfile::LockfileWriter`] persists the document when the staleness
//!   oracle says the lockfile is outdated
//! - [`lockfile::read`] loads the document, rejects any schema version other
//!   than [`constants::LOCKFILE_VERSION`], and hands back a graph via
//!   [`lockfile::reconstruct`]
//!
//! # Modules
//!
//! - [`constants`] - file names, schema version and lockfile header
//! - [`core`] - error types and project path routing
//! - [`lockfile`] - the lock document and every operation on it
//! - [`resolver`] - the graph model shared with the version solver
//! - [`utils`] - atomic writes, checksums and modification times
//!
//! # Example
//!
//! ```rust,no_run
//! use quire::lockfile;
//! use quire::resolver::{DependencyGraph, InnerDeps, PackageId, ResolvedDependencyEdge};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let root = Path::new(".");
//!
//! if lockfile::read(root)?.is_none() {
//!     let mut graph = DependencyGraph::new();
//!     graph.insert(
//!         PackageId::new("app-core", "1.0.0"),
//!         InnerDeps::Recorded(vec![ResolvedDependencyEdge::new("fmt", "^10.0")]),
//!     );
//!     graph.insert(PackageId::new("fmt", "10.1.0"), InnerDeps::Absent);
//!
//!     lockfile::generate(root, &graph)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod core;
pub mod lockfile;
pub mod resolver;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

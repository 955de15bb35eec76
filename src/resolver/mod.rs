//! Resolver-side data model.
//!
//! quire does not solve version constraints. The external resolver produces a
//! [`DependencyGraph`], and the lockfile module turns it into a lock document
//! and back. The types here are the contract between the two.

pub mod dependency_graph;

pub use dependency_graph::{DependencyGraph, InnerDeps, PackageId, ResolvedDependencyEdge};

//! Graph to document: the lockfile synthesizer.

use crate::resolver::DependencyGraph;

use super::{LockDocument, LockedDependencyName, LockedPackage};

/// Build the lock document for a resolved graph.
///
/// Each node becomes one [`LockedPackage`] carrying the node's exact name and
/// version. Inner dependencies are projected to names with
/// [`LockedDependencyName::from_edge`], keeping their relative order; the
/// requirements are dropped. [`InnerDeps::Absent`] and an empty
/// [`InnerDeps::Recorded`] both produce an empty `dependencies` list.
///
/// Pure and infallible. The result has the current schema version and packages
/// sorted by name, then version.
///
/// [`InnerDeps::Absent`]: crate::resolver::InnerDeps::Absent
/// [`InnerDeps::Recorded`]: crate::resolver::InnerDeps::Recorded
pub fn synthesize(graph: &DependencyGraph) -> LockDocument {
    let packages = graph
        .iter()
        .map(|(id, inner)| LockedPackage {
            name: id.name.clone(),
            version: id.version.clone(),
            dependencies: inner.edges().iter().map(LockedDependencyName::from_edge).collect(),
        })
        .collect();

    LockDocument::from_packages(packages)
}

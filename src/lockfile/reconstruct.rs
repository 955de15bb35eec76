//! Document to graph: rebuilding a resolver-shaped graph from a lockfile.

use tracing::warn;

use crate::resolver::{DependencyGraph, InnerDeps, PackageId};

use super::LockDocument;

/// Rebuild a dependency graph from a validated lock document.
///
/// - every package becomes a node keyed by `(name, version)`
/// - a non-empty `dependencies` list becomes [`InnerDeps::Recorded`] with
///   placeholder edges whose requirement is `""`
/// - an empty list becomes [`InnerDeps::Absent`]
///
/// Dependency names are not checked against the package list. If the document
/// repeats a `(name, version)` pair the first entry is kept.
pub fn reconstruct(document: &LockDocument) -> DependencyGraph {
    let mut graph = DependencyGraph::new();

    for package in &document.packages {
        let inner = if package.dependencies.is_empty() {
            InnerDeps::Absent
        } else {
            InnerDeps::Recorded(
                package.dependencies.iter().map(|dep| dep.to_placeholder_edge()).collect(),
            )
        };

        let id = PackageId::new(package.name.clone(), package.version.clone());
        if !graph.insert_if_absent(id, inner) {
            warn!(
                "Duplicate lockfile entry for {}@{}, keeping the first one",
                package.name, package.version
            );
        }
    }

    graph
}

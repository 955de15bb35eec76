//! The resolved dependency graph handed over by the version solver.
//!
//! Nodes are keyed by exact `(name, version)` pairs. Each node optionally
//! records its transitive dependencies as `(name, requirement)` edges, where
//! the requirement is the unresolved version expression (`^2.0`, `>=1.4`, ...).
//!
//! Whether a node has inner dependencies *recorded at all* is tracked
//! separately from whether that record is empty, see [`InnerDeps`].

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// A package identified by name and exact version.
///
/// Ordering is by name, then version, both compared as plain strings. This is
/// the order packages appear in a lockfile.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageId {
    /// Package name.
    pub name: String,
    /// Exact resolved version.
    pub version: String,
}

impl PackageId {
    /// Create a new package id.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// A transitive dependency as the resolver sees it: a name plus the version
/// requirement the depending package declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedDependencyEdge {
    /// Name of the required package.
    pub name: String,
    /// Version requirement expression. Empty when restored from a lockfile.
    pub requirement: String,
}

impl ResolvedDependencyEdge {
    /// Create a new edge.
    pub fn new(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
        }
    }
}

/// Inner dependencies of a graph node.
///
/// `Absent` means nothing was recorded; `Recorded(vec![])` means the record
/// exists and is empty. A lockfile cannot tell these apart, so both are
/// written the same way and `Recorded(vec![])` comes back as `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InnerDeps {
    /// No inner dependencies recorded.
    #[default]
    Absent,
    /// Inner dependencies in declaration order.
    Recorded(Vec<ResolvedDependencyEdge>),
}

impl InnerDeps {
    /// The recorded edges, or an empty slice when absent.
    pub fn edges(&self) -> &[ResolvedDependencyEdge] {
        match self {
            Self::Absent => &[],
            Self::Recorded(edges) => edges,
        }
    }

    /// Returns `true` for [`InnerDeps::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Vec<ResolvedDependencyEdge>> for InnerDeps {
    fn from(edges: Vec<ResolvedDependencyEdge>) -> Self {
        Self::Recorded(edges)
    }
}

/// Mapping from exact package ids to their inner dependencies.
///
/// Keys are unique. Iteration follows [`PackageId`] ordering, so two graphs
/// with the same contents iterate identically no matter how they were built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependencyGraph {
    nodes: BTreeMap<PackageId, InnerDeps>,
}

impl DependencyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, returning the inner dependencies it replaced, if any.
    pub fn insert(&mut self, id: PackageId, inner: InnerDeps) -> Option<InnerDeps> {
        self.nodes.insert(id, inner)
    }

    /// Insert a node only if its id is not present yet.
    ///
    /// Returns `false` and leaves the graph untouched when the id exists.
    pub fn insert_if_absent(&mut self, id: PackageId, inner: InnerDeps) -> bool {
        match self.nodes.entry(id) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(inner);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Inner dependencies of `id`.
    pub fn get(&self, id: &PackageId) -> Option<&InnerDeps> {
        self.nodes.get(id)
    }

    /// Whether `id` is a node of this graph.
    pub fn contains(&self, id: &PackageId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes in [`PackageId`] order.
    pub fn iter(&self) -> btree_map::Iter<'_, PackageId, InnerDeps> {
        self.nodes.iter()
    }
}

impl FromIterator<(PackageId, InnerDeps)> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = (PackageId, InnerDeps)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DependencyGraph {
    type Item = (&'a PackageId, &'a InnerDeps);
    type IntoIter = btree_map::Iter<'a, PackageId, InnerDeps>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

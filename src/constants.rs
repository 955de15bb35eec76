//! Global constants used throughout the quire codebase.
//!
//! File names, the lockfile schema version, and the header written at the
//! top of every generated lockfile live here so that the writer, the loader
//! and the staleness oracle agree on them.

/// Name of the project manifest, relative to the project root.
pub const MANIFEST_NAME: &str = "quire.toml";

/// Name of the lockfile, relative to the project root.
///
/// There is exactly one lockfile per project, never one per target.
pub const LOCKFILE_NAME: &str = "quire.lock";

/// The single lockfile schema version this build reads and writes.
///
/// Loading compares against this value for exact equality. Older and newer
/// documents are both rejected; there is no migration path.
pub const LOCKFILE_VERSION: i64 = 1;

/// Comment block written before the first key of every lockfile.
///
/// Purely informational. The loader ignores comments entirely.
pub const LOCKFILE_HEADER: &str = "# This file is automatically generated by quire.\n\
                                   # It is not intended for manual editing.\n";

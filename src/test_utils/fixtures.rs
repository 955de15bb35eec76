//! Test fixtures for creating sample graphs and lockfiles

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{LOCKFILE_NAME, MANIFEST_NAME};
use crate::resolver::{DependencyGraph, InnerDeps, PackageId, ResolvedDependencyEdge};

/// Builder for resolver graphs used in tests
#[derive(Clone, Debug, Default)]
pub struct GraphFixture {
    graph: DependencyGraph,
}

impl GraphFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with recorded inner dependencies given as `(name, requirement)` pairs
    pub fn package(mut self, name: &str, version: &str, deps: &[(&str, &str)]) -> Self {
        let edges = deps.iter().map(|(n, r)| ResolvedDependencyEdge::new(*n, *r)).collect();
        self.graph.insert(PackageId::new(name, version), InnerDeps::Recorded(edges));
        self
    }

    /// Add a node with no inner dependencies recorded
    pub fn leaf(mut self, name: &str, version: &str) -> Self {
        self.graph.insert(PackageId::new(name, version), InnerDeps::Absent);
        self
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }

    /// A small application graph: one root with two transitive dependencies
    pub fn app() -> DependencyGraph {
        Self::new()
            .package("app-core", "1.0.0", &[("fmt", "^10.0"), ("spdlog", ">=1.11")])
            .package("spdlog", "1.12.0", &[("fmt", "^10.0")])
            .leaf("fmt", "10.1.0")
            .build()
    }
}

/// Test fixture for creating sample quire.lock files
#[derive(Clone, Debug)]
pub struct LockfileFixture {
    pub content: String,
    pub name: String,
}

impl LockfileFixture {
    /// Lockfile matching [`GraphFixture::app`]
    pub fn app() -> Self {
        Self {
            name: "app".to_string(),
            content: r#"
# This file is automatically generated by quire.
# It is not intended for manual editing.
version = 1

[[package]]
name = "app-core"
version = "1.0.0"
dependencies = ["fmt", "spdlog"]

[[package]]
name = "fmt"
version = "10.1.0"

[[package]]
name = "spdlog"
version = "1.12.0"
dependencies = ["fmt"]
"#
            .trim_start()
            .to_string(),
        }
    }

    /// Valid document with the given schema version and one package
    pub fn with_version(version: i64) -> Self {
        Self {
            name: format!("version_{version}"),
            content: format!(
                "version = {version}\n\n[[package]]\nname = \"a\"\nversion = \"1.0.0\"\n"
            ),
        }
    }

    /// Lockfile with broken TOML syntax
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: "version = 1\n\n[[package]\nname = \"a\"\n".to_string(),
        }
    }

    /// Syntactically valid TOML missing the required `version` key
    pub fn missing_version() -> Self {
        Self {
            name: "missing_version".to_string(),
            content: "[[package]]\nname = \"a\"\nversion = \"1.0.0\"\n".to_string(),
        }
    }

    /// Package entry with a field of the wrong type
    pub fn wrong_type() -> Self {
        Self {
            name: "wrong_type".to_string(),
            content: "version = 1\n\n[[package]]\nname = \"a\"\nversion = 100\n".to_string(),
        }
    }

    /// Write the lockfile to a directory
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let lockfile_path = dir.join(LOCKFILE_NAME);
        fs::write(&lockfile_path, &self.content)?;
        Ok(lockfile_path)
    }
}

/// Write a minimal manifest to a directory
pub fn write_manifest(dir: &Path) -> Result<PathBuf> {
    let manifest_path = dir.join(MANIFEST_NAME);
    fs::write(&manifest_path, "[package]\nname = \"app-core\"\nversion = \"1.0.0\"\n")?;
    Ok(manifest_path)
}

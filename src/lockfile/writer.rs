//! Persisting lock documents, gated by staleness.

use tracing::{debug, info};

use crate::core::{LockfileError, ProjectPaths};
use crate::resolver::DependencyGraph;

use super::staleness::{ManifestMtimeOracle, StalenessOracle};
use super::synthesize;

/// Result of [`LockfileWriter::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The lockfile was outdated and has been rewritten.
    Written,
    /// The lockfile was current; nothing was touched.
    UpToDate,
}

/// Writes `quire.lock` for one project.
///
/// Only [`overwrite`](Self::overwrite) touches the filesystem.
/// [`generate`](Self::generate) asks the staleness oracle first and does no I/O
/// at all when the lockfile is current, so calling it repeatedly with an
/// unchanged manifest never rewrites the file.
///
/// # Examples
///
/// ```rust,no_run
/// use quire::core::ProjectPaths;
/// use quire::lockfile::{GenerateOutcome, LockfileWriter};
/// use quire::resolver::DependencyGraph;
///
/// # fn example() -> Result<(), quire::core::LockfileError> {
/// let writer = LockfileWriter::new(ProjectPaths::new("."));
/// let graph = DependencyGraph::new();
///
/// if writer.generate(&graph)? == GenerateOutcome::UpToDate {
///     println!("quire.lock is up to date");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LockfileWriter<O = ManifestMtimeOracle> {
    paths: ProjectPaths,
    oracle: O,
}

impl LockfileWriter<ManifestMtimeOracle> {
    /// A writer using the manifest/lockfile modification-time oracle.
    pub fn new(paths: ProjectPaths) -> Self {
        Self::with_oracle(paths, ManifestMtimeOracle)
    }
}

impl<O: StalenessOracle> LockfileWriter<O> {
    /// A writer using a custom staleness oracle.
    pub fn with_oracle(paths: ProjectPaths, oracle: O) -> Self {
        Self {
            paths,
            oracle,
        }
    }

    /// The paths this writer targets.
    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// Synthesize the document for `graph` and replace the lockfile with it.
    ///
    /// Any existing lockfile is replaced wholesale.
    ///
    /// # Errors
    ///
    /// [`LockfileError::Io`] when the file cannot be written.
    pub fn overwrite(&self, graph: &DependencyGraph) -> Result<(), LockfileError> {
        let document = synthesize(graph);
        let path = self.paths.lockfile_path();
        document.save(&path)?;
        info!("Updated {} ({} packages)", path.display(), document.packages.len());
        Ok(())
    }

    /// Rewrite the lockfile only if the oracle reports it outdated.
    pub fn generate(&self, graph: &DependencyGraph) -> Result<GenerateOutcome, LockfileError> {
        if self.oracle.is_outdated(self.paths.root()) {
            self.overwrite(graph)?;
            Ok(GenerateOutcome::Written)
        } else {
            debug!("{} is up to date, skipping write", self.paths.lockfile_path().display());
            Ok(GenerateOutcome::UpToDate)
        }
    }
}

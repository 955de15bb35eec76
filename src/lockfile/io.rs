//! I/O operations for lockfile loading and saving.
//!
//! Loading never returns a partially populated document: the file is read
//! whole, parsed whole, and version-checked before anything is handed back.
//! Saving renders the full document into a buffer first and then replaces the
//! target file atomically.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::LockfileError;
use crate::utils::fs::atomic_write;

use super::LockDocument;
use super::helpers::render_lockfile;

impl LockDocument {
    /// Load a lockfile from disk and apply the schema version gate.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No file at `path`. Not an error: a first run has no lockfile
    /// * `Ok(Some(document))` - Parsed document at the supported version
    /// * `Err(FailedToReadLockfile)` - The file could not be read or is not a valid document
    /// * `Err(InvalidLockfileVersion)` - Parsed fine but `version` is not supported
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use quire::lockfile::LockDocument;
    /// use std::path::Path;
    ///
    /// # fn example() -> Result<(), quire::core::LockfileError> {
    /// match LockDocument::load(Path::new("quire.lock"))? {
    ///     Some(document) => println!("{} locked packages", document.packages.len()),
    ///     None => println!("no lockfile yet"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: &Path) -> Result<Option<Self>, LockfileError> {
        if !path.exists() {
            debug!("No lockfile at {}", path.display());
            return Ok(None);
        }

        debug!("Loading lockfile from {}", path.display());
        let content =
            fs::read_to_string(path).map_err(|e| LockfileError::FailedToReadLockfile {
                message: e.to_string(),
            })?;

        let document = Self::from_toml_str(&content)?;
        if let Err(e) = document.check_version() {
            warn!("Rejecting {}: {}", path.display(), e);
            return Err(e);
        }

        Ok(Some(document))
    }

    /// Parse lockfile text without checking the schema version.
    ///
    /// Comments, including the generated header, are ignored.
    pub fn from_toml_str(content: &str) -> Result<Self, LockfileError> {
        toml::from_str(content).map_err(|e| LockfileError::FailedToReadLockfile {
            message: e.to_string(),
        })
    }

    /// Render the document in canonical form: header, sorted packages, fixed layout.
    ///
    /// Rendering the same document twice yields identical text.
    pub fn to_toml_string(&self) -> Result<String, LockfileError> {
        render_lockfile(&self.normalize())
    }

    /// Save the document to `path`, replacing any existing file atomically.
    ///
    /// # Errors
    ///
    /// * `Serialize` - the document could not be rendered
    /// * `Io` - the temporary file could not be created, written, synced or renamed
    pub fn save(&self, path: &Path) -> Result<(), LockfileError> {
        let content = self.to_toml_string()?;
        atomic_write(path, content.as_bytes()).map_err(|e| LockfileError::io(path, e))?;
        debug!("Wrote {} packages to {}", self.packages.len(), path.display());
        Ok(())
    }
}

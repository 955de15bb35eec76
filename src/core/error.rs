//! Error handling for quire
//!
//! This module provides the error type returned by every lockfile operation and
//! a small presentation layer for callers that print errors to a terminal.
//!
//! # Architecture
//!
//! - [`LockfileError`] - Enumerated failure modes of the lockfile core
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//!
//! A missing lockfile is deliberately *not* represented here. Loading returns
//! `Ok(None)` for that case so callers can tell "first run" apart from every
//! failure below.
//!
//! # Examples
//!
//! ```rust,no_run
//! use quire::core::{ErrorContext, LockfileError};
//!
//! let context = ErrorContext::new(LockfileError::InvalidLockfileVersion { found: 2 })
//!     .with_suggestion("Delete quire.lock and resolve again")
//!     .with_details("This build only understands lockfile version 1");
//!
//! context.display();
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::LOCKFILE_VERSION;

/// The error type for lockfile operations.
///
/// None of these are retried or recovered internally. Each one short-circuits
/// the operation that produced it and is handed back to the caller, who decides
/// whether to fall back to a full resolution or abort.
#[derive(Error, Debug)]
pub enum LockfileError {
    /// The on-disk schema version is not the one this build understands.
    ///
    /// Raised for both older and newer documents. There is no partial
    /// compatibility and no automatic migration.
    ///
    /// # Fields
    /// - `found`: The `version` value read from the document
    #[error("Invalid lockfile version: found {found}, expected {expected}", expected = LOCKFILE_VERSION)]
    InvalidLockfileVersion {
        /// The `version` value read from the document
        found: i64,
    },

    /// The lockfile exists but could not be read or parsed.
    ///
    /// Covers unreadable files, TOML syntax errors, missing required fields and
    /// fields of the wrong type. `message` is the underlying diagnostic verbatim.
    #[error("Failed to read lockfile: {message}")]
    FailedToReadLockfile {
        /// Diagnostic text from the reader or the TOML parser
        message: String,
    },

    /// The lockfile could not be written.
    #[error("Failed to write lockfile: {}", path.display())]
    Io {
        /// Path of the file being written
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Rendering the document to TOML failed.
    #[error("Failed to serialize lockfile: {reason}")]
    Serialize {
        /// Serializer diagnostic
        reason: String,
    },
}

impl LockfileError {
    /// Build a [`LockfileError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// An error enriched with optional details and a suggested fix.
///
/// Suggestions are actionable steps for the user. Details explain what the
/// error means. Both are optional.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying lockfile error
    pub error: LockfileError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: LockfileError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error context to stderr with terminal colors.
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

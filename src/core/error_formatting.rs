//! Conversion of arbitrary errors into user-facing [`ErrorContext`] values.

use super::error::{ErrorContext, LockfileError};
use crate::constants::{LOCKFILE_NAME, LOCKFILE_VERSION};

/// Convert any error into an [`ErrorContext`] with tailored suggestions.
///
/// The error chain is walked so that a [`LockfileError`] wrapped in `anyhow`
/// context is still recognized. Unknown errors fall back to a generic
/// `FailedToReadLockfile` carrying the full chain.
///
/// # Examples
///
/// ```rust,no_run
/// use quire::core::{user_friendly_error, LockfileError};
///
/// let error = anyhow::Error::from(LockfileError::InvalidLockfileVersion { found: 3 });
/// user_friendly_error(error).display();
/// ```
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(lockfile_error) = cause.downcast_ref::<LockfileError>() {
            return create_error_context(lockfile_error);
        }
    }

    ErrorContext::new(LockfileError::FailedToReadLockfile {
        message: format!("{error:#}"),
    })
}

/// Build the context for a known [`LockfileError`].
///
/// The error is re-created rather than moved because `io::Error` is not `Clone`.
pub fn create_error_context(error: &LockfileError) -> ErrorContext {
    match error {
        LockfileError::InvalidLockfileVersion { found } => {
            let direction = if *found > LOCKFILE_VERSION {
                "was written by a newer version of quire"
            } else {
                "uses an older format that is no longer read"
            };
            ErrorContext::new(LockfileError::InvalidLockfileVersion { found: *found })
                .with_details(format!(
                    "{LOCKFILE_NAME} has version {found}, which {direction}. Only version {LOCKFILE_VERSION} is supported"
                ))
                .with_suggestion(format!(
                    "Delete {LOCKFILE_NAME} to resolve from scratch, or update quire"
                ))
        }
        LockfileError::FailedToReadLockfile { message } => {
            ErrorContext::new(LockfileError::FailedToReadLockfile {
                message: message.clone(),
            })
            .with_details("The lockfile exists but is not a valid lock document")
            .with_suggestion(format!(
                "Restore {LOCKFILE_NAME} from version control, or delete it to regenerate"
            ))
        }
        LockfileError::Io { path, source } => {
            let suggestion = match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check file ownership and permissions of the project directory"
                }
                std::io::ErrorKind::NotFound => "Check that the project directory exists",
                _ => "Check available disk space and that the file is not locked",
            };
            ErrorContext::new(LockfileError::io(
                path.clone(),
                std::io::Error::new(source.kind(), source.to_string()),
            ))
            .with_details(source.to_string())
            .with_suggestion(suggestion)
        }
        LockfileError::Serialize { reason } => ErrorContext::new(LockfileError::Serialize {
            reason: reason.clone(),
        })
        .with_details("The resolved graph could not be rendered as TOML"),
    }
}

//! Core types shared by every quire component.
//!
//! - [`error`] - [`LockfileError`] and the [`ErrorContext`] presentation wrapper
//! - [`error_formatting`] - [`user_friendly_error`] for turning any error into an [`ErrorContext`]
//! - [`paths`] - [`ProjectPaths`], the single source of manifest and lockfile locations

pub mod error;
pub mod error_formatting;
pub mod paths;

pub use error::{ErrorContext, LockfileError};
pub use error_formatting::{create_error_context, user_friendly_error};
pub use paths::ProjectPaths;

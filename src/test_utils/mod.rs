//! Test utilities for quire
//!
//! Helpers for unit and integration tests: one-time tracing setup and fixtures
//! for graphs and lockfiles.
//!
//! # Example
//!
//! ```rust,no_run
//! use quire::test_utils::{GraphFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let graph = GraphFixture::app();
//! assert_eq!(graph.len(), 3);
//! ```

pub mod fixtures;

pub use fixtures::{GraphFixture, LockfileFixture, write_manifest};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` when given, otherwise
/// `RUST_LOG` when set, otherwise leaves logging off.
///
/// ```bash
/// RUST_LOG=quire=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

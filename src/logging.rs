//! Logging setup for the command-line binary
//!
//! Diagnostics go to stderr so that command output on stdout stays clean.
//! The level is taken from `RUST_LOG` and defaults to `warn`, which shows skipped
//! records while loading but not routine rental activity.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global fmt subscriber
///
/// Calling it more than once is harmless; later calls leave the first subscriber in
/// place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Tracing setup: structured JSON logging plus named event helpers.

pub mod events;

use kwgroup_core::config::defaults::{DEFAULT_LOG_LEVEL, LOG_FILTER_ENV};
use kwgroup_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `KWGROUP_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. A second call is a no-op.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    install(filter);
}

/// Initialize tracing from config; `KWGROUP_LOG` still takes precedence.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    // Already-installed subscribers win; embedding hosts may own the global.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

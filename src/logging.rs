//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries nothing but the JSON manifest.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`.
pub const LOG_ENV_VAR: &str = "REPOTREE_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .try_init();
}

fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

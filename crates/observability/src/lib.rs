//! Tracing/logging setup shared by the binary and integration tests.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// Defaults to `info`, overridable via `RUST_LOG`. Safe to call multiple
/// times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// JSON variant used when log output is collected rather than read live.
pub fn init_json() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

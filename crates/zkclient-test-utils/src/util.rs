//! Utility functions.

use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber that writes through the test harness's
/// captured output. Filtering follows `RUST_LOG`, defaulting to `debug`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // A second install fails once a global subscriber exists, which is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

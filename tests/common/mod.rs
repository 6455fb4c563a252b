//! Common test utilities for integration tests.

use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber once per test binary so
/// `RUST_LOG=shelf=debug` shows bus and settings activity during test
/// runs. Safe to call from every test; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

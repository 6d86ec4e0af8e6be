//! Shared helpers for integration tests

use tracing_subscriber::EnvFilter;

/// Routes solver events to the test output; set `RUST_LOG=aoc_solutions=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//! Shared helpers for cross-crate workspace tests.

/// Initialize test logging once; later calls are no-ops.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

//! One-time tracing setup for test binaries.
//!
//! Unit tests call [`init`] from a `ctor` in the library; integration tests do
//! the same from their own `ctor`. Output goes through the test writer so it
//! is captured per test.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Quiet unless asked otherwise.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Filter directive: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_DIRECTIVE`].
pub fn directive_from(test_log: Option<String>, rust_log: Option<String>) -> String {
    test_log
        .or(rust_log)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Install the test subscriber. Safe to call from every test binary and
/// thread; later calls are no-ops.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directive = directive_from(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}

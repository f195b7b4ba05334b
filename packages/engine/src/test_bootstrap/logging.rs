#![cfg(test)]

//! Unified test logging initialization
//!
//! Single source of truth for test logging. Uses a one-time guard to prevent
//! double initialization and integrates with cargo's output capture.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent and race-safe. The level is controlled by `TEST_LOG`, then
/// `RUST_LOG`, defaulting to `warn`.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .without_time()
            .try_init();
    });
}

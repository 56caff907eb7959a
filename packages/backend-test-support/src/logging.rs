//! Unified test logging initialization
//!
//! One-time, race-safe subscriber setup shared by unit tests (via the
//! backend's `#[ctor]` hook) and every integration test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
fn test_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize structured logging for tests.
///
/// Safe to call any number of times. Output goes through the test writer so
/// cargo/nextest capture works. Setting `TEST_LOG_JSON=1` switches to the
/// same JSON layout the server binary emits, which is handy when checking
/// span fields such as `trace_id`.
///
/// ```bash
/// TEST_LOG=debug cargo test -p bookshelf --test routes_tests
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let json = matches!(
            std::env::var("TEST_LOG_JSON").as_deref(),
            Ok("1") | Ok("true")
        );

        let builder = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time();

        // try_init: another subscriber may already be installed
        if json {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}

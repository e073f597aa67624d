//! Unified test logging initialization
//!
//! One idempotent entry point shared by the engine's unit tests and its
//! integration test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const QUIET_FILTER: &str = "warn";

static INSTALLED: OnceCell<()> = OnceCell::new();

fn test_filter() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(QUIET_FILTER))
}

/// Install the test subscriber once per process.
///
/// Safe to call any number of times from any thread. The filter is taken from
/// `TEST_LOG`, then `RUST_LOG`, then [`QUIET_FILTER`].
///
/// ```bash
/// # Watch bid resolution and trick winners while a test runs
/// TEST_LOG=estimation=debug cargo test -p estimation golden
/// ```
pub fn init() {
    INSTALLED.get_or_init(|| {
        // output goes through the test harness capture, untimed
        let installed = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .try_init();
        // another subscriber may already own the global slot
        drop(installed);
    });
}

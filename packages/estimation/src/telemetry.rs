//! Structured logging for binaries that embed the engine.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is unset: round summaries only.
pub const DEFAULT_FILTER: &str = "info";

/// Install a global JSON subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`. Fails if a global subscriber is already set.
pub fn try_init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .try_init()
}

/// [`try_init_tracing`] with [`DEFAULT_FILTER`]; a second call is a no-op.
pub fn init_tracing() {
    let _ = try_init_tracing(DEFAULT_FILTER);
}

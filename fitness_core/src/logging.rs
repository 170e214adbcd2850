//! Tracing setup for fittrack.
//!
//! Workout summaries own stdout, so every log line is written to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when RUST_LOG is unset and verbose output was not requested
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber; `verbose` lowers the default filter to debug
pub fn init(verbose: bool) {
    init_with_level(if verbose { "debug" } else { DEFAULT_LEVEL })
}

/// Install the global subscriber with `default_level` unless RUST_LOG is set
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

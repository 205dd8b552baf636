//! Structured logging setup via `tracing-subscriber`.
//!
//! Library code only emits events; binaries and tests opt in by calling
//! [`init_tracing`].

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `tally=debug`.
pub const LOG_ENV_VAR: &str = "TALLY_LOG";

/// Filter used when `TALLY_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a global fmt subscriber. Returns `false` if one was already set.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Span and event target names as constants for programmatic use.
pub mod names {
    pub const AGGREGATE: &str = "tally.aggregate";
    pub const CONVOLVE: &str = "tally.convolve";
    pub const FIT: &str = "tally.fit";
}

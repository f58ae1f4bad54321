//! Tracing setup: an `EnvFilter` subscriber writing to stderr.

pub mod events;

use tracing_subscriber::EnvFilter;
use veritas_core::config::defaults::{ENV_LOG_FILTER, ENV_LOG_FORMAT};

/// Filter used when `VERITAS_LOG` is unset or invalid. Stdout carries
/// reports, so only warnings and errors reach stderr by default.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber.
///
/// Respects the `VERITAS_LOG` environment variable for filtering. Set
/// `VERITAS_LOG_FORMAT=json` for one JSON object per event.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = std::env::var(ENV_LOG_FORMAT).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    // A subscriber may already be installed (tests, embedding hosts).
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

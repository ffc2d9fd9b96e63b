//! crates/logging/src/tracing_bridge.rs
//! Installs the global `tracing` subscriber.
//!
//! Diagnostics are formatted by `tracing-subscriber` and written to standard
//! error so they never interleave with report lines on standard output. The
//! `INTEGRITY_LOG` environment variable, when set, takes precedence over the
//! level chosen on the command line and accepts full `EnvFilter` directives.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::LogLevel;

/// Environment variable holding `EnvFilter` directives.
const FILTER_ENV: &str = "INTEGRITY_LOG";

/// Initialise diagnostics at `level`.
///
/// Returns `false` when a global subscriber was already installed, which
/// happens when the entry point runs more than once in a process (tests).
pub fn init_tracing(level: LogLevel) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(level.filter().into())
        .with_env_var(FILTER_ENV)
        .from_env_lossy();
    init_tracing_with_filter(filter)
}

/// Initialise diagnostics with an explicit filter.
pub fn init_tracing_with_filter(filter: EnvFilter) -> bool {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_is_refused_without_panicking() {
        let _ = init_tracing(LogLevel::Warn);
        assert!(!init_tracing(LogLevel::Debug));
    }
}

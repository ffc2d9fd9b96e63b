//! Integration tests for `--loglevel` and `--verbose`/`--quiet` mapping.
//!
//! These tests check that each command-line level enables exactly the
//! `tracing` events at or above its severity, and that report verbosity is
//! resolved independently of the diagnostic level.

use logging::{LogLevel, Verbosity};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

fn enabled_at(level: LogLevel) -> [bool; 5] {
    let filter = EnvFilter::builder()
        .with_default_directive(level.filter().into())
        .parse_lossy("");
    let subscriber = tracing_subscriber::registry().with(filter);
    tracing::subscriber::with_default(subscriber, || {
        [
            tracing::enabled!(Level::ERROR),
            tracing::enabled!(Level::WARN),
            tracing::enabled!(Level::INFO),
            tracing::enabled!(Level::DEBUG),
            tracing::enabled!(Level::TRACE),
        ]
    })
}

// ============================================================================
// Diagnostic levels
// ============================================================================

#[test]
fn default_level_is_info() {
    assert_eq!(LogLevel::default(), LogLevel::Info);
    assert_eq!(enabled_at(LogLevel::Info), [true, true, true, false, false]);
}

#[test]
fn warn_suppresses_info_events() {
    assert_eq!(enabled_at(LogLevel::Warn), [true, true, false, false, false]);
}

#[test]
fn debug_shows_state_transitions_but_not_syscalls() {
    assert_eq!(enabled_at(LogLevel::Debug), [true, true, true, true, false]);
}

#[test]
fn trace_enables_everything() {
    assert_eq!(enabled_at(LogLevel::Trace), [true; 5]);
}

#[test]
fn panic_fatal_and_error_only_show_errors() {
    for level in [LogLevel::Panic, LogLevel::Fatal, LogLevel::Error] {
        assert_eq!(enabled_at(level), [true, false, false, false, false], "{level}");
    }
}

#[test]
fn command_line_names_parse_to_levels() {
    let names: Vec<_> = LogLevel::ALL.iter().map(|level| level.to_string()).collect();
    assert_eq!(
        names,
        ["panic", "fatal", "error", "warn", "info", "debug", "trace"]
    );
    assert_eq!(LogLevel::from_name_or_default("debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_name_or_default(""), LogLevel::Info);
}

// ============================================================================
// Report verbosity
// ============================================================================

#[test]
fn verbosity_levels_match_info_output() {
    assert_eq!(Verbosity::from_flags(false, true).level(), 0);
    assert_eq!(Verbosity::default().level(), 1);
    assert_eq!(Verbosity::from_flags(true, false).level(), 2);
}

#[test]
fn quiet_and_verbose_together_are_quiet() {
    assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
}

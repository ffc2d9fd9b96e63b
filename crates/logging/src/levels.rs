use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Diagnostic log level accepted by `--loglevel`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Only unrecoverable failures.
    Panic,
    /// Only fatal failures.
    Fatal,
    /// Errors.
    Error,
    /// Recovered anomalies.
    Warn,
    /// Default level.
    #[default]
    Info,
    /// Per-file state transitions.
    Debug,
    /// Everything, including attribute syscalls.
    Trace,
}

/// Returned by [`LogLevel::from_str`] for names outside the accepted set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown log level '{name}'")]
pub struct UnknownLogLevel {
    /// The rejected name.
    pub name: String,
}

impl LogLevel {
    /// Every level, most severe first.
    pub const ALL: [Self; 7] = [
        Self::Panic,
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Lower-case name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Panic => "panic",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parses `name`, falling back to [`LogLevel::Info`] when it is unknown.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// Maximum `tracing` level enabled at this setting.
    ///
    /// `tracing` has nothing above `ERROR`, so the two most severe levels
    /// collapse onto it.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Panic | Self::Fatal | Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == name)
            .ok_or_else(|| UnknownLogLevel {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

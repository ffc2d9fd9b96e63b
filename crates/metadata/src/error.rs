use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure reading, writing or removing one extended attribute.
///
/// Absence of the attribute is never reported through this type; stores
/// recover it into `None`/`false` before returning.
#[derive(Debug, Error)]
#[error("failed to {context} {key}: {source}")]
pub struct AttributeError {
    context: &'static str,
    path: PathBuf,
    key: String,
    #[source]
    source: io::Error,
}

impl AttributeError {
    /// Creates an error describing `context` on `key` of `path`.
    pub fn new(
        context: &'static str,
        path: impl Into<PathBuf>,
        key: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self {
            context,
            path: path.into(),
            key: key.into(),
            source,
        }
    }

    /// Operation that failed, e.g. `read extended attribute`.
    #[must_use]
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// File the attribute belongs to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Attribute name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying OS error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        &self.source
    }
}

/// The host operating system has no known attribute naming convention.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported platform: {os}")]
pub struct UnsupportedPlatform {
    /// Operating system identifier as reported by `std::env::consts::OS`.
    pub os: String,
}

//! Error types for the engine crate.

use std::io;
use std::path::PathBuf;

use checksums::DigestError;
use metadata::AttributeError;
use thiserror::Error;

/// Failure captured inside a failed [`Outcome`](crate::Outcome).
#[derive(Debug, Error)]
pub enum ActionError {
    /// Digest resolution or computation failed.
    #[error(transparent)]
    Digest(#[from] DigestError),
    /// An attribute read, write or removal failed.
    #[error(transparent)]
    Attribute(#[from] AttributeError),
    /// The file content could not be opened for hashing.
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

/// Action name outside `check|add|delete|list|transform`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown action \"{name}\"")]
pub struct UnknownAction {
    /// The rejected name.
    pub name: String,
}

/// Display format outside `sha1sum|md5sum|cksum`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown display format \"{name}\"")]
pub struct UnknownDisplayFormat {
    /// The rejected name.
    pub name: String,
}

use std::io;

use thiserror::Error;

/// Failure raised while resolving a digest or computing a fingerprint.
#[derive(Debug, Error)]
pub enum DigestError {
    /// The identifier is not registered.
    #[error("unknown digest type '{identifier}'")]
    Unknown {
        /// Identifier that was requested.
        identifier: String,
    },
    /// The identifier is known but its algorithm was not compiled in.
    #[error("digest '{identifier}' is not available in this build")]
    Unavailable {
        /// Identifier that was requested.
        identifier: String,
    },
    /// Reading the content stream failed.
    #[error("failed to read content for {identifier}: {source}")]
    Read {
        /// Digest being computed.
        identifier: &'static str,
        /// Underlying error emitted by the reader.
        #[source]
        source: io::Error,
    },
    /// The content cannot be fingerprinted by this provider.
    #[error("cannot compute {identifier}: {reason}")]
    Content {
        /// Digest being computed.
        identifier: &'static str,
        /// Human readable explanation.
        reason: String,
    },
}

impl DigestError {
    pub(crate) fn read(identifier: &'static str, source: io::Error) -> Self {
        Self::Read { identifier, source }
    }

    pub(crate) fn content(identifier: &'static str, reason: impl Into<String>) -> Self {
        Self::Content {
            identifier,
            reason: reason.into(),
        }
    }

    /// Reports whether the error happened while computing rather than resolving.
    #[must_use]
    pub const fn is_compute_failure(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Content { .. })
    }
}

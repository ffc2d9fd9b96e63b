use std::fmt;
use std::io::{Read, Seek};

use crate::DigestError;

/// Content stream consumed by a [`DigestProvider`].
///
/// Providers that only need a forward pass ignore the seek capability; the
/// whole-file and perceptual fingerprints use it to measure the stream or to
/// rewind after sniffing a header.
pub trait DigestSource: Read + Seek {}

impl<T: Read + Seek + ?Sized> DigestSource for T {}

/// Family a digest belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigestKind {
    /// Cryptographic hash over the full content.
    Cryptographic,
    /// Non-cryptographic fingerprint over the file size and its edges.
    WholeFileBinary,
    /// Perceptual hash of decoded image content.
    Perceptual,
}

impl DigestKind {
    /// Returns a short lower-case label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cryptographic => "cryptographic",
            Self::WholeFileBinary => "whole-file-binary",
            Self::Perceptual => "perceptual",
        }
    }
}

impl fmt::Display for DigestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier and family of a registered digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DigestSpec {
    identifier: &'static str,
    kind: DigestKind,
}

impl DigestSpec {
    /// Creates a spec for `identifier`.
    #[must_use]
    pub const fn new(identifier: &'static str, kind: DigestKind) -> Self {
        Self { identifier, kind }
    }

    /// Returns the unique identifier, e.g. `sha256`.
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        self.identifier
    }

    /// Returns the digest family.
    #[must_use]
    pub const fn kind(&self) -> DigestKind {
        self.kind
    }
}

/// Produces a textual fingerprint from file content.
pub trait DigestProvider {
    /// Describes the digest this provider computes.
    fn spec(&self) -> DigestSpec;

    /// Consumes `source` from its current position and returns the fingerprint.
    fn compute(&self, source: &mut dyn DigestSource) -> Result<String, DigestError>;

    /// Shorthand for `self.spec().identifier()`.
    fn identifier(&self) -> &'static str {
        self.spec().identifier()
    }
}

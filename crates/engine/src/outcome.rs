use std::fmt;
use std::path::{Path, PathBuf};

use metadata::AttributeKey;

use crate::{Action, ActionError, FileUnit};

/// Terminal classification of an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The action did what was asked.
    Success,
    /// Nothing needed doing.
    Skipped,
    /// The action could not complete.
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        })
    }
}

/// Why an outcome ended the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reason {
    /// `check`: stored and computed values are equal.
    Match,
    /// `add`: value written and confirmed.
    Added,
    /// `delete`: attribute removed.
    Removed,
    /// `list`: stored value read.
    Listed,
    /// `transform`: legacy attribute moved to the canonical key.
    Migrated,
    /// No value is stored for the digest.
    NoValue,
    /// `add` without force found an existing value.
    AlreadyExists,
    /// `delete` found nothing to remove.
    NotFound,
    /// `transform` found none of the legacy attributes.
    NoLegacyAttribute,
    /// `check`: stored and computed values differ.
    Mismatch,
    /// `add`: the value read back after writing differs from the one written.
    ConfirmMismatch,
    /// The provider failed on this file's content.
    ComputeError,
    /// The digest is known but not compiled into this build.
    DigestUnavailable,
    /// The digest identifier is not registered.
    UnknownDigest,
    /// Reading the stored value to decide what to do failed.
    ProbeFailed,
    /// Reading an attribute failed after the decision was made.
    ReadError,
    /// Writing an attribute failed.
    WriteError,
    /// Removing an attribute failed.
    RemoveError,
}

impl Reason {
    /// Status implied by this reason.
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            Self::Match | Self::Added | Self::Removed | Self::Listed | Self::Migrated => {
                Status::Success
            }
            Self::NoValue | Self::AlreadyExists | Self::NotFound => Status::Skipped,
            Self::NoLegacyAttribute
            | Self::Mismatch
            | Self::ConfirmMismatch
            | Self::ComputeError
            | Self::DigestUnavailable
            | Self::UnknownDigest
            | Self::ProbeFailed
            | Self::ReadError
            | Self::WriteError
            | Self::RemoveError => Status::Failed,
        }
    }

    /// Short lower-case description used when no underlying error exists.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Match => "checksum matches",
            Self::Added => "checksum added",
            Self::Removed => "checksum removed",
            Self::Listed => "checksum listed",
            Self::Migrated => "legacy attribute migrated",
            Self::NoValue => "no checksum stored",
            Self::AlreadyExists => "checksum already stored",
            Self::NotFound => "no attribute",
            Self::NoLegacyAttribute => "no old attributes found",
            Self::Mismatch => "checksum mismatch",
            Self::ConfirmMismatch => "checksum read back differs from checksum written",
            Self::ComputeError => "failed to compute checksum",
            Self::DigestUnavailable => "digest not available in this build",
            Self::UnknownDigest => "unknown digest",
            Self::ProbeFailed => "failed to read stored checksum",
            Self::ReadError => "failed to read attribute",
            Self::WriteError => "failed to write attribute",
            Self::RemoveError => "failed to remove attribute",
        }
    }

    /// Failures that are informational to the user rather than errors.
    #[must_use]
    pub const fn is_informational(self) -> bool {
        matches!(self, Self::NoLegacyAttribute)
    }
}

/// Result of one action applied to one (file, digest) pair.
#[derive(Debug)]
pub struct Outcome {
    action: Action,
    path: PathBuf,
    digest: String,
    key: AttributeKey,
    reason: Reason,
    stored: Option<String>,
    computed: Option<String>,
    legacy_key: Option<AttributeKey>,
    error: Option<ActionError>,
}

impl Outcome {
    pub(crate) fn new(action: Action, unit: &FileUnit, reason: Reason) -> Self {
        Self {
            action,
            path: unit.path().to_path_buf(),
            digest: unit.digest().to_owned(),
            key: unit.key().clone(),
            reason,
            stored: None,
            computed: unit.checksum().map(str::to_owned),
            legacy_key: None,
            error: None,
        }
    }

    pub(crate) fn with_stored(mut self, stored: impl Into<String>) -> Self {
        self.stored = Some(stored.into());
        self
    }

    pub(crate) fn with_legacy_key(mut self, key: AttributeKey) -> Self {
        self.legacy_key = Some(key);
        self
    }

    pub(crate) fn with_error(mut self, error: impl Into<ActionError>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Action that produced the outcome.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// File the outcome is about.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Digest identifier.
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Canonical attribute key for the digest.
    #[must_use]
    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    /// Classification detail.
    #[must_use]
    pub const fn reason(&self) -> Reason {
        self.reason
    }

    /// Terminal status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.reason.status()
    }

    /// Value found in the attribute, when one was read.
    #[must_use]
    pub fn stored(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    /// Value computed from content, when one was computed.
    #[must_use]
    pub fn computed(&self) -> Option<&str> {
        self.computed.as_deref()
    }

    /// Legacy attribute migrated by `transform`.
    #[must_use]
    pub fn legacy_key(&self) -> Option<&AttributeKey> {
        self.legacy_key.as_ref()
    }

    /// Underlying failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ActionError> {
        self.error.as_ref()
    }

    /// The checksum most relevant to the outcome: computed when available,
    /// otherwise stored.
    #[must_use]
    pub fn checksum(&self) -> Option<&str> {
        self.computed().or_else(|| self.stored())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadata::{Namespace, Platform};

    fn unit() -> FileUnit {
        FileUnit::new(
            "/data/a.bin",
            3,
            "sha1",
            Namespace::new(Platform::Linux).key("sha1"),
        )
    }

    #[test]
    fn reasons_map_onto_three_statuses() {
        assert_eq!(Reason::Match.status(), Status::Success);
        assert_eq!(Reason::Migrated.status(), Status::Success);
        assert_eq!(Reason::NotFound.status(), Status::Skipped);
        assert_eq!(Reason::AlreadyExists.status(), Status::Skipped);
        assert_eq!(Reason::NoLegacyAttribute.status(), Status::Failed);
        assert_eq!(Reason::ConfirmMismatch.status(), Status::Failed);
    }

    #[test]
    fn only_missing_legacy_attribute_is_informational() {
        assert!(Reason::NoLegacyAttribute.is_informational());
        assert!(!Reason::Mismatch.is_informational());
    }

    #[test]
    fn outcome_carries_unit_identity() {
        let mut unit = unit();
        unit.set_checksum("abc".to_owned());
        let outcome = Outcome::new(Action::Check, &unit, Reason::Mismatch).with_stored("def");
        assert_eq!(outcome.path(), Path::new("/data/a.bin"));
        assert_eq!(outcome.digest(), "sha1");
        assert_eq!(outcome.key().as_str(), "user.integrity.sha1");
        assert_eq!(outcome.stored(), Some("def"));
        assert_eq!(outcome.computed(), Some("abc"));
        assert_eq!(outcome.checksum(), Some("abc"));
        assert_eq!(outcome.status(), Status::Failed);
    }
}

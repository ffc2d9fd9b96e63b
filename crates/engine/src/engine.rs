//! Per (file, digest) state machine.

use std::fs::File;
use std::path::Path;

use checksums::{DigestError, DigestRegistry};
use metadata::{AttributeStore, Namespace};
use tracing::{debug, warn};

use crate::{Action, ActionError, FileUnit, Outcome, Reason};

/// Digest targeted by `transform` regardless of the request.
pub(crate) const TRANSFORM_DIGEST: &str = "sha1";

/// Applies actions to files using a digest registry and an attribute store.
#[derive(Debug)]
pub struct Engine<S> {
    registry: DigestRegistry,
    namespace: Namespace,
    store: S,
}

impl<S: AttributeStore> Engine<S> {
    /// Creates an engine.
    pub fn new(registry: DigestRegistry, namespace: Namespace, store: S) -> Self {
        Self {
            registry,
            namespace,
            store,
        }
    }

    /// Registry used to resolve digests.
    pub fn registry(&self) -> &DigestRegistry {
        &self.registry
    }

    /// Attribute naming rules.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Underlying attribute store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs `action` for one digest on one file.
    ///
    /// `transform` ignores `digest` and always targets `sha1`.
    pub fn execute(
        &self,
        action: Action,
        path: &Path,
        size: u64,
        digest: &str,
        force: bool,
    ) -> Outcome {
        let digest = if action == Action::Transform {
            TRANSFORM_DIGEST
        } else {
            digest
        };
        let mut unit = FileUnit::new(path, size, digest, self.namespace.key(digest));
        debug!(path = %path.display(), digest, %action, key = %unit.key(), "processing");

        let outcome = match action {
            Action::Check => self.check(&mut unit),
            Action::Add => self.add(&mut unit, force),
            Action::Delete => self.delete(&unit),
            Action::List => self.list(&unit),
            Action::Transform => self.transform(&unit),
        };
        debug!(
            path = %path.display(),
            digest,
            status = %outcome.status(),
            reason = ?outcome.reason(),
            "finished"
        );
        outcome
    }

    fn probe(&self, unit: &FileUnit) -> Result<Option<String>, ActionError> {
        let value = self.store.get(unit.path(), unit.key().as_str())?;
        Ok(value.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    fn compute(&self, unit: &mut FileUnit) -> Result<(), (Reason, ActionError)> {
        let provider = self.registry.resolve(unit.digest()).map_err(|error| {
            let reason = match error {
                DigestError::Unavailable { .. } => Reason::DigestUnavailable,
                DigestError::Unknown { .. } => Reason::UnknownDigest,
                DigestError::Read { .. } | DigestError::Content { .. } => Reason::ComputeError,
            };
            (reason, ActionError::from(error))
        })?;

        let mut file = File::open(unit.path()).map_err(|source| {
            (
                Reason::ComputeError,
                ActionError::Open {
                    path: unit.path().to_path_buf(),
                    source,
                },
            )
        })?;
        debug!(path = %unit.path().display(), digest = unit.digest(), size = unit.size(), "computing");
        let checksum = provider
            .compute(&mut file)
            .map_err(|error| (Reason::ComputeError, ActionError::from(error)))?;
        unit.set_checksum(checksum);
        Ok(())
    }

    fn check(&self, unit: &mut FileUnit) -> Outcome {
        let stored = match self.probe(unit) {
            Ok(Some(stored)) => stored,
            Ok(None) => return Outcome::new(Action::Check, unit, Reason::NoValue),
            Err(error) => {
                return Outcome::new(Action::Check, unit, Reason::ProbeFailed).with_error(error);
            }
        };

        if let Err((reason, error)) = self.compute(unit) {
            return Outcome::new(Action::Check, unit, reason)
                .with_stored(stored)
                .with_error(error);
        }

        let reason = if unit.checksum() == Some(stored.as_str()) {
            Reason::Match
        } else {
            Reason::Mismatch
        };
        Outcome::new(Action::Check, unit, reason).with_stored(stored)
    }

    fn add(&self, unit: &mut FileUnit, force: bool) -> Outcome {
        if !force {
            match self.probe(unit) {
                Ok(None) => {}
                Ok(Some(stored)) => {
                    return Outcome::new(Action::Add, unit, Reason::AlreadyExists)
                        .with_stored(stored);
                }
                Err(error) => {
                    return Outcome::new(Action::Add, unit, Reason::ProbeFailed).with_error(error);
                }
            }
        }

        if let Err((reason, error)) = self.compute(unit) {
            return Outcome::new(Action::Add, unit, reason).with_error(error);
        }
        let Some(checksum) = unit.checksum() else {
            return Outcome::new(Action::Add, unit, Reason::ComputeError);
        };

        if let Err(error) = self
            .store
            .set(unit.path(), unit.key().as_str(), checksum.as_bytes())
        {
            return Outcome::new(Action::Add, unit, Reason::WriteError).with_error(error);
        }

        match self.probe(unit) {
            Ok(Some(read_back)) if read_back == checksum => {
                Outcome::new(Action::Add, unit, Reason::Added)
            }
            Ok(Some(read_back)) => {
                warn!(
                    path = %unit.path().display(),
                    key = %unit.key(),
                    written = checksum,
                    read_back = %read_back,
                    "attribute read back differs from value written"
                );
                Outcome::new(Action::Add, unit, Reason::ConfirmMismatch).with_stored(read_back)
            }
            Ok(None) => {
                warn!(path = %unit.path().display(), key = %unit.key(), "attribute missing after write");
                Outcome::new(Action::Add, unit, Reason::ConfirmMismatch)
            }
            Err(error) => Outcome::new(Action::Add, unit, Reason::ReadError).with_error(error),
        }
    }

    fn delete(&self, unit: &FileUnit) -> Outcome {
        match self.store.remove(unit.path(), unit.key().as_str()) {
            Ok(true) => Outcome::new(Action::Delete, unit, Reason::Removed),
            Ok(false) => Outcome::new(Action::Delete, unit, Reason::NotFound),
            Err(error) => Outcome::new(Action::Delete, unit, Reason::RemoveError).with_error(error),
        }
    }

    fn list(&self, unit: &FileUnit) -> Outcome {
        match self.probe(unit) {
            Ok(Some(stored)) => Outcome::new(Action::List, unit, Reason::Listed).with_stored(stored),
            Ok(None) => Outcome::new(Action::List, unit, Reason::NoValue),
            Err(error) => Outcome::new(Action::List, unit, Reason::ProbeFailed).with_error(error),
        }
    }

    fn transform(&self, unit: &FileUnit) -> Outcome {
        let path = unit.path();
        match self.probe(unit) {
            Ok(None) => {}
            Ok(Some(stored)) => {
                debug!(
                    path = %path.display(),
                    key = %unit.key(),
                    "canonical attribute present, nothing to migrate"
                );
                return Outcome::new(Action::Transform, unit, Reason::NoLegacyAttribute)
                    .with_stored(stored);
            }
            Err(error) => {
                return Outcome::new(Action::Transform, unit, Reason::ReadError).with_error(error);
            }
        }

        for legacy in self.namespace.legacy_keys() {
            let value = match self.store.get(path, legacy.as_str()) {
                Ok(Some(value)) => value,
                Ok(None) => {
                    debug!(path = %path.display(), key = %legacy, "legacy attribute absent");
                    continue;
                }
                Err(error) => {
                    return Outcome::new(Action::Transform, unit, Reason::ReadError)
                        .with_legacy_key(legacy)
                        .with_error(error);
                }
            };

            let stored = String::from_utf8_lossy(&value).into_owned();
            if let Err(error) = self.store.set(path, unit.key().as_str(), &value) {
                return Outcome::new(Action::Transform, unit, Reason::WriteError)
                    .with_stored(stored)
                    .with_legacy_key(legacy)
                    .with_error(error);
            }
            if let Err(error) = self.store.remove(path, legacy.as_str()) {
                return Outcome::new(Action::Transform, unit, Reason::RemoveError)
                    .with_stored(stored)
                    .with_legacy_key(legacy)
                    .with_error(error);
            }
            return Outcome::new(Action::Transform, unit, Reason::Migrated)
                .with_stored(stored)
                .with_legacy_key(legacy);
        }
        Outcome::new(Action::Transform, unit, Reason::NoLegacyAttribute)
    }
}

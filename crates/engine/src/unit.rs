use std::path::{Path, PathBuf};

use metadata::AttributeKey;

/// Working state for one (file, digest) iteration.
///
/// Built fresh for every digest of every file and dropped once its
/// [`Outcome`](crate::Outcome) has been produced.
#[derive(Clone, Debug)]
pub struct FileUnit {
    path: PathBuf,
    size: u64,
    digest: String,
    key: AttributeKey,
    checksum: Option<String>,
}

impl FileUnit {
    /// Creates a unit for `digest` on `path`, stored under `key`.
    pub fn new(path: impl Into<PathBuf>, size: u64, digest: impl Into<String>, key: AttributeKey) -> Self {
        Self {
            path: path.into(),
            size,
            digest: digest.into(),
            key,
            checksum: None,
        }
    }

    /// File being processed.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size captured when the path was examined.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Digest identifier.
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Attribute the digest is stored under.
    #[must_use]
    pub fn key(&self) -> &AttributeKey {
        &self.key
    }

    /// Fingerprint computed from content, once available.
    #[must_use]
    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    pub(crate) fn set_checksum(&mut self, checksum: String) {
        self.checksum = Some(checksum);
    }
}

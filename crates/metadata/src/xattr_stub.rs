//! Attribute store for platforms without extended attribute support.
//!
//! Every operation fails with [`io::ErrorKind::Unsupported`] so callers can
//! use the same API unconditionally.

use std::io;
use std::path::Path;

use crate::{AttributeError, AttributeStore};

fn unsupported(context: &'static str, path: &Path, key: &str) -> AttributeError {
    AttributeError::new(
        context,
        path,
        key,
        io::Error::new(
            io::ErrorKind::Unsupported,
            "extended attributes are not supported on this platform",
        ),
    )
}

/// Attribute store that rejects every operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct XattrStore;

impl XattrStore {
    /// Creates the store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Accepted for API parity; has no effect.
    #[must_use]
    pub const fn follow_symlinks(self, _follow: bool) -> Self {
        self
    }
}

impl AttributeStore for XattrStore {
    fn get(&self, path: &Path, key: &str) -> Result<Option<Vec<u8>>, AttributeError> {
        Err(unsupported("read extended attribute", path, key))
    }

    fn set(&self, path: &Path, key: &str, _value: &[u8]) -> Result<(), AttributeError> {
        Err(unsupported("write extended attribute", path, key))
    }

    fn remove(&self, path: &Path, key: &str) -> Result<bool, AttributeError> {
        Err(unsupported("remove extended attribute", path, key))
    }
}

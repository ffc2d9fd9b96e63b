use std::io;
use std::path::Path;

use tracing::trace;

use crate::{AttributeError, AttributeStore};

#[cfg(any(target_os = "linux", target_os = "android"))]
const ATTRIBUTE_ABSENT: i32 = libc::ENODATA;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
const ATTRIBUTE_ABSENT: i32 = libc::ENOATTR;

fn is_absent(error: &io::Error) -> bool {
    error.raw_os_error() == Some(ATTRIBUTE_ABSENT)
}

/// [`AttributeStore`] backed by the filesystem's extended attributes.
///
/// Symbolic links are dereferenced by default so the attribute lands on the
/// file the link points at.
#[derive(Clone, Copy, Debug)]
pub struct XattrStore {
    follow_symlinks: bool,
}

impl Default for XattrStore {
    fn default() -> Self {
        Self::new()
    }
}

impl XattrStore {
    /// Creates a store that follows symbolic links.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            follow_symlinks: true,
        }
    }

    /// Chooses whether symbolic links are followed.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

impl AttributeStore for XattrStore {
    fn get(&self, path: &Path, key: &str) -> Result<Option<Vec<u8>>, AttributeError> {
        let result = if self.follow_symlinks {
            xattr::get_deref(path, key)
        } else {
            xattr::get(path, key)
        };
        match result {
            Ok(value) => Ok(value),
            Err(error) if is_absent(&error) => Ok(None),
            Err(error) => Err(AttributeError::new(
                "read extended attribute",
                path,
                key,
                error,
            )),
        }
    }

    fn set(&self, path: &Path, key: &str, value: &[u8]) -> Result<(), AttributeError> {
        trace!(path = %path.display(), key, len = value.len(), "setting attribute");
        let result = if self.follow_symlinks {
            xattr::set_deref(path, key, value)
        } else {
            xattr::set(path, key, value)
        };
        result.map_err(|error| AttributeError::new("write extended attribute", path, key, error))
    }

    fn remove(&self, path: &Path, key: &str) -> Result<bool, AttributeError> {
        let result = if self.follow_symlinks {
            xattr::remove_deref(path, key)
        } else {
            xattr::remove(path, key)
        };
        match result {
            Ok(()) => Ok(true),
            Err(error) if is_absent(&error) => Ok(false),
            Err(error) => Err(AttributeError::new(
                "remove extended attribute",
                path,
                key,
                error,
            )),
        }
    }
}

//! Shared test utilities for the integrity workspace.
//!
//! Provides an in-memory [`AttributeStore`](metadata::AttributeStore), a probe
//! for user extended attribute support on the filesystem under test, and a
//! helper for building scratch files.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use metadata::{AttributeError, AttributeStore};

/// Attribute store held entirely in memory.
///
/// Paths are not required to exist unless registered through
/// [`MemoryStore::deny`], which makes every operation on that path fail with
/// `PermissionDenied`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<(PathBuf, String), Vec<u8>>>,
    denied: RefCell<Vec<PathBuf>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` on `path` with `value`.
    pub fn insert(&self, path: &Path, key: &str, value: impl Into<Vec<u8>>) {
        self.values
            .borrow_mut()
            .insert((path.to_path_buf(), key.to_owned()), value.into());
    }

    /// Returns the raw value stored for `key` on `path`.
    pub fn value(&self, path: &Path, key: &str) -> Option<Vec<u8>> {
        self.values
            .borrow()
            .get(&(path.to_path_buf(), key.to_owned()))
            .cloned()
    }

    /// Lists the keys currently set on `path` in sorted order.
    pub fn keys(&self, path: &Path) -> Vec<String> {
        self.values
            .borrow()
            .keys()
            .filter(|(stored, _)| stored == path)
            .map(|(_, key)| key.clone())
            .collect()
    }

    /// Makes every subsequent operation on `path` fail.
    pub fn deny(&self, path: &Path) {
        self.denied.borrow_mut().push(path.to_path_buf());
    }

    fn check_access(&self, context: &'static str, path: &Path, key: &str) -> Result<(), AttributeError> {
        if self.denied.borrow().iter().any(|denied| denied == path) {
            return Err(AttributeError::new(
                context,
                path,
                key,
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        Ok(())
    }
}

impl AttributeStore for MemoryStore {
    fn get(&self, path: &Path, key: &str) -> Result<Option<Vec<u8>>, AttributeError> {
        self.check_access("read extended attribute", path, key)?;
        Ok(self.value(path, key))
    }

    fn set(&self, path: &Path, key: &str, value: &[u8]) -> Result<(), AttributeError> {
        self.check_access("write extended attribute", path, key)?;
        self.insert(path, key, value);
        Ok(())
    }

    fn remove(&self, path: &Path, key: &str) -> Result<bool, AttributeError> {
        self.check_access("remove extended attribute", path, key)?;
        Ok(self
            .values
            .borrow_mut()
            .remove(&(path.to_path_buf(), key.to_owned()))
            .is_some())
    }
}

/// Reports whether user extended attributes can be set on `path`.
///
/// Tests touching real attributes call this first and return early when the
/// filesystem (tmpfs without `user_xattr`, some overlay mounts) rejects them.
#[cfg(unix)]
pub fn xattrs_supported(path: &Path) -> bool {
    let name = if cfg!(target_os = "linux") {
        "user.integrity.probe"
    } else {
        "integrity.probe"
    };
    match xattr::set(path, name, b"probe") {
        Ok(()) => {
            let _ = xattr::remove(path, name);
            true
        }
        Err(_) => false,
    }
}

/// Extended attributes are never available off Unix.
#[cfg(not(unix))]
pub fn xattrs_supported(_path: &Path) -> bool {
    false
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directories");
    }
    std::fs::write(&path, contents).expect("write test file");
    path
}

/// Creates a temporary directory for a test.
pub fn scratch_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

use std::path::Path;

use crate::AttributeError;

/// Read, write and remove access to per-file attributes.
///
/// Implementations recover "attribute absent" into `Ok(None)` from
/// [`get`](Self::get) and `Ok(false)` from [`remove`](Self::remove); every
/// other failure is an [`AttributeError`].
pub trait AttributeStore {
    /// Returns the stored value for `key`, or `None` when it is not set.
    fn get(&self, path: &Path, key: &str) -> Result<Option<Vec<u8>>, AttributeError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, path: &Path, key: &str, value: &[u8]) -> Result<(), AttributeError>;

    /// Removes `key`, returning `false` when it was not set.
    fn remove(&self, path: &Path, key: &str) -> Result<bool, AttributeError>;
}

impl<S: AttributeStore + ?Sized> AttributeStore for &S {
    fn get(&self, path: &Path, key: &str) -> Result<Option<Vec<u8>>, AttributeError> {
        (**self).get(path, key)
    }

    fn set(&self, path: &Path, key: &str, value: &[u8]) -> Result<(), AttributeError> {
        (**self).set(path, key, value)
    }

    fn remove(&self, path: &Path, key: &str) -> Result<bool, AttributeError> {
        (**self).remove(path, key)
    }
}

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned when traversal fails.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn root_metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::RootMetadata { path, source })
    }

    pub(crate) fn root_read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::RootReadDir { path, source })
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir { path, source })
    }

    pub(crate) fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDirEntry { path, source })
    }

    pub(crate) fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Metadata { path, source })
    }

    /// Returns the specific failure.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::WalkBuilder;
    ///
    /// let result = WalkBuilder::new("./definitely_missing_root").build();
    /// let error = match result {
    ///     Ok(_) => panic!("missing root yields error"),
    ///     Err(error) => error,
    /// };
    /// assert!(error.path().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }

    /// Returns the underlying OS error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        self.kind.io_error()
    }

    /// Reports whether the walker skipped a subtree and kept going.
    ///
    /// Only permission failures below the root qualify; the iterator keeps
    /// yielding entries after such an error.
    #[must_use]
    pub fn is_subtree_skip(&self) -> bool {
        matches!(
            self.kind,
            WalkErrorKind::ReadDir { .. } | WalkErrorKind::Metadata { .. }
        ) && self.io_error().kind() == io::ErrorKind::PermissionDenied
    }
}

/// Classification of traversal failures.
#[derive(Debug, Error)]
pub enum WalkErrorKind {
    /// Failed to query metadata for the traversal root.
    #[error("failed to inspect traversal root '{}': {source}", .path.display())]
    RootMetadata {
        /// Path that failed to provide metadata.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to read the contents of the traversal root itself.
    #[error("failed to read traversal root '{}': {source}", .path.display())]
    RootReadDir {
        /// Root directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to read the contents of a directory below the root.
    #[error("failed to read directory '{}': {source}", .path.display())]
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to obtain a directory entry during iteration.
    #[error("failed to read entry in '{}': {source}", .path.display())]
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to retrieve metadata for an entry.
    #[error("failed to inspect metadata for '{}': {source}", .path.display())]
    Metadata {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::RootMetadata { path, .. }
            | Self::RootReadDir { path, .. }
            | Self::ReadDir { path, .. }
            | Self::ReadDirEntry { path, .. }
            | Self::Metadata { path, .. } => path,
        }
    }

    fn io_error(&self) -> &io::Error {
        match self {
            Self::RootMetadata { source, .. }
            | Self::RootReadDir { source, .. }
            | Self::ReadDir { source, .. }
            | Self::ReadDirEntry { source, .. }
            | Self::Metadata { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::other(message)
    }

    #[test]
    fn walk_error_path_matches_variant_path() {
        let root = WalkError::root_metadata(PathBuf::from("root"), io_error("root"));
        assert_eq!(Path::new("root"), root.path());

        let read_dir = WalkError::read_dir(PathBuf::from("dir"), io_error("dir"));
        assert_eq!(Path::new("dir"), read_dir.path());

        let read_dir_entry = WalkError::read_dir_entry(PathBuf::from("entry"), io_error("entry"));
        assert_eq!(Path::new("entry"), read_dir_entry.path());

        let metadata = WalkError::metadata(PathBuf::from("meta"), io_error("meta"));
        assert_eq!(Path::new("meta"), metadata.path());
    }

    #[test]
    fn walk_error_display_is_specific_per_variant() {
        let root = WalkError::root_metadata(PathBuf::from("root"), io_error("boom"));
        assert_eq!(
            "failed to inspect traversal root 'root': boom",
            root.to_string()
        );

        let root_read_dir = WalkError::root_read_dir(PathBuf::from("root"), io_error("boom"));
        assert_eq!(
            "failed to read traversal root 'root': boom",
            root_read_dir.to_string()
        );

        let read_dir = WalkError::read_dir(PathBuf::from("dir"), io_error("boom"));
        assert_eq!("failed to read directory 'dir': boom", read_dir.to_string());

        let metadata = WalkError::metadata(PathBuf::from("meta"), io_error("boom"));
        assert_eq!(
            "failed to inspect metadata for 'meta': boom",
            metadata.to_string()
        );
    }

    #[test]
    fn only_permission_failures_below_root_skip_subtrees() {
        let denied = || io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(WalkError::read_dir(PathBuf::from("d"), denied()).is_subtree_skip());
        assert!(WalkError::metadata(PathBuf::from("m"), denied()).is_subtree_skip());
        assert!(!WalkError::root_metadata(PathBuf::from("r"), denied()).is_subtree_skip());
        assert!(!WalkError::root_read_dir(PathBuf::from("r"), denied()).is_subtree_skip());
        assert!(!WalkError::read_dir(PathBuf::from("d"), io_error("eio")).is_subtree_skip());
    }

    #[test]
    fn walk_error_source_refers_to_underlying_io_error() {
        let error = WalkError::read_dir(PathBuf::from("dir"), io_error("source"));
        let source_ref = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("walk error should expose the underlying io::Error");
        assert_eq!(source_ref.to_string(), "source");
    }
}

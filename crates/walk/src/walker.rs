use crate::entry::WalkEntry;
use crate::error::WalkError;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use tracing::trace;

/// Depth-first iterator over filesystem entries.
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
    root_metadata: Option<fs::Metadata>,
    stack: Vec<DirectoryState>,
    pending: Option<WalkError>,
    finished: bool,
}

impl Walker {
    pub(crate) fn new(root: PathBuf, include_root: bool) -> Result<Self, WalkError> {
        trace!(root = %root.display(), "starting walk");

        // The root is resolved through symlinks; entries below it are not.
        let metadata =
            fs::metadata(&root).map_err(|error| WalkError::root_metadata(root.clone(), error))?;
        let is_dir = metadata.is_dir();

        let mut walker = Self {
            root,
            root_metadata: include_root.then_some(metadata),
            stack: Vec::new(),
            pending: None,
            finished: false,
        };

        if is_dir {
            walker.push_directory(walker.root.clone(), PathBuf::new(), 0);
        }

        Ok(walker)
    }

    /// Opens `fs_path` for traversal. Failures are held back until the
    /// directory's own entry has been yielded.
    fn push_directory(&mut self, fs_path: PathBuf, relative_prefix: PathBuf, depth: usize) {
        match DirectoryState::new(fs_path, relative_prefix, depth) {
            Ok(state) => self.stack.push(state),
            Err(error) => self.pending = Some(error),
        }
    }

    fn prepare_entry(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
        depth: usize,
    ) -> Result<WalkEntry, WalkError> {
        let metadata = fs::symlink_metadata(&full_path)
            .map_err(|error| WalkError::metadata(full_path.clone(), error))?;

        if metadata.is_dir() {
            self.push_directory(full_path.clone(), relative_path.clone(), depth);
        }

        Ok(WalkEntry {
            full_path,
            relative_path,
            metadata,
            depth,
            is_root: false,
        })
    }

    fn fail(&mut self, error: WalkError) -> Option<Result<WalkEntry, WalkError>> {
        if !error.is_subtree_skip() {
            self.finished = true;
        }
        Some(Err(error))
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(metadata) = self.root_metadata.take() {
            return Some(Ok(WalkEntry {
                full_path: self.root.clone(),
                relative_path: PathBuf::new(),
                metadata,
                depth: 0,
                is_root: true,
            }));
        }

        if let Some(error) = self.pending.take() {
            return self.fail(error);
        }

        loop {
            let state = self.stack.last_mut()?;
            let next = match state.next_name() {
                Some(Ok(name)) => {
                    let full_path = state.fs_path.join(&name);
                    let relative_path = state.relative_prefix.join(&name);
                    (full_path, relative_path, state.depth + 1)
                }
                Some(Err(error)) => {
                    self.stack.pop();
                    return self.fail(error);
                }
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let (full_path, relative_path, depth) = next;
            return match self.prepare_entry(full_path, relative_path, depth) {
                Ok(entry) => Some(Ok(entry)),
                Err(error) => self.fail(error),
            };
        }
    }
}

#[derive(Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    entries: std::vec::IntoIter<Result<OsString, WalkError>>,
    depth: usize,
}

impl DirectoryState {
    fn new(fs_path: PathBuf, relative_prefix: PathBuf, depth: usize) -> Result<Self, WalkError> {
        let read_dir = fs::read_dir(&fs_path).map_err(|error| {
            if depth == 0 {
                WalkError::root_read_dir(fs_path.clone(), error)
            } else {
                WalkError::read_dir(fs_path.clone(), error)
            }
        })?;

        let mut names = Vec::new();
        let mut failure = None;
        for entry in read_dir {
            match entry {
                Ok(entry) => names.push(entry.file_name()),
                Err(error) => {
                    failure = Some(WalkError::read_dir_entry(fs_path.clone(), error));
                    break;
                }
            }
        }
        names.sort();
        trace!(dir = %fs_path.display(), count = names.len(), "read directory");

        let mut entries: Vec<_> = names.into_iter().map(Ok).collect();
        entries.extend(failure.map(Err));

        Ok(Self {
            fs_path,
            relative_prefix,
            entries: entries.into_iter(),
            depth,
        })
    }

    fn next_name(&mut self) -> Option<Result<OsString, WalkError>> {
        self.entries.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    fn denied() -> io::Error {
        io::Error::from(io::ErrorKind::PermissionDenied)
    }

    fn tree() -> tempfile::TempDir {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("a")).expect("create a");
        fs::write(temp.path().join("b.txt"), b"b").expect("write b");
        fs::write(temp.path().join("c.txt"), b"c").expect("write c");
        temp
    }

    #[test]
    fn denied_subdirectory_is_reported_then_walk_resumes() {
        let temp = tree();
        let mut walker = Walker::new(temp.path().to_path_buf(), false).expect("walker");

        let dir = walker.next().expect("first entry").expect("readable");
        assert_eq!(dir.relative_path(), Path::new("a"));
        walker.pending = Some(WalkError::read_dir(dir.full_path().to_path_buf(), denied()));

        let error = walker.next().expect("held error").expect_err("denied");
        assert!(error.is_subtree_skip());
        assert_eq!(error.path(), dir.full_path());

        let rest: Vec<_> = walker
            .map(|entry| entry.expect("readable").relative_path().to_path_buf())
            .collect();
        assert_eq!(rest, [PathBuf::from("b.txt"), PathBuf::from("c.txt")]);
    }

    #[test]
    fn denied_root_ends_the_walk() {
        let temp = tree();
        let mut walker = Walker::new(temp.path().to_path_buf(), true).expect("walker");
        walker.stack.clear();
        walker.pending = Some(WalkError::root_read_dir(temp.path().to_path_buf(), denied()));

        let root = walker.next().expect("root entry").expect("root metadata");
        assert!(root.is_root());

        let error = walker.next().expect("held error").expect_err("denied");
        assert!(!error.is_subtree_skip());
        assert!(walker.next().is_none());
    }

    #[test]
    fn unreadable_root_is_classified_as_root_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("gone");
        let error = DirectoryState::new(missing.clone(), PathBuf::new(), 0).expect_err("missing");
        assert!(matches!(error.kind(), crate::WalkErrorKind::RootReadDir { .. }));

        let error = DirectoryState::new(missing, PathBuf::new(), 1).expect_err("missing");
        assert!(matches!(error.kind(), crate::WalkErrorKind::ReadDir { .. }));
    }
}

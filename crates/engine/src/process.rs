//! Path-level driver: stats arguments, walks directories and feeds files
//! through the engine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use metadata::AttributeStore;
use tracing::{debug, warn};
use walk::{WalkBuilder, WalkError};

use crate::engine::TRANSFORM_DIGEST;
use crate::{Action, Engine, Outcome, Status};

/// What to do and with which digests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    action: Action,
    digests: Vec<String>,
    force: bool,
    recursive: bool,
}

impl Request {
    /// Creates a request. Digests are sorted and de-duplicated; `transform`
    /// always targets `sha1` alone.
    pub fn new<I, D>(action: Action, digests: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        let mut digests: Vec<String> = if action == Action::Transform {
            vec![TRANSFORM_DIGEST.to_owned()]
        } else {
            digests.into_iter().map(Into::into).collect()
        };
        digests.sort_unstable();
        digests.dedup();
        Self {
            action,
            digests,
            force: false,
            recursive: false,
        }
    }

    /// Lets `add` overwrite an existing value.
    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Descends into directory arguments.
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Requested action.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Digests in processing order.
    #[must_use]
    pub fn digests(&self) -> &[String] {
        &self.digests
    }

    /// Whether `add` overwrites.
    #[must_use]
    pub const fn force(&self) -> bool {
        self.force
    }

    /// Whether directories are walked.
    #[must_use]
    pub const fn recursive(&self) -> bool {
        self.recursive
    }
}

/// Path-level event that is not tied to a digest.
#[derive(Debug)]
pub enum Notice {
    /// An argument does not exist.
    MissingPath {
        /// Path as given.
        path: PathBuf,
    },
    /// An argument could not be examined.
    Unreadable {
        /// Path as given.
        path: PathBuf,
        /// Underlying error.
        error: io::Error,
    },
    /// A directory argument was given without recursion.
    DirectorySkipped {
        /// Path as given.
        path: PathBuf,
    },
    /// A directory below an argument could not be read and was skipped.
    SubtreeSkipped {
        /// Directory that was skipped.
        path: PathBuf,
        /// Walker error.
        error: WalkError,
    },
    /// The walk failed; this and every remaining argument were abandoned.
    WalkAborted {
        /// Path the failure concerns.
        path: PathBuf,
        /// Walker error.
        error: WalkError,
    },
}

impl Notice {
    /// Path the notice is about.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingPath { path }
            | Self::Unreadable { path, .. }
            | Self::DirectorySkipped { path }
            | Self::SubtreeSkipped { path, .. }
            | Self::WalkAborted { path, .. } => path,
        }
    }
}

/// Item delivered to the sink passed to [`Engine::process`].
#[derive(Debug)]
pub enum Record {
    /// One (file, digest) result.
    Outcome(Outcome),
    /// A path-level event.
    Notice(Notice),
}

/// Aggregate of everything [`Engine::process`] emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Outcomes with [`Status::Success`].
    pub succeeded: usize,
    /// Outcomes with [`Status::Skipped`].
    pub skipped: usize,
    /// Failed outcomes, excluding informational ones.
    pub failed: usize,
    /// `transform` outcomes that found nothing to migrate.
    pub unmigrated: usize,
    /// Arguments that do not exist.
    pub missing: usize,
    /// Arguments that could not be examined.
    pub unreadable: usize,
    /// Subtrees skipped during a walk.
    pub skipped_subtrees: usize,
    /// Whether a walk error abandoned the remaining arguments.
    pub walk_aborted: bool,
}

impl Summary {
    fn count(&mut self, outcome: &Outcome) {
        match outcome.status() {
            Status::Success => self.succeeded += 1,
            Status::Skipped => self.skipped += 1,
            Status::Failed if outcome.reason().is_informational() => self.unmigrated += 1,
            Status::Failed => self.failed += 1,
        }
    }

    /// Whether any outcome or path failed.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0 || self.missing > 0 || self.unreadable > 0 || self.walk_aborted
    }
}

enum Flow {
    Continue,
    Abort,
}

impl<S: AttributeStore> Engine<S> {
    /// Processes every path in order, streaming records into `sink`.
    ///
    /// Directories are walked only when the request is recursive. A walk
    /// error other than an unreadable subdirectory abandons the walk and all
    /// remaining paths.
    pub fn process<I, P, F>(&self, paths: I, request: &Request, mut sink: F) -> Summary
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        F: FnMut(crate::Record),
    {
        let mut summary = Summary::default();
        for path in paths {
            let path = path.as_ref();
            if let Flow::Abort = self.process_path(path, request, &mut sink, &mut summary) {
                break;
            }
        }
        debug!(?summary, "processing complete");
        summary
    }

    fn process_path<F: FnMut(Record)>(
        &self,
        path: &Path,
        request: &Request,
        sink: &mut F,
        summary: &mut Summary,
    ) -> Flow {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                summary.missing += 1;
                sink(Record::Notice(Notice::MissingPath {
                    path: path.to_path_buf(),
                }));
                return Flow::Continue;
            }
            Err(error) => {
                summary.unreadable += 1;
                sink(Record::Notice(Notice::Unreadable {
                    path: path.to_path_buf(),
                    error,
                }));
                return Flow::Continue;
            }
        };

        if !metadata.is_dir() {
            self.process_file(path, metadata.len(), request, sink, summary);
            return Flow::Continue;
        }

        if !request.recursive() {
            sink(Record::Notice(Notice::DirectorySkipped {
                path: path.to_path_buf(),
            }));
            return Flow::Continue;
        }

        self.walk(path, request, sink, summary)
    }

    fn walk<F: FnMut(Record)>(
        &self,
        root: &Path,
        request: &Request,
        sink: &mut F,
        summary: &mut Summary,
    ) -> Flow {
        let walker = match WalkBuilder::new(root).build() {
            Ok(walker) => walker,
            Err(error) => return Self::abort(error, sink, summary),
        };

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) if error.is_subtree_skip() => {
                    warn!(path = %error.path().display(), "skipping unreadable directory");
                    summary.skipped_subtrees += 1;
                    sink(Record::Notice(Notice::SubtreeSkipped {
                        path: error.path().to_path_buf(),
                        error,
                    }));
                    continue;
                }
                Err(error) => return Self::abort(error, sink, summary),
            };

            if entry.metadata().is_dir() {
                continue;
            }
            let (path, lstat) = entry.into_parts();
            let size = if lstat.file_type().is_symlink() {
                match fs::metadata(&path) {
                    Ok(target) if target.is_dir() => continue,
                    Ok(target) => target.len(),
                    Err(_) => lstat.len(),
                }
            } else {
                lstat.len()
            };
            self.process_file(&path, size, request, sink, summary);
        }
        Flow::Continue
    }

    fn abort<F: FnMut(Record)>(error: WalkError, sink: &mut F, summary: &mut Summary) -> Flow {
        warn!(%error, "walk aborted");
        summary.walk_aborted = true;
        sink(Record::Notice(Notice::WalkAborted {
            path: error.path().to_path_buf(),
            error,
        }));
        Flow::Abort
    }

    fn process_file<F: FnMut(Record)>(
        &self,
        path: &Path,
        size: u64,
        request: &Request,
        sink: &mut F,
        summary: &mut Summary,
    ) {
        for digest in request.digests() {
            let outcome = self.execute(request.action(), path, size, digest, request.force());
            let fatal = request.action().probe_failure_is_fatal()
                && outcome.reason() == crate::Reason::ProbeFailed;
            summary.count(&outcome);
            sink(Record::Outcome(outcome));
            if fatal {
                debug!(path = %path.display(), "probe failed, abandoning remaining digests");
                break;
            }
        }
    }
}

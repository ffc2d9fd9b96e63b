#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` decides, for every (file, digest) pair, what to read, compute,
//! write or remove, and classifies the result as an [`Outcome`]. The
//! [`Reporter`] turns outcomes into the user-facing report lines.
//!
//! # Design
//!
//! - [`Engine`] owns the [`DigestRegistry`](checksums::DigestRegistry), the
//!   attribute [`Namespace`](metadata::Namespace) and an
//!   [`AttributeStore`](metadata::AttributeStore). Each (file, digest)
//!   iteration builds a fresh [`FileUnit`] so no state leaks between digests
//!   or files.
//! - [`Engine::process`] walks the requested paths and streams a [`Record`]
//!   per outcome or path-level [`Notice`] into a caller-supplied sink,
//!   returning an aggregate [`Summary`].
//! - [`Reporter`] is a pure mapping from a record, the verbosity and an
//!   optional [`DisplayFormat`] to zero or one [`Line`].
//!
//! # Invariants
//!
//! - `add` without `force` never touches content or writes when a value is
//!   already stored.
//! - `add` only succeeds after the written value has been read back and
//!   compared with the computed fingerprint.
//! - Digests are processed in lexicographic order, one at a time.
//! - For `check` and `list`, a failure to probe the stored value ends the
//!   remaining digests for that file. `add` and `delete` carry on.
//!
//! # Examples
//!
//! ```
//! use checksums::DigestRegistry;
//! use engine::{Action, Engine, Record, Request, Status};
//! use metadata::{Namespace, Platform};
//! use test_support::MemoryStore;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let file = dir.path().join("data.bin");
//! std::fs::write(&file, b"abc")?;
//!
//! let engine = Engine::new(
//!     DigestRegistry::builtin(),
//!     Namespace::new(Platform::Linux),
//!     MemoryStore::new(),
//! );
//!
//! let mut statuses = Vec::new();
//! let request = Request::new(Action::Add, ["sha1"]);
//! engine.process([&file], &request, |record| {
//!     if let Record::Outcome(outcome) = record {
//!         statuses.push(outcome.status());
//!     }
//! });
//! assert_eq!(statuses, [Status::Success]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod action;
mod engine;
mod error;
mod outcome;
mod process;
mod report;
mod unit;

pub use action::Action;
pub use engine::Engine;
pub use error::{ActionError, UnknownAction, UnknownDisplayFormat};
pub use outcome::{Outcome, Reason, Status};
pub use process::{Notice, Record, Request, Summary};
pub use report::{Channel, DisplayFormat, Line, Reporter};
pub use unit::FileUnit;

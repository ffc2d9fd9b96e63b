#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic filesystem traversal that feeds paths to
//! the integrity engine. The walker enumerates regular files, directories and
//! symbolic links below a root, sorting directory entries lexicographically so
//! the output order is stable across filesystems.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal options such as whether the root
//!   entry should be emitted.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values in
//!   depth-first order. The sequence is lazy, finite and not restartable.
//! - [`WalkError`] describes I/O failures encountered while querying metadata
//!   or reading directories.
//!
//! # Invariants
//!
//! - Entry paths are the root joined with the relative path, exactly as the
//!   caller spelled the root. No canonicalisation takes place.
//! - A symbolic link given as the root is resolved. Links below the root are
//!   reported but never descended into.
//! - A directory that cannot be opened for lack of permission yields an error
//!   for which [`WalkError::is_subtree_skip`] is `true`; traversal then carries
//!   on with the next sibling. Any other error ends the traversal.
//!
//! # Examples
//!
//! ```
//! use walk::WalkBuilder;
//! use std::collections::BTreeSet;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("src");
//! let nested = root.join("nested");
//! fs::create_dir_all(&nested)?;
//! fs::write(root.join("file.txt"), b"data")?;
//! fs::write(nested.join("more.txt"), b"data")?;
//!
//! let mut seen = BTreeSet::new();
//! for entry in WalkBuilder::new(&root).include_root(false).build()? {
//!     seen.insert(entry?.relative_path().to_path_buf());
//! }
//!
//! assert!(seen.contains(std::path::Path::new("file.txt")));
//! assert!(seen.contains(std::path::Path::new("nested")));
//! assert!(seen.contains(std::path::Path::new("nested/more.txt")));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod walker;

pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use walker::Walker;

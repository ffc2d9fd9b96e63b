#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front-end of the integrity tool. It parses the
//! arguments with [`clap`](https://docs.rs/clap/), resolves which action and
//! digests to use, and drives the [`engine`] over the given paths, writing
//! one report line per outcome.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error and returns the process exit code. Parsing
//! produces a [`ParsedArgs`]; [`Config::resolve`] turns it into a validated
//! configuration, failing with a [`ConfigError`] before any file is touched.
//! The digest list comes from, in order: a program name of the form
//! `integrity.<digest>`, `--all`, `--digest`, the `INTEGRITY_DIGEST`
//! environment variable, and finally `sha1`.
//!
//! # Invariants
//!
//! - `run` never panics; unexpected I/O failures surface as non-zero exit
//!   codes.
//! - Configuration errors are reported before any attribute is read or
//!   written.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["integrity", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```

mod exit_code;
mod frontend;

pub use exit_code::ExitCode;
pub use frontend::{Config, ConfigError, ParsedArgs, parse_args, run, run_with};

/// Parsing entry points for integration tests.
pub mod test_utils {
    pub use crate::frontend::{ParsedArgs, parse_args};
}

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` separates the two output channels of the integrity tool:
//!
//! - [`Verbosity`] controls how much of the user-facing report is printed.
//!   Report lines are written directly by the reporter and never pass through
//!   the diagnostic logger.
//! - [`LogLevel`] and [`init_tracing`] configure the `tracing` diagnostics that
//!   the engine emits while processing files. Diagnostics always go to
//!   standard error.
//!
//! # Examples
//!
//! ```
//! use logging::{LogLevel, Verbosity};
//!
//! assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
//! assert_eq!(LogLevel::from_name_or_default("bogus"), LogLevel::Info);
//! ```

mod levels;
mod tracing_bridge;
mod verbosity;

pub use levels::{LogLevel, UnknownLogLevel};
pub use tracing_bridge::{init_tracing, init_tracing_with_filter};
pub use verbosity::Verbosity;

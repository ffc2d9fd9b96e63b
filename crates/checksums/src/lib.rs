#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checksums` maps digest identifiers (`sha1`, `sha256`, `oshash`, `phash`,
//! ...) to providers that turn file content into a textual fingerprint. The
//! fingerprint is the exact byte string the integrity tool stores in an
//! extended attribute, so every provider renders lower-case hexadecimal with
//! a stable width.
//!
//! # Design
//!
//! - [`DigestProvider`] is the uniform capability: an identifier plus
//!   [`compute`](DigestProvider::compute) over any [`DigestSource`]
//!   (`Read + Seek`).
//! - [`StrongProvider`] adapts any RustCrypto [`digest::Digest`] type, so the
//!   cryptographic families are one generic type instantiated per algorithm.
//! - [`OsHash`] and [`PerceptualHash`] are the two non-cryptographic
//!   fingerprints. They are ordinary registry entries; nothing downstream
//!   special-cases them.
//! - [`DigestRegistry::builtin`] populates the registry once at startup.
//!
//! # Errors
//!
//! [`DigestError::Unknown`] and [`DigestError::Unavailable`] are resolution
//! failures. [`DigestError::Read`] and [`DigestError::Content`] are per-file
//! compute failures (I/O, files too small for `oshash`, undecodable images)
//! that callers fold into a failed outcome for that file only.
//!
//! # Examples
//!
//! ```
//! use checksums::DigestRegistry;
//! use std::io::Cursor;
//!
//! let registry = DigestRegistry::builtin();
//! let provider = registry.resolve("sha1").unwrap();
//! let fingerprint = provider.compute(&mut Cursor::new(b"abc")).unwrap();
//! assert_eq!(fingerprint, "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

mod error;
mod hex;
mod oshash;
#[cfg(feature = "phash")]
#[cfg_attr(docsrs, doc(cfg(feature = "phash")))]
mod phash;
mod provider;
mod registry;
mod strong;

pub use error::DigestError;
pub use hex::to_hex;
pub use oshash::{OSHASH_CHUNK_LEN, OsHash};
#[cfg(feature = "phash")]
pub use phash::PerceptualHash;
pub use provider::{DigestKind, DigestProvider, DigestSource, DigestSpec};
pub use registry::{DEFAULT_DIGEST, DigestRegistry};
pub use strong::StrongProvider;

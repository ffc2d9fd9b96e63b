#![deny(missing_docs)]
#![deny(unsafe_code)]

//! Extended attribute naming and storage.
//!
//! Fingerprints are persisted as extended attributes whose names are derived
//! from the digest identifier and the host platform. [`Namespace`] performs
//! that derivation (including the historical names consulted when migrating
//! old attributes) while [`AttributeStore`] abstracts the read, write and
//! remove primitives so the engine can run against real files or an
//! in-memory double.
//!
//! # Examples
//!
//! ```
//! use metadata::{Namespace, Platform};
//!
//! let namespace = Namespace::new(Platform::Linux);
//! assert_eq!(namespace.key("sha256").as_str(), "user.integrity.sha256");
//!
//! let namespace = Namespace::new(Platform::MacOs);
//! assert_eq!(namespace.key("sha256").as_str(), "integrity.sha256");
//! ```

mod error;
mod namespace;
mod store;

#[cfg(unix)]
mod xattr;
#[cfg(not(unix))]
mod xattr_stub;

pub use error::{AttributeError, UnsupportedPlatform};
pub use namespace::{
    AttributeKey, LEGACY_LOCAL_PARTS, NAMESPACE, Namespace, Platform, resolve,
};
pub use store::AttributeStore;

#[cfg(unix)]
pub use crate::xattr::XattrStore;
#[cfg(not(unix))]
pub use crate::xattr_stub::XattrStore;

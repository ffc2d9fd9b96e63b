//! Attribute name derivation.
//!
//! A fingerprint for digest `d` lives under `{prefix}integrity.{d}`. Linux
//! requires every user-settable attribute to carry the `user.` prefix; macOS
//! and FreeBSD accept bare names.

use std::fmt;

use crate::UnsupportedPlatform;

/// Namespace segment shared by every canonical attribute name.
pub const NAMESPACE: &str = "integrity";

/// Historical attribute names, highest migration priority first.
///
/// Each entry receives the platform prefix exactly like a canonical key, so on
/// Linux the first one is read as `user.user.integ.sha1`.
pub const LEGACY_LOCAL_PARTS: [&str; 3] = ["user.integ.sha1", "integ.sha1", "user.integrity.sha1"];

/// Operating systems with a known attribute naming convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux: names live in the `user.` namespace.
    Linux,
    /// macOS: unprefixed names.
    MacOs,
    /// FreeBSD: unprefixed names in the user namespace.
    FreeBsd,
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    pub fn current() -> Result<Self, UnsupportedPlatform> {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` style identifier to a platform.
    pub fn from_os(os: &str) -> Result<Self, UnsupportedPlatform> {
        match os {
            "linux" => Ok(Self::Linux),
            "macos" | "darwin" => Ok(Self::MacOs),
            "freebsd" => Ok(Self::FreeBsd),
            other => Err(UnsupportedPlatform {
                os: other.to_owned(),
            }),
        }
    }

    /// Literal prepended to every attribute name.
    #[must_use]
    pub const fn attribute_prefix(self) -> &'static str {
        match self {
            Self::Linux => "user.",
            Self::MacOs | Self::FreeBsd => "",
        }
    }

    /// Lower-case platform label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "darwin",
            Self::FreeBsd => "freebsd",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully qualified extended attribute name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeKey(String);

impl AttributeKey {
    /// Returns the name as passed to the attribute syscalls.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the key and returns the owned name.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for AttributeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attribute naming rules for one platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Namespace {
    platform: Platform,
}

impl Namespace {
    /// Creates the naming rules for `platform`.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Naming rules for the running platform.
    pub fn current() -> Result<Self, UnsupportedPlatform> {
        Platform::current().map(Self::new)
    }

    /// Platform the rules were built for.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Prefix applied to every name, `user.` on Linux.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.platform.attribute_prefix()
    }

    /// Canonical attribute name for `digest`.
    #[must_use]
    pub fn key(&self, digest: &str) -> AttributeKey {
        AttributeKey(format!("{}{NAMESPACE}.{digest}", self.prefix()))
    }

    /// Prefixed legacy names in migration priority order.
    pub fn legacy_keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        LEGACY_LOCAL_PARTS
            .iter()
            .map(move |local| AttributeKey(format!("{}{local}", self.prefix())))
    }
}

/// Resolves the canonical attribute name for `digest` on the platform named `os`.
pub fn resolve(os: &str, digest: &str) -> Result<AttributeKey, UnsupportedPlatform> {
    Platform::from_os(os).map(|platform| Namespace::new(platform).key(digest))
}

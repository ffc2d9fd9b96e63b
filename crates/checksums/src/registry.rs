use std::collections::BTreeMap;
use std::fmt;

use crate::{DigestError, DigestProvider, DigestSpec, OsHash, StrongProvider};

/// Digest used when the caller expresses no preference.
pub const DEFAULT_DIGEST: &str = "sha1";

enum Entry {
    Available(Box<dyn DigestProvider>),
    Unavailable(DigestSpec),
}

impl Entry {
    fn spec(&self) -> DigestSpec {
        match self {
            Self::Available(provider) => provider.spec(),
            Self::Unavailable(spec) => *spec,
        }
    }
}

/// Lookup table from digest identifier to provider.
///
/// Identifiers iterate in lexicographic order, which is the order the engine
/// processes multi-digest requests in.
#[derive(Default)]
pub struct DigestRegistry {
    entries: BTreeMap<&'static str, Entry>,
}

impl fmt::Debug for DigestRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestRegistry")
            .field("identifiers", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl DigestRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every digest this build knows about.
    ///
    /// Families disabled at compile time are registered as unavailable so
    /// they are still recognised as valid identifiers.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(StrongProvider::<md4::Md4>::new("md4"));
        registry.register(StrongProvider::<md5::Md5>::new("md5"));
        registry.register(StrongProvider::<sha1::Sha1>::new("sha1"));
        registry.register(StrongProvider::<sha2::Sha224>::new("sha224"));
        registry.register(StrongProvider::<sha2::Sha256>::new("sha256"));
        registry.register(StrongProvider::<sha2::Sha384>::new("sha384"));
        registry.register(StrongProvider::<sha2::Sha512>::new("sha512"));
        registry.register(StrongProvider::<sha2::Sha512_224>::new("sha512_224"));
        registry.register(StrongProvider::<sha2::Sha512_256>::new("sha512_256"));

        #[cfg(feature = "sha3")]
        {
            registry.register(StrongProvider::<sha3::Sha3_224>::new("sha3_224"));
            registry.register(StrongProvider::<sha3::Sha3_256>::new("sha3_256"));
            registry.register(StrongProvider::<sha3::Sha3_384>::new("sha3_384"));
            registry.register(StrongProvider::<sha3::Sha3_512>::new("sha3_512"));
        }
        #[cfg(not(feature = "sha3"))]
        for identifier in ["sha3_224", "sha3_256", "sha3_384", "sha3_512"] {
            registry.register_unavailable(DigestSpec::new(identifier, crate::DigestKind::Cryptographic));
        }

        #[cfg(feature = "blake2")]
        {
            use digest::consts::{U32, U48};

            registry.register(StrongProvider::<blake2::Blake2s256>::new("blake2s_256"));
            registry.register(StrongProvider::<blake2::Blake2b<U32>>::new("blake2b_256"));
            registry.register(StrongProvider::<blake2::Blake2b<U48>>::new("blake2b_384"));
            registry.register(StrongProvider::<blake2::Blake2b512>::new("blake2b_512"));
        }
        #[cfg(not(feature = "blake2"))]
        for identifier in ["blake2s_256", "blake2b_256", "blake2b_384", "blake2b_512"] {
            registry.register_unavailable(DigestSpec::new(identifier, crate::DigestKind::Cryptographic));
        }

        registry.register(OsHash);

        #[cfg(feature = "phash")]
        registry.register(crate::PerceptualHash);
        #[cfg(not(feature = "phash"))]
        registry.register_unavailable(DigestSpec::new("phash", crate::DigestKind::Perceptual));

        registry
    }

    /// Adds `provider`, replacing any entry with the same identifier.
    pub fn register<P: DigestProvider + 'static>(&mut self, provider: P) {
        let identifier = provider.identifier();
        self.entries
            .insert(identifier, Entry::Available(Box::new(provider)));
    }

    /// Records `spec` as known but not compiled into this build.
    pub fn register_unavailable(&mut self, spec: DigestSpec) {
        self.entries
            .insert(spec.identifier(), Entry::Unavailable(spec));
    }

    /// Returns the provider registered under `identifier`.
    pub fn resolve(&self, identifier: &str) -> Result<&dyn DigestProvider, DigestError> {
        match self.entries.get(identifier) {
            Some(Entry::Available(provider)) => Ok(provider.as_ref()),
            Some(Entry::Unavailable(_)) => Err(DigestError::Unavailable {
                identifier: identifier.to_owned(),
            }),
            None => Err(DigestError::Unknown {
                identifier: identifier.to_owned(),
            }),
        }
    }

    /// Returns the spec for `identifier`, available or not.
    #[must_use]
    pub fn spec(&self, identifier: &str) -> Option<DigestSpec> {
        self.entries.get(identifier).map(Entry::spec)
    }

    /// Reports whether `identifier` is registered at all.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Reports whether `identifier` resolves to a usable provider.
    #[must_use]
    pub fn is_available(&self, identifier: &str) -> bool {
        matches!(self.entries.get(identifier), Some(Entry::Available(_)))
    }

    /// Iterates every registered identifier in lexicographic order.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

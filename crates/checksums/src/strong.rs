use std::io::{self, Read};
use std::marker::PhantomData;

use digest::Digest;

use crate::{DigestError, DigestKind, DigestProvider, DigestSource, DigestSpec, to_hex};

const READ_BUFFER_LEN: usize = 64 * 1024;

/// Cryptographic provider backed by a RustCrypto [`Digest`] implementation.
///
/// The content is streamed through a fixed buffer so hashing large files
/// never holds more than one buffer in memory.
pub struct StrongProvider<D> {
    spec: DigestSpec,
    marker: PhantomData<fn() -> D>,
}

impl<D: Digest> StrongProvider<D> {
    /// Creates a provider registered under `identifier`.
    #[must_use]
    pub const fn new(identifier: &'static str) -> Self {
        Self {
            spec: DigestSpec::new(identifier, DigestKind::Cryptographic),
            marker: PhantomData,
        }
    }
}

impl<D: Digest> DigestProvider for StrongProvider<D> {
    fn spec(&self) -> DigestSpec {
        self.spec
    }

    fn compute(&self, source: &mut dyn DigestSource) -> Result<String, DigestError> {
        let mut hasher = D::new();
        let mut buffer = vec![0_u8; READ_BUFFER_LEN];
        loop {
            let read = match source.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(DigestError::read(self.spec.identifier(), error)),
            };
            hasher.update(&buffer[..read]);
        }
        Ok(to_hex(&hasher.finalize()))
    }
}

//! OpenSubtitles-style whole-file fingerprint.
//!
//! The hash is the file size plus the little-endian `u64` words of the first
//! and last 64 KiB, summed with wrapping arithmetic. Reading only the edges
//! keeps the cost constant for large media files.

use std::io::{Read, Seek, SeekFrom};

use crate::{DigestError, DigestKind, DigestProvider, DigestSource, DigestSpec};

/// Size of the head and tail windows hashed by [`OsHash`].
pub const OSHASH_CHUNK_LEN: u64 = 64 * 1024;

const IDENTIFIER: &str = "oshash";

/// Whole-file binary fingerprint registered as `oshash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsHash;

impl OsHash {
    fn seek(source: &mut dyn DigestSource, position: SeekFrom) -> Result<u64, DigestError> {
        source
            .seek(position)
            .map_err(|error| DigestError::read(IDENTIFIER, error))
    }

    fn sum_chunk(source: &mut dyn DigestSource) -> Result<u64, DigestError> {
        let mut chunk = vec![0_u8; OSHASH_CHUNK_LEN as usize];
        source
            .read_exact(&mut chunk)
            .map_err(|error| DigestError::read(IDENTIFIER, error))?;

        let mut sum = 0_u64;
        for word in chunk.chunks_exact(8) {
            let mut bytes = [0_u8; 8];
            bytes.copy_from_slice(word);
            sum = sum.wrapping_add(u64::from_le_bytes(bytes));
        }
        Ok(sum)
    }
}

impl DigestProvider for OsHash {
    fn spec(&self) -> DigestSpec {
        DigestSpec::new(IDENTIFIER, DigestKind::WholeFileBinary)
    }

    fn compute(&self, source: &mut dyn DigestSource) -> Result<String, DigestError> {
        let size = Self::seek(source, SeekFrom::End(0))?;
        if size < OSHASH_CHUNK_LEN {
            return Err(DigestError::content(
                IDENTIFIER,
                format!("file is too small ({size} bytes, need at least {OSHASH_CHUNK_LEN})"),
            ));
        }

        let mut hash = size;
        Self::seek(source, SeekFrom::Start(0))?;
        hash = hash.wrapping_add(Self::sum_chunk(source)?);
        Self::seek(source, SeekFrom::Start(size - OSHASH_CHUNK_LEN))?;
        hash = hash.wrapping_add(Self::sum_chunk(source)?);

        Ok(format!("{hash:016x}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn compute(data: Vec<u8>) -> Result<String, DigestError> {
        OsHash.compute(&mut Cursor::new(data))
    }

    #[test]
    fn zero_filled_content_hashes_to_its_size() {
        let fingerprint = compute(vec![0; 2 * OSHASH_CHUNK_LEN as usize]).expect("compute");
        assert_eq!(fingerprint, "0000000000020000");
    }

    #[test]
    fn single_chunk_file_counts_overlapping_window_twice() {
        let mut data = vec![0_u8; OSHASH_CHUNK_LEN as usize];
        data[..8].copy_from_slice(&1_u64.to_le_bytes());
        let fingerprint = compute(data).expect("compute");
        assert_eq!(fingerprint, format!("{:016x}", OSHASH_CHUNK_LEN + 2));
    }

    #[test]
    fn middle_bytes_do_not_affect_the_hash() {
        let len = 3 * OSHASH_CHUNK_LEN as usize;
        let plain = vec![7_u8; len];
        let mut altered = plain.clone();
        altered[len / 2] = 0;
        assert_eq!(compute(plain).expect("plain"), compute(altered).expect("altered"));
    }

    #[test]
    fn tail_bytes_affect_the_hash() {
        let len = 3 * OSHASH_CHUNK_LEN as usize;
        let plain = vec![7_u8; len];
        let mut altered = plain.clone();
        altered[len - 1] = 0;
        assert_ne!(compute(plain).expect("plain"), compute(altered).expect("altered"));
    }

    #[test]
    fn files_shorter_than_a_chunk_are_rejected() {
        for len in [0, 1, OSHASH_CHUNK_LEN as usize - 1] {
            match compute(vec![1; len]) {
                Err(DigestError::Content { identifier, .. }) => assert_eq!(identifier, "oshash"),
                other => panic!("unexpected result for {len} bytes: {other:?}"),
            }
        }
    }
}

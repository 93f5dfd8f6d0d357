//! Whole-file content digest used for end-to-end patch integrity.

use std::io::{self, Read};

use digest::Digest;

/// Number of bytes read per iteration when digesting a stream.
const READ_LEN: usize = 4096;

/// Streaming SHA-256 hasher for whole-file integrity digests.
#[derive(Clone, Debug, Default)]
pub struct Sha256 {
    inner: sha2::Sha256,
}

impl Sha256 {
    /// Creates a hasher with an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: sha2::Sha256::new(),
        }
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalises the digest and returns the 256-bit output.
    #[must_use]
    pub fn finalize(self) -> [u8; 32] {
        self.inner.finalize().into()
    }

    /// Convenience helper that computes the digest for `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> [u8; 32] {
        sha2::Sha256::digest(data).into()
    }

    /// Digests an entire stream in a single pass of 4 KiB reads.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<[u8; 32]> {
        let mut hasher = Self::new();
        let mut buffer = [0_u8; READ_LEN];
        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buffer[..n]),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        Ok(hasher.finalize())
    }
}

//! `std::io` adapters for SHA-256
//!
//! - `Sha256` implements [`Write`], so `std::io::copy` can feed it.
//! - [`HashingWriter`] and [`HashingReader`] hash bytes as they pass
//!   through another writer or reader.
//! - [`digest_reader`] drains a reader and returns its digest.
//!
//! Opening files, sockets and so on is left to the caller.

use std::io::{self, ErrorKind, Read, Write};

use tracing::{debug, trace};

use super::hasher::Sha256;
use crate::error::Sha256Error;
use crate::primitives::Digest;

/// Size of the stack buffer used by [`digest_reader`].
pub const READ_CHUNK_LEN: usize = 8192;

impl From<Sha256Error> for io::Error {
    fn from(e: Sha256Error) -> Self {
        let kind = match e {
            Sha256Error::Finalized => ErrorKind::InvalidInput,
            Sha256Error::LengthOverflow { .. } => ErrorKind::Other,
        };

        io::Error::new(kind, e)
    }
}

impl Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that forwards to `W` and hashes everything `W` accepted.
pub struct HashingWriter<W> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    /// Returns a reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Number of bytes hashed so far.
    pub fn len(&self) -> u64 {
        self.hasher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hasher.is_empty()
    }

    /// Returns the wrapped writer and the digest of everything written.
    pub fn finalize(self) -> (W, Digest) {
        (self.inner, self.hasher.finalize())
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n])?;

        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Reader that hashes every byte read through it.
pub struct HashingReader<R> {
    inner: R,
    hasher: Sha256,
}

impl<R: Read> HashingReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    /// Returns a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Number of bytes hashed so far.
    pub fn len(&self) -> u64 {
        self.hasher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hasher.is_empty()
    }

    /// Returns the wrapped reader and the digest of everything read.
    pub fn finalize(self) -> (R, Digest) {
        (self.inner, self.hasher.finalize())
    }
}

impl<R: Read> Read for HashingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n])?;

        Ok(n)
    }
}

/// Reads `reader` to EOF and returns the SHA-256 digest of its contents.
///
/// Interrupted reads are retried. Any other read error is returned as is.
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; READ_CHUNK_LEN];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        trace!(n, "hashing chunk");
        hasher.update(&buf[..n])?;
    }

    let len = hasher.len();
    let digest = hasher.finalize();

    debug!(len, %digest, "hashed reader to EOF");

    Ok(digest)
}

//! Incremental SHA-256 hasher
//!
//! [`Sha256`] accepts a message in arbitrarily sized pieces and produces
//! the same digest as hashing the concatenation in one call. Internally it
//! keeps the running hash value, the number of bytes accepted, and up to
//! 63 bytes waiting for a complete block.
//!
//! # Lifecycle
//!
//! ```text
//!   new() ──► Fresh ──update──► Accumulating ──update──┐
//!               │                    │  ▲              │
//!               │                    │  └──────────────┘
//!               └────finish/finalize─┴──► Finalized ──reset──► Fresh
//! ```
//!
//! - [`Sha256::finalize`] consumes the hasher, so it cannot be finalized
//!   twice.
//! - [`Sha256::finish`] finalizes in place. Repeated calls return the same
//!   digest; [`Sha256::update`] is refused until [`Sha256::reset`].

use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use super::core::{compress, compress_chunk, pad_and_compress, sha256, state_to_digest};
use super::{BLOCK_LEN, H256_INIT, MAX_MESSAGE_LEN};
use crate::error::{Result, Sha256Error};
use crate::primitives::Digest;

/// Observable lifecycle phase of a [`Sha256`] hasher.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Just constructed or reset; no update has been made.
    Fresh,

    /// At least one update (possibly empty) has been accepted.
    Accumulating,

    /// The digest has been computed. Further updates are rejected.
    Finalized,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Stage {
    Fresh,
    Accumulating,
    Finalized(Digest),
}

/// Incremental SHA-256 state.
///
/// Independent instances share nothing and may be used from different
/// threads freely. Cloning a hasher forks the computation: both copies
/// continue from the same prefix without affecting each other.
#[derive(Clone)]
pub struct Sha256 {
    /// Running hash value H(i).
    state: [u32; 8],

    /// Partial block; only `buffer[..buffered]` is meaningful.
    buffer: [u8; BLOCK_LEN],

    /// Always `< BLOCK_LEN` between calls.
    buffered: usize,

    /// Total bytes accepted by `update`.
    len: u64,

    stage: Stage,
}

impl Sha256 {
    /// Creates a hasher loaded with the SHA-256 initial hash value.
    pub const fn new() -> Self {
        Self {
            state: H256_INIT,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            len: 0,
            stage: Stage::Fresh,
        }
    }

    /// Hashes `data` in one call.
    ///
    /// Equivalent to `new()`, `update(data)`, `finalize()`.
    pub fn hash(data: &[u8]) -> Digest {
        sha256(data)
    }

    /// Appends `data` to the message.
    ///
    /// Every complete 64-byte block is compressed immediately and the rest
    /// is buffered. Empty input is accepted.
    ///
    /// # Errors
    /// - [`Sha256Error::Finalized`] if the hasher was finished and not
    ///   reset.
    /// - [`Sha256Error::LengthOverflow`] if the message would grow past
    ///   [`MAX_MESSAGE_LEN`] bytes.
    ///
    /// On error the hasher is left exactly as it was.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if let Stage::Finalized(_) = self.stage {
            debug!(len = self.len, "rejected update on finalized SHA-256 hasher");
            return Err(Sha256Error::Finalized);
        }

        let additional = data.len() as u64;

        let len = match self.len.checked_add(additional) {
            Some(len) if len <= MAX_MESSAGE_LEN => len,
            _ => {
                debug!(len = self.len, additional, "SHA-256 message length overflow");
                return Err(Sha256Error::LengthOverflow {
                    len: self.len,
                    additional,
                });
            }
        };

        self.absorb(data);
        self.len = len;
        self.stage = Stage::Accumulating;

        Ok(())
    }

    /// Finalizes the hash in place and returns the digest.
    ///
    /// The first call pads the message and computes the digest; later calls
    /// return the same value without reprocessing anything.
    pub fn finish(&mut self) -> Digest {
        if let Stage::Finalized(digest) = self.stage {
            return digest;
        }

        let mut state = self.state;
        pad_and_compress(&mut state, &self.buffer[..self.buffered], self.len);

        let digest = state_to_digest(&state);
        self.stage = Stage::Finalized(digest);

        digest
    }

    /// Consumes the hasher and returns the digest.
    pub fn finalize(mut self) -> Digest {
        self.finish()
    }

    /// Returns the digest and puts the hasher back into the fresh state.
    pub fn finalize_reset(&mut self) -> Digest {
        let digest = self.finish();
        self.reset();

        digest
    }

    /// Discards all input and returns to the state of [`Sha256::new`].
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Number of bytes accepted so far.
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Whether no byte has been accepted yet.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn phase(&self) -> Phase {
        match self.stage {
            Stage::Fresh => Phase::Fresh,
            Stage::Accumulating => Phase::Accumulating,
            Stage::Finalized(_) => Phase::Finalized,
        }
    }

    fn absorb(&mut self, mut data: &[u8]) {
        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());

            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }

            compress(&self.buffer, &mut self.state);
            self.buffered = 0;
        }

        let blocks = data.chunks_exact(BLOCK_LEN);
        let tail = blocks.remainder();

        for block in blocks {
            compress_chunk(block, &mut self.state);
        }

        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Sha256 {
    /// Shows progress only; buffered message bytes are never printed.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256")
            .field("phase", &self.phase())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

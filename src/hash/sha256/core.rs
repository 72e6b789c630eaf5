//! SHA-256 core hashing functions
//!
//! This module implements the block-level logic of SHA-256 as defined in
//! FIPS 180-4:
//!
//! - the compression function operating on 512-bit blocks
//! - the Merkle–Damgård padding of the final block(s)
//! - a complete one-shot hashing function for arbitrary-length input
//!
//! Nothing here allocates or keeps state between calls. The incremental
//! [`Sha256`](super::Sha256) hasher drives the same functions.

use super::computations::all_rounds;
use super::{BLOCK_LEN, H256_INIT};
use crate::primitives::Digest;

/// Compresses a single 512-bit message block.
///
/// The block is decoded as sixteen big-endian words and run through all
/// 64 rounds, updating `state` in place.
#[inline(always)]
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    compress_chunk(block, state);
}

/// Same as [`compress`], for a slice the caller guarantees is exactly
/// [`BLOCK_LEN`] bytes long (e.g. from `chunks_exact`).
#[inline(always)]
pub(crate) fn compress_chunk(block: &[u8], state: &mut [u32; 8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut w = [0u32; 16];

    for (slot, word) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
    }

    all_rounds(state, w);
}

/// Pads the unprocessed tail of a message and compresses the final
/// block(s).
///
/// # Parameters
/// - `state`: hash state after every full block has been compressed
/// - `tail`: the remaining `< 64` message bytes
/// - `len`: total message length in bytes, at most
///   [`MAX_MESSAGE_LEN`](super::MAX_MESSAGE_LEN)
///
/// # Notes
/// - A `0x80` byte follows the message, then zeros up to 56 mod 64.
/// - The bit length is written as a 64-bit big-endian integer.
/// - A tail longer than 55 bytes leaves no room for the length field and
///   spills into a second, otherwise empty block.
pub(crate) fn pad_and_compress(state: &mut [u32; 8], tail: &[u8], len: u64) {
    debug_assert!(tail.len() < BLOCK_LEN);

    let mut block = [0u8; BLOCK_LEN];
    let rem = tail.len();

    block[..rem].copy_from_slice(tail);
    block[rem] = 0x80;

    if rem > 55 {
        compress(&block, state);
        block = [0; BLOCK_LEN];
    }

    let bit_len = len << 3;
    block[56..].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, state);
}

/// Serializes the eight state words as big-endian bytes.
pub(crate) fn state_to_digest(state: &[u32; 8]) -> Digest {
    let mut out = [0u8; 32];

    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    Digest::from(out)
}

/// Computes the SHA-256 digest of `input` in one pass.
///
/// Produces the same value as feeding `input` to a fresh
/// [`Sha256`](super::Sha256) and finalizing it, without the intermediate
/// buffering.
pub fn sha256(input: &[u8]) -> Digest {
    let mut state = H256_INIT;

    let blocks = input.chunks_exact(BLOCK_LEN);
    let tail = blocks.remainder();

    for block in blocks {
        compress_chunk(block, &mut state);
    }

    // No addressable slice comes close to 2^61 bytes.
    pad_and_compress(&mut state, tail, input.len() as u64);

    state_to_digest(&state)
}

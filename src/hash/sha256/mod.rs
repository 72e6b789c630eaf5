//! SHA-256 (FIPS 180-4)
//!
//! This module groups everything needed to compute SHA-256 digests:
//!
//! - `computations`: the round functions and the 64-round block transform
//! - `core`: single-block compression and the one-shot [`sha256`] function
//! - `hasher`: the incremental [`Sha256`] state machine
//! - `io`: `std::io` adapters built on top of [`Sha256`]
//!
//! The one-shot function and the incremental hasher share the same
//! compression core, so feeding a message in pieces always produces the
//! digest of the concatenated message.

pub mod computations;
pub mod core;
pub mod hasher;
pub mod io;

pub use self::core::{compress, sha256};
pub use hasher::{Phase, Sha256};
pub use io::{HashingReader, HashingWriter, digest_reader};

/// Size of a SHA-256 message block, in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of a SHA-256 digest, in bytes.
pub const DIGEST_LEN: usize = 32;

/// Largest message, in bytes, whose bit length still fits the 64-bit
/// length field of the final block.
pub const MAX_MESSAGE_LEN: u64 = u64::MAX >> 3;

/// Initial hash value H(0): the first 32 bits of the fractional parts of
/// the square roots of the first eight primes.
pub const H256_INIT: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants: the first 32 bits of the fractional parts of the cube
/// roots of the first 64 primes.
pub const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

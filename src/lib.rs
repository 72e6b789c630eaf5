//! SHA-256 for Nebula
//!
//! This crate provides a self-contained implementation of the SHA-256
//! hash function (FIPS 180-4), with no dependency on platform
//! cryptography libraries.
//!
//! The focus is on **clarity, predictability, and auditability**: explicit
//! constant tables, a pure compression function, and a small incremental
//! API whose misuse is reported rather than silently producing wrong
//! output.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 compression core, the one-shot [`sha256`] function, the
//!   incremental [`Sha256`] hasher, and `std::io` adapters.
//!
//! - `primitives`
//!   Fixed-size value types, currently the 32-byte [`Digest`].
//!
//! - `error`
//!   [`Sha256Error`] for hasher misuse and length overflow, and
//!   [`DigestParseError`] for parsing digests from hex.
//!
//! # Example
//!
//! ```
//! use nebula_sha256::{Sha256, sha256};
//!
//! let mut hasher = Sha256::new();
//! hasher.update(b"a")?;
//! hasher.update(b"bc")?;
//!
//! let digest = hasher.finalize();
//! assert_eq!(digest, sha256(b"abc"));
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), nebula_sha256::Sha256Error>(())
//! ```
//!
//! # Features
//!
//! - `speed`: unrolled compression rounds. Output is identical.
//! - `serde`: `Serialize`/`Deserialize` for [`Digest`] as a hex string.
//!
//! # Design goals
//!
//! - No heap allocations and no `unsafe` in the hashing core
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries. It implements one primitive and nothing built
//! on top of it (no HMAC, no key derivation).

#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod primitives;

pub use error::{DigestParseError, Result, Sha256Error};
pub use hash::{Phase, Sha256, sha256};
pub use primitives::Digest;

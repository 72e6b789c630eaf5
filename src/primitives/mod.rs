//! Primitive types
//!
//! Fixed-size value types shared by the hash implementation and its
//! callers. They carry no algorithm state and perform no allocation,
//! apart from the optional hexadecimal rendering.
//!
//! Current primitives:
//! - `Digest`: the 32-byte output of SHA-256

mod digest;

pub use digest::Digest;

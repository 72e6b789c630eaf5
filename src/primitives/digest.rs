//! SHA-256 digest value
//!
//! This module defines [`Digest`], the fixed-size 32-byte output of the
//! SHA-256 hash function.
//!
//! It is a **plain value type**: once produced by a hasher it is owned by
//! the caller and never mutated. The byte order is exactly the order in
//! which FIPS 180-4 serializes the final hash value, so the hexadecimal
//! form matches published test vectors and common tooling (`sha256sum`).

use std::array::TryFromSliceError;
use std::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use std::str::FromStr;

use crate::error::DigestParseError;

/// A 256-bit SHA-256 digest.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; 32]);

impl Digest {
    /// Length of a digest in bytes.
    pub const LEN: usize = 32;

    /// Returns the digest bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns a copy of the digest bytes.
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Renders the digest as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a digest from exactly 64 hexadecimal characters.
    ///
    /// Upper- and lowercase digits are both accepted. No prefix, separator,
    /// or surrounding whitespace is allowed.
    pub fn from_hex(s: &str) -> Result<Self, DigestParseError> {
        if s.len() != 2 * Self::LEN {
            return Err(DigestParseError::InvalidLength(s.len()));
        }

        let mut out = [0u8; 32];

        hex::decode_to_slice(s, &mut out).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => DigestParseError::InvalidHex {
                character: c,
                index,
            },
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                DigestParseError::InvalidLength(s.len())
            }
        })?;

        Ok(Digest(out))
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

/// Accepts exactly 32 bytes.
impl TryFrom<&[u8]> for Digest {
    type Error = TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Digest(bytes.try_into()?))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Display for Digest {
    /// Formats the digest as lowercase hexadecimal, e.g. `e3b0c442…b855`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl UpperHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;

        Digest::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

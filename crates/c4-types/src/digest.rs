use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::C4Error;
use crate::id::Id;

/// A 64-byte big-endian SHA-512 digest.
///
/// `Digest` is the raw in-memory form of a 512-bit hash. It compares and
/// orders as a big-endian unsigned integer, and converts to an [`Id`] by
/// reinterpreting its bytes — never by rehashing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 64]);

impl Digest {
    /// Byte width of a digest.
    pub const BYTES: usize = 64;

    /// Create a digest from at most 64 bytes, left-padding with zeros so
    /// the value stays aligned with the original 64-byte hash.
    pub fn new(data: &[u8]) -> Result<Self, C4Error> {
        if data.len() > Self::BYTES {
            return Err(C4Error::InvalidLength {
                expected: Self::BYTES,
                actual: data.len(),
            });
        }
        let mut bytes = [0u8; Self::BYTES];
        bytes[Self::BYTES - data.len()..].copy_from_slice(data);
        Ok(Self(bytes))
    }

    /// Create a digest from a pre-computed 64-byte hash.
    pub const fn from_bytes(bytes: [u8; Self::BYTES]) -> Self {
        Self(bytes)
    }

    /// The raw 64 bytes.
    pub fn as_bytes(&self) -> &[u8; Self::BYTES] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// Parse from a hex string.
    pub fn from_hex(s: &str) -> Result<Self, C4Error> {
        let bytes = hex::decode(s).map_err(|e| C4Error::InvalidHex(e.to_string()))?;
        if bytes.len() != Self::BYTES {
            return Err(C4Error::InvalidLength {
                expected: Self::BYTES,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; Self::BYTES];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The identifier naming this digest.
    pub fn id(&self) -> Id {
        Id::from(*self)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; Digest::BYTES]> for Digest {
    fn from(bytes: [u8; Digest::BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; Digest::BYTES] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

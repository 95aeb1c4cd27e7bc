//! SHA-1 hashing primitives for content-addressed storage

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha1::{Digest, Sha1};

use crate::error::{RepoError, Result};

/// A SHA-1 content hash (20 bytes)
///
/// Identical content always yields an identical hash; the whole addressing
/// scheme rests on this. Serialized as a lowercase hex string so that
/// commit records are stable across platforms.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ObjectHash([u8; 20]);

impl ObjectHash {
    /// Create an ObjectHash from raw digest bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Get the hash as a byte slice
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Convert to a lowercase hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| RepoError::InvalidHash(s.to_string()))?;
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| RepoError::InvalidHash(s.to_string()))?;
        Ok(Self(bytes))
    }

    /// First 8 hex characters, for compact display
    pub fn short(&self) -> String {
        self.to_hex()[..8].to_string()
    }
}

impl fmt::Debug for ObjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectHash({})", self.to_hex())
    }
}

impl fmt::Display for ObjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for ObjectHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

struct HexVisitor;

impl Visitor<'_> for HexVisitor {
    type Value = ObjectHash;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a 40-character hex string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<ObjectHash, E> {
        ObjectHash::from_hex(v).map_err(|_| E::custom(format!("invalid object hash: {v}")))
    }
}

impl<'de> Deserialize<'de> for ObjectHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor)
    }
}

/// Hash bytes using SHA-1
pub fn hash_bytes(data: &[u8]) -> ObjectHash {
    let digest = Sha1::digest(data);
    ObjectHash::from_bytes(digest.into())
}

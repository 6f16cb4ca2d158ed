//! Validator public keys: 32 opaque bytes rendered as `Mp` + 64 hex
//! characters.
//!
//! These identify candidates in staking transactions. They are not secp256k1
//! keys and never interchange with [`Address`](super::Address).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::address::parse_prefixed_hex;
use crate::config::{PUBLIC_KEY_LENGTH, PUBLIC_KEY_PREFIX};
use crate::error::{Result, TxError};

/// A 32-byte validator public key.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_LENGTH]);

impl PublicKey {
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds a key from a slice that must be exactly 32 bytes long.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] = slice.try_into().map_err(|_| {
            TxError::InvalidAddressOrKey(format!(
                "public key must be {} bytes, got {}",
                PUBLIC_KEY_LENGTH,
                slice.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for PublicKey {
    type Err = TxError;

    fn from_str(s: &str) -> Result<Self> {
        parse_prefixed_hex::<PUBLIC_KEY_LENGTH>(s, PUBLIC_KEY_PREFIX, "public key").map(Self)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PUBLIC_KEY_PREFIX, self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

//! # Addresses
//!
//! An account address is 20 bytes, rendered as `Mx` followed by 40 hex
//! characters. Single-key accounts derive it from the secp256k1 public key
//! (see [`PrivateKey::address`](crate::crypto::PrivateKey::address));
//! multisig accounts from the owner and nonce of the creating transaction.
//!
//! The textual form has no checksum: parsing only checks the prefix, the
//! length and the hex alphabet.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::config::{ADDRESS_LENGTH, ADDRESS_PREFIX};
use crate::error::{Result, TxError};

/// A 20-byte account address.
///
/// # Examples
///
/// ```
/// use minter_tx::identity::Address;
///
/// let addr: Address = "Mx0000000000000000000000000000000000000000".parse().unwrap();
/// assert_eq!(addr, Address::zero());
/// assert_eq!(addr.to_string(), "Mx0000000000000000000000000000000000000000");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// Wraps raw address bytes.
    pub const fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The all-zero address.
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_LENGTH])
    }

    /// Builds an address from a slice that must be exactly 20 bytes long.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; ADDRESS_LENGTH] = slice.try_into().map_err(|_| {
            TxError::InvalidAddressOrKey(format!(
                "address must be {} bytes, got {}",
                ADDRESS_LENGTH,
                slice.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Takes the last 20 bytes of a 32-byte digest.
    pub fn from_hash(hash: &[u8; 32]) -> Self {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes.copy_from_slice(&hash[32 - ADDRESS_LENGTH..]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Hex body without the `Mx` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Parses `<prefix><hex>` into exactly `N` bytes.
pub(crate) fn parse_prefixed_hex<const N: usize>(
    text: &str,
    prefix: &str,
    what: &str,
) -> Result<[u8; N]> {
    let body = text.strip_prefix(prefix).ok_or_else(|| {
        TxError::InvalidAddressOrKey(format!("{} must start with `{}`: {}", what, prefix, text))
    })?;
    if body.len() != N * 2 {
        return Err(TxError::InvalidAddressOrKey(format!(
            "{} must have {} hex characters after `{}`, got {}",
            what,
            N * 2,
            prefix,
            body.len()
        )));
    }
    let mut out = [0u8; N];
    hex::decode_to_slice(body, &mut out)
        .map_err(|e| TxError::InvalidAddressOrKey(format!("{}: {}", what, e)))?;
    Ok(out)
}

impl FromStr for Address {
    type Err = TxError;

    fn from_str(s: &str) -> Result<Self> {
        parse_prefixed_hex::<ADDRESS_LENGTH>(s, ADDRESS_PREFIX, "address").map(Self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ADDRESS_PREFIX, self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Mxb445feaf3eb747ac52426b054aa42b0b3d913e1f";

    #[test]
    fn parse_and_display_roundtrip() {
        let addr: Address = SAMPLE.parse().unwrap();
        assert_eq!(addr.to_string(), SAMPLE);
        assert_eq!(addr.as_bytes()[0], 0xb4);
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let upper = format!("Mx{}", SAMPLE[2..].to_uppercase());
        let addr: Address = upper.parse().unwrap();
        assert_eq!(addr.to_string(), SAMPLE);
    }

    #[test]
    fn rejects_missing_prefix() {
        let err = "0xb445feaf3eb747ac52426b054aa42b0b3d913e1f"
            .parse::<Address>()
            .unwrap_err();
        assert!(matches!(err, TxError::InvalidAddressOrKey(_)));
    }

    #[test]
    fn rejects_public_key_prefix() {
        assert!("Mpb445feaf3eb747ac52426b054aa42b0b3d913e1f"
            .parse::<Address>()
            .is_err());
    }

    #[test]
    fn rejects_wrong_length_and_bad_hex() {
        assert!("Mxb445".parse::<Address>().is_err());
        assert!("Mxzz45feaf3eb747ac52426b054aa42b0b3d913e1f"
            .parse::<Address>()
            .is_err());
    }

    #[test]
    fn try_from_slice_checks_length() {
        assert!(Address::try_from_slice(&[0u8; 20]).is_ok());
        assert!(matches!(
            Address::try_from_slice(&[0u8; 19]),
            Err(TxError::InvalidAddressOrKey(_))
        ));
    }

    #[test]
    fn from_hash_takes_tail() {
        let mut hash = [0u8; 32];
        hash[12] = 0xaa;
        hash[31] = 0xbb;
        let addr = Address::from_hash(&hash);
        assert_eq!(addr.as_bytes()[0], 0xaa);
        assert_eq!(addr.as_bytes()[19], 0xbb);
    }

    #[test]
    fn serde_uses_text_form() {
        let addr: Address = SAMPLE.parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", SAMPLE));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }
}

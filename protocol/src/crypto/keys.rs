//! # Key Management
//!
//! secp256k1 private keys for signing transactions.
//!
//! Mnemonic-to-key derivation lives outside this crate: whatever derives the
//! key hands over 32 bytes (or their hex form) and this module takes it from
//! there. Key bytes are never logged.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use std::fmt;

use super::hash::keccak256;
use crate::config::PRIVATE_KEY_LENGTH;
use crate::error::{Result, TxError};
use crate::identity::Address;

/// A secp256k1 private key.
///
/// Intentionally does not implement `Serialize`; exporting key material
/// should be a deliberate call to [`PrivateKey::to_bytes`].
///
/// # Examples
///
/// ```
/// use minter_tx::crypto::PrivateKey;
///
/// let key = PrivateKey::from_hex(
///     "df1f236d0396cc43147e44206c341a65573326e907d033690e31a21323c03a9f",
/// ).unwrap();
/// assert!(key.address().to_string().starts_with("Mx"));
/// ```
#[derive(Clone)]
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    /// Generate a fresh key using the OS cryptographic RNG.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut OsRng),
        }
    }

    /// Reconstruct a key from raw 32-byte secret material.
    ///
    /// Fails for zero and for values not below the curve order.
    pub fn from_bytes(bytes: &[u8; PRIVATE_KEY_LENGTH]) -> Result<Self> {
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|_| TxError::InvalidAddressOrKey("invalid secp256k1 secret key".into()))?;
        Ok(Self { signing_key })
    }

    /// Reconstruct a key from its hex encoding (optional `0x` prefix).
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let body = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let mut bytes = [0u8; PRIVATE_KEY_LENGTH];
        hex::decode_to_slice(body, &mut bytes)
            .map_err(|_| TxError::InvalidAddressOrKey("private key is not 32 hex bytes".into()))?;
        Self::from_bytes(&bytes)
    }

    /// Exports the raw secret. Handle with care.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.signing_key.to_bytes().into()
    }

    /// Uncompressed public key without the `0x04` tag (64 bytes).
    pub fn public_key_uncompressed(&self) -> [u8; 64] {
        let public: k256::PublicKey = self.signing_key.verifying_key().into();
        let point = public.to_encoded_point(false);
        let mut out = [0u8; 64];
        out.copy_from_slice(&point.as_bytes()[1..]);
        out
    }

    /// The account address controlled by this key:
    /// `keccak256(uncompressed_pubkey)[12..32]`.
    pub fn address(&self) -> Address {
        Address::from_hash(&keccak256(&self.public_key_uncompressed()))
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(address={})", self.address())
    }
}

impl PartialEq for PrivateKey {
    /// Compared by address; the secret never takes part in a comparison.
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl Eq for PrivateKey {}

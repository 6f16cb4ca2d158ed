//! # Recoverable Signatures
//!
//! secp256k1 ECDSA over a 32-byte prehash, with the recovery id kept so the
//! signer address can be recovered from the signature alone.
//!
//! On the wire a signature is `[v, r, s]` with `v = 27 + recovery_id` and
//! `r`, `s` as 32-byte big-endian scalars. Signatures are RFC 6979
//! deterministic and low-S normalized.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use serde::{Deserialize, Serialize};

use super::hash::keccak256;
use super::keys::PrivateKey;
use crate::config::{SIGNATURE_COMPONENT_LENGTH, SIGNATURE_V_OFFSET};
use crate::error::{Result, TxError};
use crate::identity::Address;

/// One recoverable ECDSA signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// `27 + recovery_id`.
    pub v: u8,
    pub r: [u8; SIGNATURE_COMPONENT_LENGTH],
    pub s: [u8; SIGNATURE_COMPONENT_LENGTH],
}

impl RecoverableSignature {
    /// The raw recovery id (0 or 1 for signatures this crate produces).
    pub fn recovery_id(&self) -> Option<u8> {
        self.v.checked_sub(SIGNATURE_V_OFFSET)
    }

    /// Recovers the address of the key that produced this signature over
    /// `hash`.
    pub fn recover_address(&self, hash: &[u8; 32]) -> Result<Address> {
        let recid = self
            .recovery_id()
            .and_then(RecoveryId::from_byte)
            .ok_or_else(|| {
                TxError::InvalidSignatureBlock(format!("invalid recovery byte v={}", self.v))
            })?;

        let mut rs = [0u8; 2 * SIGNATURE_COMPONENT_LENGTH];
        rs[..SIGNATURE_COMPONENT_LENGTH].copy_from_slice(&self.r);
        rs[SIGNATURE_COMPONENT_LENGTH..].copy_from_slice(&self.s);
        let signature = Signature::from_slice(&rs)
            .map_err(|e| TxError::InvalidSignatureBlock(format!("bad r/s scalars: {}", e)))?;

        let key = VerifyingKey::recover_from_prehash(hash, &signature, recid)
            .map_err(|e| TxError::InvalidSignatureBlock(format!("recovery failed: {}", e)))?;
        let public: k256::PublicKey = (&key).into();
        let point = public.to_encoded_point(false);
        Ok(Address::from_hash(&keccak256(&point.as_bytes()[1..])))
    }
}

/// Anything that can produce a recoverable signature over a 32-byte hash.
///
/// [`PrivateKey`] is the in-process implementation; a hardware wallet or a
/// remote signer implements the same trait.
pub trait HashSigner {
    fn sign_hash(&self, hash: &[u8; 32]) -> Result<RecoverableSignature>;
}

impl HashSigner for PrivateKey {
    fn sign_hash(&self, hash: &[u8; 32]) -> Result<RecoverableSignature> {
        let (signature, recid) = self
            .signing_key()
            .sign_prehash_recoverable(hash)
            .map_err(|e| TxError::Signing(e.to_string()))?;

        let mut r = [0u8; SIGNATURE_COMPONENT_LENGTH];
        let mut s = [0u8; SIGNATURE_COMPONENT_LENGTH];
        r.copy_from_slice(&signature.r().to_bytes());
        s.copy_from_slice(&signature.s().to_bytes());

        Ok(RecoverableSignature {
            v: SIGNATURE_V_OFFSET + recid.to_byte(),
            r,
            s,
        })
    }
}

impl<T: HashSigner + ?Sized> HashSigner for &T {
    fn sign_hash(&self, hash: &[u8; 32]) -> Result<RecoverableSignature> {
        (**self).sign_hash(hash)
    }
}

/// Signs `hash` with `signer`.
pub fn sign<S: HashSigner + ?Sized>(signer: &S, hash: &[u8; 32]) -> Result<RecoverableSignature> {
    signer.sign_hash(hash)
}

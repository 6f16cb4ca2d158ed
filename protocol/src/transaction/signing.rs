//! Transaction signing with secp256k1 keys.
//!
//! Signing is a separate step from building because the key may not be
//! available at construction time (hardware wallet, remote signer, the
//! other members of a multisig). Anything implementing [`HashSigner`] can
//! sign.
//!
//! # Signature Blocks
//!
//! ```text
//! single: rlp([v, r, s])
//! multi:  rlp([owner, [[v, r, s], ...]])
//! ```
//!
//! `r` and `s` are written as full 32-byte scalars. On decode, shorter
//! scalars are accepted and left-padded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::envelope::Transaction;
use super::types::SignatureType;
use crate::codec::rlp::{self, RlpError, RlpItem, RlpStream};
use crate::config::SIGNATURE_COMPONENT_LENGTH;
use crate::crypto::{HashSigner, RecoverableSignature};
use crate::error::{Result, TxError};
use crate::identity::Address;

// ---------------------------------------------------------------------------
// SignatureData
// ---------------------------------------------------------------------------

/// The signature attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureData {
    /// One signature by the sending key.
    Single(RecoverableSignature),
    /// Signatures by members of the multisig account `owner`, in the order
    /// they were supplied.
    Multi {
        owner: Address,
        signatures: Vec<RecoverableSignature>,
    },
}

impl SignatureData {
    pub fn signature_type(&self) -> SignatureType {
        match self {
            Self::Single(_) => SignatureType::Single,
            Self::Multi { .. } => SignatureType::Multi,
        }
    }

    /// The signature block as carried in the signature data field.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Single(signature) => {
                let mut out = RlpStream::new();
                append_signature(&mut out, signature);
                out.out()
            }
            Self::Multi { owner, signatures } => {
                let mut list = RlpStream::new();
                for signature in signatures {
                    let mut triple = RlpStream::new();
                    append_signature(&mut triple, signature);
                    list.append_list(&triple);
                }
                let mut out = RlpStream::new();
                out.append_bytes(owner.as_bytes()).append_list(&list);
                out.out()
            }
        }
    }

    /// Parses a signature block declared to be of kind `kind`.
    ///
    /// Any mismatch between the declared kind and the block's shape is an
    /// [`TxError::InvalidSignatureBlock`].
    pub fn decode(kind: SignatureType, bytes: &[u8]) -> Result<Self> {
        let item = rlp::decode_exact(bytes).map_err(block_error)?;
        match kind {
            SignatureType::Single => Ok(Self::Single(read_signature(&item)?)),
            SignatureType::Multi => {
                let fields = item.as_list().map_err(block_error)?;
                let [owner, list] = fields else {
                    return Err(invalid(format!(
                        "multi signature block must have 2 items, got {}",
                        fields.len()
                    )));
                };
                let owner = Address::try_from_slice(owner.as_bytes().map_err(block_error)?)
                    .map_err(|e| invalid(e.to_string()))?;
                let signatures = list
                    .as_list()
                    .map_err(block_error)?
                    .iter()
                    .map(read_signature)
                    .collect::<Result<Vec<_>>>()?;
                if signatures.is_empty() {
                    return Err(invalid("multi signature block has no signatures".into()));
                }
                Ok(Self::Multi { owner, signatures })
            }
        }
    }
}

fn invalid(reason: String) -> TxError {
    TxError::InvalidSignatureBlock(reason)
}

fn block_error(err: RlpError) -> TxError {
    invalid(err.to_string())
}

fn append_signature(out: &mut RlpStream, signature: &RecoverableSignature) {
    out.append_u64(u64::from(signature.v))
        .append_bytes(&signature.r)
        .append_bytes(&signature.s);
}

fn read_signature(item: &RlpItem<'_>) -> Result<RecoverableSignature> {
    let fields = item.as_list().map_err(block_error)?;
    let [v, r, s] = fields else {
        return Err(invalid(format!(
            "signature must have 3 items, got {}",
            fields.len()
        )));
    };
    let v = match v.as_bytes().map_err(block_error)? {
        [] => 0,
        [v] => *v,
        other => return Err(invalid(format!("v is {} bytes wide", other.len()))),
    };
    Ok(RecoverableSignature {
        v,
        r: read_scalar(r, "r")?,
        s: read_scalar(s, "s")?,
    })
}

fn read_scalar(item: &RlpItem<'_>, name: &str) -> Result<[u8; SIGNATURE_COMPONENT_LENGTH]> {
    let bytes = item.as_bytes().map_err(block_error)?;
    if bytes.len() > SIGNATURE_COMPONENT_LENGTH {
        return Err(invalid(format!("{} is {} bytes wide", name, bytes.len())));
    }
    let mut out = [0u8; SIGNATURE_COMPONENT_LENGTH];
    out[SIGNATURE_COMPONENT_LENGTH - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

impl Transaction {
    /// Re-signing is allowed with the same kind only.
    fn ensure_kind(&self, requested: SignatureType) -> Result<()> {
        match self.signature_type() {
            Some(attached) if attached != requested => {
                Err(TxError::SignatureKindConflict { attached, requested })
            }
            _ => Ok(()),
        }
    }

    /// Signs with one key and returns the final wire bytes.
    ///
    /// A previous single signature is replaced.
    ///
    /// ```
    /// use minter_tx::crypto::PrivateKey;
    /// use minter_tx::transaction::{Transaction, TxBuilder};
    ///
    /// let key = PrivateKey::generate();
    /// let mut tx = TxBuilder::new().gas_coin("BIP").send_coin().coin("BIP").build();
    /// let bytes = tx.sign_single(&key).unwrap();
    ///
    /// let decoded = Transaction::decode(&bytes).unwrap();
    /// assert_eq!(decoded.sender_address().unwrap(), key.address());
    /// ```
    pub fn sign_single<S: HashSigner + ?Sized>(&mut self, signer: &S) -> Result<Vec<u8>> {
        self.ensure_kind(SignatureType::Single)?;
        let hash = self.signing_hash(SignatureType::Single);
        let signature = signer.sign_hash(&hash)?;
        self.signature = Some(SignatureData::Single(signature));
        debug!(tx_type = %self.tx_type(), "transaction signed");
        Ok(self.encode())
    }

    /// Signs on behalf of the multisig account `owner`, one signature per
    /// signer in the given order, and returns the final wire bytes.
    pub fn sign_multi<S: HashSigner>(&mut self, owner: Address, signers: &[S]) -> Result<Vec<u8>> {
        self.ensure_kind(SignatureType::Multi)?;
        let hash = self.signing_hash(SignatureType::Multi);
        let signatures = signers
            .iter()
            .map(|signer| signer.sign_hash(&hash))
            .collect::<Result<Vec<_>>>()?;
        self.attach_multi_signatures(owner, signatures)
    }

    /// Attaches signatures collected elsewhere over
    /// [`signing_hash(SignatureType::Multi)`](Transaction::signing_hash).
    ///
    /// Signatures are not checked against the hash.
    pub fn attach_multi_signatures(
        &mut self,
        owner: Address,
        signatures: Vec<RecoverableSignature>,
    ) -> Result<Vec<u8>> {
        self.ensure_kind(SignatureType::Multi)?;
        if signatures.is_empty() {
            return Err(invalid("multisig transaction needs at least one signature".into()));
        }
        debug!(
            tx_type = %self.tx_type(),
            %owner,
            signatures = signatures.len(),
            "transaction multi-signed"
        );
        self.signature = Some(SignatureData::Multi { owner, signatures });
        Ok(self.encode())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChainId;
    use crate::crypto::PrivateKey;
    use crate::transaction::TxBuilder;

    fn sample_tx() -> Transaction {
        TxBuilder::new()
            .nonce(3u32)
            .chain_id(ChainId::Testnet)
            .gas_coin("MNT")
            .send_coin()
            .coin("MNT")
            .to(Address::from_bytes([0x5a; 20]))
            .value(&"1".parse().unwrap())
            .build()
    }

    #[test]
    fn single_signature_recovers_signer() {
        let key = PrivateKey::generate();
        let mut tx = sample_tx();
        let bytes = tx.sign_single(&key).unwrap();

        let decoded = Transaction::decode(&bytes).unwrap();
        assert_eq!(decoded.signature_type(), Some(SignatureType::Single));
        assert_eq!(decoded.sender_address().unwrap(), key.address());
    }

    #[test]
    fn resigning_with_same_kind_replaces() {
        let first = PrivateKey::generate();
        let second = PrivateKey::generate();
        let mut tx = sample_tx();
        tx.sign_single(&first).unwrap();
        tx.sign_single(&second).unwrap();
        assert_eq!(tx.sender_address().unwrap(), second.address());
    }

    #[test]
    fn resigning_with_other_kind_conflicts() {
        let key = PrivateKey::generate();
        let mut tx = sample_tx();
        tx.sign_single(&key).unwrap();

        let err = tx
            .sign_multi(Address::zero(), std::slice::from_ref(&key))
            .unwrap_err();
        assert!(matches!(
            err,
            TxError::SignatureKindConflict {
                attached: SignatureType::Single,
                requested: SignatureType::Multi,
            }
        ));
        assert_eq!(tx.signature_type(), Some(SignatureType::Single));
    }

    #[test]
    fn multi_signatures_keep_order() {
        let keys = [PrivateKey::generate(), PrivateKey::generate(), PrivateKey::generate()];
        let owner = Address::from_bytes([0xee; 20]);
        let mut tx = sample_tx();
        let bytes = tx.sign_multi(owner, &keys).unwrap();

        let decoded = Transaction::decode(&bytes).unwrap();
        assert_eq!(decoded.sender_address().unwrap(), owner);
        let hash = decoded.signing_hash(SignatureType::Multi);
        match decoded.signature().unwrap() {
            SignatureData::Multi { owner: o, signatures } => {
                assert_eq!(*o, owner);
                assert_eq!(signatures.len(), 3);
                for (signature, key) in signatures.iter().zip(&keys) {
                    assert_eq!(signature.recover_address(&hash).unwrap(), key.address());
                }
            }
            other => panic!("expected multi signature, got {:?}", other),
        }
    }

    #[test]
    fn attach_collected_signatures() {
        let key = PrivateKey::generate();
        let owner = Address::from_bytes([0x01; 20]);
        let mut tx = sample_tx();
        let signature = key.sign_hash(&tx.signing_hash(SignatureType::Multi)).unwrap();
        let bytes = tx.attach_multi_signatures(owner, vec![signature]).unwrap();
        assert_eq!(Transaction::decode(&bytes).unwrap(), tx);
    }

    #[test]
    fn empty_multisig_is_rejected() {
        let mut tx = sample_tx();
        let none: [PrivateKey; 0] = [];
        assert!(matches!(
            tx.sign_multi(Address::zero(), &none),
            Err(TxError::InvalidSignatureBlock(_))
        ));
        assert!(!tx.is_signed());
    }

    #[test]
    fn dyn_signers_are_accepted() {
        let a = PrivateKey::generate();
        let b = PrivateKey::generate();
        let signers: Vec<&dyn HashSigner> = vec![&a, &b];
        let mut tx = sample_tx();
        assert!(tx.sign_multi(Address::zero(), &signers).is_ok());
    }

    #[test]
    fn single_block_under_multi_kind_is_invalid() {
        let key = PrivateKey::generate();
        let signature = key.sign_hash(&[7u8; 32]).unwrap();
        let block = SignatureData::Single(signature).encode();
        assert!(matches!(
            SignatureData::decode(SignatureType::Multi, &block),
            Err(TxError::InvalidSignatureBlock(_))
        ));
    }

    #[test]
    fn multi_block_under_single_kind_is_invalid() {
        let key = PrivateKey::generate();
        let signature = key.sign_hash(&[7u8; 32]).unwrap();
        let block = SignatureData::Multi {
            owner: Address::zero(),
            signatures: vec![signature],
        }
        .encode();
        assert!(matches!(
            SignatureData::decode(SignatureType::Single, &block),
            Err(TxError::InvalidSignatureBlock(_))
        ));
    }

    #[test]
    fn short_scalars_are_left_padded() {
        let mut triple = RlpStream::new();
        triple.append_u64(27).append_bytes(&[0x01]).append_bytes(&[0x02, 0x03]);
        let decoded = SignatureData::decode(SignatureType::Single, &triple.out()).unwrap();
        match decoded {
            SignatureData::Single(signature) => {
                assert_eq!(signature.v, 27);
                assert_eq!(signature.r[31], 0x01);
                assert_eq!(&signature.s[30..], &[0x02, 0x03]);
                assert!(signature.r[..31].iter().all(|&b| b == 0));
            }
            other => panic!("expected single signature, got {:?}", other),
        }
    }

    #[test]
    fn garbage_block_is_invalid() {
        assert!(matches!(
            SignatureData::decode(SignatureType::Single, &[0xff, 0x00]),
            Err(TxError::InvalidSignatureBlock(_))
        ));
    }

    #[test]
    fn signature_data_serde_roundtrip() {
        let key = PrivateKey::generate();
        let data = SignatureData::Single(key.sign_hash(&[1u8; 32]).unwrap());
        let json = serde_json::to_string(&data).unwrap();
        let recovered: SignatureData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, recovered);
    }
}

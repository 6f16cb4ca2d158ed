//! The transaction envelope: common fields, one payload, one signature.
//!
//! # Wire Format
//!
//! A transaction is an RLP list of ten items, in this order:
//!
//! ```text
//! 0 nonce           integer
//! 1 chain_id        integer (1 mainnet, 2 testnet)
//! 2 gas_price       integer
//! 3 gas_coin        10-byte zero-padded symbol
//! 4 type            integer type code
//! 5 data            byte string holding the RLP list of payload fields
//! 6 payload         free-form bytes
//! 7 service_data    free-form bytes
//! 8 signature_type  integer (1 single, 2 multi)
//! 9 signature_data  byte string holding the RLP signature block
//! ```
//!
//! The signing hash is keccak-256 over the list of the first nine items.
//! Integers are minimal big-endian; zero is the empty string.

use num_bigint::BigUint;
use tracing::debug;

use super::data::{decode_payload, read_coin, read_small, read_uint, TxData, TxPayload};
use super::signing::SignatureData;
use super::types::{SignatureType, TxType};
use crate::codec::decimal::BigDec18;
use crate::codec::rlp::{self, RlpItem, RlpStream};
use crate::codec::value::{to_bytes, to_bytes_fixed};
use crate::config::{
    ChainId, COIN_SYMBOL_LENGTH, COMMISSION_MULTIPLIER, PAYLOAD_BYTE_GAS, TX_HASH_PREFIX,
};
use crate::crypto::{keccak256, sha256};
use crate::error::{Result, TxError};
use crate::identity::Address;

/// Number of items in an encoded transaction.
const FIELD_COUNT: usize = 10;

// ---------------------------------------------------------------------------
// TxHeader
// ---------------------------------------------------------------------------

/// The fields every transaction carries regardless of its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TxHeader {
    pub(crate) nonce: BigUint,
    pub(crate) chain_id: ChainId,
    pub(crate) gas_price: BigUint,
    pub(crate) gas_coin: String,
    pub(crate) payload: Vec<u8>,
    pub(crate) service_data: Vec<u8>,
}

impl Default for TxHeader {
    fn default() -> Self {
        Self {
            nonce: BigUint::default(),
            chain_id: ChainId::Mainnet,
            gas_price: BigUint::from(1u32),
            gas_coin: String::new(),
            payload: Vec::new(),
            service_data: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A Minter transaction.
///
/// Built with [`TxBuilder`](super::TxBuilder), signed with
/// [`sign_single`](Transaction::sign_single) or
/// [`sign_multi`](Transaction::sign_multi), or decoded from wire bytes.
/// Fields are read-only after construction; only the signature can change.
///
/// The type code is not stored: it is always the code of the carried
/// payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub(crate) header: TxHeader,
    pub(crate) data: TxPayload,
    pub(crate) signature: Option<SignatureData>,
}

impl Transaction {
    pub(crate) fn new(header: TxHeader, data: TxPayload) -> Self {
        Self {
            header,
            data,
            signature: None,
        }
    }

    pub fn nonce(&self) -> &BigUint {
        &self.header.nonce
    }

    pub fn chain_id(&self) -> ChainId {
        self.header.chain_id
    }

    pub fn gas_price(&self) -> &BigUint {
        &self.header.gas_price
    }

    pub fn gas_coin(&self) -> &str {
        &self.header.gas_coin
    }

    pub fn tx_type(&self) -> TxType {
        self.data.tx_type()
    }

    pub fn data(&self) -> &TxPayload {
        &self.data
    }

    /// The payload as variant `D`, or `None` if it is another variant.
    pub fn data_as<D: TxData>(&self) -> Option<&D> {
        D::from_payload(&self.data)
    }

    /// Free-form payload bytes (a memo, usually).
    pub fn payload(&self) -> &[u8] {
        &self.header.payload
    }

    pub fn service_data(&self) -> &[u8] {
        &self.header.service_data
    }

    pub fn signature(&self) -> Option<&SignatureData> {
        self.signature.as_ref()
    }

    pub fn signature_type(&self) -> Option<SignatureType> {
        self.signature.as_ref().map(SignatureData::signature_type)
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    // -- Encoding -----------------------------------------------------------

    /// Appends items 0..=8. `kind` is `None` only for an unsigned encode.
    fn append_unsigned(&self, out: &mut RlpStream, kind: Option<SignatureType>) {
        out.append_bytes(&to_bytes(&self.header.nonce))
            .append_u64(u64::from(self.header.chain_id.as_u8()))
            .append_bytes(&to_bytes(&self.header.gas_price))
            .append_bytes(&to_bytes_fixed(&self.header.gas_coin, COIN_SYMBOL_LENGTH))
            .append_u64(u64::from(self.data.type_code()))
            .append_bytes(&self.data.encode())
            .append_bytes(&self.header.payload)
            .append_bytes(&self.header.service_data);
        match kind {
            Some(kind) => out.append_u64(u64::from(kind.code())),
            None => out.append_bytes(&[]),
        };
    }

    /// The hash a signer of kind `kind` signs.
    ///
    /// Independent of any signature already attached.
    pub fn signing_hash(&self, kind: SignatureType) -> [u8; 32] {
        let mut out = RlpStream::new();
        self.append_unsigned(&mut out, Some(kind));
        keccak256(&out.out())
    }

    /// Wire bytes.
    ///
    /// An unsigned transaction encodes with an empty signature type and
    /// empty signature data; such bytes decode back only once signed.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = RlpStream::new();
        match &self.signature {
            Some(signature) => {
                self.append_unsigned(&mut out, Some(signature.signature_type()));
                out.append_bytes(&signature.encode());
            }
            None => {
                self.append_unsigned(&mut out, None);
                out.append_bytes(&[]);
            }
        }
        out.out()
    }

    /// Lowercase hex of [`encode`](Self::encode), no prefix.
    pub fn encode_hex(&self) -> String {
        hex::encode(self.encode())
    }

    // -- Decoding -----------------------------------------------------------

    /// Parses a signed transaction.
    ///
    /// Checks run in wire order: the outer list and its arity, then the type
    /// code, then the payload, then the signature block. The first failure
    /// is returned.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let item = rlp::decode_exact(bytes)?;
        let fields = item.as_list()?;
        let [
            nonce,
            chain_id,
            gas_price,
            gas_coin,
            tx_type,
            data,
            payload,
            service_data,
            signature_type,
            signature_data,
        ]: &[RlpItem<'_>; FIELD_COUNT] = fields.try_into().map_err(|_| {
            TxError::MalformedEncoding(format!(
                "transaction must have {} fields, got {}",
                FIELD_COUNT,
                fields.len()
            ))
        })?;

        let type_code = read_small(tx_type, "type", 2)? as u16;
        let data = decode_payload(type_code, data.as_bytes()?)?;

        let chain_id = ChainId::try_from(read_small(chain_id, "chain_id", 1)? as u8)?;
        let header = TxHeader {
            nonce: read_uint(nonce)?,
            chain_id,
            gas_price: read_uint(gas_price)?,
            gas_coin: read_coin(gas_coin, "gas_coin")?,
            payload: payload.as_bytes()?.to_vec(),
            service_data: service_data.as_bytes()?.to_vec(),
        };

        let kind_code = signature_type
            .as_bytes()
            .map_err(|e| TxError::InvalidSignatureBlock(e.to_string()))?;
        let kind = match kind_code {
            [code] => SignatureType::from_code(*code),
            _ => None,
        }
        .ok_or_else(|| {
            TxError::InvalidSignatureBlock(format!(
                "unknown signature type 0x{}",
                hex::encode(kind_code)
            ))
        })?;
        let signature_bytes = signature_data
            .as_bytes()
            .map_err(|e| TxError::InvalidSignatureBlock(e.to_string()))?;
        let signature = SignatureData::decode(kind, signature_bytes)?;

        let tx = Self {
            header,
            data,
            signature: Some(signature),
        };
        debug!(tx_type = %tx.tx_type(), kind = %kind, "decoded transaction");
        Ok(tx)
    }

    /// [`decode`](Self::decode) over a hex string, with or without `0x`.
    pub fn decode_hex(text: &str) -> Result<Self> {
        let body = text.strip_prefix("0x").unwrap_or(text);
        Self::decode(&hex::decode(body)?)
    }

    // -- Derived values -----------------------------------------------------

    /// Transaction hash as reported by the network: `Mt` + hex of SHA-256
    /// over the wire bytes.
    pub fn hash(&self) -> String {
        format!("{}{}", TX_HASH_PREFIX, hex::encode(sha256(&self.encode())))
    }

    /// Gas units this transaction consumes: the payload variant's cost plus
    /// a charge for every byte of free-form payload and service data.
    pub fn gas(&self) -> u64 {
        let extra_bytes = (self.header.payload.len() + self.header.service_data.len()) as u64;
        self.data.gas() + extra_bytes * PAYLOAD_BYTE_GAS
    }

    /// Fee in gas-coin units: `gas * gas_price * 10^15` base units.
    pub fn commission(&self) -> BigDec18 {
        let units = BigUint::from(self.gas()) * &self.header.gas_price * COMMISSION_MULTIPLIER;
        BigDec18::from_base_units(units)
    }

    /// Address of the sending account.
    ///
    /// Recovered from the signature for single-signed transactions; the
    /// declared multisig account for multi-signed ones.
    pub fn sender_address(&self) -> Result<Address> {
        match &self.signature {
            Some(SignatureData::Single(signature)) => {
                signature.recover_address(&self.signing_hash(SignatureType::Single))
            }
            Some(SignatureData::Multi { owner, .. }) => Ok(*owner),
            None => Err(TxError::InvalidSignatureBlock(
                "transaction is not signed".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::PrivateKey;
    use crate::transaction::TxBuilder;

    fn send_tx() -> Transaction {
        TxBuilder::new()
            .nonce(1u32)
            .chain_id(ChainId::Testnet)
            .gas_price(1u32)
            .gas_coin("MNT")
            .send_coin()
            .coin("MNT")
            .to(Address::zero())
            .value(&"10".parse().unwrap())
            .build()
    }

    #[test]
    fn unsigned_encode_has_empty_signature_fields() {
        let encoded = send_tx().encode();
        assert!(hex::encode(&encoded).ends_with("8080"));
        let item = rlp::decode_exact(&encoded).unwrap();
        assert_eq!(item.as_list().unwrap().len(), FIELD_COUNT);
    }

    #[test]
    fn unsigned_bytes_do_not_decode() {
        assert!(matches!(
            Transaction::decode(&send_tx().encode()),
            Err(TxError::InvalidSignatureBlock(_))
        ));
    }

    #[test]
    fn signing_hash_depends_on_kind() {
        let tx = send_tx();
        assert_ne!(
            tx.signing_hash(SignatureType::Single),
            tx.signing_hash(SignatureType::Multi)
        );
    }

    #[test]
    fn signing_hash_ignores_attached_signature() {
        let mut tx = send_tx();
        let before = tx.signing_hash(SignatureType::Single);
        tx.sign_single(&PrivateKey::generate()).unwrap();
        assert_eq!(before, tx.signing_hash(SignatureType::Single));
    }

    #[test]
    fn gas_counts_payload_bytes() {
        let tx = TxBuilder::new()
            .payload(b"hello".to_vec())
            .service_data(vec![1, 2, 3])
            .send_coin()
            .build();
        assert_eq!(tx.gas(), 10 + 2 * 8);
    }

    #[test]
    fn commission_of_plain_send() {
        // 10 gas at price 1 costs 0.01 of the gas coin.
        assert_eq!(send_tx().commission(), "0.01".parse().unwrap());
    }

    #[test]
    fn hash_is_prefixed_sha256() {
        let tx = send_tx();
        let hash = tx.hash();
        assert!(hash.starts_with("Mt"));
        assert_eq!(hash.len(), 2 + 64);
        assert_eq!(&hash[2..], hex::encode(sha256(&tx.encode())));
    }

    #[test]
    fn sender_of_unsigned_is_an_error() {
        assert!(send_tx().sender_address().is_err());
    }

    #[test]
    fn decode_hex_accepts_prefix() {
        let mut tx = send_tx();
        tx.sign_single(&PrivateKey::generate()).unwrap();
        let text = tx.encode_hex();
        let plain = Transaction::decode_hex(&text).unwrap();
        let prefixed = Transaction::decode_hex(&format!("0x{}", text)).unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain, tx);
    }

    #[test]
    fn bad_hex_is_malformed() {
        assert!(matches!(
            Transaction::decode_hex("f8zz"),
            Err(TxError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn wrong_arity_is_malformed() {
        let mut out = RlpStream::new();
        for _ in 0..9 {
            out.append_bytes(&[]);
        }
        assert!(matches!(
            Transaction::decode(&out.out()),
            Err(TxError::MalformedEncoding(_))
        ));
    }
}

//! # Transaction Payloads
//!
//! One module per payload variant. Each variant is a plain struct that
//! implements [`TxData`]: it knows its type code, how to write its fields
//! into an RLP list, how to read them back, and what it costs in gas.
//!
//! [`TxPayload`] is the closed sum of all variants. Decoding goes through
//! [`decode_payload`], which looks the type code up in a static registry of
//! per-variant factories.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::codec::rlp::{self, RlpItem, RlpStream};
use crate::codec::value::{to_biguint, to_bytes, to_bytes_fixed, to_string_clear};
use crate::config::COIN_SYMBOL_LENGTH;
use crate::error::{Result, TxError};
use crate::identity::{Address, PublicKey};

use super::types::TxType;

pub mod buy_coin;
pub mod candidate_status;
pub mod create_coin;
pub mod create_multisig_address;
pub mod declare_candidacy;
pub mod delegate;
pub mod edit_candidate;
pub mod multisend;
pub mod redeem_check;
pub mod sell_all_coins;
pub mod sell_coin;
pub mod send_coin;
pub mod unbond;

pub use buy_coin::BuyCoin;
pub use candidate_status::{SetCandidateOffline, SetCandidateOnline};
pub use create_coin::CreateCoin;
pub use create_multisig_address::CreateMultisigAddress;
pub use declare_candidacy::DeclareCandidacy;
pub use delegate::Delegate;
pub use edit_candidate::EditCandidate;
pub use multisend::{Multisend, MultisendItem};
pub use redeem_check::RedeemCheck;
pub use sell_all_coins::SellAllCoins;
pub use sell_coin::SellCoin;
pub use send_coin::SendCoin;
pub use unbond::Unbond;

// ---------------------------------------------------------------------------
// TxData
// ---------------------------------------------------------------------------

/// A payload variant.
///
/// Implementors provide the field codec; the type code, the encoded data
/// blob and the default gas cost come for free.
pub trait TxData: Sized + Clone + Default + Into<TxPayload> {
    /// The type code this variant travels under.
    const TX_TYPE: TxType;

    /// Appends this variant's fields, in wire order, to `out`.
    fn encode_fields(&self, out: &mut RlpStream);

    /// Rebuilds the variant from the items of its field list.
    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self>;

    /// Borrows the variant out of a payload, if the payload is this variant.
    fn from_payload(payload: &TxPayload) -> Option<&Self>;

    fn type_code(&self) -> u16 {
        Self::TX_TYPE.code()
    }

    /// The RLP list of fields, as carried in the transaction's data field.
    fn encode(&self) -> Vec<u8> {
        let mut out = RlpStream::new();
        self.encode_fields(&mut out);
        out.out()
    }

    fn gas(&self) -> u64 {
        Self::TX_TYPE.base_gas()
    }
}

// ---------------------------------------------------------------------------
// TxPayload
// ---------------------------------------------------------------------------

/// The payload of a transaction: exactly one variant.
///
/// The transaction's type code is always derived from this value, so the
/// code and the payload can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TxPayload {
    SendCoin(SendCoin),
    SellCoin(SellCoin),
    SellAllCoins(SellAllCoins),
    BuyCoin(BuyCoin),
    CreateCoin(CreateCoin),
    DeclareCandidacy(DeclareCandidacy),
    Delegate(Delegate),
    Unbond(Unbond),
    RedeemCheck(RedeemCheck),
    SetCandidateOnline(SetCandidateOnline),
    SetCandidateOffline(SetCandidateOffline),
    CreateMultisig(CreateMultisigAddress),
    Multisend(Multisend),
    EditCandidate(EditCandidate),
}

macro_rules! each_variant {
    ($payload:expr, $data:ident => $body:expr) => {
        match $payload {
            TxPayload::SendCoin($data) => $body,
            TxPayload::SellCoin($data) => $body,
            TxPayload::SellAllCoins($data) => $body,
            TxPayload::BuyCoin($data) => $body,
            TxPayload::CreateCoin($data) => $body,
            TxPayload::DeclareCandidacy($data) => $body,
            TxPayload::Delegate($data) => $body,
            TxPayload::Unbond($data) => $body,
            TxPayload::RedeemCheck($data) => $body,
            TxPayload::SetCandidateOnline($data) => $body,
            TxPayload::SetCandidateOffline($data) => $body,
            TxPayload::CreateMultisig($data) => $body,
            TxPayload::Multisend($data) => $body,
            TxPayload::EditCandidate($data) => $body,
        }
    };
}

impl TxPayload {
    pub fn tx_type(&self) -> TxType {
        fn type_of<D: TxData>(_: &D) -> TxType {
            D::TX_TYPE
        }
        each_variant!(self, d => type_of(d))
    }

    pub fn type_code(&self) -> u16 {
        self.tx_type().code()
    }

    /// Encoded field list of the carried variant.
    pub fn encode(&self) -> Vec<u8> {
        each_variant!(self, d => d.encode())
    }

    pub fn gas(&self) -> u64 {
        each_variant!(self, d => d.gas())
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

type Factory = fn(&[RlpItem<'_>]) -> Result<TxPayload>;

fn factory<D: TxData>(fields: &[RlpItem<'_>]) -> Result<TxPayload> {
    D::decode_fields(fields).map(Into::into)
}

/// Type code → payload factory. Immutable; one entry per [`TxType`].
static REGISTRY: [(TxType, Factory); 14] = [
    (TxType::SendCoin, factory::<SendCoin>),
    (TxType::SellCoin, factory::<SellCoin>),
    (TxType::SellAllCoins, factory::<SellAllCoins>),
    (TxType::BuyCoin, factory::<BuyCoin>),
    (TxType::CreateCoin, factory::<CreateCoin>),
    (TxType::DeclareCandidacy, factory::<DeclareCandidacy>),
    (TxType::Delegate, factory::<Delegate>),
    (TxType::Unbond, factory::<Unbond>),
    (TxType::RedeemCheck, factory::<RedeemCheck>),
    (TxType::SetCandidateOnline, factory::<SetCandidateOnline>),
    (TxType::SetCandidateOffline, factory::<SetCandidateOffline>),
    (TxType::CreateMultisig, factory::<CreateMultisigAddress>),
    (TxType::Multisend, factory::<Multisend>),
    (TxType::EditCandidate, factory::<EditCandidate>),
];

/// Decodes the data field of a transaction with type code `type_code`.
///
/// Fails with [`TxError::UnknownTransactionType`] when no variant is
/// registered for the code, before the data is looked at.
pub fn decode_payload(type_code: u16, data: &[u8]) -> Result<TxPayload> {
    let (tx_type, build) = REGISTRY
        .iter()
        .find(|(tx_type, _)| tx_type.code() == type_code)
        .ok_or(TxError::UnknownTransactionType(type_code))?;
    tracing::trace!(%tx_type, len = data.len(), "decoding payload");
    let item = rlp::decode_exact(data)?;
    build(item.as_list()?)
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Checks the field count of a variant and hands the fields back as an array.
pub(crate) fn expect_fields<'i, 'a, const N: usize>(
    fields: &'i [RlpItem<'a>],
    tx_type: TxType,
) -> Result<&'i [RlpItem<'a>; N]> {
    fields.try_into().map_err(|_| {
        TxError::MalformedEncoding(format!(
            "{} data must have {} fields, got {}",
            tx_type,
            N,
            fields.len()
        ))
    })
}

pub(crate) fn append_coin(out: &mut RlpStream, symbol: &str) {
    out.append_bytes(&to_bytes_fixed(symbol, COIN_SYMBOL_LENGTH));
}

pub(crate) fn append_uint(out: &mut RlpStream, value: &BigUint) {
    out.append_bytes(&to_bytes(value));
}

pub(crate) fn read_bytes(item: &RlpItem<'_>) -> Result<Vec<u8>> {
    Ok(item.as_bytes()?.to_vec())
}

pub(crate) fn read_uint(item: &RlpItem<'_>) -> Result<BigUint> {
    Ok(to_biguint(item.as_bytes()?))
}

/// Reads a minimal big-endian integer that must fit in `width` bytes.
pub(crate) fn read_small(item: &RlpItem<'_>, field: &'static str, width: usize) -> Result<u64> {
    let bytes = item.as_bytes()?;
    if bytes.first() == Some(&0) {
        return Err(TxError::MalformedEncoding(format!(
            "{}: integer has leading zero bytes",
            field
        )));
    }
    if bytes.len() > width {
        return Err(TxError::FieldOverflow {
            field,
            width,
            len: bytes.len(),
        });
    }
    Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

pub(crate) fn read_coin(item: &RlpItem<'_>, field: &'static str) -> Result<String> {
    let bytes = item.as_bytes()?;
    if bytes.len() > COIN_SYMBOL_LENGTH {
        return Err(TxError::FieldOverflow {
            field,
            width: COIN_SYMBOL_LENGTH,
            len: bytes.len(),
        });
    }
    to_string_clear(bytes)
}

pub(crate) fn read_address(item: &RlpItem<'_>, field: &'static str) -> Result<Address> {
    let bytes = item.as_bytes()?;
    Address::try_from_slice(bytes)
        .map_err(|_| TxError::MalformedEncoding(format!("{}: expected 20 bytes, got {}", field, bytes.len())))
}

pub(crate) fn read_public_key(item: &RlpItem<'_>, field: &'static str) -> Result<PublicKey> {
    let bytes = item.as_bytes()?;
    PublicKey::try_from_slice(bytes)
        .map_err(|_| TxError::MalformedEncoding(format!("{}: expected 32 bytes, got {}", field, bytes.len())))
}

/// Signs `tx` with a throwaway key and decodes the resulting wire bytes.
#[cfg(test)]
pub(crate) fn sign_and_decode(
    tx: &crate::transaction::Transaction,
) -> crate::transaction::Transaction {
    use crate::crypto::PrivateKey;
    use crate::transaction::Transaction;

    let mut tx = tx.clone();
    let bytes = tx.sign_single(&PrivateKey::generate()).unwrap();
    Transaction::decode(&bytes).unwrap()
}

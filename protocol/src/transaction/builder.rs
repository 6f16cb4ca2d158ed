//! Transaction construction via the builder pattern.
//!
//! [`TxBuilder`] collects the common fields. Choosing a payload variant
//! (`.send_coin()`, `.delegate()`, ...) turns it into a [`TxDataBuilder`]
//! for that variant, whose setters fill in the payload. `.build()` then
//! yields an unsigned [`Transaction`].
//!
//! The builder does not sign; that happens in [`super::signing`]. This
//! keeps construction testable without key material.

use num_bigint::BigUint;
use tracing::debug;

use super::data::{
    BuyCoin, CreateCoin, CreateMultisigAddress, DeclareCandidacy, Delegate, EditCandidate,
    Multisend, RedeemCheck, SellAllCoins, SellCoin, SendCoin, SetCandidateOffline,
    SetCandidateOnline, TxData, Unbond,
};
use super::envelope::{Transaction, TxHeader};
use crate::config::ChainId;

// ---------------------------------------------------------------------------
// TxBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for the common fields of a transaction.
///
/// # Usage
///
/// ```rust
/// use minter_tx::config::ChainId;
/// use minter_tx::identity::Address;
/// use minter_tx::transaction::TxBuilder;
///
/// let tx = TxBuilder::new()
///     .nonce(1u32)
///     .chain_id(ChainId::Testnet)
///     .gas_price(1u32)
///     .gas_coin("MNT")
///     .send_coin()
///     .coin("MNT")
///     .to(Address::zero())
///     .value(&"10".parse().unwrap())
///     .build();
/// assert!(!tx.is_signed());
/// ```
///
/// Defaults: nonce 0, mainnet, gas price 1, empty gas coin, empty payload
/// and service data.
#[derive(Debug, Clone, Default)]
pub struct TxBuilder {
    header: TxHeader,
}

impl TxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender's sequence number.
    pub fn nonce(mut self, nonce: impl Into<BigUint>) -> Self {
        self.header.nonce = nonce.into();
        self
    }

    pub fn chain_id(mut self, chain_id: ChainId) -> Self {
        self.header.chain_id = chain_id;
        self
    }

    /// Sets the gas price multiplier.
    pub fn gas_price(mut self, gas_price: impl Into<BigUint>) -> Self {
        self.header.gas_price = gas_price.into();
        self
    }

    /// Sets the coin the fee is paid in.
    pub fn gas_coin(mut self, coin: impl Into<String>) -> Self {
        self.header.gas_coin = coin.into();
        self
    }

    /// Replaces the free-form payload.
    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.header.payload = payload.into();
        self
    }

    /// Copies `bytes` over the start of the current payload.
    ///
    /// Only the first `min(bytes.len(), current_len)` bytes are written. The
    /// payload keeps its length and any bytes past the copied prefix.
    pub fn overwrite_payload(mut self, bytes: &[u8]) -> Self {
        overwrite_prefix(&mut self.header.payload, bytes);
        self
    }

    /// Replaces the service data.
    pub fn service_data(mut self, service_data: impl Into<Vec<u8>>) -> Self {
        self.header.service_data = service_data.into();
        self
    }

    /// Copies `bytes` over the start of the current service data, like
    /// [`overwrite_payload`](Self::overwrite_payload).
    pub fn overwrite_service_data(mut self, bytes: &[u8]) -> Self {
        overwrite_prefix(&mut self.header.service_data, bytes);
        self
    }

    fn with_data<D: TxData>(self) -> TxDataBuilder<D> {
        TxDataBuilder {
            header: self.header,
            data: D::default(),
        }
    }

    pub fn send_coin(self) -> TxDataBuilder<SendCoin> {
        self.with_data()
    }

    pub fn sell_coin(self) -> TxDataBuilder<SellCoin> {
        self.with_data()
    }

    pub fn sell_all_coins(self) -> TxDataBuilder<SellAllCoins> {
        self.with_data()
    }

    pub fn buy_coin(self) -> TxDataBuilder<BuyCoin> {
        self.with_data()
    }

    pub fn create_coin(self) -> TxDataBuilder<CreateCoin> {
        self.with_data()
    }

    pub fn declare_candidacy(self) -> TxDataBuilder<DeclareCandidacy> {
        self.with_data()
    }

    pub fn delegate(self) -> TxDataBuilder<Delegate> {
        self.with_data()
    }

    pub fn unbond(self) -> TxDataBuilder<Unbond> {
        self.with_data()
    }

    pub fn redeem_check(self) -> TxDataBuilder<RedeemCheck> {
        self.with_data()
    }

    pub fn set_candidate_on(self) -> TxDataBuilder<SetCandidateOnline> {
        self.with_data()
    }

    pub fn set_candidate_off(self) -> TxDataBuilder<SetCandidateOffline> {
        self.with_data()
    }

    pub fn create_multisig_address(self) -> TxDataBuilder<CreateMultisigAddress> {
        self.with_data()
    }

    pub fn multisend(self) -> TxDataBuilder<Multisend> {
        self.with_data()
    }

    pub fn edit_candidate(self) -> TxDataBuilder<EditCandidate> {
        self.with_data()
    }
}

fn overwrite_prefix(slot: &mut [u8], bytes: &[u8]) {
    let n = slot.len().min(bytes.len());
    slot[..n].copy_from_slice(&bytes[..n]);
}

// ---------------------------------------------------------------------------
// TxDataBuilder
// ---------------------------------------------------------------------------

/// Builder for the payload of variant `D`.
///
/// The setters for each variant live next to the variant, in
/// [`super::data`].
#[derive(Debug, Clone)]
pub struct TxDataBuilder<D: TxData> {
    header: TxHeader,
    pub(crate) data: D,
}

impl<D: TxData> TxDataBuilder<D> {
    /// The payload as configured so far.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Consumes the builder and produces an unsigned [`Transaction`].
    pub fn build(self) -> Transaction {
        debug!(
            tx_type = %D::TX_TYPE,
            chain_id = %self.header.chain_id,
            nonce = %self.header.nonce,
            "transaction built"
        );
        Transaction::new(self.header, self.data.into())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Address;
    use crate::transaction::types::TxType;

    fn sample_tx() -> Transaction {
        TxBuilder::new()
            .nonce(1u32)
            .chain_id(ChainId::Testnet)
            .gas_coin("MNT")
            .send_coin()
            .coin("MNT")
            .to(Address::zero())
            .value(&"1".parse().unwrap())
            .build()
    }

    #[test]
    fn builder_is_deterministic() {
        assert_eq!(sample_tx().encode(), sample_tx().encode());
    }

    #[test]
    fn defaults() {
        let tx = TxBuilder::new().send_coin().build();
        assert_eq!(tx.nonce(), &BigUint::from(0u32));
        assert_eq!(tx.chain_id(), ChainId::Mainnet);
        assert_eq!(tx.gas_price(), &BigUint::from(1u32));
        assert_eq!(tx.gas_coin(), "");
        assert!(tx.payload().is_empty());
        assert!(tx.service_data().is_empty());
        assert!(!tx.is_signed());
    }

    #[test]
    fn type_code_follows_variant() {
        let tx = TxBuilder::new().edit_candidate().build();
        assert_eq!(tx.tx_type(), TxType::EditCandidate);
        assert_eq!(tx.data().type_code(), 0x0E);
    }

    #[test]
    fn different_nonce_different_bytes() {
        let other = TxBuilder::new()
            .nonce(2u32)
            .chain_id(ChainId::Testnet)
            .gas_coin("MNT")
            .send_coin()
            .coin("MNT")
            .to(Address::zero())
            .value(&"1".parse().unwrap())
            .build();
        assert_ne!(sample_tx().encode(), other.encode());
    }

    #[test]
    fn payload_replacement_discards_old_content() {
        let tx = TxBuilder::new()
            .payload(b"a long memo".to_vec())
            .payload(b"hi".to_vec())
            .send_coin()
            .build();
        assert_eq!(tx.payload(), b"hi");
    }

    #[test]
    fn payload_overwrite_keeps_tail() {
        let tx = TxBuilder::new()
            .payload(b"abcdef".to_vec())
            .overwrite_payload(b"XY")
            .send_coin()
            .build();
        assert_eq!(tx.payload(), b"XYcdef");
    }

    #[test]
    fn payload_overwrite_never_grows() {
        let tx = TxBuilder::new()
            .payload(b"ab".to_vec())
            .overwrite_payload(b"WXYZ")
            .service_data(Vec::new())
            .overwrite_service_data(b"ignored")
            .send_coin()
            .build();
        assert_eq!(tx.payload(), b"WX");
        assert!(tx.service_data().is_empty());
    }

    #[test]
    fn data_builder_exposes_payload() {
        let builder = TxBuilder::new().redeem_check().check(vec![1, 2, 3]);
        assert_eq!(builder.data().check(), &[1, 2, 3]);
    }
}

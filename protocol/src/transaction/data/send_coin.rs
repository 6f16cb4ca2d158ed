//! Send coin: one coin, one recipient.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::{append_coin, append_uint, expect_fields, read_address, read_coin, read_uint};
use super::{TxData, TxPayload};
use crate::codec::decimal::BigDec18;
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::codec::value::{humanize_value, normalize_value};
use crate::error::Result;
use crate::identity::Address;
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::TxType;

/// Wire fields: `[coin, to, value]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendCoin {
    coin: String,
    to: Address,
    value: BigUint,
}

impl SendCoin {
    pub fn coin(&self) -> &str {
        &self.coin
    }

    pub fn to(&self) -> Address {
        self.to
    }

    /// Amount sent.
    pub fn value(&self) -> BigDec18 {
        humanize_value(&self.value)
    }
}

impl TxData for SendCoin {
    const TX_TYPE: TxType = TxType::SendCoin;

    fn encode_fields(&self, out: &mut RlpStream) {
        append_coin(out, &self.coin);
        out.append_bytes(self.to.as_bytes());
        append_uint(out, &self.value);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [coin, to, value] = expect_fields::<3>(fields, Self::TX_TYPE)?;
        Ok(Self {
            coin: read_coin(coin, "coin")?,
            to: read_address(to, "to")?,
            value: read_uint(value)?,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::SendCoin(data) => Some(data),
            _ => None,
        }
    }
}

impl From<SendCoin> for TxPayload {
    fn from(data: SendCoin) -> Self {
        TxPayload::SendCoin(data)
    }
}

impl TxDataBuilder<SendCoin> {
    /// Coin symbol, at most 10 bytes; longer symbols are truncated on encode.
    pub fn coin(mut self, coin: impl Into<String>) -> Self {
        self.data.coin = coin.into();
        self
    }

    pub fn to(mut self, to: Address) -> Self {
        self.data.to = to;
        self
    }

    pub fn value(mut self, value: &BigDec18) -> Self {
        self.data.value = normalize_value(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TxBuilder;

    #[test]
    fn encodes_fields_in_wire_order() {
        let tx = TxBuilder::new()
            .send_coin()
            .coin("MNT")
            .to(Address::zero())
            .value(&"10".parse().unwrap())
            .build();
        let data = tx.data_as::<SendCoin>().unwrap();
        assert_eq!(
            hex::encode(data.encode()),
            "e98a4d4e5400000000000000940000000000000000000000000000000000000000888ac7230489e80000"
        );
    }

    #[test]
    fn decode_restores_fields() {
        let to: Address = "Mxb445feaf3eb747ac52426b054aa42b0b3d913e1f".parse().unwrap();
        let tx = TxBuilder::new()
            .send_coin()
            .coin("BIP")
            .to(to)
            .value(&"1.5".parse().unwrap())
            .build();
        let encoded = tx.data_as::<SendCoin>().unwrap().encode();

        let item = crate::codec::rlp::decode_exact(&encoded).unwrap();
        let decoded = SendCoin::decode_fields(item.as_list().unwrap()).unwrap();
        assert_eq!(decoded.coin(), "BIP");
        assert_eq!(decoded.to(), to);
        assert_eq!(decoded.value().to_string_short(1), "1.5");
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let fields = [RlpItem::String(b"MNT"), RlpItem::String(&[])];
        assert!(SendCoin::decode_fields(&fields).is_err());
    }

    #[test]
    fn gas_and_type() {
        let data = SendCoin::default();
        assert_eq!(data.type_code(), 0x01);
        assert_eq!(data.gas(), 10);
    }
}

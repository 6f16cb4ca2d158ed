//! Multisend: several coin transfers in one transaction.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::{append_coin, append_uint, expect_fields, read_address, read_coin, read_uint};
use super::{TxData, TxPayload};
use crate::codec::decimal::BigDec18;
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::codec::value::{humanize_value, normalize_value};
use crate::error::{Result, TxError};
use crate::identity::Address;
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::{multisend_gas, TxType};

/// One transfer of a multisend: `[coin, to, value]`, the same layout as a
/// send-coin payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisendItem {
    coin: String,
    to: Address,
    value: BigUint,
}

impl MultisendItem {
    pub fn new(coin: impl Into<String>, to: Address, value: &BigDec18) -> Self {
        Self {
            coin: coin.into(),
            to,
            value: normalize_value(value),
        }
    }

    pub fn coin(&self) -> &str {
        &self.coin
    }

    pub fn to(&self) -> Address {
        self.to
    }

    pub fn value(&self) -> BigDec18 {
        humanize_value(&self.value)
    }

    fn encode_into(&self, out: &mut RlpStream) {
        let mut item = RlpStream::new();
        append_coin(&mut item, &self.coin);
        item.append_bytes(self.to.as_bytes());
        append_uint(&mut item, &self.value);
        out.append_list(&item);
    }

    fn decode(item: &RlpItem<'_>) -> Result<Self> {
        let fields = item.as_list()?;
        let [coin, to, value]: &[RlpItem<'_>; 3] = fields.try_into().map_err(|_| {
            TxError::MalformedEncoding(format!(
                "multisend item must have 3 fields, got {}",
                fields.len()
            ))
        })?;
        Ok(Self {
            coin: read_coin(coin, "coin")?,
            to: read_address(to, "to")?,
            value: read_uint(value)?,
        })
    }
}

/// Wire fields: `[[item, ...]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multisend {
    items: Vec<MultisendItem>,
}

impl Multisend {
    pub fn items(&self) -> &[MultisendItem] {
        &self.items
    }
}

impl TxData for Multisend {
    const TX_TYPE: TxType = TxType::Multisend;

    fn encode_fields(&self, out: &mut RlpStream) {
        let mut list = RlpStream::new();
        for item in &self.items {
            item.encode_into(&mut list);
        }
        out.append_list(&list);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [list] = expect_fields::<1>(fields, Self::TX_TYPE)?;
        let items = list
            .as_list()?
            .iter()
            .map(MultisendItem::decode)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::Multisend(data) => Some(data),
            _ => None,
        }
    }

    fn gas(&self) -> u64 {
        multisend_gas(self.items.len())
    }
}

impl From<Multisend> for TxPayload {
    fn from(data: Multisend) -> Self {
        TxPayload::Multisend(data)
    }
}

impl TxDataBuilder<Multisend> {
    /// Appends one transfer.
    pub fn add_item(mut self, coin: impl Into<String>, to: Address, value: &BigDec18) -> Self {
        self.data.items.push(MultisendItem::new(coin, to, value));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TxBuilder;
    use crate::transaction::data::sign_and_decode;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn items_roundtrip_in_order() {
        let tx = TxBuilder::new()
            .multisend()
            .add_item("MNT", addr(1), &"1".parse().unwrap())
            .add_item("TEST", addr(2), &"2.5".parse().unwrap())
            .add_item("MNT", addr(3), &"0.000000000000000001".parse().unwrap())
            .build();

        let decoded = sign_and_decode(&tx);
        let data = decoded.data_as::<Multisend>().unwrap();
        assert_eq!(data.items().len(), 3);
        assert_eq!(data.items()[1].coin(), "TEST");
        assert_eq!(data.items()[1].to(), addr(2));
        assert_eq!(data.items()[1].value(), "2.5".parse().unwrap());
        assert_eq!(data.items()[2].value().base_units(), &BigUint::from(1u32));
    }

    #[test]
    fn item_matches_send_coin_layout() {
        let tx = TxBuilder::new()
            .multisend()
            .add_item("MNT", Address::zero(), &"10".parse().unwrap())
            .build();
        let encoded = tx.data_as::<Multisend>().unwrap().encode();
        // [[send-coin fields]]: two extra list headers around the send-coin body.
        assert_eq!(
            hex::encode(&encoded),
            "ebeae98a4d4e5400000000000000940000000000000000000000000000000000000000888ac7230489e80000"
        );
    }

    #[test]
    fn gas_grows_with_recipients() {
        let one = TxBuilder::new()
            .multisend()
            .add_item("MNT", addr(1), &BigDec18::from(1))
            .build();
        let four = TxBuilder::new()
            .multisend()
            .add_item("MNT", addr(1), &BigDec18::from(1))
            .add_item("MNT", addr(2), &BigDec18::from(1))
            .add_item("MNT", addr(3), &BigDec18::from(1))
            .add_item("MNT", addr(4), &BigDec18::from(1))
            .build();
        assert_eq!(one.data().gas(), 10);
        assert_eq!(four.data().gas(), 25);
    }

    #[test]
    fn short_item_is_malformed() {
        let mut item = RlpStream::new();
        item.append_bytes(b"MNT");
        let mut list = RlpStream::new();
        list.append_list(&item);
        let mut fields = RlpStream::new();
        fields.append_list(&list);
        let encoded = fields.out();
        let decoded = crate::codec::rlp::decode_exact(&encoded).unwrap();
        assert!(matches!(
            Multisend::decode_fields(decoded.as_list().unwrap()),
            Err(TxError::MalformedEncoding(_))
        ));
    }
}

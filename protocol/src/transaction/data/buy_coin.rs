//! Buy coin: acquire a fixed amount of one coin, paying with another.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::{append_coin, append_uint, expect_fields, read_coin, read_uint};
use super::{TxData, TxPayload};
use crate::codec::decimal::BigDec18;
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::codec::value::{humanize_value, normalize_value};
use crate::error::Result;
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::TxType;

/// Wire fields: `[coin_to_buy, value_to_buy, coin_to_sell, max_value_to_sell]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyCoin {
    coin_to_buy: String,
    value_to_buy: BigUint,
    coin_to_sell: String,
    max_value_to_sell: BigUint,
}

impl BuyCoin {
    pub fn coin_to_buy(&self) -> &str {
        &self.coin_to_buy
    }

    pub fn value_to_buy(&self) -> BigDec18 {
        humanize_value(&self.value_to_buy)
    }

    pub fn coin_to_sell(&self) -> &str {
        &self.coin_to_sell
    }

    /// Upper bound on what the purchase may cost.
    pub fn max_value_to_sell(&self) -> BigDec18 {
        humanize_value(&self.max_value_to_sell)
    }
}

impl TxData for BuyCoin {
    const TX_TYPE: TxType = TxType::BuyCoin;

    fn encode_fields(&self, out: &mut RlpStream) {
        append_coin(out, &self.coin_to_buy);
        append_uint(out, &self.value_to_buy);
        append_coin(out, &self.coin_to_sell);
        append_uint(out, &self.max_value_to_sell);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [coin_to_buy, value_to_buy, coin_to_sell, max_value_to_sell] =
            expect_fields::<4>(fields, Self::TX_TYPE)?;
        Ok(Self {
            coin_to_buy: read_coin(coin_to_buy, "coin_to_buy")?,
            value_to_buy: read_uint(value_to_buy)?,
            coin_to_sell: read_coin(coin_to_sell, "coin_to_sell")?,
            max_value_to_sell: read_uint(max_value_to_sell)?,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::BuyCoin(data) => Some(data),
            _ => None,
        }
    }
}

impl From<BuyCoin> for TxPayload {
    fn from(data: BuyCoin) -> Self {
        TxPayload::BuyCoin(data)
    }
}

impl TxDataBuilder<BuyCoin> {
    pub fn coin_to_buy(mut self, coin: impl Into<String>) -> Self {
        self.data.coin_to_buy = coin.into();
        self
    }

    pub fn value_to_buy(mut self, value: &BigDec18) -> Self {
        self.data.value_to_buy = normalize_value(value);
        self
    }

    pub fn coin_to_sell(mut self, coin: impl Into<String>) -> Self {
        self.data.coin_to_sell = coin.into();
        self
    }

    pub fn max_value_to_sell(mut self, value: &BigDec18) -> Self {
        self.data.max_value_to_sell = normalize_value(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TxBuilder;
    use crate::transaction::data::sign_and_decode;

    #[test]
    fn roundtrip_through_transaction() {
        let tx = TxBuilder::new()
            .buy_coin()
            .coin_to_buy("TEST")
            .value_to_buy(&"1".parse().unwrap())
            .coin_to_sell("MNT")
            .max_value_to_sell(&"1000000".parse().unwrap())
            .build();

        let decoded = sign_and_decode(&tx);
        let data = decoded.data_as::<BuyCoin>().unwrap();
        assert_eq!(data.coin_to_buy(), "TEST");
        assert_eq!(data.value_to_buy(), BigDec18::from(1));
        assert_eq!(data.coin_to_sell(), "MNT");
        assert_eq!(data.max_value_to_sell(), BigDec18::from(1_000_000));
    }

    #[test]
    fn field_order_puts_purchase_first() {
        let tx = TxBuilder::new()
            .buy_coin()
            .coin_to_buy("AAA")
            .coin_to_sell("BBB")
            .build();
        let encoded = tx.data_as::<BuyCoin>().unwrap().encode();
        let item = crate::codec::rlp::decode_exact(&encoded).unwrap();
        let fields = item.as_list().unwrap();
        assert_eq!(&fields[0].as_bytes().unwrap()[..3], b"AAA");
        assert_eq!(&fields[2].as_bytes().unwrap()[..3], b"BBB");
    }
}

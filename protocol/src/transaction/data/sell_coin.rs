//! Sell coin: exchange a fixed amount of one coin for another.

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

/// Wire fields: `[coin_to_sell, value_to_sell, coin_to_buy, min_value_to_buy]`.
///
/// The transaction fails on chain if the exchange would yield less than
/// `min_value_to_buy`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellCoin {
    coin_to_sell: String,
    value_to_sell: BigUint,
    coin_to_buy: String,
    min_value_to_buy: BigUint,
}

impl SellCoin {
    pub fn coin_to_sell(&self) -> &str {
        &self.coin_to_sell
    }

    pub fn value_to_sell(&self) -> BigDec18 {
        humanize_value(&self.value_to_sell)
    }

    pub fn coin_to_buy(&self) -> &str {
        &self.coin_to_buy
    }

    pub fn min_value_to_buy(&self) -> BigDec18 {
        humanize_value(&self.min_value_to_buy)
    }
}

impl TxData for SellCoin {
    const TX_TYPE: TxType = TxType::SellCoin;

    fn encode_fields(&self, out: &mut RlpStream) {
        append_coin(out, &self.coin_to_sell);
        append_uint(out, &self.value_to_sell);
        append_coin(out, &self.coin_to_buy);
        append_uint(out, &self.min_value_to_buy);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [coin_to_sell, value_to_sell, coin_to_buy, min_value_to_buy] =
            expect_fields::<4>(fields, Self::TX_TYPE)?;
        Ok(Self {
            coin_to_sell: read_coin(coin_to_sell, "coin_to_sell")?,
            value_to_sell: read_uint(value_to_sell)?,
            coin_to_buy: read_coin(coin_to_buy, "coin_to_buy")?,
            min_value_to_buy: read_uint(min_value_to_buy)?,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::SellCoin(data) => Some(data),
            _ => None,
        }
    }
}

impl From<SellCoin> for TxPayload {
    fn from(data: SellCoin) -> Self {
        TxPayload::SellCoin(data)
    }
}

impl TxDataBuilder<SellCoin> {
    pub fn coin_to_sell(mut self, coin: impl Into<String>) -> Self {
        self.data.coin_to_sell = coin.into();
        self
    }

    pub fn value_to_sell(mut self, value: &BigDec18) -> Self {
        self.data.value_to_sell = normalize_value(value);
        self
    }

    pub fn coin_to_buy(mut self, coin: impl Into<String>) -> Self {
        self.data.coin_to_buy = coin.into();
        self
    }

    pub fn min_value_to_buy(mut self, value: &BigDec18) -> Self {
        self.data.min_value_to_buy = normalize_value(value);
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
            .nonce(7u32)
            .gas_coin("MNT")
            .sell_coin()
            .coin_to_sell("MNT")
            .value_to_sell(&"100".parse().unwrap())
            .coin_to_buy("CUSTOM")
            .min_value_to_buy(&"0.001".parse().unwrap())
            .build();

        let decoded = sign_and_decode(&tx);
        let data = decoded.data_as::<SellCoin>().unwrap();
        assert_eq!(data.coin_to_sell(), "MNT");
        assert_eq!(data.value_to_sell(), "100".parse().unwrap());
        assert_eq!(data.coin_to_buy(), "CUSTOM");
        assert_eq!(data.min_value_to_buy(), "0.001".parse().unwrap());
    }

    #[test]
    fn zero_minimum_encodes_empty() {
        let tx = TxBuilder::new()
            .sell_coin()
            .coin_to_sell("A")
            .value_to_sell(&BigDec18::from(1))
            .coin_to_buy("B")
            .build();
        let encoded = tx.data_as::<SellCoin>().unwrap().encode();
        assert_eq!(encoded.last(), Some(&0x80));
    }

    #[test]
    fn gas_and_type() {
        assert_eq!(SellCoin::default().type_code(), 0x02);
        assert_eq!(SellCoin::default().gas(), 100);
    }
}

//! Sell all coins: exchange the whole balance of one coin for another.

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

/// Wire fields: `[coin_to_sell, coin_to_buy, min_value_to_buy]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellAllCoins {
    coin_to_sell: String,
    coin_to_buy: String,
    min_value_to_buy: BigUint,
}

impl SellAllCoins {
    pub fn coin_to_sell(&self) -> &str {
        &self.coin_to_sell
    }

    pub fn coin_to_buy(&self) -> &str {
        &self.coin_to_buy
    }

    pub fn min_value_to_buy(&self) -> BigDec18 {
        humanize_value(&self.min_value_to_buy)
    }
}

impl TxData for SellAllCoins {
    const TX_TYPE: TxType = TxType::SellAllCoins;

    fn encode_fields(&self, out: &mut RlpStream) {
        append_coin(out, &self.coin_to_sell);
        append_coin(out, &self.coin_to_buy);
        append_uint(out, &self.min_value_to_buy);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [coin_to_sell, coin_to_buy, min_value_to_buy] =
            expect_fields::<3>(fields, Self::TX_TYPE)?;
        Ok(Self {
            coin_to_sell: read_coin(coin_to_sell, "coin_to_sell")?,
            coin_to_buy: read_coin(coin_to_buy, "coin_to_buy")?,
            min_value_to_buy: read_uint(min_value_to_buy)?,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::SellAllCoins(data) => Some(data),
            _ => None,
        }
    }
}

impl From<SellAllCoins> for TxPayload {
    fn from(data: SellAllCoins) -> Self {
        TxPayload::SellAllCoins(data)
    }
}

impl TxDataBuilder<SellAllCoins> {
    pub fn coin_to_sell(mut self, coin: impl Into<String>) -> Self {
        self.data.coin_to_sell = coin.into();
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

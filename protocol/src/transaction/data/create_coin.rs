//! Create coin: issue a new coin backed by a base-coin reserve.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::{append_coin, append_uint, expect_fields, read_coin, read_small, read_uint};
use super::{TxData, TxPayload};
use crate::codec::decimal::BigDec18;
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::codec::value::{humanize_value, normalize_value};
use crate::error::Result;
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::TxType;

/// Wire fields: `[name, symbol, initial_amount, crr, initial_reserve]`.
///
/// `name` is free text of any length; `symbol` is the padded 10-byte ticker.
/// `crr` is the constant reserve ratio in percent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCoin {
    name: String,
    symbol: String,
    initial_amount: BigUint,
    crr: u8,
    initial_reserve: BigUint,
}

impl CreateCoin {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn initial_amount(&self) -> BigDec18 {
        humanize_value(&self.initial_amount)
    }

    pub fn crr(&self) -> u8 {
        self.crr
    }

    pub fn initial_reserve(&self) -> BigDec18 {
        humanize_value(&self.initial_reserve)
    }
}

impl TxData for CreateCoin {
    const TX_TYPE: TxType = TxType::CreateCoin;

    fn encode_fields(&self, out: &mut RlpStream) {
        out.append_bytes(self.name.as_bytes());
        append_coin(out, &self.symbol);
        append_uint(out, &self.initial_amount);
        out.append_u64(u64::from(self.crr));
        append_uint(out, &self.initial_reserve);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [name, symbol, initial_amount, crr, initial_reserve] =
            expect_fields::<5>(fields, Self::TX_TYPE)?;
        Ok(Self {
            name: String::from_utf8_lossy(name.as_bytes()?).into_owned(),
            symbol: read_coin(symbol, "symbol")?,
            initial_amount: read_uint(initial_amount)?,
            crr: read_small(crr, "crr", 1)? as u8,
            initial_reserve: read_uint(initial_reserve)?,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::CreateCoin(data) => Some(data),
            _ => None,
        }
    }
}

impl From<CreateCoin> for TxPayload {
    fn from(data: CreateCoin) -> Self {
        TxPayload::CreateCoin(data)
    }
}

impl TxDataBuilder<CreateCoin> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.data.name = name.into();
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.data.symbol = symbol.into();
        self
    }

    pub fn initial_amount(mut self, value: &BigDec18) -> Self {
        self.data.initial_amount = normalize_value(value);
        self
    }

    pub fn crr(mut self, crr: u8) -> Self {
        self.data.crr = crr;
        self
    }

    pub fn initial_reserve(mut self, value: &BigDec18) -> Self {
        self.data.initial_reserve = normalize_value(value);
        self
    }
}

//! Declare candidacy: register a validator candidate with an initial stake.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::{
    append_coin, append_uint, expect_fields, read_address, read_coin, read_public_key, read_small,
    read_uint,
};
use super::{TxData, TxPayload};
use crate::codec::decimal::BigDec18;
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::codec::value::{humanize_value, normalize_value};
use crate::error::Result;
use crate::identity::{Address, PublicKey};
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::TxType;

/// Wire fields: `[address, pub_key, commission, coin, stake]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclareCandidacy {
    address: Address,
    pub_key: PublicKey,
    commission: u32,
    coin: String,
    stake: BigUint,
}

impl DeclareCandidacy {
    /// Reward address of the candidate.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn pub_key(&self) -> PublicKey {
        self.pub_key
    }

    /// Validator commission, percent.
    pub fn commission(&self) -> u32 {
        self.commission
    }

    pub fn coin(&self) -> &str {
        &self.coin
    }

    pub fn stake(&self) -> BigDec18 {
        humanize_value(&self.stake)
    }
}

impl TxData for DeclareCandidacy {
    const TX_TYPE: TxType = TxType::DeclareCandidacy;

    fn encode_fields(&self, out: &mut RlpStream) {
        out.append_bytes(self.address.as_bytes());
        out.append_bytes(self.pub_key.as_bytes());
        out.append_u64(u64::from(self.commission));
        append_coin(out, &self.coin);
        append_uint(out, &self.stake);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [address, pub_key, commission, coin, stake] =
            expect_fields::<5>(fields, Self::TX_TYPE)?;
        Ok(Self {
            address: read_address(address, "address")?,
            pub_key: read_public_key(pub_key, "pub_key")?,
            commission: read_small(commission, "commission", 4)? as u32,
            coin: read_coin(coin, "coin")?,
            stake: read_uint(stake)?,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::DeclareCandidacy(data) => Some(data),
            _ => None,
        }
    }
}

impl From<DeclareCandidacy> for TxPayload {
    fn from(data: DeclareCandidacy) -> Self {
        TxPayload::DeclareCandidacy(data)
    }
}

impl TxDataBuilder<DeclareCandidacy> {
    pub fn address(mut self, address: Address) -> Self {
        self.data.address = address;
        self
    }

    pub fn pub_key(mut self, pub_key: PublicKey) -> Self {
        self.data.pub_key = pub_key;
        self
    }

    pub fn commission(mut self, commission: u32) -> Self {
        self.data.commission = commission;
        self
    }

    pub fn coin(mut self, coin: impl Into<String>) -> Self {
        self.data.coin = coin.into();
        self
    }

    pub fn stake(mut self, value: &BigDec18) -> Self {
        self.data.stake = normalize_value(value);
        self
    }
}

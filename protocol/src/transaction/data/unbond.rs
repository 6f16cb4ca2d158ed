//! Unbond: withdraw stake from a candidate.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::{append_coin, append_uint, expect_fields, read_coin, read_public_key, read_uint};
use super::{TxData, TxPayload};
use crate::codec::decimal::BigDec18;
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::codec::value::{humanize_value, normalize_value};
use crate::error::Result;
use crate::identity::PublicKey;
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::TxType;

/// Wire fields: `[pub_key, coin, value]`. Same layout as
/// [`Delegate`](super::Delegate), different type code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unbond {
    pub_key: PublicKey,
    coin: String,
    value: BigUint,
}

impl Unbond {
    pub fn pub_key(&self) -> PublicKey {
        self.pub_key
    }

    pub fn coin(&self) -> &str {
        &self.coin
    }

    pub fn value(&self) -> BigDec18 {
        humanize_value(&self.value)
    }
}

impl TxData for Unbond {
    const TX_TYPE: TxType = TxType::Unbond;

    fn encode_fields(&self, out: &mut RlpStream) {
        out.append_bytes(self.pub_key.as_bytes());
        append_coin(out, &self.coin);
        append_uint(out, &self.value);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [pub_key, coin, value] = expect_fields::<3>(fields, Self::TX_TYPE)?;
        Ok(Self {
            pub_key: read_public_key(pub_key, "pub_key")?,
            coin: read_coin(coin, "coin")?,
            value: read_uint(value)?,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::Unbond(data) => Some(data),
            _ => None,
        }
    }
}

impl From<Unbond> for TxPayload {
    fn from(data: Unbond) -> Self {
        TxPayload::Unbond(data)
    }
}

impl TxDataBuilder<Unbond> {
    pub fn pub_key(mut self, pub_key: PublicKey) -> Self {
        self.data.pub_key = pub_key;
        self
    }

    pub fn coin(mut self, coin: impl Into<String>) -> Self {
        self.data.coin = coin.into();
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
    use crate::transaction::data::Delegate;
    use crate::transaction::data::sign_and_decode;
    use crate::transaction::TxBuilder;

    #[test]
    fn same_fields_as_delegate_different_code() {
        let pub_key = PublicKey::from_bytes([0xab; 32]);
        let unbond = TxBuilder::new()
            .unbond()
            .pub_key(pub_key)
            .coin("MNT")
            .value(&BigDec18::from(3))
            .build();
        let delegate = TxBuilder::new()
            .delegate()
            .pub_key(pub_key)
            .coin("MNT")
            .value(&BigDec18::from(3))
            .build();

        assert_eq!(
            unbond.data_as::<Unbond>().unwrap().encode(),
            delegate.data_as::<Delegate>().unwrap().encode()
        );
        assert_ne!(unbond.encode(), delegate.encode());

        let decoded = sign_and_decode(&unbond);
        assert_eq!(decoded.tx_type().code(), 0x08);
        assert_eq!(decoded.data_as::<Unbond>().unwrap().value(), BigDec18::from(3));
    }
}

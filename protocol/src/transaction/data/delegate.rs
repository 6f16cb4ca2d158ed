//! Delegate: stake coins to a candidate.

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

/// Wire fields: `[pub_key, coin, value]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegate {
    pub_key: PublicKey,
    coin: String,
    value: BigUint,
}

impl Delegate {
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

impl TxData for Delegate {
    const TX_TYPE: TxType = TxType::Delegate;

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
            TxPayload::Delegate(data) => Some(data),
            _ => None,
        }
    }
}

impl From<Delegate> for TxPayload {
    fn from(data: Delegate) -> Self {
        TxPayload::Delegate(data)
    }
}

impl TxDataBuilder<Delegate> {
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
    use crate::transaction::TxBuilder;
    use crate::transaction::data::sign_and_decode;

    #[test]
    fn roundtrip_through_transaction() {
        let pub_key = PublicKey::from_bytes([0x0e; 32]);
        let tx = TxBuilder::new()
            .delegate()
            .pub_key(pub_key)
            .coin("MNT")
            .value(&"0.25".parse().unwrap())
            .build();

        let decoded = sign_and_decode(&tx);
        let data = decoded.data_as::<Delegate>().unwrap();
        assert_eq!(data.pub_key(), pub_key);
        assert_eq!(data.coin(), "MNT");
        assert_eq!(data.value(), "0.25".parse().unwrap());
        assert_eq!(decoded.gas(), 200);
    }

    #[test]
    fn short_public_key_is_malformed() {
        let mut fields = RlpStream::new();
        fields.append_bytes(&[1u8; 31]).append_bytes(b"MNT").append_u64(1);
        let encoded = fields.out();
        let item = crate::codec::rlp::decode_exact(&encoded).unwrap();
        assert!(Delegate::decode_fields(item.as_list().unwrap()).is_err());
    }
}

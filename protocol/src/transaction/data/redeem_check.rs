//! Redeem check: cash a check issued by another account.
//!
//! The check and its proof are opaque blobs here; producing and validating
//! them is the issuer's and the network's business.

use serde::{Deserialize, Serialize};

use super::{expect_fields, read_bytes};
use super::{TxData, TxPayload};
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::error::Result;
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::TxType;

/// Wire fields: `[check, proof]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemCheck {
    check: Vec<u8>,
    proof: Vec<u8>,
}

impl RedeemCheck {
    pub fn check(&self) -> &[u8] {
        &self.check
    }

    pub fn proof(&self) -> &[u8] {
        &self.proof
    }
}

impl TxData for RedeemCheck {
    const TX_TYPE: TxType = TxType::RedeemCheck;

    fn encode_fields(&self, out: &mut RlpStream) {
        out.append_bytes(&self.check);
        out.append_bytes(&self.proof);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [check, proof] = expect_fields::<2>(fields, Self::TX_TYPE)?;
        Ok(Self {
            check: read_bytes(check)?,
            proof: read_bytes(proof)?,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::RedeemCheck(data) => Some(data),
            _ => None,
        }
    }
}

impl From<RedeemCheck> for TxPayload {
    fn from(data: RedeemCheck) -> Self {
        TxPayload::RedeemCheck(data)
    }
}

impl TxDataBuilder<RedeemCheck> {
    pub fn check(mut self, check: impl Into<Vec<u8>>) -> Self {
        self.data.check = check.into();
        self
    }

    pub fn proof(mut self, proof: impl Into<Vec<u8>>) -> Self {
        self.data.proof = proof.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TxBuilder;
    use crate::transaction::data::sign_and_decode;

    #[test]
    fn blobs_survive_roundtrip() {
        let check: Vec<u8> = (0u8..=200).collect();
        let proof = vec![0x42u8; 65];
        let tx = TxBuilder::new()
            .redeem_check()
            .check(check.clone())
            .proof(proof.clone())
            .build();

        let decoded = sign_and_decode(&tx);
        let data = decoded.data_as::<RedeemCheck>().unwrap();
        assert_eq!(data.check(), check.as_slice());
        assert_eq!(data.proof(), proof.as_slice());
        assert_eq!(decoded.gas(), 30);
    }

    #[test]
    fn three_fields_are_rejected() {
        let fields = [
            RlpItem::String(b"a"),
            RlpItem::String(b"b"),
            RlpItem::String(b"c"),
        ];
        assert!(RedeemCheck::decode_fields(&fields).is_err());
    }
}

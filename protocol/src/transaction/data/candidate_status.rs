//! Switch a candidate on or off. Both variants carry only the candidate's
//! public key.

use serde::{Deserialize, Serialize};

use super::{expect_fields, read_public_key};
use super::{TxData, TxPayload};
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::error::Result;
use crate::identity::PublicKey;
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::TxType;

/// Wire fields: `[pub_key]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCandidateOnline {
    pub_key: PublicKey,
}

/// Wire fields: `[pub_key]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCandidateOffline {
    pub_key: PublicKey,
}

macro_rules! candidate_status {
    ($name:ident, $tx_type:ident) => {
        impl $name {
            pub fn pub_key(&self) -> PublicKey {
                self.pub_key
            }
        }

        impl TxData for $name {
            const TX_TYPE: TxType = TxType::$tx_type;

            fn encode_fields(&self, out: &mut RlpStream) {
                out.append_bytes(self.pub_key.as_bytes());
            }

            fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
                let [pub_key] = expect_fields::<1>(fields, Self::TX_TYPE)?;
                Ok(Self {
                    pub_key: read_public_key(pub_key, "pub_key")?,
                })
            }

            fn from_payload(payload: &TxPayload) -> Option<&Self> {
                match payload {
                    TxPayload::$tx_type(data) => Some(data),
                    _ => None,
                }
            }
        }

        impl From<$name> for TxPayload {
            fn from(data: $name) -> Self {
                TxPayload::$tx_type(data)
            }
        }

        impl TxDataBuilder<$name> {
            pub fn pub_key(mut self, pub_key: PublicKey) -> Self {
                self.data.pub_key = pub_key;
                self
            }
        }
    };
}

candidate_status!(SetCandidateOnline, SetCandidateOnline);
candidate_status!(SetCandidateOffline, SetCandidateOffline);

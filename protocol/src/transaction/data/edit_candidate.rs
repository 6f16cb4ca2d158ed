//! Edit candidate: change the reward and owner addresses of a candidate.

use serde::{Deserialize, Serialize};

use super::{expect_fields, read_address, read_public_key};
use super::{TxData, TxPayload};
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::error::Result;
use crate::identity::{Address, PublicKey};
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::TxType;

/// Wire fields: `[pub_key, reward_address, owner_address]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCandidate {
    pub_key: PublicKey,
    reward_address: Address,
    owner_address: Address,
}

impl EditCandidate {
    pub fn pub_key(&self) -> PublicKey {
        self.pub_key
    }

    pub fn reward_address(&self) -> Address {
        self.reward_address
    }

    pub fn owner_address(&self) -> Address {
        self.owner_address
    }
}

impl TxData for EditCandidate {
    const TX_TYPE: TxType = TxType::EditCandidate;

    fn encode_fields(&self, out: &mut RlpStream) {
        out.append_bytes(self.pub_key.as_bytes());
        out.append_bytes(self.reward_address.as_bytes());
        out.append_bytes(self.owner_address.as_bytes());
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [pub_key, reward_address, owner_address] = expect_fields::<3>(fields, Self::TX_TYPE)?;
        Ok(Self {
            pub_key: read_public_key(pub_key, "pub_key")?,
            reward_address: read_address(reward_address, "reward_address")?,
            owner_address: read_address(owner_address, "owner_address")?,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::EditCandidate(data) => Some(data),
            _ => None,
        }
    }
}

impl From<EditCandidate> for TxPayload {
    fn from(data: EditCandidate) -> Self {
        TxPayload::EditCandidate(data)
    }
}

impl TxDataBuilder<EditCandidate> {
    pub fn pub_key(mut self, pub_key: PublicKey) -> Self {
        self.data.pub_key = pub_key;
        self
    }

    pub fn reward_address(mut self, address: Address) -> Self {
        self.data.reward_address = address;
        self
    }

    pub fn owner_address(mut self, address: Address) -> Self {
        self.data.owner_address = address;
        self
    }
}

//! Create multisig address: register a weighted multisig account.
//!
//! The account address is not part of the payload. It is derived from the
//! creating account and the transaction nonce, see
//! [`CreateMultisigAddress::multisig_address`].

use serde::{Deserialize, Serialize};

use super::{expect_fields, read_address, read_small};
use super::{TxData, TxPayload};
use crate::codec::rlp::{RlpItem, RlpStream};
use crate::crypto::keccak256;
use crate::error::Result;
use crate::identity::Address;
use crate::transaction::builder::TxDataBuilder;
use crate::transaction::types::TxType;

/// Wire fields: `[threshold, [weight, ...], [address, ...]]`.
///
/// `weights[i]` belongs to `addresses[i]`. A set of signatures authorizes a
/// transaction once the weights of its signers add up to `threshold`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMultisigAddress {
    threshold: u8,
    weights: Vec<u8>,
    addresses: Vec<Address>,
}

impl CreateMultisigAddress {
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Address of the multisig account created by `owner` with a
    /// transaction at `nonce`: the last 20 bytes of
    /// `keccak256(rlp([owner, nonce]))`.
    pub fn multisig_address(owner: &Address, nonce: u64) -> Address {
        let mut stream = RlpStream::new();
        stream.append_bytes(owner.as_bytes()).append_u64(nonce);
        Address::from_hash(&keccak256(&stream.out()))
    }
}

impl TxData for CreateMultisigAddress {
    const TX_TYPE: TxType = TxType::CreateMultisig;

    fn encode_fields(&self, out: &mut RlpStream) {
        out.append_u64(u64::from(self.threshold));

        let mut weights = RlpStream::new();
        for weight in &self.weights {
            weights.append_u64(u64::from(*weight));
        }
        out.append_list(&weights);

        let mut addresses = RlpStream::new();
        for address in &self.addresses {
            addresses.append_bytes(address.as_bytes());
        }
        out.append_list(&addresses);
    }

    fn decode_fields(fields: &[RlpItem<'_>]) -> Result<Self> {
        let [threshold, weights, addresses] = expect_fields::<3>(fields, Self::TX_TYPE)?;
        let weights = weights
            .as_list()?
            .iter()
            .map(|w| read_small(w, "weight", 1).map(|w| w as u8))
            .collect::<Result<Vec<_>>>()?;
        let addresses = addresses
            .as_list()?
            .iter()
            .map(|a| read_address(a, "address"))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            threshold: read_small(threshold, "threshold", 1)? as u8,
            weights,
            addresses,
        })
    }

    fn from_payload(payload: &TxPayload) -> Option<&Self> {
        match payload {
            TxPayload::CreateMultisig(data) => Some(data),
            _ => None,
        }
    }
}

impl From<CreateMultisigAddress> for TxPayload {
    fn from(data: CreateMultisigAddress) -> Self {
        TxPayload::CreateMultisig(data)
    }
}

impl TxDataBuilder<CreateMultisigAddress> {
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.data.threshold = threshold;
        self
    }

    /// Appends one member with its weight.
    pub fn add_address(mut self, address: Address, weight: u8) -> Self {
        self.data.addresses.push(address);
        self.data.weights.push(weight);
        self
    }
}

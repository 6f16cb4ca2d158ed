//! # Protocol Configuration & Constants
//!
//! Every magic number the wire format depends on lives here. Changing any of
//! these breaks byte-for-byte compatibility with validators, so don't.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TxError};

// ---------------------------------------------------------------------------
// Network Identifiers
// ---------------------------------------------------------------------------

/// Chain identifier carried in every transaction envelope.
///
/// A transaction signed for one chain is rejected by validators of the
/// other, which is the whole point of putting it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ChainId {
    /// The production network.
    Mainnet = 1,
    /// The public test network.
    Testnet = 2,
}

impl ChainId {
    /// Returns the wire byte for this chain.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ChainId {
    type Error = TxError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            CHAIN_ID_MAINNET => Ok(ChainId::Mainnet),
            CHAIN_ID_TESTNET => Ok(ChainId::Testnet),
            other => Err(TxError::MalformedEncoding(format!(
                "unknown chain id {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(chain_name(*self))
    }
}

/// Wire value of [`ChainId::Mainnet`].
pub const CHAIN_ID_MAINNET: u8 = 1;

/// Wire value of [`ChainId::Testnet`].
pub const CHAIN_ID_TESTNET: u8 = 2;

/// Returns a friendly name for a chain, mainly for logging.
pub fn chain_name(chain_id: ChainId) -> &'static str {
    match chain_id {
        ChainId::Mainnet => "mainnet",
        ChainId::Testnet => "testnet",
    }
}

/// Base coin symbol of each network. Gas is paid in it unless the
/// transaction says otherwise.
pub fn base_coin(chain_id: ChainId) -> &'static str {
    match chain_id {
        ChainId::Mainnet => "BIP",
        ChainId::Testnet => "MNT",
    }
}

// ---------------------------------------------------------------------------
// Field Widths
// ---------------------------------------------------------------------------

/// Coin symbols are zero-padded (or truncated) to exactly this many bytes.
pub const COIN_SYMBOL_LENGTH: usize = 10;

/// Account and multisig address length in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Validator public key length in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// secp256k1 private key length in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length of each of the `r` and `s` signature components.
pub const SIGNATURE_COMPONENT_LENGTH: usize = 32;

/// Digest length of both keccak-256 and sha-256.
pub const HASH_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Text Prefixes
// ---------------------------------------------------------------------------

/// Prefix of the textual form of an [`Address`](crate::identity::Address).
pub const ADDRESS_PREFIX: &str = "Mx";

/// Prefix of the textual form of a [`PublicKey`](crate::identity::PublicKey).
pub const PUBLIC_KEY_PREFIX: &str = "Mp";

/// Prefix of a transaction hash.
pub const TX_HASH_PREFIX: &str = "Mt";

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Number of fractional digits in a display amount. One coin is
/// `10^DECIMALS` base units.
pub const DECIMALS: u32 = 18;

/// Recovery ids are shifted by this much before going on the wire.
pub const SIGNATURE_V_OFFSET: u8 = 27;

// ---------------------------------------------------------------------------
// Commission
// ---------------------------------------------------------------------------

/// One gas unit is worth this many base units at gas price 1
/// (0.001 of a coin).
pub const COMMISSION_MULTIPLIER: u64 = 1_000_000_000_000_000;

/// Gas charged per byte of free-form payload and service data.
pub const PAYLOAD_BYTE_GAS: u64 = 2;

/// Extra gas per multisend recipient beyond the first.
pub const MULTISEND_RECIPIENT_GAS: u64 = 5;

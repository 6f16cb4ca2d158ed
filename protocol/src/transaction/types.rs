//! Core type definitions for transactions: the type-code table and the
//! signature kinds.
//!
//! Both are wire discriminants. Their numeric values are part of the
//! protocol and must never be renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::MULTISEND_RECIPIENT_GAS;

// ---------------------------------------------------------------------------
// TxType
// ---------------------------------------------------------------------------

/// Discriminant selecting which payload variant a transaction carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum TxType {
    /// Transfer of one coin to one recipient.
    SendCoin = 0x01,
    /// Sell a fixed amount of one coin for another.
    SellCoin = 0x02,
    /// Sell the whole balance of one coin for another.
    SellAllCoins = 0x03,
    /// Buy a fixed amount of one coin with another.
    BuyCoin = 0x04,
    /// Issue a new coin backed by a reserve.
    CreateCoin = 0x05,
    /// Register a validator candidate.
    DeclareCandidacy = 0x06,
    /// Stake coins to a candidate.
    Delegate = 0x07,
    /// Withdraw stake from a candidate.
    Unbond = 0x08,
    /// Cash a check issued by another account.
    RedeemCheck = 0x09,
    /// Switch a candidate on.
    SetCandidateOnline = 0x0A,
    /// Switch a candidate off.
    SetCandidateOffline = 0x0B,
    /// Create a weighted multisig account.
    CreateMultisig = 0x0C,
    /// Transfer to many recipients in one transaction.
    Multisend = 0x0D,
    /// Change a candidate's reward and owner addresses.
    EditCandidate = 0x0E,
}

impl TxType {
    /// Every known type, in code order.
    pub const ALL: [TxType; 14] = [
        TxType::SendCoin,
        TxType::SellCoin,
        TxType::SellAllCoins,
        TxType::BuyCoin,
        TxType::CreateCoin,
        TxType::DeclareCandidacy,
        TxType::Delegate,
        TxType::Unbond,
        TxType::RedeemCheck,
        TxType::SetCandidateOnline,
        TxType::SetCandidateOffline,
        TxType::CreateMultisig,
        TxType::Multisend,
        TxType::EditCandidate,
    ];

    /// The 16-bit wire code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Looks a wire code up. `None` for codes with no variant.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Gas units charged for the payload alone, before payload bytes.
    ///
    /// Multisend adds [`MULTISEND_RECIPIENT_GAS`] per recipient beyond the
    /// first on top of this.
    pub fn base_gas(self) -> u64 {
        match self {
            Self::SendCoin => 10,
            Self::SellCoin | Self::SellAllCoins | Self::BuyCoin => 100,
            Self::CreateCoin => 1000,
            Self::DeclareCandidacy => 10_000,
            Self::Delegate | Self::Unbond => 200,
            Self::RedeemCheck => 30,
            Self::SetCandidateOnline | Self::SetCandidateOffline => 100,
            Self::CreateMultisig => 100,
            Self::Multisend => 10,
            Self::EditCandidate => 10_000,
        }
    }
}

/// Gas for a multisend with `recipients` entries.
pub fn multisend_gas(recipients: usize) -> u64 {
    let extra = recipients.saturating_sub(1) as u64;
    TxType::Multisend.base_gas() + extra * MULTISEND_RECIPIENT_GAS
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SendCoin => "SendCoin",
            Self::SellCoin => "SellCoin",
            Self::SellAllCoins => "SellAllCoins",
            Self::BuyCoin => "BuyCoin",
            Self::CreateCoin => "CreateCoin",
            Self::DeclareCandidacy => "DeclareCandidacy",
            Self::Delegate => "Delegate",
            Self::Unbond => "Unbond",
            Self::RedeemCheck => "RedeemCheck",
            Self::SetCandidateOnline => "SetCandidateOnline",
            Self::SetCandidateOffline => "SetCandidateOffline",
            Self::CreateMultisig => "CreateMultisig",
            Self::Multisend => "Multisend",
            Self::EditCandidate => "EditCandidate",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// SignatureType
// ---------------------------------------------------------------------------

/// How a transaction is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SignatureType {
    /// One key, one signature.
    Single = 1,
    /// A multisig account address plus an ordered list of signatures.
    Multi = 2,
}

impl SignatureType {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Single),
            2 => Some(Self::Multi),
            _ => None,
        }
    }
}

impl fmt::Display for SignatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multi => write!(f, "multi"),
        }
    }
}

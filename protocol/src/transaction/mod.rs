//! # Transaction Module
//!
//! Construction, signing, encoding and decoding of Minter transactions.
//!
//! ## Architecture
//!
//! ```text
//! types.rs    : type-code table and signature kinds
//! data/       : the fourteen payload variants and the decode registry
//! envelope.rs : Transaction: common fields, wire encode/decode, hashes
//! builder.rs  : fluent TxBuilder / TxDataBuilder
//! signing.rs  : single and multisig signature blocks
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build**: [`TxBuilder`] sets the common fields, a variant factory
//!    picks the payload, `.build()` yields an unsigned [`Transaction`].
//! 2. **Sign**: [`Transaction::sign_single`] or [`Transaction::sign_multi`]
//!    attaches the signature and returns the wire bytes.
//! 3. **Decode**: [`Transaction::decode`] parses wire bytes back into a
//!    signed [`Transaction`].

pub mod builder;
pub mod data;
pub mod envelope;
pub mod signing;
pub mod types;

pub use builder::{TxBuilder, TxDataBuilder};
pub use data::{
    decode_payload, BuyCoin, CreateCoin, CreateMultisigAddress, DeclareCandidacy, Delegate,
    EditCandidate, Multisend, MultisendItem, RedeemCheck, SellAllCoins, SellCoin, SendCoin,
    SetCandidateOffline, SetCandidateOnline, TxData, TxPayload, Unbond,
};
pub use envelope::Transaction;
pub use signing::SignatureData;
pub use types::{SignatureType, TxType};

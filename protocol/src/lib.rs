// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # minter-tx
//!
//! Build, sign, encode and decode transactions for the Minter network.
//!
//! A transaction is a fixed envelope (nonce, chain, gas price, gas coin,
//! free-form payload and service data) around exactly one of fourteen
//! payload variants, signed either by a single key or by the members of a
//! multisig account. Everything travels as RLP, and every encoded
//! transaction decodes back to the value it came from.
//!
//! ## Architecture
//!
//! - **codec**: RLP, scalar ⇄ byte conversions, the 18-digit amount type.
//! - **crypto**: keccak-256, SHA-256, secp256k1 keys and recoverable
//!   signatures.
//! - **identity**: `Mx` addresses and `Mp` validator public keys.
//! - **transaction**: the envelope, the payload variants, builder and
//!   signing.
//! - **config**: chain identifiers and every wire constant.
//! - **logging**: optional tracing subscriber setup.
//!
//! ## Example
//!
//! ```
//! use minter_tx::config::ChainId;
//! use minter_tx::crypto::PrivateKey;
//! use minter_tx::identity::Address;
//! use minter_tx::transaction::{SendCoin, Transaction, TxBuilder};
//!
//! let key = PrivateKey::from_hex(
//!     "df1f236d0396cc43147e44206c341a65573326e907d033690e31a21323c03a9f",
//! ).unwrap();
//!
//! let mut tx = TxBuilder::new()
//!     .nonce(1u32)
//!     .chain_id(ChainId::Testnet)
//!     .gas_price(1u32)
//!     .gas_coin("MNT")
//!     .send_coin()
//!     .coin("MNT")
//!     .to(Address::zero())
//!     .value(&"10".parse().unwrap())
//!     .build();
//! let bytes = tx.sign_single(&key).unwrap();
//!
//! let decoded = Transaction::decode(&bytes).unwrap();
//! let send = decoded.data_as::<SendCoin>().unwrap();
//! assert_eq!(send.coin(), "MNT");
//! assert_eq!(decoded.sender_address().unwrap(), key.address());
//! ```

pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod logging;
pub mod transaction;

pub use codec::BigDec18;
pub use error::{Result, TxError};
pub use transaction::{Transaction, TxBuilder};

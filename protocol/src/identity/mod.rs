//! # Identity Module
//!
//! Fixed-width identifiers that appear in transaction fields:
//!
//! - [`Address`]: 20-byte account address, `Mx...`.
//! - [`PublicKey`]: 32-byte validator key, `Mp...`.
//!
//! The two are structurally similar and deliberately distinct types; a
//! validator key can never be passed where an address is expected.

pub mod address;
pub mod public_key;

pub use address::Address;
pub use public_key::PublicKey;

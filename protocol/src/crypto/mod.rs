//! # Cryptographic Collaborators
//!
//! Thin, typed wrappers around audited implementations. The transaction core
//! only ever consumes these; nothing here is hand-rolled.
//!
//! - **keccak-256** (`tiny-keccak`): signing hashes and address derivation.
//! - **SHA-256** (`sha2`): transaction hashes.
//! - **secp256k1 ECDSA** (`k256`): recoverable, deterministic signatures.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{keccak256, sha256};
pub use keys::PrivateKey;
pub use signatures::{sign, HashSigner, RecoverableSignature};

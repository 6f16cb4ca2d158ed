//! # Hashing Utilities
//!
//! Two hash functions, each with exactly one job:
//!
//! - **keccak-256**: the network hash. Signing hashes, address derivation
//!   from public keys, multisig address derivation.
//! - **SHA-256**: transaction hashes (`Mt...`), the identifier explorers and
//!   validators report for a signed transaction.

use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

use crate::config::HASH_LENGTH;

/// Compute the keccak-256 hash of the input data.
///
/// This is the original Keccak submission (as used by Ethereum), not the
/// NIST SHA3-256 variant; the two differ in padding and give different
/// digests.
///
/// # Example
///
/// ```
/// use minter_tx::crypto::keccak256;
///
/// let hash = keccak256(b"minter");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn keccak256(data: &[u8]) -> [u8; HASH_LENGTH] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; HASH_LENGTH];
    hasher.finalize(&mut output);
    output
}

/// Compute the SHA-256 hash and return a fixed-size array.
pub fn sha256(data: &[u8]) -> [u8; HASH_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; HASH_LENGTH];
    output.copy_from_slice(&result);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty_vector() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_sha256_known_vector() {
        // SHA-256("abc") from FIPS 180-2.
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn keccak_differs_from_sha256() {
        assert_ne!(keccak256(b"minter"), sha256(b"minter"));
    }

    #[test]
    fn keccak_deterministic() {
        assert_eq!(keccak256(b"tx"), keccak256(b"tx"));
        assert_ne!(keccak256(b"tx"), keccak256(b"ty"));
    }
}

//! Scalar ⇄ byte conversions used by every wire field.
//!
//! Pure functions, no state. Integers go on the wire big-endian with no
//! leading zeros, coin symbols as fixed-width zero-padded text, amounts as
//! base-unit integers.

use num_bigint::BigUint;
use num_traits::Zero;

use super::decimal::BigDec18;
use crate::crypto::hash::keccak256;
use crate::error::{Result, TxError};

/// Values that have a canonical wire byte representation.
pub trait ToBytes {
    fn to_bytes(&self) -> Vec<u8>;
}

impl ToBytes for str {
    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl ToBytes for String {
    fn to_bytes(&self) -> Vec<u8> {
        self.as_str().to_bytes()
    }
}

impl ToBytes for BigUint {
    /// Minimal big-endian bytes. Zero is the empty sequence, which is also how
    /// the wire encodes a zero integer.
    fn to_bytes(&self) -> Vec<u8> {
        if self.is_zero() {
            return Vec::new();
        }
        self.to_bytes_be()
    }
}

impl ToBytes for BigDec18 {
    /// The base-unit integer of the amount.
    fn to_bytes(&self) -> Vec<u8> {
        normalize_value(self).to_bytes()
    }
}

/// Converts a string, integer or decimal into its wire bytes.
///
/// ```
/// use minter_tx::codec::value::to_bytes;
/// use num_bigint::BigUint;
///
/// assert!(to_bytes("").is_empty());
/// assert!(to_bytes(&BigUint::from(0u32)).is_empty());
/// assert_eq!(to_bytes(&BigUint::from(258u32)), vec![0x01, 0x02]);
/// ```
pub fn to_bytes<T: ToBytes + ?Sized>(value: &T) -> Vec<u8> {
    value.to_bytes()
}

/// Copies up to `width` bytes of `text`, zero-padding on the right.
///
/// Longer input is truncated; a warning is logged so the data loss is at
/// least visible. Decoding is strict: a coin field wider than `width` bytes
/// is rejected with `FieldOverflow` rather than truncated.
pub fn to_bytes_fixed(text: &str, width: usize) -> Vec<u8> {
    let bytes = text.as_bytes();
    if bytes.len() > width {
        tracing::warn!(
            input = text,
            width,
            "fixed-width field truncated"
        );
    }
    let mut out = vec![0u8; width];
    let n = bytes.len().min(width);
    out[..n].copy_from_slice(&bytes[..n]);
    out
}

/// Recovers symbol text from a fixed-width field by dropping every zero byte.
///
/// Fails on bytes that are not UTF-8. A replacement character would
/// re-encode to different bytes and change the signing hash.
pub fn to_string_clear(bytes: &[u8]) -> Result<String> {
    let stripped: Vec<u8> = bytes.iter().copied().filter(|&b| b != 0).collect();
    String::from_utf8(stripped)
        .map_err(|e| TxError::MalformedEncoding(format!("symbol is not UTF-8: {}", e)))
}

/// Interprets big-endian bytes as an unsigned integer. Empty input is zero.
pub fn to_biguint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Decimal → base units (`value * 10^18`).
pub fn normalize_value(value: &BigDec18) -> BigUint {
    value.base_units().clone()
}

/// Base units → decimal (`value / 10^18`), exact.
pub fn humanize_value(value: &BigUint) -> BigDec18 {
    BigDec18::from_base_units(value.clone())
}

/// The network hash: keccak-256.
pub fn hash(bytes: &[u8]) -> [u8; 32] {
    keccak256(bytes)
}

//! # Value Codec
//!
//! Everything between a Rust value and its wire bytes:
//!
//! ```text
//! rlp.rs     : the recursive length-prefixed string/list primitive
//! value.rs   : scalar ⇄ bytes, fixed-width symbols, 10^18 normalization
//! decimal.rs : BigDec18, the 18-fractional-digit amount type
//! ```

pub mod decimal;
pub mod rlp;
pub mod value;

pub use decimal::{base_unit_factor, BigDec18};
pub use rlp::{RlpError, RlpItem, RlpStream};
pub use value::{
    hash, humanize_value, normalize_value, to_biguint, to_bytes, to_bytes_fixed, to_string_clear,
    ToBytes,
};

//! Error types for transaction construction, signing and decoding.
//!
//! Every fallible operation in the crate returns a [`TxError`]. Decode-path
//! failures are terminal for the call: no partially populated
//! [`Transaction`](crate::transaction::Transaction) is ever handed back.

use thiserror::Error;

use crate::codec::rlp::RlpError;
use crate::transaction::types::SignatureType;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TxError>;

/// Errors that can occur while building, signing or decoding a transaction.
#[derive(Debug, Error)]
pub enum TxError {
    /// The input is not a structurally valid transaction: wrong list arity,
    /// truncated bytes, bad hex, a list where a string was expected, etc.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// The type code has no registered payload factory.
    #[error("unknown transaction type: 0x{0:02x}")]
    UnknownTransactionType(u16),

    /// The signature section does not match the declared signature kind.
    #[error("invalid signature block: {0}")]
    InvalidSignatureBlock(String),

    /// A value does not fit into its fixed-width wire field.
    #[error("field `{field}` overflows its {width}-byte width (got {len} bytes)")]
    FieldOverflow {
        /// Name of the offending field.
        field: &'static str,
        /// Maximum width of the field in bytes.
        width: usize,
        /// Actual length in bytes.
        len: usize,
    },

    /// An address, public key or private key could not be parsed.
    #[error("invalid address or key: {0}")]
    InvalidAddressOrKey(String),

    /// A decimal amount could not be parsed.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The transaction already carries a signature of another kind.
    #[error("transaction is already signed as {attached:?}, cannot re-sign as {requested:?}")]
    SignatureKindConflict {
        /// Kind of the signature already attached.
        attached: SignatureType,
        /// Kind the caller asked for.
        requested: SignatureType,
    },

    /// The signing collaborator failed to produce a signature.
    #[error("signing failed: {0}")]
    Signing(String),
}

impl From<RlpError> for TxError {
    fn from(err: RlpError) -> Self {
        TxError::MalformedEncoding(err.to_string())
    }
}

impl From<hex::FromHexError> for TxError {
    fn from(err: hex::FromHexError) -> Self {
        TxError::MalformedEncoding(format!("hex decode failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rlp_errors_become_malformed_encoding() {
        let err: TxError = RlpError::UnexpectedEof.into();
        assert!(matches!(err, TxError::MalformedEncoding(_)));
    }

    #[test]
    fn unknown_type_renders_hex_code() {
        let err = TxError::UnknownTransactionType(0x2a);
        assert_eq!(err.to_string(), "unknown transaction type: 0x2a");
    }

    #[test]
    fn field_overflow_message_names_field() {
        let err = TxError::FieldOverflow {
            field: "coin",
            width: 10,
            len: 12,
        };
        assert!(err.to_string().contains("`coin`"));
    }
}

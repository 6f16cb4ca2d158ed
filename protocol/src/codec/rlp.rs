//! RLP (Recursive Length Prefix) encoding.
//!
//! The transaction wire format is a tree of byte strings and lists encoded
//! with RLP:
//!
//! - Single byte `[0x00, 0x7f]`: itself
//! - String `[0x80, 0xb7]`: `0x80 + len`, then data
//! - String `[0xb8, 0xbf]`: `0xb7 + len_of_len`, then len, then data
//! - List `[0xc0, 0xf7]`: `0xc0 + len`, then items
//! - List `[0xf8, 0xff]`: `0xf7 + len_of_len`, then len, then items
//!
//! The decoder rejects non-canonical lengths and bounds recursion depth.

use thiserror::Error;

/// Maximum nesting depth accepted by the decoder.
const MAX_DEPTH: usize = 16;

/// RLP decoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RlpError {
    /// Input is empty when data expected.
    #[error("empty input")]
    EmptyInput,
    /// Input too short for declared length.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// Non-canonical encoding (leading zeros in length, short long-form).
    #[error("non-canonical length encoding")]
    NonCanonical,
    /// A single byte below `0x80` wrapped in a string header.
    #[error("single byte must be encoded as itself")]
    SingleByteMismatch,
    /// Length field does not fit in `usize`.
    #[error("length overflow")]
    LengthOverflow,
    /// Exceeded maximum nesting depth.
    #[error("nesting deeper than {MAX_DEPTH} levels")]
    TooDeep,
    /// Expected list but got string.
    #[error("expected a list, found a byte string")]
    ExpectedList,
    /// Expected string but got list.
    #[error("expected a byte string, found a list")]
    ExpectedString,
    /// Extra data after the top-level item.
    #[error("trailing bytes after item")]
    TrailingData,
}

/// A decoded RLP item borrowing from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpItem<'a> {
    /// A byte string (may be empty).
    String(&'a [u8]),
    /// A list of items.
    List(Vec<RlpItem<'a>>),
}

impl<'a> RlpItem<'a> {
    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, RlpItem::String(_))
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, RlpItem::List(_))
    }

    /// Returns the string payload, or [`RlpError::ExpectedString`].
    pub fn as_bytes(&self) -> Result<&'a [u8], RlpError> {
        match self {
            RlpItem::String(data) => Ok(data),
            RlpItem::List(_) => Err(RlpError::ExpectedString),
        }
    }

    /// Returns the list items, or [`RlpError::ExpectedList`].
    pub fn as_list(&self) -> Result<&[RlpItem<'a>], RlpError> {
        match self {
            RlpItem::List(items) => Ok(items),
            RlpItem::String(_) => Err(RlpError::ExpectedList),
        }
    }
}

/// Decodes one item from the front of `input`, returning it with the rest.
pub fn decode(input: &[u8]) -> Result<(RlpItem<'_>, &[u8]), RlpError> {
    decode_internal(input, 0)
}

/// Decodes a complete RLP item, rejecting trailing data.
pub fn decode_exact(input: &[u8]) -> Result<RlpItem<'_>, RlpError> {
    let (item, rest) = decode(input)?;
    if !rest.is_empty() {
        return Err(RlpError::TrailingData);
    }
    Ok(item)
}

fn decode_internal(input: &[u8], depth: usize) -> Result<(RlpItem<'_>, &[u8]), RlpError> {
    if depth > MAX_DEPTH {
        return Err(RlpError::TooDeep);
    }

    let first = *input.first().ok_or(RlpError::EmptyInput)?;

    match first {
        0x00..=0x7f => Ok((RlpItem::String(&input[..1]), &input[1..])),

        0x80..=0xb7 => {
            let len = (first - 0x80) as usize;
            let data = input.get(1..1 + len).ok_or(RlpError::UnexpectedEof)?;
            if len == 1 && data[0] < 0x80 {
                return Err(RlpError::SingleByteMismatch);
            }
            Ok((RlpItem::String(data), &input[1 + len..]))
        }

        0xb8..=0xbf => {
            let (start, len) = long_length(input, first - 0xb7)?;
            let data = input
                .get(start..start + len)
                .ok_or(RlpError::UnexpectedEof)?;
            Ok((RlpItem::String(data), &input[start + len..]))
        }

        0xc0..=0xf7 => {
            let len = (first - 0xc0) as usize;
            let body = input.get(1..1 + len).ok_or(RlpError::UnexpectedEof)?;
            let items = decode_list_items(body, depth + 1)?;
            Ok((RlpItem::List(items), &input[1 + len..]))
        }

        0xf8..=0xff => {
            let (start, len) = long_length(input, first - 0xf7)?;
            let body = input
                .get(start..start + len)
                .ok_or(RlpError::UnexpectedEof)?;
            let items = decode_list_items(body, depth + 1)?;
            Ok((RlpItem::List(items), &input[start + len..]))
        }
    }
}

/// Parses a long-form length header. Returns `(payload_start, payload_len)`.
fn long_length(input: &[u8], len_of_len: u8) -> Result<(usize, usize), RlpError> {
    let len_of_len = len_of_len as usize;
    let len_bytes = input
        .get(1..1 + len_of_len)
        .ok_or(RlpError::UnexpectedEof)?;
    if len_bytes[0] == 0 {
        return Err(RlpError::NonCanonical);
    }
    let len = decode_length(len_bytes)?;
    if len < 56 {
        return Err(RlpError::NonCanonical);
    }
    let start = 1 + len_of_len;
    start.checked_add(len).ok_or(RlpError::LengthOverflow)?;
    Ok((start, len))
}

fn decode_length(bytes: &[u8]) -> Result<usize, RlpError> {
    if bytes.len() > std::mem::size_of::<usize>() {
        return Err(RlpError::LengthOverflow);
    }
    let mut len = 0usize;
    for &byte in bytes {
        len = len.checked_shl(8).ok_or(RlpError::LengthOverflow)?;
        len = len
            .checked_add(byte as usize)
            .ok_or(RlpError::LengthOverflow)?;
    }
    Ok(len)
}

fn decode_list_items(mut data: &[u8], depth: usize) -> Result<Vec<RlpItem<'_>>, RlpError> {
    let mut items = Vec::new();
    while !data.is_empty() {
        let (item, rest) = decode_internal(data, depth)?;
        items.push(item);
        data = rest;
    }
    Ok(items)
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Accumulates the items of one list.
///
/// Items are appended in wire order; [`RlpStream::out`] wraps them in a list
/// header. Nested lists are built in their own stream and appended with
/// [`RlpStream::append_list`].
#[derive(Debug, Default, Clone)]
pub struct RlpStream {
    buf: Vec<u8>,
    count: usize,
}

impl RlpStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a byte string.
    pub fn append_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(&encode_bytes(data));
        self.count += 1;
        self
    }

    /// Appends an unsigned integer in canonical form (zero is the empty string).
    pub fn append_u64(&mut self, value: u64) -> &mut Self {
        let bytes = value.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        self.append_bytes(&bytes[start..])
    }

    /// Appends the items of `list` as one nested list.
    pub fn append_list(&mut self, list: &RlpStream) -> &mut Self {
        self.buf.extend_from_slice(&encode_list(&list.buf));
        self.count += 1;
        self
    }

    /// Number of items appended so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Finishes the stream as an encoded list.
    pub fn out(&self) -> Vec<u8> {
        encode_list(&self.buf)
    }
}

/// Encodes a byte slice as an RLP string.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    if data.len() == 1 && data[0] < 0x80 {
        return data.to_vec();
    }
    let mut out = length_header(0x80, data.len());
    out.extend_from_slice(data);
    out
}

/// Wraps already-encoded items in a list header.
pub fn encode_list(items: &[u8]) -> Vec<u8> {
    let mut out = length_header(0xc0, items.len());
    out.extend_from_slice(items);
    out
}

fn length_header(offset: u8, len: usize) -> Vec<u8> {
    if len <= 55 {
        return vec![offset + len as u8];
    }
    let bytes = len.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let len_bytes = &bytes[start..];
    let mut out = Vec::with_capacity(1 + len_bytes.len() + len);
    out.push(offset + 55 + len_bytes.len() as u8);
    out.extend_from_slice(len_bytes);
    out
}

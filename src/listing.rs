//! Listing
//!
//! Turns raw store contents into output bytes.
//!
//! ## Entry block format
//! ```text
//! key: <key>
//! value: <value>
//! ===
//! ```
//! Blocks are buffered in key order, then the tail-limit keeps the last
//! `limit` of them.

use std::borrow::Cow;

use bytes::Bytes;
use clap::ValueEnum;

/// Separator line closing every entry block
pub const BLOCK_SEPARATOR: &str = "===";

/// How raw bytes are rendered on output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// Raw bytes, written unchanged
    #[default]
    Text,

    /// Lowercase hexadecimal, two digits per byte
    Hex,
}

impl Encoding {
    /// Render a byte string in this encoding
    pub fn render<'a>(&self, bytes: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            Encoding::Text => Cow::Borrowed(bytes),
            Encoding::Hex => Cow::Owned(hex::encode(bytes).into_bytes()),
        }
    }
}

/// A single key-value pair copied out of a partition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: Bytes,
    pub value: Bytes,
}

impl Entry {
    pub fn new(key: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Format as a three-line block (no trailing newline)
    pub fn to_block(&self, encoding: Encoding) -> Vec<u8> {
        let key = encoding.render(&self.key);
        let value = encoding.render(&self.value);

        let mut block = Vec::with_capacity(key.len() + value.len() + 16);
        block.extend_from_slice(b"key: ");
        block.extend_from_slice(&key);
        block.extend_from_slice(b"\nvalue: ");
        block.extend_from_slice(&value);
        block.push(b'\n');
        block.extend_from_slice(BLOCK_SEPARATOR.as_bytes());
        block
    }
}

/// Keep only the last `limit` rows.
///
/// A limit of zero or below, or one at least as large as `rows`, keeps
/// everything. Order is preserved.
pub fn apply_tail_limit<T>(mut rows: Vec<T>, limit: i64) -> Vec<T> {
    let keep = match usize::try_from(limit) {
        Ok(keep) if keep > 0 => keep,
        _ => return rows,
    };

    if keep < rows.len() {
        rows.drain(..rows.len() - keep);
    }
    rows
}

//! Transaction memos.
//!
//! A [`Memo`] is an optional annotation the ledger carries verbatim; the
//! SDK only enforces the wire limits. Text memos hold at most 28 UTF-8
//! bytes. Hash memos hold exactly 32 bytes: shorter inputs are zero-padded
//! at construction, longer ones are rejected.

use crate::config::{MEMO_HASH_LENGTH, MEMO_TEXT_MAX_BYTES};
use crate::error::{Error, Result};
use crate::xdr::{XdrReader, XdrWriter};

const MEMO_TYPE_NONE: u32 = 0;
const MEMO_TYPE_TEXT: u32 = 1;
const MEMO_TYPE_ID: u32 = 2;
const MEMO_TYPE_HASH: u32 = 3;
const MEMO_TYPE_RETURN: u32 = 4;

/// An optional transaction annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Memo {
    /// No memo. The default.
    None,
    /// A short UTF-8 string, at most 28 bytes.
    Text(String),
    /// An unsigned 64-bit identifier, typically used to route deposits.
    Id(u64),
    /// An arbitrary 32-byte hash.
    Hash([u8; 32]),
    /// The hash of the transaction this one refunds.
    Return([u8; 32]),
}

impl Memo {
    pub fn none() -> Self {
        Memo::None
    }

    /// Builds a text memo, rejecting strings over 28 UTF-8 bytes.
    pub fn text(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let len = text.len();
        if len > MEMO_TEXT_MAX_BYTES {
            return Err(Error::MemoTooLong(format!(
                "text must be at most {MEMO_TEXT_MAX_BYTES} bytes, got {len}"
            )));
        }
        Ok(Memo::Text(text))
    }

    pub fn id(id: u64) -> Self {
        Memo::Id(id)
    }

    /// Builds a hash memo. Inputs shorter than 32 bytes are zero-padded;
    /// longer ones are rejected.
    pub fn hash(bytes: &[u8]) -> Result<Self> {
        Ok(Memo::Hash(Self::hash_bytes(bytes)?))
    }

    /// Builds a hash memo from a hex string (either case).
    pub fn hash_hex(hex_string: &str) -> Result<Self> {
        Self::hash(&Self::decode_hex(hex_string)?)
    }

    /// Builds a return-hash memo. Same length rules as [`Memo::hash`].
    pub fn return_hash(bytes: &[u8]) -> Result<Self> {
        Ok(Memo::Return(Self::hash_bytes(bytes)?))
    }

    /// Builds a return-hash memo from a hex string (either case).
    pub fn return_hash_hex(hex_string: &str) -> Result<Self> {
        Self::return_hash(&Self::decode_hex(hex_string)?)
    }

    /// Hex form of the hash bytes, full 64 characters. `None` for non-hash
    /// memos.
    pub fn hex_value(&self) -> Option<String> {
        match self {
            Memo::Hash(bytes) | Memo::Return(bytes) => Some(hex::encode(bytes)),
            _ => None,
        }
    }

    /// Hex form of the hash bytes up to the first zero byte. `None` for
    /// non-hash memos.
    pub fn trimmed_hex_value(&self) -> Option<String> {
        match self {
            Memo::Hash(bytes) | Memo::Return(bytes) => {
                let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
                Some(hex::encode(&bytes[..end]))
            }
            _ => None,
        }
    }

    fn hash_bytes(bytes: &[u8]) -> Result<[u8; 32]> {
        if bytes.len() > MEMO_HASH_LENGTH {
            return Err(Error::MemoTooLong(format!(
                "hash memo can contain at most {MEMO_HASH_LENGTH} bytes, got {}",
                bytes.len()
            )));
        }
        let mut out = [0u8; 32];
        out[..bytes.len()].copy_from_slice(bytes);
        Ok(out)
    }

    fn decode_hex(hex_string: &str) -> Result<Vec<u8>> {
        hex::decode(hex_string)
            .map_err(|e| Error::MemoTooLong(format!("invalid hex memo value: {e}")))
    }

    pub fn write_xdr(&self, writer: &mut XdrWriter) {
        match self {
            Memo::None => writer.write_u32(MEMO_TYPE_NONE),
            Memo::Text(text) => {
                writer.write_u32(MEMO_TYPE_TEXT);
                writer.write_string(text);
            }
            Memo::Id(id) => {
                writer.write_u32(MEMO_TYPE_ID);
                writer.write_u64(*id);
            }
            Memo::Hash(bytes) => {
                writer.write_u32(MEMO_TYPE_HASH);
                writer.write_fixed(bytes);
            }
            Memo::Return(bytes) => {
                writer.write_u32(MEMO_TYPE_RETURN);
                writer.write_fixed(bytes);
            }
        }
    }

    pub fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        match reader.read_u32()? {
            MEMO_TYPE_NONE => Ok(Memo::None),
            MEMO_TYPE_TEXT => {
                let text = reader.read_string()?;
                Memo::text(text)
            }
            MEMO_TYPE_ID => Ok(Memo::Id(reader.read_u64()?)),
            MEMO_TYPE_HASH => Memo::hash(&reader.read_fixed(32)?),
            MEMO_TYPE_RETURN => Memo::return_hash(&reader.read_fixed(32)?),
            other => Err(Error::Decode(format!("unknown memo type {other}"))),
        }
    }
}

impl Default for Memo {
    fn default() -> Self {
        Memo::None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

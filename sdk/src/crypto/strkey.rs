//! Strkey: the checksummed, version-tagged key text encoding.
//!
//! Every human-readable key string in Meridian is a strkey: the payload is
//! prefixed with a purpose version byte, suffixed with a little-endian
//! CRC16-XMODEM checksum over `version || payload`, and the whole thing is
//! encoded as unpadded uppercase base32. The version byte occupies the top
//! five bits of the first byte, which is why each purpose maps to a stable
//! leading character: account ids start with `G`, secret seeds with `S`,
//! pre-authorized transaction hashes with `T`, and SHA-256 hashes with `X`.
//!
//! ## Secret material
//!
//! Seed strings are the only secrets that pass through here. Every
//! intermediate buffer in this module is wrapped in [`Zeroizing`], so raw
//! seed bytes and partially decoded base32 scratch space are wiped as soon
//! as they go out of scope, on success and error paths alike. Seed entry
//! points hand the caller a `Zeroizing` value so the final copy gets the
//! same treatment.

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Purpose tag carried in the first byte of every strkey.
///
/// The numeric value is `purpose << 3` so the purpose lands in the top five
/// bits, pinning the first base32 character of the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionByte {
    /// Ed25519 public key; encodes with leading `G`.
    AccountId,
    /// Ed25519 secret seed; encodes with leading `S`.
    Seed,
    /// Pre-authorized transaction hash; encodes with leading `T`.
    PreAuthTx,
    /// SHA-256 hash for preimage signers; encodes with leading `X`.
    Sha256Hash,
}

impl VersionByte {
    pub fn value(self) -> u8 {
        match self {
            VersionByte::AccountId => 6 << 3,
            VersionByte::Seed => 18 << 3,
            VersionByte::PreAuthTx => 19 << 3,
            VersionByte::Sha256Hash => 23 << 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Encodes an ed25519 public key as a `G...` account id string.
pub fn encode_account_id(data: &[u8]) -> String {
    encode_check(VersionByte::AccountId, data).to_string()
}

/// Decodes a `G...` account id string into raw public key bytes.
pub fn decode_account_id(encoded: &str) -> Result<Vec<u8>> {
    decode_check(VersionByte::AccountId, encoded).map(|d| d.to_vec())
}

/// Encodes a raw seed as an `S...` secret seed string. The result is
/// zeroized when dropped; copy it out only deliberately.
pub fn encode_secret_seed(data: &[u8]) -> Zeroizing<String> {
    encode_check(VersionByte::Seed, data)
}

/// Decodes an `S...` secret seed string into raw seed bytes, zeroized on
/// drop.
pub fn decode_secret_seed(encoded: &str) -> Result<Zeroizing<Vec<u8>>> {
    decode_check(VersionByte::Seed, encoded)
}

/// Encodes a transaction hash as a `T...` pre-authorized transaction key.
pub fn encode_pre_auth_tx(data: &[u8]) -> String {
    encode_check(VersionByte::PreAuthTx, data).to_string()
}

/// Decodes a `T...` pre-authorized transaction key.
pub fn decode_pre_auth_tx(encoded: &str) -> Result<Vec<u8>> {
    decode_check(VersionByte::PreAuthTx, encoded).map(|d| d.to_vec())
}

/// Encodes a SHA-256 hash as an `X...` hash key.
pub fn encode_sha256_hash(data: &[u8]) -> String {
    encode_check(VersionByte::Sha256Hash, data).to_string()
}

/// Decodes an `X...` hash key.
pub fn decode_sha256_hash(encoded: &str) -> Result<Vec<u8>> {
    decode_check(VersionByte::Sha256Hash, encoded).map(|d| d.to_vec())
}

// ---------------------------------------------------------------------------
// Core codec
// ---------------------------------------------------------------------------

/// Encodes `version || data || crc16(version || data)` as unpadded
/// uppercase base32.
pub fn encode_check(version: VersionByte, data: &[u8]) -> Zeroizing<String> {
    let mut payload = Zeroizing::new(Vec::with_capacity(data.len() + 3));
    payload.push(version.value());
    payload.extend_from_slice(data);
    let crc = checksum(&payload);
    payload.extend_from_slice(&crc);
    base32_encode(&payload)
}

/// Decodes a strkey, verifying the version byte and checksum. Returns the
/// payload without the version byte or checksum.
pub fn decode_check(version: VersionByte, encoded: &str) -> Result<Zeroizing<Vec<u8>>> {
    let decoded = base32_decode(encoded)?;
    if decoded.len() < 3 {
        return Err(Error::InvalidStrKey("input too short".into()));
    }
    if decoded[0] != version.value() {
        return Err(Error::InvalidStrKey("version byte mismatch".into()));
    }
    let body_len = decoded.len() - 2;
    let expected = checksum(&decoded[..body_len]);
    if expected != decoded[body_len..] {
        return Err(Error::InvalidStrKey("checksum mismatch".into()));
    }
    Ok(Zeroizing::new(decoded[1..body_len].to_vec()))
}

/// CRC16-XMODEM over `bytes`, returned little-endian. The checksum of an
/// empty sequence is zero.
pub fn checksum(bytes: &[u8]) -> [u8; 2] {
    let mut crc: u16 = 0;
    for &byte in bytes {
        let mut code = (crc >> 8) ^ u16::from(byte);
        code ^= code >> 4;
        crc <<= 8;
        crc ^= code;
        code <<= 5;
        crc ^= code;
        code <<= 7;
        crc ^= code;
    }
    [(crc & 0xFF) as u8, (crc >> 8) as u8]
}

// ---------------------------------------------------------------------------
// Base32 (RFC 4648 alphabet, uppercase, no padding)
// ---------------------------------------------------------------------------

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

fn base32_encode(data: &[u8]) -> Zeroizing<String> {
    let mut out = Zeroizing::new(String::with_capacity((data.len() * 8 + 4) / 5));
    let mut buffer: u16 = 0;
    let mut bits = 0u32;
    for &byte in data.iter() {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[usize::from((buffer >> bits) & 0x1F)] as char);
        }
    }
    if bits > 0 {
        out.push(ALPHABET[usize::from((buffer << (5 - bits)) & 0x1F)] as char);
    }
    out
}

fn base32_decode(encoded: &str) -> Result<Zeroizing<Vec<u8>>> {
    let mut out = Zeroizing::new(Vec::with_capacity(encoded.len() * 5 / 8));
    let mut buffer: u16 = 0;
    let mut bits = 0u32;
    for &ch in encoded.as_bytes() {
        let value = decode_char(ch)?;
        buffer = (buffer << 5) | u16::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }
    // Leftover bits are the encoder's final partial group; for a canonical
    // encoding they are zero.
    if bits > 0 && (buffer & ((1 << bits) - 1)) != 0 {
        return Err(Error::InvalidStrKey("invalid trailing bits".into()));
    }
    Ok(out)
}

fn decode_char(ch: u8) -> Result<u8> {
    match ch {
        b'A'..=b'Z' => Ok(ch - b'A'),
        b'2'..=b'7' => Ok(ch - b'2' + 26),
        _ => Err(Error::InvalidStrKey(format!(
            "illegal character 0x{ch:02X} in encoded string"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

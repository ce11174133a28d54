//! SHA-256 hashing and zero-padding helpers.
//!
//! Meridian uses SHA-256 everywhere a digest appears: network ids,
//! transaction hashes, hash-memo payloads, and preimage signature hints.
//! The padding helpers implement the wire convention for fixed-width byte
//! fields (asset codes): pad with trailing zeros on encode, trim at the
//! first zero on decode.

use sha2::{Digest, Sha256};

/// Computes the SHA-256 digest of `data` as a fixed-size array.
///
/// # Example
///
/// ```
/// use meridian_sdk::crypto::hash::sha256;
///
/// let digest = sha256(b"meridian");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Copies `bytes` into a zero-filled buffer of `len` bytes.
///
/// The input must not exceed `len`; callers validate lengths before padding
/// (asset codes and memo hashes both enforce their limits at construction).
pub fn padded_bytes(bytes: &[u8], len: usize) -> Vec<u8> {
    debug_assert!(bytes.len() <= len);
    let mut out = vec![0u8; len];
    out[..bytes.len()].copy_from_slice(bytes);
    out
}

/// Inverse of [`padded_bytes`] for textual fields: interprets the bytes up
/// to the first zero as UTF-8 and discards the rest.
pub fn trimmed_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

//! Error types for the Meridian SDK.
//!
//! Every fallible operation in this crate returns [`Error`]. All failures are
//! local and synchronous: the SDK performs no I/O, so there is no transient
//! failure class and nothing is ever retried internally. Callers that submit
//! envelopes to the network own their retry policy.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing, encoding, or decoding
/// transactions and their component values.
#[derive(Debug, Error)]
pub enum Error {
    /// A strkey string failed to decode: bad alphabet, bad version byte,
    /// or checksum mismatch.
    #[error("invalid strkey: {0}")]
    InvalidStrKey(String),

    /// Raw bytes do not form a valid Ed25519 public key.
    #[error("invalid ed25519 public key")]
    InvalidPublicKey,

    /// A signing operation was requested on a verify-only keypair.
    #[error("keypair has no secret key; construct it from a secret seed to sign")]
    MissingSecretKey,

    /// Asset code length outside the 1-12 range, or outside the sub-range
    /// of the chosen variant (1-4 or 5-12).
    #[error("asset code length invalid: {0}")]
    AssetCodeLength(usize),

    /// Memo contents exceed the wire limits (28 bytes for text, 32 for
    /// hashes).
    #[error("memo too long: {0}")]
    MemoTooLong(String),

    /// A nonzero `max_time` precedes `min_time`.
    #[error("time bounds invalid: max_time {max_time} precedes min_time {min_time}")]
    InvalidTimeBounds { min_time: u64, max_time: u64 },

    /// A decimal amount string could not be represented as a 7-decimal-place
    /// fixed-point integer: not a decimal, too precise, or out of range.
    #[error("amount {0:?} cannot be represented as a 7-decimal-place fixed-point value")]
    InvalidAmount(String),

    /// A price string could not be parsed or approximated as a 32-bit
    /// fraction.
    #[error("price {0:?} cannot be represented as a 32-bit fraction")]
    InvalidPrice(String),

    /// A signature base or hash was requested on a transaction with no
    /// network attached.
    #[error("no network attached to transaction; bind one with TransactionBuilder::network or Transaction::with_network")]
    NoNetwork,

    /// Envelope encoding was requested before any signature was added.
    #[error("transaction must be signed by at least one signer")]
    NotEnoughSignatures,

    /// A transaction was built with an empty operation list.
    #[error("at least one operation is required")]
    NoOperations,

    /// `TransactionBuilder::time_bounds` was called twice.
    #[error("time bounds have already been set")]
    TimeBoundsAlreadySet,

    /// A payment path carries more than five intermediate assets.
    #[error("payment path cannot exceed 5 assets, got {0}")]
    PathTooLong(usize),

    /// A home domain exceeds the 32-byte wire limit.
    #[error("home domain cannot exceed 32 bytes, got {0}")]
    HomeDomainTooLong(usize),

    /// Malformed wire data: truncated input, an unknown union discriminant,
    /// nonzero padding, or invalid UTF-8 in a string field. Never recovered
    /// from; the input is rejected outright.
    #[error("xdr decode error: {0}")]
    Decode(String),
}

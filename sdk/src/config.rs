//! # Protocol Constants
//!
//! Every magic number in the Meridian wire format lives here. These values
//! are fixed by the network protocol; changing any of them produces
//! signatures and envelopes the network will reject.

// ---------------------------------------------------------------------------
// Network Passphrases
// ---------------------------------------------------------------------------

/// Passphrase of the public Meridian network. Its SHA-256 digest is the
/// network id mixed into every signature base.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "Meridian Public Network ; June 2026";

/// Passphrase of the Meridian test network. Transactions signed against this
/// id are invalid on the public network, and vice versa.
pub const TEST_NETWORK_PASSPHRASE: &str = "Meridian Test Network ; June 2026";

// ---------------------------------------------------------------------------
// Fees & Amounts
// ---------------------------------------------------------------------------

/// Base fee per operation. A transaction's default fee is
/// `operation count * BASE_FEE`.
pub const BASE_FEE: u32 = 100;

/// Number of decimal places in a fixed-point ledger amount. Wire amounts are
/// signed 64-bit integers equal to `decimal value * 10^7`.
pub const AMOUNT_DECIMAL_PLACES: u32 = 7;

/// Scale factor between decimal amounts and their wire representation.
pub const AMOUNT_SCALE: i64 = 10_000_000;

// ---------------------------------------------------------------------------
// Wire Limits
// ---------------------------------------------------------------------------

/// Envelope type tag for a transaction signature base.
pub const ENVELOPE_TYPE_TX: u32 = 2;

/// Maximum byte length of a text memo.
pub const MEMO_TEXT_MAX_BYTES: usize = 28;

/// Exact byte length of a hash or return-hash memo.
pub const MEMO_HASH_LENGTH: usize = 32;

/// Maximum number of intermediate assets in a payment path.
pub const MAX_PATH_LENGTH: usize = 5;

/// Maximum byte length of a home domain string.
pub const HOME_DOMAIN_MAX_BYTES: usize = 32;

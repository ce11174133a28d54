// Copyright (c) 2026 Meridian Contributors. MIT License.
// See LICENSE for details.

//! # Meridian SDK — Transaction Core
//!
//! Client-side transaction construction and signing for the Meridian
//! ledger network. This crate turns typed values into the network's
//! canonical binary wire format and back: assemble a transaction from
//! operations, hash it against a network id, sign the hash, and emit a
//! base64 envelope ready for submission. It performs no I/O; pair it with
//! whatever HTTP client submits the envelope.
//!
//! ## Architecture
//!
//! Modules mirror the layers of the wire format, leaves first:
//!
//! - **crypto** — SHA-256, the checksummed strkey text encoding, and
//!   ed25519 keypairs. Thin wrappers over audited implementations.
//! - **xdr** — the big-endian, discriminated-union binary codec every
//!   composite value serializes through.
//! - **types** — assets, memos, prices, and time bounds, each with its
//!   tagged encoding and construction-time validation.
//! - **operation** — the twelve ledger operation kinds with their codecs
//!   and builders.
//! - **transaction** — the engine: builder, signature base, hashing,
//!   signing, and the submittable envelope.
//! - **network** — which ledger a transaction is scoped to. A plain
//!   value, deliberately not a process-wide global.
//! - **config** — the protocol constants everything above agrees on.
//!
//! ## Example
//!
//! ```
//! use meridian_sdk::crypto::keys::KeyPair;
//! use meridian_sdk::network::Network;
//! use meridian_sdk::operation::PaymentBuilder;
//! use meridian_sdk::transaction::{Account, TransactionBuilder};
//! use meridian_sdk::types::Asset;
//!
//! let signer = KeyPair::random();
//! let destination = KeyPair::random();
//!
//! let mut builder = TransactionBuilder::new(Account::new(signer.clone(), 0))
//!     .network(Network::test())
//!     .add_operation(PaymentBuilder::new(destination, Asset::native(), "100.5").build());
//!
//! let mut tx = builder.build().unwrap();
//! tx.sign(&signer).unwrap();
//!
//! let envelope = tx.to_envelope_xdr_base64().unwrap();
//! let decoded = meridian_sdk::transaction::Transaction::from_envelope_xdr_base64(&envelope).unwrap();
//! assert_eq!(decoded.signatures().len(), 1);
//! ```
//!
//! ## Design rules
//!
//! 1. Wire bytes are bit-exact or they are wrong; there is no lenient
//!    decode mode.
//! 2. Secret key material is zeroized when released and never serialized
//!    implicitly.
//! 3. Every failure is a typed [`error::Error`]; nothing panics on bad
//!    input.

pub mod config;
pub mod crypto;
pub mod error;
pub mod network;
pub mod operation;
pub mod transaction;
pub mod types;
pub mod xdr;

pub use crypto::keys::{DecoratedSignature, KeyPair, SignerKey};
pub use error::{Error, Result};
pub use network::Network;
pub use operation::{Operation, OperationBody};
pub use transaction::{Account, Transaction, TransactionBuilder, TransactionEnvelope};
pub use types::{Asset, Memo, Price, TimeBounds};

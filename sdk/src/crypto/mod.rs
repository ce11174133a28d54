//! # Cryptographic Primitives
//!
//! Everything security-related in the SDK flows through this module:
//! SHA-256 digests, the checksummed strkey text encoding, and ed25519
//! keypairs. All of it is a thin, type-safe layer over audited
//! implementations; nothing here invents cryptography.
//!
//! - **hash** -- SHA-256 and the zero-padding helpers the wire format uses.
//! - **strkey** -- version-tagged, checksummed base32 for key strings.
//! - **keys** -- keypairs, decorated signatures, and signer keys.

pub mod hash;
pub mod keys;
pub mod strkey;

pub use hash::sha256;
pub use keys::{DecoratedSignature, KeyPair, SignerKey};

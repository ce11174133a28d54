//! # Transaction Engine
//!
//! Assembly, hashing, signing, and envelope serialization for Meridian
//! transactions.
//!
//! ```text
//! account.rs  -- sequence-number abstraction the builder consumes
//! builder.rs  -- TransactionBuilder: operations, memo, bounds, network
//! envelope.rs -- TransactionEnvelope: the submittable wire wrapper
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build** -- [`TransactionBuilder`] assembles operations against an
//!    [`Account`], computing the fee and the next sequence number.
//! 2. **Sign** -- [`Transaction::sign`] hashes the network-scoped signature
//!    base and appends a decorated signature; [`Transaction::sign_preimage`]
//!    appends a hash-preimage reveal instead.
//! 3. **Submit** -- [`Transaction::to_envelope_xdr_base64`] produces the
//!    text form an HTTP submission layer posts to the network.
//! 4. **Decode** -- [`Transaction::from_envelope_xdr`] reverses the whole
//!    pipeline, copying signatures verbatim.
//!
//! ## Concurrency
//!
//! A `Transaction` is a plain value. Signing mutates its signature list, so
//! share it across threads only after signing is done; the list is
//! append-only and single-writer by design.

use tracing::debug;

use crate::config;
use crate::crypto::hash::sha256;
use crate::crypto::keys::{DecoratedSignature, KeyPair};
use crate::error::{Error, Result};
use crate::network::Network;
use crate::operation::Operation;
use crate::types::{Memo, TimeBounds};
use crate::xdr::{XdrReader, XdrWriter};

pub mod account;
pub mod builder;
pub mod envelope;

pub use account::{Account, TransactionAccount};
pub use builder::TransactionBuilder;
pub use envelope::TransactionEnvelope;

/// A ledger transaction: an ordered, non-empty list of operations against
/// a source account, plus the metadata the network validates.
///
/// The signature list is append-only; signatures are never removed or
/// reordered once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub(crate) source_account: KeyPair,
    pub(crate) fee: u32,
    pub(crate) sequence_number: i64,
    pub(crate) operations: Vec<Operation>,
    pub(crate) memo: Memo,
    pub(crate) time_bounds: Option<TimeBounds>,
    pub(crate) network: Option<Network>,
    pub(crate) signatures: Vec<DecoratedSignature>,
}

impl Transaction {
    pub(crate) fn new(
        source_account: KeyPair,
        fee: u32,
        sequence_number: i64,
        operations: Vec<Operation>,
        memo: Memo,
        time_bounds: Option<TimeBounds>,
        network: Option<Network>,
    ) -> Result<Self> {
        if operations.is_empty() {
            return Err(Error::NoOperations);
        }
        Ok(Self {
            source_account,
            fee,
            sequence_number,
            operations,
            memo,
            time_bounds,
            network,
            signatures: Vec::new(),
        })
    }

    pub fn source_account(&self) -> &KeyPair {
        &self.source_account
    }

    pub fn fee(&self) -> u32 {
        self.fee
    }

    pub fn sequence_number(&self) -> i64 {
        self.sequence_number
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn memo(&self) -> &Memo {
        &self.memo
    }

    pub fn time_bounds(&self) -> Option<&TimeBounds> {
        self.time_bounds.as_ref()
    }

    pub fn network(&self) -> Option<&Network> {
        self.network.as_ref()
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        &self.signatures
    }

    /// Rebinds the transaction to `network`. Needed after envelope decode,
    /// which cannot know which network the envelope came from.
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }

    /// The exact bytes whose hash gets signed: the 32-byte network id, the
    /// 4-byte transaction envelope tag, and the encoded transaction body.
    ///
    /// Fails with [`Error::NoNetwork`] when no network is bound.
    pub fn signature_base(&self) -> Result<Vec<u8>> {
        let network = self.network.as_ref().ok_or(Error::NoNetwork)?;
        let mut writer = XdrWriter::new();
        writer.write_fixed(&network.network_id());
        writer.write_u32(config::ENVELOPE_TYPE_TX);
        self.write_xdr(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// The transaction hash: SHA-256 of the signature base. This is what
    /// signers actually sign, and what the network reports as the
    /// transaction id.
    pub fn hash(&self) -> Result<[u8; 32]> {
        Ok(sha256(&self.signature_base()?))
    }

    /// Signs the transaction hash with `signer` and appends the decorated
    /// signature.
    pub fn sign(&mut self, signer: &KeyPair) -> Result<()> {
        let hash = self.hash()?;
        let decorated = signer.sign_decorated(&hash)?;
        debug!(
            signer = %signer.account_id(),
            signatures = self.signatures.len() + 1,
            "signed transaction"
        );
        self.signatures.push(decorated);
        Ok(())
    }

    /// Appends a hash-preimage signature: the revealed preimage stands in
    /// for a signature, hinted by the tail of its SHA-256 digest. Knowing a
    /// preimage whose hash was registered as a signer authorizes the
    /// transaction.
    pub fn sign_preimage(&mut self, preimage: &[u8]) {
        let digest = sha256(preimage);
        let mut hint = [0u8; 4];
        hint.copy_from_slice(&digest[28..]);
        self.signatures.push(DecoratedSignature {
            hint,
            signature: preimage.to_vec(),
        });
    }

    /// Encodes the submittable envelope: transaction plus signature list.
    /// Requires at least one signature.
    pub fn to_envelope_xdr(&self) -> Result<Vec<u8>> {
        TransactionEnvelope::new(self.clone())?.to_xdr()
    }

    /// Base64 form of [`Transaction::to_envelope_xdr`], the shape the
    /// submission endpoint accepts.
    pub fn to_envelope_xdr_base64(&self) -> Result<String> {
        TransactionEnvelope::new(self.clone())?.to_xdr_base64()
    }

    /// Decodes an envelope back into a transaction, copying its signatures
    /// verbatim. The result has no network bound; attach one with
    /// [`Transaction::with_network`] before hashing or signing further.
    pub fn from_envelope_xdr(bytes: &[u8]) -> Result<Self> {
        Ok(TransactionEnvelope::from_xdr(bytes)?.into_transaction())
    }

    /// Decodes a base64 envelope. See [`Transaction::from_envelope_xdr`].
    pub fn from_envelope_xdr_base64(encoded: &str) -> Result<Self> {
        Ok(TransactionEnvelope::from_xdr_base64(encoded)?.into_transaction())
    }

    /// Writes the transaction body (without signatures).
    pub(crate) fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        self.source_account.write_xdr_public_key(writer);
        writer.write_u32(self.fee);
        writer.write_i64(self.sequence_number);
        match &self.time_bounds {
            Some(bounds) => {
                writer.write_bool(true);
                bounds.write_xdr(writer);
            }
            None => writer.write_bool(false),
        }
        self.memo.write_xdr(writer);
        writer.write_u32(self.operations.len() as u32);
        for operation in &self.operations {
            operation.write_xdr(writer)?;
        }
        // Reserved extension point, always zero today.
        writer.write_u32(0);
        Ok(())
    }

    /// Reads a transaction body. The result carries no network and no
    /// signatures; the envelope decoder fills the latter in.
    pub(crate) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let source_account = KeyPair::read_xdr_public_key(reader)?;
        let fee = reader.read_u32()?;
        let sequence_number = reader.read_i64()?;
        let time_bounds = if reader.read_bool()? {
            Some(TimeBounds::read_xdr(reader)?)
        } else {
            None
        };
        let memo = Memo::read_xdr(reader)?;
        let count = reader.read_u32()? as usize;
        if count == 0 {
            return Err(Error::NoOperations);
        }
        let mut operations = Vec::with_capacity(count);
        for _ in 0..count {
            operations.push(Operation::read_xdr(reader)?);
        }
        match reader.read_u32()? {
            0 => {}
            other => return Err(Error::Decode(format!("unknown transaction ext {other}"))),
        }
        Ok(Self {
            source_account,
            fee,
            sequence_number,
            operations,
            memo,
            time_bounds,
            network: None,
            signatures: Vec::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

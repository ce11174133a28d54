//! The submittable wire wrapper: a transaction plus its signatures.
//!
//! An envelope is what actually travels to the network: the encoded
//! transaction body followed by the decorated signature list. Encoding
//! requires at least one signature, because the network rejects unsigned
//! envelopes outright and catching that locally is cheaper than a round
//! trip.
//!
//! Decoding is the exact inverse and copies signatures verbatim; it does
//! not verify them, re-derive hints, or guess the network. A decoded
//! transaction therefore has no network bound until the caller attaches
//! one.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tracing::debug;

use crate::crypto::keys::DecoratedSignature;
use crate::error::{Error, Result};
use crate::xdr::{XdrReader, XdrWriter};

use super::Transaction;

/// A transaction paired with at least one signature, ready to encode for
/// submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEnvelope {
    transaction: Transaction,
}

impl TransactionEnvelope {
    /// Wraps a signed transaction. Fails with
    /// [`Error::NotEnoughSignatures`] if the signature list is empty.
    pub fn new(transaction: Transaction) -> Result<Self> {
        if transaction.signatures.is_empty() {
            return Err(Error::NotEnoughSignatures);
        }
        Ok(Self { transaction })
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    pub fn into_transaction(self) -> Transaction {
        self.transaction
    }

    /// Encodes the envelope: transaction body, then the signature array.
    pub fn to_xdr(&self) -> Result<Vec<u8>> {
        let mut writer = XdrWriter::new();
        self.transaction.write_xdr(&mut writer)?;
        writer.write_u32(self.transaction.signatures.len() as u32);
        for signature in &self.transaction.signatures {
            signature.write_xdr(&mut writer);
        }
        Ok(writer.into_bytes())
    }

    /// Base64 form of [`TransactionEnvelope::to_xdr`], the submission
    /// format.
    pub fn to_xdr_base64(&self) -> Result<String> {
        Ok(BASE64.encode(self.to_xdr()?))
    }

    /// Decodes an envelope, rebuilding the typed transaction and copying
    /// its signature list verbatim.
    pub fn from_xdr(bytes: &[u8]) -> Result<Self> {
        let mut reader = XdrReader::new(bytes);
        let mut transaction = Transaction::read_xdr(&mut reader)?;
        let count = reader.read_u32()? as usize;
        let mut signatures = Vec::with_capacity(count);
        for _ in 0..count {
            signatures.push(DecoratedSignature::read_xdr(&mut reader)?);
        }
        if reader.remaining() != 0 {
            return Err(Error::Decode(format!(
                "{} trailing bytes after envelope",
                reader.remaining()
            )));
        }
        transaction.signatures = signatures;
        debug!(
            operations = transaction.operations.len(),
            signatures = transaction.signatures.len(),
            "decoded transaction envelope"
        );
        Self::new(transaction)
    }

    /// Decodes a base64 envelope.
    pub fn from_xdr_base64(encoded: &str) -> Result<Self> {
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| Error::Decode(format!("invalid base64 envelope: {e}")))?;
        Self::from_xdr(&bytes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::KeyPair;
    use crate::network::Network;
    use crate::operation::PaymentBuilder;
    use crate::transaction::{Account, TransactionBuilder};
    use crate::types::{Asset, Memo, TimeBounds};

    fn signed_transaction() -> Transaction {
        let signer = KeyPair::from_raw_seed(&[21u8; 32]);
        let mut builder = TransactionBuilder::new(Account::new(signer.clone(), 7))
            .network(Network::test())
            .add_operation(PaymentBuilder::new(KeyPair::from_raw_seed(&[22u8; 32]), Asset::native(), "42.5").build());
        let mut tx = builder.build().unwrap();
        tx.sign(&signer).unwrap();
        tx
    }

    #[test]
    fn unsigned_transaction_cannot_be_enveloped() {
        let signer = KeyPair::from_raw_seed(&[21u8; 32]);
        let mut builder = TransactionBuilder::new(Account::new(signer.clone(), 7))
            .network(Network::test())
            .add_operation(
                PaymentBuilder::new(KeyPair::from_raw_seed(&[22u8; 32]), Asset::native(), "1")
                    .build(),
            );
        let tx = builder.build().unwrap();
        assert!(matches!(
            TransactionEnvelope::new(tx.clone()),
            Err(Error::NotEnoughSignatures)
        ));
        assert!(matches!(
            tx.to_envelope_xdr(),
            Err(Error::NotEnoughSignatures)
        ));
    }

    #[test]
    fn envelope_roundtrip_preserves_everything() {
        let tx = signed_transaction();
        let encoded = tx.to_envelope_xdr().unwrap();
        let decoded = TransactionEnvelope::from_xdr(&encoded)
            .unwrap()
            .into_transaction();

        assert_eq!(decoded.source_account(), tx.source_account());
        assert_eq!(decoded.fee(), tx.fee());
        assert_eq!(decoded.sequence_number(), tx.sequence_number());
        assert_eq!(decoded.memo(), tx.memo());
        assert_eq!(decoded.time_bounds(), tx.time_bounds());
        assert_eq!(decoded.operations(), tx.operations());
        assert_eq!(decoded.signatures(), tx.signatures());
        assert!(decoded.network().is_none());
    }

    #[test]
    fn base64_decode_then_reencode_is_identical() {
        let tx = signed_transaction();
        let encoded = tx.to_envelope_xdr_base64().unwrap();
        let envelope = TransactionEnvelope::from_xdr_base64(&encoded).unwrap();
        assert_eq!(envelope.to_xdr_base64().unwrap(), encoded);
    }

    #[test]
    fn roundtrip_with_memo_and_time_bounds() {
        let signer = KeyPair::from_raw_seed(&[23u8; 32]);
        let mut builder = TransactionBuilder::new(Account::new(signer.clone(), 0))
            .network(Network::public())
            .add_operation(
                PaymentBuilder::new(KeyPair::from_raw_seed(&[24u8; 32]), Asset::native(), "5")
                    .build(),
            )
            .memo(Memo::text("rent").unwrap())
            .time_bounds(TimeBounds::new(100, 9_999_999).unwrap())
            .unwrap();
        let mut tx = builder.build().unwrap();
        tx.sign(&signer).unwrap();

        let decoded =
            Transaction::from_envelope_xdr_base64(&tx.to_envelope_xdr_base64().unwrap()).unwrap();
        assert_eq!(decoded.memo(), &Memo::text("rent").unwrap());
        assert_eq!(
            decoded.time_bounds(),
            Some(&TimeBounds::new(100, 9_999_999).unwrap())
        );
        assert_eq!(decoded.signatures(), tx.signatures());
    }

    #[test]
    fn preimage_signatures_survive_roundtrip_verbatim() {
        let mut tx = signed_transaction();
        tx.sign_preimage(b"the magic words");
        let decoded = Transaction::from_envelope_xdr(&tx.to_envelope_xdr().unwrap()).unwrap();
        assert_eq!(decoded.signatures().len(), 2);
        assert_eq!(decoded.signatures()[1].signature, b"the magic words");
    }

    #[test]
    fn garbage_base64_is_rejected() {
        assert!(matches!(
            TransactionEnvelope::from_xdr_base64("!!!not base64!!!"),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let tx = signed_transaction();
        let mut encoded = tx.to_envelope_xdr().unwrap();
        encoded.extend_from_slice(&[0, 0, 0, 0]);
        assert!(matches!(
            TransactionEnvelope::from_xdr(&encoded),
            Err(Error::Decode(_))
        ));
    }
}

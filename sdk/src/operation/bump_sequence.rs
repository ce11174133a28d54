//! Bump-sequence operation: jumps the source account's sequence number
//! forward, invalidating any transaction signed with a skipped number.

use crate::crypto::keys::KeyPair;
use crate::error::Result;
use crate::xdr::{XdrReader, XdrWriter};

use super::{Operation, OperationBody};

/// Sets the source account's sequence number to `bump_to` if it is higher
/// than the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpSequence {
    pub bump_to: i64,
}

impl BumpSequence {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) {
        writer.write_i64(self.bump_to);
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        Ok(Self {
            bump_to: reader.read_i64()?,
        })
    }
}

/// Builder for [`BumpSequence`] operations.
#[derive(Debug)]
pub struct BumpSequenceBuilder {
    bump_to: i64,
    source_account: Option<KeyPair>,
}

impl BumpSequenceBuilder {
    pub fn new(bump_to: i64) -> Self {
        Self {
            bump_to,
            source_account: None,
        }
    }

    /// Overrides the source account for this operation.
    pub fn source_account(mut self, source: KeyPair) -> Self {
        self.source_account = Some(source);
        self
    }

    pub fn build(self) -> Operation {
        Operation {
            source_account: self.source_account,
            body: OperationBody::BumpSequence(BumpSequence {
                bump_to: self.bump_to,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_roundtrip() {
        let op = BumpSequenceBuilder::new(i64::MAX)
            .source_account(KeyPair::from_raw_seed(&[14u8; 32]))
            .build();
        let mut w = XdrWriter::new();
        op.write_xdr(&mut w).unwrap();
        let bytes = w.into_bytes();
        let mut r = XdrReader::new(&bytes);
        assert_eq!(Operation::read_xdr(&mut r).unwrap(), op);
    }
}

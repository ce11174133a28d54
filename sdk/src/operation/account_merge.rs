//! Account-merge operation: deletes the source account, transferring its
//! remaining native balance to the destination.

use crate::crypto::keys::KeyPair;
use crate::error::Result;
use crate::xdr::{XdrReader, XdrWriter};

use super::{Operation, OperationBody};

/// Folds the source account into `destination`. The body is just the
/// destination account id; there is no wrapper struct on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMerge {
    /// Account receiving the merged balance.
    pub destination: KeyPair,
}

impl AccountMerge {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) {
        self.destination.write_xdr_public_key(writer);
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        Ok(Self {
            destination: KeyPair::read_xdr_public_key(reader)?,
        })
    }
}

/// Builder for [`AccountMerge`] operations.
#[derive(Debug)]
pub struct AccountMergeBuilder {
    destination: KeyPair,
    source_account: Option<KeyPair>,
}

impl AccountMergeBuilder {
    pub fn new(destination: KeyPair) -> Self {
        Self {
            destination,
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
            body: OperationBody::AccountMerge(AccountMerge {
                destination: self.destination,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_roundtrip() {
        let op = AccountMergeBuilder::new(KeyPair::from_raw_seed(&[10u8; 32]))
            .source_account(KeyPair::from_raw_seed(&[11u8; 32]))
            .build();
        let mut w = XdrWriter::new();
        op.write_xdr(&mut w).unwrap();
        let bytes = w.into_bytes();
        let mut r = XdrReader::new(&bytes);
        assert_eq!(Operation::read_xdr(&mut r).unwrap(), op);
    }
}

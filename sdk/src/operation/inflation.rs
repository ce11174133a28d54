//! Inflation operation: runs the network's inflation round. Carries no
//! fields; the body is the discriminant alone.

use crate::crypto::keys::KeyPair;

use super::{Operation, OperationBody};

/// Builder for inflation operations.
#[derive(Debug, Default)]
pub struct InflationBuilder {
    source_account: Option<KeyPair>,
}

impl InflationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the source account for this operation.
    pub fn source_account(mut self, source: KeyPair) -> Self {
        self.source_account = Some(source);
        self
    }

    pub fn build(self) -> Operation {
        Operation {
            source_account: self.source_account,
            body: OperationBody::Inflation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr::{XdrReader, XdrWriter};

    #[test]
    fn inflation_roundtrip() {
        let op = InflationBuilder::new().build();
        let mut w = XdrWriter::new();
        op.write_xdr(&mut w).unwrap();
        let bytes = w.into_bytes();
        // Presence flag + discriminant, nothing else.
        assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 9]);
        let mut r = XdrReader::new(&bytes);
        assert_eq!(Operation::read_xdr(&mut r).unwrap(), op);
    }

    #[test]
    fn inflation_with_source_roundtrip() {
        let op = InflationBuilder::new()
            .source_account(KeyPair::from_raw_seed(&[12u8; 32]))
            .build();
        let mut w = XdrWriter::new();
        op.write_xdr(&mut w).unwrap();
        let bytes = w.into_bytes();
        let mut r = XdrReader::new(&bytes);
        assert_eq!(Operation::read_xdr(&mut r).unwrap(), op);
    }
}

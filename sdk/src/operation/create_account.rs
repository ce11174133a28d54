//! Create-account operation: funds a new account with a starting balance
//! of the native asset.

use crate::crypto::keys::KeyPair;
use crate::error::Result;
use crate::xdr::{XdrReader, XdrWriter};

use super::{from_xdr_amount, to_xdr_amount, Operation, OperationBody};

/// Creates and funds a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccount {
    /// The account to create.
    pub destination: KeyPair,
    /// Initial native-asset balance, as a decimal string.
    pub starting_balance: String,
}

impl CreateAccount {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        self.destination.write_xdr_public_key(writer);
        writer.write_i64(to_xdr_amount(&self.starting_balance)?);
        Ok(())
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let destination = KeyPair::read_xdr_public_key(reader)?;
        let starting_balance = from_xdr_amount(reader.read_i64()?);
        Ok(Self {
            destination,
            starting_balance,
        })
    }
}

/// Builder for [`CreateAccount`] operations.
///
/// # Examples
///
/// ```
/// use meridian_sdk::crypto::keys::KeyPair;
/// use meridian_sdk::operation::CreateAccountBuilder;
///
/// let destination = KeyPair::random();
/// let op = CreateAccountBuilder::new(destination, "25.5").build();
/// assert!(op.source_account.is_none());
/// ```
#[derive(Debug)]
pub struct CreateAccountBuilder {
    destination: KeyPair,
    starting_balance: String,
    source_account: Option<KeyPair>,
}

impl CreateAccountBuilder {
    pub fn new(destination: KeyPair, starting_balance: impl Into<String>) -> Self {
        Self {
            destination,
            starting_balance: starting_balance.into(),
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
            body: OperationBody::CreateAccount(CreateAccount {
                destination: self.destination,
                starting_balance: self.starting_balance,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn roundtrip(op: &Operation) -> Operation {
        let mut w = XdrWriter::new();
        op.write_xdr(&mut w).unwrap();
        let bytes = w.into_bytes();
        let mut r = XdrReader::new(&bytes);
        Operation::read_xdr(&mut r).unwrap()
    }

    #[test]
    fn roundtrip_without_source() {
        let op = CreateAccountBuilder::new(KeyPair::from_raw_seed(&[1u8; 32]), "1000").build();
        assert_eq!(roundtrip(&op), op);
    }

    #[test]
    fn roundtrip_with_source_override() {
        let op = CreateAccountBuilder::new(KeyPair::from_raw_seed(&[1u8; 32]), "0.0000001")
            .source_account(KeyPair::from_raw_seed(&[2u8; 32]))
            .build();
        let restored = roundtrip(&op);
        assert_eq!(restored, op);
        assert!(restored.source_account.is_some());
    }

    #[test]
    fn overly_precise_balance_fails_at_encode() {
        let op = CreateAccountBuilder::new(KeyPair::from_raw_seed(&[1u8; 32]), "1.00000001").build();
        let mut w = XdrWriter::new();
        assert!(matches!(
            op.write_xdr(&mut w),
            Err(Error::InvalidAmount(_))
        ));
    }
}

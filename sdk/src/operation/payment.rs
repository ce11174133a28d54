//! Payment operation: sends an amount of an asset to a destination
//! account.

use crate::crypto::keys::KeyPair;
use crate::error::Result;
use crate::types::Asset;
use crate::xdr::{XdrReader, XdrWriter};

use super::{from_xdr_amount, to_xdr_amount, Operation, OperationBody};

/// Sends `amount` of `asset` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Account receiving the payment.
    pub destination: KeyPair,
    /// Asset to send.
    pub asset: Asset,
    /// Amount to send, as a decimal string.
    pub amount: String,
}

impl Payment {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        self.destination.write_xdr_public_key(writer);
        self.asset.write_xdr(writer);
        writer.write_i64(to_xdr_amount(&self.amount)?);
        Ok(())
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let destination = KeyPair::read_xdr_public_key(reader)?;
        let asset = Asset::read_xdr(reader)?;
        let amount = from_xdr_amount(reader.read_i64()?);
        Ok(Self {
            destination,
            asset,
            amount,
        })
    }
}

/// Builder for [`Payment`] operations.
#[derive(Debug)]
pub struct PaymentBuilder {
    destination: KeyPair,
    asset: Asset,
    amount: String,
    source_account: Option<KeyPair>,
}

impl PaymentBuilder {
    pub fn new(destination: KeyPair, asset: Asset, amount: impl Into<String>) -> Self {
        Self {
            destination,
            asset,
            amount: amount.into(),
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
            body: OperationBody::Payment(Payment {
                destination: self.destination,
                asset: self.asset,
                amount: self.amount,
            }),
        }
    }
}

//! Change-trust operation: creates, updates, or deletes a trustline.

use crate::crypto::keys::KeyPair;
use crate::error::Result;
use crate::types::Asset;
use crate::xdr::{XdrReader, XdrWriter};

use super::{from_xdr_amount, to_xdr_amount, Operation, OperationBody};

/// Declares how much of `asset` this account is willing to hold. A zero
/// limit deletes the trustline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTrust {
    /// The asset of the trustline.
    pub asset: Asset,
    /// Maximum amount this account will hold, as a decimal string.
    pub limit: String,
}

impl ChangeTrust {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        self.asset.write_xdr(writer);
        writer.write_i64(to_xdr_amount(&self.limit)?);
        Ok(())
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let asset = Asset::read_xdr(reader)?;
        let limit = from_xdr_amount(reader.read_i64()?);
        Ok(Self { asset, limit })
    }
}

/// Builder for [`ChangeTrust`] operations.
#[derive(Debug)]
pub struct ChangeTrustBuilder {
    asset: Asset,
    limit: String,
    source_account: Option<KeyPair>,
}

impl ChangeTrustBuilder {
    pub fn new(asset: Asset, limit: impl Into<String>) -> Self {
        Self {
            asset,
            limit: limit.into(),
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
            body: OperationBody::ChangeTrust(ChangeTrust {
                asset: self.asset,
                limit: self.limit,
            }),
        }
    }
}

//! Manage-data operation: attaches, updates, or removes a named data
//! entry on an account.

use crate::crypto::keys::KeyPair;
use crate::error::Result;
use crate::xdr::{XdrReader, XdrWriter};

use super::{Operation, OperationBody};

/// Sets the account data entry `name` to `value`, or deletes it when
/// `value` is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageData {
    /// Entry name, at most 64 bytes.
    pub name: String,
    /// Entry value, at most 64 bytes; `None` deletes the entry.
    pub value: Option<Vec<u8>>,
}

impl ManageData {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) {
        writer.write_string(&self.name);
        match &self.value {
            Some(value) => {
                writer.write_bool(true);
                writer.write_var(value);
            }
            None => writer.write_bool(false),
        }
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let name = reader.read_string()?;
        let value = if reader.read_bool()? {
            Some(reader.read_var()?)
        } else {
            None
        };
        Ok(Self { name, value })
    }
}

/// Builder for [`ManageData`] operations.
#[derive(Debug)]
pub struct ManageDataBuilder {
    name: String,
    value: Option<Vec<u8>>,
    source_account: Option<KeyPair>,
}

impl ManageDataBuilder {
    pub fn new(name: impl Into<String>, value: Option<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value,
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
            body: OperationBody::ManageData(ManageData {
                name: self.name,
                value: self.value,
            }),
        }
    }
}

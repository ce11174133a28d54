//! Set-options operation: adjusts account-level settings.
//!
//! Every field is optional and independently settable: account flags,
//! signing thresholds, the master key weight, the home domain, the
//! inflation destination, and one signer entry per operation. Each absent
//! field is encoded as a presence flag of zero and leaves the ledger value
//! untouched.

use crate::config::HOME_DOMAIN_MAX_BYTES;
use crate::crypto::keys::{KeyPair, SignerKey};
use crate::error::{Error, Result};
use crate::xdr::{XdrReader, XdrWriter};

use super::{Operation, OperationBody};

/// A signer entry: an authorization key and its voting weight. A weight of
/// zero removes the signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}

/// Adjusts account options. Unset fields are left unchanged by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetOptions {
    /// Account to receive this account's inflation votes.
    pub inflation_destination: Option<KeyPair>,
    /// Account flags to clear, as a bitmask.
    pub clear_flags: Option<u32>,
    /// Account flags to set, as a bitmask.
    pub set_flags: Option<u32>,
    /// New weight of the master key, 0-255.
    pub master_key_weight: Option<u32>,
    /// Threshold for low-security operations.
    pub low_threshold: Option<u32>,
    /// Threshold for medium-security operations.
    pub medium_threshold: Option<u32>,
    /// Threshold for high-security operations.
    pub high_threshold: Option<u32>,
    /// Home domain for federation lookups, at most 32 bytes.
    pub home_domain: Option<String>,
    /// Signer to add, update, or (at weight zero) remove.
    pub signer: Option<Signer>,
}

impl SetOptions {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) {
        match &self.inflation_destination {
            Some(destination) => {
                writer.write_bool(true);
                destination.write_xdr_public_key(writer);
            }
            None => writer.write_bool(false),
        }
        write_optional_u32(writer, self.clear_flags);
        write_optional_u32(writer, self.set_flags);
        write_optional_u32(writer, self.master_key_weight);
        write_optional_u32(writer, self.low_threshold);
        write_optional_u32(writer, self.medium_threshold);
        write_optional_u32(writer, self.high_threshold);
        match &self.home_domain {
            Some(domain) => {
                writer.write_bool(true);
                writer.write_string(domain);
            }
            None => writer.write_bool(false),
        }
        match &self.signer {
            Some(signer) => {
                writer.write_bool(true);
                signer.key.write_xdr(writer);
                writer.write_u32(signer.weight);
            }
            None => writer.write_bool(false),
        }
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let inflation_destination = if reader.read_bool()? {
            Some(KeyPair::read_xdr_public_key(reader)?)
        } else {
            None
        };
        let clear_flags = read_optional_u32(reader)?;
        let set_flags = read_optional_u32(reader)?;
        let master_key_weight = read_optional_u32(reader)?;
        let low_threshold = read_optional_u32(reader)?;
        let medium_threshold = read_optional_u32(reader)?;
        let high_threshold = read_optional_u32(reader)?;
        let home_domain = if reader.read_bool()? {
            Some(reader.read_string()?)
        } else {
            None
        };
        let signer = if reader.read_bool()? {
            let key = SignerKey::read_xdr(reader)?;
            let weight = reader.read_u32()?;
            Some(Signer { key, weight })
        } else {
            None
        };
        Ok(Self {
            inflation_destination,
            clear_flags,
            set_flags,
            master_key_weight,
            low_threshold,
            medium_threshold,
            high_threshold,
            home_domain,
            signer,
        })
    }
}

fn write_optional_u32(writer: &mut XdrWriter, value: Option<u32>) {
    match value {
        Some(value) => {
            writer.write_bool(true);
            writer.write_u32(value);
        }
        None => writer.write_bool(false),
    }
}

fn read_optional_u32(reader: &mut XdrReader<'_>) -> Result<Option<u32>> {
    if reader.read_bool()? {
        Ok(Some(reader.read_u32()?))
    } else {
        Ok(None)
    }
}

/// Builder for [`SetOptions`] operations.
///
/// `build` fails if the home domain exceeds 32 bytes.
#[derive(Debug, Default)]
pub struct SetOptionsBuilder {
    options: SetOptions,
    source_account: Option<KeyPair>,
}

impl SetOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inflation_destination(mut self, destination: KeyPair) -> Self {
        self.options.inflation_destination = Some(destination);
        self
    }

    pub fn clear_flags(mut self, flags: u32) -> Self {
        self.options.clear_flags = Some(flags);
        self
    }

    pub fn set_flags(mut self, flags: u32) -> Self {
        self.options.set_flags = Some(flags);
        self
    }

    pub fn master_key_weight(mut self, weight: u32) -> Self {
        self.options.master_key_weight = Some(weight);
        self
    }

    pub fn low_threshold(mut self, threshold: u32) -> Self {
        self.options.low_threshold = Some(threshold);
        self
    }

    pub fn medium_threshold(mut self, threshold: u32) -> Self {
        self.options.medium_threshold = Some(threshold);
        self
    }

    pub fn high_threshold(mut self, threshold: u32) -> Self {
        self.options.high_threshold = Some(threshold);
        self
    }

    pub fn home_domain(mut self, domain: impl Into<String>) -> Self {
        self.options.home_domain = Some(domain.into());
        self
    }

    pub fn signer(mut self, key: SignerKey, weight: u32) -> Self {
        self.options.signer = Some(Signer { key, weight });
        self
    }

    /// Overrides the source account for this operation.
    pub fn source_account(mut self, source: KeyPair) -> Self {
        self.source_account = Some(source);
        self
    }

    pub fn build(self) -> Result<Operation> {
        if let Some(domain) = &self.options.home_domain {
            if domain.len() > HOME_DOMAIN_MAX_BYTES {
                return Err(Error::HomeDomainTooLong(domain.len()));
            }
        }
        Ok(Operation {
            source_account: self.source_account,
            body: OperationBody::SetOptions(self.options),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(op: &Operation) -> Operation {
        let mut w = XdrWriter::new();
        op.write_xdr(&mut w).unwrap();
        let bytes = w.into_bytes();
        let mut r = XdrReader::new(&bytes);
        Operation::read_xdr(&mut r).unwrap()
    }

    #[test]
    fn empty_options_roundtrip() {
        let op = SetOptionsBuilder::new().build().unwrap();
        let restored = roundtrip(&op);
        assert_eq!(restored, op);
        match restored.body {
            OperationBody::SetOptions(options) => assert_eq!(options, SetOptions::default()),
            _ => panic!("expected set options body"),
        }
    }

    #[test]
    fn fully_populated_options_roundtrip() {
        let op = SetOptionsBuilder::new()
            .inflation_destination(KeyPair::from_raw_seed(&[1u8; 32]))
            .clear_flags(0b001)
            .set_flags(0b110)
            .master_key_weight(255)
            .low_threshold(1)
            .medium_threshold(2)
            .high_threshold(3)
            .home_domain("meridian.example.org")
            .signer(SignerKey::sha256_hash([9u8; 32]), 10)
            .source_account(KeyPair::from_raw_seed(&[2u8; 32]))
            .build()
            .unwrap();
        assert_eq!(roundtrip(&op), op);
    }

    #[test]
    fn pre_auth_tx_signer_roundtrip() {
        let op = SetOptionsBuilder::new()
            .signer(SignerKey::pre_auth_tx([7u8; 32]), 1)
            .build()
            .unwrap();
        assert_eq!(roundtrip(&op), op);
    }

    #[test]
    fn long_home_domain_is_rejected() {
        let result = SetOptionsBuilder::new()
            .home_domain("a-very-long-home-domain-well-past-the-limit.example.org")
            .build();
        assert!(matches!(result, Err(Error::HomeDomainTooLong(_))));
    }
}

//! Allow-trust operation: an issuer authorizing (or revoking) another
//! account's trustline for one of its assets.

use crate::crypto::hash::{padded_bytes, trimmed_string};
use crate::crypto::keys::KeyPair;
use crate::error::{Error, Result};
use crate::xdr::{XdrReader, XdrWriter};

use super::{Operation, OperationBody};

const ASSET_TYPE_CREDIT_ALPHANUM4: u32 = 1;
const ASSET_TYPE_CREDIT_ALPHANUM12: u32 = 2;

/// Authorizes `trustor` to hold the source account's asset `asset_code`.
///
/// The asset is identified by code alone; the issuer is implicitly the
/// operation's source account, so the wire carries a code-only union
/// rather than a full asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowTrust {
    /// The account whose trustline is being authorized.
    pub trustor: KeyPair,
    /// Code of the asset being authorized, 1-12 characters.
    pub asset_code: String,
    /// Whether the trustline is authorized.
    pub authorize: bool,
}

impl AllowTrust {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        self.trustor.write_xdr_public_key(writer);
        match self.asset_code.len() {
            1..=4 => {
                writer.write_u32(ASSET_TYPE_CREDIT_ALPHANUM4);
                writer.write_fixed(&padded_bytes(self.asset_code.as_bytes(), 4));
            }
            5..=12 => {
                writer.write_u32(ASSET_TYPE_CREDIT_ALPHANUM12);
                writer.write_fixed(&padded_bytes(self.asset_code.as_bytes(), 12));
            }
            len => return Err(Error::AssetCodeLength(len)),
        }
        writer.write_bool(self.authorize);
        Ok(())
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let trustor = KeyPair::read_xdr_public_key(reader)?;
        let asset_code = match reader.read_u32()? {
            ASSET_TYPE_CREDIT_ALPHANUM4 => trimmed_string(&reader.read_fixed(4)?),
            ASSET_TYPE_CREDIT_ALPHANUM12 => trimmed_string(&reader.read_fixed(12)?),
            other => {
                return Err(Error::Decode(format!(
                    "unknown allow-trust asset type {other}"
                )))
            }
        };
        let authorize = reader.read_bool()?;
        Ok(Self {
            trustor,
            asset_code,
            authorize,
        })
    }
}

/// Builder for [`AllowTrust`] operations.
#[derive(Debug)]
pub struct AllowTrustBuilder {
    trustor: KeyPair,
    asset_code: String,
    authorize: bool,
    source_account: Option<KeyPair>,
}

impl AllowTrustBuilder {
    pub fn new(trustor: KeyPair, asset_code: impl Into<String>, authorize: bool) -> Self {
        Self {
            trustor,
            asset_code: asset_code.into(),
            authorize,
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
            body: OperationBody::AllowTrust(AllowTrust {
                trustor: self.trustor,
                asset_code: self.asset_code,
                authorize: self.authorize,
            }),
        }
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
    fn short_code_roundtrip() {
        let op = AllowTrustBuilder::new(KeyPair::from_raw_seed(&[8u8; 32]), "USD", true).build();
        assert_eq!(roundtrip(&op), op);
    }

    #[test]
    fn long_code_revocation_roundtrip() {
        let op = AllowTrustBuilder::new(KeyPair::from_raw_seed(&[8u8; 32]), "MOONSTONE", false)
            .source_account(KeyPair::from_raw_seed(&[9u8; 32]))
            .build();
        let restored = roundtrip(&op);
        assert_eq!(restored, op);
        match restored.body {
            OperationBody::AllowTrust(allow_trust) => {
                assert_eq!(allow_trust.asset_code, "MOONSTONE");
                assert!(!allow_trust.authorize);
            }
            _ => panic!("expected allow trust body"),
        }
    }

    #[test]
    fn oversized_code_fails_at_encode() {
        let op =
            AllowTrustBuilder::new(KeyPair::from_raw_seed(&[8u8; 32]), "THIRTEENCHARS", true)
                .build();
        let mut w = XdrWriter::new();
        assert!(matches!(
            op.write_xdr(&mut w),
            Err(Error::AssetCodeLength(13))
        ));
    }
}

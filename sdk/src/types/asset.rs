//! Asset references.
//!
//! An [`Asset`] names either the native ledger currency or a credit issued
//! by an account. Issued assets come in two wire shapes selected by code
//! length: a 4-byte code field for codes of 1-4 characters, and a 12-byte
//! field for 5-12. Codes are zero-padded on the wire and trimmed at the
//! first zero byte on decode.

use crate::crypto::hash::{padded_bytes, trimmed_string};
use crate::crypto::keys::KeyPair;
use crate::error::{Error, Result};
use crate::xdr::{XdrReader, XdrWriter};

const ASSET_TYPE_NATIVE: u32 = 0;
const ASSET_TYPE_CREDIT_ALPHANUM4: u32 = 1;
const ASSET_TYPE_CREDIT_ALPHANUM12: u32 = 2;

/// A ledger asset: the native currency or an issued credit.
///
/// Equality is (variant, code, issuer public key); two references to the
/// same issued asset compare equal regardless of how the issuer keypair was
/// obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// The native currency. No code, no issuer.
    Native,
    /// An issued credit with a 1-4 character code.
    CreditAlphaNum4 { code: String, issuer: KeyPair },
    /// An issued credit with a 5-12 character code.
    CreditAlphaNum12 { code: String, issuer: KeyPair },
}

impl Asset {
    pub fn native() -> Self {
        Asset::Native
    }

    /// Builds an issued asset, selecting the variant by code length:
    /// 1-4 characters for the short form, 5-12 for the long one.
    pub fn credit(code: impl Into<String>, issuer: KeyPair) -> Result<Self> {
        let code = code.into();
        match code.len() {
            1..=4 => Ok(Asset::CreditAlphaNum4 { code, issuer }),
            5..=12 => Ok(Asset::CreditAlphaNum12 { code, issuer }),
            len => Err(Error::AssetCodeLength(len)),
        }
    }

    /// Builds the short-code variant, rejecting codes outside 1-4
    /// characters.
    pub fn alpha_num4(code: impl Into<String>, issuer: KeyPair) -> Result<Self> {
        let code = code.into();
        match code.len() {
            1..=4 => Ok(Asset::CreditAlphaNum4 { code, issuer }),
            len => Err(Error::AssetCodeLength(len)),
        }
    }

    /// Builds the long-code variant, rejecting codes outside 5-12
    /// characters.
    pub fn alpha_num12(code: impl Into<String>, issuer: KeyPair) -> Result<Self> {
        let code = code.into();
        match code.len() {
            5..=12 => Ok(Asset::CreditAlphaNum12 { code, issuer }),
            len => Err(Error::AssetCodeLength(len)),
        }
    }

    /// Factory used when populating typed fields from ledger query
    /// responses: dispatches on the `"native"` type string, otherwise
    /// resolves the issuer account id and selects the variant by code
    /// length.
    pub fn create(asset_type: &str, code: &str, issuer: &str) -> Result<Self> {
        if asset_type == "native" {
            return Ok(Asset::Native);
        }
        let issuer = KeyPair::from_account_id(issuer)?;
        Self::credit(code, issuer)
    }

    /// The type string used in ledger query responses.
    pub fn asset_type(&self) -> &'static str {
        match self {
            Asset::Native => "native",
            Asset::CreditAlphaNum4 { .. } => "credit_alphanum4",
            Asset::CreditAlphaNum12 { .. } => "credit_alphanum12",
        }
    }

    /// The asset code, absent for the native asset.
    pub fn code(&self) -> Option<&str> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphaNum4 { code, .. } | Asset::CreditAlphaNum12 { code, .. } => {
                Some(code)
            }
        }
    }

    /// The issuer, absent for the native asset.
    pub fn issuer(&self) -> Option<&KeyPair> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphaNum4 { issuer, .. } | Asset::CreditAlphaNum12 { issuer, .. } => {
                Some(issuer)
            }
        }
    }

    pub fn write_xdr(&self, writer: &mut XdrWriter) {
        match self {
            Asset::Native => writer.write_u32(ASSET_TYPE_NATIVE),
            Asset::CreditAlphaNum4 { code, issuer } => {
                writer.write_u32(ASSET_TYPE_CREDIT_ALPHANUM4);
                writer.write_fixed(&padded_bytes(code.as_bytes(), 4));
                issuer.write_xdr_public_key(writer);
            }
            Asset::CreditAlphaNum12 { code, issuer } => {
                writer.write_u32(ASSET_TYPE_CREDIT_ALPHANUM12);
                writer.write_fixed(&padded_bytes(code.as_bytes(), 12));
                issuer.write_xdr_public_key(writer);
            }
        }
    }

    pub fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        match reader.read_u32()? {
            ASSET_TYPE_NATIVE => Ok(Asset::Native),
            ASSET_TYPE_CREDIT_ALPHANUM4 => {
                let code = trimmed_string(&reader.read_fixed(4)?);
                let issuer = KeyPair::read_xdr_public_key(reader)?;
                Ok(Asset::CreditAlphaNum4 { code, issuer })
            }
            ASSET_TYPE_CREDIT_ALPHANUM12 => {
                let code = trimmed_string(&reader.read_fixed(12)?);
                let issuer = KeyPair::read_xdr_public_key(reader)?;
                Ok(Asset::CreditAlphaNum12 { code, issuer })
            }
            other => Err(Error::Decode(format!("unknown asset type {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> KeyPair {
        KeyPair::from_raw_seed(&[11u8; 32])
    }

    fn roundtrip(asset: &Asset) -> Asset {
        let mut w = XdrWriter::new();
        asset.write_xdr(&mut w);
        let bytes = w.into_bytes();
        let mut r = XdrReader::new(&bytes);
        Asset::read_xdr(&mut r).unwrap()
    }

    #[test]
    fn native_roundtrip() {
        let asset = Asset::native();
        assert_eq!(roundtrip(&asset), asset);
    }

    #[test]
    fn native_encodes_as_bare_discriminant() {
        let mut w = XdrWriter::new();
        Asset::native().write_xdr(&mut w);
        assert_eq!(w.into_bytes(), [0, 0, 0, 0]);
    }

    #[test]
    fn short_code_roundtrip() {
        let asset = Asset::credit("USD", issuer()).unwrap();
        let restored = roundtrip(&asset);
        assert_eq!(restored, asset);
        assert_eq!(restored.code(), Some("USD"));
        assert_eq!(restored.asset_type(), "credit_alphanum4");
    }

    #[test]
    fn long_code_roundtrip() {
        let asset = Asset::credit("SILVERCOIN", issuer()).unwrap();
        let restored = roundtrip(&asset);
        assert_eq!(restored, asset);
        assert_eq!(restored.asset_type(), "credit_alphanum12");
    }

    #[test]
    fn code_length_selects_variant() {
        assert!(matches!(
            Asset::credit("USDA", issuer()).unwrap(),
            Asset::CreditAlphaNum4 { .. }
        ));
        assert!(matches!(
            Asset::credit("USDAB", issuer()).unwrap(),
            Asset::CreditAlphaNum12 { .. }
        ));
    }

    #[test]
    fn invalid_code_lengths_rejected() {
        assert!(matches!(
            Asset::credit("", issuer()),
            Err(Error::AssetCodeLength(0))
        ));
        assert!(matches!(
            Asset::credit("THIRTEENCHARS", issuer()),
            Err(Error::AssetCodeLength(13))
        ));
        assert!(matches!(
            Asset::alpha_num4("FIVER", issuer()),
            Err(Error::AssetCodeLength(5))
        ));
        assert!(matches!(
            Asset::alpha_num12("USD", issuer()),
            Err(Error::AssetCodeLength(3))
        ));
    }

    #[test]
    fn create_factory_dispatches_on_type_string() {
        assert_eq!(Asset::create("native", "", "").unwrap(), Asset::Native);

        let issuer = issuer();
        let created = Asset::create("credit_alphanum4", "EUR", &issuer.account_id()).unwrap();
        assert_eq!(created, Asset::credit("EUR", issuer).unwrap());
    }

    #[test]
    fn equality_covers_variant_code_and_issuer() {
        let a = issuer();
        let b = KeyPair::from_raw_seed(&[12u8; 32]);

        assert_eq!(Asset::native(), Asset::native());
        assert_eq!(
            Asset::credit("USD", a.clone()).unwrap(),
            Asset::credit("USD", a.clone()).unwrap()
        );
        assert_ne!(
            Asset::credit("USD", a.clone()).unwrap(),
            Asset::credit("EUR", a.clone()).unwrap()
        );
        assert_ne!(
            Asset::credit("USD", a.clone()).unwrap(),
            Asset::credit("USD", b).unwrap()
        );
        assert_ne!(Asset::native(), Asset::credit("USD", a).unwrap());
    }

    #[test]
    fn unknown_discriminant_fails_decode() {
        let mut w = XdrWriter::new();
        w.write_u32(7);
        let bytes = w.into_bytes();
        let mut r = XdrReader::new(&bytes);
        assert!(matches!(Asset::read_xdr(&mut r), Err(Error::Decode(_))));
    }
}

//! # Operation Model
//!
//! One variant per ledger action. An [`Operation`] pairs an optional
//! per-operation source account with an [`OperationBody`], the tagged union
//! the wire format encodes. When the source override is absent, the ledger
//! applies the owning transaction's source account.
//!
//! Each operation kind lives in its own file with its domain fields, its
//! body codec, and a builder that assembles a full `Operation`:
//!
//! - **create_account** -- fund a new account.
//! - **payment** -- send an asset.
//! - **path_payment** -- send through a conversion path.
//! - **manage_offer** / **create_passive_offer** -- order-book offers.
//! - **set_options** -- account flags, thresholds, signers, home domain.
//! - **change_trust** / **allow_trust** -- trustline management.
//! - **account_merge** -- fold one account into another.
//! - **inflation** -- run the inflation round.
//! - **manage_data** -- attach key/value data to an account.
//! - **bump_sequence** -- jump the account sequence number.
//!
//! ## Amounts
//!
//! Ledger amounts are fixed-point: the wire carries a signed 64-bit integer
//! equal to the decimal value times 10^7. Operations keep amounts as decimal
//! strings and convert at the codec boundary, so a string with more than 7
//! fractional digits fails at encode time, not at construction.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::config;
use crate::crypto::keys::KeyPair;
use crate::error::{Error, Result};
use crate::xdr::{XdrReader, XdrWriter};

mod account_merge;
mod allow_trust;
mod bump_sequence;
mod change_trust;
mod create_account;
mod create_passive_offer;
mod inflation;
mod manage_data;
mod manage_offer;
mod path_payment;
mod payment;
mod set_options;

pub use account_merge::{AccountMerge, AccountMergeBuilder};
pub use allow_trust::{AllowTrust, AllowTrustBuilder};
pub use bump_sequence::{BumpSequence, BumpSequenceBuilder};
pub use change_trust::{ChangeTrust, ChangeTrustBuilder};
pub use create_account::{CreateAccount, CreateAccountBuilder};
pub use create_passive_offer::{CreatePassiveOffer, CreatePassiveOfferBuilder};
pub use inflation::InflationBuilder;
pub use manage_data::{ManageData, ManageDataBuilder};
pub use manage_offer::{ManageOffer, ManageOfferBuilder};
pub use path_payment::{PathPayment, PathPaymentBuilder};
pub use payment::{Payment, PaymentBuilder};
pub use set_options::{SetOptions, SetOptionsBuilder};

const OPERATION_TYPE_CREATE_ACCOUNT: u32 = 0;
const OPERATION_TYPE_PAYMENT: u32 = 1;
const OPERATION_TYPE_PATH_PAYMENT: u32 = 2;
const OPERATION_TYPE_MANAGE_OFFER: u32 = 3;
const OPERATION_TYPE_CREATE_PASSIVE_OFFER: u32 = 4;
const OPERATION_TYPE_SET_OPTIONS: u32 = 5;
const OPERATION_TYPE_CHANGE_TRUST: u32 = 6;
const OPERATION_TYPE_ALLOW_TRUST: u32 = 7;
const OPERATION_TYPE_ACCOUNT_MERGE: u32 = 8;
const OPERATION_TYPE_INFLATION: u32 = 9;
const OPERATION_TYPE_MANAGE_DATA: u32 = 10;
const OPERATION_TYPE_BUMP_SEQUENCE: u32 = 11;

// ---------------------------------------------------------------------------
// Fixed-point amounts
// ---------------------------------------------------------------------------

/// Converts a decimal amount string to its wire form: the value scaled by
/// 10^7 as a signed 64-bit integer.
///
/// The scaled result must be an exact integer; more than 7 fractional
/// digits is an error, as is anything outside the `i64` range.
///
/// # Examples
///
/// ```
/// use meridian_sdk::operation::to_xdr_amount;
///
/// assert_eq!(to_xdr_amount("10.1234567").unwrap(), 101_234_567);
/// assert!(to_xdr_amount("10.12345678").is_err());
/// ```
pub fn to_xdr_amount(value: &str) -> Result<i64> {
    let invalid = || Error::InvalidAmount(value.to_string());
    let decimal = Decimal::from_str(value).map_err(|_| invalid())?;
    let scaled = decimal * Decimal::from(config::AMOUNT_SCALE);
    if !scaled.fract().is_zero() {
        return Err(invalid());
    }
    scaled.to_i64().ok_or_else(invalid)
}

/// Converts a wire amount back to its canonical decimal string, with
/// trailing zeros normalized away.
///
/// # Examples
///
/// ```
/// use meridian_sdk::operation::from_xdr_amount;
///
/// assert_eq!(from_xdr_amount(101_234_567), "10.1234567");
/// assert_eq!(from_xdr_amount(1_000_000_000), "100");
/// ```
pub fn from_xdr_amount(value: i64) -> String {
    (Decimal::from(value) / Decimal::from(config::AMOUNT_SCALE))
        .normalize()
        .to_string()
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// One ledger action, optionally with its own source account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Overrides the transaction's source account for this operation only.
    pub source_account: Option<KeyPair>,
    pub body: OperationBody,
}

impl Operation {
    /// Wraps a body with no source-account override.
    pub fn new(body: OperationBody) -> Self {
        Self {
            source_account: None,
            body,
        }
    }

    pub fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        match &self.source_account {
            Some(source) => {
                writer.write_bool(true);
                source.write_xdr_public_key(writer);
            }
            None => writer.write_bool(false),
        }
        self.body.write_xdr(writer)
    }

    pub fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let source_account = if reader.read_bool()? {
            Some(KeyPair::read_xdr_public_key(reader)?)
        } else {
            None
        };
        let body = OperationBody::read_xdr(reader)?;
        Ok(Self {
            source_account,
            body,
        })
    }

    /// Base64 form of the encoded operation, for embedding in text
    /// protocols.
    pub fn to_xdr_base64(&self) -> Result<String> {
        let mut writer = XdrWriter::new();
        self.write_xdr(&mut writer)?;
        Ok(BASE64.encode(writer.into_bytes()))
    }
}

/// The tagged union of all operation kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationBody {
    CreateAccount(CreateAccount),
    Payment(Payment),
    PathPayment(PathPayment),
    ManageOffer(ManageOffer),
    CreatePassiveOffer(CreatePassiveOffer),
    SetOptions(SetOptions),
    ChangeTrust(ChangeTrust),
    AllowTrust(AllowTrust),
    AccountMerge(AccountMerge),
    Inflation,
    ManageData(ManageData),
    BumpSequence(BumpSequence),
}

impl OperationBody {
    fn discriminant(&self) -> u32 {
        match self {
            OperationBody::CreateAccount(_) => OPERATION_TYPE_CREATE_ACCOUNT,
            OperationBody::Payment(_) => OPERATION_TYPE_PAYMENT,
            OperationBody::PathPayment(_) => OPERATION_TYPE_PATH_PAYMENT,
            OperationBody::ManageOffer(_) => OPERATION_TYPE_MANAGE_OFFER,
            OperationBody::CreatePassiveOffer(_) => OPERATION_TYPE_CREATE_PASSIVE_OFFER,
            OperationBody::SetOptions(_) => OPERATION_TYPE_SET_OPTIONS,
            OperationBody::ChangeTrust(_) => OPERATION_TYPE_CHANGE_TRUST,
            OperationBody::AllowTrust(_) => OPERATION_TYPE_ALLOW_TRUST,
            OperationBody::AccountMerge(_) => OPERATION_TYPE_ACCOUNT_MERGE,
            OperationBody::Inflation => OPERATION_TYPE_INFLATION,
            OperationBody::ManageData(_) => OPERATION_TYPE_MANAGE_DATA,
            OperationBody::BumpSequence(_) => OPERATION_TYPE_BUMP_SEQUENCE,
        }
    }

    pub fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        writer.write_u32(self.discriminant());
        match self {
            OperationBody::CreateAccount(op) => op.write_xdr(writer),
            OperationBody::Payment(op) => op.write_xdr(writer),
            OperationBody::PathPayment(op) => op.write_xdr(writer),
            OperationBody::ManageOffer(op) => op.write_xdr(writer),
            OperationBody::CreatePassiveOffer(op) => op.write_xdr(writer),
            OperationBody::SetOptions(op) => {
                op.write_xdr(writer);
                Ok(())
            }
            OperationBody::ChangeTrust(op) => op.write_xdr(writer),
            OperationBody::AllowTrust(op) => op.write_xdr(writer),
            OperationBody::AccountMerge(op) => {
                op.write_xdr(writer);
                Ok(())
            }
            OperationBody::Inflation => Ok(()),
            OperationBody::ManageData(op) => {
                op.write_xdr(writer);
                Ok(())
            }
            OperationBody::BumpSequence(op) => {
                op.write_xdr(writer);
                Ok(())
            }
        }
    }

    pub fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        match reader.read_u32()? {
            OPERATION_TYPE_CREATE_ACCOUNT => {
                Ok(OperationBody::CreateAccount(CreateAccount::read_xdr(reader)?))
            }
            OPERATION_TYPE_PAYMENT => Ok(OperationBody::Payment(Payment::read_xdr(reader)?)),
            OPERATION_TYPE_PATH_PAYMENT => {
                Ok(OperationBody::PathPayment(PathPayment::read_xdr(reader)?))
            }
            OPERATION_TYPE_MANAGE_OFFER => {
                Ok(OperationBody::ManageOffer(ManageOffer::read_xdr(reader)?))
            }
            OPERATION_TYPE_CREATE_PASSIVE_OFFER => Ok(OperationBody::CreatePassiveOffer(
                CreatePassiveOffer::read_xdr(reader)?,
            )),
            OPERATION_TYPE_SET_OPTIONS => {
                Ok(OperationBody::SetOptions(SetOptions::read_xdr(reader)?))
            }
            OPERATION_TYPE_CHANGE_TRUST => {
                Ok(OperationBody::ChangeTrust(ChangeTrust::read_xdr(reader)?))
            }
            OPERATION_TYPE_ALLOW_TRUST => {
                Ok(OperationBody::AllowTrust(AllowTrust::read_xdr(reader)?))
            }
            OPERATION_TYPE_ACCOUNT_MERGE => {
                Ok(OperationBody::AccountMerge(AccountMerge::read_xdr(reader)?))
            }
            OPERATION_TYPE_INFLATION => Ok(OperationBody::Inflation),
            OPERATION_TYPE_MANAGE_DATA => {
                Ok(OperationBody::ManageData(ManageData::read_xdr(reader)?))
            }
            OPERATION_TYPE_BUMP_SEQUENCE => {
                Ok(OperationBody::BumpSequence(BumpSequence::read_xdr(reader)?))
            }
            other => Err(Error::Decode(format!("unknown operation type {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

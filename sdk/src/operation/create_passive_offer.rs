//! Create-passive-offer operation: like a regular offer, but one that does
//! not take an existing offer at the same price.

use crate::crypto::keys::KeyPair;
use crate::error::{Error, Result};
use crate::types::{Asset, Price};
use crate::xdr::{XdrReader, XdrWriter};

use super::{from_xdr_amount, to_xdr_amount, Operation, OperationBody};

/// A passive order-book offer. Same fields as a new managed offer, minus
/// the offer id; passive offers cannot be updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePassiveOffer {
    pub selling: Asset,
    pub buying: Asset,
    /// Amount of `selling` being sold, as a decimal string.
    pub amount: String,
    /// Price of one unit of `selling` in terms of `buying`, as a decimal
    /// string.
    pub price: String,
}

impl CreatePassiveOffer {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        self.selling.write_xdr(writer);
        self.buying.write_xdr(writer);
        writer.write_i64(to_xdr_amount(&self.amount)?);
        Price::from_string(&self.price)?.write_xdr(writer);
        Ok(())
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let selling = Asset::read_xdr(reader)?;
        let buying = Asset::read_xdr(reader)?;
        let amount = from_xdr_amount(reader.read_i64()?);
        let price = Price::read_xdr(reader)?;
        if price.denominator == 0 {
            return Err(Error::Decode("price denominator is zero".into()));
        }
        let price = price.to_decimal_string();
        Ok(Self {
            selling,
            buying,
            amount,
            price,
        })
    }
}

/// Builder for [`CreatePassiveOffer`] operations.
#[derive(Debug)]
pub struct CreatePassiveOfferBuilder {
    selling: Asset,
    buying: Asset,
    amount: String,
    price: String,
    source_account: Option<KeyPair>,
}

impl CreatePassiveOfferBuilder {
    pub fn new(
        selling: Asset,
        buying: Asset,
        amount: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            selling,
            buying,
            amount: amount.into(),
            price: price.into(),
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
            body: OperationBody::CreatePassiveOffer(CreatePassiveOffer {
                selling: self.selling,
                buying: self.buying,
                amount: self.amount,
                price: self.price,
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
    fn passive_offer_roundtrip() {
        let issuer = KeyPair::from_raw_seed(&[4u8; 32]);
        let op = CreatePassiveOfferBuilder::new(
            Asset::credit("USD", issuer.clone()).unwrap(),
            Asset::credit("GOLDBARS", issuer).unwrap(),
            "12.5",
            "0.25",
        )
        .source_account(KeyPair::from_raw_seed(&[5u8; 32]))
        .build();
        assert_eq!(roundtrip(&op), op);
    }
}

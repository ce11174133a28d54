//! Manage-offer operation: creates, updates, or deletes an order-book
//! offer.

use crate::crypto::keys::KeyPair;
use crate::error::{Error, Result};
use crate::types::{Asset, Price};
use crate::xdr::{XdrReader, XdrWriter};

use super::{from_xdr_amount, to_xdr_amount, Operation, OperationBody};

/// An order-book offer to sell `amount` of `selling` at `price` units of
/// `buying` per unit sold.
///
/// An `offer_id` of zero creates a new offer; a nonzero id updates (or,
/// with a zero amount, deletes) the existing offer. The price travels on
/// the wire as a 32-bit fraction, so decoding renders it back as a decimal
/// string, lossily when the fraction does not terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageOffer {
    pub selling: Asset,
    pub buying: Asset,
    /// Amount of `selling` being sold, as a decimal string.
    pub amount: String,
    /// Price of one unit of `selling` in terms of `buying`, as a decimal
    /// string.
    pub price: String,
    /// Zero for a new offer, otherwise the id of the offer to change.
    pub offer_id: u64,
}

impl ManageOffer {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        self.selling.write_xdr(writer);
        self.buying.write_xdr(writer);
        writer.write_i64(to_xdr_amount(&self.amount)?);
        Price::from_string(&self.price)?.write_xdr(writer);
        writer.write_u64(self.offer_id);
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
        let offer_id = reader.read_u64()?;
        Ok(Self {
            selling,
            buying,
            amount,
            price,
            offer_id,
        })
    }
}

/// Builder for [`ManageOffer`] operations.
#[derive(Debug)]
pub struct ManageOfferBuilder {
    selling: Asset,
    buying: Asset,
    amount: String,
    price: String,
    offer_id: u64,
    source_account: Option<KeyPair>,
}

impl ManageOfferBuilder {
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
            offer_id: 0,
            source_account: None,
        }
    }

    /// Targets an existing offer instead of creating a new one.
    pub fn offer_id(mut self, offer_id: u64) -> Self {
        self.offer_id = offer_id;
        self
    }

    /// Overrides the source account for this operation.
    pub fn source_account(mut self, source: KeyPair) -> Self {
        self.source_account = Some(source);
        self
    }

    pub fn build(self) -> Operation {
        Operation {
            source_account: self.source_account,
            body: OperationBody::ManageOffer(ManageOffer {
                selling: self.selling,
                buying: self.buying,
                amount: self.amount,
                price: self.price,
                offer_id: self.offer_id,
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

    fn issuer(tag: u8) -> KeyPair {
        KeyPair::from_raw_seed(&[tag; 32])
    }

    #[test]
    fn new_offer_roundtrip() {
        let op = ManageOfferBuilder::new(
            Asset::native(),
            Asset::credit("USD", issuer(1)).unwrap(),
            "1000",
            "0.5",
        )
        .build();
        assert_eq!(roundtrip(&op), op);
    }

    #[test]
    fn update_offer_with_source_roundtrip() {
        let op = ManageOfferBuilder::new(
            Asset::credit("EUR", issuer(1)).unwrap(),
            Asset::native(),
            "3.25",
            "1.25",
        )
        .offer_id(77)
        .source_account(issuer(2))
        .build();
        let restored = roundtrip(&op);
        assert_eq!(restored, op);
        match restored.body {
            OperationBody::ManageOffer(offer) => {
                assert_eq!(offer.offer_id, 77);
                assert_eq!(offer.price, "1.25");
            }
            _ => panic!("expected manage offer body"),
        }
    }

    #[test]
    fn unparseable_price_fails_at_encode() {
        let op = ManageOfferBuilder::new(Asset::native(), Asset::native(), "1", "one half").build();
        let mut w = XdrWriter::new();
        assert!(matches!(op.write_xdr(&mut w), Err(Error::InvalidPrice(_))));
    }
}

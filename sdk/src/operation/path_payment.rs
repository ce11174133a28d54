//! Path payment: sends one asset, delivers another, converting through the
//! order books along a path of at most five intermediate assets.

use crate::config::MAX_PATH_LENGTH;
use crate::crypto::keys::KeyPair;
use crate::error::{Error, Result};
use crate::types::Asset;
use crate::xdr::{XdrReader, XdrWriter};

use super::{from_xdr_amount, to_xdr_amount, Operation, OperationBody};

/// Cross-asset payment through a conversion path.
///
/// The sender is debited at most `send_max` of `send_asset`; the
/// destination receives exactly `dest_amount` of `dest_asset`. `path` lists
/// the intermediate assets, in order, excluding the endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPayment {
    pub send_asset: Asset,
    /// Upper bound on what the sender pays, as a decimal string.
    pub send_max: String,
    pub destination: KeyPair,
    pub dest_asset: Asset,
    /// Exact amount delivered to the destination, as a decimal string.
    pub dest_amount: String,
    /// Intermediate conversion assets, at most five.
    pub path: Vec<Asset>,
}

impl PathPayment {
    pub(super) fn write_xdr(&self, writer: &mut XdrWriter) -> Result<()> {
        self.send_asset.write_xdr(writer);
        writer.write_i64(to_xdr_amount(&self.send_max)?);
        self.destination.write_xdr_public_key(writer);
        self.dest_asset.write_xdr(writer);
        writer.write_i64(to_xdr_amount(&self.dest_amount)?);
        writer.write_u32(self.path.len() as u32);
        for asset in &self.path {
            asset.write_xdr(writer);
        }
        Ok(())
    }

    pub(super) fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let send_asset = Asset::read_xdr(reader)?;
        let send_max = from_xdr_amount(reader.read_i64()?);
        let destination = KeyPair::read_xdr_public_key(reader)?;
        let dest_asset = Asset::read_xdr(reader)?;
        let dest_amount = from_xdr_amount(reader.read_i64()?);
        let count = reader.read_u32()? as usize;
        let mut path = Vec::with_capacity(count.min(MAX_PATH_LENGTH));
        for _ in 0..count {
            path.push(Asset::read_xdr(reader)?);
        }
        Ok(Self {
            send_asset,
            send_max,
            destination,
            dest_asset,
            dest_amount,
            path,
        })
    }
}

/// Builder for [`PathPayment`] operations.
///
/// `build` fails if the path holds more than five assets.
#[derive(Debug)]
pub struct PathPaymentBuilder {
    send_asset: Asset,
    send_max: String,
    destination: KeyPair,
    dest_asset: Asset,
    dest_amount: String,
    path: Vec<Asset>,
    source_account: Option<KeyPair>,
}

impl PathPaymentBuilder {
    pub fn new(
        send_asset: Asset,
        send_max: impl Into<String>,
        destination: KeyPair,
        dest_asset: Asset,
        dest_amount: impl Into<String>,
    ) -> Self {
        Self {
            send_asset,
            send_max: send_max.into(),
            destination,
            dest_asset,
            dest_amount: dest_amount.into(),
            path: Vec::new(),
            source_account: None,
        }
    }

    /// Sets the intermediate conversion assets.
    pub fn path(mut self, path: Vec<Asset>) -> Self {
        self.path = path;
        self
    }

    /// Overrides the source account for this operation.
    pub fn source_account(mut self, source: KeyPair) -> Self {
        self.source_account = Some(source);
        self
    }

    pub fn build(self) -> Result<Operation> {
        if self.path.len() > MAX_PATH_LENGTH {
            return Err(Error::PathTooLong(self.path.len()));
        }
        Ok(Operation {
            source_account: self.source_account,
            body: OperationBody::PathPayment(PathPayment {
                send_asset: self.send_asset,
                send_max: self.send_max,
                destination: self.destination,
                dest_asset: self.dest_asset,
                dest_amount: self.dest_amount,
                path: self.path,
            }),
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

    fn issuer(tag: u8) -> KeyPair {
        KeyPair::from_raw_seed(&[tag; 32])
    }

    #[test]
    fn empty_path_roundtrip() {
        let op = PathPaymentBuilder::new(
            Asset::native(),
            "100",
            issuer(1),
            Asset::credit("EUR", issuer(2)).unwrap(),
            "95.5",
        )
        .build()
        .unwrap();
        let restored = roundtrip(&op);
        assert_eq!(restored, op);
        match restored.body {
            OperationBody::PathPayment(path_payment) => assert!(path_payment.path.is_empty()),
            _ => panic!("expected path payment body"),
        }
    }

    #[test]
    fn full_path_roundtrip() {
        let path = vec![
            Asset::credit("USD", issuer(3)).unwrap(),
            Asset::native(),
            Asset::credit("LONGCODE", issuer(4)).unwrap(),
        ];
        let op = PathPaymentBuilder::new(
            Asset::credit("GBP", issuer(2)).unwrap(),
            "40",
            issuer(1),
            Asset::native(),
            "39.9999999",
        )
        .path(path.clone())
        .source_account(issuer(5))
        .build()
        .unwrap();
        let restored = roundtrip(&op);
        assert_eq!(restored, op);
        match restored.body {
            OperationBody::PathPayment(path_payment) => assert_eq!(path_payment.path, path),
            _ => panic!("expected path payment body"),
        }
    }

    #[test]
    fn six_asset_path_is_rejected() {
        let path = vec![Asset::native(); 6];
        let result = PathPaymentBuilder::new(
            Asset::native(),
            "1",
            issuer(1),
            Asset::native(),
            "1",
        )
        .path(path)
        .build();
        assert!(matches!(result, Err(Error::PathTooLong(6))));
    }
}

//! Exchange-rate prices as 32-bit fractions.
//!
//! The ledger stores prices exactly, as `numerator / denominator` with both
//! sides fitting a signed 32-bit integer. [`Price::from_string`] turns a
//! decimal string into the best such fraction via continued-fraction
//! approximation. When the exact fraction is known, construct it directly
//! with [`Price::new`] instead of going through a decimal rendering.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::xdr::{XdrReader, XdrWriter};

/// A rational exchange rate.
///
/// The serde field names match the ledger's JSON rendering (`n`/`d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Numerator.
    #[serde(rename = "n")]
    pub numerator: i32,
    /// Denominator.
    #[serde(rename = "d")]
    pub denominator: i32,
}

impl Price {
    pub fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Approximates a decimal string as a fraction with 32-bit numerator
    /// and denominator.
    ///
    /// This walks the continued-fraction expansion of the input, keeping
    /// the last convergent whose numerator and denominator both fit in an
    /// `i32`. Values that cannot be represented exactly come back as the
    /// closest such convergent.
    ///
    /// # Examples
    ///
    /// ```
    /// use meridian_sdk::types::Price;
    ///
    /// assert_eq!(Price::from_string("0.5").unwrap(), Price::new(1, 2));
    /// assert_eq!(Price::from_string("1").unwrap(), Price::new(1, 1));
    /// ```
    pub fn from_string(price: &str) -> Result<Self> {
        let invalid = || Error::InvalidPrice(price.to_string());
        let max = Decimal::from(i32::MAX);
        let mut number = Decimal::from_str(price).map_err(|_| invalid())?;

        // Convergent seeds: h(-2)/k(-2) = 0/1 and h(-1)/k(-1) = 1/0.
        let mut fractions: Vec<(Decimal, Decimal)> =
            vec![(Decimal::ZERO, Decimal::ONE), (Decimal::ONE, Decimal::ZERO)];

        loop {
            if number > max {
                break;
            }
            let a = number.floor();
            let f = number - a;
            let (h_prev, k_prev) = fractions[fractions.len() - 1];
            let (h_prev2, k_prev2) = fractions[fractions.len() - 2];
            let h = a * h_prev + h_prev2;
            let k = a * k_prev + k_prev2;
            if h > max || k > max {
                break;
            }
            fractions.push((h, k));
            if f.is_zero() {
                break;
            }
            number = Decimal::ONE / f;
        }

        // Two entries means the loop never produced a convergent: the input
        // itself was already past the 32-bit range.
        if fractions.len() == 2 {
            return Err(invalid());
        }
        let (n, d) = fractions[fractions.len() - 1];
        Ok(Self {
            numerator: n.to_i32().ok_or_else(invalid)?,
            denominator: d.to_i32().ok_or_else(invalid)?,
        })
    }

    /// Renders `numerator / denominator` as a decimal string. Lossy when
    /// the fraction does not terminate within 28 significant digits.
    pub fn to_decimal_string(&self) -> String {
        (Decimal::from(self.numerator) / Decimal::from(self.denominator))
            .normalize()
            .to_string()
    }

    pub fn write_xdr(&self, writer: &mut XdrWriter) {
        writer.write_i32(self.numerator);
        writer.write_i32(self.denominator);
    }

    pub fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        let numerator = reader.read_i32()?;
        let denominator = reader.read_i32()?;
        Ok(Self {
            numerator,
            denominator,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Transaction validity windows.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::xdr::{XdrReader, XdrWriter};

/// The time interval during which a transaction is valid, in seconds since
/// the Unix epoch. A `max_time` of zero means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBounds {
    min_time: u64,
    max_time: u64,
}

impl TimeBounds {
    /// Builds a validity window, rejecting a nonzero `max_time` earlier
    /// than `min_time`.
    pub fn new(min_time: u64, max_time: u64) -> Result<Self> {
        if max_time > 0 && max_time < min_time {
            return Err(Error::InvalidTimeBounds { min_time, max_time });
        }
        Ok(Self { min_time, max_time })
    }

    pub fn min_time(&self) -> u64 {
        self.min_time
    }

    pub fn max_time(&self) -> u64 {
        self.max_time
    }

    pub fn write_xdr(&self, writer: &mut XdrWriter) {
        writer.write_u64(self.min_time);
        writer.write_u64(self.max_time);
    }

    pub fn read_xdr(reader: &mut XdrReader<'_>) -> Result<Self> {
        // Decoded values are taken verbatim; validation applies only at
        // construction time.
        Ok(Self {
            min_time: reader.read_u64()?,
            max_time: reader.read_u64()?,
        })
    }
}

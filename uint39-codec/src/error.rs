//! # Error Types for UInt39

use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UInt39Error {
    // Range errors
    #[error("Value out of range: {value} is not in [0, 2^39 - 1]")]
    OutOfRange { value: BigInt },

    #[error("Range check failed: leading byte {byte:#04x} has its high bit set")]
    HighBitSet { byte: u8 },

    // Buffer errors
    #[error("Cannot read from 0-length buffer")]
    EmptyInput,

    #[error("Buffer of {len} bytes has nonzero data before its trailing 5 bytes")]
    ExcessBytes { len: usize },

    // Precondition violations
    #[error("Not an exact integer: {0}")]
    NotAnInteger(f64),

    #[error("Invalid decimal digits: {0:?}")]
    InvalidDigits(String),
}

impl UInt39Error {
    /// Check if the requested value falls outside [0, 2^39 - 1]
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            UInt39Error::OutOfRange { .. } | UInt39Error::HighBitSet { .. }
        )
    }

    pub(crate) fn out_of_range(value: impl Into<BigInt>) -> Self {
        UInt39Error::OutOfRange {
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, UInt39Error>;

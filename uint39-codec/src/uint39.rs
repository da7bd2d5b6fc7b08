//! # UInt39 Value Type
//!
//! A 39-bit unsigned integer held in a canonical 5-byte big-endian buffer.
//!
//! Every constructor validates its input and converges on
//! [`UInt39::from_canonical`], which enforces the high-bit invariant. Once
//! built, a value never changes and every accessor hands out an owned copy.

use crate::config::{CodecConfig, ExcessBytes, FractionPolicy};
use crate::encoding::{self, BUF_SZ, MAX};
use crate::error::{Result, UInt39Error};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 39-bit unsigned integer
///
/// Invariant: byte 0 of the canonical buffer is always `< 0x80`, so the value
/// is at most 2^39 - 1 and widening it into an `i64` never goes negative.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct UInt39([u8; BUF_SZ]);

impl UInt39 {
    pub const ZERO: Self = UInt39([0; BUF_SZ]);
    pub const MAX: Self = UInt39([0x7f, 0xff, 0xff, 0xff, 0xff]);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a canonical 5-byte big-endian buffer
    ///
    /// Fails if the high bit of byte 0 is set.
    pub fn from_canonical(bytes: [u8; BUF_SZ]) -> Result<Self> {
        if !encoding::is_canonical(&bytes) {
            tracing::debug!(byte = bytes[0], "rejected canonical buffer with high bit set");
            return Err(UInt39Error::HighBitSet { byte: bytes[0] });
        }
        Ok(UInt39(bytes))
    }

    /// Create from a native unsigned integer
    pub fn from_u64(n: u64) -> Result<Self> {
        if n > MAX {
            tracing::debug!(value = n, "rejected out-of-range u64");
            return Err(UInt39Error::out_of_range(n));
        }
        Self::from_canonical(encoding::narrow(n))
    }

    /// Create from a native signed integer
    pub fn from_i64(n: i64) -> Result<Self> {
        if n < 0 {
            tracing::debug!(value = n, "rejected negative i64");
            return Err(UInt39Error::out_of_range(n));
        }
        Self::from_u64(n as u64)
    }

    /// Create from an `f64` using [`CodecConfig::DEFAULT`]
    ///
    /// NaN, infinities and values with a fractional part are rejected with
    /// `NotAnInteger`.
    pub fn from_f64(n: f64) -> Result<Self> {
        Self::from_f64_with(n, &CodecConfig::DEFAULT)
    }

    /// Create from an `f64`
    ///
    /// Non-finite input is always rejected. Fractional input is rejected or
    /// truncated toward zero according to `config.fractions`. The integral
    /// value then goes through the big-integer path, so no precision is lost
    /// before the range check.
    pub fn from_f64_with(n: f64, config: &CodecConfig) -> Result<Self> {
        if !n.is_finite() {
            tracing::debug!(value = n, "rejected non-finite f64");
            return Err(UInt39Error::NotAnInteger(n));
        }

        let integral = if n.fract() == 0.0 {
            n
        } else {
            match config.fractions {
                FractionPolicy::Reject => {
                    tracing::debug!(value = n, "rejected fractional f64");
                    return Err(UInt39Error::NotAnInteger(n));
                }
                FractionPolicy::Truncate => n.trunc(),
            }
        };

        let big = BigInt::from_f64(integral).ok_or(UInt39Error::NotAnInteger(n))?;
        Self::from_bigint(&big)
    }

    /// Create from an arbitrary-precision signed integer
    ///
    /// The lower bound is checked on the sign directly, independent of any
    /// byte representation.
    pub fn from_bigint(n: &BigInt) -> Result<Self> {
        if n.sign() == Sign::Minus {
            tracing::debug!(value = %n, "rejected negative big integer");
            return Err(UInt39Error::out_of_range(n.clone()));
        }
        match n.to_u64() {
            Some(v) if v <= MAX => Self::from_u64(v),
            _ => {
                tracing::debug!(value = %n, "rejected out-of-range big integer");
                Err(UInt39Error::out_of_range(n.clone()))
            }
        }
    }

    /// Create from an arbitrary-precision unsigned integer
    pub fn from_biguint(n: &BigUint) -> Result<Self> {
        match n.to_u64() {
            Some(v) if v <= MAX => Self::from_u64(v),
            _ => {
                tracing::debug!(value = %n, "rejected out-of-range big integer");
                Err(UInt39Error::out_of_range(n.clone()))
            }
        }
    }

    /// Create from a big-endian buffer using [`CodecConfig::DEFAULT`]
    pub fn from_buffer(buf: &[u8]) -> Result<Self> {
        Self::from_buffer_with(buf, &CodecConfig::DEFAULT)
    }

    /// Create from a big-endian buffer of any non-zero length
    ///
    /// Buffers shorter than 5 bytes are right-aligned. Longer buffers are read
    /// from their trailing 5 bytes; the leading bytes are handled according to
    /// `config.excess_bytes`.
    pub fn from_buffer_with(buf: &[u8], config: &CodecConfig) -> Result<Self> {
        if buf.is_empty() {
            tracing::debug!("rejected empty buffer");
            return Err(UInt39Error::EmptyInput);
        }

        let (bytes, excess) = encoding::right_align(buf);
        if excess.iter().any(|&b| b != 0) {
            match config.excess_bytes {
                ExcessBytes::Reject => {
                    tracing::debug!(len = buf.len(), "rejected buffer with nonzero excess bytes");
                    return Err(UInt39Error::ExcessBytes { len: buf.len() });
                }
                ExcessBytes::Truncate => {
                    tracing::warn!(
                        len = buf.len(),
                        dropped = excess.len(),
                        "truncated nonzero bytes ahead of the trailing 5-byte window"
                    );
                }
            }
        }

        Self::from_canonical(bytes)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Value as an arbitrary-precision signed integer (always non-negative)
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(i64::from_be_bytes(encoding::widen(&self.0)))
    }

    /// Value as an arbitrary-precision unsigned integer
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from(self.to_u64())
    }

    /// Value as a native unsigned integer
    #[inline]
    pub fn to_u64(&self) -> u64 {
        u64::from_be_bytes(encoding::widen(&self.0))
    }

    /// Value as a native signed integer (always non-negative)
    #[inline]
    pub fn to_i64(&self) -> i64 {
        i64::from_be_bytes(encoding::widen(&self.0))
    }

    /// Value as an `f64`; exact since 2^39 - 1 < 2^53
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.to_u64() as f64
    }

    /// Copy of the canonical 5-byte big-endian buffer
    #[inline]
    pub fn to_buffer(&self) -> [u8; BUF_SZ] {
        self.0
    }

    /// Big-endian encoding with leading zero bytes removed (1-5 bytes)
    ///
    /// A zero byte is kept in front of a byte with its high bit set, and zero
    /// encodes as `[0x00]`.
    pub fn size_optimized(&self) -> Vec<u8> {
        self.0[encoding::optimized_start(&self.0)..].to_vec()
    }

    /// Length of [`size_optimized`](Self::size_optimized) without allocating
    #[inline]
    pub fn optimized_len(&self) -> usize {
        BUF_SZ - encoding::optimized_start(&self.0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0; BUF_SZ]
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Debug for UInt39 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt39(0x")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for UInt39 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_u64(), f)
    }
}

impl fmt::LowerHex for UInt39 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_u64(), f)
    }
}

impl fmt::UpperHex for UInt39 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_u64(), f)
    }
}

impl FromStr for UInt39 {
    type Err = UInt39Error;

    fn from_str(s: &str) -> Result<Self> {
        let n: BigInt = s
            .trim()
            .parse()
            .map_err(|_| UInt39Error::InvalidDigits(s.to_string()))?;
        Self::from_bigint(&n)
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_small {
    ($($t:ty),*) => {
        $(
            impl From<$t> for UInt39 {
                fn from(n: $t) -> Self {
                    let bytes = encoding::narrow(u64::from(n));
                    debug_assert!(encoding::is_canonical(&bytes));
                    UInt39(bytes)
                }
            }
        )*
    };
}

impl_from_small!(u8, u16, u32);

impl TryFrom<u64> for UInt39 {
    type Error = UInt39Error;

    fn try_from(n: u64) -> Result<Self> {
        Self::from_u64(n)
    }
}

impl TryFrom<i64> for UInt39 {
    type Error = UInt39Error;

    fn try_from(n: i64) -> Result<Self> {
        Self::from_i64(n)
    }
}

impl TryFrom<&BigInt> for UInt39 {
    type Error = UInt39Error;

    fn try_from(n: &BigInt) -> Result<Self> {
        Self::from_bigint(n)
    }
}

impl TryFrom<&BigUint> for UInt39 {
    type Error = UInt39Error;

    fn try_from(n: &BigUint) -> Result<Self> {
        Self::from_biguint(n)
    }
}

impl TryFrom<&[u8]> for UInt39 {
    type Error = UInt39Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        Self::from_buffer(buf)
    }
}

impl TryFrom<[u8; BUF_SZ]> for UInt39 {
    type Error = UInt39Error;

    fn try_from(bytes: [u8; BUF_SZ]) -> Result<Self> {
        Self::from_canonical(bytes)
    }
}

impl From<UInt39> for u64 {
    fn from(v: UInt39) -> Self {
        v.to_u64()
    }
}

impl From<UInt39> for i64 {
    fn from(v: UInt39) -> Self {
        v.to_i64()
    }
}

impl From<UInt39> for BigInt {
    fn from(v: UInt39) -> Self {
        v.to_bigint()
    }
}

impl From<UInt39> for BigUint {
    fn from(v: UInt39) -> Self {
        v.to_biguint()
    }
}

impl From<UInt39> for [u8; BUF_SZ] {
    fn from(v: UInt39) -> Self {
        v.to_buffer()
    }
}

//! # Codec Configuration
//!
//! Policies for input that sits on the edge of the codec contract: byte
//! buffers longer than the canonical 5 bytes, and `f64` input that is not an
//! exact integer. Configuration is passed explicitly to the `*_with`
//! constructors; the plain constructors use [`CodecConfig::DEFAULT`].

use std::fmt;

/// What to do with bytes that precede the trailing 5-byte window of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExcessBytes {
    /// Ignore them, even if nonzero
    #[default]
    Truncate,
    /// Fail with `UInt39Error::ExcessBytes` if any of them is nonzero
    Reject,
}

/// What to do with finite `f64` input that has a fractional part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractionPolicy {
    /// Fail with `UInt39Error::NotAnInteger`
    #[default]
    Reject,
    /// Truncate toward zero, then range-check
    Truncate,
}

/// Codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecConfig {
    /// Handling of buffer bytes outside the trailing 5-byte window
    pub excess_bytes: ExcessBytes,
    /// Handling of non-integral `f64` input
    pub fractions: FractionPolicy,
}

impl CodecConfig {
    /// Default configuration
    /// - Excess leading buffer bytes: silently truncated
    /// - Fractional `f64` input: rejected
    pub const DEFAULT: Self = Self {
        excess_bytes: ExcessBytes::Truncate,
        fractions: FractionPolicy::Reject,
    };

    /// Strict configuration: rejects anything that would lose information
    pub const STRICT: Self = Self {
        excess_bytes: ExcessBytes::Reject,
        fractions: FractionPolicy::Reject,
    };

    pub const fn new(excess_bytes: ExcessBytes, fractions: FractionPolicy) -> Self {
        Self {
            excess_bytes,
            fractions,
        }
    }

    #[inline]
    pub const fn with_excess_bytes(mut self, excess_bytes: ExcessBytes) -> Self {
        self.excess_bytes = excess_bytes;
        self
    }

    #[inline]
    pub const fn with_fractions(mut self, fractions: FractionPolicy) -> Self {
        self.fractions = fractions;
        self
    }

    /// True if no policy silently discards input
    #[inline]
    pub const fn is_lossless(&self) -> bool {
        matches!(self.excess_bytes, ExcessBytes::Reject)
            && matches!(self.fractions, FractionPolicy::Reject)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ExcessBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExcessBytes::Truncate => write!(f, "truncate"),
            ExcessBytes::Reject => write!(f, "reject"),
        }
    }
}

impl fmt::Display for FractionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionPolicy::Reject => write!(f, "reject"),
            FractionPolicy::Truncate => write!(f, "truncate"),
        }
    }
}

impl fmt::Display for CodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CodecConfig {{ excess_bytes: {}, fractions: {} }}",
            self.excess_bytes, self.fractions,
        )
    }
}

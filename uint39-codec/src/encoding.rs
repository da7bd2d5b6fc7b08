//! # Byte Encoding Constants and Helpers
//!
//! Raw big-endian byte operations that `UInt39` is built from.
//!
//! ## Canonical Form (5 bytes)
//!
//! ```text
//! byte:  0         1        2        3        4
//!       [0xxxxxxx][xxxxxxxx][xxxxxxxx][xxxxxxxx][xxxxxxxx]
//!        ^ high bit always clear: 7 + 4 * 8 = 39 value bits
//! ```
//!
//! ## Optimized Form (1-5 bytes)
//!
//! The canonical form with leading `0x00` bytes stripped, except that a zero
//! byte is kept when the byte after it has its high bit set, and at least one
//! byte always remains.

// ============================================================================
// Width Constants
// ============================================================================

/// Canonical buffer size in bytes
pub const BUF_SZ: usize = 5;

/// Value width in bits
pub const BITS: u32 = 39;

/// Maximum representable value (2^39 - 1)
pub const MAX: u64 = (1 << BITS) - 1;

/// High bit of a byte
pub const HIGH_BIT: u8 = 0x80;

/// Size of the widened word used for 64-bit conversions
pub(crate) const WORD_SZ: usize = 8;

// ============================================================================
// Helpers
// ============================================================================

/// Check the canonical-form invariant: byte 0 has its high bit clear
#[inline]
pub const fn is_canonical(bytes: &[u8; BUF_SZ]) -> bool {
    bytes[0] & HIGH_BIT == 0
}

/// Place the 5 bytes in the low end of an 8-byte big-endian word
#[inline]
pub fn widen(bytes: &[u8; BUF_SZ]) -> [u8; WORD_SZ] {
    let mut word = [0u8; WORD_SZ];
    word[WORD_SZ - BUF_SZ..].copy_from_slice(bytes);
    word
}

/// Low 5 bytes of the big-endian form of `value`
///
/// Bits above bit 39 are discarded; callers range-check first.
#[inline]
pub fn narrow(value: u64) -> [u8; BUF_SZ] {
    let word = value.to_be_bytes();
    let mut bytes = [0u8; BUF_SZ];
    bytes.copy_from_slice(&word[WORD_SZ - BUF_SZ..]);
    bytes
}

/// Split `buf` into the excess leading bytes and a right-aligned 5-byte window
///
/// Short input is right-aligned with leading zeros; long input keeps only its
/// trailing 5 bytes and returns the rest as the excess slice.
pub fn right_align(buf: &[u8]) -> ([u8; BUF_SZ], &[u8]) {
    let mut out = [0u8; BUF_SZ];
    if buf.len() < BUF_SZ {
        out[BUF_SZ - buf.len()..].copy_from_slice(buf);
        (out, &[])
    } else {
        let (excess, window) = buf.split_at(buf.len() - BUF_SZ);
        out.copy_from_slice(window);
        (out, excess)
    }
}

/// Index at which the optimized form of `bytes` begins (0..=4)
///
/// Strips while the byte being dropped is 0x00 and the byte that would lead
/// is <= 0x7f.
pub fn optimized_start(bytes: &[u8; BUF_SZ]) -> usize {
    let mut start = 0;
    while start < BUF_SZ - 1 && bytes[start] == 0 && bytes[start + 1] & HIGH_BIT == 0 {
        start += 1;
    }
    start
}

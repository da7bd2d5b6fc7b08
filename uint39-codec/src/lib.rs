//! # UInt39 Codec
//!
//! Fixed-width 39-bit unsigned integer stored as a canonical 5-byte
//! big-endian buffer.
//!
//! ## Key Features
//! - Value range [0, 2^39 - 1]
//! - Canonical form: exactly 5 bytes, high bit of byte 0 always clear
//! - Size-optimized form: 1-5 bytes with leading zero bytes stripped
//! - Validated construction from native integers, `f64`, big integers and bytes
//! - Serde support (serialized as the `u64` value)
//!
//! ```
//! use uint39_codec::UInt39;
//!
//! let v = UInt39::from_u64(255).unwrap();
//! assert_eq!(v.to_buffer(), [0x00, 0x00, 0x00, 0x00, 0xff]);
//! assert_eq!(v.size_optimized(), vec![0x00, 0xff]);
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod uint39;

pub use config::{CodecConfig, ExcessBytes, FractionPolicy};
pub use encoding::{BITS, BUF_SZ, HIGH_BIT, MAX};
pub use error::{Result, UInt39Error};
pub use uint39::UInt39;

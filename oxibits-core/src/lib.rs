//! # OxiBits Core
//!
//! Core components for the OxiBits bit-packing library.
//!
//! This crate provides the building blocks for packing and unpacking
//! binary-structured data at bit granularity:
//!
//! - [`bitseq`]: Fixed-capacity bit-addressable buffer with indexed and
//!   cursor-based access
//! - [`cursor`]: Sequential access cursor state
//! - [`hex`]: Hexadecimal text conversions
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L2: Tools                                               │
//! │     oxibits CLI (render, pack, collect, hex)            │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Bit layout (this crate)                             │
//! │     BitSequence, Cursor, hex helpers                    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxibits_core::BitSequence;
//! use oxibits_core::hex::to_hex_string;
//!
//! // Decode a received byte array into a bit view
//! let seq = BitSequence::from_bytes(&[0x34, 0x12], 16).unwrap();
//! assert_eq!(seq.render(), "0001001000110100");
//!
//! // Assemble a little-endian integer
//! let value = seq.collect_bytes_le(2);
//! assert_eq!(to_hex_string(value), "1234");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitseq;
pub mod cursor;
pub mod error;
pub mod hex;

// Re-exports for convenience
pub use bitseq::{BYTE_BITS, BitSequence};
pub use cursor::Cursor;
pub use error::{OxiBitsError, Result, Unit};
pub use hex::{parse_hex_string, to_hex_string};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitseq::BitSequence;
    pub use crate::cursor::Cursor;
    pub use crate::error::{OxiBitsError, Result, Unit};
    pub use crate::hex::{parse_hex_string, to_hex_string};
}

//! Error types for OxiBits operations.
//!
//! Every fallible operation on a [`BitSequence`](crate::BitSequence) or in the
//! [`hex`](crate::hex) helper reports one of these variants. Bounds and cursor
//! checks run before any mutation, so an error never leaves a buffer
//! half-written.

use std::fmt;
use thiserror::Error;

/// Addressing granularity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Single-bit addressing (bit index, bit cursor).
    Bit,
    /// Whole-byte addressing (byte index, byte cursor).
    Byte,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Bit => f.write_str("bit"),
            Unit::Byte => f.write_str("byte"),
        }
    }
}

/// The main error type for OxiBits operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OxiBitsError {
    /// Index outside `[0, bound)` for an indexed access or a seek.
    #[error("{unit} index {index} out of range: valid range is 0..{bound}")]
    OutOfRange {
        /// Granularity of the rejected index.
        unit: Unit,
        /// The rejected index.
        index: usize,
        /// Exclusive upper bound that was violated.
        bound: usize,
    },

    /// Sequential access before the cursor was ever positioned.
    #[error("{unit} cursor used before any seek")]
    CursorNotInitialized {
        /// Which cursor was used.
        unit: Unit,
    },

    /// Sequential access with the cursor already at its upper bound.
    #[error("{unit} cursor exhausted at position {position}")]
    CursorExhausted {
        /// Which cursor was used.
        unit: Unit,
        /// Cursor position at the time of the call.
        position: usize,
    },

    /// Character outside `0-9`/`A-F` in a hex string.
    #[error("Invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit {
        /// The offending character.
        digit: char,
        /// Character position within the input.
        position: usize,
    },

    /// Hex string encodes a value wider than 64 bits.
    #[error("Hex value {input:?} does not fit in 64 bits")]
    HexOverflow {
        /// The rejected input.
        input: String,
    },
}

/// Result type alias for OxiBits operations.
pub type Result<T> = std::result::Result<T, OxiBitsError>;

impl OxiBitsError {
    /// Create an out-of-range error.
    pub fn out_of_range(unit: Unit, index: usize, bound: usize) -> Self {
        Self::OutOfRange { unit, index, bound }
    }

    /// Create a cursor-not-initialized error.
    pub fn cursor_not_initialized(unit: Unit) -> Self {
        Self::CursorNotInitialized { unit }
    }

    /// Create a cursor-exhausted error.
    pub fn cursor_exhausted(unit: Unit, position: usize) -> Self {
        Self::CursorExhausted { unit, position }
    }

    /// Create an invalid hex digit error.
    pub fn invalid_hex_digit(digit: char, position: usize) -> Self {
        Self::InvalidHexDigit { digit, position }
    }

    /// Create a hex overflow error.
    pub fn hex_overflow(input: impl Into<String>) -> Self {
        Self::HexOverflow {
            input: input.into(),
        }
    }
}

//! Hexadecimal text helpers.
//!
//! Stateless conversions between `u64` values and uppercase hexadecimal
//! digit strings (no prefix, most significant digit first). These share no
//! state with [`BitSequence`](crate::BitSequence).

use crate::error::{OxiBitsError, Result};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Format `value` as minimal uppercase hex digits.
///
/// Zero formats as `"0"`; any other value has no leading zeros.
///
/// ```
/// use oxibits_core::hex::to_hex_string;
///
/// assert_eq!(to_hex_string(0), "0");
/// assert_eq!(to_hex_string(0xBEEF), "BEEF");
/// ```
pub fn to_hex_string(value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(16);
    let mut remaining = value;
    while remaining > 0 {
        digits.push(DIGITS[(remaining & 0xF) as usize] as char);
        remaining >>= 4;
    }
    digits.iter().rev().collect()
}

/// Value of a single uppercase hex digit.
#[inline]
fn digit_value(c: char) -> Option<u64> {
    match c {
        '0'..='9' => Some(c as u64 - '0' as u64),
        'A'..='F' => Some(c as u64 - 'A' as u64 + 10),
        _ => None,
    }
}

/// Parse uppercase hex digits into a `u64`.
///
/// The empty string parses to 0. Lowercase letters, prefixes and separators
/// are rejected with [`OxiBitsError::InvalidHexDigit`]; values wider than 64
/// bits fail with [`OxiBitsError::HexOverflow`].
///
/// ```
/// use oxibits_core::hex::parse_hex_string;
///
/// assert_eq!(parse_hex_string("1F").unwrap(), 31);
/// assert!(parse_hex_string("1f").is_err());
/// ```
pub fn parse_hex_string(s: &str) -> Result<u64> {
    let mut value = 0u64;
    for (position, c) in s.chars().enumerate() {
        let digit =
            digit_value(c).ok_or_else(|| OxiBitsError::invalid_hex_digit(c, position))?;
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| OxiBitsError::hex_overflow(s))?;
    }
    Ok(value)
}

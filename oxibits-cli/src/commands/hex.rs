//! Hex command implementation.

use crate::utils::parse_value;
use oxibits_core::hex::{parse_hex_string, to_hex_string};

/// Integer argument (decimal or `0x` hex) to minimal uppercase hex.
pub fn hex_encode(value: &str) -> Result<String, Box<dyn std::error::Error>> {
    Ok(to_hex_string(parse_value(value)?))
}

/// Uppercase hex argument to its integer value.
pub fn hex_decode(text: &str) -> Result<u64, Box<dyn std::error::Error>> {
    Ok(parse_hex_string(text.trim())?)
}

pub fn cmd_hex_encode(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", hex_encode(value)?);
    Ok(())
}

pub fn cmd_hex_decode(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", hex_decode(text)?);
    Ok(())
}

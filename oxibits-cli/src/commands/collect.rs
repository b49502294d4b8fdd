//! Collect command implementation.

use crate::utils::parse_bytes;
use oxibits_core::BitSequence;
use oxibits_core::hex::to_hex_string;
use serde::Serialize;

/// Bytes that fit in a 64-bit value.
const MAX_COLLECT_BYTES: usize = 8;

#[derive(Debug, Serialize)]
struct CollectJson {
    count: usize,
    value: u64,
    hex: String,
}

/// Assemble the leading bytes of a hex byte string into a little-endian
/// value.
///
/// Returns the number of bytes that actually contributed, which is capped by
/// both the input length and the width of a `u64`.
pub fn collect_value(
    bytes: &str,
    count: usize,
) -> Result<(usize, u64), Box<dyn std::error::Error>> {
    let data = parse_bytes(bytes)?;
    let seq = BitSequence::from_bytes(&data, data.len() * 8)?;

    if count > MAX_COLLECT_BYTES {
        tracing::warn!(count, "Only the first 8 bytes fit in a 64-bit value");
    }
    let used = count.min(seq.bytes_allocated()).min(MAX_COLLECT_BYTES);

    Ok((used, seq.collect_bytes_le(count)))
}

pub fn cmd_collect(
    bytes: &str,
    count: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (used, value) = collect_value(bytes, count)?;

    if json {
        let output = CollectJson {
            count: used,
            value,
            hex: to_hex_string(value),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Bytes used: {}", used);
    println!("Value: {}", value);
    println!("Hex: {}", to_hex_string(value));

    Ok(())
}

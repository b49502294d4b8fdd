//! Render command implementation.

use crate::utils::{SequenceJson, group_bits, parse_bytes};
use oxibits_core::{BYTE_BITS, BitSequence};

/// Build the bit view of a hex byte string.
///
/// The capacity defaults to 8 bits per input byte. A capacity too small for
/// the input is rejected before any sequence is built.
pub fn render_sequence(
    bytes: &str,
    bits: Option<usize>,
) -> Result<BitSequence, Box<dyn std::error::Error>> {
    let data = parse_bytes(bytes)?;
    let num_bits = bits.unwrap_or(data.len() * BYTE_BITS);
    tracing::debug!(bytes = data.len(), num_bits, "Building bit view");

    let capacity = num_bits.div_ceil(BYTE_BITS);
    if data.len() > capacity {
        return Err(format!(
            "input is {} bytes but {} bits only hold {} bytes",
            data.len(),
            num_bits,
            capacity
        )
        .into());
    }

    Ok(BitSequence::from_bytes(&data, num_bits)?)
}

pub fn cmd_render(
    bytes: &str,
    bits: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let seq = render_sequence(bytes, bits)?;

    if json {
        let output = serde_json::to_string_pretty(&SequenceJson::from_sequence(&seq))?;
        println!("{}", output);
        return Ok(());
    }

    println!("Bits: {}", seq.num_bits());
    println!("Bytes allocated: {}", seq.bytes_allocated());
    println!("Rendered: {}", group_bits(&seq.render()));

    Ok(())
}

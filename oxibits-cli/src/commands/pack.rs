//! Pack command implementation.

use crate::utils::{FieldSpec, SequenceJson, format_bytes, group_bits};
use oxibits_core::BitSequence;

/// Options for packing fields into a fresh sequence.
pub struct PackOptions<'a> {
    pub bits: usize,
    pub fields: &'a [FieldSpec],
    pub fixed: Option<usize>,
    pub json: bool,
}

/// Pack every field into a new sequence, in argument order.
///
/// With a fixed width each field's range is cleared first, which turns the
/// significant-bits-only integer write into a fixed-width one.
pub fn pack_fields(
    bits: usize,
    fields: &[FieldSpec],
    fixed: Option<usize>,
) -> oxibits_core::Result<BitSequence> {
    let mut seq = BitSequence::new(bits);

    for field in fields {
        if let Some(width) = fixed {
            seq.clear_bits(field.start, width)?;
        }
        seq.set_bits_from_u64(field.start, field.value)?;
        tracing::trace!(start = field.start, value = field.value, "Packed field");
    }

    Ok(seq)
}

pub fn cmd_pack(options: &PackOptions) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(
        num_bits = options.bits,
        fields = options.fields.len(),
        fixed = ?options.fixed,
        "Packing fields"
    );

    let seq = pack_fields(options.bits, options.fields, options.fixed)?;

    if options.json {
        let output = serde_json::to_string_pretty(&SequenceJson::from_sequence(&seq))?;
        println!("{}", output);
        return Ok(());
    }

    println!("Bytes: {}", format_bytes(seq.as_bytes()));
    println!("Rendered: {}", group_bits(&seq.render()));

    Ok(())
}

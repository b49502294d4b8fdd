//! Property tests for BitSequence addressing and the hex helpers.
//!
//! 1. Indexed bit and byte writes read back and touch nothing else
//! 2. Byte arrays survive construction through the byte cursor
//! 3. Little-endian assembly matches the arithmetic definition
//! 4. Sequential writers and readers are symmetric
//! 5. Hex text round trips for every u64

use oxibits_core::hex::{parse_hex_string, to_hex_string};
use oxibits_core::{BitSequence, OxiBitsError, Unit};
use proptest::{collection::vec, prelude::*};

/// A byte array paired with a bit capacity large enough to hold it.
fn bytes_with_capacity() -> impl Strategy<Value = (Vec<u8>, usize)> {
    vec(any::<u8>(), 0..32).prop_flat_map(|bytes| {
        let min_bits = bytes.len() * 8;
        (Just(bytes), min_bits..min_bits + 24)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn set_bit_touches_only_target(
        (bytes, num_bits) in bytes_with_capacity(),
        index_seed in any::<usize>(),
        value in any::<bool>(),
    ) {
        prop_assume!(num_bits > 0);
        let index = index_seed % num_bits;
        let mut seq = BitSequence::from_bytes(&bytes, num_bits).unwrap();
        let before = seq.clone();

        seq.set_bit(index, value).unwrap();
        prop_assert_eq!(seq.get_bit(index).unwrap(), value);
        for other in (0..num_bits).filter(|&i| i != index) {
            prop_assert_eq!(seq.get_bit(other).unwrap(), before.get_bit(other).unwrap());
        }
    }

    #[test]
    fn set_byte_reads_back(num_bits in 1usize..200, index_seed in any::<usize>(), value in any::<u8>()) {
        let mut seq = BitSequence::new(num_bits);
        let index = index_seed % seq.bytes_allocated();
        seq.set_byte(index, value).unwrap();
        prop_assert_eq!(seq.get_byte(index).unwrap(), value);
    }

    #[test]
    fn from_bytes_roundtrip((bytes, num_bits) in bytes_with_capacity()) {
        let seq = BitSequence::from_bytes(&bytes, num_bits).unwrap();
        prop_assert_eq!(seq.bytes_allocated(), num_bits.div_ceil(8));
        for (i, &byte) in bytes.iter().enumerate() {
            prop_assert_eq!(seq.get_byte(i).unwrap(), byte);
        }
        for i in bytes.len()..seq.bytes_allocated() {
            prop_assert_eq!(seq.get_byte(i).unwrap(), 0);
        }
    }

    #[test]
    fn collect_bytes_is_little_endian(bytes in vec(any::<u8>(), 0..=8)) {
        let seq = BitSequence::from_bytes(&bytes, 64).unwrap();
        let expected = bytes
            .iter()
            .enumerate()
            .map(|(i, &b)| u64::from(b) << (8 * i))
            .sum::<u64>();
        prop_assert_eq!(seq.collect_bytes_le(bytes.len()), expected);
    }

    #[test]
    fn sequential_bits_are_symmetric(bits in vec(any::<bool>(), 1..100)) {
        let mut seq = BitSequence::new(bits.len());
        seq.seek_bit(0).unwrap();
        for &bit in &bits {
            seq.write_next_bit(bit).unwrap();
        }
        prop_assert_eq!(
            seq.write_next_bit(true),
            Err(OxiBitsError::cursor_exhausted(Unit::Bit, bits.len()))
        );

        seq.seek_bit(0).unwrap();
        for &bit in &bits {
            prop_assert_eq!(seq.read_next_bit().unwrap(), bit);
        }
    }

    #[test]
    fn render_matches_get_bit((bytes, num_bits) in bytes_with_capacity()) {
        let seq = BitSequence::from_bytes(&bytes, num_bits).unwrap();
        let rendered = seq.render();
        prop_assert_eq!(rendered.len(), num_bits);
        for (pos, c) in rendered.chars().enumerate() {
            let bit = seq.get_bit(num_bits - 1 - pos).unwrap();
            prop_assert_eq!(c, if bit { '1' } else { '0' });
        }
    }

    #[test]
    fn failed_calls_do_not_mutate((bytes, num_bits) in bytes_with_capacity(), extra in 0usize..16) {
        let mut seq = BitSequence::from_bytes(&bytes, num_bits).unwrap();
        let before = seq.clone();

        prop_assert!(seq.set_bit(num_bits + extra, true).is_err());
        prop_assert!(seq.set_byte(seq.bytes_allocated() + extra, 0xFF).is_err());
        prop_assert!(seq.set_bits_from_u64(num_bits + extra, u64::MAX).is_err());
        prop_assert!(seq.seek_bit(num_bits + extra).is_err());
        prop_assert_eq!(seq, before);
    }

    #[test]
    fn hex_roundtrip(value in any::<u64>()) {
        let text = to_hex_string(value);
        prop_assert!(text == "0" || !text.starts_with('0'));
        prop_assert!(text.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        prop_assert_eq!(parse_hex_string(&text).unwrap(), value);
    }
}

#[test]
fn uninitialized_cursor_on_fresh_buffer() {
    let mut seq = BitSequence::new(8);
    assert_eq!(
        seq.read_next_bit(),
        Err(OxiBitsError::CursorNotInitialized { unit: Unit::Bit })
    );
    assert_eq!(
        seq.read_next_byte(),
        Err(OxiBitsError::CursorNotInitialized { unit: Unit::Byte })
    );
}

#[test]
fn byte_cursor_exhaustion() {
    let mut seq = BitSequence::new(24);
    seq.seek_byte(0).unwrap();
    for _ in 0..3 {
        seq.read_next_byte().unwrap();
    }
    assert!(matches!(
        seq.read_next_byte(),
        Err(OxiBitsError::CursorExhausted {
            unit: Unit::Byte,
            position: 3
        })
    ));
    assert!(matches!(
        seq.write_next_byte(0),
        Err(OxiBitsError::CursorExhausted { .. })
    ));
}

#[test]
fn out_of_range_at_capacity() {
    let seq = BitSequence::new(13);
    assert_eq!(seq.bytes_allocated(), 2);
    assert!(matches!(
        seq.get_bit(13),
        Err(OxiBitsError::OutOfRange {
            unit: Unit::Bit,
            index: 13,
            bound: 13
        })
    ));
}

#[test]
fn pack_header_fields() {
    // version:3 | flags:5 | length:8, packed LSB-first
    let mut seq = BitSequence::new(16);
    seq.set_bits_from_u64(0, 0b101).unwrap();
    seq.seek_bit(3).unwrap();
    for flag in [true, false, false, true, true] {
        seq.write_next_bit(flag).unwrap();
    }
    seq.seek_byte(1).unwrap();
    seq.write_next_byte(0x2A).unwrap();

    assert_eq!(seq.as_bytes(), &[0b1100_1101, 0x2A]);
    assert_eq!(seq.collect_bytes_le(2), 0x2ACD);
    assert_eq!(to_hex_string(seq.collect_bytes_le(2)), "2ACD");
}

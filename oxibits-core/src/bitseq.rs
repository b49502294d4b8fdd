//! Bit-addressable fixed-capacity buffer.
//!
//! This module provides [`BitSequence`], a byte array exposed as an ordered
//! sequence of individually addressable bits. It is used to pack wire-level
//! fields bit by bit, or to decode a received byte array into a bit view.
//!
//! # Bit Ordering
//!
//! Bits are stored LSB-first within each byte: bit index `i` lives in byte
//! `i / 8` at bit position `i % 8`. Multi-byte integers assembled with
//! [`BitSequence::collect_bytes_le`] are little-endian (byte 0 is the least
//! significant).
//!
//! # Addressing
//!
//! Every bit and byte can be addressed directly by index. For stream-style
//! encoding and decoding there are two independent cursors, one stepping over
//! bits and one stepping over bytes. A cursor must be positioned with
//! [`seek_bit`](BitSequence::seek_bit) / [`seek_byte`](BitSequence::seek_byte)
//! before the first sequential call. The buffer does not relate the two
//! cursors to each other.
//!
//! # Example
//!
//! ```
//! use oxibits_core::BitSequence;
//!
//! // Pack a 3-bit field and a flag
//! let mut seq = BitSequence::new(8);
//! seq.set_bits_from_u64(0, 0b101).unwrap();
//! seq.set_bit(7, true).unwrap();
//! assert_eq!(seq.render(), "10000101");
//!
//! // Walk the bits back out
//! seq.seek_bit(0).unwrap();
//! assert!(seq.read_next_bit().unwrap());
//! assert!(!seq.read_next_bit().unwrap());
//! assert!(seq.read_next_bit().unwrap());
//! ```

use crate::cursor::Cursor;
use crate::error::{OxiBitsError, Result, Unit};
use std::fmt;

/// Number of bits in a storage byte.
pub const BYTE_BITS: usize = 8;

/// A fixed-capacity buffer addressable by bit and by byte.
///
/// Storage is allocated once at construction and never resized. Every
/// operation validates its index or cursor before touching storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BitSequence {
    /// Backing bytes, `ceil(num_bits / 8)` long.
    data: Vec<u8>,
    /// Number of addressable bits.
    num_bits: usize,
    /// Next bit for sequential bit access.
    bit_cursor: Cursor,
    /// Next byte for sequential byte access.
    byte_cursor: Cursor,
}

impl BitSequence {
    /// Create a zero-filled sequence holding `num_bits` bits.
    ///
    /// Both cursors start unset. A capacity of zero yields empty storage.
    pub fn new(num_bits: usize) -> Self {
        Self {
            data: vec![0; num_bits.div_ceil(BYTE_BITS)],
            num_bits,
            bit_cursor: Cursor::Unset,
            byte_cursor: Cursor::Unset,
        }
    }

    /// Create a sequence of `num_bits` bits and copy `bytes` into it from
    /// byte 0, using the byte cursor.
    ///
    /// On success the byte cursor sits just past the last copied byte and the
    /// bit cursor is unset. Fails with [`OxiBitsError::CursorExhausted`] if
    /// `bytes` is longer than the allocated storage.
    pub fn from_bytes(bytes: &[u8], num_bits: usize) -> Result<Self> {
        let mut seq = Self::new(num_bits);

        if bytes.len() > seq.data.len() {
            return Err(OxiBitsError::cursor_exhausted(Unit::Byte, seq.data.len()));
        }
        if seq.data.is_empty() {
            return Ok(seq);
        }

        seq.seek_byte(0)?;
        for &byte in bytes {
            seq.write_next_byte(byte)?;
        }
        Ok(seq)
    }

    /// Get the number of addressable bits.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Get the number of allocated storage bytes.
    pub fn bytes_allocated(&self) -> usize {
        self.data.len()
    }

    /// Get the bit cursor position, or `None` if it was never seeked.
    pub fn bit_cursor(&self) -> Option<usize> {
        self.bit_cursor.position()
    }

    /// Get the byte cursor position, or `None` if it was never seeked.
    pub fn byte_cursor(&self) -> Option<usize> {
        self.byte_cursor.position()
    }

    /// Get the raw storage bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the sequence and return its storage bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn check_bit_index(&self, index: usize) -> Result<()> {
        if index >= self.num_bits {
            return Err(OxiBitsError::out_of_range(Unit::Bit, index, self.num_bits));
        }
        Ok(())
    }

    #[inline]
    fn check_byte_index(&self, index: usize) -> Result<()> {
        if index >= self.data.len() {
            return Err(OxiBitsError::out_of_range(
                Unit::Byte,
                index,
                self.data.len(),
            ));
        }
        Ok(())
    }

    /// Read a bit whose index is already validated.
    #[inline]
    fn bit(&self, index: usize) -> bool {
        (self.data[index / BYTE_BITS] >> (index % BYTE_BITS)) & 1 != 0
    }

    /// Write a bit whose index is already validated.
    #[inline]
    fn put_bit(&mut self, index: usize, value: bool) {
        let mask = 1u8 << (index % BYTE_BITS);
        let byte = &mut self.data[index / BYTE_BITS];
        if value {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Set or clear the bit at `index`, leaving all other bits untouched.
    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_bit_index(index)?;
        self.put_bit(index, value);
        Ok(())
    }

    /// Get the bit at `index`.
    pub fn get_bit(&self, index: usize) -> Result<bool> {
        self.check_bit_index(index)?;
        Ok(self.bit(index))
    }

    /// Overwrite the storage byte at `index`.
    pub fn set_byte(&mut self, index: usize, value: u8) -> Result<()> {
        self.check_byte_index(index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Get the storage byte at `index`.
    pub fn get_byte(&self, index: usize) -> Result<u8> {
        self.check_byte_index(index)?;
        Ok(self.data[index])
    }

    /// Write the significant bits of `value` starting at bit `start`,
    /// LSB first.
    ///
    /// Writing stops as soon as the remaining value is zero or the capacity
    /// is reached. Positions above the highest set bit of `value` keep
    /// whatever they held before, so this is not a fixed-width write; use
    /// [`clear_bits`](Self::clear_bits) on the target range first when one is
    /// needed.
    pub fn set_bits_from_u64(&mut self, start: usize, value: u64) -> Result<()> {
        self.check_bit_index(start)?;

        let mut remaining = value;
        let mut index = start;
        while remaining != 0 && index < self.num_bits {
            self.put_bit(index, remaining & 1 != 0);
            remaining >>= 1;
            index += 1;
        }
        Ok(())
    }

    /// Clear `count` bits starting at bit `start`.
    ///
    /// The whole range is validated before any bit changes. A zero `count`
    /// does nothing.
    pub fn clear_bits(&mut self, start: usize, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        self.check_bit_index(start.saturating_add(count - 1))?;

        for index in start..start + count {
            self.put_bit(index, false);
        }
        Ok(())
    }

    /// Assemble the first `count` storage bytes into a little-endian integer.
    ///
    /// `count` is clamped to the storage length. Only the first eight bytes
    /// can contribute; anything further is shifted out of the 64-bit result.
    pub fn collect_bytes_le(&self, count: usize) -> u64 {
        let count = count.min(self.data.len());
        self.data[..count]
            .iter()
            .rev()
            .fold(0u64, |acc, &byte| (acc << BYTE_BITS) | u64::from(byte))
    }

    /// Position the bit cursor at `index`.
    pub fn seek_bit(&mut self, index: usize) -> Result<()> {
        self.check_bit_index(index)?;
        self.bit_cursor = Cursor::At(index);
        Ok(())
    }

    /// Position the byte cursor at `index`.
    pub fn seek_byte(&mut self, index: usize) -> Result<()> {
        self.check_byte_index(index)?;
        self.byte_cursor = Cursor::At(index);
        Ok(())
    }

    /// Read the bit under the bit cursor and advance it.
    pub fn read_next_bit(&mut self) -> Result<bool> {
        let index = self.bit_cursor.advance(self.num_bits, Unit::Bit)?;
        Ok(self.bit(index))
    }

    /// Write the bit under the bit cursor and advance it.
    pub fn write_next_bit(&mut self, value: bool) -> Result<()> {
        let index = self.bit_cursor.advance(self.num_bits, Unit::Bit)?;
        self.put_bit(index, value);
        Ok(())
    }

    /// Read the byte under the byte cursor and advance it.
    pub fn read_next_byte(&mut self) -> Result<u8> {
        let index = self.byte_cursor.advance(self.data.len(), Unit::Byte)?;
        Ok(self.data[index])
    }

    /// Write the byte under the byte cursor and advance it.
    pub fn write_next_byte(&mut self, value: u8) -> Result<()> {
        let index = self.byte_cursor.advance(self.data.len(), Unit::Byte)?;
        self.data[index] = value;
        Ok(())
    }

    /// Zero every storage byte. Cursor positions are kept.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Render the addressable bits as `'0'`/`'1'` characters, highest bit
    /// index first.
    pub fn render(&self) -> String {
        (0..self.num_bits)
            .rev()
            .map(|index| if self.bit(index) { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

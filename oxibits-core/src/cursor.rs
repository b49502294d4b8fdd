//! Sequential access cursors.
//!
//! A [`BitSequence`](crate::BitSequence) carries two independent cursors, one
//! counting bits and one counting bytes. A cursor starts out [`Cursor::Unset`]
//! and only becomes usable after an explicit seek.

use crate::error::{OxiBitsError, Result, Unit};

/// Position of a sequential cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Never positioned; sequential access fails until a seek happens.
    #[default]
    Unset,
    /// Next index to be read or written. May equal the bound once the
    /// cursor has walked off the end.
    At(usize),
}

impl Cursor {
    /// Get the current position, or `None` if the cursor was never seeked.
    pub fn position(&self) -> Option<usize> {
        match *self {
            Cursor::Unset => None,
            Cursor::At(pos) => Some(pos),
        }
    }

    /// Claim the current position and step past it.
    ///
    /// Returns the index to access. The cursor is left untouched when the
    /// call fails.
    pub(crate) fn advance(&mut self, bound: usize, unit: Unit) -> Result<usize> {
        match *self {
            Cursor::Unset => Err(OxiBitsError::cursor_not_initialized(unit)),
            Cursor::At(pos) if pos >= bound => Err(OxiBitsError::cursor_exhausted(unit, pos)),
            Cursor::At(pos) => {
                *self = Cursor::At(pos + 1);
                Ok(pos)
            }
        }
    }
}

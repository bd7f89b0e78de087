//! Write half of the cursor pair.
//!
//! A [`WriteCursor`] owns an appendable buffer. Writes at the current
//! position overwrite existing bytes and append once they run off the end,
//! so a cursor repositioned with [`WriteCursor::set_offset`] patches bytes
//! in place. Unlike the read half, repositioning is bounds-checked: seeking
//! is only meaningful for overwrite, never for append.
//!
//! Finalization is by ownership: [`WriteCursor::into_bytes`] consumes the
//! cursor and hands the accumulated buffer back, releasing the storage
//! deterministically with it.

use alloc::vec::Vec;

use crate::{
    error::{Error, Result},
    options::{CursorOptions, Endian},
    value::Int,
};

/// A position-tracking writer over an owned, growable byte buffer.
///
/// # Examples
///
/// ```rust
/// use bincursor::WriteCursor;
///
/// let mut cursor = WriteCursor::new();
/// cursor.write_word(0xCAFE);
/// cursor.write(b"name\0");
/// assert_eq!(cursor.into_bytes(), b"\xFE\xCAname\0");
/// ```
#[derive(Debug, Clone)]
pub struct WriteCursor {
    data: Vec<u8>,
    offset: usize,
    options: CursorOptions,
}

impl WriteCursor {
    /// Creates an empty cursor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(CursorOptions::default())
    }

    /// Creates an empty cursor with explicit options.
    #[must_use]
    pub fn with_options(options: CursorOptions) -> Self {
        Self {
            data: Vec::new(),
            offset: 0,
            options,
        }
    }

    /// Creates a cursor over existing bytes, positioned at the start. Writes
    /// overwrite the existing content until they run off the end.
    #[must_use]
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            data,
            offset: 0,
            options: CursorOptions::default(),
        }
    }

    /// The current position.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.offset
    }

    /// Bytes between the current position and the end of the accumulated
    /// buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Returns `true` when the position is at (or past) the end of the
    /// accumulated buffer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total length of the accumulated buffer, ignoring the position.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.data.len()
    }

    /// Repositions the cursor for an in-place overwrite.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `value` is not strictly less than the
    /// current total length.
    pub fn set_offset(&mut self, value: usize) -> Result<()> {
        if value >= self.data.len() {
            return Err(Error::OutOfRange {
                offset: value,
                len: self.data.len(),
            });
        }
        self.offset = value;
        Ok(())
    }

    /// Advances the position by `n` without writing. The gap reads as zero
    /// once later writes materialize it.
    pub fn skip_bytes(&mut self, n: usize) {
        self.offset += n;
    }

    /// Writes one byte.
    pub fn write_byte(&mut self, value: Int) {
        self.write_fixed(value, 1);
    }

    /// Writes a two-byte integer in the configured byte order.
    pub fn write_word(&mut self, value: Int) {
        self.write_fixed(value, 2);
    }

    /// Writes a four-byte integer in the configured byte order.
    pub fn write_dword(&mut self, value: Int) {
        self.write_fixed(value, 4);
    }

    /// Writes an eight-byte integer in the configured byte order.
    pub fn write_qword(&mut self, value: Int) {
        self.write_fixed(value, 8);
    }

    /// Writes an arbitrary byte sequence at the current position.
    pub fn write(&mut self, bytes: &[u8]) {
        self.put(bytes);
    }

    /// Consumes the cursor and returns the accumulated bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// The accumulated bytes, without finalizing the cursor.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    // Values are truncated to the target width (two's complement), so signed
    // and unsigned writes share one encoding.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn write_fixed(&mut self, value: Int, width: usize) {
        let raw = value as u64;
        let mut buf = [0u8; 8];
        for (i, slot) in buf.iter_mut().enumerate().take(width) {
            let byte_index = match self.options.endian {
                Endian::Little => i,
                Endian::Big => width - 1 - i,
            };
            *slot = (raw >> (8 * byte_index)) as u8;
        }
        self.put(&buf[..width]);
    }

    // Overwrite-then-append; a gap left by skip_bytes zero-fills first.
    fn put(&mut self, bytes: &[u8]) {
        if self.offset > self.data.len() {
            self.data.resize(self.offset, 0);
        }
        let overlap = (self.data.len() - self.offset).min(bytes.len());
        self.data[self.offset..self.offset + overlap].copy_from_slice(&bytes[..overlap]);
        self.data.extend_from_slice(&bytes[overlap..]);
        self.offset += bytes.len();
    }
}

impl Default for WriteCursor {
    fn default() -> Self {
        Self::new()
    }
}

//! Read half of the cursor pair.
//!
//! A [`ReadCursor`] is a shared immutable view over a byte buffer plus a
//! position. Every byte-sequence read hands back a subslice of the
//! underlying buffer; the cursor never copies payload bytes.
//!
//! The decoding policy is tolerant: [`ReadCursor::read`] past the end of the
//! buffer truncates to the bytes available instead of failing, emitting a
//! `tracing` diagnostic at debug level. Fixed-width reads are strict (a
//! four-byte integer with two bytes left is [`Error::ShortRead`]), so
//! callers can tell a bounds violation apart from a short tail.

use bstr::ByteSlice;

use crate::{
    error::{Error, Result},
    options::{CursorOptions, Endian, Sign},
    value::Int,
};

/// A position-tracking reader over a borrowed byte buffer.
///
/// Cloning a cursor clones only the view and position; two clones read the
/// same underlying bytes independently.
///
/// # Examples
///
/// ```rust
/// use bincursor::ReadCursor;
///
/// let mut cursor = ReadCursor::new(&[0x10, 0x27, 0x00, 0x00]);
/// assert_eq!(cursor.read_dword()?, 10_000);
/// assert_eq!(cursor.len(), 0);
/// # Ok::<(), bincursor::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReadCursor<'a> {
    pub(crate) data: &'a [u8],
    pub(crate) offset: usize,
    pub(crate) options: CursorOptions,
}

impl<'a> ReadCursor<'a> {
    /// Creates a cursor over `data` with default options (little-endian,
    /// unsigned, 4-byte string alignment).
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, CursorOptions::default())
    }

    /// Creates a cursor over `data` with explicit options.
    #[must_use]
    pub fn with_options(data: &'a [u8], options: CursorOptions) -> Self {
        Self {
            data,
            offset: 0,
            options,
        }
    }

    /// The current position.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.offset
    }

    /// Bytes remaining between the current position and the end of the
    /// buffer. Zero when the position has been moved past the end.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    /// Returns `true` when no bytes remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total length of the underlying buffer, ignoring the position.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.data.len()
    }

    /// The options this cursor was built with.
    #[must_use]
    pub fn options(&self) -> CursorOptions {
        self.options
    }

    /// Sets the position directly.
    ///
    /// The read half places no bound on the value; reads from a position
    /// past the end of the buffer simply observe an exhausted buffer.
    pub fn set_offset(&mut self, value: usize) {
        self.offset = value;
    }

    /// Advances the position by `n` without reading. May move past the end
    /// of the buffer.
    pub fn skip_bytes(&mut self, n: usize) {
        self.offset += n;
    }

    /// Reads up to `n` bytes from the current position.
    ///
    /// If fewer than `n` bytes remain the result is silently truncated to
    /// the remaining length and the position lands at end-of-buffer. No
    /// error is raised; a diagnostic is emitted at debug level.
    pub fn read(&mut self, n: usize) -> &'a [u8] {
        let remaining = self.len();
        let take = if n > remaining {
            tracing::debug!(requested = n, remaining, "read truncated to remaining bytes");
            remaining
        } else {
            n
        };
        let start = self.offset.min(self.data.len());
        let out = &self.data[start..start + take];
        self.offset += take;
        out
    }

    /// Reads `size` bytes at `offset` without disturbing the current
    /// position.
    ///
    /// Compatibility behavior: when `offset` lies past the end of the
    /// buffer, the fallback offset is computed from the *current position*
    /// (`total_len - tell()`), not from the requested offset.
    pub fn read_at(&mut self, offset: usize, size: usize) -> &'a [u8] {
        let offset = if offset > self.data.len() {
            tracing::debug!(offset, len = self.data.len(), "offset past end of buffer");
            self.data.len().saturating_sub(self.offset)
        } else {
            offset
        };
        let saved = self.tell();
        self.set_offset(offset);
        let out = self.read(size);
        self.set_offset(saved);
        out
    }

    /// Reads one byte, interpreted per the configured signedness.
    ///
    /// # Errors
    ///
    /// [`Error::ShortRead`] when the buffer is exhausted.
    pub fn read_byte(&mut self) -> Result<Int> {
        self.read_fixed(1)
    }

    /// Reads a two-byte integer, honoring endianness and signedness.
    ///
    /// # Errors
    ///
    /// [`Error::ShortRead`] when fewer than two bytes remain.
    pub fn read_word(&mut self) -> Result<Int> {
        self.read_fixed(2)
    }

    /// Reads a four-byte integer, honoring endianness and signedness.
    ///
    /// # Errors
    ///
    /// [`Error::ShortRead`] when fewer than four bytes remain.
    pub fn read_dword(&mut self) -> Result<Int> {
        self.read_fixed(4)
    }

    /// Reads an eight-byte integer, honoring endianness and signedness.
    ///
    /// # Errors
    ///
    /// [`Error::ShortRead`] when fewer than eight bytes remain.
    pub fn read_qword(&mut self) -> Result<Int> {
        self.read_fixed(8)
    }

    // Fixed-width reads route through read_at so the clamp policy is applied
    // in exactly one place; the position advances only on success.
    fn read_fixed(&mut self, width: usize) -> Result<Int> {
        let bytes = self.read_at(self.offset, width);
        if bytes.len() < width {
            return Err(Error::ShortRead {
                needed: width,
                got: bytes.len(),
            });
        }
        self.offset += width;
        Ok(decode_fixed(bytes, self.options))
    }

    // Single raw byte for codec internals: no sign interpretation.
    pub(crate) fn next_raw_byte(&mut self) -> Result<u8> {
        let bytes = self.read_at(self.offset, 1);
        match bytes.first() {
            Some(&b) => {
                self.offset += 1;
                Ok(b)
            }
            None => Err(Error::ShortRead { needed: 1, got: 0 }),
        }
    }

    /// Reads bytes up to, and not including, the next zero byte.
    ///
    /// The position ends exactly on the terminator; skipping it is the
    /// caller's business. Running past the end of the buffer is equivalent
    /// to exhausting it: the unterminated tail is returned as-is.
    pub fn read_string(&mut self) -> &'a [u8] {
        if self.offset >= self.data.len() {
            return &self.data[self.data.len()..];
        }
        let start = self.offset;
        let mut end = start;
        while end < self.data.len() && self.data[end] != 0 {
            end += 1;
        }
        self.offset = end;
        &self.data[start..end]
    }

    /// Reads a zero-terminated string padded to the configured alignment
    /// boundary ([`CursorOptions::alignment`], default 4).
    ///
    /// See [`ReadCursor::read_aligned_string_to`].
    pub fn read_aligned_string(&mut self) -> &'a [u8] {
        self.read_aligned_string_to(self.options.alignment)
    }

    /// Reads a zero-terminated string, then consumes padding until the total
    /// consumed length is a multiple of `align`. Trailing zero bytes are
    /// trimmed from the result.
    ///
    /// Compatibility behavior: a string whose length is already a multiple
    /// of `align` still consumes a full further `align` bytes: the padding
    /// rounds up to the *next* multiple, never to zero. Padding consumption
    /// stops early at end-of-buffer.
    ///
    /// # Panics
    ///
    /// Panics if `align` is zero.
    pub fn read_aligned_string_to(&mut self, align: usize) -> &'a [u8] {
        assert!(align > 0, "alignment must be non-zero");
        let begin = self.offset.min(self.data.len());
        let len = self.read_string().len();
        // Padding is counted from the terminator onward.
        let mut pad = align - len % align;
        while pad > 0 && self.offset < self.data.len() {
            self.offset += 1;
            pad -= 1;
        }
        let end = self.offset.min(self.data.len());
        let region: &'a [u8] = &self.data[begin..end];
        region.trim_end_with(|c| c == '\0')
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn decode_fixed(bytes: &[u8], options: CursorOptions) -> Int {
    let mut raw: u64 = 0;
    match options.endian {
        Endian::Little => {
            for &b in bytes.iter().rev() {
                raw = raw << 8 | u64::from(b);
            }
        }
        Endian::Big => {
            for &b in bytes {
                raw = raw << 8 | u64::from(b);
            }
        }
    }
    match options.sign {
        Sign::Unsigned => Int::from(raw),
        Sign::Signed => {
            // Sign-extend from the width's top bit.
            let shift = (64 - 8 * bytes.len()) as u32;
            Int::from(((raw << shift) as i64) >> shift)
        }
    }
}

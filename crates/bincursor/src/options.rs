//! Cursor configuration: byte order, signedness, and string alignment.

/// Byte order for multi-byte fixed-width reads and writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endian {
    /// Least-significant byte first.
    #[default]
    Little,
    /// Most-significant byte first.
    Big,
}

/// Integer interpretation for fixed-width reads.
///
/// Signedness only affects how read bytes are *interpreted*: a signed read
/// sign-extends from the width's top bit. Writes encode two's complement
/// either way, so the bytes produced are identical under both settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sign {
    /// Zero-extend read values.
    #[default]
    Unsigned,
    /// Sign-extend read values from the width's top bit.
    Signed,
}

/// Configuration shared by both cursor halves.
///
/// # Examples
///
/// ```rust
/// use bincursor::{CursorOptions, Endian, ReadCursor, Sign};
///
/// let options = CursorOptions {
///     endian: Endian::Big,
///     sign: Sign::Signed,
///     ..CursorOptions::default()
/// };
/// let mut cursor = ReadCursor::with_options(&[0xFF, 0xFE], options);
/// assert_eq!(cursor.read_word()?, -2);
/// # Ok::<(), bincursor::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorOptions {
    /// Byte order for multi-byte values. Defaults to [`Endian::Little`].
    pub endian: Endian,
    /// Signedness of fixed-width reads. Defaults to [`Sign::Unsigned`].
    pub sign: Sign,
    /// Boundary used by [`ReadCursor::read_aligned_string`]. Must be
    /// non-zero. Defaults to `4`.
    ///
    /// [`ReadCursor::read_aligned_string`]: crate::ReadCursor::read_aligned_string
    pub alignment: usize,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            endian: Endian::default(),
            sign: Sign::default(),
            alignment: 4,
        }
    }
}

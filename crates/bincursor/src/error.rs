use thiserror::Error;

/// Alias for `Result` with this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by cursor, codec, and field-spec operations.
///
/// Every variant is fatal to the call that raised it and is never retried
/// internally. Tolerant truncation (a [`ReadCursor::read`] that runs past
/// the end of the buffer) is *not* an error and never appears here.
///
/// [`ReadCursor::read`]: crate::ReadCursor::read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A write-cursor reposition at or beyond the end of the accumulated
    /// buffer. The write half is bounds-checked because seeking backward
    /// repositions for overwrite, not append.
    #[error("offset {offset} out of range, must be less than {len}")]
    OutOfRange {
        /// The rejected offset.
        offset: usize,
        /// Total length of the accumulated buffer.
        len: usize,
    },

    /// A 7-bit encoded integer whose leading byte signals a width the format
    /// does not define (no 5-byte form exists).
    #[error("invalid 7-bit encoded integer")]
    InvalidEncoding,

    /// A field-spec group with no name/parser pair in it.
    #[error("malformed field spec: empty field group")]
    MalformedFieldSpec,

    /// A fixed-width read with fewer bytes remaining than the width requires.
    #[error("short read: needed {needed} bytes, got {got}")]
    ShortRead {
        /// Bytes the operation required.
        needed: usize,
        /// Bytes actually available.
        got: usize,
    },

    /// A UTF-16 payload with an odd byte count or an unpaired surrogate.
    #[error("invalid UTF-16 string payload")]
    InvalidUtf16,
}

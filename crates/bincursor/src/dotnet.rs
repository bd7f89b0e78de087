//! Compact variable-length integers and the heap encodings built on them.
//!
//! Metadata heaps store their entries in a handful of shapes: null-terminated
//! identifier strings, length-prefixed UTF-16 user strings (where an odd
//! length prefix signals a trailing flag byte), 16-byte GUIDs, and opaque
//! length-prefixed blobs. The length prefixes use a compact big-endian-ish
//! encoding whose leading bits select a 1-, 2-, or 4-byte form.
//!
//! All of these operate through the read half of the cursor and inherit its
//! tolerant truncation policy for payload bytes.

use alloc::{format, string::String};

use uuid::Uuid;

use crate::{
    error::{Error, Result},
    reader::ReadCursor,
    value::Int,
};

/// A length-prefixed UTF-16 user string, together with the trailing flag
/// byte an odd length prefix carries.
///
/// The flag marks strings containing characters that need special handling
/// when reinterpreted as identifiers; it is part of the stored entry, not of
/// the text, so it is surfaced separately rather than folded into the
/// decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserString {
    /// The decoded text.
    pub text: String,
    /// The trailing flag byte, when the length prefix was odd.
    pub flag: Option<bool>,
}

impl<'a> ReadCursor<'a> {
    /// Decodes a compact variable-length unsigned integer.
    ///
    /// The leading byte's top bits select the width: `0xxxxxxx` is a
    /// one-byte value, `10xxxxxx` prefixes one more byte, `110xxxxx`
    /// prefixes three more. Continuation bytes extend the value eight bits
    /// at a time, most-significant first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEncoding`] when the leading byte signals a width the
    /// format does not define, [`Error::ShortRead`] when the buffer ends
    /// mid-value.
    pub fn read_7bit_encoded_int(&mut self) -> Result<Int> {
        let b = self.next_raw_byte()?;
        if b & 0x80 == 0 {
            return Ok(Int::from(b));
        }
        if b & 0x40 == 0 {
            let mut value = Int::from(b & 0x3f);
            value = value << 8 | Int::from(self.next_raw_byte()?);
            return Ok(value);
        }
        if b & 0x20 == 0 {
            let mut value = Int::from(b & 0x1f);
            for _ in 0..3 {
                value = value << 8 | Int::from(self.next_raw_byte()?);
            }
            return Ok(value);
        }
        Err(Error::InvalidEncoding)
    }

    /// Reads a zero-terminated string and consumes the terminator.
    pub fn read_dotnet_string(&mut self) -> &'a [u8] {
        let string = self.read_string();
        self.skip_bytes(1);
        string
    }

    /// Reads a length-prefixed UTF-16 user string.
    ///
    /// An odd length prefix means the last prefixed byte is a flag, not
    /// payload: `length - 1` bytes of text followed by one flag byte. An
    /// even prefix is all payload.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidUtf16`] when the payload byte count is odd or the
    /// code units contain an unpaired surrogate; [`Error::ShortRead`] when
    /// the flag byte is missing; [`Error::InvalidEncoding`] from the length
    /// prefix.
    pub fn read_dotnet_unicode_string(&mut self) -> Result<UserString> {
        let length = self.read_length_prefix()?;
        let (payload, flag) = if length % 2 == 1 {
            let payload = self.read(length - 1);
            let flag = self.next_raw_byte()?;
            (payload, Some(flag != 0))
        } else {
            (self.read(length), None)
        };
        Ok(UserString {
            text: decode_utf16le(payload)?,
            flag,
        })
    }

    /// Reads 16 bytes and formats them as a canonical hyphenated GUID
    /// string, interpreting the bytes in the RFC 4122 field order.
    ///
    /// # Errors
    ///
    /// [`Error::ShortRead`] when fewer than 16 bytes remain.
    pub fn read_dotnet_guid(&mut self) -> Result<String> {
        let bytes = self.read(16);
        if bytes.len() < 16 {
            return Err(Error::ShortRead {
                needed: 16,
                got: bytes.len(),
            });
        }
        let mut raw = [0u8; 16];
        raw.copy_from_slice(bytes);
        Ok(format!("{}", Uuid::from_bytes(raw)))
    }

    /// Reads a length-prefixed opaque blob.
    ///
    /// The payload inherits the tolerant read policy: a blob cut short by
    /// the end of the buffer yields the bytes available.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEncoding`] from the length prefix.
    pub fn read_dotnet_blob(&mut self) -> Result<&'a [u8]> {
        let length = self.read_length_prefix()?;
        Ok(self.read(length))
    }

    fn read_length_prefix(&mut self) -> Result<usize> {
        usize::try_from(self.read_7bit_encoded_int()?).map_err(|_| Error::InvalidEncoding)
    }
}

fn decode_utf16le(payload: &[u8]) -> Result<String> {
    if payload.len() % 2 != 0 {
        return Err(Error::InvalidUtf16);
    }
    let units = payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<core::result::Result<String, _>>()
        .map_err(|_| Error::InvalidUtf16)
}

//! Decoded value types shared by field parsing and the offset cache.

use alloc::{string::String, vec::Vec};
use core::fmt;

use bstr::BStr;

/// Scalar type returned by fixed-width and variable-length integer reads.
///
/// A single signedness-configured read surface has to span both `u64::MAX`
/// and `i64::MIN`; `i128` is the one primitive that covers both ranges.
pub type Int = i128;

/// A decoded result: an integer scalar, raw bytes, or decoded text.
///
/// String- and byte-valued results can be indexed by offset in a [`Cache`],
/// because one such value may begin partway through another; the
/// [`is_offset_indexable`] capability is checked once at insertion.
///
/// [`Cache`]: crate::Cache
/// [`is_offset_indexable`]: Value::is_offset_indexable
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    /// A fixed-width or variable-length integer.
    Int(Int),
    /// A raw byte sequence (blob contents, undecoded string bytes).
    Bytes(Vec<u8>),
    /// Decoded text.
    Str(String),
}

impl Value {
    /// Returns `true` if this value can participate in offset-aliasing
    /// lookups, i.e. it is string- or byte-valued.
    #[must_use]
    pub fn is_offset_indexable(&self) -> bool {
        matches!(self, Self::Bytes(_) | Self::Str(_))
    }

    /// Byte length of string/byte values, `None` for scalars.
    #[must_use]
    pub fn byte_len(&self) -> Option<usize> {
        match self {
            Self::Int(_) => None,
            Self::Bytes(b) => Some(b.len()),
            Self::Str(s) => Some(s.len()),
        }
    }

    /// The suffix of this value starting at byte `offset`, as a new value.
    ///
    /// Returns `None` for scalars, for out-of-range offsets, and for string
    /// values where `offset` lands inside a UTF-8 code point.
    #[must_use]
    pub(crate) fn slice_from(&self, offset: usize) -> Option<Value> {
        match self {
            Self::Int(_) => None,
            Self::Bytes(b) => b.get(offset..).map(|tail| Self::Bytes(tail.to_vec())),
            Self::Str(s) => s.get(offset..).map(|tail| Self::Str(tail.into())),
        }
    }

    /// Returns the integer scalar, if this is [`Value::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<Int> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the raw bytes, if this is [`Value::Bytes`].
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the text, if this is [`Value::Str`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bincursor::Value;
    ///
    /// let v = Value::from("heap entry");
    /// assert_eq!(v.as_str(), Some("heap entry"));
    /// assert_eq!(v.as_int(), None);
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Int> for Value {
    fn from(v: Int) -> Self {
        Self::Int(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

// Byte values debug-print as byte strings, not number lists.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "Int({i})"),
            Self::Bytes(b) => write!(f, "Bytes({:?})", BStr::new(b)),
            Self::Str(s) => write!(f, "Str({s:?})"),
        }
    }
}

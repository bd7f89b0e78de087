//! Position-tracking cursors over byte buffers, and a decode cache that
//! understands values which alias into other values' storage.
//!
//! The crate has three layers:
//!
//! - [`ReadCursor`] / [`WriteCursor`]: the paired halves of the cursor
//!   abstraction. The read half is a shared immutable view with fixed-width
//!   integer reads honoring configurable endianness and signedness; the write
//!   half owns an appendable buffer with overwrite-then-append semantics.
//! - A variable-length codec layered on the read half: compact 7-bit encoded
//!   integers and the null-terminated, alignment-padded, length-prefixed
//!   UTF-16, GUID, and blob encodings used by metadata heaps.
//! - [`Cache`] / [`CacheRegistry`] / [`Memoized`]: an offset-indexed memo
//!   cache. When one decoded string begins partway through another (chained
//!   string tables index into one another), the cache derives the second from
//!   the first by slicing instead of re-reading raw storage.
//!
//! Reads past the end of a buffer are tolerant by design: they truncate to
//! the bytes available rather than failing, so partially damaged input still
//! decodes as far as it goes. Fixed-width reads are the exception: a `u32`
//! cut short is a bounds violation, reported as [`Error::ShortRead`].
//!
//! # Examples
//!
//! ```rust
//! use bincursor::ReadCursor;
//!
//! // 7-bit encoded length 7 (odd), six bytes of UTF-16 "abc", flag byte.
//! let heap = b"\x07a\x00b\x00c\x00\x01";
//! let mut cursor = ReadCursor::new(heap);
//! let s = cursor.read_dotnet_unicode_string()?;
//! assert_eq!(s.text, "abc");
//! assert_eq!(s.flag, Some(true));
//! # Ok::<(), bincursor::Error>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod cache;
mod dotnet;
mod error;
mod fields;
mod memo;
mod options;
mod reader;
mod value;
mod writer;

#[cfg(test)]
mod tests;

pub use cache::{Cache, CacheRegistry};
pub use dotnet::UserString;
pub use error::{Error, Result};
pub use fields::{FieldMap, FieldParser, FieldSpec};
pub use memo::Memoized;
pub use options::{CursorOptions, Endian, Sign};
pub use reader::ReadCursor;
pub use value::{Int, Value};
pub use writer::WriteCursor;

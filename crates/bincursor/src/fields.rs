//! Sequential field parsing over a shared cursor.
//!
//! A field spec is an ordered list of groups, each naming a parser for one
//! field. [`ReadCursor::read_fields`] threads the same cursor through the
//! groups in sequence and collects the parsed values by name.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::{
    error::{Error, Result},
    reader::ReadCursor,
    value::Value,
};

/// Parsed field names mapped to their decoded values.
pub type FieldMap = BTreeMap<String, Value>;

/// A parser for one named field.
///
/// Implemented for any `Fn(&mut ReadCursor) -> Result<Value>` closure, so
/// ad-hoc parsers need no named type:
///
/// ```rust
/// use bincursor::{FieldParser, FieldSpec, ReadCursor, Value};
///
/// let dword = |c: &mut ReadCursor<'_>| c.read_dword().map(Value::Int);
/// let spec = [FieldSpec::named("timestamp", &dword)];
/// let mut cursor = ReadCursor::new(&[0x40, 0xE2, 0x01, 0x00]);
/// let fields = cursor.read_fields(&spec)?;
/// assert_eq!(fields["timestamp"], Value::Int(123_456));
/// # Ok::<(), bincursor::Error>(())
/// ```
pub trait FieldParser {
    /// Parses one value at the cursor's current position.
    ///
    /// # Errors
    ///
    /// Whatever the underlying read operations produce.
    fn parse(&self, cursor: &mut ReadCursor<'_>) -> Result<Value>;
}

impl<F> FieldParser for F
where
    F: Fn(&mut ReadCursor<'_>) -> Result<Value>,
{
    fn parse(&self, cursor: &mut ReadCursor<'_>) -> Result<Value> {
        self(cursor)
    }
}

/// One ordered group of `(name, parser)` pairs within a field spec.
///
/// Compatibility behavior: only the *first* pair of a group is parsed;
/// additional pairs ride along ignored. A group with no pairs at all is
/// malformed.
#[derive(Default)]
pub struct FieldSpec<'p> {
    entries: Vec<(String, &'p dyn FieldParser)>,
}

impl<'p> FieldSpec<'p> {
    /// A group with a single named parser.
    #[must_use]
    pub fn named(name: impl Into<String>, parser: &'p dyn FieldParser) -> Self {
        Self {
            entries: alloc::vec![(name.into(), parser)],
        }
    }

    /// Appends a further pair to the group. Pairs after the first are not
    /// parsed.
    #[must_use]
    pub fn and(mut self, name: impl Into<String>, parser: &'p dyn FieldParser) -> Self {
        self.entries.push((name.into(), parser));
        self
    }

    fn first(&self) -> Option<&(String, &'p dyn FieldParser)> {
        self.entries.first()
    }
}

impl ReadCursor<'_> {
    /// Parses each field-spec group in order, threading this cursor through
    /// every parser, and collects the results by name.
    ///
    /// Only the first pair of each group is invoked.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedFieldSpec`] for an empty group; otherwise whatever
    /// the first parser of a group returns.
    pub fn read_fields(&mut self, specs: &[FieldSpec<'_>]) -> Result<FieldMap> {
        let mut result = FieldMap::new();
        for spec in specs {
            let Some((name, parser)) = spec.first() else {
                return Err(Error::MalformedFieldSpec);
            };
            let parsed = parser.parse(self)?;
            result.insert(name.clone(), parsed);
        }
        Ok(result)
    }
}

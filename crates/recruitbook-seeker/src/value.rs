//! Runtime field values read from a record.
//!
//! The [`FieldValue`] enum is what a [`Searchable`](crate::Searchable) record
//! hands back for a field. Values borrow from the record.

/// Runtime value for comparison, borrowed from the source record.
///
/// # Example
///
/// ```
/// use recruitbook_seeker::{FieldKind, FieldValue};
///
/// struct Contact {
///     name: String,
///     salary: u64,
/// }
///
/// fn accessor(contact: &Contact, field: FieldKind) -> FieldValue<'_> {
///     match field {
///         FieldKind::Name => FieldValue::Text(&contact.name),
///         FieldKind::ExpectedSalary => FieldValue::Number(contact.salary),
///         _ => FieldValue::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text (borrowed).
    Text(&'a str),
    /// Non-negative integer.
    Number(u64),
    /// A set of single-word values, such as tags.
    Words(&'a [String]),
    /// Field not present or not set on this record.
    None,
}

impl<'a> FieldValue<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, FieldValue::None)
    }

    /// Extracts the text value, if present.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Iterates the words of this value.
    ///
    /// Text is split on whitespace, word sets are yielded as-is, numbers and
    /// `None` yield nothing.
    pub fn words(&self) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match *self {
            FieldValue::Text(s) => Box::new(s.split_whitespace()),
            FieldValue::Words(words) => Box::new(words.iter().map(String::as_str)),
            FieldValue::Number(_) | FieldValue::None => Box::new(std::iter::empty()),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Text(s)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(s: &'a String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<u64> for FieldValue<'_> {
    fn from(n: u64) -> Self {
        FieldValue::Number(n)
    }
}

impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(words: &'a [String]) -> Self {
        FieldValue::Words(words)
    }
}

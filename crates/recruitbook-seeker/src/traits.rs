//! Record access for query evaluation.
//!
//! The record store owns candidate records; the query engine only reads them
//! through [`Searchable`].

use crate::field::FieldKind;
use crate::value::FieldValue;

/// Trait for records that can be filtered by a [`Query`](crate::Query).
///
/// # Example
///
/// ```
/// use recruitbook_seeker::{parse_find_arguments, FieldKind, FieldValue, Searchable};
///
/// struct Contact {
///     name: String,
///     tags: Vec<String>,
/// }
///
/// impl Searchable for Contact {
///     fn field_value(&self, field: FieldKind) -> FieldValue<'_> {
///         match field {
///             FieldKind::Name => FieldValue::Text(&self.name),
///             FieldKind::Tag => FieldValue::Words(&self.tags),
///             _ => FieldValue::None,
///         }
///     }
/// }
///
/// let contact = Contact { name: "Alice Pauline".into(), tags: vec!["friends".into()] };
/// let query = parse_find_arguments("n/alice t/FRIENDS").unwrap();
/// assert!(query.matches(&contact));
/// ```
pub trait Searchable {
    /// Returns the current value of a field.
    ///
    /// Return [`FieldValue::None`] for fields the record does not carry; no
    /// predicate matches a missing value.
    fn field_value(&self, field: FieldKind) -> FieldValue<'_>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field_value(&self, field: FieldKind) -> FieldValue<'_> {
        (**self).field_value(field)
    }
}

//! Splitting of raw command arguments into per-marker values.
//!
//! A marker is recognized only at the start of the input or right after a
//! whitespace character, so `et/Full` is never read as a `t/` marker.

use std::collections::HashMap;

use tracing::debug;

use crate::field::FieldKind;

/// Values collected for each marker in one command string.
///
/// The same marker may appear several times; its values are kept in the
/// order they were typed. The map is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMap {
    preamble: String,
    values: HashMap<FieldKind, Vec<String>>,
    order: Vec<FieldKind>,
}

impl ArgumentMap {
    /// Text before the first recognized marker, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns `true` if the marker for `field` appeared at least once.
    pub fn contains(&self, field: FieldKind) -> bool {
        self.values.contains_key(&field)
    }

    /// All values given for `field`, in encounter order.
    ///
    /// A marker typed with nothing after it yields `[""]`; an absent marker
    /// yields an empty slice.
    pub fn all_values(&self, field: FieldKind) -> &[String] {
        self.values.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The last value given for `field`, or `None` if the marker is absent.
    pub fn value_of(&self, field: FieldKind) -> Option<&str> {
        self.values
            .get(&field)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Fields whose markers appeared, in first-encounter order.
    pub fn fields(&self) -> &[FieldKind] {
        &self.order
    }

    /// Returns `true` if no marker was recognized.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn push(&mut self, field: FieldKind, value: String) {
        if !self.values.contains_key(&field) {
            self.order.push(field);
        }
        self.values.entry(field).or_default().push(value);
    }
}

struct MarkerPosition {
    field: FieldKind,
    start: usize,
    value_start: usize,
}

/// Splits `raw` at every occurrence of the markers of `fields`.
///
/// # Example
///
/// ```
/// use recruitbook_seeker::{tokenize, FieldKind};
///
/// let map = tokenize("n/Alice Bob t/friends n/Carol", &FieldKind::ALL);
/// assert_eq!(map.all_values(FieldKind::Name), ["Alice Bob", "Carol"]);
/// assert_eq!(map.value_of(FieldKind::Tag), Some("friends"));
/// assert_eq!(map.value_of(FieldKind::Email), None);
/// ```
pub fn tokenize(raw: &str, fields: &[FieldKind]) -> ArgumentMap {
    let mut positions = find_marker_positions(raw, fields);
    positions.sort_by_key(|position| position.start);
    // A field listed twice yields the same marker twice.
    positions.dedup_by_key(|position| position.start);

    let mut map = ArgumentMap {
        preamble: raw[..positions.first().map_or(raw.len(), |p| p.start)]
            .trim()
            .to_string(),
        ..ArgumentMap::default()
    };

    for (i, position) in positions.iter().enumerate() {
        let end = positions.get(i + 1).map_or(raw.len(), |next| next.start);
        map.push(position.field, raw[position.value_start..end].trim().to_string());
    }

    debug!(
        markers = map.order.len(),
        preamble_len = map.preamble.len(),
        "tokenized find arguments"
    );
    map
}

fn find_marker_positions(raw: &str, fields: &[FieldKind]) -> Vec<MarkerPosition> {
    let mut positions = Vec::new();
    for &field in fields {
        let marker = field.marker();
        for (start, _) in raw.match_indices(marker) {
            if starts_token(raw, start) {
                positions.push(MarkerPosition {
                    field,
                    start,
                    value_start: start + marker.len(),
                });
            }
        }
    }
    positions
}

fn starts_token(raw: &str, index: usize) -> bool {
    raw[..index]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let map = tokenize("", &FieldKind::ALL);
        assert!(map.is_empty());
        assert_eq!(map.preamble(), "");
    }

    #[test]
    fn preamble_only() {
        let map = tokenize("  some random text ", &FieldKind::ALL);
        assert!(map.is_empty());
        assert_eq!(map.preamble(), "some random text");
    }

    #[test]
    fn preamble_before_marker() {
        let map = tokenize("junk n/Alice", &FieldKind::ALL);
        assert_eq!(map.preamble(), "junk");
        assert_eq!(map.value_of(FieldKind::Name), Some("Alice"));
    }

    #[test]
    fn values_are_trimmed_but_keep_inner_whitespace() {
        let map = tokenize("n/\n Alice \n \t Bob  \t", &FieldKind::ALL);
        assert_eq!(map.value_of(FieldKind::Name), Some("Alice \n \t Bob"));
    }

    #[test]
    fn blank_marker_is_present() {
        let map = tokenize(" n/   e/", &FieldKind::ALL);
        assert!(map.contains(FieldKind::Name));
        assert!(map.contains(FieldKind::Email));
        assert_eq!(map.value_of(FieldKind::Name), Some(""));
        assert_eq!(map.value_of(FieldKind::Email), Some(""));
        assert!(!map.contains(FieldKind::Phone));
    }

    #[test]
    fn repeated_markers_keep_order() {
        let map = tokenize("t/first n/Alice t/second", &FieldKind::ALL);
        assert_eq!(map.all_values(FieldKind::Tag), ["first", "second"]);
        assert_eq!(map.value_of(FieldKind::Tag), Some("second"));
        assert_eq!(map.fields(), [FieldKind::Tag, FieldKind::Name]);
    }

    #[test]
    fn marker_must_start_a_token() {
        let map = tokenize("et/Full time", &FieldKind::ALL);
        assert_eq!(map.value_of(FieldKind::EmploymentType), Some("Full time"));
        assert!(!map.contains(FieldKind::Tag));

        let map = tokenize("n/ann/bob", &FieldKind::ALL);
        assert_eq!(map.value_of(FieldKind::Name), Some("ann/bob"));
    }

    #[test]
    fn only_requested_markers_are_recognized() {
        let map = tokenize("n/Alice p/123", &[FieldKind::Name]);
        assert_eq!(map.value_of(FieldKind::Name), Some("Alice p/123"));
        assert!(!map.contains(FieldKind::Phone));
    }

    #[test]
    fn duplicate_fields_scan_once() {
        let map = tokenize("n/Alice", &[FieldKind::Name, FieldKind::Name]);
        assert_eq!(map.all_values(FieldKind::Name), ["Alice"]);
        assert_eq!(map.fields(), [FieldKind::Name]);
    }

    #[test]
    fn unicode_before_marker() {
        let map = tokenize("é n/Zoë", &FieldKind::ALL);
        assert_eq!(map.preamble(), "é");
        assert_eq!(map.value_of(FieldKind::Name), Some("Zoë"));
    }
}

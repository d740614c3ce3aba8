//! Single-field predicates.
//!
//! A [`FieldPredicate`] pairs one [`FieldKind`] with a validated keyword
//! list. It matches a record when any keyword matches the record's value for
//! that field, using the field's [`MatchStyle`].

use tracing::debug;

use crate::config::DEFAULT_SALARY_RANGE;
use crate::error::Result;
use crate::field::{FieldKind, MatchStyle};
use crate::matching::{contains_ignore_case, eq_ignore_case, within_range};
use crate::traits::Searchable;
use crate::validate::validate;
use crate::value::FieldValue;

/// A match rule for one field, built from validated keywords.
///
/// Two predicates are equal when they target the same field with the same
/// keywords in the same order.
///
/// # Example
///
/// ```
/// use recruitbook_seeker::{FieldKind, FieldPredicate};
///
/// let predicate = FieldPredicate::build(FieldKind::Name, &["Alice  Bob".to_string()])
///     .unwrap()
///     .unwrap();
/// assert_eq!(predicate.keywords(), ["Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPredicate {
    field: FieldKind,
    keywords: Vec<String>,
}

impl FieldPredicate {
    /// Creates a predicate from an explicit keyword list.
    ///
    /// Every keyword is validated; the first invalid one is returned as an
    /// error. An empty list is accepted and produces a predicate that matches
    /// nothing.
    pub fn new<I, S>(field: FieldKind, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        for keyword in &keywords {
            validate(field, keyword)?;
        }
        Ok(FieldPredicate { field, keywords })
    }

    /// Builds the predicate for one field from the raw values typed after its
    /// marker.
    ///
    /// Returns `Ok(None)` when there is nothing to match on: the marker was
    /// absent, or every value was blank.
    pub fn build(field: FieldKind, raw_values: &[String]) -> Result<Option<Self>> {
        let keywords = extract_keywords(field, raw_values);
        if keywords.is_empty() {
            return Ok(None);
        }

        let predicate = FieldPredicate::new(field, keywords)?;
        debug!(
            field = %field,
            keywords = predicate.keywords.len(),
            "built field predicate"
        );
        Ok(Some(predicate))
    }

    /// The field this predicate constrains.
    pub fn field(&self) -> FieldKind {
        self.field
    }

    /// The normalized keywords, in the order they were given.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Tests a record using the default salary range.
    pub fn matches<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        self.matches_value(&record.field_value(self.field), DEFAULT_SALARY_RANGE)
    }

    /// Evaluates this predicate against a field value.
    ///
    /// `salary_range` is only consulted by [`MatchStyle::Range`] fields. A
    /// missing value never matches.
    pub fn matches_value(&self, value: &FieldValue<'_>, salary_range: u64) -> bool {
        if value.is_none() {
            return false;
        }
        self.keywords
            .iter()
            .any(|keyword| self.match_keyword(value, keyword, salary_range))
    }

    fn match_keyword(&self, value: &FieldValue<'_>, keyword: &str, salary_range: u64) -> bool {
        match self.field.match_style() {
            MatchStyle::Word => value.words().any(|word| eq_ignore_case(word, keyword)),
            MatchStyle::WholeValue => match value {
                FieldValue::Text(text) => eq_ignore_case(text, keyword),
                other => other.words().any(|word| eq_ignore_case(word, keyword)),
            },
            MatchStyle::Substring => match value {
                FieldValue::Text(text) => contains_ignore_case(text, keyword),
                FieldValue::Number(n) => n.to_string().contains(keyword),
                other => other.words().any(|word| contains_ignore_case(word, keyword)),
            },
            MatchStyle::Range => {
                numeric(value).is_some_and(|n| within_range(n, keyword, salary_range))
            }
            MatchStyle::ExactNumber => numeric(value)
                .zip(keyword.parse::<u64>().ok())
                .is_some_and(|(n, target)| n == target),
        }
    }
}

fn numeric(value: &FieldValue<'_>) -> Option<u64> {
    match value {
        FieldValue::Number(n) => Some(*n),
        FieldValue::Text(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn extract_keywords(field: FieldKind, raw_values: &[String]) -> Vec<String> {
    if field.splits_keywords() {
        raw_values
            .iter()
            .flat_map(|value| value.split_whitespace())
            .map(str::to_string)
            .collect()
    } else {
        raw_values
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::person::Person;

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn built(field: FieldKind, values: &[&str]) -> FieldPredicate {
        FieldPredicate::build(field, &raw(values)).unwrap().unwrap()
    }

    #[test]
    fn equality_follows_keywords() {
        let first = FieldPredicate::new(FieldKind::EmploymentType, ["Full time"]).unwrap();
        let second =
            FieldPredicate::new(FieldKind::EmploymentType, ["Full time", "Part time"]).unwrap();
        let first_copy = FieldPredicate::new(FieldKind::EmploymentType, ["Full time"]).unwrap();

        assert_eq!(first, first);
        assert_eq!(first, first_copy);
        assert_ne!(first, second);

        let reordered =
            FieldPredicate::new(FieldKind::EmploymentType, ["Part time", "Full time"]).unwrap();
        assert_ne!(second, reordered);

        let other_case = FieldPredicate::new(FieldKind::EmploymentType, ["full time"]).unwrap();
        assert_ne!(first, other_case);
    }

    #[test]
    fn blank_values_build_nothing() {
        assert_eq!(FieldPredicate::build(FieldKind::Name, &[]).unwrap(), None);
        assert_eq!(
            FieldPredicate::build(FieldKind::Name, &raw(&["", "  \t"])).unwrap(),
            None
        );
        assert_eq!(
            FieldPredicate::build(FieldKind::EmploymentType, &raw(&["   "])).unwrap(),
            None
        );
    }

    #[test]
    fn split_fields_concatenate_values() {
        let predicate = built(FieldKind::Name, &["Alice \n Bob", "Carol"]);
        assert_eq!(predicate.keywords(), ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn whole_value_fields_keep_values() {
        let predicate = built(FieldKind::EmploymentType, &[" Full time ", "", "Internship"]);
        assert_eq!(predicate.keywords(), ["Full time", "Internship"]);
    }

    #[test]
    fn invalid_keyword_aborts() {
        let err = FieldPredicate::build(FieldKind::ExpectedSalary, &raw(&["4000 -100"])).unwrap_err();
        assert_eq!(err, QueryError::invalid_field(FieldKind::ExpectedSalary, "-100"));
    }

    #[test]
    fn word_match() {
        let alice = Person::builder().name("Alice Pauline").build();

        assert!(built(FieldKind::Name, &["alice"]).matches(&alice));
        assert!(built(FieldKind::Name, &["Carol PAULINE"]).matches(&alice));
        assert!(!built(FieldKind::Name, &["Ali"]).matches(&alice));
        assert!(!built(FieldKind::Name, &["Carol"]).matches(&alice));
    }

    #[test]
    fn word_match_is_word_bounded() {
        let person = Person::builder().role("fully remote").build();
        assert!(!built(FieldKind::Role, &["full"]).matches(&person));

        let person = Person::builder().role("full").build();
        assert!(built(FieldKind::Role, &["Full"]).matches(&person));
    }

    #[test]
    fn tag_match() {
        let person = Person::builder().tags(["young", "remote"]).build();
        assert!(built(FieldKind::Tag, &["REMOTE"]).matches(&person));
        assert!(!built(FieldKind::Tag, &["senior"]).matches(&person));
    }

    #[test]
    fn whole_value_match() {
        let intern = Person::builder().employment_type("Internship").build();
        let full_time = Person::builder().employment_type("Full time").build();

        let predicate =
            FieldPredicate::new(FieldKind::EmploymentType, ["fULL tImE", "iNtErNshiP"]).unwrap();
        assert!(predicate.matches(&intern));
        assert!(predicate.matches(&full_time));

        let partial = FieldPredicate::new(FieldKind::EmploymentType, ["Intern"]).unwrap();
        assert!(!partial.matches(&intern));

        let word = FieldPredicate::new(FieldKind::EmploymentType, ["Full"]).unwrap();
        assert!(!word.matches(&full_time));
    }

    #[test]
    fn empty_keywords_match_nothing() {
        let predicate =
            FieldPredicate::new(FieldKind::EmploymentType, Vec::<String>::new()).unwrap();
        assert!(!predicate.matches(&Person::builder().employment_type("Full time").build()));
    }

    #[test]
    fn keywords_for_other_fields_do_not_leak() {
        let person = Person::builder()
            .name("Alice")
            .phone("12345")
            .email("alice@email.com")
            .role("Software Engineer")
            .employment_type("Part time")
            .expected_salary(4000)
            .level_of_education("PhD")
            .experience(5)
            .tags(["young"])
            .build();

        let predicate = FieldPredicate::new(
            FieldKind::EmploymentType,
            [
                "Alice",
                "12345",
                "alice@email.com",
                "Software",
                "Engineer",
                "Full time",
                "4000",
                "PhD",
                "5",
                "young",
            ],
        )
        .unwrap();
        assert!(!predicate.matches(&person));
    }

    #[test]
    fn substring_match() {
        let person = Person::builder()
            .email("Alice.Tan@Example.com")
            .phone("94351253")
            .build();

        assert!(built(FieldKind::Email, &["alice.tan@example.com"]).matches(&person));
        assert!(!built(FieldKind::Email, &["bob@example.com"]).matches(&person));
        assert!(built(FieldKind::Phone, &["4351"]).matches(&person));
        assert!(built(FieldKind::Phone, &["000 253"]).matches(&person));
        assert!(!built(FieldKind::Phone, &["999"]).matches(&person));
    }

    #[test]
    fn salary_range_match() {
        let person = Person::builder().expected_salary(4000).build();

        assert!(built(FieldKind::ExpectedSalary, &["4400"]).matches(&person));
        assert!(built(FieldKind::ExpectedSalary, &["3500"]).matches(&person));
        assert!(!built(FieldKind::ExpectedSalary, &["4600"]).matches(&person));
        assert!(built(FieldKind::ExpectedSalary, &["9000 4100"]).matches(&person));
    }

    #[test]
    fn salary_range_is_configurable() {
        let predicate = built(FieldKind::ExpectedSalary, &["4600"]);
        let value = FieldValue::Number(4000);
        assert!(!predicate.matches_value(&value, 500));
        assert!(predicate.matches_value(&value, 600));
        assert!(!predicate.matches_value(&value, 0));
    }

    #[test]
    fn experience_matches_exactly() {
        let person = Person::builder().experience(5).build();
        assert!(built(FieldKind::Experience, &["5"]).matches(&person));
        assert!(built(FieldKind::Experience, &["3 05"]).matches(&person));
        assert!(!built(FieldKind::Experience, &["4 6"]).matches(&person));
    }

    #[test]
    fn missing_value_never_matches() {
        let predicate = built(FieldKind::Name, &["Alice"]);
        assert!(!predicate.matches_value(&FieldValue::None, DEFAULT_SALARY_RANGE));
    }
}

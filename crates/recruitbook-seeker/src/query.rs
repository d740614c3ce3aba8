//! Find-command parsing and query execution.
//!
//! [`parse_find_arguments`] turns the text after `find` into a [`Query`]: the
//! conjunction of one [`FieldPredicate`] per constrained field. The query
//! then filters any collection of [`Searchable`] records.

use tracing::debug;

use crate::config::SeekerConfig;
use crate::error::{QueryError, Result};
use crate::field::FieldKind;
use crate::predicate::FieldPredicate;
use crate::tokenizer::{tokenize, ArgumentMap};
use crate::traits::Searchable;

/// Usage text shown when a find command is malformed.
pub const FIND_USAGE: &str = "find: Finds all candidates matching every given field \
(case-insensitive) and displays them as a list with index numbers.\n\
Parameters: [n/NAME...] [p/PHONE...] [e/EMAIL...] [r/ROLE...] [et/EMPLOYMENT_TYPE]... \
[s/EXPECTED_SALARY...] [l/LEVEL_OF_EDUCATION]... [y/YEARS_OF_EXPERIENCE...] [t/TAG...]\n\
Example: find n/alice bob s/4000 t/friends";

/// A conjunction of field predicates.
///
/// A record matches when every predicate matches it. A query with no
/// predicates matches every record.
///
/// Predicates are kept in [`FieldKind`] declaration order, so two queries
/// parsed from the same constraints compare equal regardless of the order
/// the markers were typed in. Equality compares the predicates only; the
/// salary range is a matching setting, not part of the query's identity.
///
/// # Example
///
/// ```
/// use recruitbook_seeker::{parse_find_arguments, Person};
///
/// let people = vec![
///     Person::builder().name("Alice Pauline").expected_salary(4000).build(),
///     Person::builder().name("Carol").expected_salary(4000).build(),
/// ];
///
/// let query = parse_find_arguments("n/alice bob s/4400").unwrap();
/// let found = query.filter(&people);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Alice Pauline");
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    predicates: Vec<FieldPredicate>,
    salary_range: u64,
}

impl PartialEq for Query {
    fn eq(&self, other: &Self) -> bool {
        self.predicates == other.predicates
    }
}

impl Eq for Query {}

impl Default for Query {
    fn default() -> Self {
        Query::with_config(&SeekerConfig::default())
    }
}

impl Query {
    /// Creates an empty query, which matches every record.
    pub fn new() -> Self {
        Query::default()
    }

    /// Creates an empty query using the given settings.
    pub fn with_config(config: &SeekerConfig) -> Self {
        Query {
            predicates: Vec::new(),
            salary_range: config.salary_range,
        }
    }

    /// Adds a predicate, keeping field declaration order.
    ///
    /// Predicates for the same field stay in insertion order.
    pub fn and(mut self, predicate: FieldPredicate) -> Self {
        let index = self
            .predicates
            .partition_point(|existing| existing.field() <= predicate.field());
        self.predicates.insert(index, predicate);
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the member predicates in field order.
    pub fn predicates(&self) -> &[FieldPredicate] {
        &self.predicates
    }

    /// Returns the fields this query constrains.
    pub fn fields(&self) -> Vec<FieldKind> {
        self.predicates.iter().map(FieldPredicate::field).collect()
    }

    /// Returns the salary range used for expected-salary predicates.
    pub fn salary_range(&self) -> u64 {
        self.salary_range
    }

    /// Returns the number of member predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if this query has no predicates (matches everything).
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single record matches every predicate.
    pub fn matches<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        self.predicates.iter().all(|predicate| {
            predicate.matches_value(&record.field_value(predicate.field()), self.salary_range)
        })
    }

    /// Filters a slice, returning references to matching records in their
    /// original order.
    pub fn filter<'a, R: Searchable>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    /// Filters and clones matching records.
    pub fn filter_cloned<R: Searchable + Clone>(&self, records: &[R]) -> Vec<R> {
        self.filter(records).into_iter().cloned().collect()
    }

    /// Filters a vector in place, keeping only matching records.
    pub fn filter_mut<R: Searchable>(&self, records: &mut Vec<R>) {
        records.retain(|record| self.matches(record));
    }

    /// Counts the number of matching records.
    pub fn count<R: Searchable>(&self, records: &[R]) -> usize {
        records.iter().filter(|record| self.matches(*record)).count()
    }

    /// Returns `true` if any record matches.
    pub fn any<R: Searchable>(&self, records: &[R]) -> bool {
        records.iter().any(|record| self.matches(record))
    }

    /// Returns `true` if all records match.
    pub fn all<R: Searchable>(&self, records: &[R]) -> bool {
        records.iter().all(|record| self.matches(record))
    }

    /// Finds the first matching record.
    pub fn find<'a, R: Searchable>(&self, records: &'a [R]) -> Option<&'a R> {
        records.iter().find(|record| self.matches(*record))
    }

    /// Finds the first matching record and returns its index.
    pub fn position<R: Searchable>(&self, records: &[R]) -> Option<usize> {
        records.iter().position(|record| self.matches(record))
    }
}

/// Collects field predicates from tokenized arguments.
#[derive(Debug, Clone)]
pub struct QueryDescriptor {
    fields: Vec<FieldKind>,
    config: SeekerConfig,
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        QueryDescriptor::new(FieldKind::ALL)
    }
}

impl QueryDescriptor {
    /// Creates a descriptor that looks at the given fields.
    pub fn new(fields: impl IntoIterator<Item = FieldKind>) -> Self {
        let mut fields: Vec<FieldKind> = fields.into_iter().collect();
        fields.sort();
        fields.dedup();
        QueryDescriptor {
            fields,
            config: SeekerConfig::default(),
        }
    }

    /// Replaces the evaluation settings of produced queries.
    pub fn config(mut self, config: SeekerConfig) -> Self {
        self.config = config;
        self
    }

    /// The supported fields, in declaration order.
    pub fn fields(&self) -> &[FieldKind] {
        &self.fields
    }

    /// Builds a query from tokenized arguments.
    ///
    /// Fields that are absent or blank add no constraint. The first invalid
    /// keyword aborts the whole call.
    pub fn describe(&self, args: &ArgumentMap) -> Result<Query> {
        let mut query = Query::with_config(&self.config);
        for &field in &self.fields {
            if let Some(predicate) = FieldPredicate::build(field, args.all_values(field))? {
                query.predicates.push(predicate);
            }
        }
        debug!(
            predicates = query.predicates.len(),
            fields = ?query.fields(),
            "described find query"
        );
        Ok(query)
    }
}

/// Parses the arguments of a `find` command with default settings.
///
/// # Errors
///
/// - [`QueryError::InvalidCommandFormat`] if `raw` is blank or has text
///   before the first marker.
/// - [`QueryError::InvalidFieldFormat`] if any keyword is malformed.
///
/// # Example
///
/// ```
/// use recruitbook_seeker::{parse_find_arguments, FieldKind, QueryError};
///
/// let query = parse_find_arguments("n/ e/").unwrap();
/// assert!(query.is_empty());
///
/// let err = parse_find_arguments("s/-100").unwrap_err();
/// assert_eq!(err.field(), Some(FieldKind::ExpectedSalary));
///
/// assert!(matches!(
///     parse_find_arguments("   "),
///     Err(QueryError::InvalidCommandFormat { .. })
/// ));
/// ```
pub fn parse_find_arguments(raw: &str) -> Result<Query> {
    parse_find_arguments_with(raw, &SeekerConfig::default())
}

/// Parses the arguments of a `find` command with explicit settings.
pub fn parse_find_arguments_with(raw: &str, config: &SeekerConfig) -> Result<Query> {
    if raw.trim().is_empty() {
        return Err(QueryError::InvalidCommandFormat { usage: FIND_USAGE });
    }

    let args = tokenize(raw, &FieldKind::ALL);
    if !args.preamble().is_empty() {
        debug!(preamble = args.preamble(), "rejected find preamble");
        return Err(QueryError::InvalidCommandFormat { usage: FIND_USAGE });
    }

    QueryDescriptor::default().config(*config).describe(&args)
}

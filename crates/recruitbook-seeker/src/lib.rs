//! Seeker - find-command parsing and candidate queries for recruitbook.
//!
//! Seeker turns the argument text of a `find` command into a [`Query`] that
//! filters any collection of candidate records. It provides:
//!
//! - A tokenizer that splits `n/Alice t/friends` style arguments by marker
//! - Per-field keyword validation with readable error messages
//! - Per-field matching: whole words, whole values, substrings, numeric ranges
//! - Conjunction of field predicates into one comparable query
//!
//! # Quick Start
//!
//! ```rust
//! use recruitbook_seeker::{parse_find_arguments, Person};
//!
//! let people = vec![
//!     Person::builder().name("Alice").role("Software Engineer").expected_salary(4000).build(),
//!     Person::builder().name("Carol").role("Data Analyst").expected_salary(4000).build(),
//! ];
//!
//! let query = parse_find_arguments("r/engineer s/4400").unwrap();
//! let results = query.filter(&people);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Alice");
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = (every constrained field matches)
//! field matches = (at least one of its keywords matches the record value)
//! ```
//!
//! Fields whose markers are absent or blank add no constraint, so `find n/`
//! matches every record.
//!
//! # Fields
//!
//! | Marker | Field | Keyword rule | Match |
//! |--------|-------|--------------|-------|
//! | `n/` | name | alphanumeric | whole word, ignoring case |
//! | `p/` | phone | 3+ digits | substring |
//! | `e/` | email | `local@domain` | substring, ignoring case |
//! | `r/` | role | alphanumeric | whole word, ignoring case |
//! | `et/` | employment type | non-blank | whole value, ignoring case |
//! | `s/` | expected salary | unsigned integer | within the salary range |
//! | `l/` | level of education | non-blank | whole value, ignoring case |
//! | `y/` | years of experience | unsigned integer | equal |
//! | `t/` | tag | alphanumeric | whole tag, ignoring case |
//!
//! Employment type and level of education take the whole text after the
//! marker as one keyword; repeat the marker to give alternatives
//! (`et/Full time et/Internship`). All other fields split on whitespace.

mod config;
mod error;
mod field;
pub mod matching;
mod person;
mod predicate;
mod query;
mod tokenizer;
mod traits;
mod validate;
mod value;

// Re-export public API
pub use config::{SeekerConfig, DEFAULT_SALARY_RANGE};
pub use error::{QueryError, Result};
pub use field::{FieldKind, MatchStyle};
pub use person::{Person, PersonBuilder};
pub use predicate::FieldPredicate;
pub use query::{parse_find_arguments, parse_find_arguments_with, Query, QueryDescriptor, FIND_USAGE};
pub use tokenizer::{tokenize, ArgumentMap};
pub use traits::Searchable;
pub use validate::{is_valid, validate};
pub use value::FieldValue;

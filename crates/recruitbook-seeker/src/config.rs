//! Query evaluation settings.

use serde::{Deserialize, Serialize};

/// How far (inclusive) a record's expected salary may be from a keyword and
/// still match.
pub const DEFAULT_SALARY_RANGE: u64 = 500;

/// Settings applied when a find command is parsed into a [`Query`](crate::Query).
///
/// Missing keys fall back to their defaults when deserialized.
///
/// # Example
///
/// ```
/// use recruitbook_seeker::{parse_find_arguments_with, SeekerConfig};
///
/// let config = SeekerConfig::default().with_salary_range(1000);
/// let query = parse_find_arguments_with("s/4000", &config).unwrap();
/// assert_eq!(query.salary_range(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekerConfig {
    /// Inclusive distance used by expected-salary matching.
    pub salary_range: u64,
}

impl SeekerConfig {
    /// Returns a copy with a different salary range.
    pub fn with_salary_range(mut self, salary_range: u64) -> Self {
        self.salary_range = salary_range;
        self
    }
}

impl Default for SeekerConfig {
    fn default() -> Self {
        SeekerConfig {
            salary_range: DEFAULT_SALARY_RANGE,
        }
    }
}

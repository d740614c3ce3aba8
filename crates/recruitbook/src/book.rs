//! Candidate records loaded from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use recruitbook_seeker::{Person, Query};
use tracing::debug;

/// An in-memory list of candidates, in the order they were stored.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    people: Vec<Person>,
}

/// A search hit: the candidate and its 1-based position in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listed<'a> {
    pub index: usize,
    pub person: &'a Person,
}

impl ContactBook {
    /// Reads a JSON array of candidates.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read contacts from {}", path.display()))?;
        let people: Vec<Person> = serde_json::from_str(&text)
            .with_context(|| format!("{} is not a valid contact list", path.display()))?;
        debug!(path = %path.display(), count = people.len(), "loaded contacts");
        Ok(Self { people })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Candidates matching `query`, numbered by their position in the book.
    pub fn find(&self, query: &Query) -> Vec<Listed<'_>> {
        self.people
            .iter()
            .enumerate()
            .filter(|(_, person)| query.matches(*person))
            .map(|(i, person)| Listed {
                index: i + 1,
                person,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use recruitbook_seeker::parse_find_arguments;

    use super::*;

    fn book() -> ContactBook {
        ContactBook {
            people: vec![
                Person::builder().name("Alice Pauline").tags(["friends"]).build(),
                Person::builder().name("Benson Meier").build(),
                Person::builder().name("Carl Kurz").tags(["friends"]).build(),
            ],
        }
    }

    #[test]
    fn find_keeps_book_positions() {
        let book = book();
        let query = parse_find_arguments("t/friends").unwrap();

        let hits = book.find(&query);
        let indices: Vec<usize> = hits.iter().map(|hit| hit.index).collect();
        assert_eq!(indices, [1, 3]);
        assert_eq!(hits[1].person.name, "Carl Kurz");
    }

    #[test]
    fn empty_query_lists_everyone() {
        let book = book();
        let query = parse_find_arguments("n/").unwrap();
        assert_eq!(book.find(&query).len(), book.len());
    }

    #[test]
    fn load_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Alice", "expectedSalary": 4000}}, {{"name": "Bob"}}]"#
        )
        .unwrap();

        let book = ContactBook::load(file.path()).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn load_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ContactBook::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("is not a valid contact list"));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContactBook::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read contacts"));
    }
}

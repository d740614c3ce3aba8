//! A reference candidate record.
//!
//! Record stores are free to use their own types through [`Searchable`];
//! [`Person`] is the shape the `recruitbook` binary loads from disk.

use serde::{Deserialize, Serialize};

use crate::field::FieldKind;
use crate::traits::Searchable;
use crate::value::FieldValue;

/// A candidate in the contact book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: String,
    pub employment_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<u64>,
    pub level_of_education: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<u64>,
    pub tags: Vec<String>,
}

impl Person {
    /// Starts building a person with every field empty.
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }
}

impl Searchable for Person {
    fn field_value(&self, field: FieldKind) -> FieldValue<'_> {
        match field {
            FieldKind::Name => FieldValue::Text(&self.name),
            FieldKind::Phone => FieldValue::Text(&self.phone),
            FieldKind::Email => FieldValue::Text(&self.email),
            FieldKind::Role => FieldValue::Text(&self.role),
            FieldKind::EmploymentType => FieldValue::Text(&self.employment_type),
            FieldKind::ExpectedSalary => {
                self.expected_salary.map_or(FieldValue::None, FieldValue::Number)
            }
            FieldKind::LevelOfEducation => FieldValue::Text(&self.level_of_education),
            FieldKind::Experience => self.experience.map_or(FieldValue::None, FieldValue::Number),
            FieldKind::Tag => FieldValue::Words(&self.tags),
        }
    }
}

/// Fluent builder for [`Person`].
///
/// ```
/// use recruitbook_seeker::Person;
///
/// let alice = Person::builder()
///     .name("Alice Pauline")
///     .expected_salary(4000)
///     .tags(["friends"])
///     .build();
/// assert_eq!(alice.tags, ["friends"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.person.name = name.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.person.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.person.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.person.role = role.into();
        self
    }

    pub fn employment_type(mut self, employment_type: impl Into<String>) -> Self {
        self.person.employment_type = employment_type.into();
        self
    }

    pub fn expected_salary(mut self, expected_salary: u64) -> Self {
        self.person.expected_salary = Some(expected_salary);
        self
    }

    pub fn level_of_education(mut self, level: impl Into<String>) -> Self {
        self.person.level_of_education = level.into();
        self
    }

    pub fn experience(mut self, years: u64) -> Self {
        self.person.experience = Some(years);
        self
    }

    /// Replaces the tag set.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.person.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

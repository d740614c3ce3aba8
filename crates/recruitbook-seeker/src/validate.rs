//! Per-field keyword validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{QueryError, Result};
use crate::field::FieldKind;

static NAME_RE: Lazy<Regex> = Lazy::new(|| compile(r"^[[:alnum:]][[:alnum:] ]*$"));

static TAG_RE: Lazy<Regex> = Lazy::new(|| compile(r"^[[:alnum:]]+$"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]{3,}$"));

static UNSIGNED_RE: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+$"));

// local@label.label.last, where the last label is at least two characters.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    compile(concat!(
        r"^[[:alnum:]]+(?:[+_.\-][[:alnum:]]+)*",
        r"@(?:[[:alnum:]]+(?:-[[:alnum:]]+)*\.)*",
        r"[[:alnum:]]{2,}(?:-[[:alnum:]]+)*$",
    ))
});

// Patterns are literals covered by the tests below.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in validation pattern is valid")
}

/// Checks a single keyword against the rule of its field.
///
/// # Example
///
/// ```
/// use recruitbook_seeker::{validate, FieldKind};
///
/// assert!(validate(FieldKind::Phone, "9435").is_ok());
/// assert!(validate(FieldKind::Phone, "abc").is_err());
/// ```
pub fn validate(field: FieldKind, token: &str) -> Result<()> {
    if is_valid(field, token) {
        Ok(())
    } else {
        Err(QueryError::invalid_field(field, token))
    }
}

/// Returns `true` if `token` is a well-formed keyword for `field`.
pub fn is_valid(field: FieldKind, token: &str) -> bool {
    match field {
        FieldKind::Name | FieldKind::Role => NAME_RE.is_match(token),
        FieldKind::Tag => TAG_RE.is_match(token),
        FieldKind::Phone => PHONE_RE.is_match(token),
        FieldKind::Email => EMAIL_RE.is_match(token),
        FieldKind::ExpectedSalary | FieldKind::Experience => {
            UNSIGNED_RE.is_match(token) && token.parse::<u64>().is_ok()
        }
        FieldKind::EmploymentType | FieldKind::LevelOfEducation => !token.trim().is_empty(),
    }
}

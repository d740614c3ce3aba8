//! Error types for the seeker crate.

use thiserror::Error;

use crate::field::FieldKind;

/// Errors that can occur when parsing a find command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A keyword failed the validation rule of its field.
    #[error("invalid {field} '{token}': {expected}")]
    InvalidFieldFormat {
        field: FieldKind,
        token: String,
        expected: &'static str,
    },

    /// The command text does not follow the find grammar at all.
    #[error("invalid command format!\n{usage}")]
    InvalidCommandFormat { usage: &'static str },
}

impl QueryError {
    /// Create a field format error.
    pub fn invalid_field(field: FieldKind, token: impl Into<String>) -> Self {
        Self::InvalidFieldFormat {
            field,
            token: token.into(),
            expected: field.format_hint(),
        }
    }

    /// The field this error refers to, if any.
    pub fn field(&self) -> Option<FieldKind> {
        match self {
            Self::InvalidFieldFormat { field, .. } => Some(*field),
            Self::InvalidCommandFormat { .. } => None,
        }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, QueryError>;

//! Queryable fields of a candidate record.
//!
//! [`FieldKind`] is the closed set of fields a find command can constrain.
//! Each variant maps to its command-line marker, its validation rule and the
//! [`MatchStyle`] used to compare keywords against a record.

/// How keywords for a field are compared against a record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStyle {
    /// Any keyword equals (ignoring case) any whitespace-separated word.
    Word,
    /// Any keyword equals (ignoring case) the whole record value.
    WholeValue,
    /// Any keyword is a case-insensitive substring of the record value.
    Substring,
    /// Any keyword is numerically within the configured salary range.
    Range,
    /// Any keyword equals the record value numerically.
    ExactNumber,
}

/// A field that can appear in a find command.
///
/// Variants are declared in the order predicates are collected into a
/// [`Query`](crate::Query), which keeps query equality independent of the
/// order markers were typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    /// Candidate name (`n/`).
    Name,
    /// Phone number (`p/`).
    Phone,
    /// Email address (`e/`).
    Email,
    /// Applied role (`r/`).
    Role,
    /// Employment type such as "Full time" (`et/`).
    EmploymentType,
    /// Expected monthly salary (`s/`).
    ExpectedSalary,
    /// Highest level of education (`l/`).
    LevelOfEducation,
    /// Years of working experience (`y/`).
    Experience,
    /// Free-text tag (`t/`).
    Tag,
}

impl FieldKind {
    /// Every field, in declaration order.
    pub const ALL: [FieldKind; 9] = [
        FieldKind::Name,
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::Role,
        FieldKind::EmploymentType,
        FieldKind::ExpectedSalary,
        FieldKind::LevelOfEducation,
        FieldKind::Experience,
        FieldKind::Tag,
    ];

    /// The literal prefix that introduces this field on the command line.
    pub fn marker(self) -> &'static str {
        match self {
            FieldKind::Name => "n/",
            FieldKind::Phone => "p/",
            FieldKind::Email => "e/",
            FieldKind::Role => "r/",
            FieldKind::EmploymentType => "et/",
            FieldKind::ExpectedSalary => "s/",
            FieldKind::LevelOfEducation => "l/",
            FieldKind::Experience => "y/",
            FieldKind::Tag => "t/",
        }
    }

    /// Looks a field up by its marker text.
    pub fn from_marker(marker: &str) -> Option<FieldKind> {
        FieldKind::ALL.into_iter().find(|kind| kind.marker() == marker)
    }

    /// How keywords for this field are matched.
    pub fn match_style(self) -> MatchStyle {
        match self {
            FieldKind::Name | FieldKind::Role | FieldKind::Tag => MatchStyle::Word,
            FieldKind::EmploymentType | FieldKind::LevelOfEducation => MatchStyle::WholeValue,
            FieldKind::Email | FieldKind::Phone => MatchStyle::Substring,
            FieldKind::ExpectedSalary => MatchStyle::Range,
            FieldKind::Experience => MatchStyle::ExactNumber,
        }
    }

    /// Returns `true` if a raw value is split on whitespace into keywords.
    ///
    /// Whole-value fields keep each raw value as a single keyword so that
    /// "Full time" stays one unit.
    pub fn splits_keywords(self) -> bool {
        self.match_style() != MatchStyle::WholeValue
    }

    /// Human readable description of a valid keyword.
    pub fn format_hint(self) -> &'static str {
        match self {
            FieldKind::Name | FieldKind::Role => {
                "should only contain alphanumeric characters and spaces, and it should not be blank"
            }
            FieldKind::Phone => "should only contain numbers, and it should be at least 3 digits long",
            FieldKind::Email => {
                "should be of the format local-part@domain, where the local-part is alphanumeric \
                 segments joined by + _ . or -, and the domain is dot-separated labels ending in \
                 one at least 2 characters long"
            }
            FieldKind::EmploymentType | FieldKind::LevelOfEducation => "should not be blank",
            FieldKind::ExpectedSalary | FieldKind::Experience => {
                "should be a non-negative whole number"
            }
            FieldKind::Tag => "should be alphanumeric",
        }
    }

    /// Returns the display name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Role => "role",
            FieldKind::EmploymentType => "employment type",
            FieldKind::ExpectedSalary => "expected salary",
            FieldKind::LevelOfEducation => "level of education",
            FieldKind::Experience => "years of experience",
            FieldKind::Tag => "tag",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

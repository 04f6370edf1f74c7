//! Shared plumbing for the self-validating scalar types.
//!
//! Every scalar in the model wraps a primitive and checks a format constraint at
//! construction time. The [`text_value!`] macro generates the newtype, its accessors and
//! the serde hooks so that deserialized values go through the same checks as values
//! built from user input.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Field a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Address,
    School,
    Degree,
    Remark,
    Tag,
    JobTitle,
    JobCompany,
    JobRounds,
    JobSkill,
    JobAddress,
    JobType,
    ApplicationStatus,
    Index,
}

impl FieldKind {
    pub const fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Address => "address",
            FieldKind::School => "school",
            FieldKind::Degree => "degree",
            FieldKind::Remark => "remark",
            FieldKind::Tag => "tag",
            FieldKind::JobTitle => "job title",
            FieldKind::JobCompany => "job company",
            FieldKind::JobRounds => "job rounds",
            FieldKind::JobSkill => "job skill",
            FieldKind::JobAddress => "job address",
            FieldKind::JobType => "job type",
            FieldKind::ApplicationStatus => "application status",
            FieldKind::Index => "index",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Construction-time failure of a value type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid {field}: {constraint}")]
    Constraint {
        field: FieldKind,
        constraint: &'static str,
    },
    #[error("job skill '{0}' is listed more than once")]
    DuplicateSkill(String),
}

impl ValidationError {
    pub fn field(&self) -> FieldKind {
        match self {
            ValidationError::Constraint { field, .. } => *field,
            ValidationError::DuplicateSkill(_) => FieldKind::JobSkill,
        }
    }
}

/// Lazily compiled, anchored validation pattern.
pub(crate) struct Pattern {
    source: &'static str,
    compiled: OnceLock<Option<Regex>>,
}

impl Pattern {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// A pattern that fails to compile matches nothing and is logged once.
    pub(crate) fn is_match(&self, value: &str) -> bool {
        self.compiled
            .get_or_init(|| match Regex::new(self.source) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    error!(pattern = self.source, error = %err, "invalid validation pattern");
                    None
                }
            })
            .as_ref()
            .is_some_and(|regex| regex.is_match(value))
    }

    #[cfg(test)]
    pub(crate) fn assert_compiles(&self) {
        if let Err(err) = Regex::new(self.source) {
            panic!("pattern {:?} does not compile: {err}", self.source);
        }
    }
}

/// Alphanumeric words separated by spaces, first character not blank.
pub(crate) static ALNUM_WORDS: Pattern = Pattern::new(r"^[[:alnum:]][[:alnum:] ]*$");

/// Any text whose first character is not whitespace.
pub(crate) static NON_BLANK: Pattern = Pattern::new(r"^\S.*$");

pub(crate) fn check(
    value: String,
    field: FieldKind,
    constraint: &'static str,
    valid: impl FnOnce(&str) -> bool,
) -> Result<String, ValidationError> {
    if valid(&value) {
        Ok(value)
    } else {
        Err(ValidationError::Constraint { field, constraint })
    }
}

/// Generates a string newtype whose constructor runs `Self::normalize`.
///
/// The invoking module supplies `fn normalize(String) -> Result<String, ValidationError>`
/// in its own `impl` block; everything else (accessors, `Display`, serde via
/// `TryFrom<String>`, `FromStr`) is generated here.
macro_rules! text_value {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::model::ValidationError> {
                Self::normalize(value.into()).map(Self)
            }

            pub fn is_valid(value: &str) -> bool {
                Self::normalize(value.to_owned()).is_ok()
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::new(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::model::ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use text_value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_patterns_compile() {
        ALNUM_WORDS.assert_compiles();
        NON_BLANK.assert_compiles();
    }

    #[test]
    fn alnum_words_rejects_leading_space_and_symbols() {
        assert!(ALNUM_WORDS.is_match("Backend Engineer 2"));
        assert!(!ALNUM_WORDS.is_match(" Backend"));
        assert!(!ALNUM_WORDS.is_match("C++ Dev"));
        assert!(!ALNUM_WORDS.is_match(""));
    }

    #[test]
    fn non_blank_accepts_any_text_after_first_character() {
        assert!(NON_BLANK.is_match("Blk 30 Geylang Street 29, #06-40"));
        assert!(!NON_BLANK.is_match("   "));
        assert!(!NON_BLANK.is_match(""));
    }

    #[test]
    fn constraint_errors_report_their_field() {
        let err = check("".to_string(), FieldKind::Name, "must not be blank", |v| {
            !v.is_empty()
        })
        .expect_err("blank rejected");
        assert_eq!(err.field(), FieldKind::Name);
        assert_eq!(err.to_string(), "invalid name: must not be blank");
    }
}

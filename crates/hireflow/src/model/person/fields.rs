use crate::model::value::{check, text_value, FieldKind, Pattern, ALNUM_WORDS, NON_BLANK};
use crate::model::ValidationError;

static PHONE: Pattern = Pattern::new(r"^[0-9]{3,}$");
static EMAIL: Pattern = Pattern::new(
    r"^[[:alnum:]]+([+_.\-][[:alnum:]]+)*@([[:alnum:]]+(-[[:alnum:]]+)*\.)*[[:alnum:]]+(-[[:alnum:]]+)*$",
);
static TAG: Pattern = Pattern::new(r"^[[:alnum:]]+$");

text_value! {
    /// A candidate's full name. Weak identity of a [`super::Person`] is decided by this value.
    Name
}

impl Name {
    pub const CONSTRAINT: &'static str =
        "names should only contain alphanumeric characters and spaces, and should not be blank";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        check(raw, FieldKind::Name, Self::CONSTRAINT, |v| {
            ALNUM_WORDS.is_match(v)
        })
    }

    /// Whitespace separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

text_value! {
    Phone
}

impl Phone {
    pub const CONSTRAINT: &'static str =
        "phone numbers should only contain digits, and be at least 3 digits long";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        check(raw, FieldKind::Phone, Self::CONSTRAINT, |v| PHONE.is_match(v))
    }
}

text_value! {
    Email
}

impl Email {
    pub const CONSTRAINT: &'static str = "emails should be of the format local-part@domain, where the \
         local part is alphanumeric with single '+', '_', '.' or '-' separators and the domain ends \
         with a label of at least 2 characters";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        check(raw, FieldKind::Email, Self::CONSTRAINT, |v| {
            EMAIL.is_match(v)
                && v
                    .rsplit(['.', '@'])
                    .next()
                    .is_some_and(|last_label| last_label.len() >= 2)
        })
    }
}

text_value! {
    Address
}

impl Address {
    pub const CONSTRAINT: &'static str = "addresses can take any value, and should not be blank";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        check(raw, FieldKind::Address, Self::CONSTRAINT, |v| {
            NON_BLANK.is_match(v)
        })
    }
}

text_value! {
    /// School the candidate attended. Surrounding whitespace is not significant.
    School
}

impl School {
    pub const CONSTRAINT: &'static str = "school can take any value, and should not be blank";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        let trimmed = raw.trim().to_owned();
        check(trimmed, FieldKind::School, Self::CONSTRAINT, |v| !v.is_empty())
    }
}

text_value! {
    /// Degree the candidate holds or is pursuing. Surrounding whitespace is not significant.
    Degree
}

impl Degree {
    pub const CONSTRAINT: &'static str = "degree can take any value, and should not be blank";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        let trimmed = raw.trim().to_owned();
        check(trimmed, FieldKind::Degree, Self::CONSTRAINT, |v| !v.is_empty())
    }
}

text_value! {
    /// Free-form recruiter note. Always valid; stored trimmed and may be empty.
    Remark
}

impl Remark {
    fn normalize(raw: String) -> Result<String, ValidationError> {
        Ok(raw.trim().to_owned())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Remark {
    fn default() -> Self {
        Self::empty()
    }
}

text_value! {
    /// Single-word label attached to a candidate.
    Tag
}

impl Tag {
    pub const CONSTRAINT: &'static str = "tag names should be alphanumeric";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        check(raw, FieldKind::Tag, Self::CONSTRAINT, |v| TAG.is_match(v))
    }
}

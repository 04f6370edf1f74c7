use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::value::{check, text_value, FieldKind, Pattern, ALNUM_WORDS, NON_BLANK};
use crate::model::ValidationError;

static SKILL: Pattern = Pattern::new(r"^[[:alnum:]][[:alnum:] /+\-.]*$");

text_value! {
    JobTitle
}

impl JobTitle {
    pub const CONSTRAINT: &'static str =
        "job titles should only contain alphanumeric characters and spaces, and should not be blank";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        check(raw, FieldKind::JobTitle, Self::CONSTRAINT, |v| {
            ALNUM_WORDS.is_match(v)
        })
    }
}

text_value! {
    JobCompany
}

impl JobCompany {
    pub const CONSTRAINT: &'static str =
        "company names should only contain alphanumeric characters and spaces, and should not be blank";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        check(raw, FieldKind::JobCompany, Self::CONSTRAINT, |v| {
            ALNUM_WORDS.is_match(v)
        })
    }
}

text_value! {
    JobAddress
}

impl JobAddress {
    pub const CONSTRAINT: &'static str = "job addresses can take any value, and should not be blank";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        check(raw, FieldKind::JobAddress, Self::CONSTRAINT, |v| {
            NON_BLANK.is_match(v)
        })
    }
}

text_value! {
    /// One requisite skill of a job.
    Skill
}

impl Skill {
    pub const CONSTRAINT: &'static str = "each job skill should only contain alphanumeric characters, \
         spaces, and the symbols '/', '+', '-' or '.', and should not be blank";

    fn normalize(raw: String) -> Result<String, ValidationError> {
        check(raw, FieldKind::JobSkill, Self::CONSTRAINT, |v| SKILL.is_match(v))
    }
}

/// Number of interview rounds a job runs. Always at least one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct JobRounds(u32);

impl JobRounds {
    pub const CONSTRAINT: &'static str = "job rounds should be a positive integer";

    pub fn new(rounds: u32) -> Result<Self, ValidationError> {
        if rounds == 0 {
            return Err(ValidationError::Constraint {
                field: FieldKind::JobRounds,
                constraint: Self::CONSTRAINT,
            });
        }
        Ok(Self(rounds))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for JobRounds {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let rounds = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::Constraint {
                field: FieldKind::JobRounds,
                constraint: Self::CONSTRAINT,
            })?;
        Self::new(rounds)
    }
}

impl TryFrom<u32> for JobRounds {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobRounds> for u32 {
    fn from(value: JobRounds) -> Self {
        value.0
    }
}

impl fmt::Display for JobRounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of requisite skills. Listing the same skill twice is rejected rather than merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct JobSkills(BTreeSet<Skill>);

impl JobSkills {
    pub fn new<I, S>(skills: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for raw in skills {
            let skill = Skill::new(raw)?;
            if set.contains(&skill) {
                return Err(ValidationError::DuplicateSkill(skill.into()));
            }
            set.insert(skill);
        }
        Ok(Self(set))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.0.iter()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|existing| existing.as_str() == skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for JobSkills {
    type Error = ValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobSkills> for Vec<String> {
    fn from(value: JobSkills) -> Self {
        value.0.into_iter().map(String::from).collect()
    }
}

impl fmt::Display for JobSkills {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(Skill::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

/// Employment type offered by a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Intern")]
    Intern,
    #[serde(rename = "Part Time")]
    PartTime,
    #[serde(rename = "Full Time")]
    FullTime,
    #[serde(rename = "Freelance")]
    Freelance,
    #[serde(rename = "Contract")]
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::Intern,
        JobType::PartTime,
        JobType::FullTime,
        JobType::Freelance,
        JobType::Contract,
    ];

    pub const CONSTRAINT: &'static str =
        "job type should be one of: Intern, Part Time, Full Time, Freelance, Contract";

    pub const fn label(self) -> &'static str {
        match self {
            JobType::Intern => "Intern",
            JobType::PartTime => "Part Time",
            JobType::FullTime => "Full Time",
            JobType::Freelance => "Freelance",
            JobType::Contract => "Contract",
        }
    }
}

impl FromStr for JobType {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|job_type| job_type.label().eq_ignore_ascii_case(wanted))
            .ok_or(ValidationError::Constraint {
                field: FieldKind::JobType,
                constraint: Self::CONSTRAINT,
            })
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_pattern_compiles() {
        SKILL.assert_compiles();
    }

    #[test]
    fn rounds_must_be_positive() {
        assert!(JobRounds::new(0).is_err());
        assert_eq!(JobRounds::new(3).expect("valid").get(), 3);
        assert_eq!("4".parse::<JobRounds>().expect("valid").get(), 4);
        assert!("-1".parse::<JobRounds>().is_err());
        assert!("three".parse::<JobRounds>().is_err());
    }

    #[test]
    fn skills_reject_duplicates_and_symbols() {
        let skills = JobSkills::new(["Java", "Spring Boot", "CI/CD", "Node.js", "C++"])
            .expect("valid skills");
        assert_eq!(skills.len(), 5);
        assert!(skills.contains("CI/CD"));

        assert_eq!(
            JobSkills::new(["Rust", "Rust"]),
            Err(ValidationError::DuplicateSkill("Rust".to_string()))
        );
        assert!(JobSkills::new(["Rust!"]).is_err());
        assert!(JobSkills::new([" Rust"]).is_err());
    }

    #[test]
    fn skill_order_is_not_significant() {
        let first = JobSkills::new(["AWS", "Kubernetes"]).expect("valid");
        let second = JobSkills::new(["Kubernetes", "AWS"]).expect("valid");
        assert_eq!(first, second);
    }

    #[test]
    fn job_type_parses_display_labels() {
        assert_eq!("Part Time".parse::<JobType>(), Ok(JobType::PartTime));
        assert_eq!("full time".parse::<JobType>(), Ok(JobType::FullTime));
        assert!("Permanent".parse::<JobType>().is_err());
        assert_eq!(JobType::Freelance.to_string(), "Freelance");
    }

    #[test]
    fn job_type_serializes_as_label() {
        let json = serde_json::to_string(&JobType::PartTime).expect("serializes");
        assert_eq!(json, "\"Part Time\"");
    }
}

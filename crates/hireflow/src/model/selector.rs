//! Addressing modes for mutating operations: a position in the displayed list or a
//! lookup key rebuilt from user input.

use std::fmt;
use std::str::FromStr;

use super::job::{Job, JobCompany, JobTitle};
use super::person::{Person, Phone};
use super::value::{FieldKind, ValidationError};

/// Position in a displayed list. Shown one-based, stored zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    pub const CONSTRAINT: &'static str = "index should be a non-zero unsigned integer";

    pub fn from_one_based(position: usize) -> Result<Self, ValidationError> {
        position
            .checked_sub(1)
            .map(Self)
            .ok_or(ValidationError::Constraint {
                field: FieldKind::Index,
                constraint: Self::CONSTRAINT,
            })
    }

    pub const fn from_zero_based(position: usize) -> Self {
        Self(position)
    }

    pub const fn zero_based(self) -> usize {
        self.0
    }

    /// Saturates at `usize::MAX`.
    pub const fn one_based(self) -> usize {
        self.0.saturating_add(1)
    }
}

impl FromStr for Index {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let position = raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ValidationError::Constraint {
                field: FieldKind::Index,
                constraint: Self::CONSTRAINT,
            })?;
        Self::from_one_based(position)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

/// Person lookup key. Phones are not unique, so a key may match several persons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonKey {
    pub phone: Phone,
}

impl PersonKey {
    pub fn new(phone: Phone) -> Self {
        Self { phone }
    }

    pub fn matches(&self, person: &Person) -> bool {
        person.phone() == &self.phone
    }
}

/// Job lookup key: the title, narrowed by company when one is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobKey {
    pub title: JobTitle,
    pub company: Option<JobCompany>,
}

impl JobKey {
    pub fn new(title: JobTitle, company: Option<JobCompany>) -> Self {
        Self { title, company }
    }

    pub fn matches(&self, job: &Job) -> bool {
        job.title() == &self.title
            && self
                .company
                .as_ref()
                .map_or(true, |company| job.company() == company)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonSelector {
    Displayed(Index),
    Key(PersonKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSelector {
    Displayed(Index),
    Key(JobKey),
}

/// Applications are addressed by displayed position or by their (person, job) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationSelector {
    Displayed(Index),
    Pair {
        person: PersonSelector,
        job: JobSelector,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_between_bases() {
        let index: Index = "3".parse().expect("valid index");
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
        assert_eq!(index.to_string(), "3");
        assert_eq!(Index::from_zero_based(2), index);
    }

    #[test]
    fn largest_zero_based_index_does_not_overflow() {
        let last = Index::from_zero_based(usize::MAX);
        assert_eq!(last.one_based(), usize::MAX);
        assert_eq!(last.to_string(), usize::MAX.to_string());
    }

    #[test]
    fn index_rejects_zero_and_garbage() {
        assert!("0".parse::<Index>().is_err());
        assert!("-1".parse::<Index>().is_err());
        assert!("first".parse::<Index>().is_err());
        assert_eq!(
            Index::from_one_based(0).map_err(|err| err.field()),
            Err(FieldKind::Index)
        );
    }

    #[test]
    fn job_key_company_is_optional() {
        let job = Job::new(
            JobTitle::new("Data Scientist").expect("title"),
            JobCompany::new("Microsoft").expect("company"),
            crate::model::JobRounds::new(4).expect("rounds"),
            crate::model::JobSkills::default(),
            crate::model::JobAddress::new("Redmond").expect("address"),
            crate::model::JobType::FullTime,
        );
        let title = JobTitle::new("Data Scientist").expect("title");
        assert!(JobKey::new(title.clone(), None).matches(&job));
        assert!(JobKey::new(
            title.clone(),
            Some(JobCompany::new("Microsoft").expect("company"))
        )
        .matches(&job));
        assert!(!JobKey::new(title, Some(JobCompany::new("Apple").expect("company"))).matches(&job));
    }
}

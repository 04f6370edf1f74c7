//! Applications link one person to one job and count the interview rounds completed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::job::Job;
use super::person::Person;
use super::unique::{EntityKind, WeakIdentity};
use super::value::{FieldKind, ValidationError};

/// Interview rounds completed so far.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ApplicationStatus(u32);

impl ApplicationStatus {
    pub const CONSTRAINT: &'static str = "application status should be a non-negative integer";

    pub const fn new(rounds_completed: u32) -> Self {
        Self(rounds_completed)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for ApplicationStatus {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ValidationError::Constraint {
                field: FieldKind::ApplicationStatus,
                constraint: Self::CONSTRAINT,
            })
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate's application to a job.
///
/// Holds value copies of both endpoints. `status <= job.rounds()` holds for every
/// value that can be constructed, including deserialized ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ApplicationRecord")]
pub struct Application {
    applicant: Person,
    job: Job,
    status: ApplicationStatus,
}

impl Application {
    pub fn new(applicant: Person, job: Job, status: ApplicationStatus) -> Result<Self, ModelError> {
        check_status(u64::from(status.get()), &job)?;
        Ok(Self {
            applicant,
            job,
            status,
        })
    }

    /// Fresh application with no rounds completed.
    pub fn start(applicant: Person, job: Job) -> Self {
        Self {
            applicant,
            job,
            status: ApplicationStatus::default(),
        }
    }

    pub fn applicant(&self) -> &Person {
        &self.applicant
    }

    pub fn job(&self) -> &Job {
        &self.job
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Returns a copy moved forward by `rounds`. Advancing by zero is a no-op.
    pub fn advance(&self, rounds: i64) -> Result<Self, ModelError> {
        let delta = u64::try_from(rounds).map_err(|_| ModelError::NegativeAdvance(rounds))?;
        let next = u64::from(self.status.get()).saturating_add(delta);
        check_status(next, &self.job)?;

        // check_status bounds `next` by the job's u32 round count
        let next = u32::try_from(next).map_err(|_| ModelError::InvalidApplicationStatus {
            status: next,
            rounds: self.job.rounds().get(),
        })?;
        Ok(Self {
            status: ApplicationStatus(next),
            ..self.clone()
        })
    }

    pub fn with_applicant(&self, applicant: Person) -> Self {
        Self {
            applicant,
            ..self.clone()
        }
    }

    /// Copy pointing at `job`. Fails if the current status would exceed its rounds.
    pub fn with_job(&self, job: Job) -> Result<Self, ModelError> {
        Self::new(self.applicant.clone(), job, self.status)
    }

    pub fn is_terminal(&self) -> bool {
        self.status.get() == self.job.rounds().get()
    }

    /// Same applicant and same job, status ignored.
    pub fn is_same_application(&self, other: &Application) -> bool {
        self.applicant == other.applicant && self.job == other.job
    }
}

fn check_status(status: u64, job: &Job) -> Result<(), ModelError> {
    let rounds = job.rounds().get();
    if status > u64::from(rounds) {
        return Err(ModelError::InvalidApplicationStatus { status, rounds });
    }
    Ok(())
}

impl WeakIdentity for Application {
    const KIND: EntityKind = EntityKind::Application;

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_application(other)
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} at {} ({}/{})",
            self.applicant.name(),
            self.job.title(),
            self.job.company(),
            self.status,
            self.job.rounds()
        )
    }
}

/// Unchecked stored form, validated on its way into [`Application`].
#[derive(Deserialize)]
struct ApplicationRecord {
    applicant: Person,
    job: Job,
    status: ApplicationStatus,
}

impl TryFrom<ApplicationRecord> for Application {
    type Error = ModelError;

    fn try_from(record: ApplicationRecord) -> Result<Self, Self::Error> {
        Self::new(record.applicant, record.job, record.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::job::{JobAddress, JobCompany, JobRounds, JobSkills, JobTitle, JobType};
    use crate::model::person::{Address, Degree, Email, Name, Phone, School};

    fn ada() -> Person {
        Person::new(
            Name::new("Ada").expect("name"),
            Phone::new("91234567").expect("phone"),
            Email::new("ada@example.com").expect("email"),
            Address::new("12 Analytical Row").expect("address"),
            School::new("NUS").expect("school"),
            Degree::new("Mathematics").expect("degree"),
        )
    }

    fn backend(rounds: u32) -> Job {
        Job::new(
            JobTitle::new("Backend Engineer").expect("title"),
            JobCompany::new("Acme").expect("company"),
            JobRounds::new(rounds).expect("rounds"),
            JobSkills::new(["Rust"]).expect("skills"),
            JobAddress::new("1 Market Street").expect("address"),
            JobType::FullTime,
        )
    }

    #[test]
    fn construction_rejects_status_above_rounds() {
        assert!(Application::new(ada(), backend(3), ApplicationStatus::new(3)).is_ok());
        assert_eq!(
            Application::new(ada(), backend(3), ApplicationStatus::new(4)),
            Err(ModelError::InvalidApplicationStatus {
                status: 4,
                rounds: 3
            })
        );
    }

    #[test]
    fn advance_moves_forward_until_the_last_round() {
        let application = Application::start(ada(), backend(3));
        let advanced = application.advance(2).expect("within rounds");
        assert_eq!(advanced.status().get(), 2);
        assert_eq!(application.status().get(), 0);

        let err = advanced.advance(2).expect_err("past the last round");
        assert!(err.is_status_violation());
        assert_eq!(advanced.status().get(), 2);

        let finished = advanced.advance(1).expect("last round");
        assert!(finished.is_terminal());
        assert!(finished.advance(1).is_err());
    }

    #[test]
    fn advance_rejects_negative_and_allows_zero() {
        let application = Application::start(ada(), backend(3));
        assert_eq!(application.advance(-1), Err(ModelError::NegativeAdvance(-1)));
        assert_eq!(application.advance(0), Ok(application.clone()));
    }

    #[test]
    fn advance_saturates_instead_of_overflowing() {
        let application = Application::start(ada(), backend(3));
        assert!(application.advance(i64::MAX).is_err());
    }

    #[test]
    fn identity_ignores_status() {
        let first = Application::start(ada(), backend(3));
        let second = first.advance(1).expect("advance");
        assert!(first.is_same_application(&second));
        assert_ne!(first, second);
        assert!(!first.is_same_application(&Application::start(ada(), backend(5))));
    }

    #[test]
    fn with_job_checks_new_rounds() {
        let application = Application::new(ada(), backend(3), ApplicationStatus::new(2))
            .expect("valid");
        assert!(application.with_job(backend(2)).is_ok());
        assert!(application.with_job(backend(1)).is_err());
    }

    #[test]
    fn deserialization_enforces_round_bound() {
        let application = Application::new(ada(), backend(3), ApplicationStatus::new(1))
            .expect("valid");
        let mut json = serde_json::to_value(&application).expect("serializes");
        let back: Application = serde_json::from_value(json.clone()).expect("round trip");
        assert_eq!(back, application);

        json["status"] = serde_json::json!(9);
        assert!(serde_json::from_value::<Application>(json).is_err());
    }

    #[test]
    fn status_parses_non_negative_integers() {
        assert_eq!("2".parse::<ApplicationStatus>(), Ok(ApplicationStatus::new(2)));
        assert!("-2".parse::<ApplicationStatus>().is_err());
    }
}

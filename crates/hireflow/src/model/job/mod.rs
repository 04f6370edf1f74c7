//! Job openings.

mod fields;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use fields::{JobAddress, JobCompany, JobRounds, JobSkills, JobTitle, JobType, Skill};

use super::unique::{EntityKind, WeakIdentity};

/// Immutable job opening.
///
/// `PartialEq` is structural. [`Job::is_same_job`] is the duplicate-detection notion:
/// two openings are the same job when both title and company match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    title: JobTitle,
    company: JobCompany,
    rounds: JobRounds,
    skills: JobSkills,
    address: JobAddress,
    job_type: JobType,
}

impl Job {
    pub fn new(
        title: JobTitle,
        company: JobCompany,
        rounds: JobRounds,
        skills: JobSkills,
        address: JobAddress,
        job_type: JobType,
    ) -> Self {
        Self {
            title,
            company,
            rounds,
            skills,
            address,
            job_type,
        }
    }

    pub fn title(&self) -> &JobTitle {
        &self.title
    }

    pub fn company(&self) -> &JobCompany {
        &self.company
    }

    pub fn rounds(&self) -> JobRounds {
        self.rounds
    }

    pub fn skills(&self) -> &JobSkills {
        &self.skills
    }

    pub fn address(&self) -> &JobAddress {
        &self.address
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn is_same_job(&self, other: &Job) -> bool {
        self.title == other.title && self.company == other.company
    }
}

impl WeakIdentity for Job {
    const KIND: EntityKind = EntityKind::Job;

    fn is_same(&self, other: &Self) -> bool {
        self.is_same_job(other)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}; Rounds: {}; Type: {}; Address: {}",
            self.title, self.company, self.rounds, self.job_type, self.address
        )?;
        if !self.skills.is_empty() {
            write!(f, "; Skills: {}", self.skills)?;
        }
        Ok(())
    }
}

/// Field overrides applied to an existing [`Job`] to produce its edited copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobEdit {
    pub title: Option<JobTitle>,
    pub company: Option<JobCompany>,
    pub rounds: Option<JobRounds>,
    pub skills: Option<JobSkills>,
    pub address: Option<JobAddress>,
    pub job_type: Option<JobType>,
}

impl JobEdit {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.rounds.is_none()
            && self.skills.is_none()
            && self.address.is_none()
            && self.job_type.is_none()
    }

    pub fn apply(&self, job: &Job) -> Job {
        Job {
            title: self.title.clone().unwrap_or_else(|| job.title.clone()),
            company: self.company.clone().unwrap_or_else(|| job.company.clone()),
            rounds: self.rounds.unwrap_or(job.rounds),
            skills: self.skills.clone().unwrap_or_else(|| job.skills.clone()),
            address: self.address.clone().unwrap_or_else(|| job.address.clone()),
            job_type: self.job_type.unwrap_or(job.job_type),
        }
    }
}

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::application::Application;
use super::error::ModelError;
use super::job::Job;
use super::person::Person;
use super::unique::{ensure_unique, EntityKind, UniqueList};

/// Store of unique applications plus the rewrites that keep them in step with
/// person and job edits.
///
/// Endpoint matching is structural: an application belongs to a person when its
/// embedded applicant equals that person field for field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationsManager {
    applications: UniqueList<Application>,
}

impl ApplicationsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_list(applications: Vec<Application>) -> Result<Self, ModelError> {
        Ok(Self {
            applications: UniqueList::try_from(applications)?,
        })
    }

    pub fn reset_data(&mut self, other: &ApplicationsManager) -> Result<(), ModelError> {
        self.set_applications(other.applications().to_vec())
    }

    pub fn set_applications(&mut self, applications: Vec<Application>) -> Result<(), ModelError> {
        self.applications.set_all(applications)
    }

    pub fn applications(&self) -> &[Application] {
        self.applications.as_slice()
    }

    pub fn has_application(&self, application: &Application) -> bool {
        self.applications.contains(application)
    }

    /// Stored record for the (applicant, job) pair of `application`.
    pub fn find_application(&self, application: &Application) -> Option<&Application> {
        self.applications.find(application)
    }

    pub fn add_application(&mut self, application: Application) -> Result<(), ModelError> {
        debug!(%application, "adding application");
        self.applications.add(application)
    }

    pub fn set_application(
        &mut self,
        target: &Application,
        edited: Application,
    ) -> Result<(), ModelError> {
        self.applications.set(target, edited)
    }

    pub fn remove_application(&mut self, application: &Application) -> Result<Application, ModelError> {
        debug!(%application, "removing application");
        self.applications.remove(application)
    }

    /// Replaces the stored record with one advanced by `rounds` and returns it.
    pub fn advance_application(
        &mut self,
        application: &Application,
        rounds: i64,
    ) -> Result<Application, ModelError> {
        let stored = self
            .find_application(application)
            .ok_or(ModelError::NotFound(EntityKind::Application))?;
        let advanced = stored.advance(rounds)?;
        self.applications.set(application, advanced.clone())?;
        debug!(application = %advanced, rounds, "advanced application");
        Ok(advanced)
    }

    pub fn applications_by_person(&self, person: &Person) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| application.applicant() == person)
            .collect()
    }

    pub fn applications_by_job(&self, job: &Job) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| application.job() == job)
            .collect()
    }

    pub fn applications_by_person_and_job(&self, person: &Person, job: &Job) -> Option<&Application> {
        self.applications
            .iter()
            .find(|application| application.applicant() == person && application.job() == job)
    }

    /// Checks that [`update_person`](Self::update_person) would succeed, without mutating.
    pub fn validate_person_edit(&self, old: &Person, new: &Person) -> Result<(), ModelError> {
        self.rewrite_person(old, new).map(|_| ())
    }

    /// Points every application of `old` at `new`, keeping job and status.
    ///
    /// Returns the number of rewritten applications. Nothing changes on failure.
    pub fn update_person(&mut self, old: &Person, new: &Person) -> Result<usize, ModelError> {
        let (rewritten, count) = self.rewrite_person(old, new)?;
        self.applications.set_all(rewritten)?;
        if count > 0 {
            info!(from = %old.name(), to = %new.name(), count, "rewrote applications for edited person");
        }
        Ok(count)
    }

    /// Checks that every application of `old` stays valid under `new`'s round count.
    pub fn validate_job_edit(&self, old: &Job, new: &Job) -> Result<(), ModelError> {
        self.rewrite_job(old, new).map(|_| ())
    }

    /// Points every application of `old` at `new`.
    ///
    /// Fails with [`ModelError::InvalidApplicationStatus`] if any status would exceed
    /// the new round count, in which case no application is rewritten.
    pub fn update_job(&mut self, old: &Job, new: &Job) -> Result<usize, ModelError> {
        let (rewritten, count) = self.rewrite_job(old, new)?;
        self.applications.set_all(rewritten)?;
        if count > 0 {
            info!(from = %old.title(), to = %new.title(), count, "rewrote applications for edited job");
        }
        Ok(count)
    }

    pub fn remove_person_applications(&mut self, person: &Person) -> usize {
        let removed = self
            .applications
            .retain(|application| application.applicant() != person);
        if removed > 0 {
            info!(name = %person.name(), removed, "removed applications of deleted person");
        }
        removed
    }

    pub fn remove_job_applications(&mut self, job: &Job) -> usize {
        let removed = self.applications.retain(|application| application.job() != job);
        if removed > 0 {
            info!(title = %job.title(), removed, "removed applications of deleted job");
        }
        removed
    }

    fn rewrite_person(&self, old: &Person, new: &Person) -> Result<(Vec<Application>, usize), ModelError> {
        let mut count = 0;
        let rewritten: Vec<Application> = self
            .applications
            .iter()
            .map(|application| {
                if application.applicant() == old {
                    count += 1;
                    application.with_applicant(new.clone())
                } else {
                    application.clone()
                }
            })
            .collect();
        ensure_unique(&rewritten)?;
        Ok((rewritten, count))
    }

    fn rewrite_job(&self, old: &Job, new: &Job) -> Result<(Vec<Application>, usize), ModelError> {
        let mut count = 0;
        let mut rewritten = Vec::with_capacity(self.applications.len());
        for application in &self.applications {
            if application.job() == old {
                count += 1;
                rewritten.push(application.with_job(new.clone())?);
            } else {
                rewritten.push(application.clone());
            }
        }
        ensure_unique(&rewritten)?;
        Ok((rewritten, count))
    }
}

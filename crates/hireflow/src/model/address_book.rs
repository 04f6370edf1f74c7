use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ModelError;
use super::job::{Job, JobTitle};
use super::person::{Person, Phone};
use super::unique::UniqueList;

/// Store of unique persons and unique jobs.
///
/// Knows nothing about applications; cascades are driven by [`super::Model`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    persons: UniqueList<Person>,
    jobs: UniqueList<Job>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(persons: Vec<Person>, jobs: Vec<Job>) -> Result<Self, ModelError> {
        Ok(Self {
            persons: UniqueList::try_from(persons)?,
            jobs: UniqueList::try_from(jobs)?,
        })
    }

    /// Replaces both lists with copies of `other`'s.
    ///
    /// Both lists are validated before either is assigned.
    pub fn reset_data(&mut self, other: &AddressBook) -> Result<(), ModelError> {
        let persons = UniqueList::try_from(other.persons.as_slice().to_vec())?;
        let jobs = UniqueList::try_from(other.jobs.as_slice().to_vec())?;
        self.persons = persons;
        self.jobs = jobs;
        Ok(())
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn find_person(&self, person: &Person) -> Option<&Person> {
        self.persons.find(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        debug!(name = %person.name(), "adding person");
        self.persons.add(person)
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), ModelError> {
        debug!(from = %target.name(), to = %edited.name(), "replacing person");
        self.persons.set(target, edited)
    }

    /// Fails as [`set_person`](Self::set_person) would, without mutating.
    pub fn check_set_person(&self, target: &Person, edited: &Person) -> Result<(), ModelError> {
        self.persons.check_set(target, edited).map(|_| ())
    }

    pub fn remove_person(&mut self, person: &Person) -> Result<Person, ModelError> {
        debug!(name = %person.name(), "removing person");
        self.persons.remove(person)
    }

    /// Every person with this phone number. Phones are not a uniqueness key.
    pub fn persons_by_phone(&self, phone: &Phone) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|person| person.phone() == phone)
            .collect()
    }

    pub fn has_job(&self, job: &Job) -> bool {
        self.jobs.contains(job)
    }

    pub fn find_job(&self, job: &Job) -> Option<&Job> {
        self.jobs.find(job)
    }

    pub fn add_job(&mut self, job: Job) -> Result<(), ModelError> {
        debug!(title = %job.title(), company = %job.company(), "adding job");
        self.jobs.add(job)
    }

    pub fn set_job(&mut self, target: &Job, edited: Job) -> Result<(), ModelError> {
        debug!(from = %target.title(), to = %edited.title(), "replacing job");
        self.jobs.set(target, edited)
    }

    pub fn check_set_job(&self, target: &Job, edited: &Job) -> Result<(), ModelError> {
        self.jobs.check_set(target, edited).map(|_| ())
    }

    pub fn remove_job(&mut self, job: &Job) -> Result<Job, ModelError> {
        debug!(title = %job.title(), company = %job.company(), "removing job");
        self.jobs.remove(job)
    }

    /// Every job with this title, across companies.
    pub fn jobs_by_title(&self, title: &JobTitle) -> Vec<&Job> {
        self.jobs.iter().filter(|job| job.title() == title).collect()
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn jobs(&self) -> &[Job] {
        self.jobs.as_slice()
    }
}

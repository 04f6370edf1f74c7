//! The facade command handlers drive.
//!
//! [`AddressBook`] and [`ApplicationsManager`] never see each other; every operation
//! that touches both goes through [`Model`], which checks the whole cascade before
//! mutating either store.

use tracing::{debug, info, warn};

use super::address_book::AddressBook;
use super::application::{Application, ApplicationStatus};
use super::applications_manager::ApplicationsManager;
use super::error::ModelError;
use super::filtered::{FilteredView, Predicate, StackableFilter};
use super::job::{Job, JobEdit, JobTitle};
use super::person::{Person, PersonEdit, Phone, Remark};
use super::selector::{ApplicationSelector, Index, JobSelector, PersonSelector};
use super::unique::EntityKind;

/// Outcome of an operation on a person or job, with the number of applications the
/// cascade removed or rewrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascaded<T> {
    pub record: T,
    pub applications: usize,
}

#[derive(Debug, Default)]
pub struct Model {
    address_book: AddressBook,
    applications: ApplicationsManager,
    person_filter: StackableFilter<Person>,
    job_filter: StackableFilter<Job>,
    application_filter: StackableFilter<Application>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a model from loaded stores, rejecting applications whose applicant or
    /// job is not in the address book.
    pub fn from_parts(
        address_book: AddressBook,
        applications: ApplicationsManager,
    ) -> Result<Self, ModelError> {
        check_endpoints(&address_book, &applications)?;
        Ok(Self {
            address_book,
            applications,
            ..Self::default()
        })
    }

    /// Replaces both stores. Filters are kept.
    pub fn reset_data(
        &mut self,
        address_book: &AddressBook,
        applications: &ApplicationsManager,
    ) -> Result<(), ModelError> {
        check_endpoints(address_book, applications)?;
        let mut next_book = AddressBook::new();
        next_book.reset_data(address_book)?;
        let mut next_applications = ApplicationsManager::new();
        next_applications.reset_data(applications)?;
        self.address_book = next_book;
        self.applications = next_applications;
        info!(
            persons = self.address_book.persons().len(),
            jobs = self.address_book.jobs().len(),
            applications = self.applications.applications().len(),
            "model data reset"
        );
        Ok(())
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn applications_manager(&self) -> &ApplicationsManager {
        &self.applications
    }

    // persons

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), ModelError> {
        self.address_book.add_person(person)
    }

    /// Removes the person matching `person` by name, after its applications.
    pub fn delete_person(&mut self, person: &Person) -> Result<Cascaded<Person>, ModelError> {
        let stored = self
            .address_book
            .find_person(person)
            .cloned()
            .ok_or(ModelError::NotFound(EntityKind::Person))?;
        let applications = self.applications.remove_person_applications(&stored);
        let record = self.address_book.remove_person(&stored)?;
        info!(name = %record.name(), applications, "deleted person");
        Ok(Cascaded {
            record,
            applications,
        })
    }

    /// Replaces `target` with `edited` and rewrites the applications that embed it.
    ///
    /// A name collision with another stored person is reported as a person duplicate
    /// before any application rewrite is considered.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<usize, ModelError> {
        let stored = self
            .address_book
            .find_person(target)
            .cloned()
            .ok_or(ModelError::NotFound(EntityKind::Person))?;
        let checked = self
            .address_book
            .check_set_person(&stored, &edited)
            .and_then(|()| self.applications.validate_person_edit(&stored, &edited));
        if let Err(err) = checked {
            warn!(name = %stored.name(), error = %err, "rejected person edit");
            return Err(err);
        }
        self.address_book.set_person(&stored, edited.clone())?;
        self.applications.update_person(&stored, &edited)
    }

    pub fn persons_by_phone(&self, phone: &Phone) -> Vec<&Person> {
        self.address_book.persons_by_phone(phone)
    }

    // jobs

    pub fn has_job(&self, job: &Job) -> bool {
        self.address_book.has_job(job)
    }

    pub fn add_job(&mut self, job: Job) -> Result<(), ModelError> {
        self.address_book.add_job(job)
    }

    pub fn delete_job(&mut self, job: &Job) -> Result<Cascaded<Job>, ModelError> {
        let stored = self
            .address_book
            .find_job(job)
            .cloned()
            .ok_or(ModelError::NotFound(EntityKind::Job))?;
        let applications = self.applications.remove_job_applications(&stored);
        let record = self.address_book.remove_job(&stored)?;
        info!(title = %record.title(), company = %record.company(), applications, "deleted job");
        Ok(Cascaded {
            record,
            applications,
        })
    }

    /// Replaces `target` with `edited` and rewrites dependent applications.
    ///
    /// An edit that lowers the round count below some application's status is
    /// rejected with [`ModelError::InvalidApplicationStatus`] and changes nothing.
    pub fn set_job(&mut self, target: &Job, edited: Job) -> Result<usize, ModelError> {
        let stored = self
            .address_book
            .find_job(target)
            .cloned()
            .ok_or(ModelError::NotFound(EntityKind::Job))?;
        let checked = self
            .address_book
            .check_set_job(&stored, &edited)
            .and_then(|()| self.applications.validate_job_edit(&stored, &edited));
        if let Err(err) = checked {
            warn!(title = %stored.title(), error = %err, "rejected job edit");
            return Err(err);
        }
        self.address_book.set_job(&stored, edited.clone())?;
        self.applications.update_job(&stored, &edited)
    }

    pub fn jobs_by_title(&self, title: &JobTitle) -> Vec<&Job> {
        self.address_book.jobs_by_title(title)
    }

    // applications

    pub fn has_application(&self, application: &Application) -> bool {
        self.applications.has_application(application)
    }

    /// Adds an application whose applicant and job are both stored as given.
    pub fn add_application(&mut self, application: Application) -> Result<(), ModelError> {
        if self.address_book.find_person(application.applicant()) != Some(application.applicant()) {
            return Err(ModelError::NotFound(EntityKind::Person));
        }
        if self.address_book.find_job(application.job()) != Some(application.job()) {
            return Err(ModelError::NotFound(EntityKind::Job));
        }
        self.applications.add_application(application)
    }

    pub fn delete_application(&mut self, application: &Application) -> Result<Application, ModelError> {
        self.applications.remove_application(application)
    }

    pub fn advance_application(
        &mut self,
        application: &Application,
        rounds: i64,
    ) -> Result<Application, ModelError> {
        self.applications
            .advance_application(application, rounds)
            .map_err(|err| {
                warn!(%application, rounds, error = %err, "rejected advance");
                err
            })
    }

    pub fn applications_by_person(&self, person: &Person) -> Vec<&Application> {
        self.applications.applications_by_person(person)
    }

    pub fn applications_by_job(&self, job: &Job) -> Vec<&Application> {
        self.applications.applications_by_job(job)
    }

    pub fn applications_by_person_and_job(&self, person: &Person, job: &Job) -> Option<&Application> {
        self.applications.applications_by_person_and_job(person, job)
    }

    // filtered views

    pub fn filtered_persons(&self) -> FilteredView<'_, Person> {
        self.person_filter.apply(self.address_book.persons())
    }

    pub fn filtered_jobs(&self) -> FilteredView<'_, Job> {
        self.job_filter.apply(self.address_book.jobs())
    }

    pub fn filtered_applications(&self) -> FilteredView<'_, Application> {
        self.application_filter
            .apply(self.applications.applications())
    }

    /// Narrows the displayed persons; earlier filters stay in effect.
    pub fn update_person_filter(&mut self, predicate: impl Predicate<Person> + 'static) {
        debug!(filter = %predicate.describe(), "stacking person filter");
        self.person_filter.push(predicate);
    }

    pub fn update_job_filter(&mut self, predicate: impl Predicate<Job> + 'static) {
        debug!(filter = %predicate.describe(), "stacking job filter");
        self.job_filter.push(predicate);
    }

    pub fn update_application_filter(&mut self, predicate: impl Predicate<Application> + 'static) {
        debug!(filter = %predicate.describe(), "stacking application filter");
        self.application_filter.push(predicate);
    }

    pub fn reset_person_filter(&mut self) {
        self.person_filter.clear();
    }

    pub fn reset_job_filter(&mut self) {
        self.job_filter.clear();
    }

    pub fn reset_application_filter(&mut self) {
        self.application_filter.clear();
    }

    pub fn person_filters(&self) -> Vec<String> {
        self.person_filter.describe()
    }

    pub fn job_filters(&self) -> Vec<String> {
        self.job_filter.describe()
    }

    pub fn application_filters(&self) -> Vec<String> {
        self.application_filter.describe()
    }

    // selector resolution

    pub fn resolve_person(&self, selector: &PersonSelector) -> Result<&Person, ModelError> {
        match selector {
            PersonSelector::Displayed(index) => {
                displayed(self.filtered_persons(), *index, EntityKind::Person)
            }
            PersonSelector::Key(key) => single(
                self.address_book
                    .persons()
                    .iter()
                    .filter(|person| key.matches(person)),
                EntityKind::Person,
            ),
        }
    }

    pub fn resolve_job(&self, selector: &JobSelector) -> Result<&Job, ModelError> {
        match selector {
            JobSelector::Displayed(index) => displayed(self.filtered_jobs(), *index, EntityKind::Job),
            JobSelector::Key(key) => single(
                self.address_book.jobs().iter().filter(|job| key.matches(job)),
                EntityKind::Job,
            ),
        }
    }

    pub fn resolve_application(
        &self,
        selector: &ApplicationSelector,
    ) -> Result<&Application, ModelError> {
        match selector {
            ApplicationSelector::Displayed(index) => displayed(
                self.filtered_applications(),
                *index,
                EntityKind::Application,
            ),
            ApplicationSelector::Pair { person, job } => {
                let person = self.resolve_person(person)?;
                let job = self.resolve_job(job)?;
                self.applications_by_person_and_job(person, job)
                    .ok_or(ModelError::NotFound(EntityKind::Application))
            }
        }
    }

    // selector-addressed mutations

    pub fn delete_person_by(&mut self, selector: &PersonSelector) -> Result<Cascaded<Person>, ModelError> {
        let target = self.resolve_person(selector)?.clone();
        self.delete_person(&target)
    }

    /// Applies `edit` to the selected person and returns the edited record.
    pub fn edit_person_by(
        &mut self,
        selector: &PersonSelector,
        edit: &PersonEdit,
    ) -> Result<Cascaded<Person>, ModelError> {
        let target = self.resolve_person(selector)?.clone();
        let edited = edit.apply(&target);
        let applications = self.set_person(&target, edited.clone())?;
        Ok(Cascaded {
            record: edited,
            applications,
        })
    }

    pub fn set_remark_by(
        &mut self,
        selector: &PersonSelector,
        remark: Remark,
    ) -> Result<Cascaded<Person>, ModelError> {
        let edit = PersonEdit {
            remark: Some(remark),
            ..PersonEdit::default()
        };
        self.edit_person_by(selector, &edit)
    }

    pub fn delete_job_by(&mut self, selector: &JobSelector) -> Result<Cascaded<Job>, ModelError> {
        let target = self.resolve_job(selector)?.clone();
        self.delete_job(&target)
    }

    pub fn edit_job_by(
        &mut self,
        selector: &JobSelector,
        edit: &JobEdit,
    ) -> Result<Cascaded<Job>, ModelError> {
        let target = self.resolve_job(selector)?.clone();
        let edited = edit.apply(&target);
        let applications = self.set_job(&target, edited.clone())?;
        Ok(Cascaded {
            record: edited,
            applications,
        })
    }

    pub fn add_application_by(
        &mut self,
        person: &PersonSelector,
        job: &JobSelector,
        status: ApplicationStatus,
    ) -> Result<Application, ModelError> {
        let applicant = self.resolve_person(person)?.clone();
        let job = self.resolve_job(job)?.clone();
        let application = Application::new(applicant, job, status)?;
        self.add_application(application.clone())?;
        Ok(application)
    }

    pub fn delete_application_by(
        &mut self,
        selector: &ApplicationSelector,
    ) -> Result<Application, ModelError> {
        let target = self.resolve_application(selector)?.clone();
        self.delete_application(&target)
    }

    pub fn advance_application_by(
        &mut self,
        selector: &ApplicationSelector,
        rounds: i64,
    ) -> Result<Application, ModelError> {
        let target = self.resolve_application(selector)?.clone();
        self.advance_application(&target, rounds)
    }
}

fn check_endpoints(
    address_book: &AddressBook,
    applications: &ApplicationsManager,
) -> Result<(), ModelError> {
    let dangling = applications.applications().iter().find(|application| {
        !address_book.persons().contains(application.applicant())
            || !address_book.jobs().contains(application.job())
    });
    match dangling {
        Some(application) => Err(ModelError::DanglingApplication {
            applicant: application.applicant().name().to_string(),
            job: format!("{} at {}", application.job().title(), application.job().company()),
        }),
        None => Ok(()),
    }
}

fn displayed<'a, T>(
    view: FilteredView<'a, T>,
    index: Index,
    kind: EntityKind,
) -> Result<&'a T, ModelError> {
    view.get(index.zero_based())
        .ok_or_else(|| ModelError::IndexOutOfRange {
            kind,
            index,
            len: view.len(),
        })
}

fn single<'a, T: 'a>(
    mut matches: impl Iterator<Item = &'a T>,
    kind: EntityKind,
) -> Result<&'a T, ModelError> {
    let first = matches.next().ok_or(ModelError::NotFound(kind))?;
    let extra = matches.count();
    if extra > 0 {
        return Err(ModelError::Ambiguous {
            kind,
            matches: extra + 1,
        });
    }
    Ok(first)
}

//! In-memory relational model of candidates, job openings and the applications
//! linking them.

mod address_book;
mod application;
mod applications_manager;
mod error;
mod filtered;
mod job;
mod manager;
mod person;
mod predicates;
pub mod sample;
mod selector;
mod unique;
mod value;

#[cfg(test)]
pub(crate) mod tests;

pub use address_book::AddressBook;
pub use application::{Application, ApplicationStatus};
pub use applications_manager::ApplicationsManager;
pub use error::ModelError;
pub use filtered::{FilteredIter, FilteredView, Predicate, StackableFilter};
pub use job::{
    Job, JobAddress, JobCompany, JobEdit, JobRounds, JobSkills, JobTitle, JobType, Skill,
};
pub use manager::{Cascaded, Model};
pub use person::{Address, Degree, Email, Name, Person, PersonEdit, Phone, Remark, School, Tag};
pub use predicates::{
    ApplicationJobContainsKeywords, JobContainsKeywords, Keywords, NameContainsKeywords,
};
pub use selector::{ApplicationSelector, Index, JobKey, JobSelector, PersonKey, PersonSelector};
pub use unique::{EntityKind, UniqueList, WeakIdentity};
pub use value::{FieldKind, ValidationError};

use super::selector::Index;
use super::unique::EntityKind;
use super::value::ValidationError;

/// Failures surfaced by the stores and the [`super::Model`] facade.
///
/// Every variant is raised before any mutation takes place, so a failed call leaves
/// the stores unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0} already exists")]
    Duplicate(EntityKind),
    #[error("{0} not found")]
    NotFound(EntityKind),
    #[error("application status {status} exceeds the job's {rounds} interview rounds")]
    InvalidApplicationStatus { status: u64, rounds: u32 },
    #[error("cannot advance an application by a negative number of rounds ({0})")]
    NegativeAdvance(i64),
    #[error("{kind} index {index} is out of range, {len} displayed")]
    IndexOutOfRange {
        kind: EntityKind,
        index: Index,
        len: usize,
    },
    #[error("{matches} records match the given {kind} key")]
    Ambiguous { kind: EntityKind, matches: usize },
    #[error("application of {applicant} to {job} refers to a record missing from the address book")]
    DanglingApplication { applicant: String, job: String },
}

impl ModelError {
    /// Status-exceeds-rounds failures get a different remedy from callers
    /// (delete the application instead of advancing it).
    pub fn is_status_violation(&self) -> bool {
        matches!(self, ModelError::InvalidApplicationStatus { .. })
    }
}

//! Persistence of the model's two stores.

mod json;

use std::path::PathBuf;

use tracing::info;

use crate::model::{sample, AddressBook, ApplicationsManager, Model, ModelError};

pub use json::JsonFileStorage;

/// Storage abstraction so the model can be loaded and saved without knowing the format.
///
/// Reads return `Ok(None)` when nothing has been saved yet.
pub trait Storage: Send + Sync {
    fn read_address_book(&self) -> Result<Option<AddressBook>, StorageError>;
    fn save_address_book(&self, address_book: &AddressBook) -> Result<(), StorageError>;
    fn read_applications(&self) -> Result<Option<ApplicationsManager>, StorageError>;
    fn save_applications(&self, applications: &ApplicationsManager) -> Result<(), StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("unable to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed data in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} was written by format version {found}, expected {expected}")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
    #[error("stored data is inconsistent: {0}")]
    Model(#[from] ModelError),
}

/// Loads both stores into a [`Model`].
///
/// When no address book has been saved and `seed_sample` is set, the sample records
/// are used instead. A missing applications file yields no applications.
pub fn load_model(storage: &dyn Storage, seed_sample: bool) -> Result<Model, StorageError> {
    let (address_book, applications) = match storage.read_address_book()? {
        Some(address_book) => {
            let applications = storage.read_applications()?.unwrap_or_default();
            (address_book, applications)
        }
        None if seed_sample => {
            info!("no saved address book, seeding sample data");
            (sample::sample_address_book()?, sample::sample_applications()?)
        }
        None => {
            info!("no saved address book, starting empty");
            (AddressBook::new(), ApplicationsManager::new())
        }
    };

    let model = Model::from_parts(address_book, applications)?;
    info!(
        persons = model.address_book().persons().len(),
        jobs = model.address_book().jobs().len(),
        applications = model.applications_manager().applications().len(),
        "model loaded"
    );
    Ok(model)
}

pub fn save_model(storage: &dyn Storage, model: &Model) -> Result<(), StorageError> {
    storage.save_address_book(model.address_book())?;
    storage.save_applications(model.applications_manager())
}

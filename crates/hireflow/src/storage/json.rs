use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{Storage, StorageError};
use crate::config::StorageConfig;
use crate::model::{AddressBook, ApplicationsManager};

const FORMAT_VERSION: u32 = 1;

/// Pretty-printed JSON snapshot files, one per store.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    address_book_path: PathBuf,
    applications_path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct Snapshot<T> {
    version: u32,
    saved_at: DateTime<Utc>,
    #[serde(flatten)]
    body: T,
}

impl JsonFileStorage {
    pub fn new(address_book_path: impl Into<PathBuf>, applications_path: impl Into<PathBuf>) -> Self {
        Self {
            address_book_path: address_book_path.into(),
            applications_path: applications_path.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.address_book_file, &config.applications_file)
    }

    pub fn address_book_path(&self) -> &Path {
        &self.address_book_path
    }

    pub fn applications_path(&self) -> &Path {
        &self.applications_path
    }
}

fn read_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no snapshot on disk");
            return Ok(None);
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let version = serde_json::from_str::<VersionProbe>(&content)
        .map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })?
        .version;
    if version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let snapshot: Snapshot<T> =
        serde_json::from_str(&content).map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), saved_at = %snapshot.saved_at, "loaded snapshot");
    Ok(Some(snapshot.body))
}

fn write_snapshot<T: Serialize>(path: &Path, body: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StorageError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let snapshot = Snapshot {
        version: FORMAT_VERSION,
        saved_at: Utc::now(),
        body,
    };
    let content = serde_json::to_string_pretty(&snapshot).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "saved snapshot");
    Ok(())
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl Storage for JsonFileStorage {
    fn read_address_book(&self) -> Result<Option<AddressBook>, StorageError> {
        read_snapshot(&self.address_book_path)
    }

    fn save_address_book(&self, address_book: &AddressBook) -> Result<(), StorageError> {
        write_snapshot(&self.address_book_path, address_book)
    }

    fn read_applications(&self) -> Result<Option<ApplicationsManager>, StorageError> {
        read_snapshot(&self.applications_path)
    }

    fn save_applications(&self, applications: &ApplicationsManager) -> Result<(), StorageError> {
        write_snapshot(&self.applications_path, applications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample;
    use tempfile::tempdir;

    fn storage_in(dir: &Path) -> JsonFileStorage {
        JsonFileStorage::new(dir.join("addressbook.json"), dir.join("applications.json"))
    }

    #[test]
    fn missing_files_read_as_none() {
        let dir = tempdir().expect("temp dir");
        let storage = storage_in(dir.path());
        assert!(storage.read_address_book().expect("read").is_none());
        assert!(storage.read_applications().expect("read").is_none());
    }

    #[test]
    fn saved_stores_load_back_equal() {
        let dir = tempdir().expect("temp dir");
        let storage = storage_in(dir.path());
        let book = sample::sample_address_book().expect("sample book");
        let applications = sample::sample_applications().expect("sample applications");

        storage.save_address_book(&book).expect("save book");
        storage.save_applications(&applications).expect("save applications");

        assert_eq!(storage.read_address_book().expect("read"), Some(book));
        assert_eq!(storage.read_applications().expect("read"), Some(applications));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let storage = storage_in(dir.path());
        fs::write(
            storage.address_book_path(),
            r#"{"version": 7, "saved_at": "2024-01-01T00:00:00Z", "persons": [], "jobs": []}"#,
        )
        .expect("write");

        assert!(matches!(
            storage.read_address_book(),
            Err(StorageError::UnsupportedVersion { found: 7, .. })
        ));
    }
}

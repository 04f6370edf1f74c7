use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = path_var("APP_DATA_DIR")?.unwrap_or_else(|| PathBuf::from("data"));
        let address_book_file = path_var("APP_ADDRESS_BOOK_FILE")?
            .unwrap_or_else(|| data_dir.join("addressbook.json"));
        let applications_file = path_var("APP_APPLICATIONS_FILE")?
            .unwrap_or_else(|| data_dir.join("applications.json"));
        let seed_sample_data = flag_var("APP_SEED_SAMPLE_DATA", true)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            storage: StorageConfig {
                data_dir,
                address_book_file,
                applications_file,
                seed_sample_data,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn path_var(name: &'static str) -> Result<Option<PathBuf>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { variable: name }),
        Ok(value) => Ok(Some(PathBuf::from(value.trim()))),
        Err(_) => Ok(None),
    }
}

fn flag_var(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    let Ok(value) = env::var(name) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            variable: name,
            value,
        }),
    }
}

/// Where the JSON snapshots live.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub address_book_file: PathBuf,
    pub applications_file: PathBuf,
    pub seed_sample_data: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyPath { variable: &'static str },
    InvalidFlag { variable: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { variable } => write!(f, "{variable} must not be blank"),
            ConfigError::InvalidFlag { variable, value } => {
                write!(f, "{variable} must be true or false, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_DATA_DIR");
        env::remove_var("APP_ADDRESS_BOOK_FILE");
        env::remove_var("APP_APPLICATIONS_FILE");
        env::remove_var("APP_SEED_SAMPLE_DATA");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert_eq!(
            config.storage.address_book_file,
            PathBuf::from("data").join("addressbook.json")
        );
        assert!(config.storage.seed_sample_data);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn file_paths_follow_data_dir_unless_overridden() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_DATA_DIR", "/tmp/hireflow");
        env::set_var("APP_APPLICATIONS_FILE", "/var/lib/apps.json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.storage.address_book_file,
            PathBuf::from("/tmp/hireflow/addressbook.json")
        );
        assert_eq!(
            config.storage.applications_file,
            PathBuf::from("/var/lib/apps.json")
        );
        reset_env();
    }

    #[test]
    fn rejects_blank_paths_and_bad_flags() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_DATA_DIR", "  ");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::EmptyPath {
                variable: "APP_DATA_DIR"
            })
        ));

        reset_env();
        env::set_var("APP_SEED_SAMPLE_DATA", "maybe");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidFlag { .. })
        ));

        env::set_var("APP_SEED_SAMPLE_DATA", "off");
        assert!(!AppConfig::load().expect("config loads").storage.seed_sample_data);
        reset_env();
    }
}

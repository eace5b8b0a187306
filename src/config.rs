//! Where the writer puts its files.
//!
//! Paths are plain data handed to [`DataWriter`](crate::io::DataWriter), so
//! tests and the CLI can redirect output without touching globals. A settings
//! file in the OS config directory can override the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_USERS_PATH: &str = "json/users.json";
pub const DEFAULT_QUESTIONS_PATH: &str = "json/questions.json";

/// Output locations for the two collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    pub users_path: PathBuf,
    pub questions_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            users_path: PathBuf::from(DEFAULT_USERS_PATH),
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
        }
    }
}

impl StoreConfig {
    pub fn new(users_path: impl Into<PathBuf>, questions_path: impl Into<PathBuf>) -> Self {
        Self {
            users_path: users_path.into(),
            questions_path: questions_path.into(),
        }
    }

    /// Both files inside `dir`, using the default file names.
    pub fn under(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join("users.json"), dir.join("questions.json"))
    }

    /// Read settings from a JSON file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`load`](Self::load), but falls back to defaults when the file is
    /// absent or unreadable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                tracing::warn!("ignoring settings: {}", e);
                Self::default()
            }
        }
    }

    /// `settings.json` in the per-user config directory.
    pub fn default_settings_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "PrepStore") {
            proj_dirs.config_dir().join("settings.json")
        } else {
            // Fallback
            PathBuf::from("settings.json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_json_dir() {
        let config = StoreConfig::default();
        assert_eq!(config.users_path, PathBuf::from("json/users.json"));
        assert_eq!(config.questions_path, PathBuf::from("json/questions.json"));
    }

    #[test]
    fn under_joins_file_names() {
        let config = StoreConfig::under("/tmp/out");
        assert_eq!(config.users_path, Path::new("/tmp/out").join("users.json"));
        assert_eq!(config.questions_path, Path::new("/tmp/out").join("questions.json"));
    }

    #[test]
    fn load_accepts_camel_case_and_partial_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"usersPath": "/data/u.json"}"#).unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.users_path, PathBuf::from("/data/u.json"));
        assert_eq!(config.questions_path, PathBuf::from(DEFAULT_QUESTIONS_PATH));
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = StoreConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::load_or_default(dir.path().join("nope.json"));
        assert_eq!(config, StoreConfig::default());
    }
}

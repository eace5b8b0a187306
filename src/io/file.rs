use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::StoreConfig;
use crate::error::WriteError;
use crate::model::{InterviewQuestion, User};

use super::mapper::{map_question, map_user};
use super::tree::{to_json_string, Value};

/// Write a JSON tree to `path`, replacing whatever was there.
///
/// The parent directory must already exist. Data is synced to disk before
/// returning. Nothing is atomic: a failure part way through can leave a
/// truncated file behind.
pub fn write(tree: &Value, path: &Path) -> Result<(), WriteError> {
    write_inner(tree, path).inspect_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "error writing to file");
    })
}

fn write_inner(tree: &Value, path: &Path) -> Result<(), WriteError> {
    let json = to_json_string(tree).map_err(|source| WriteError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    let io_err = |source: std::io::Error| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(json.as_bytes()).map_err(io_err)?;
    let file = out.into_inner().map_err(|e| io_err(e.into_error()))?;
    file.sync_all().map_err(io_err)?;
    Ok(())
}

/// Saves whole collections to the paths in a [`StoreConfig`].
///
/// Every save rewrites its file from scratch. Concurrent saves to the same
/// path are not coordinated; the last one to finish wins.
#[derive(Debug, Clone, Default)]
pub struct DataWriter {
    config: StoreConfig,
}

impl DataWriter {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Save all users as one JSON array, in the given order.
    pub fn save_users(&self, users: &[User]) -> Result<(), WriteError> {
        let tree: Value = users.iter().map(map_user).collect();
        write(&tree, &self.config.users_path)?;
        tracing::info!(count = users.len(), path = %self.config.users_path.display(), "saved users");
        Ok(())
    }

    /// Save all questions as one JSON array, in the given order.
    pub fn save_questions(&self, questions: &[InterviewQuestion]) -> Result<(), WriteError> {
        let tree: Value = questions.iter().map(map_question).collect();
        write(&tree, &self.config.questions_path)?;
        tracing::info!(
            count = questions.len(),
            path = %self.config.questions_path.display(),
            "saved questions"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::tree::Map;

    #[test]
    fn write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        write(&Value::Array(Vec::new()), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn write_object_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut map = Map::new();
        map.insert("b", 1i64);
        map.insert("a", "x");

        write(&Value::Object(map), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"b":1,"a":"x"}"#);
    }

    #[test]
    fn missing_parent_dir_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.json");

        let err = write(&Value::Null, &path).unwrap_err();
        assert_eq!(err.path(), path.as_path());
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert!(err.to_string().contains("out.json"));
        assert!(!path.exists());
    }

    #[test]
    fn writer_uses_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DataWriter::new(StoreConfig::under(dir.path()));

        writer.save_users(&[]).unwrap();
        writer.save_questions(&[]).unwrap();

        assert_eq!(std::fs::read_to_string(dir.path().join("users.json")).unwrap(), "[]");
        assert_eq!(std::fs::read_to_string(dir.path().join("questions.json")).unwrap(), "[]");
    }

    #[test]
    fn extreme_values_encode_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut map = Map::new();
        map.insert("min", i64::MIN);
        map.insert("max", i64::MAX);
        map.insert("text", "tab\t nul\u{0} quote\" é");
        map.insert("none", None::<String>);

        write(&Value::Object(map.clone()), &path).unwrap();
        let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, Value::Object(map));
    }
}

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while writing a JSON document to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Only here because `serde_json` encoding returns a `Result`; a `Value`
    /// tree has string keys and finite numbers, so this is not expected.
    #[error("failed to encode JSON for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// The file the write was aimed at.
    pub fn path(&self) -> &Path {
        match self {
            WriteError::Encode { path, .. } | WriteError::Io { path, .. } => path.as_path(),
        }
    }

    /// Underlying I/O error kind, if the failure came from the filesystem.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            WriteError::Io { source, .. } => Some(source.kind()),
            WriteError::Encode { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

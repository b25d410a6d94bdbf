use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid argument `{name}`: expected {expected}, got {actual}")]
    InvalidArgument {
        name: String,
        expected: &'static str,
        actual: String,
    },

    #[error("{0} is a directory, expected a file path")]
    IsDirectory(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key path is empty")]
    EmptyKeyPath,

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Cannot set {path}: an enclosing value is not an object")]
    NotAnObject { path: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [`ConfigError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument or decoded value had the wrong shape
    Type,
    /// The location names a directory
    Path,
    /// The file could not be read or parsed
    Load,
    /// A lookup value was unusable (empty key path)
    Value,
    /// A dotted path did not resolve
    KeyNotFound,
    /// Writing the document to disk failed
    Write,
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::InvalidArgument { .. } | ConfigError::Json(_) => ErrorKind::Type,
            ConfigError::IsDirectory(_) => ErrorKind::Path,
            ConfigError::Read { .. } | ConfigError::Parse { .. } => ErrorKind::Load,
            ConfigError::EmptyKeyPath => ErrorKind::Value,
            ConfigError::KeyNotFound(_) => ErrorKind::KeyNotFound,
            ConfigError::NotAnObject { .. } => ErrorKind::Value,
            ConfigError::Write { .. } => ErrorKind::Write,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

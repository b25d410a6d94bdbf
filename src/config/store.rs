//! File-backed JSON configuration store
//!
//! A [`ConfigStore`] is bound to a single file. Construction validates the
//! location, optionally materializes an empty `{}` document (and its parent
//! directories), then loads the whole file into memory. Lookups read from the
//! in-memory document; nothing is written back until [`ConfigStore::save`].

use crate::config::format::to_pretty_string;
use crate::config::{KeyPath, StoreOptions};
use crate::types::{ConfigError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Path of the backing JSON file
    location: PathBuf,

    options: StoreOptions,

    /// Parsed contents of the backing file, plus any unsaved edits
    document: Value,
}

impl ConfigStore {
    /// Open `location` with the default options
    pub fn open(location: impl Into<PathBuf>) -> Result<Self> {
        Self::new(location, StoreOptions::default())
    }

    /// Validate the location, create the file if requested, and load it.
    ///
    /// Fails without side effects when `location` is empty or names a
    /// directory. With `create_if_missing`, a missing file is created as `{}`
    /// (along with any missing parent directories); an existing file is left
    /// alone. Read and parse failures are returned to the caller.
    pub fn new(location: impl Into<PathBuf>, options: StoreOptions) -> Result<Self> {
        let location = location.into();

        Self::validate_location(&location)?;

        if options.create_if_missing {
            Self::create_empty(&location, options.indent)?;
        }

        let document = Self::load(&location)?;
        info!("Loaded config from {}", location.display());

        Ok(Self {
            location,
            options,
            document,
        })
    }

    fn validate_location(location: &Path) -> Result<()> {
        if location.as_os_str().is_empty() {
            return Err(ConfigError::InvalidArgument {
                name: "location".to_string(),
                expected: "a file path",
                actual: "an empty path".to_string(),
            });
        }

        if location.is_dir() {
            return Err(ConfigError::IsDirectory(location.to_path_buf()));
        }

        Ok(())
    }

    fn create_empty(location: &Path, indent: usize) -> Result<()> {
        if location.is_file() {
            debug!("Config file {} already exists", location.display());
            return Ok(());
        }

        if let Some(parent) = location.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let text = to_pretty_string(&Value::Object(Map::new()), indent)?;
        fs::write(location, text).map_err(|source| ConfigError::Write {
            path: location.to_path_buf(),
            source,
        })?;

        info!("Created empty config file at {}", location.display());
        Ok(())
    }

    fn load(location: &Path) -> Result<Value> {
        let content = fs::read_to_string(location).map_err(|source| ConfigError::Read {
            path: location.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: location.to_path_buf(),
            source,
        })
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Look up a dotted path such as `server.port`.
    ///
    /// Returns an owned copy: changing it does not touch the store. When the
    /// path does not resolve, fails with [`ConfigError::KeyNotFound`] if
    /// `fail_on_missing_key` is set and returns `Value::Null` otherwise. Use
    /// [`ConfigStore::lookup`] to tell a stored `null` from a missing key.
    pub fn get(&self, path: &str) -> Result<Value> {
        let key_path = KeyPath::parse(path)?;

        match key_path.resolve(&self.document) {
            Some(value) => Ok(value.clone()),
            None if self.options.fail_on_missing_key => Err(key_path.not_found()),
            None => {
                debug!("Key {} not found, returning null", key_path);
                Ok(Value::Null)
            }
        }
    }

    /// Borrowing lookup that reports absence as `None`, whatever the
    /// missing-key policy.
    pub fn lookup(&self, path: &str) -> Result<Option<&Value>> {
        let key_path = KeyPath::parse(path)?;
        Ok(key_path.resolve(&self.document))
    }

    pub fn contains(&self, path: &str) -> Result<bool> {
        Ok(self.lookup(path)?.is_some())
    }

    /// Look up a dotted path and decode it into `T`.
    ///
    /// With `fail_on_missing_key` unset, a missing key decodes as `null`, so
    /// an `Option<T>` target yields `None`. A target that cannot hold `null`
    /// still fails with [`ConfigError::KeyNotFound`] rather than a decode
    /// error.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let key_path = KeyPath::parse(path)?;

        match key_path.resolve(&self.document) {
            Some(value) => Ok(T::deserialize(value)?),
            None if self.options.fail_on_missing_key => Err(key_path.not_found()),
            None => T::deserialize(Value::Null).map_err(|_| key_path.not_found()),
        }
    }

    /// Set the value at a dotted path in memory, returning the previous one.
    ///
    /// Missing intermediate objects are created. Call [`ConfigStore::save`]
    /// to persist the change.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        let key_path = KeyPath::parse(path)?;
        let previous = key_path.insert(&mut self.document, value.into())?;
        debug!("Set {} in {}", key_path, self.location.display());
        Ok(previous)
    }

    /// Serialize the document using the configured indent
    pub fn to_text(&self) -> Result<String> {
        to_pretty_string(&self.document, self.options.indent)
    }

    /// Overwrite the backing file with the whole in-memory document
    pub fn save(&self) -> Result<()> {
        let text = self.to_text()?;
        fs::write(&self.location, text).map_err(|source| ConfigError::Write {
            path: self.location.clone(),
            source,
        })?;

        info!("Saved config to {}", self.location.display());
        Ok(())
    }
}

impl fmt::Display for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_text().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

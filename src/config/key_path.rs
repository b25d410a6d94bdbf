//! Dotted key paths
//!
//! A key path such as `server.http.port` names a value nested inside JSON
//! objects, one object key per segment. Only object keys are traversed:
//! arrays and scalars end the walk. There is no escaping, so a key that
//! itself contains a `.` cannot be addressed.

use crate::types::{ConfigError, Result};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    raw: String,
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path, rejecting the empty string
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(ConfigError::EmptyKeyPath);
        }

        Ok(Self {
            raw: path.to_string(),
            segments: path.split('.').map(str::to_string).collect(),
        })
    }

    /// Follow the path through `document`.
    ///
    /// Returns `None` when a segment is absent or when an intermediate value
    /// is not an object. A present `null`, `false`, `0` or `""` is found.
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(document, |current, segment| current.as_object()?.get(segment))
    }

    /// Store `value` at the end of the path, returning what was there before.
    ///
    /// Missing intermediate objects are created. A present intermediate that
    /// is not an object (or a non-object root) is left untouched and reported
    /// as [`ConfigError::NotAnObject`].
    pub fn insert(&self, document: &mut Value, value: Value) -> Result<Option<Value>> {
        let (leaf, parents) = self
            .segments
            .split_last()
            .ok_or(ConfigError::EmptyKeyPath)?;

        let mut current = document;
        for segment in parents {
            let object = current.as_object_mut().ok_or_else(|| self.not_an_object())?;
            current = object
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
        }

        let object = current.as_object_mut().ok_or_else(|| self.not_an_object())?;
        Ok(object.insert(leaf.clone(), value))
    }

    pub(crate) fn not_found(&self) -> ConfigError {
        ConfigError::KeyNotFound(self.raw.clone())
    }

    fn not_an_object(&self) -> ConfigError {
        ConfigError::NotAnObject {
            path: self.raw.clone(),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

//! Store options
//!
//! Options are plain typed values when built in code. [`StoreOptions::from_value`]
//! accepts them from a loosely typed JSON object and checks the kind of every
//! field before anything touches the filesystem.

use crate::types::{ConfigError, Result};
use serde_json::Value;

pub const DEFAULT_INDENT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Spaces per nesting level when the document is written
    pub indent: usize,

    /// Fail lookups of missing keys instead of returning `null`
    pub fail_on_missing_key: bool,

    /// Create the file (and its parent directories) with `{}` when absent
    pub create_if_missing: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            fail_on_missing_key: true,
            create_if_missing: false,
        }
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn fail_on_missing_key(mut self, fail: bool) -> Self {
        self.fail_on_missing_key = fail;
        self
    }

    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Build options from a JSON object such as
    /// `{"indent": 4, "createIfMissing": true}`.
    ///
    /// Both `camelCase` and `snake_case` field names are accepted. Absent
    /// fields keep their defaults; unknown fields and fields of the wrong
    /// kind are rejected with [`ConfigError::InvalidArgument`].
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = value
            .as_object()
            .ok_or_else(|| invalid_argument("options", "an object", value))?;

        let mut options = Self::default();
        for (name, field) in fields {
            match name.as_str() {
                "indent" => options.indent = parse_indent(field)?,
                "failOnMissingKey" | "fail_on_missing_key" => {
                    options.fail_on_missing_key = parse_bool(name, field)?
                }
                "createIfMissing" | "create_if_missing" => {
                    options.create_if_missing = parse_bool(name, field)?
                }
                _ => return Err(invalid_argument(name, "a known option", field)),
            }
        }

        Ok(options)
    }
}

fn parse_indent(field: &Value) -> Result<usize> {
    field
        .as_u64()
        .and_then(|indent| usize::try_from(indent).ok())
        .ok_or_else(|| invalid_argument("indent", "a non-negative whole number", field))
}

fn parse_bool(name: &str, field: &Value) -> Result<bool> {
    field
        .as_bool()
        .ok_or_else(|| invalid_argument(name, "a boolean", field))
}

fn invalid_argument(name: &str, expected: &'static str, actual: &Value) -> ConfigError {
    ConfigError::InvalidArgument {
        name: name.to_string(),
        expected,
        actual: format!("{} {}", kind_name(actual), actual),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

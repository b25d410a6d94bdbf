//! JSON text output

use crate::types::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Serialize `value` with `indent` spaces per nesting level.
///
/// Object keys keep the order they were parsed or inserted in. An indent of
/// zero still breaks lines, it just does not indent them.
pub fn to_pretty_string(value: &Value, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

//! JSON document I/O shared by the metadata and appcast stages.
//!
//! Documents are written with two-space indentation and without escaping
//! non-ASCII characters, so release notes in any language stay readable in
//! diffs.

use crate::error::{ReleaseError, Result};
use camino::Utf8Path;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;

/// Read and deserialise the JSON document at `path`.
///
/// # Errors
///
/// Returns [`ReleaseError::ReadFailed`] if the file cannot be read, or
/// [`ReleaseError::Json`] if it does not deserialise into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| ReleaseError::ReadFailed {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ReleaseError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Render `value` as two-space indented JSON.
///
/// # Errors
///
/// Returns [`ReleaseError::Json`] if serialisation fails; `path` is only
/// used for the diagnostic.
pub fn render_json<T: Serialize>(path: &Utf8Path, value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| ReleaseError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Serialise `value` and overwrite the file at `path`.
///
/// # Errors
///
/// Returns [`ReleaseError::Json`] if serialisation fails or
/// [`ReleaseError::WriteFailed`] if the file cannot be written.
pub fn write_json<T: Serialize>(path: &Utf8Path, value: &T) -> Result<()> {
    let text = render_json(path, value)?;
    fs::write(path, text).map_err(|source| ReleaseError::WriteFailed {
        path: path.to_owned(),
        source,
    })
}

/// Describe the JSON type of `value` for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

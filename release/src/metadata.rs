//! Plugin metadata (`info.json`) version updates.
//!
//! The metadata document is an arbitrary JSON object. Only its `version`
//! key is touched; every other key keeps its value and position.

use crate::artefact::version::ReleaseVersion;
use crate::document::{json_kind, read_json, write_json};
use crate::error::{ReleaseError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde_json::{Map, Value};

/// The metadata key holding the plugin version.
pub const VERSION_KEY: &str = "version";

/// Outcome of [`update_metadata`].
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataUpdate {
    /// The metadata document that was rewritten.
    pub path: Utf8PathBuf,
    /// The `version` value before the update, if the key was present.
    pub previous: Option<Value>,
}

/// Set the `version` key of `document`, returning the previous value.
///
/// An existing key keeps its position; a missing key is appended.
pub fn set_version(
    document: &mut Map<String, Value>,
    version: &ReleaseVersion,
) -> Option<Value> {
    document.insert(
        VERSION_KEY.to_owned(),
        Value::String(version.as_str().to_owned()),
    )
}

/// Rewrite the `version` field of the metadata document at `path`.
///
/// # Errors
///
/// Returns [`ReleaseError::MetadataNotFound`] if `path` is not a file,
/// [`ReleaseError::Json`] if the file is not valid JSON,
/// [`ReleaseError::InvalidDocument`] if the top level is not an object, or
/// [`ReleaseError::WriteFailed`] if the file cannot be rewritten.
pub fn update_metadata(path: &Utf8Path, version: &ReleaseVersion) -> Result<MetadataUpdate> {
    if !path.is_file() {
        return Err(ReleaseError::MetadataNotFound {
            path: path.to_owned(),
        });
    }

    let mut document = match read_json::<Value>(path)? {
        Value::Object(map) => map,
        other => {
            return Err(ReleaseError::InvalidDocument {
                path: path.to_owned(),
                reason: format!("expected a JSON object, found {}", json_kind(&other)),
            });
        }
    };

    let previous = set_version(&mut document, version);
    write_json(path, &document)?;
    debug!("metadata {path} version {previous:?} -> {version}");

    Ok(MetadataUpdate {
        path: path.to_owned(),
        previous,
    })
}

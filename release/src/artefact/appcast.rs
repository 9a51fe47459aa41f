//! Appcast schema types.
//!
//! The appcast is the JSON document Bob polls to discover plugin updates:
//!
//! ```json
//! {
//!   "identifier": "henry.llm.ocr",
//!   "versions": [
//!     {
//!       "version": "1.2.0",
//!       "desc": "fix bug",
//!       "sha256": "...",
//!       "url": "https://github.com/.../v1.2.0/llm-ocr-1.2.0.bobplugin",
//!       "minBobVersion": "1.8.0"
//!     }
//!   ]
//! }
//! ```
//!
//! Versions are ordered most recent first and keyed by their `version`
//! string. Only the record being written is built from [`VersionRecord`];
//! records already in the appcast, and every other key, are carried through
//! as raw JSON objects in their original order.

use super::error::{ArtefactError, Result};
use super::sha256_digest::Sha256Digest;
use super::version::ReleaseVersion;
use crate::document::json_kind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The default appcast identifier for the LLM OCR plugin.
pub const DEFAULT_IDENTIFIER: &str = "henry.llm.ocr";

/// The default minimum Bob version a release declares compatibility with.
pub const DEFAULT_MIN_BOB_VERSION: &str = "1.8.0";

const IDENTIFIER_KEY: &str = "identifier";
const VERSIONS_KEY: &str = "versions";
const VERSION_KEY: &str = "version";

/// One downloadable release listed in the appcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    /// The release version; identity key within the appcast.
    pub version: ReleaseVersion,
    /// Human-readable release notes.
    pub description: String,
    /// SHA-256 digest of the release archive.
    pub sha256: Sha256Digest,
    /// Download URL of the release archive.
    pub url: String,
    /// Oldest Bob version able to load this release.
    pub min_bob_version: String,
}

impl VersionRecord {
    /// Render the record as an appcast entry.
    ///
    /// Keys appear in the order Bob's own appcasts use: `version`, `desc`,
    /// `sha256`, `url`, `minBobVersion`.
    #[must_use]
    pub fn to_entry(&self) -> Map<String, Value> {
        let mut entry = Map::new();
        entry.insert(VERSION_KEY.to_owned(), self.version.as_str().into());
        entry.insert("desc".to_owned(), self.description.as_str().into());
        entry.insert("sha256".to_owned(), self.sha256.as_str().into());
        entry.insert("url".to_owned(), self.url.as_str().into());
        entry.insert("minBobVersion".to_owned(), self.min_bob_version.as_str().into());
        entry
    }
}

/// The appcast document.
///
/// # Examples
///
/// ```
/// use llm_ocr_release::artefact::appcast::Appcast;
///
/// let appcast = Appcast::new("henry.llm.ocr");
/// assert_eq!(appcast.identifier(), Some("henry.llm.ocr"));
/// assert!(appcast.versions().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Appcast {
    // Top-level keys in document order; the `versions` slot is a placeholder
    // refilled from `versions` on serialisation.
    document: Map<String, Value>,
    versions: Vec<Map<String, Value>>,
}

impl Appcast {
    /// Create an empty appcast with the given identifier.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        let mut document = Map::new();
        document.insert(IDENTIFIER_KEY.to_owned(), Value::String(identifier.into()));
        document.insert(VERSIONS_KEY.to_owned(), Value::Null);
        Self {
            document,
            versions: Vec::new(),
        }
    }

    /// Return the plugin identifier, if the document names one.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.document.get(IDENTIFIER_KEY).and_then(Value::as_str)
    }

    /// Return the version entries, most recent first.
    #[must_use]
    pub fn versions(&self) -> &[Map<String, Value>] {
        &self.versions
    }

    /// Return the entry for `version`, if listed.
    #[must_use]
    pub fn find(&self, version: &ReleaseVersion) -> Option<&Map<String, Value>> {
        self.versions.iter().find(|entry| is_version(entry, version))
    }

    /// Insert `record` at the front, dropping any entry with the same
    /// version.
    ///
    /// Returns the replaced entry when one existed. Entries for other
    /// versions are left exactly as they were.
    pub fn upsert(&mut self, record: &VersionRecord) -> Option<Map<String, Value>> {
        let replaced = self
            .versions
            .iter()
            .position(|entry| is_version(entry, &record.version))
            .map(|index| self.versions.remove(index));
        self.versions.retain(|entry| !is_version(entry, &record.version));
        self.versions.insert(0, record.to_entry());
        replaced
    }
}

fn is_version(entry: &Map<String, Value>, version: &ReleaseVersion) -> bool {
    entry.get(VERSION_KEY).and_then(Value::as_str) == Some(version.as_str())
}

impl TryFrom<Map<String, Value>> for Appcast {
    type Error = ArtefactError;

    fn try_from(mut document: Map<String, Value>) -> Result<Self> {
        let versions = match document.get_mut(VERSIONS_KEY).map(Value::take) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .into_iter()
                .map(|entry| match entry {
                    Value::Object(entry) => Ok(entry),
                    other => Err(ArtefactError::InvalidAppcast {
                        reason: format!(
                            "version entries must be objects, found {}",
                            json_kind(&other)
                        ),
                    }),
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(ArtefactError::InvalidAppcast {
                    reason: format!(
                        "`versions` must be an array, found {}",
                        json_kind(&other)
                    ),
                });
            }
        };
        Ok(Self { document, versions })
    }
}

impl From<Appcast> for Map<String, Value> {
    fn from(appcast: Appcast) -> Self {
        let mut document = appcast.document;
        let versions = appcast.versions.into_iter().map(Value::Object).collect();
        // Replacing an existing key keeps its position.
        document.insert(VERSIONS_KEY.to_owned(), Value::Array(versions));
        document
    }
}

#[cfg(test)]
#[path = "appcast_tests.rs"]
mod tests;

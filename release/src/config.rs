//! Release configuration and filesystem layout.
//!
//! Every setting has a default matching the LLM OCR plugin repository, so a
//! configuration file is optional. When present, `release.toml` in the
//! release root (or the file passed with `--config`) overrides individual
//! keys:
//!
//! ```toml
//! product = "llm-ocr"
//! archive_extension = "bobplugin"
//! identifier = "henry.llm.ocr"
//! repository_url = "https://github.com/zqigolden/bob-plugin-llm-ocrflux"
//! min_bob_version = "1.8.0"
//! source_dir = "src"
//! metadata_file = "src/info.json"
//! release_dir = "release"
//! appcast_file = "appcast.json"
//! ```

use crate::artefact::appcast::{DEFAULT_IDENTIFIER, DEFAULT_MIN_BOB_VERSION};
use crate::artefact::error::ArtefactError;
use crate::artefact::naming::{ArtefactName, DEFAULT_EXTENSION, DEFAULT_PRODUCT};
use crate::artefact::version::ReleaseVersion;
use crate::error::{ReleaseError, Result};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

/// File name of the optional configuration file in the release root.
pub const CONFIG_FILE_NAME: &str = "release.toml";

/// The default repository the release download URLs point at.
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/zqigolden/bob-plugin-llm-ocrflux";

/// Release settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// Archive filename prefix.
    pub product: String,
    /// Archive file extension, without the leading dot.
    pub archive_extension: String,
    /// Appcast identifier used when creating a new appcast.
    pub identifier: String,
    /// Repository URL download links are built from.
    pub repository_url: String,
    /// Minimum Bob version recorded for each release.
    pub min_bob_version: String,
    /// Directory whose immediate files are archived.
    pub source_dir: Utf8PathBuf,
    /// Plugin metadata document.
    pub metadata_file: Utf8PathBuf,
    /// Directory the archive is written to.
    pub release_dir: Utf8PathBuf,
    /// Appcast document.
    pub appcast_file: Utf8PathBuf,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            product: DEFAULT_PRODUCT.to_owned(),
            archive_extension: DEFAULT_EXTENSION.to_owned(),
            identifier: DEFAULT_IDENTIFIER.to_owned(),
            repository_url: DEFAULT_REPOSITORY_URL.to_owned(),
            min_bob_version: DEFAULT_MIN_BOB_VERSION.to_owned(),
            source_dir: Utf8PathBuf::from("src"),
            metadata_file: Utf8PathBuf::from("src/info.json"),
            release_dir: Utf8PathBuf::from("release"),
            appcast_file: Utf8PathBuf::from("appcast.json"),
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults; no file was read.
    Defaults,
    /// The configuration file at the given path.
    File(Utf8PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => f.write_str("built-in defaults"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

/// Absolute-or-root-relative paths for one release run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLayout {
    /// Directory all other paths are resolved against.
    pub root: Utf8PathBuf,
    /// Directory whose immediate files are archived.
    pub source_dir: Utf8PathBuf,
    /// Plugin metadata document.
    pub metadata_file: Utf8PathBuf,
    /// Directory the archive is written to.
    pub release_dir: Utf8PathBuf,
    /// Appcast document.
    pub appcast_file: Utf8PathBuf,
}

impl ReleaseConfig {
    /// Parse a TOML configuration document.
    ///
    /// `origin` is only used in diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::Config`] if the text is not valid TOML or
    /// contains unknown keys.
    pub fn parse(text: &str, origin: &Utf8Path) -> Result<Self> {
        toml::from_str(text).map_err(|err| ReleaseError::Config {
            path: origin.to_owned(),
            reason: err.to_string(),
        })
    }

    /// Load the configuration for a release rooted at `root`.
    ///
    /// An `explicit` path must exist. Otherwise `release.toml` in `root` is
    /// used when present, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::ConfigNotFound`] if `explicit` does not
    /// exist, [`ReleaseError::ReadFailed`] if the file cannot be read, or
    /// [`ReleaseError::Config`] if it cannot be parsed.
    pub fn load(root: &Utf8Path, explicit: Option<&Utf8Path>) -> Result<(Self, ConfigSource)> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(ReleaseError::ConfigNotFound {
                    path: path.to_owned(),
                });
            }
            Some(path) => path.to_owned(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    debug!("no {CONFIG_FILE_NAME} under {root}; using defaults");
                    return Ok((Self::default(), ConfigSource::Defaults));
                }
                candidate
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| ReleaseError::ReadFailed {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&text, &path)?;
        debug!("loaded release configuration from {path}");
        Ok((config, ConfigSource::File(path)))
    }

    /// Resolve the configured paths against `root`.
    #[must_use]
    pub fn layout(&self, root: &Utf8Path) -> ReleaseLayout {
        ReleaseLayout {
            root: root.to_owned(),
            source_dir: root.join(&self.source_dir),
            metadata_file: root.join(&self.metadata_file),
            release_dir: root.join(&self.release_dir),
            appcast_file: root.join(&self.appcast_file),
        }
    }

    /// Build the archive name for `version`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtefactError::InvalidNameComponent`] if the configured
    /// product or extension cannot form a flat filename.
    pub fn artefact_name(
        &self,
        version: ReleaseVersion,
    ) -> std::result::Result<ArtefactName, ArtefactError> {
        ArtefactName::new(&*self.product, &*self.archive_extension, version)
    }
}

//! Artefact naming policy for release archives.
//!
//! Constructs deterministic archive names in the form
//! `<product>-<version>.<extension>`, e.g. `llm-ocr-1.2.0.bobplugin`, and the
//! GitHub release download URL that serves them.

use super::error::{ArtefactError, Result};
use super::version::ReleaseVersion;
use std::fmt;
use std::path::Path;

/// The default product prefix for archive names.
pub const DEFAULT_PRODUCT: &str = "llm-ocr";

/// The default archive file extension, without the leading dot.
pub const DEFAULT_EXTENSION: &str = "bobplugin";

/// A fully-qualified release archive name.
///
/// # Examples
///
/// ```
/// use llm_ocr_release::artefact::naming::ArtefactName;
/// use llm_ocr_release::artefact::version::ReleaseVersion;
///
/// let name = ArtefactName::new("llm-ocr", "bobplugin", ReleaseVersion::new("1.2.0"))
///     .expect("valid components");
/// assert_eq!(name.to_string(), "llm-ocr-1.2.0.bobplugin");
/// assert_eq!(
///     name.download_url("https://github.com/acme/plugin"),
///     "https://github.com/acme/plugin/releases/download/v1.2.0/llm-ocr-1.2.0.bobplugin"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtefactName {
    product: String,
    extension: String,
    version: ReleaseVersion,
}

impl ArtefactName {
    /// Create an artefact name from its components.
    ///
    /// A leading dot on `extension` is tolerated and stripped.
    ///
    /// # Errors
    ///
    /// Returns [`ArtefactError::InvalidNameComponent`] when `product` or
    /// `extension` is empty or contains a path separator.
    pub fn new(
        product: impl Into<String>,
        extension: impl Into<String>,
        version: ReleaseVersion,
    ) -> Result<Self> {
        let product = product.into();
        let extension = extension.into();
        let extension = extension
            .strip_prefix('.')
            .map_or_else(|| extension.clone(), ToOwned::to_owned);
        validate_component(&product)?;
        validate_component(&extension)?;
        Ok(Self {
            product,
            extension,
            version,
        })
    }

    /// Return the product prefix.
    #[must_use]
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Return the archive extension without the leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Return the release version.
    #[must_use]
    pub fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    /// Return the filename as a string without consuming the value.
    #[must_use]
    pub fn filename(&self) -> String {
        self.to_string()
    }

    /// Build the GitHub release download URL for this archive.
    ///
    /// Trailing slashes on `repository_url` are ignored.
    #[must_use]
    pub fn download_url(&self, repository_url: &str) -> String {
        format!(
            "{}/releases/download/{}/{}",
            repository_url.trim_end_matches('/'),
            self.version.tag(),
            self.filename()
        )
    }

    /// Return true when `path` carries this artefact's extension.
    ///
    /// Used to find stale archives from earlier releases regardless of
    /// their version.
    #[must_use]
    pub fn has_archive_extension(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy() == self.extension)
    }
}

impl fmt::Display for ArtefactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}.{}", self.product, self.version, self.extension)
    }
}

fn validate_component(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ArtefactError::InvalidNameComponent {
            value: value.to_owned(),
            reason: "must not be empty".to_owned(),
        });
    }
    if value.contains(['/', '\\']) {
        return Err(ArtefactError::InvalidNameComponent {
            value: value.to_owned(),
            reason: "must not contain a path separator".to_owned(),
        });
    }
    Ok(())
}

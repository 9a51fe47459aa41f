//! Release version newtype.
//!
//! The version string is stored as an opaque value. It is written into the
//! metadata document, the archive filename, the download URL, and the
//! appcast record exactly as supplied.

use std::fmt;

/// The version string a release is published under.
///
/// # Examples
///
/// ```
/// use llm_ocr_release::artefact::version::ReleaseVersion;
///
/// let version = ReleaseVersion::new("1.2.0");
/// assert_eq!(version.as_str(), "1.2.0");
/// assert_eq!(version.tag(), "v1.2.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    /// Create a new version wrapper.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the git tag the release is published under (`v<version>`).
    #[must_use]
    pub fn tag(&self) -> String {
        format!("v{}", self.0)
    }
}

impl From<&str> for ReleaseVersion {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ReleaseVersion {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ReleaseVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

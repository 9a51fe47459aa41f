//! Error types for the release helper.
//!
//! Every variant that concerns a file carries its path so the single-line
//! diagnostic printed by the CLI says which file needs attention.

use crate::artefact::error::ArtefactError;
use crate::artefact::packaging_error::PackagingError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during a release run.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// The metadata document does not exist.
    #[error("metadata file not found: {path}")]
    MetadataNotFound {
        /// Path where the metadata document was expected.
        path: Utf8PathBuf,
    },

    /// The archive for the requested version has not been built.
    #[error("release file does not exist: {path}; build the archive first")]
    ArchiveNotFound {
        /// Path where the archive was expected.
        path: Utf8PathBuf,
    },

    /// A JSON document could not be parsed.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// Path of the document.
        path: Utf8PathBuf,
        /// The parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A JSON document parsed but does not have the expected shape.
    #[error("unexpected document structure in {path}: {reason}")]
    InvalidDocument {
        /// Path of the document.
        path: Utf8PathBuf,
        /// Description of the structural problem.
        reason: String,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// The requested path.
        path: Utf8PathBuf,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration in {path}: {reason}")]
    Config {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Description of the parse error.
        reason: String,
    },

    /// Reading a file failed.
    #[error("failed to read {path}")]
    ReadFailed {
        /// The file being read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a file failed.
    #[error("failed to write {path}")]
    WriteFailed {
        /// The file being written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An archive name component or digest was invalid.
    #[error(transparent)]
    Artefact(#[from] ArtefactError),

    /// Building or hashing the archive failed.
    #[error(transparent)]
    Packaging(#[from] PackagingError),
}

/// Result type alias using [`ReleaseError`].
pub type Result<T> = std::result::Result<T, ReleaseError>;

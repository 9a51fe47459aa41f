//! Error types for artefact naming, digest, and appcast validation.
//!
//! Each variant provides a descriptive message identifying the invalid input
//! and the constraint that was violated.

use thiserror::Error;

/// Errors arising from invalid artefact-related values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtefactError {
    /// A SHA-256 digest is not a valid 64-character hex string.
    #[error("invalid SHA-256 digest: {reason}")]
    InvalidSha256Digest {
        /// Description of the validation failure.
        reason: String,
    },

    /// A product name or archive extension is empty or contains a path
    /// separator, so it cannot form a flat archive filename.
    #[error("invalid archive name component \"{value}\": {reason}")]
    InvalidNameComponent {
        /// The rejected component.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// An appcast document does not have the shape Bob expects.
    #[error("invalid appcast: {reason}")]
    InvalidAppcast {
        /// Description of the structural problem.
        reason: String,
    },
}

/// Result type alias using [`ArtefactError`].
pub type Result<T> = std::result::Result<T, ArtefactError>;

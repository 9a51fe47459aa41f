//! Error types for archive packaging operations.
//!
//! Covers I/O failures, zip writer problems, and validation errors that can
//! occur when building a `.bobplugin` archive and hashing it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors arising from archive packaging operations.
#[derive(Debug, Error)]
pub enum PackagingError {
    /// An I/O operation failed (reading source files, writing the archive).
    #[error("I/O error during packaging: {0}")]
    Io(#[from] std::io::Error),

    /// The zip writer rejected an entry or failed to finalise the archive.
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The source directory is missing or cannot be listed.
    #[error("cannot read source directory {path}: {source}")]
    SourceDirUnreadable {
        /// The directory that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A source file name is not valid UTF-8 and cannot be stored as a zip
    /// entry name.
    #[error("source file name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),

    /// An internal digest conversion failed unexpectedly.
    #[error("invalid digest: {0}")]
    InvalidDigest(#[from] super::error::ArtefactError),
}

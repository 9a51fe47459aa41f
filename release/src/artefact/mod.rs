//! Release artefact naming, packaging, and appcast schema.
//!
//! # Sub-modules
//!
//! - [`appcast`] - Appcast schema types (`Appcast`, `VersionRecord`).
//! - [`error`] - Semantic error types for validation failures.
//! - [`naming`] - Archive naming policy (`ArtefactName`).
//! - [`packaging`] - Archive creation and checksum computation.
//! - [`packaging_error`] - Error types for packaging operations.
//! - [`sha256_digest`] - SHA-256 digest newtype (`Sha256Digest`).
//! - [`version`] - Release version newtype (`ReleaseVersion`).

pub mod appcast;
pub mod error;
pub mod naming;
pub mod packaging;
pub mod packaging_error;
pub mod sha256_digest;
pub mod version;

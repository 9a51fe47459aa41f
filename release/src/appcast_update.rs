//! Appcast updates for a freshly built release archive.
//!
//! Hashes the archive, builds its [`VersionRecord`], and writes it to the
//! front of the appcast, replacing any earlier record for the same version.
//! The archive must already exist; this stage never builds it.

use crate::artefact::appcast::{Appcast, VersionRecord};
use crate::artefact::naming::ArtefactName;
use crate::artefact::packaging::compute_sha256;
use crate::document::{read_json, write_json};
use crate::error::{ReleaseError, Result};
use camino::Utf8Path;
use log::debug;
use serde_json::Value;

/// Inputs for [`update_appcast`].
#[derive(Debug, Clone, Copy)]
pub struct AppcastUpdate<'a> {
    /// Name of the archive being published.
    pub name: &'a ArtefactName,
    /// Release notes for the record.
    pub description: &'a str,
    /// Directory holding the built archive.
    pub release_dir: &'a Utf8Path,
    /// The appcast document to update.
    pub appcast_file: &'a Utf8Path,
    /// Identifier used when the appcast does not exist yet.
    pub identifier: &'a str,
    /// Repository URL the download link is built from.
    pub repository_url: &'a str,
    /// Minimum Bob version recorded for the release.
    pub min_bob_version: &'a str,
}

/// Load the appcast at `path`, or start an empty one with `identifier`.
///
/// # Errors
///
/// Returns [`ReleaseError::ReadFailed`] or [`ReleaseError::Json`] when an
/// existing appcast cannot be read or parsed.
pub fn load_appcast(path: &Utf8Path, identifier: &str) -> Result<Appcast> {
    if path.is_file() {
        read_json(path)
    } else {
        debug!("no appcast at {path}; starting a new one for {identifier}");
        Ok(Appcast::new(identifier))
    }
}

/// Record the archive named by `update.name` in the appcast.
///
/// Returns the record that was written.
///
/// # Errors
///
/// Returns [`ReleaseError::ArchiveNotFound`] if the archive has not been
/// built, [`ReleaseError::Packaging`] if it cannot be hashed, or any error
/// from [`load_appcast`] and writing the document.
pub fn update_appcast(update: &AppcastUpdate<'_>) -> Result<VersionRecord> {
    let archive_path = update.release_dir.join(update.name.filename());
    if !archive_path.is_file() {
        return Err(ReleaseError::ArchiveNotFound { path: archive_path });
    }

    let sha256 = compute_sha256(archive_path.as_std_path())?;
    let record = VersionRecord {
        version: update.name.version().clone(),
        description: update.description.to_owned(),
        sha256,
        url: update.name.download_url(update.repository_url),
        min_bob_version: update.min_bob_version.to_owned(),
    };

    let mut appcast = load_appcast(update.appcast_file, update.identifier)?;
    if let Some(previous) = appcast.upsert(&record) {
        debug!(
            "replaced appcast record for {}: {}",
            record.version,
            Value::Object(previous)
        );
    }
    write_json(update.appcast_file, &appcast)?;

    Ok(record)
}

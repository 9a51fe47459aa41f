//! Archive packaging for plugin releases.
//!
//! Zips the files found directly inside the plugin source directory into a
//! single deflate-compressed `.bobplugin` archive, following the naming
//! convention in [`super::naming`]. Archives from earlier releases are removed
//! first so the output directory only ever holds the current artefact.

use super::naming::ArtefactName;
use super::packaging_error::PackagingError;
use super::sha256_digest::Sha256Digest;
use crate::output::{removal_notice, write_progress_line};
use log::debug;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Input parameters for the [`package_archive`] function.
#[derive(Debug, Clone)]
pub struct PackageParams {
    /// Name of the archive to produce.
    pub name: ArtefactName,
    /// Directory whose immediate files are archived.
    pub source_dir: PathBuf,
    /// Directory where the output archive will be written.
    pub output_dir: PathBuf,
}

/// Output produced by [`package_archive`].
#[derive(Debug)]
pub struct PackageOutput {
    /// Path to the created archive.
    pub archive_path: PathBuf,
    /// Entry names written into the archive, in archive order.
    pub entries: Vec<String>,
    /// Stale archives removed before the new one was written.
    pub removed: Vec<PathBuf>,
}

/// Compute the SHA-256 digest of a file.
///
/// Reads the file at `path` in chunks and returns the lowercase hex
/// digest as a validated [`Sha256Digest`].
///
/// # Errors
///
/// Returns [`PackagingError::Io`] if the file cannot be read.
pub fn compute_sha256(path: &Path) -> Result<Sha256Digest, PackagingError> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    let digest = Sha256Digest::try_from(format!("{:x}", hasher.finalize()))?;
    debug!("sha256 of {} is {digest}", path.display());
    Ok(digest)
}

/// Create the output directory if needed, then delete every file in it that
/// carries the archive extension of `name`.
///
/// A notice line is written to `progress` before each deletion.
///
/// # Errors
///
/// Returns [`PackagingError::Io`] if the directory cannot be created or
/// listed, or a stale archive cannot be removed.
pub fn prepare_output_dir(
    output_dir: &Path,
    name: &ArtefactName,
    progress: &mut dyn Write,
) -> Result<Vec<PathBuf>, PackagingError> {
    if !output_dir.is_dir() {
        debug!("creating output directory {}", output_dir.display());
        fs::create_dir_all(output_dir)?;
        return Ok(Vec::new());
    }

    let mut stale = Vec::new();
    for entry in fs::read_dir(output_dir)? {
        let path = entry?.path();
        if path.is_file() && name.has_archive_extension(&path) {
            stale.push(path);
        }
    }
    stale.sort();

    for path in &stale {
        write_progress_line(progress, removal_notice(path));
        fs::remove_file(path)?;
        debug!("removed stale archive {}", path.display());
    }
    Ok(stale)
}

/// List the regular files directly inside `source_dir`.
///
/// Subdirectories are skipped. The result is sorted by filename so archive
/// entry order does not depend on directory iteration order.
///
/// # Errors
///
/// Returns [`PackagingError::SourceDirUnreadable`] if the directory is
/// missing or cannot be listed.
pub fn collect_source_files(source_dir: &Path) -> Result<Vec<PathBuf>, PackagingError> {
    let unreadable = |source: io::Error| PackagingError::SourceDirUnreadable {
        path: source_dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Create a deflate-compressed zip archive at `output_path`.
///
/// Each file is stored under its bare filename with no directory prefix.
/// Returns the entry names in the order they were written.
///
/// # Errors
///
/// Returns [`PackagingError::InvalidFileName`] for a path without a UTF-8
/// filename, [`PackagingError::Io`] if a source file cannot be read or the
/// output cannot be written, or [`PackagingError::Zip`] if the zip writer
/// fails.
pub fn create_archive(
    output_path: &Path,
    files: &[PathBuf],
) -> Result<Vec<String>, PackagingError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut writer = zip::ZipWriter::new(fs::File::create(output_path)?);
    let mut entries = Vec::with_capacity(files.len());

    for path in files {
        let entry_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PackagingError::InvalidFileName(path.clone()))?
            .to_owned();
        writer.start_file(entry_name.as_str(), options)?;
        let mut source = fs::File::open(path)?;
        io::copy(&mut source, &mut writer)?;
        debug!("added {entry_name} to {}", output_path.display());
        entries.push(entry_name);
    }

    writer.finish()?;
    Ok(entries)
}

/// Build the release archive for `params.name`.
///
/// Orchestrates: prepare the output directory (removing stale archives),
/// collect the source files, then write the archive.
///
/// # Errors
///
/// Returns [`PackagingError::SourceDirUnreadable`] if the source directory
/// is missing, or any error from [`prepare_output_dir`] or
/// [`create_archive`].
pub fn package_archive(
    params: &PackageParams,
    progress: &mut dyn Write,
) -> Result<PackageOutput, PackagingError> {
    let removed = prepare_output_dir(&params.output_dir, &params.name, progress)?;
    let files = collect_source_files(&params.source_dir)?;
    let archive_path = params.output_dir.join(params.name.filename());
    let entries = create_archive(&archive_path, &files)?;

    Ok(PackageOutput {
        archive_path,
        entries,
        removed,
    })
}

#[cfg(test)]
#[path = "packaging_tests.rs"]
mod tests;

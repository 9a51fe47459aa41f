//! Release pipeline orchestration.
//!
//! Runs the three release stages strictly in order: update the metadata
//! version, build the archive, then record the archive in the appcast. A
//! failing stage stops the run; earlier stages are not rolled back, and
//! re-running the whole pipeline is the recovery path.

use crate::appcast_update::{AppcastUpdate, update_appcast};
use crate::artefact::appcast::VersionRecord;
use crate::artefact::naming::ArtefactName;
use crate::artefact::packaging::{PackageOutput, PackageParams, package_archive};
use crate::artefact::version::ReleaseVersion;
use crate::config::{ReleaseConfig, ReleaseLayout};
use crate::error::Result;
use crate::metadata::{MetadataUpdate, update_metadata};
use crate::output::{
    COMPLETION_MESSAGE, appcast_message, archive_message, metadata_message, start_message,
    write_progress_line,
};
use std::io::Write;

/// What to release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// The version being released.
    pub version: ReleaseVersion,
    /// Release notes recorded in the appcast.
    pub description: String,
}

/// Context for a pipeline run.
pub struct PipelineContext<'a> {
    /// Loaded configuration.
    pub config: &'a ReleaseConfig,
    /// Paths resolved against the release root.
    pub layout: &'a ReleaseLayout,
    /// Suppress progress output.
    pub quiet: bool,
}

/// Results of a completed run.
#[derive(Debug)]
pub struct ReleaseSummary {
    /// The metadata update.
    pub metadata: MetadataUpdate,
    /// The built archive.
    pub package: PackageOutput,
    /// The record written to the appcast.
    pub record: VersionRecord,
}

/// Run all three release stages for `request`.
///
/// Progress lines go to `progress` unless `context.quiet` is set.
///
/// # Errors
///
/// Returns the first stage failure; see [`update_metadata`],
/// [`package_archive`], and [`update_appcast`].
pub fn run_release(
    context: &PipelineContext<'_>,
    request: &ReleaseRequest,
    progress: &mut dyn Write,
) -> Result<ReleaseSummary> {
    let mut sink = std::io::sink();
    let out: &mut dyn Write = if context.quiet { &mut sink } else { progress };
    let name = context.config.artefact_name(request.version.clone())?;

    write_progress_line(out, start_message(&request.version));

    let metadata = update_metadata(&context.layout.metadata_file, &request.version)?;
    write_progress_line(
        out,
        metadata_message(&context.config.metadata_file, &request.version),
    );

    let package = build_archive(context, &name, out)?;

    let record = update_appcast(&AppcastUpdate {
        name: &name,
        description: &request.description,
        release_dir: &context.layout.release_dir,
        appcast_file: &context.layout.appcast_file,
        identifier: &context.config.identifier,
        repository_url: &context.config.repository_url,
        min_bob_version: &context.config.min_bob_version,
    })?;
    write_progress_line(
        out,
        appcast_message(&context.config.appcast_file, &request.version),
    );

    write_progress_line(out, COMPLETION_MESSAGE);

    Ok(ReleaseSummary {
        metadata,
        package,
        record,
    })
}

/// Build the archive for `name` and report it.
fn build_archive(
    context: &PipelineContext<'_>,
    name: &ArtefactName,
    out: &mut dyn Write,
) -> Result<PackageOutput> {
    let params = PackageParams {
        name: name.clone(),
        source_dir: context.layout.source_dir.clone().into_std_path_buf(),
        output_dir: context.layout.release_dir.clone().into_std_path_buf(),
    };
    let package = package_archive(&params, out)?;
    write_progress_line(
        out,
        archive_message(
            context.config.release_dir.join(name.filename()),
            package.entries.len(),
        ),
    );
    Ok(package)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

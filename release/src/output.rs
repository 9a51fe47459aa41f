//! Progress and summary messages for the release CLI.
//!
//! Message text lives here so the pipeline and the tests agree on wording.

use crate::artefact::naming::ArtefactName;
use crate::config::{ConfigSource, ReleaseConfig, ReleaseLayout};
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

/// Write `message` followed by a newline, ignoring write failures.
pub fn write_progress_line(out: &mut dyn Write, message: impl Display) {
    writeln!(out, "{message}").ok();
}

/// Announce the start of a release.
#[must_use]
pub fn start_message(version: impl Display) -> String {
    format!("Starting release process for version {version}...")
}

/// Report removal of a stale archive.
///
/// # Example
///
/// ```
/// use llm_ocr_release::output::removal_notice;
/// use std::path::Path;
///
/// let notice = removal_notice(Path::new("release/llm-ocr-1.0.0.bobplugin"));
/// assert_eq!(notice, "Removing old plugin file: llm-ocr-1.0.0.bobplugin");
/// ```
#[must_use]
pub fn removal_notice(path: &Path) -> String {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    format!("Removing old plugin file: {name}")
}

/// Report the metadata version update.
#[must_use]
pub fn metadata_message(path: impl Display, version: impl Display) -> String {
    format!("Successfully updated {path} to version {version}")
}

/// Report the built archive.
#[must_use]
pub fn archive_message(path: impl Display, entries: usize) -> String {
    let plural = if entries == 1 { "file" } else { "files" };
    format!("Successfully built {path} ({entries} {plural})")
}

/// Report the appcast update.
#[must_use]
pub fn appcast_message(path: impl Display, version: impl Display) -> String {
    format!("Successfully updated {path} for version {version}")
}

/// Final line of a successful run.
pub const COMPLETION_MESSAGE: &str = "Release process completed successfully.";

/// Configuration information for dry-run output.
#[derive(Debug, Clone)]
pub struct DryRunInfo<'a> {
    /// The loaded configuration.
    pub config: &'a ReleaseConfig,
    /// Where the configuration came from.
    pub source: &'a ConfigSource,
    /// Resolved paths.
    pub layout: &'a ReleaseLayout,
    /// The archive that would be built.
    pub name: &'a ArtefactName,
}

impl DryRunInfo<'_> {
    /// Render the dry-run report, one line per entry.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            "Dry run - no files will be modified".to_owned(),
            String::new(),
            format!("Configuration: {}", self.source),
            format!("Root: {}", self.layout.root),
            format!("Source directory: {}", self.layout.source_dir),
            format!("Metadata file: {}", self.layout.metadata_file),
            format!("Release directory: {}", self.layout.release_dir),
            format!("Appcast file: {}", self.layout.appcast_file),
            format!("Archive: {}", self.name),
            format!(
                "Download URL: {}",
                self.name.download_url(&self.config.repository_url)
            ),
            format!("Minimum Bob version: {}", self.config.min_bob_version),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artefact::version::ReleaseVersion;
    use camino::Utf8Path;
    use rstest::rstest;

    #[rstest]
    #[case::one(1, "Successfully built release/a.bobplugin (1 file)")]
    #[case::many(3, "Successfully built release/a.bobplugin (3 files)")]
    fn archive_message_pluralises(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(archive_message("release/a.bobplugin", count), expected);
    }

    #[test]
    fn write_progress_line_appends_newline() {
        let mut out = Vec::new();
        write_progress_line(&mut out, start_message("1.2.0"));
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Starting release process for version 1.2.0...\n"
        );
    }

    #[test]
    fn dry_run_lines_include_archive_and_url() {
        let config = ReleaseConfig::default();
        let layout = config.layout(Utf8Path::new("/work"));
        let name = config
            .artefact_name(ReleaseVersion::new("1.2.0"))
            .expect("valid");
        let info = DryRunInfo {
            config: &config,
            source: &ConfigSource::Defaults,
            layout: &layout,
            name: &name,
        };

        let lines = info.lines();
        assert!(lines.contains(&"Archive: llm-ocr-1.2.0.bobplugin".to_owned()));
        assert!(lines.iter().any(|l| l.starts_with("Download URL: https://github.com/")
            && l.ends_with("/v1.2.0/llm-ocr-1.2.0.bobplugin")));
        assert!(lines.contains(&"Configuration: built-in defaults".to_owned()));
    }
}

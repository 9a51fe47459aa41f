//! CLI argument definitions for the release helper.
//!
//! Kept separate from the binary entrypoint so argument parsing can be unit
//! tested.

use camino::Utf8PathBuf;
use clap::Parser;

/// Package the LLM OCR Bob plugin and update its appcast.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "llm-ocr-release")]
#[command(version, about)]
#[command(long_about = concat!(
    "Package the LLM OCR Bob plugin for release.\n\n",
    "Sets the version in src/info.json, zips the files in src/ into ",
    "release/llm-ocr-<version>.bobplugin, and records the archive's SHA-256 ",
    "and download URL at the top of appcast.json.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Publish a release:\n",
    "    $ llm-ocr-release 1.2.0 \"fix bug\"\n\n",
    "  Preview the archive name and URL:\n",
    "    $ llm-ocr-release --dry-run 1.2.0 \"fix bug\"",
))]
pub struct Cli {
    /// Version to release (written verbatim).
    #[arg(id = "release_version", value_name = "VERSION")]
    pub version: String,

    /// Release notes recorded in the appcast.
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    /// Directory the release layout is resolved against [default: current directory].
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub root: Utf8PathBuf,

    /// Configuration file [default: <ROOT>/release.toml when present].
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Show the resolved layout and archive name without modifying files.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output (errors still shown).
    #[arg(short, long)]
    pub quiet: bool,
}

//! Release packaging for the LLM OCR Bob plugin.
//!
//! A release runs three stages in order: set the version in the plugin's
//! `info.json`, zip the plugin sources into a `.bobplugin` archive, then
//! record the archive's checksum and download URL in `appcast.json`. The
//! `llm-ocr-release` binary drives the stages through [`pipeline`].
//!
//! # Modules
//!
//! - [`appcast_update`] - Appcast stage: hash the archive and upsert its record
//! - [`artefact`] - Archive naming, packaging, and appcast schema
//! - [`cli`] - Command-line argument definitions
//! - [`config`] - Release settings and filesystem layout
//! - [`document`] - JSON document reading and writing
//! - [`error`] - Semantic error types
//! - [`metadata`] - Metadata stage: set the version in `info.json`
//! - [`output`] - Progress and dry-run messages
//! - [`pipeline`] - Stage orchestration

pub mod appcast_update;
pub mod artefact;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod metadata;
pub mod output;
pub mod pipeline;

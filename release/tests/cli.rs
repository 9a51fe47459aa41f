//! End-to-end tests for the `llm-ocr-release` binary.
//!
//! Each test runs the compiled binary inside a temporary plugin tree and
//! checks exit codes, output streams, and the files left behind.

use rstest::{fixture, rstest};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

#[fixture]
fn plugin_root() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let src = dir.path().join("src");
    fs::create_dir_all(&src).expect("mkdir src");
    fs::write(
        src.join("info.json"),
        "{\n  \"identifier\": \"henry.llm.ocr\",\n  \"version\": \"1.0.0\"\n}",
    )
    .expect("write info.json");
    fs::write(src.join("main.js"), "function ocr() {}").expect("write main.js");
    dir
}

fn run_in(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_llm-ocr-release"))
        .current_dir(root)
        .args(args)
        .output()
        .expect("run llm-ocr-release")
}

#[rstest]
fn release_succeeds_and_reports_progress(plugin_root: TempDir) {
    let output = run_in(plugin_root.path(), &["1.2.0", "fix bug"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Starting release process for version 1.2.0..."));
    assert!(stdout.contains("Release process completed successfully."));
    assert!(
        plugin_root
            .path()
            .join("release/llm-ocr-1.2.0.bobplugin")
            .is_file()
    );
    assert!(plugin_root.path().join("appcast.json").is_file());
}

#[rstest]
#[case::no_arguments(&[])]
#[case::missing_description(&["1.2.0"])]
fn missing_arguments_exit_with_usage(plugin_root: TempDir, #[case] args: &[&str]) {
    let output = run_in(plugin_root.path(), args);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
    assert!(!plugin_root.path().join("release").exists());
}

#[rstest]
fn missing_metadata_reports_error(plugin_root: TempDir) {
    fs::remove_file(plugin_root.path().join("src/info.json")).expect("remove info.json");

    let output = run_in(plugin_root.path(), &["1.2.0", "fix bug"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: "), "stderr: {stderr}");
    assert!(!plugin_root.path().join("appcast.json").exists());
}

#[rstest]
fn help_exits_zero(plugin_root: TempDir) {
    let output = run_in(plugin_root.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("DESCRIPTION"));
}

#[rstest]
fn root_option_resolves_layout_elsewhere(plugin_root: TempDir) {
    let elsewhere = TempDir::new().expect("temp dir");
    let root = plugin_root.path().to_str().expect("utf8 temp path");

    let output = run_in(elsewhere.path(), &["-C", root, "-q", "2.0.0", "rewrite"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
    assert!(
        plugin_root
            .path()
            .join("release/llm-ocr-2.0.0.bobplugin")
            .is_file()
    );
}

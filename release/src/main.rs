//! `llm-ocr-release` CLI entrypoint.
//!
//! Parses the version and description, loads the release configuration, and
//! runs the release pipeline. Progress goes to stdout; errors go to stderr
//! and exit with status 1.

use clap::Parser;
use clap::error::ErrorKind;
use llm_ocr_release::artefact::version::ReleaseVersion;
use llm_ocr_release::cli::Cli;
use llm_ocr_release::config::ReleaseConfig;
use llm_ocr_release::error::Result;
use llm_ocr_release::output::{DryRunInfo, write_progress_line};
use llm_ocr_release::pipeline::{PipelineContext, ReleaseRequest, run_release};
use std::error::Error;
use std::io::Write;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_for_parse_error(&err),
    };

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let exit_code = exit_code_for_run_result(run(&cli, &mut stdout), &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Print a parse error and exit.
///
/// `--help` and `--version` exit 0; every usage error exits 1.
fn exit_for_parse_error(err: &clap::Error) -> ! {
    err.print().ok();
    let code = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    };
    std::process::exit(code);
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let (config, source) = ReleaseConfig::load(&cli.root, cli.config.as_deref())?;
    let layout = config.layout(&cli.root);
    let version = ReleaseVersion::new(cli.version.as_str());

    if cli.dry_run {
        let name = config.artefact_name(version)?;
        let info = DryRunInfo {
            config: &config,
            source: &source,
            layout: &layout,
            name: &name,
        };
        for line in info.lines() {
            write_progress_line(stdout, line);
        }
        return Ok(());
    }

    let context = PipelineContext {
        config: &config,
        layout: &layout,
        quiet: cli.quiet,
    };
    let request = ReleaseRequest {
        version,
        description: cli.description.clone(),
    };
    run_release(&context, &request, stdout)?;
    Ok(())
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_progress_line(stderr, format!("error: {err}"));
            let mut source = err.source();
            while let Some(cause) = source {
                write_progress_line(stderr, format!("  caused by: {cause}"));
                source = cause.source();
            }
            1
        }
    }
}

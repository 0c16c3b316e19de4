//! # Structure Subcommand
//!
//! Runs only the structure checks against one submission directory, so a
//! submitter can verify their folder locally before opening a pull request.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use studygate_core::SubmissionDirectory;

use crate::report::{write_structure_report, OutputFormat};

/// Arguments for the `studygate structure` subcommand.
#[derive(Args, Debug)]
pub struct StructureArgs {
    /// Submission directory, e.g. weekly/2026-W01/<github-id>.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the structure subcommand, writing to stdout.
pub fn run_structure(args: &StructureArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_structure_with(&args.dir, args.format, &mut out)
}

/// Inspect `dir` and write the report to `out`.
///
/// Returns exit code: 0 when every requirement is present, 1 otherwise.
pub fn run_structure_with(dir: &Path, format: OutputFormat, out: &mut impl Write) -> Result<u8> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "submission directory does not exist");
    }
    let directory = SubmissionDirectory::inspect(dir);
    write_structure_report(out, &directory, format)?;
    out.flush()?;
    Ok(if directory.is_complete() { 0 } else { 1 })
}

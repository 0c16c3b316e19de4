//! # Check Subcommand
//!
//! The CI entry point: resolves the revision pair, lists the changed files,
//! runs the gate against the checked-out working tree, and prints the
//! report. Matches the contract the study repository's PR workflow expects:
//! `BASE_SHA`/`HEAD_SHA` in the environment, exit code 0 or 1.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use studygate_core::error::ConfigError;
use studygate_core::{
    ChangeList, Gate, GateConfig, GateError, GitDiff, Layout, RevisionRange, Submission,
};

use crate::report::{write_gate_report, OutputFormat};

/// Arguments for the `studygate check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Base revision. Falls back to BASE_SHA, then BASE_REVISION.
    #[arg(long, value_name = "REV")]
    pub base: Option<String>,

    /// Head revision. Falls back to HEAD_SHA, then HEAD_REVISION.
    #[arg(long, value_name = "REV")]
    pub head: Option<String>,

    /// Submission layout; overrides the config file.
    #[arg(long, value_name = "flat|nested")]
    pub layout: Option<Layout>,

    /// Read changed paths from this newline-delimited file instead of git.
    #[arg(long, value_name = "FILE")]
    pub changes_file: Option<PathBuf>,

    /// Root of the checked-out working tree.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo_root: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the check subcommand against the process environment and stdout.
///
/// Returns exit code: 0 when the submission passes, 1 otherwise.
pub fn run_check(args: &CheckArgs, config: Option<&Path>) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_check_with(args, config, |key| std::env::var(key).ok(), &mut out)
}

/// Execute the check subcommand with an injected environment and writer.
pub fn run_check_with<F>(
    args: &CheckArgs,
    config: Option<&Path>,
    lookup: F,
    out: &mut impl Write,
) -> Result<u8>
where
    F: Fn(&str) -> Option<String>,
{
    let outcome = evaluate(args, config, lookup);
    match &outcome {
        Ok(submission) => tracing::info!(
            week = %submission.week,
            submitter = %submission.submitter,
            "submission passed"
        ),
        Err(err) => tracing::info!(error = %err, "submission rejected"),
    }

    write_gate_report(out, &outcome, args.format)?;
    out.flush()?;
    Ok(if outcome.is_ok() { 0 } else { 1 })
}

fn evaluate<F>(args: &CheckArgs, config: Option<&Path>, lookup: F) -> Result<Submission, GateError>
where
    F: Fn(&str) -> Option<String>,
{
    let range = RevisionRange::resolve(args.base.clone(), args.head.clone(), lookup)?;
    let gate_config = GateConfig::discover(config, &args.repo_root)?;
    let layout = args.layout.unwrap_or(gate_config.layout);
    tracing::debug!(
        base = %range.base,
        head = %range.head,
        %layout,
        repo_root = %args.repo_root.display(),
        "starting gate run"
    );

    match &args.changes_file {
        Some(path) => {
            let list = ChangeList::read(path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            Gate::new(&list, &args.repo_root, layout).run(&range)
        }
        None => {
            let git = GitDiff::new(&args.repo_root);
            Gate::new(&git, &args.repo_root, layout).run(&range)
        }
    }
}

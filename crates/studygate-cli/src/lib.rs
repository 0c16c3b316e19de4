//! # studygate-cli — Submission Gate CLI
//!
//! Provides the `studygate` command used by the weekly study repository's
//! pull-request workflow.
//!
//! ## Subcommands
//!
//! - `studygate check` — Full gate run over the PR's changed files.
//! - `studygate structure` — Structure checks for one local directory.
//!
//! ## CI usage
//!
//! ```bash
//! BASE_SHA=${{ github.event.pull_request.base.sha }} \
//! HEAD_SHA=${{ github.event.pull_request.head.sha }} \
//!   studygate check
//! studygate structure weekly/2026-W01/alice
//! ```
//!
//! Handlers return the process exit code; output goes to stdout, logs to
//! stderr.

pub mod check;
pub mod report;
pub mod structure;

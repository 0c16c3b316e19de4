//! # Report Rendering
//!
//! Turns gate outcomes into stdout output. Text mode prints one line per
//! outcome prefixed with a pass or fail marker so CI logs are easy to scan;
//! JSON mode prints a single document for tooling.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use studygate_core::structure::README_FILE;
use studygate_core::{GateError, Submission, SubmissionDirectory, ValidationResult};

/// Marker for a satisfied check.
pub const PASS_MARK: &str = "✅";

/// Marker for a failed check.
pub const FAIL_MARK: &str = "❌";

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Marked, human-readable lines.
    #[default]
    Text,
    /// One pretty-printed JSON document.
    Json,
}

fn pass(out: &mut impl Write, msg: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "{PASS_MARK} {msg}").context("failed to write report")
}

fn fail(out: &mut impl Write, msg: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "{FAIL_MARK} {msg}").context("failed to write report")
}

fn json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize report")?;
    writeln!(out).context("failed to write report")
}

/// Render the outcome of a full gate run.
pub fn write_gate_report(
    out: &mut impl Write,
    outcome: &Result<Submission, GateError>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => json(out, &ValidationResult::from(outcome)),
        OutputFormat::Text => match outcome {
            Ok(submission) => {
                pass(
                    out,
                    format_args!(
                        "submission verified ({}, {})",
                        submission.week, submission.submitter
                    ),
                )?;
                pass(out, format_args!("{README_FILE} + p1/p2/p3 all present"))
            }
            Err(err) => fail(out, err),
        },
    }
}

#[derive(Serialize)]
struct StructureReport<'a> {
    status: &'static str,
    #[serde(flatten)]
    directory: &'a SubmissionDirectory,
    missing: Vec<String>,
}

/// Render a standalone structure inspection, one line per requirement.
pub fn write_structure_report(
    out: &mut impl Write,
    directory: &SubmissionDirectory,
    format: OutputFormat,
) -> Result<()> {
    let missing: Vec<String> = directory.findings().iter().map(|f| f.label()).collect();

    if format == OutputFormat::Json {
        let status = if missing.is_empty() { "pass" } else { "fail" };
        return json(
            out,
            &StructureReport {
                status,
                directory,
                missing,
            },
        );
    }

    if directory.has_readme {
        pass(out, README_FILE)?;
    } else {
        fail(out, README_FILE)?;
    }
    for slot in &directory.slots {
        if !slot.exists {
            fail(out, format_args!("{} folder", slot.name))?;
            continue;
        }
        pass(out, format_args!("{} folder", slot.name))?;
        if slot.has_code {
            pass(out, format_args!("{} code file", slot.name))?;
        } else {
            fail(out, format_args!("{} code file", slot.name))?;
        }
    }

    if missing.is_empty() {
        pass(out, format_args!("{} is complete", directory.path.display()))
    } else {
        fail(out, format_args!("missing items: {}", missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studygate_core::structure::ProblemSlot;
    use studygate_core::{SubmitterId, WeekId};

    fn directory(has_readme: bool, slots: [(bool, bool); 3]) -> SubmissionDirectory {
        SubmissionDirectory {
            path: "weekly/2026-W01/alice".into(),
            has_readme,
            slots: slots
                .iter()
                .enumerate()
                .map(|(i, (exists, has_code))| ProblemSlot {
                    name: format!("p{}", i + 1),
                    exists: *exists,
                    has_code: *has_code,
                })
                .collect(),
        }
    }

    fn render(outcome: &Result<Submission, GateError>, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_gate_report(&mut buf, outcome, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn pass_lines_name_week_and_submitter() {
        let outcome = Ok(Submission {
            week: WeekId::new("2026-W01"),
            submitter: SubmitterId::new("alice"),
            directory: directory(true, [(true, true); 3]),
        });
        let text = render(&outcome, OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "✅ submission verified (weekly/2026-W01, alice)",
                "✅ README.md + p1/p2/p3 all present",
            ]
        );
    }

    #[test]
    fn json_pass_uses_the_same_week_folder_as_text() {
        let outcome = Ok(Submission {
            week: WeekId::new("2026-W01"),
            submitter: SubmitterId::new("alice"),
            directory: directory(true, [(true, true); 3]),
        });
        let value: serde_json::Value =
            serde_json::from_str(&render(&outcome, OutputFormat::Json)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"status": "pass", "week": "weekly/2026-W01", "submitter": "alice"})
        );
    }

    #[test]
    fn failure_is_one_marked_line() {
        let outcome = Err(GateError::IncompleteSubmission {
            missing: vec!["p2 folder".into(), "p3 code file".into()],
        });
        let text = render(&outcome, OutputFormat::Text);
        assert_eq!(text, "❌ missing items: p2 folder, p3 code file\n");
    }

    #[test]
    fn json_failure_carries_reasons() {
        let outcome = Err(GateError::NoWeekFolder);
        let value: serde_json::Value =
            serde_json::from_str(&render(&outcome, OutputFormat::Json)).unwrap();
        assert_eq!(value["status"], "fail");
        assert_eq!(
            value["reasons"][0],
            "submissions must be placed under weekly/<week>/"
        );
    }

    #[test]
    fn structure_text_has_line_per_check() {
        let dir = directory(true, [(true, true), (false, false), (true, false)]);
        let mut buf = Vec::new();
        write_structure_report(&mut buf, &dir, OutputFormat::Text).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "✅ README.md",
                "✅ p1 folder",
                "✅ p1 code file",
                "❌ p2 folder",
                "✅ p3 folder",
                "❌ p3 code file",
                "❌ missing items: p2 folder, p3 code file",
            ]
        );
    }

    #[test]
    fn structure_json_flattens_directory() {
        let dir = directory(false, [(true, true); 3]);
        let mut buf = Vec::new();
        write_structure_report(&mut buf, &dir, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["status"], "fail");
        assert_eq!(value["has_readme"], false);
        assert_eq!(value["missing"], serde_json::json!(["README.md"]));
        assert_eq!(value["slots"].as_array().unwrap().len(), 3);
    }
}

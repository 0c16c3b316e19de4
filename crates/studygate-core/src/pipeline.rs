//! # Gate Pipeline
//!
//! Runs the stages in order: list changes, resolve the week, resolve the
//! submitter, inspect the submission directory. Every stage before the last
//! stops the run with one [`GateError`]; the structure check collects all of
//! its findings and fails only if there is at least one.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::changes::ChangeLister;
use crate::config::RevisionRange;
use crate::error::GateError;
use crate::extract::{resolve_submitter, resolve_week};
use crate::identity::{SubmitterId, WeekId};
use crate::layout::Layout;
use crate::structure::SubmissionDirectory;

/// A submission that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// The week submitted to.
    pub week: WeekId,
    /// The person submitting.
    pub submitter: SubmitterId,
    /// The inspected directory, all requirements present.
    pub directory: SubmissionDirectory,
}

/// Binary outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationResult {
    /// Everything required is present.
    Pass {
        /// Resolved week.
        week: WeekId,
        /// Resolved submitter.
        submitter: SubmitterId,
    },
    /// The run failed; reasons are in check order.
    Fail {
        /// Missing-item labels, or the single structural failure message.
        reasons: Vec<String>,
    },
}

impl ValidationResult {
    /// True for [`ValidationResult::Pass`].
    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationResult::Pass { .. })
    }
}

impl From<&Result<Submission, GateError>> for ValidationResult {
    fn from(outcome: &Result<Submission, GateError>) -> Self {
        match outcome {
            Ok(submission) => ValidationResult::Pass {
                week: submission.week.clone(),
                submitter: submission.submitter.clone(),
            },
            Err(err) => ValidationResult::Fail {
                reasons: err.reasons(),
            },
        }
    }
}

/// The configured pipeline for one repository checkout.
pub struct Gate<'a> {
    lister: &'a dyn ChangeLister,
    repo_root: PathBuf,
    layout: Layout,
}

impl<'a> Gate<'a> {
    /// Build a gate over the working tree at `repo_root`.
    pub fn new(lister: &'a dyn ChangeLister, repo_root: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            lister,
            repo_root: repo_root.into(),
            layout,
        }
    }

    /// The working tree being inspected.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// The layout submitters are resolved with.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Run every stage for `range`.
    pub fn run(&self, range: &RevisionRange) -> Result<Submission, GateError> {
        let paths = self.lister.changed_paths(range)?;
        if paths.is_empty() {
            return Err(GateError::NoChangedFiles);
        }

        let week = resolve_week(&paths)?;
        tracing::info!(week = %week, "week resolved");

        let submitter = resolve_submitter(&paths, &week, self.layout, &self.repo_root)?;
        tracing::info!(submitter = %submitter, "submitter resolved");

        let dir = self
            .repo_root
            .join(self.layout.submission_dir(&week, &submitter));
        let directory = SubmissionDirectory::inspect(&dir);
        let missing: Vec<String> = directory.findings().iter().map(|f| f.label()).collect();
        if !missing.is_empty() {
            tracing::info!(?missing, "submission incomplete");
            return Err(GateError::IncompleteSubmission { missing });
        }

        Ok(Submission {
            week,
            submitter,
            directory,
        })
    }

    /// Run every stage and collapse the outcome to a [`ValidationResult`].
    pub fn validate(&self, range: &RevisionRange) -> ValidationResult {
        ValidationResult::from(&self.run(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changes::ChangeList;

    struct FailingLister;

    impl ChangeLister for FailingLister {
        fn changed_paths(&self, range: &RevisionRange) -> Result<Vec<String>, GateError> {
            Err(GateError::Vcs {
                command: format!("git diff --name-only {}", range.diff_spec()),
                output: "fatal: bad object".to_string(),
            })
        }
    }

    fn range() -> RevisionRange {
        RevisionRange::new("base", "head")
    }

    #[test]
    fn empty_changeset_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let lister = ChangeList::default();
        let gate = Gate::new(&lister, dir.path(), Layout::Flat);
        assert_eq!(gate.repo_root(), dir.path());
        assert_eq!(gate.layout(), Layout::Flat);
        assert!(matches!(gate.run(&range()), Err(GateError::NoChangedFiles)));
    }

    #[test]
    fn lister_failure_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let gate = Gate::new(&FailingLister, dir.path(), Layout::Flat);
        match gate.validate(&range()) {
            ValidationResult::Fail { reasons } => {
                assert_eq!(reasons.len(), 1);
                assert!(reasons[0].contains("git diff --name-only base..head"));
                assert!(reasons[0].contains("fatal: bad object"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn pass_serializes_with_status_tag() {
        let result = ValidationResult::Pass {
            week: WeekId::new("2026-W01"),
            submitter: SubmitterId::new("alice"),
        };
        assert!(result.is_pass());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"status": "pass", "week": "weekly/2026-W01", "submitter": "alice"})
        );
    }

    #[test]
    fn fail_serializes_reasons() {
        let result = ValidationResult::Fail {
            reasons: vec!["p2 folder".into()],
        };
        assert!(!result.is_pass());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({"status": "fail", "reasons": ["p2 folder"]})
        );
    }
}

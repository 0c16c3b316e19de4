//! # Submission Layouts
//!
//! The two directory conventions a study repository can adopt. Both share
//! one extraction pipeline; a [`Layout`] only decides which prefix precedes
//! the submitter segment and which shared entries under it are skipped.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::identity::{SubmitterId, WeekId};

/// Fixed segment between the week folder and submitters in [`Layout::Nested`].
pub const SOLUTIONS_DIR: &str = "solutions";

/// Shared per-week problem statement, never a submitter.
pub const PROBLEMS_FILE: &str = "problems.md";

/// Where submitter directories live inside a week folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `weekly/<week>/<submitter>/`
    #[default]
    Flat,
    /// `weekly/<week>/solutions/<submitter>/`
    Nested,
}

impl Layout {
    /// Lowercase name used in config files and flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Flat => "flat",
            Layout::Nested => "nested",
        }
    }

    /// Path prefix (with trailing slash) that immediately precedes the
    /// submitter segment.
    pub fn submitter_prefix(&self, week: &WeekId) -> String {
        match self {
            Layout::Flat => format!("{}/", week.folder()),
            Layout::Nested => format!("{}/{SOLUTIONS_DIR}/", week.folder()),
        }
    }

    /// Entries directly under the prefix that are never submitters.
    pub fn excluded_entries(&self) -> &'static [&'static str] {
        match self {
            Layout::Flat => &[PROBLEMS_FILE],
            Layout::Nested => &[],
        }
    }

    /// Human-readable shape of a submission, e.g. `weekly/2026-W01/<github-id>/`.
    pub fn template(&self, week: &WeekId) -> String {
        format!("{}<github-id>/", self.submitter_prefix(week))
    }

    /// Repository-relative submission directory.
    pub fn submission_dir(&self, week: &WeekId, submitter: &SubmitterId) -> PathBuf {
        let mut dir = PathBuf::from(week.folder());
        if *self == Layout::Nested {
            dir.push(SOLUTIONS_DIR);
        }
        dir.push(submitter.as_str());
        dir
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Layout::Flat),
            "nested" => Ok(Layout::Nested),
            other => Err(format!("unknown layout '{other}' (expected 'flat' or 'nested')")),
        }
    }
}

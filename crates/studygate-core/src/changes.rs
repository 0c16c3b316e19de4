//! # Change Listing
//!
//! Produces the changed-path list a run works from. [`GitDiff`] asks git;
//! [`ChangeList`] replays a list captured elsewhere (a CI artifact, a test
//! fixture). Both normalize the same way: trimmed, blank lines dropped,
//! duplicates removed while keeping first-seen order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::RevisionRange;
use crate::error::GateError;

/// Source of the paths that differ between two revisions.
pub trait ChangeLister {
    /// List the distinct paths changed in `range`.
    ///
    /// An empty list is a valid answer.
    fn changed_paths(&self, range: &RevisionRange) -> Result<Vec<String>, GateError>;
}

/// Lists changes with `git diff --name-only -z base..head`.
///
/// Paths come back NUL-separated with `core.quotePath` off, so names with
/// non-ASCII bytes or whitespace arrive verbatim instead of C-quoted.
#[derive(Debug, Clone)]
pub struct GitDiff {
    repo_root: PathBuf,
}

impl GitDiff {
    /// Run git inside `repo_root`.
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    /// The working tree git runs in.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

impl ChangeLister for GitDiff {
    fn changed_paths(&self, range: &RevisionRange) -> Result<Vec<String>, GateError> {
        let args = [
            "-c".to_string(),
            "core.quotePath=false".to_string(),
            "diff".to_string(),
            "--name-only".to_string(),
            "-z".to_string(),
            range.diff_spec(),
        ];
        let command = format!("git {}", args.join(" "));
        tracing::debug!(%command, repo_root = %self.repo_root.display(), "listing changed files");

        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(|err| GateError::Vcs {
                command: command.clone(),
                output: err.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GateError::Vcs {
                command,
                output: format!("{stdout}{stderr}").trim_end().to_string(),
            });
        }

        let paths = dedup_entries(stdout.split('\0'));
        tracing::info!(count = paths.len(), "changed files listed");
        Ok(paths)
    }
}

/// A fixed changed-path list, independent of any revisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeList {
    paths: Vec<String>,
}

impl ChangeList {
    /// Build from individual paths.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined: Vec<String> = paths.into_iter().map(|p| p.as_ref().to_string()).collect();
        Self::from_lines(&joined.join("\n"))
    }

    /// Build from newline-delimited text, as `git diff --name-only` prints it.
    pub fn from_lines(text: &str) -> Self {
        Self {
            paths: normalize_paths(text),
        }
    }

    /// Read a newline-delimited list from disk.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        Ok(Self::from_lines(&std::fs::read_to_string(path)?))
    }

    /// The normalized paths.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

impl ChangeLister for ChangeList {
    fn changed_paths(&self, _range: &RevisionRange) -> Result<Vec<String>, GateError> {
        Ok(self.paths.clone())
    }
}

/// Trim, drop blanks and duplicates, keep first-seen order.
pub fn normalize_paths(text: &str) -> Vec<String> {
    dedup_entries(text.lines())
}

fn dedup_entries<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}

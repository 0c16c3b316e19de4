//! # Submission Structure Checks
//!
//! Inspects a submission directory in the working tree. Unlike the earlier
//! stages this one looks at disk rather than the diff, because it has to
//! notice folders that are absent, and it reports every finding at once.
//!
//! Required layout:
//!
//! ```text
//! <submission>/
//!   README.md
//!   p1/  ...at least one recognized code file, any depth
//!   p2/
//!   p3/
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

/// Marker file every submission must contain.
pub const README_FILE: &str = "README.md";

/// The three problem folders every submission must contain, in check order.
pub const PROBLEM_SLOTS: [&str; 3] = ["p1", "p2", "p3"];

/// Extensions (lowercase, no dot) accepted as source code.
pub const CODE_EXTENSIONS: &[&str] = &[
    "py", "java", "kt", "cpp", "cc", "cxx", "c", "h", "hpp", "js", "ts", "jsx", "tsx", "go", "rs",
    "cs", "php", "rb", "swift", "dart", "scala", "lua", "sql",
];

/// A single missing requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "slot", rename_all = "snake_case")]
pub enum Finding {
    /// `README.md` is absent or not a regular file.
    MissingReadme,
    /// The slot folder does not exist.
    MissingSlotFolder(String),
    /// The slot folder exists but holds no recognized code file.
    MissingCodeFile(String),
}

impl Finding {
    /// Stable label, e.g. `p2 folder` or `p3 code file`.
    pub fn label(&self) -> String {
        match self {
            Finding::MissingReadme => README_FILE.to_string(),
            Finding::MissingSlotFolder(slot) => format!("{slot} folder"),
            Finding::MissingCodeFile(slot) => format!("{slot} code file"),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// What was found for one problem slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemSlot {
    /// Slot folder name.
    pub name: String,
    /// The folder exists.
    pub exists: bool,
    /// A recognized code file exists somewhere below it.
    pub has_code: bool,
}

/// Observed state of a submission directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionDirectory {
    /// Directory that was inspected.
    pub path: PathBuf,
    /// `README.md` is present as a regular file.
    pub has_readme: bool,
    /// One entry per [`PROBLEM_SLOTS`] name, in order.
    pub slots: Vec<ProblemSlot>,
}

impl SubmissionDirectory {
    /// Inspect `dir` on disk.
    pub fn inspect(dir: &Path) -> Self {
        let has_readme = dir.join(README_FILE).is_file();
        let slots = PROBLEM_SLOTS
            .iter()
            .map(|name| {
                let slot_dir = dir.join(name);
                let exists = slot_dir.is_dir();
                ProblemSlot {
                    name: name.to_string(),
                    exists,
                    has_code: exists && has_code_file(&slot_dir),
                }
            })
            .collect();

        let inspected = Self {
            path: dir.to_path_buf(),
            has_readme,
            slots,
        };
        tracing::debug!(dir = %dir.display(), ?inspected, "inspected submission directory");
        inspected
    }

    /// Every missing requirement: README first, then slots 1 to 3.
    ///
    /// A missing slot folder suppresses that slot's code-file finding.
    pub fn findings(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        if !self.has_readme {
            findings.push(Finding::MissingReadme);
        }
        for slot in &self.slots {
            if !slot.exists {
                findings.push(Finding::MissingSlotFolder(slot.name.clone()));
            } else if !slot.has_code {
                findings.push(Finding::MissingCodeFile(slot.name.clone()));
            }
        }
        findings
    }

    /// True when there are no findings.
    pub fn is_complete(&self) -> bool {
        self.findings().is_empty()
    }
}

/// Check a submission directory and return its findings.
pub fn check_structure(dir: &Path) -> Vec<Finding> {
    SubmissionDirectory::inspect(dir).findings()
}

/// Whether `path` ends in a recognized code extension, ignoring case.
pub fn is_code_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| CODE_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Whether any regular file below `dir` (at any depth) is a code file.
///
/// Unreadable entries are logged and skipped. Symlinks are not followed.
pub fn has_code_file(dir: &Path) -> bool {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable entry");
                None
            }
        })
        .any(|entry| entry.file_type().is_file() && is_code_file(entry.path()))
}

//! # Error Types
//!
//! Every way a submission gate run can end other than a pass. All variants
//! are terminal for the run: nothing is retried, and each one renders to a
//! single human-readable message.
//!
//! ## Two tiers
//!
//! Variants up to [`GateError::MissingSolutionsRoot`] are structural
//! preconditions and are raised by the first stage that detects them.
//! [`GateError::IncompleteSubmission`] is the only variant that carries
//! several findings, accumulated by the structure checker.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a gate run.
#[derive(Error, Debug)]
pub enum GateError {
    /// Missing or unreadable configuration input.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The version-control diff could not be executed or exited non-zero.
    #[error("git command failed: {command}\n{output}")]
    Vcs {
        /// The full command line that was attempted.
        command: String,
        /// Raw combined output, or the spawn error.
        output: String,
    },

    /// The diff between the two revisions is empty.
    #[error("no files were changed in this pull request")]
    NoChangedFiles,

    /// No changed path lives under `weekly/<week>/`.
    #[error("submissions must be placed under weekly/<week>/")]
    NoWeekFolder,

    /// Changed paths span more than one week folder.
    #[error("only one week may be submitted per pull request (found: {})", .weeks.join(", "))]
    MultipleWeeksInOnePr {
        /// Every week folder touched, sorted.
        weeks: Vec<String>,
    },

    /// No submitter segment could be found under the week folder.
    #[error("submissions must follow the {template} structure")]
    NoSubmitterFolder {
        /// The expected layout, e.g. `weekly/2026-W01/<github-id>/`.
        template: String,
    },

    /// Changed paths belong to more than one submitter.
    #[error("only one person may submit per pull request (found: {})", .submitters.join(", "))]
    MultiplePeopleInOnePr {
        /// Every submitter found, sorted.
        submitters: Vec<String>,
    },

    /// Nested layout only: the `solutions/` directory is absent on disk.
    #[error("solutions directory not found: {}", .path.display())]
    MissingSolutionsRoot {
        /// The directory that was expected to exist.
        path: PathBuf,
    },

    /// The submission directory lacks one or more required items.
    #[error("missing items: {}", .missing.join(", "))]
    IncompleteSubmission {
        /// Stable labels such as `p2 folder`, in check order.
        missing: Vec<String>,
    },
}

impl GateError {
    /// The ordered failure reasons carried by this error.
    ///
    /// An incomplete submission yields its individual missing-item labels;
    /// every other variant yields its single rendered message.
    pub fn reasons(&self) -> Vec<String> {
        match self {
            GateError::IncompleteSubmission { missing } => missing.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Errors while assembling the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required revision identifier was not supplied by any source.
    #[error("{which} revision is not set (checked {sources})")]
    MissingRevision {
        /// `base` or `head`.
        which: &'static str,
        /// The flag and environment variables that were consulted.
        sources: String,
    },

    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`crate::config::GateConfig`].
    #[error("invalid config in {}: {source}", .path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

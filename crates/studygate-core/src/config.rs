//! # Run Configuration
//!
//! The revision pair a run compares and the per-repository gate settings.
//! Nothing in here reads the process environment directly: callers pass a
//! lookup function so tests can inject literal values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::Layout;

/// Config file looked up at the repository root when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".studygate.yaml";

/// Environment variables consulted for the base revision, in order.
pub const BASE_ENV_VARS: [&str; 2] = ["BASE_SHA", "BASE_REVISION"];

/// Environment variables consulted for the head revision, in order.
pub const HEAD_ENV_VARS: [&str; 2] = ["HEAD_SHA", "HEAD_REVISION"];

/// Per-repository gate settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Which submission layout the repository uses.
    pub layout: Layout,
}

impl GateConfig {
    /// Parse a YAML config document. An empty document yields the defaults.
    pub fn from_yaml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text, path)
    }

    /// Load `explicit` if given, else `<repo_root>/.studygate.yaml` if it
    /// exists, else the defaults.
    pub fn discover(explicit: Option<&Path>, repo_root: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = repo_root.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!(path = %fallback.display(), "loading repository config");
            Self::load(&fallback)
        } else {
            Ok(Self::default())
        }
    }
}

/// The two commits a pull request is judged between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionRange {
    /// Merge-base side of the pull request.
    pub base: String,
    /// Tip of the pull request branch.
    pub head: String,
}

impl RevisionRange {
    /// Build a range from already-known revisions.
    pub fn new(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            head: head.into(),
        }
    }

    /// Resolve each side from an explicit value first, then from the
    /// environment variables in [`BASE_ENV_VARS`] / [`HEAD_ENV_VARS`].
    ///
    /// Blank values are treated as absent.
    pub fn resolve<F>(
        base: Option<String>,
        head: Option<String>,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = pick("base", "--base", base, &BASE_ENV_VARS, &lookup)?;
        let head = pick("head", "--head", head, &HEAD_ENV_VARS, &lookup)?;
        Ok(Self { base, head })
    }

    /// The `base..head` argument handed to `git diff`.
    pub fn diff_spec(&self) -> String {
        format!("{}..{}", self.base, self.head)
    }
}

fn pick<F>(
    which: &'static str,
    flag: &str,
    explicit: Option<String>,
    vars: &[&str],
    lookup: &F,
) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |v: String| {
        let trimmed = v.trim().to_string();
        (!trimmed.is_empty()).then_some(trimmed)
    };

    explicit
        .and_then(non_blank)
        .or_else(|| vars.iter().find_map(|var| lookup(*var).and_then(non_blank)))
        .ok_or_else(|| {
            let mut sources = vec![flag.to_string()];
            sources.extend(vars.iter().map(|v| v.to_string()));
            ConfigError::MissingRevision {
                which,
                sources: sources.join(", "),
            }
        })
}

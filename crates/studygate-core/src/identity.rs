//! # Week & Submitter Identifiers
//!
//! Newtypes for the two facts extracted from a changeset. A [`WeekId`]
//! names one iteration of the study; a [`SubmitterId`] names the person
//! whose directory the pull request touches.

use serde::{Deserialize, Serialize, Serializer};

/// Top-level directory holding every week folder.
pub const WEEKLY_ROOT: &str = "weekly";

/// One iteration of the study, e.g. `2026-W01`.
///
/// Holds only the week token; [`WeekId::folder`] gives the repository
/// path `weekly/<token>` used in messages, on disk and when serialized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekId(String);

impl WeekId {
    /// Wrap a week token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The bare week token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The repository-relative week folder, `weekly/<token>`.
    pub fn folder(&self) -> String {
        format!("{WEEKLY_ROOT}/{}", self.0)
    }
}

impl std::fmt::Display for WeekId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.folder())
    }
}

impl Serialize for WeekId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.folder())
    }
}

/// The submitter's directory name, usually a GitHub handle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmitterId(String);

impl SubmitterId {
    /// Wrap a submitter identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

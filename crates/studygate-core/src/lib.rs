#![deny(missing_docs)]

//! # studygate-core — Submission Gate for Weekly Study Pull Requests
//!
//! Decides whether a pull request to a coding-study repository is a
//! well-formed weekly submission. The checks run as one linear pipeline:
//!
//! 1. [`changes`] lists the paths changed between two revisions.
//! 2. [`extract`] resolves exactly one week and exactly one submitter.
//! 3. [`structure`] verifies `README.md` and the `p1`/`p2`/`p3` folders,
//!    each holding at least one recognized code file.
//! 4. [`pipeline`] sequences the stages and yields a [`ValidationResult`].
//!
//! ## Design Principles
//!
//! 1. **Newtypes for extracted facts.** A [`SubmitterId`] cannot be passed
//!    where a [`WeekId`] is expected.
//!
//! 2. **One extractor, two layouts.** [`Layout`] is a prefix template over a
//!    single submitter extractor, selected explicitly per repository.
//!
//! 3. **Two-tier failures.** Structural problems stop the run with a single
//!    [`GateError`]; structure findings are accumulated and reported together.
//!
//! 4. **No ambient state.** Revisions and the working-tree root are explicit
//!    parameters; only the binary reads the process environment.

pub mod changes;
pub mod config;
pub mod error;
pub mod extract;
pub mod identity;
pub mod layout;
pub mod pipeline;
pub mod structure;

pub use changes::{ChangeList, ChangeLister, GitDiff};
pub use config::{GateConfig, RevisionRange};
pub use error::{ConfigError, GateError};
pub use identity::{SubmitterId, WeekId};
pub use layout::Layout;
pub use pipeline::{Gate, Submission, ValidationResult};
pub use structure::{check_structure, Finding, SubmissionDirectory};

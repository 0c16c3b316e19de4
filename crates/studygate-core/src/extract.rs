//! # Week & Submitter Extraction
//!
//! Derives the single week and single submitter a pull request is about
//! from its changed paths. Candidates are collected into [`BTreeSet`]s so
//! every listing in an error message is sorted and stable across runs.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::GateError;
use crate::identity::{SubmitterId, WeekId, WEEKLY_ROOT};
use crate::layout::{Layout, SOLUTIONS_DIR};

/// Distinct week tokens touched by `paths`.
///
/// A path contributes when its first segment is `weekly` and a non-empty
/// second segment follows.
pub fn week_candidates<I, S>(paths: I) -> BTreeSet<WeekId>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .filter_map(|path| {
            let mut segments = path.as_ref().split('/');
            match (segments.next(), segments.next()) {
                (Some(root), Some(week)) if root == WEEKLY_ROOT && !week.is_empty() => {
                    Some(WeekId::new(week))
                }
                _ => None,
            }
        })
        .collect()
}

/// Resolve the one week a pull request submits to.
pub fn resolve_week<S: AsRef<str>>(paths: &[S]) -> Result<WeekId, GateError> {
    let weeks = week_candidates(paths);
    tracing::debug!(candidates = ?weeks, "week candidates");
    exactly_one(weeks, || GateError::NoWeekFolder, |all| {
        GateError::MultipleWeeksInOnePr {
            weeks: all.iter().map(WeekId::folder).collect(),
        }
    })
}

/// Distinct submitter segments under `week` for the given layout.
///
/// Only paths starting with [`Layout::submitter_prefix`] contribute; the
/// segment right after the prefix is the candidate unless it is empty or one
/// of the layout's excluded shared entries.
pub fn submitter_candidates<I, S>(paths: I, week: &WeekId, layout: Layout) -> BTreeSet<SubmitterId>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = layout.submitter_prefix(week);
    let excluded = layout.excluded_entries();
    paths
        .into_iter()
        .filter_map(|path| {
            let rest = path.as_ref().strip_prefix(prefix.as_str())?;
            let segment = rest.split('/').next().unwrap_or_default();
            if segment.is_empty() || excluded.iter().any(|e| *e == segment) {
                None
            } else {
                Some(SubmitterId::new(segment))
            }
        })
        .collect()
}

/// Resolve the one submitter a pull request belongs to.
///
/// For [`Layout::Nested`] the `solutions/` directory must exist under the
/// week folder in the working tree at `repo_root`; this is checked before
/// any candidate is extracted.
pub fn resolve_submitter<S: AsRef<str>>(
    paths: &[S],
    week: &WeekId,
    layout: Layout,
    repo_root: &Path,
) -> Result<SubmitterId, GateError> {
    if layout == Layout::Nested {
        let solutions = repo_root.join(week.folder()).join(SOLUTIONS_DIR);
        if !solutions.is_dir() {
            return Err(GateError::MissingSolutionsRoot { path: solutions });
        }
    }

    let submitters = submitter_candidates(paths, week, layout);
    tracing::debug!(candidates = ?submitters, %layout, "submitter candidates");
    exactly_one(
        submitters,
        || GateError::NoSubmitterFolder {
            template: layout.template(week),
        },
        |all| GateError::MultiplePeopleInOnePr {
            submitters: all.iter().map(|s| s.as_str().to_string()).collect(),
        },
    )
}

fn exactly_one<T: Ord>(
    set: BTreeSet<T>,
    none: impl FnOnce() -> GateError,
    many: impl FnOnce(&BTreeSet<T>) -> GateError,
) -> Result<T, GateError> {
    if set.len() > 1 {
        return Err(many(&set));
    }
    set.into_iter().next().ok_or_else(none)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_weekly_prefix_is_no_week_folder() {
        let paths = ["README.md", "docs/weekly/2026-W01/x.py", "weekly"];
        assert!(matches!(resolve_week(&paths), Err(GateError::NoWeekFolder)));
    }

    #[test]
    fn two_weeks_are_listed_sorted() {
        let paths = ["weekly/2026-W02/bob/p1/b.py", "weekly/2026-W01/alice/p1/a.py"];
        match resolve_week(&paths) {
            Err(GateError::MultipleWeeksInOnePr { weeks }) => {
                assert_eq!(weeks, vec!["weekly/2026-W01", "weekly/2026-W02"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn single_week_resolves() {
        let paths = [
            "weekly/2026-W01/alice/p1/a.py",
            "weekly/2026-W01/alice/README.md",
            ".github/workflows/ci.yml",
        ];
        assert_eq!(resolve_week(&paths).unwrap(), WeekId::new("2026-W01"));
    }

    #[test]
    fn file_directly_under_weekly_counts_as_week_candidate() {
        let weeks = week_candidates(["weekly/README.md", "weekly/"]);
        assert_eq!(weeks.len(), 1);
        assert!(weeks.contains(&WeekId::new("README.md")));
    }

    #[test]
    fn flat_problems_file_is_not_a_submitter() {
        let dir = tempfile::tempdir().unwrap();
        let week = WeekId::new("2026-W01");
        let paths = ["weekly/2026-W01/problems.md"];
        let err = resolve_submitter(&paths, &week, Layout::Flat, dir.path()).unwrap_err();
        match err {
            GateError::NoSubmitterFolder { template } => {
                assert_eq!(template, "weekly/2026-W01/<github-id>/");
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn flat_two_submitters_listed_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let week = WeekId::new("2026-W01");
        let paths = [
            "weekly/2026-W01/zed/p1/a.py",
            "weekly/2026-W01/problems.md",
            "weekly/2026-W01/amy/README.md",
        ];
        match resolve_submitter(&paths, &week, Layout::Flat, dir.path()) {
            Err(GateError::MultiplePeopleInOnePr { submitters }) => {
                assert_eq!(submitters, vec!["amy", "zed"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn flat_single_submitter_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let week = WeekId::new("2026-W01");
        let paths = [
            "weekly/2026-W01/problems.md",
            "weekly/2026-W01/alice/p1/a.py",
            "weekly/2026-W01/alice/p2/b.py",
        ];
        let who = resolve_submitter(&paths, &week, Layout::Flat, dir.path()).unwrap();
        assert_eq!(who, SubmitterId::new("alice"));
    }

    #[test]
    fn nested_requires_solutions_dir_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let week = WeekId::new("2026-W01");
        let paths = ["weekly/2026-W01/solutions/alice/p1/a.py"];
        match resolve_submitter(&paths, &week, Layout::Nested, dir.path()) {
            Err(GateError::MissingSolutionsRoot { path }) => {
                assert!(path.ends_with("weekly/2026-W01/solutions"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn nested_ignores_paths_outside_solutions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("weekly/2026-W01/solutions")).unwrap();
        let week = WeekId::new("2026-W01");
        let paths = [
            "weekly/2026-W01/problems.md",
            "weekly/2026-W01/notes/intro.md",
            "weekly/2026-W01/solutions/alice/p1/a.py",
        ];
        let who = resolve_submitter(&paths, &week, Layout::Nested, dir.path()).unwrap();
        assert_eq!(who, SubmitterId::new("alice"));
    }

    #[test]
    fn nested_without_solution_paths_is_no_submitter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("weekly/2026-W01/solutions")).unwrap();
        let week = WeekId::new("2026-W01");
        let paths = ["weekly/2026-W01/alice/p1/a.py"];
        assert!(matches!(
            resolve_submitter(&paths, &week, Layout::Nested, dir.path()),
            Err(GateError::NoSubmitterFolder { .. })
        ));
    }

    #[test]
    fn flat_layout_sees_solutions_as_a_submitter() {
        let week = WeekId::new("2026-W01");
        let found = submitter_candidates(
            ["weekly/2026-W01/solutions/alice/p1/a.py"],
            &week,
            Layout::Flat,
        );
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec![SubmitterId::new("solutions")]
        );
    }
}

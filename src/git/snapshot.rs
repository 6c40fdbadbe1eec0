// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Point-in-time view of a repository's pending changes.

use super::backend::RepositoryQuery;
use crate::error::BumpResult;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Changed paths and commit subjects gathered in one pass.
///
/// Built fresh per invocation and never mutated afterwards. An empty
/// snapshot is valid input for the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSnapshot {
    changed_files: BTreeSet<String>,
    recent_commit_subjects: Vec<String>,
}

impl ChangeSnapshot {
    pub fn new<F, S>(changed_files: F, recent_commit_subjects: S) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            changed_files: changed_files.into_iter().map(Into::into).collect(),
            recent_commit_subjects: recent_commit_subjects.into_iter().map(Into::into).collect(),
        }
    }

    /// Repository-relative paths, sorted and deduplicated.
    #[must_use]
    pub const fn changed_files(&self) -> &BTreeSet<String> {
        &self.changed_files
    }

    /// Commit subjects, most recent first.
    #[must_use]
    pub fn recent_commit_subjects(&self) -> &[String] {
        &self.recent_commit_subjects
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed_files.is_empty() && self.recent_commit_subjects.is_empty()
    }
}

/// Gather changed files and recent commit subjects from `query`.
///
/// # Errors
///
/// Propagates the first accessor failure unchanged.
pub fn take_snapshot<Q>(query: &Q, fallback_count: usize) -> BumpResult<ChangeSnapshot>
where
    Q: RepositoryQuery + ?Sized,
{
    let changed_files = query.changed_files()?;
    let recent_commit_subjects = query.recent_commit_subjects(fallback_count)?;

    debug!(
        files = changed_files.len(),
        subjects = recent_commit_subjects.len(),
        "took change snapshot"
    );

    Ok(ChangeSnapshot {
        changed_files,
        recent_commit_subjects,
    })
}

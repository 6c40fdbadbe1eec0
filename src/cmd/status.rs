// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status command: raw repository facts, no classification.

use std::collections::BTreeSet;

use crate::error::{BumpResult, Result};
use crate::git::RepositoryQuery;

/// Repository facts shown by `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub branch: String,
    pub dirty: bool,
    pub latest_tag: Option<String>,
    pub changed_files: BTreeSet<String>,
}

impl StatusReport {
    /// Query every fact in turn.
    ///
    /// # Errors
    ///
    /// Propagates the first accessor failure.
    pub fn collect<Q: RepositoryQuery + ?Sized>(query: &Q) -> BumpResult<Self> {
        Ok(Self {
            branch: query.current_branch_name()?,
            dirty: query.has_uncommitted_changes()?,
            latest_tag: query.latest_tag()?,
            changed_files: query.changed_files()?,
        })
    }

    #[must_use]
    pub fn format_lines(&self) -> Vec<String> {
        let branch = if self.branch.is_empty() {
            "(detached)"
        } else {
            self.branch.as_str()
        };
        let mut lines = vec![
            format!("branch:  {branch}"),
            format!("dirty:   {}", if self.dirty { "yes" } else { "no" }),
            format!("tag:     {}", self.latest_tag.as_deref().unwrap_or("(none)")),
            format!("changed: {}", self.changed_files.len()),
        ];
        lines.extend(self.changed_files.iter().map(|f| format!("  {f}")));
        lines
    }
}

/// Print repository status.
///
/// # Errors
///
/// Returns an error if any repository query fails.
pub fn run_status_command<Q: RepositoryQuery + ?Sized>(query: &Q) -> Result<()> {
    for line in StatusReport::collect(query)?.format_lines() {
        println!("{line}");
    }
    Ok(())
}

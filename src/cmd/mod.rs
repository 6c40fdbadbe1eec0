// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   status, analyze, release, config (options/inis)
//! ```

pub mod analyze;
pub mod config;
pub mod release;
pub mod status;

#[cfg(test)]
mod tests;

use std::path::Path;

use crate::error::{BumpResult, GitError};
use crate::git::{GitBackend, RepositoryQuery};

/// Bind a backend to `repo`, failing early if it is not a work tree.
///
/// # Errors
///
/// Returns `GitError::RepositoryUnavailable` if `repo` is not inside a git
/// work tree.
pub fn open_repository(repo: &Path) -> BumpResult<GitBackend> {
    let backend = GitBackend::new(repo);
    if !backend.is_repository() {
        return Err(GitError::RepositoryUnavailable {
            path: repo.display().to_string(),
            reason: "not a git work tree".to_string(),
        }
        .into());
    }
    Ok(backend)
}

// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! RepositoryQuery (read-only capability)
//!        |
//!        v
//!   GitBackend { workdir }
//!    .is_repository      gix::discover
//!    .current_branch     gix head_name
//!    .has_uncommitted    git status --porcelain
//!    .changed_files      git diff --name-only (+ --cached)
//!    .latest_tag         git describe --tags --abbrev=0
//!    .recent_subjects    git log --pretty=format:%s
//! ```
//!
//! Every accessor except `is_repository` fails with
//! `GitError::RepositoryUnavailable` outside a work tree.

use crate::error::{BumpResult, GitError, GixError};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, trace};

/// Stderr fragments git prints when `describe` finds no tag.
const NO_TAG_MARKERS: &[&str] = &["No names found", "No tags can describe", "cannot describe"];

// --- Query Trait (Read-only operations) ---

/// Read-only queries over one version-controlled working directory.
///
/// Implementors are bound to their directory at construction; no method
/// consults the process's current directory.
pub trait RepositoryQuery {
    /// Check if the directory is inside a git work tree. Never fails.
    fn is_repository(&self) -> bool;

    /// Current branch name, or an empty string when HEAD is detached.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch_name(&self) -> BumpResult<String>;

    /// Check for staged or unstaged modifications to tracked files.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository is unavailable or git fails.
    fn has_uncommitted_changes(&self) -> BumpResult<bool>;

    /// Union of unstaged and staged modified paths, relative to the work tree root.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository is unavailable or git fails.
    fn changed_files(&self) -> BumpResult<BTreeSet<String>>;

    /// Most recent tag reachable from HEAD; `None` when there is none.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository is unavailable or git fails for
    /// a reason other than a missing tag.
    fn latest_tag(&self) -> BumpResult<Option<String>>;

    /// Commit subjects since the latest tag, most recent first. Without a tag,
    /// the last `fallback_count` subjects.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the repository is unavailable or git fails.
    fn recent_commit_subjects(&self, fallback_count: usize) -> BumpResult<Vec<String>>;
}

// --- GitBackend Implementation ---

/// Git backend bound to a working directory.
///
/// Discovery and HEAD resolution run in-process through gix; listings
/// shell out to the git CLI.
#[derive(Debug, Clone)]
pub struct GitBackend {
    workdir: PathBuf,
}

impl GitBackend {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn unavailable(&self, reason: impl Into<String>) -> GitError {
        GitError::RepositoryUnavailable {
            path: self.workdir.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Discover the repository, rejecting bare repositories.
    fn discover(&self) -> BumpResult<gix::Repository> {
        let repo = gix::discover(&self.workdir).map_err(|e| self.unavailable(e.to_string()))?;
        if repo.workdir().is_none() {
            return Err(self.unavailable("bare repository has no work tree").into());
        }
        Ok(repo)
    }

    /// Spawn git and return its raw output. Sets `GCM_INTERACTIVE=never`,
    /// `GIT_TERMINAL_PROMPT=0` and `LC_ALL=C`.
    fn run_git(&self, args: &[&str]) -> BumpResult<Output> {
        let git = which::which("git")
            .map_err(|e| self.unavailable(format!("git executable not found: {e}")))?;

        debug!(command = %format!("git {}", args.join(" ")), cwd = %self.workdir.display(), "running git");

        Command::new(git)
            .args(["-c", "core.quotepath=off"])
            .args(args)
            .current_dir(&self.workdir)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("LC_ALL", "C")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    self.unavailable(format!("failed to execute git: {e}")).into()
                } else {
                    std::io::Error::new(e.kind(), format!("failed to execute git: {e}")).into()
                }
            })
    }

    /// Run git, returning trimmed stdout or `GitError::CommandFailed`.
    pub(crate) fn git_command(&self, args: &[&str]) -> BumpResult<String> {
        let output = self.run_git(args)?;
        if !output.status.success() {
            return Err(command_failed(args, &output).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// False for a freshly initialized repository with an unborn HEAD.
    fn has_commits(&self) -> BumpResult<bool> {
        let output = self.run_git(&["rev-parse", "--verify", "--quiet", "HEAD"])?;
        Ok(output.status.success())
    }

    fn lines(&self, args: &[&str]) -> BumpResult<Vec<String>> {
        Ok(self
            .git_command(args)?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// NUL-separated path listing (`-z`), so paths come back unquoted.
    fn paths(&self, args: &[&str]) -> BumpResult<Vec<String>> {
        let output = self.run_git(args)?;
        if !output.status.success() {
            return Err(command_failed(args, &output).into());
        }
        Ok(output
            .stdout
            .split(|&byte| byte == 0)
            .filter(|path| !path.is_empty())
            .map(|path| String::from_utf8_lossy(path).into_owned())
            .collect())
    }
}

fn command_failed(args: &[&str], output: &Output) -> GitError {
    GitError::CommandFailed {
        command: format!("git {}", args.join(" ")),
        message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

impl RepositoryQuery for GitBackend {
    fn is_repository(&self) -> bool {
        gix::discover(&self.workdir).is_ok_and(|repo| repo.workdir().is_some())
    }

    fn current_branch_name(&self) -> BumpResult<String> {
        let repo = self.discover()?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head
            .map(|name| name.shorten().to_string())
            .unwrap_or_default())
    }

    fn has_uncommitted_changes(&self) -> BumpResult<bool> {
        self.discover()?;
        let output = self.git_command(&["status", "--porcelain", "--untracked-files=no"])?;
        Ok(!output.is_empty())
    }

    fn changed_files(&self) -> BumpResult<BTreeSet<String>> {
        self.discover()?;

        let mut files: BTreeSet<String> = self
            .paths(&["diff", "--name-only", "-z"])?
            .into_iter()
            .collect();

        // Without a commit to diff against, the whole index is staged.
        let staged = if self.has_commits()? {
            self.paths(&["diff", "--cached", "--name-only", "-z"])?
        } else {
            self.paths(&["ls-files", "--cached", "-z", "--full-name", "--", ":/"])?
        };
        files.extend(staged);

        trace!(count = files.len(), "collected changed files");
        Ok(files)
    }

    fn latest_tag(&self) -> BumpResult<Option<String>> {
        self.discover()?;
        if !self.has_commits()? {
            return Ok(None);
        }

        let args = ["describe", "--tags", "--abbrev=0"];
        let output = self.run_git(&args)?;
        if output.status.success() {
            let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
            return Ok(Some(tag).filter(|t| !t.is_empty()));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if NO_TAG_MARKERS.iter().any(|marker| stderr.contains(marker)) {
            debug!(cwd = %self.workdir.display(), "no tag reachable from HEAD");
            return Ok(None);
        }
        Err(command_failed(&args, &output).into())
    }

    fn recent_commit_subjects(&self, fallback_count: usize) -> BumpResult<Vec<String>> {
        self.discover()?;
        if !self.has_commits()? {
            return Ok(Vec::new());
        }

        let subjects = match self.latest_tag()? {
            Some(tag) => {
                let range = format!("{tag}..HEAD");
                self.lines(&["log", "--pretty=format:%s", &range])?
            }
            None => {
                let count = fallback_count.to_string();
                self.lines(&["log", "--pretty=format:%s", "-n", &count])?
            }
        };

        trace!(count = subjects.len(), "collected commit subjects");
        Ok(subjects)
    }
}

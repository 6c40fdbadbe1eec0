// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for changebump.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, GitConfig, ReleaseConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::LogLevel;

/// Default number of commits read when no tag is reachable from HEAD.
pub const DEFAULT_FALLBACK_COUNT: usize = 10;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what a release would write without touching any file.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Repository reader settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Commits to read when no tag is reachable from HEAD.
    pub fallback_count: usize,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            fallback_count: DEFAULT_FALLBACK_COUNT,
        }
    }
}

/// Version manifest and changelog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// File holding the version field, relative to the repository.
    pub version_file: PathBuf,
    /// Changelog file, relative to the repository.
    pub changelog_file: PathBuf,
    /// Title written when the changelog does not exist yet.
    pub changelog_title: String,
    /// Release even when the work tree has uncommitted changes.
    pub allow_dirty: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            version_file: PathBuf::from("package.json"),
            changelog_file: PathBuf::from("CHANGELOG.md"),
            changelog_title: "# Changelog".to_string(),
            allow_dirty: false,
        }
    }
}

impl ReleaseConfig {
    /// Version manifest path resolved against the repository directory.
    #[must_use]
    pub fn version_path(&self, repo_dir: &Path) -> PathBuf {
        repo_dir.join(&self.version_file)
    }

    /// Changelog path resolved against the repository directory.
    #[must_use]
    pub fn changelog_path(&self, repo_dir: &Path) -> PathBuf {
        repo_dir.join(&self.changelog_file)
    }
}

// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release command arguments.
//!
//! ```text
//! release [-n N] [--bump major|minor|patch]
//!         [--version-file PATH] [--changelog PATH] [--allow-dirty]
//! ```

use crate::classify::BumpCategory;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `release` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReleaseArgs {
    /// Commits to read when no tag is reachable (overrides git.fallback_count).
    #[arg(short = 'n', long = "count", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,

    /// Forces the bump category instead of the recommended one.
    #[arg(long, value_enum, ignore_case = true, value_name = "CATEGORY")]
    pub bump: Option<BumpCategory>,

    /// Overrides the version manifest path (relative to the repository).
    #[arg(long = "version-file", value_name = "PATH")]
    pub version_file: Option<PathBuf>,

    /// Overrides the changelog path (relative to the repository).
    #[arg(long = "changelog", value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Releases even when tracked files have uncommitted changes.
    #[arg(long = "allow-dirty")]
    pub allow_dirty: bool,
}

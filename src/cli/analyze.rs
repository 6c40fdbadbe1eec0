// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Analyze and status command arguments.

use clap::Args;

/// Arguments for the `analyze` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AnalyzeArgs {
    /// Commits to read when no tag is reachable (overrides git.fallback_count).
    #[arg(short = 'n', long = "count", value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub count: Option<u64>,

    /// Prints the recommendation as JSON.
    #[arg(long)]
    pub json: bool,
}

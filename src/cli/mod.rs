// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for changebump using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! changebump [global options] <command>
//! version
//! options
//! inis
//! status
//! analyze [-n N] [--json]
//! release [-n N] [--bump CAT] [--version-file P] [--changelog P] [--allow-dirty]
//! ```

pub mod analyze;
pub mod global;
pub mod release;


use crate::cli::analyze::AnalyzeArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::release::ReleaseArgs;
use clap::{Parser, Subcommand};

/// Semantic Version Bump Advisor
///
/// Recommends the next semantic version from a repository's changes.
#[derive(Debug, Parser)]
#[command(
    name = "changebump",
    author,
    version,
    about = "Semantic Version Bump Advisor",
    long_about = "changebump Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads changed files and commit subjects since the last tag,\n\
                  recommends a major, minor or patch bump, and can apply it to\n\
                  a version manifest and a changelog. See\n\
                  `changebump <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, changebump loads `changebump.toml` from the repository\n\
                  directory (see --repo). Additional files can be specified with --ini,\n\
                  those are loaded after it and override its values. CHANGEBUMP_*\n\
                  environment variables and --set come last. Use --no-default-inis\n\
                  to only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by changebump.
    Inis,

    /// Shows branch, dirty state, latest tag and changed files.
    Status,

    /// Recommends a version bump from pending changes.
    Analyze(AnalyzeArgs),

    /// Bumps the version manifest and prepends a changelog section.
    Release(ReleaseArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands and config loading for changebump.

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::error::Result;
use anyhow::Context;

/// Assemble the config sources named by the global options, in priority order.
///
/// # Errors
///
/// Returns an error if a `--set` or flag override is malformed.
pub fn config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(global.repo.join(DEFAULT_CONFIG_FILE));
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);

    for assignment in global.to_config_overrides() {
        loader = loader
            .set_assignment(&assignment)
            .with_context(|| format!("invalid override '{assignment}'"))?;
    }
    Ok(loader)
}

/// Load and validate the effective configuration.
///
/// # Errors
///
/// Returns an error if any source is missing, malformed, or fails validation.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    config_loader(global)?
        .build()
        .context("failed to load configuration")
}

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_inis_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}

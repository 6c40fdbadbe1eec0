// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for changebump.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. changebump.toml (repository dir)
//! 3. --ini files
//! 4. CHANGEBUMP_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CHANGEBUMP_GLOBAL__DRY=true           → global.dry = true
//! CHANGEBUMP_GIT__FALLBACK_COUNT=25     → git.fallback_count = 25
//! CHANGEBUMP_RELEASE__VERSION_FILE=x    → release.version_file = "x"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{BumpResult, ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, ReleaseConfig};

/// Default configuration file name, looked up in the repository directory.
pub const DEFAULT_CONFIG_FILE: &str = "changebump.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CHANGEBUMP";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Repository reader options.
    pub git: GitConfig,
    /// Release writer options.
    pub release: ReleaseConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use changebump::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("changebump.toml")
    ///     .with_env_prefix("CHANGEBUMP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check value constraints the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if `git.fallback_count` is zero or
    /// `release.changelog_title` is not a top-level Markdown heading.
    pub fn validate(&self) -> BumpResult<()> {
        if self.git.fallback_count == 0 {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "fallback_count".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }

        if !self.release.changelog_title.starts_with("# ") {
            return Err(ConfigError::InvalidValue {
                section: "release".to_string(),
                key: "changelog_title".to_string(),
                message: format!(
                    "must be a top-level heading starting with '# ', got '{}'",
                    self.release.changelog_title
                ),
            }
            .into());
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("global.dry".to_string(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "git.fallback_count".to_string(),
            self.git.fallback_count.to_string(),
        );
        options.insert(
            "release.version_file".to_string(),
            self.release.version_file.display().to_string(),
        );
        options.insert(
            "release.changelog_file".to_string(),
            self.release.changelog_file.display().to_string(),
        );
        options.insert(
            "release.changelog_title".to_string(),
            self.release.changelog_title.clone(),
        );
        options.insert(
            "release.allow_dirty".to_string(),
            self.release.allow_dirty.to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

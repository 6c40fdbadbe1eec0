// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use changebump::config::Config;
use changebump::config::loader::ConfigLoader;
use std::path::PathBuf;

fn pretty(config: &Config) -> String {
    serde_json::to_string_pretty(config).unwrap()
}

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_is_default() {
    let config = Config::parse("").unwrap();
    insta::assert_snapshot!(pretty(&config), @r##"
    {
      "global": {
        "dry": false,
        "output_log_level": 3,
        "file_log_level": 5
      },
      "git": {
        "fallback_count": 10
      },
      "release": {
        "version_file": "package.json",
        "changelog_file": "CHANGELOG.md",
        "changelog_title": "# Changelog",
        "allow_dirty": false
      }
    }
    "##);
}

#[test]
fn config_parse_rust_project() {
    let toml = r##"
[global]
output_log_level = 4
log_file = "changebump.log"

[release]
version_file = "Cargo.toml"
changelog_title = "# Release Notes"
"##;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level.as_u8(), 4);
    assert_eq!(config.global.log_file, Some(PathBuf::from("changebump.log")));
    assert_eq!(config.release.version_file, PathBuf::from("Cargo.toml"));
    assert_eq!(config.release.changelog_title, "# Release Notes");
    assert_eq!(config.release.changelog_file, PathBuf::from("CHANGELOG.md"));
}

#[test]
fn config_parse_unknown_section_fails() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

#[test]
fn config_parse_invalid_toml_fails() {
    assert!(Config::parse("[git\nfallback_count = 1").is_err());
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("changebump.toml");
    std::fs::write(&path, "[git]\nfallback_count = 42\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.git.fallback_count, 42);
}

#[test]
fn config_later_files_override_earlier() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(&base, "[git]\nfallback_count = 5\n[release]\nallow_dirty = true\n").unwrap();
    std::fs::write(&local, "[git]\nfallback_count = 6\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file_optional(&local)
        .add_toml_file_optional(temp.path().join("missing.toml"));
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.git.fallback_count, 6);
    assert!(config.release.allow_dirty);
}

#[test]
fn config_format_options_sorted() {
    let keys: Vec<String> = Config::default()
        .format_options()
        .iter()
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert!(keys.contains(&"release.changelog_title".to_string()));
}

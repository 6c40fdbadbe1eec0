// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::analyze::{effective_fallback_count, format_recommendation, recommend};
use super::config::{config_loader, load_config};
use super::open_repository;
use super::release::prepare_release;
use super::status::StatusReport;
use crate::classify::BumpCategory;
use crate::cli::global::GlobalOptions;
use crate::cli::release::ReleaseArgs;
use crate::config::Config;
use crate::error::{BumpError, BumpResult, GitError};
use crate::git::RepositoryQuery;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

struct FakeRepo {
    branch: &'static str,
    dirty: bool,
    tag: Option<&'static str>,
    files: &'static [&'static str],
    subjects: &'static [&'static str],
}

impl Default for FakeRepo {
    fn default() -> Self {
        Self {
            branch: "main",
            dirty: false,
            tag: None,
            files: &[],
            subjects: &[],
        }
    }
}

impl RepositoryQuery for FakeRepo {
    fn is_repository(&self) -> bool {
        true
    }

    fn current_branch_name(&self) -> BumpResult<String> {
        Ok(self.branch.to_string())
    }

    fn has_uncommitted_changes(&self) -> BumpResult<bool> {
        Ok(self.dirty)
    }

    fn changed_files(&self) -> BumpResult<BTreeSet<String>> {
        Ok(self.files.iter().map(|f| (*f).to_string()).collect())
    }

    fn latest_tag(&self) -> BumpResult<Option<String>> {
        Ok(self.tag.map(str::to_string))
    }

    fn recent_commit_subjects(&self, fallback_count: usize) -> BumpResult<Vec<String>> {
        Ok(self
            .subjects
            .iter()
            .take(fallback_count)
            .map(|s| (*s).to_string())
            .collect())
    }
}

// --- status ---

#[test]
fn test_status_report_lines() {
    let repo = FakeRepo {
        dirty: true,
        tag: Some("v1.4.0"),
        files: &["src/b.ts", "src/a.ts"],
        ..FakeRepo::default()
    };
    let report = StatusReport::collect(&repo).unwrap();
    insta::assert_snapshot!(report.format_lines().join("\n"), @r"
    branch:  main
    dirty:   yes
    tag:     v1.4.0
    changed: 2
      src/a.ts
      src/b.ts
    ");
}

#[test]
fn test_status_report_detached_without_tag() {
    let repo = FakeRepo {
        branch: "",
        ..FakeRepo::default()
    };
    let lines = StatusReport::collect(&repo).unwrap().format_lines();
    assert_eq!(lines[0], "branch:  (detached)");
    assert_eq!(lines[2], "tag:     (none)");
    assert_eq!(lines[3], "changed: 0");
}

// --- analyze ---

#[test]
fn test_effective_fallback_count() {
    let config = Config::default();
    assert_eq!(effective_fallback_count(None, &config), 10);
    assert_eq!(effective_fallback_count(Some(3), &config), 3);
}

#[test]
fn test_recommend_respects_fallback_count() {
    let repo = FakeRepo {
        subjects: &["fix: a", "feat: b"],
        ..FakeRepo::default()
    };
    assert_eq!(
        recommend(&repo, 1).unwrap().bump_category(),
        BumpCategory::Patch
    );
    assert_eq!(
        recommend(&repo, 10).unwrap().bump_category(),
        BumpCategory::Minor
    );
}

#[test]
fn test_format_recommendation() {
    let repo = FakeRepo {
        files: &["src/foo.ts"],
        subjects: &["fix: null pointer", "chore: bump deps"],
        ..FakeRepo::default()
    };
    let rec = recommend(&repo, 10).unwrap();
    insta::assert_snapshot!(format_recommendation(&rec).join("\n"), @r"
    bump: patch (Patch Changes)
    based on 2 commit(s) and 1 changed file(s)

    - Update source code and functionality
    - Fix bugs and resolve issues
    - General maintenance and updates
    ");
}

// --- release ---

#[test]
fn test_prepare_release_refuses_dirty_tree() {
    let repo = FakeRepo {
        dirty: true,
        ..FakeRepo::default()
    };
    let err = prepare_release(&repo, Path::new("/work"), &ReleaseArgs::default(), &Config::default())
        .unwrap_err();
    assert!(err.to_string().contains("--allow-dirty"));
}

#[test]
fn test_prepare_release_dirty_allowed_by_flag_or_config() {
    let repo = FakeRepo {
        dirty: true,
        ..FakeRepo::default()
    };
    let args = ReleaseArgs {
        allow_dirty: true,
        ..ReleaseArgs::default()
    };
    assert!(prepare_release(&repo, Path::new("/work"), &args, &Config::default()).is_ok());

    let mut config = Config::default();
    config.release.allow_dirty = true;
    assert!(prepare_release(&repo, Path::new("/work"), &ReleaseArgs::default(), &config).is_ok());
}

#[test]
fn test_prepare_release_paths_and_override() {
    let repo = FakeRepo {
        subjects: &["fix: a"],
        ..FakeRepo::default()
    };
    let args = ReleaseArgs {
        bump: Some(BumpCategory::Major),
        version_file: Some(PathBuf::from("Cargo.toml")),
        ..ReleaseArgs::default()
    };
    let plan = prepare_release(&repo, Path::new("/work"), &args, &Config::default()).unwrap();

    assert_eq!(plan.version_file(), Path::new("/work/Cargo.toml"));
    assert_eq!(plan.changelog_file(), Path::new("/work/CHANGELOG.md"));
    assert_eq!(plan.recommendation().bump_category(), BumpCategory::Major);
    assert_eq!(
        plan.recommendation().change_category_label(),
        "Major Changes"
    );
    assert_eq!(
        plan.recommendation().change_descriptions(),
        ["Fix bugs and resolve issues"]
    );
}

#[test]
fn test_open_repository_outside_work_tree() {
    let temp = temp_dir();
    let err = open_repository(temp.path()).unwrap_err();
    assert!(
        matches!(err, BumpError::Git(ref inner) if matches!(**inner, GitError::RepositoryUnavailable { .. }))
    );
}

// --- config loading ---

#[test]
fn test_config_loader_reads_repo_file() {
    let temp = temp_dir();
    std::fs::write(
        temp.path().join("changebump.toml"),
        "[git]\nfallback_count = 7\n",
    )
    .unwrap();
    let global = GlobalOptions {
        repo: temp.path().to_path_buf(),
        ..GlobalOptions::default()
    };

    let loader = config_loader(&global).unwrap();
    assert_eq!(loader.loaded_files().len(), 1);
    assert_eq!(loader.build().unwrap().git.fallback_count, 7);
}

#[test]
fn test_config_loader_no_default_inis() {
    let temp = temp_dir();
    std::fs::write(
        temp.path().join("changebump.toml"),
        "[git]\nfallback_count = 7\n",
    )
    .unwrap();
    let global = GlobalOptions {
        repo: temp.path().to_path_buf(),
        no_default_inis: true,
        ..GlobalOptions::default()
    };

    let loader = config_loader(&global).unwrap();
    assert!(loader.loaded_files().is_empty());
    assert_eq!(loader.build().unwrap().git.fallback_count, 10);
}

#[test]
fn test_load_config_precedence() {
    let temp = temp_dir();
    std::fs::write(
        temp.path().join("changebump.toml"),
        "[git]\nfallback_count = 7\n[release]\nversion_file = \"Cargo.toml\"\n",
    )
    .unwrap();
    let extra = temp.path().join("extra.toml");
    std::fs::write(&extra, "[git]\nfallback_count = 8\n").unwrap();

    let global = GlobalOptions {
        repo: temp.path().to_path_buf(),
        inis: vec![extra],
        options: vec!["git.fallback_count=9".to_string()],
        log_level: Some(1),
        dry: true,
        ..GlobalOptions::default()
    };

    let config = load_config(&global).unwrap();
    assert_eq!(config.git.fallback_count, 9);
    assert_eq!(config.release.version_file, PathBuf::from("Cargo.toml"));
    assert_eq!(config.global.output_log_level.as_u8(), 1);
    assert_eq!(config.global.file_log_level.as_u8(), 1);
    assert!(config.global.dry);
}

#[test]
fn test_load_config_missing_ini_fails() {
    let temp = temp_dir();
    let global = GlobalOptions {
        repo: temp.path().to_path_buf(),
        inis: vec![temp.path().join("absent.toml")],
        ..GlobalOptions::default()
    };
    assert!(load_config(&global).is_err());
}

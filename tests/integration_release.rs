// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the release command.
//!
//! Runs the full reader, classifier and writer pipeline against temporary
//! repositories.

use changebump::classify::BumpCategory;
use changebump::cli::release::ReleaseArgs;
use changebump::cmd::open_repository;
use changebump::cmd::release::run_release_command;
use changebump::config::Config;
use changebump::release::increment;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn run_git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(["-c", "commit.gpgsign=false", "-c", "tag.gpgsign=false"])
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .output()
        .expect("failed to run git");
    assert!(output.status.success(), "git {args:?} failed");
}

/// Repository with `package.json` at 1.4.2, tagged, plus one commit per subject.
fn fixture(subjects: &[&str]) -> TempDir {
    let temp = temp_dir();
    let repo = temp.path();
    run_git(&["init", "--quiet"], repo);
    run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], repo);
    fs::write(
        repo.join("package.json"),
        "{\n  \"name\": \"fixture\",\n  \"version\": \"1.4.2\"\n}\n",
    )
    .unwrap();
    fs::write(repo.join("CHANGELOG.md"), "# Changelog\n\n## 1.4.2\n\n### Patch Changes\n\n- Fix bugs and resolve issues\n").unwrap();
    run_git(&["add", "."], repo);
    run_git(&["commit", "--quiet", "-m", "chore: release 1.4.2"], repo);
    run_git(&["tag", "v1.4.2"], repo);

    for (i, subject) in subjects.iter().enumerate() {
        fs::write(repo.join(format!("src{i}.ts")), "export {};").unwrap();
        run_git(&["add", "."], repo);
        run_git(&["commit", "--quiet", "-m", subject], repo);
    }
    temp
}

#[test]
fn increment_scenarios() {
    assert_eq!(increment("1.2.3", BumpCategory::Major).unwrap(), "2.0.0");
    assert_eq!(increment("1.2.3", BumpCategory::Minor).unwrap(), "1.3.0");
    assert_eq!(increment("1.2.3", BumpCategory::Patch).unwrap(), "1.2.4");
    assert_eq!(increment("0.0.1", BumpCategory::Patch).unwrap(), "0.0.2");
}

#[tokio::test]
async fn release_applies_recommended_bump() {
    let temp = fixture(&["feat(ui): add dark mode", "fix: crash on save"]);
    let repo = temp.path();
    let backend = open_repository(repo).unwrap();

    let outcome = run_release_command(&backend, repo, &ReleaseArgs::default(), &Config::default())
        .await
        .unwrap();

    assert_eq!(outcome.previous.to_string(), "1.4.2");
    assert_eq!(outcome.next.to_string(), "1.5.0");
    assert!(fs::read_to_string(repo.join("package.json"))
        .unwrap()
        .contains("\"version\": \"1.5.0\""));
    assert_eq!(
        fs::read_to_string(repo.join("CHANGELOG.md")).unwrap(),
        "# Changelog\n\n## 1.5.0\n\n### Minor Changes\n\n- Fix bugs and resolve issues\n- Add new features and functionality\n\n## 1.4.2\n\n### Patch Changes\n\n- Fix bugs and resolve issues\n"
    );
}

#[tokio::test]
async fn release_refuses_dirty_work_tree() {
    let temp = fixture(&["fix: a"]);
    let repo = temp.path();
    fs::write(repo.join("src0.ts"), "export const dirty = 1;").unwrap();
    let backend = open_repository(repo).unwrap();

    let err = run_release_command(&backend, repo, &ReleaseArgs::default(), &Config::default())
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("uncommitted changes"));
    assert!(fs::read_to_string(repo.join("package.json"))
        .unwrap()
        .contains("1.4.2"));
}

#[tokio::test]
async fn release_dry_run_leaves_files_untouched() {
    let temp = fixture(&["BREAKING CHANGE: drop v1 config"]);
    let repo = temp.path();
    let before = fs::read_to_string(repo.join("CHANGELOG.md")).unwrap();
    let backend = open_repository(repo).unwrap();

    let mut config = Config::default();
    config.global.dry = true;
    let outcome = run_release_command(&backend, repo, &ReleaseArgs::default(), &config)
        .await
        .unwrap();

    assert_eq!(outcome.next.to_string(), "2.0.0");
    assert!(outcome.dry_run);
    assert_eq!(fs::read_to_string(repo.join("CHANGELOG.md")).unwrap(), before);
}

#[tokio::test]
async fn release_with_forced_bump_and_custom_paths() {
    let temp = fixture(&["docs: typo"]);
    let repo = temp.path();
    fs::write(
        repo.join("Cargo.toml"),
        "[package]\nname = \"fixture\"\nversion = \"0.3.9\"\n",
    )
    .unwrap();
    run_git(&["add", "Cargo.toml"], repo);
    run_git(&["commit", "--quiet", "-m", "build: add cargo manifest"], repo);
    let backend = open_repository(repo).unwrap();

    let args = ReleaseArgs {
        bump: Some(BumpCategory::Minor),
        version_file: Some("Cargo.toml".into()),
        changelog: Some("docs/CHANGES.md".into()),
        ..ReleaseArgs::default()
    };
    let outcome = run_release_command(&backend, repo, &args, &Config::default())
        .await
        .unwrap();

    assert_eq!(outcome.next.to_string(), "0.4.0");
    assert!(outcome.changelog_created);
    assert!(fs::read_to_string(repo.join("Cargo.toml"))
        .unwrap()
        .contains("version = \"0.4.0\""));
    let changelog = fs::read_to_string(repo.join("docs/CHANGES.md")).unwrap();
    assert!(changelog.starts_with("# Changelog\n\n## 0.4.0\n\n### Minor Changes\n\n"));
    assert!(changelog.contains("- Update documentation\n"));
}

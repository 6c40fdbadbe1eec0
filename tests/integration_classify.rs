// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the change classifier.
//!
//! Exercises the public classification API with realistic commit histories.

use changebump::classify::rules::{BREAKING_DESCRIPTION, FALLBACK_DESCRIPTION};
use changebump::classify::{BumpCategory, classify};
use changebump::git::ChangeSnapshot;

fn snapshot(files: &[&str], subjects: &[&str]) -> ChangeSnapshot {
    ChangeSnapshot::new(files.iter().copied(), subjects.iter().copied())
}

#[test]
fn empty_input_law() {
    let rec = classify(ChangeSnapshot::default());
    assert_eq!(rec.bump_category(), BumpCategory::Patch);
    assert_eq!(rec.change_category_label(), "Patch Changes");
    assert_eq!(rec.change_descriptions(), [FALLBACK_DESCRIPTION]);
}

#[test]
fn breaking_change_any_case_is_major() {
    for subject in [
        "BREAKING CHANGE: config moved",
        "breaking change: config moved",
        "docs: Breaking Change notes",
    ] {
        let rec = classify(snapshot(&[], &["feat: a", "feature: b", subject]));
        assert_eq!(rec.bump_category(), BumpCategory::Major, "subject: {subject}");
    }
}

#[test]
fn realistic_feature_release() {
    let rec = classify(snapshot(
        &[
            "src/components/Button.tsx",
            "src/components/Button.module.scss",
            "package.json",
            "pnpm-lock.yaml",
            "src/components/Button.test.tsx",
        ],
        &[
            "feat(button): add loading state",
            "style: tweak button padding",
            "test: cover loading state",
            "chore(deps): update react",
            "Merge pull request #42 from team/button",
        ],
    ));

    assert_eq!(rec.bump_category(), BumpCategory::Minor);
    assert_eq!(
        rec.change_descriptions(),
        [
            "Update source code and functionality",
            "Update styling and design",
            "Update dependencies and package configuration",
            "Improve testing coverage",
            "Add new features and functionality",
            "Improve visual design and user experience",
            "General maintenance and updates",
        ]
    );
}

#[test]
fn realistic_breaking_release() {
    let rec = classify(snapshot(
        &["src/api/v2.rs", "README.md"],
        &[
            "refactor(api)!: drop v1 endpoints",
            "docs: migration guide",
            "fix: CVE-2025-0001 header injection",
        ],
    ));

    assert_eq!(rec.bump_category(), BumpCategory::Major);
    assert_eq!(rec.change_category_label(), "Major Changes");
    assert_eq!(
        rec.change_descriptions(),
        [
            BREAKING_DESCRIPTION,
            "Update source code and functionality",
            "Update documentation",
            "Fix bugs and resolve issues",
        ]
    );
}

#[test]
fn recommendation_keeps_source_snapshot() {
    let input = snapshot(&["a.py"], &["perf: cache lookups"]);
    let rec = classify(input.clone());
    assert_eq!(rec.source_snapshot(), &input);
}

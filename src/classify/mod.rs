// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Change classifier.
//!
//! ```text
//! ChangeSnapshot
//!      |
//!      +--> subjects --> breaking? --> Major
//!      |                 feature?  --> Minor
//!      |                 else      --> Patch
//!      |
//!      +--> [breaking sentence]            (Major only)
//!      +--> file table   (any-match union)
//!      +--> commit table (first-match-per-line)
//!      +--> fallback                       (if still empty)
//!      |
//!      v
//! VersionBumpRecommendation
//! ```
//!
//! The category decision and the description tables are evaluated
//! independently: a breaking `feat: ...` subject still contributes the
//! feature description.

pub mod rules;


use crate::error::{BumpError, ConfigError};
use crate::git::ChangeSnapshot;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use rules::{BREAKING_DESCRIPTION, FALLBACK_DESCRIPTION, FILE_RULES};

/// Semantic version bump category. Precedence: major > minor > patch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BumpCategory {
    /// Reset minor and patch, increment major.
    Major,
    /// Reset patch, increment minor.
    Minor,
    /// Increment patch only.
    Patch,
}

impl BumpCategory {
    /// Human-readable changelog label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Major => "Major Changes",
            Self::Minor => "Minor Changes",
            Self::Patch => "Patch Changes",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpCategory {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(ConfigError::InvalidValue {
                section: "release".to_string(),
                key: "bump".to_string(),
                message: format!("expected major, minor or patch, got '{s}'"),
            }
            .into()),
        }
    }
}

/// Classifier output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionBumpRecommendation {
    bump_category: BumpCategory,
    change_category_label: &'static str,
    change_descriptions: Vec<String>,
    source_snapshot: ChangeSnapshot,
}

impl VersionBumpRecommendation {
    #[must_use]
    pub const fn bump_category(&self) -> BumpCategory {
        self.bump_category
    }

    #[must_use]
    pub const fn change_category_label(&self) -> &'static str {
        self.change_category_label
    }

    /// Deduplicated, never empty.
    #[must_use]
    pub fn change_descriptions(&self) -> &[String] {
        &self.change_descriptions
    }

    #[must_use]
    pub const fn source_snapshot(&self) -> &ChangeSnapshot {
        &self.source_snapshot
    }

    /// Replace the category, keeping the descriptions. Used for manual overrides.
    #[must_use]
    pub fn with_bump_category(mut self, category: BumpCategory) -> Self {
        self.bump_category = category;
        self.change_category_label = category.label();
        self
    }
}

/// Insertion-ordered description list that drops repeats.
#[derive(Default)]
struct Descriptions {
    seen: HashSet<&'static str>,
    ordered: Vec<String>,
}

impl Descriptions {
    fn push(&mut self, description: &'static str) {
        if self.seen.insert(description) {
            self.ordered.push(description.to_string());
        }
    }
}

/// Decide the bump category from commit subjects alone.
#[must_use]
pub fn bump_category_for(subjects: &[String]) -> BumpCategory {
    if subjects.iter().any(|s| rules::is_breaking(s)) {
        BumpCategory::Major
    } else if subjects.iter().any(|s| rules::is_feature(s)) {
        BumpCategory::Minor
    } else {
        BumpCategory::Patch
    }
}

/// Classify a snapshot into a bump recommendation. Never fails.
#[must_use]
pub fn classify(snapshot: ChangeSnapshot) -> VersionBumpRecommendation {
    let subjects = snapshot.recent_commit_subjects();
    let bump_category = bump_category_for(subjects);

    let mut descriptions = Descriptions::default();
    if bump_category == BumpCategory::Major {
        descriptions.push(BREAKING_DESCRIPTION);
    }

    for rule in FILE_RULES {
        if snapshot.changed_files().iter().any(|f| (rule.matches)(f)) {
            trace!(rule = rule.name, "file rule matched");
            descriptions.push(rule.description);
        }
    }

    for subject in subjects {
        if let Some(rule) = rules::first_commit_rule(subject) {
            trace!(subject = %subject, description = rule.description, "commit rule matched");
            descriptions.push(rule.description);
        }
    }

    if descriptions.ordered.is_empty() {
        descriptions.push(FALLBACK_DESCRIPTION);
    }

    debug!(
        category = %bump_category,
        descriptions = descriptions.ordered.len(),
        "classified changes"
    );

    VersionBumpRecommendation {
        bump_category,
        change_category_label: bump_category.label(),
        change_descriptions: descriptions.ordered,
        source_snapshot: snapshot,
    }
}

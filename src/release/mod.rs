// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version manifest and changelog writer.
//!
//! ```text
//! ReleasePlan { version_file, changelog_file, title, recommendation }
//!      |
//!      v
//! apply_release(plan, dry_run)
//!   1. read manifest        -> Version (previous)
//!   2. bump(category)       -> Version (next)
//!   3. rewrite version field
//!   4. render section, insert after "# " title (create file if missing)
//!   5. write both, or log "[DRY-RUN]" and write nothing
//!      |
//!      v
//! ReleaseOutcome { previous, next, section, changelog_created }
//! ```

pub mod changelog;
pub mod manifest;
pub mod version;


use bon::Builder;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::classify::VersionBumpRecommendation;
use crate::error::{BumpResult, FsError};

pub use changelog::{insert_section, new_document, render_section};
pub use version::{Version, increment};

/// Inputs for one release.
#[derive(Debug, Clone, Builder)]
pub struct ReleasePlan {
    #[builder(into)]
    version_file: PathBuf,
    #[builder(into)]
    changelog_file: PathBuf,
    #[builder(into)]
    changelog_title: String,
    recommendation: VersionBumpRecommendation,
}

impl ReleasePlan {
    #[must_use]
    pub fn version_file(&self) -> &Path {
        &self.version_file
    }

    #[must_use]
    pub fn changelog_file(&self) -> &Path {
        &self.changelog_file
    }

    #[must_use]
    pub const fn recommendation(&self) -> &VersionBumpRecommendation {
        &self.recommendation
    }
}

/// What [`apply_release`] did, or would have done in dry-run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutcome {
    pub previous: Version,
    pub next: Version,
    pub version_file: PathBuf,
    pub changelog_file: PathBuf,
    /// Rendered section inserted into the changelog.
    pub section: String,
    /// The changelog did not exist and was (or would be) created.
    pub changelog_created: bool,
    pub dry_run: bool,
}

fn io_error(path: &Path, source: std::io::Error) -> FsError {
    if source.kind() == ErrorKind::NotFound {
        FsError::NotFound(path.display().to_string())
    } else {
        FsError::IoError {
            path: path.display().to_string(),
            source,
        }
    }
}

async fn read_file(path: &Path) -> BumpResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| io_error(path, e).into())
}

async fn read_optional(path: &Path) -> BumpResult<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error(path, e).into()),
    }
}

async fn write_file(path: &Path, content: &str) -> BumpResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| io_error(parent, e))?;
    }
    tokio::fs::write(path, content)
        .await
        .map_err(|e| io_error(path, e).into())
}

/// Bump the manifest version and prepend a changelog section.
///
/// In dry-run mode both files are read and the new content is computed, but
/// nothing is written.
///
/// # Errors
///
/// Returns an error if:
/// - The version manifest is missing or has no valid version field.
/// - The bump overflows.
/// - Reading or writing either file fails.
pub async fn apply_release(plan: &ReleasePlan, dry_run: bool) -> BumpResult<ReleaseOutcome> {
    let manifest_text = read_file(&plan.version_file).await?;
    let previous = manifest::read_version(&manifest_text, &plan.version_file)?;
    let category = plan.recommendation.bump_category();
    let next = previous.bump(category)?;
    let updated_manifest = manifest::replace_version(&manifest_text, &plan.version_file, &next)?;

    let existing = read_optional(&plan.changelog_file).await?;
    let changelog_created = existing.is_none();
    let document = existing.unwrap_or_else(|| new_document(&plan.changelog_title));
    let section = render_section(&next, &plan.recommendation);
    let updated_changelog = insert_section(&document, &section);

    if dry_run {
        info!(
            path = %plan.version_file.display(),
            from = %previous,
            to = %next,
            "[DRY-RUN] would update version"
        );
        info!(
            path = %plan.changelog_file.display(),
            created = changelog_created,
            "[DRY-RUN] would update changelog"
        );
    } else {
        write_file(&plan.version_file, &updated_manifest).await?;
        info!(path = %plan.version_file.display(), from = %previous, to = %next, "Updated version");

        write_file(&plan.changelog_file, &updated_changelog).await?;
        info!(
            path = %plan.changelog_file.display(),
            created = changelog_created,
            "Updated changelog"
        );
    }

    Ok(ReleaseOutcome {
        previous,
        next,
        version_file: plan.version_file.clone(),
        changelog_file: plan.changelog_file.clone(),
        section,
        changelog_created,
        dry_run,
    })
}

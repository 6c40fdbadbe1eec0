// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release command: classify, then bump the manifest and changelog.
//!
//! ```text
//! dirty? --(no --allow-dirty)--> abort
//!   |
//!   v
//! recommend --> --bump override --> ReleasePlan --> apply_release
//! ```

use std::path::Path;

use tracing::{debug, info};

use super::analyze::{effective_fallback_count, recommend};
use crate::cli::release::ReleaseArgs;
use crate::config::Config;
use crate::error::{Result, bail_out};
use crate::git::RepositoryQuery;
use crate::release::{ReleaseOutcome, ReleasePlan, apply_release};

/// Build the release plan for `repo` from flags and config.
///
/// # Errors
///
/// Returns an error if the work tree is dirty and dirty releases are not
/// allowed, or if repository queries fail.
pub fn prepare_release<Q: RepositoryQuery + ?Sized>(
    query: &Q,
    repo: &Path,
    args: &ReleaseArgs,
    config: &Config,
) -> Result<ReleasePlan> {
    let allow_dirty = args.allow_dirty || config.release.allow_dirty;
    if !allow_dirty && query.has_uncommitted_changes()? {
        return Err(bail_out(
            "work tree has uncommitted changes to tracked files; commit them or pass --allow-dirty",
        )
        .into());
    }

    let fallback_count = effective_fallback_count(args.count, config);
    let mut recommendation = recommend(query, fallback_count)?;
    if let Some(category) = args.bump {
        debug!(
            recommended = %recommendation.bump_category(),
            forced = %category,
            "overriding bump category"
        );
        recommendation = recommendation.with_bump_category(category);
    }

    let version_file = args
        .version_file
        .as_ref()
        .map_or_else(|| config.release.version_path(repo), |p| repo.join(p));
    let changelog_file = args
        .changelog
        .as_ref()
        .map_or_else(|| config.release.changelog_path(repo), |p| repo.join(p));

    Ok(ReleasePlan::builder()
        .version_file(version_file)
        .changelog_file(changelog_file)
        .changelog_title(config.release.changelog_title.clone())
        .recommendation(recommendation)
        .build())
}

/// Main handler for the release command.
///
/// # Errors
///
/// Returns an error if:
/// - The work tree is dirty and `--allow-dirty` was not given.
/// - Repository queries fail.
/// - The version manifest is missing or has no valid version.
/// - Writing the manifest or changelog fails.
pub async fn run_release_command<Q: RepositoryQuery + ?Sized>(
    query: &Q,
    repo: &Path,
    args: &ReleaseArgs,
    config: &Config,
) -> Result<ReleaseOutcome> {
    let plan = prepare_release(query, repo, args, config)?;
    let dry_run = config.global.dry;

    info!(
        category = %plan.recommendation().bump_category(),
        version_file = %plan.version_file().display(),
        changelog = %plan.changelog_file().display(),
        dry_run,
        "Preparing release"
    );

    let outcome = apply_release(&plan, dry_run).await?;

    if outcome.dry_run {
        println!("would release {} -> {}", outcome.previous, outcome.next);
        println!();
        print!("{}", outcome.section);
    } else {
        println!("released {} -> {}", outcome.previous, outcome.next);
    }

    Ok(outcome)
}

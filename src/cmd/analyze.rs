// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Analyze command: snapshot, classify, print.

use anyhow::Context;
use tracing::info;

use crate::classify::{VersionBumpRecommendation, classify};
use crate::cli::analyze::AnalyzeArgs;
use crate::config::Config;
use crate::error::{BumpResult, Result};
use crate::git::{RepositoryQuery, take_snapshot};

/// Fallback count from a `-n` flag, else from config.
#[must_use]
pub fn effective_fallback_count(flag: Option<u64>, config: &Config) -> usize {
    flag.and_then(|n| usize::try_from(n).ok())
        .unwrap_or(config.git.fallback_count)
}

/// Snapshot the repository and classify it.
///
/// # Errors
///
/// Propagates repository query failures.
pub fn recommend<Q: RepositoryQuery + ?Sized>(
    query: &Q,
    fallback_count: usize,
) -> BumpResult<VersionBumpRecommendation> {
    let snapshot = take_snapshot(query, fallback_count)?;
    Ok(classify(snapshot))
}

/// Human-readable recommendation.
#[must_use]
pub fn format_recommendation(recommendation: &VersionBumpRecommendation) -> Vec<String> {
    let snapshot = recommendation.source_snapshot();
    let mut lines = vec![
        format!(
            "bump: {} ({})",
            recommendation.bump_category(),
            recommendation.change_category_label()
        ),
        format!(
            "based on {} commit(s) and {} changed file(s)",
            snapshot.recent_commit_subjects().len(),
            snapshot.changed_files().len()
        ),
        String::new(),
    ];
    lines.extend(
        recommendation
            .change_descriptions()
            .iter()
            .map(|d| format!("- {d}")),
    );
    lines
}

/// Main handler for the analyze command.
///
/// # Errors
///
/// Returns an error if repository queries fail or JSON encoding fails.
pub fn run_analyze_command<Q: RepositoryQuery + ?Sized>(
    query: &Q,
    args: &AnalyzeArgs,
    config: &Config,
) -> Result<()> {
    let fallback_count = effective_fallback_count(args.count, config);
    let recommendation = recommend(query, fallback_count)?;
    info!(category = %recommendation.bump_category(), "Recommended bump");

    if args.json {
        let json = serde_json::to_string_pretty(&recommendation)
            .context("failed to encode recommendation")?;
        println!("{json}");
    } else {
        for line in format_recommendation(&recommendation) {
            println!("{line}");
        }
    }
    Ok(())
}

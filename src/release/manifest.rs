// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version field lookup and in-place rewrite.
//!
//! ```text
//! package.json   "version": "1.2.3"
//! Cargo.toml     version = "1.2.3"        (at line start)
//! ```
//!
//! Only the first field is touched; every other byte is preserved.

use super::version::Version;
use crate::error::{BumpResult, VersionError};
use regex::{Captures, Regex};
use std::ops::Range;
use std::path::Path;
use std::sync::OnceLock;

fn version_field() -> Option<&'static Regex> {
    static FIELD: OnceLock<Option<Regex>> = OnceLock::new();
    FIELD
        .get_or_init(|| {
            Regex::new(r#"(?m)(?:"version"\s*:\s*"(?<json>[^"]*)"|^[ \t]*version[ \t]*=[ \t]*"(?<toml>[^"]*)")"#)
                .ok()
        })
        .as_ref()
}

fn value_range(captures: &Captures<'_>) -> Option<Range<usize>> {
    captures
        .name("json")
        .or_else(|| captures.name("toml"))
        .map(|m| m.range())
}

fn locate(content: &str, path: &Path) -> BumpResult<Range<usize>> {
    version_field()
        .and_then(|re| re.captures(content))
        .and_then(|captures| value_range(&captures))
        .ok_or_else(|| {
            VersionError::NotFound {
                path: path.display().to_string(),
            }
            .into()
        })
}

/// Read the version declared in manifest `content`.
///
/// # Errors
///
/// Returns `VersionError::NotFound` if no version field exists, or
/// `VersionError::Invalid` if its value is not `X.Y.Z`.
pub fn read_version(content: &str, path: &Path) -> BumpResult<Version> {
    content[locate(content, path)?].parse()
}

/// Replace the first version field's value with `version`.
///
/// # Errors
///
/// Returns `VersionError::NotFound` if no version field exists.
pub fn replace_version(content: &str, path: &Path, version: &Version) -> BumpResult<String> {
    let range = locate(content, path)?;
    let mut updated = String::with_capacity(content.len() + 4);
    updated.push_str(&content[..range.start]);
    updated.push_str(&version.to_string());
    updated.push_str(&content[range.end..]);
    Ok(updated)
}

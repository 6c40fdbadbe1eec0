// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Markdown changelog sections.

use super::version::Version;
use crate::classify::VersionBumpRecommendation;
use std::fmt::Write as _;

/// Render one release section.
///
/// ```text
/// ## 1.3.0
///
/// ### Minor Changes
///
/// - Add new features and functionality
/// ```
#[must_use]
pub fn render_section(version: &Version, recommendation: &VersionBumpRecommendation) -> String {
    let mut section = format!(
        "## {version}\n\n### {}\n\n",
        recommendation.change_category_label()
    );
    for description in recommendation.change_descriptions() {
        let _ = writeln!(section, "- {description}");
    }
    section
}

/// Byte offset just past the first top-level heading line, if any.
fn after_title(document: &str) -> Option<usize> {
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        if line.starts_with("# ") {
            return Some(offset + line.len());
        }
        offset += line.len();
    }
    None
}

/// Insert `section` right after the first `# ` heading, keeping every other
/// byte as it was. Without such a heading the section is prepended.
///
/// The blank lines between the title and the previous content are kept, and
/// the section adopts the document's line ending.
#[must_use]
pub fn insert_section(document: &str, section: &str) -> String {
    let eol = if document.contains("\r\n") { "\r\n" } else { "\n" };
    let section = section.trim_end_matches('\n').lines().collect::<Vec<_>>().join(eol);

    let Some(split) = after_title(document) else {
        return if document.is_empty() {
            format!("{section}{eol}")
        } else {
            format!("{section}{eol}{eol}{document}")
        };
    };

    let (head, tail) = document.split_at(split);
    let rest = tail.trim_start_matches(['\n', '\r']);
    let separator = &tail[..tail.len() - rest.len()];

    let mut out = String::with_capacity(document.len() + section.len() + 4 * eol.len());
    out.push_str(head);
    if !head.ends_with('\n') {
        out.push_str(eol);
    }
    out.push_str(eol);
    out.push_str(&section);
    out.push_str(eol);
    if !rest.is_empty() {
        out.push_str(if separator.is_empty() { eol } else { separator });
        out.push_str(rest);
    }
    out
}

/// Fresh changelog containing only `title`.
#[must_use]
pub fn new_document(title: &str) -> String {
    format!("{title}\n")
}

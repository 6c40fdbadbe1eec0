// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered rule tables.
//!
//! ```text
//! category    BREAKING_PATTERNS  -> major
//!             FEATURE_PATTERNS   -> minor     (only if no breaking match)
//!
//! file table   any-match union     each entry once, however many files hit
//! commit table first-match-per-line   one entry per subject, seen-set
//! ```
//!
//! Table order is evaluation order.

use regex::Regex;
use std::sync::OnceLock;

/// Description added when any subject is breaking.
pub const BREAKING_DESCRIPTION: &str = "Introduce breaking changes that require migration";

/// Description used when no rule contributed anything.
pub const FALLBACK_DESCRIPTION: &str = "General improvements and bug fixes";

/// Explicit token, `type!:` / `type(scope)!:` header, or the bare word.
const BREAKING_PATTERNS: &[&str] = &[
    r"(?i)BREAKING[ -]CHANGE",
    r"^[A-Za-z]+(?:\([^)]*\))?!:",
    r"(?i)\bbreaking\b",
];

const FEATURE_PATTERNS: &[&str] = &[
    r"(?i)^(?:feat|feature|add)(?:\([^)]*\))?:",
    r"(?i)\bnew features?",
    r"(?i)\benhancements?",
];

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().filter_map(|p| Regex::new(p).ok()).collect()
}

fn breaking_patterns() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| compile_all(BREAKING_PATTERNS))
}

fn feature_patterns() -> &'static [Regex] {
    static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
    COMPILED.get_or_init(|| compile_all(FEATURE_PATTERNS))
}

/// Check a commit subject against the breaking-change patterns.
#[must_use]
pub fn is_breaking(subject: &str) -> bool {
    breaking_patterns().iter().any(|re| re.is_match(subject))
}

/// Check a commit subject against the feature patterns.
#[must_use]
pub fn is_feature(subject: &str) -> bool {
    feature_patterns().iter().any(|re| re.is_match(subject))
}

// --- File table ---

/// Path-shape predicate paired with the description it contributes.
#[derive(Debug, Clone, Copy)]
pub struct FileRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub description: &'static str,
}

const SOURCE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "mjs", "cjs", "vue", "svelte", "rs", "py", "go", "java", "kt", "c",
    "cc", "cpp", "h", "hpp", "cs", "rb", "php", "swift",
];

const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass", "less", "styl"];

const MANIFEST_NAMES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.toml",
    "Cargo.lock",
    "pyproject.toml",
    "go.mod",
];

fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn extension(path: &str) -> Option<String> {
    let name = file_name(path);
    let (stem, ext) = name.rsplit_once('.')?;
    (!stem.is_empty()).then(|| ext.to_ascii_lowercase())
}

fn is_source(path: &str) -> bool {
    extension(path).is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext.as_str()))
}

fn is_stylesheet(path: &str) -> bool {
    extension(path).is_some_and(|ext| STYLE_EXTENSIONS.contains(&ext.as_str()))
}

fn is_manifest(path: &str) -> bool {
    MANIFEST_NAMES.contains(&file_name(path))
}

fn is_tsconfig(path: &str) -> bool {
    let name = file_name(path);
    name.starts_with("tsconfig") && name.ends_with(".json")
}

fn is_readme(path: &str) -> bool {
    file_name(path).to_ascii_lowercase().starts_with("readme")
}

fn is_test(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.contains("test") || lower.contains("spec")
}

fn is_config(path: &str) -> bool {
    path.to_ascii_lowercase().contains("config")
}

/// File table: every entry whose predicate matches any path contributes once.
pub const FILE_RULES: &[FileRule] = &[
    FileRule {
        name: "source",
        matches: is_source,
        description: "Update source code and functionality",
    },
    FileRule {
        name: "stylesheet",
        matches: is_stylesheet,
        description: "Update styling and design",
    },
    FileRule {
        name: "manifest",
        matches: is_manifest,
        description: "Update dependencies and package configuration",
    },
    FileRule {
        name: "tsconfig",
        matches: is_tsconfig,
        description: "Update TypeScript configuration",
    },
    FileRule {
        name: "readme",
        matches: is_readme,
        description: "Update documentation",
    },
    FileRule {
        name: "test",
        matches: is_test,
        description: "Improve testing coverage",
    },
    FileRule {
        name: "config",
        matches: is_config,
        description: "Update configuration files",
    },
];

// --- Commit table ---

/// Conventional-commit types plus free-standing keywords for one description.
///
/// `types` match only as a header (`type:` or `type(scope):`, no `!`);
/// `keywords` match as whole words anywhere, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitRule {
    pub types: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

/// Commit table: for each subject only the first matching entry contributes.
pub const COMMIT_RULES: &[CommitRule] = &[
    CommitRule {
        types: &["fix"],
        keywords: &[],
        description: "Fix bugs and resolve issues",
    },
    CommitRule {
        types: &["feat", "feature", "add"],
        keywords: &[],
        description: "Add new features and functionality",
    },
    CommitRule {
        types: &["style"],
        keywords: &["css", "design", "ui", "ux"],
        description: "Improve visual design and user experience",
    },
    CommitRule {
        types: &["perf"],
        keywords: &["performance", "optimization", "speed"],
        description: "Enhance performance and optimization",
    },
    CommitRule {
        types: &["refactor"],
        keywords: &["cleanup", "reorganize"],
        description: "Refactor code for better maintainability",
    },
    CommitRule {
        types: &["docs"],
        keywords: &["documentation", "readme"],
        description: "Update documentation",
    },
    CommitRule {
        types: &["test"],
        keywords: &["testing", "spec"],
        description: "Improve testing coverage",
    },
    CommitRule {
        types: &["chore"],
        keywords: &["maintenance", "update"],
        description: "General maintenance and updates",
    },
    CommitRule {
        types: &[],
        keywords: &["security", "vulnerability", "cve"],
        description: "Address security improvements",
    },
];

/// A [`CommitRule`] with its header and keyword regexes built.
#[derive(Debug)]
pub struct CompiledCommitRule {
    pub rule: CommitRule,
    header: Option<Regex>,
    keyword: Option<Regex>,
}

impl CompiledCommitRule {
    fn new(rule: CommitRule) -> Self {
        let alternation = |terms: &[&str]| -> Option<String> {
            (!terms.is_empty()).then(|| {
                terms
                    .iter()
                    .map(|t| regex::escape(t))
                    .collect::<Vec<_>>()
                    .join("|")
            })
        };

        let header = alternation(rule.types)
            .and_then(|alt| Regex::new(&format!(r"(?i)^(?:{alt})(?:\([^)]*\))?:")).ok());
        let keyword = alternation(rule.keywords)
            .and_then(|alt| Regex::new(&format!(r"(?i)\b(?:{alt})\b")).ok());

        Self {
            rule,
            header,
            keyword,
        }
    }

    #[must_use]
    pub fn matches(&self, subject: &str) -> bool {
        self.header.as_ref().is_some_and(|re| re.is_match(subject))
            || self.keyword.as_ref().is_some_and(|re| re.is_match(subject))
    }
}

/// Commit table in evaluation order, compiled once.
pub fn commit_rules() -> &'static [CompiledCommitRule] {
    static COMPILED: OnceLock<Vec<CompiledCommitRule>> = OnceLock::new();
    COMPILED.get_or_init(|| COMMIT_RULES.iter().copied().map(CompiledCommitRule::new).collect())
}

/// First commit-table entry matching `subject`.
#[must_use]
pub fn first_commit_rule(subject: &str) -> Option<&'static CommitRule> {
    commit_rules()
        .iter()
        .find(|compiled| compiled.matches(subject))
        .map(|compiled| &compiled.rule)
}

#[cfg(test)]
pub(super) fn compiled_pattern_counts() -> (usize, usize) {
    (breaking_patterns().len(), feature_patterns().len())
}

#[cfg(test)]
pub(super) const PATTERN_COUNTS: (usize, usize) = (BREAKING_PATTERNS.len(), FEATURE_PATTERNS.len());

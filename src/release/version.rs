// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `MAJOR.MINOR.PATCH` versions.

use crate::classify::BumpCategory;
use crate::error::{BumpResult, VersionError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Plain semantic version. No pre-release or build metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Next version for `category`; lower components reset to zero.
    ///
    /// # Errors
    ///
    /// Returns `VersionError::Overflow` if the incremented component exceeds `u64`.
    pub fn bump(self, category: BumpCategory) -> BumpResult<Self> {
        let overflow = || VersionError::Overflow {
            input: self.to_string(),
        };
        let next = match category {
            BumpCategory::Major => Self::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            BumpCategory::Minor => Self::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpCategory::Patch => Self::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(next)
    }
}

fn parse_component(input: &str, part: &str, name: &str) -> BumpResult<u64> {
    let invalid = |reason: String| VersionError::Invalid {
        input: input.to_string(),
        reason,
    };

    if part.is_empty() {
        return Err(invalid(format!("{name} component is empty")).into());
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("{name} component '{part}' is not a number")).into());
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(invalid(format!("{name} component '{part}' has a leading zero")).into());
    }
    part.parse()
        .map_err(|_| invalid(format!("{name} component '{part}' is too large")).into())
}

impl FromStr for Version {
    type Err = crate::error::BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(VersionError::Invalid {
                input: s.to_string(),
                reason: "expected MAJOR.MINOR.PATCH".to_string(),
            }
            .into());
        };

        Ok(Self {
            major: parse_component(s, major, "major")?,
            minor: parse_component(s, minor, "minor")?,
            patch: parse_component(s, patch, "patch")?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse `text`, bump it by `category`, and format the result.
///
/// # Errors
///
/// Returns a `VersionError` if `text` is not a plain `X.Y.Z` version or the
/// increment overflows.
///
/// # Example
///
/// ```
/// use changebump::classify::BumpCategory;
/// use changebump::release::increment;
///
/// assert_eq!(increment("1.2.3", BumpCategory::Minor)?, "1.3.0");
/// # Ok::<(), changebump::error::BumpError>(())
/// ```
pub fn increment(text: &str, category: BumpCategory) -> BumpResult<String> {
    Ok(text.parse::<Version>()?.bump(category)?.to_string())
}

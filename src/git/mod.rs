// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository change reader.
//!
//! ```text
//!      take_snapshot(query, n)
//!               |
//!               v
//!   ,-------------------------,
//!   | RepositoryQuery (trait) |
//!   '-----------+-------------'
//!               |
//!               v
//!          GitBackend
//!   gix: discover, head_name
//!   git: status, diff, describe, log
//!               |
//!               v
//!        ChangeSnapshot
//!   { changed_files, recent_commit_subjects }
//! ```
//!
//! **`GitBackend`** is bound to an explicit working directory.
//! **`ChangeSnapshot`** is the classifier's only input.

pub mod backend;
pub mod snapshot;

pub use backend::{GitBackend, RepositoryQuery};
pub use snapshot::{ChangeSnapshot, take_snapshot};

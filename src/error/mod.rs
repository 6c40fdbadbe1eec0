// changebump: Semantic Version Bump Advisor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            BumpError (~24 bytes)
//!                   |
//!   +------+------+------+------+------+
//!   |      |      |      |      |      |
//!   v      v      v      v      v      v
//! Bail    Git    Cfg   Version  Fs     Io
//! Box<str> Box   Box    Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Git     RepositoryUnavailable, CommandFailed, Gix(Head)
//!   Config  InvalidValue
//!   Version Invalid, Overflow, NotFound
//!   Fs      NotFound, IoError
//!
//! All variants boxed => BumpError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BumpError`].
pub type BumpResult<T> = std::result::Result<T, BumpError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum BumpError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Version parsing or manifest error.
    #[error("version error: {0}")]
    Version(#[from] Box<VersionError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`BumpError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> BumpError {
    BumpError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BumpError {
                fn from(err: $error) -> Self {
                    BumpError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    VersionError => Version,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Discovery failures are reported as `GitError::RepositoryUnavailable`
/// instead.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The path is not inside a work tree, or the git executable is missing.
    #[error("repository unavailable at {path}: {reason}")]
    RepositoryUnavailable { path: String, reason: String },

    /// Git command exited non-zero. Carries the tool's stderr verbatim.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Version Errors ---

/// Semantic version and version manifest errors.
#[derive(Debug, Error)]
pub enum VersionError {
    /// Input is not a `MAJOR.MINOR.PATCH` triple.
    #[error("invalid version '{input}': {reason}")]
    Invalid { input: String, reason: String },

    /// Incrementing a component would overflow.
    #[error("version '{input}' cannot be incremented without overflow")]
    Overflow { input: String },

    /// No version field in the manifest.
    #[error("no version field found in {path}")]
    NotFound { path: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

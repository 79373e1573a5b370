// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             WikiError (~24 bytes)
//!                     |
//!     +------+------+-+----+------+------+
//!     |      |      |      |      |      |
//!     v      v      v      v      v      v
//!    Git  Process   Fs   Config   Io   Other
//!    Box    Box     Box   Box     Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     Gix, CommandFailed, CloneFailed
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs      PermissionDenied, NotADirectory, InvalidTarget, Io
//!   Config  ParseError, MissingKey, InvalidValue
//!
//! PublishError { step: PublishStep, source: WikiError }
//!   returned by the publish orchestrator, one per failed run
//! ```

use serde::Serialize;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`WikiError`].
pub type WikiResult<T> = std::result::Result<T, WikiError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum WikiError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for WikiError {
                fn from(err: $error) -> Self {
                    WikiError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    FsError => Fs,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
///
/// Messages carry git's stderr with URL credentials already redacted.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Clone operation failed. `url` is always the masked form.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a code outside its success set.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Permission denied while creating or removing a path.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Target filename cannot be placed inside the working copy.
    #[error("invalid target '{target}': {reason}")]
    InvalidTarget { target: String, reason: String },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            std::io::ErrorKind::NotADirectory => Self::NotADirectory(path),
            _ => Self::Io { path, source },
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration source.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Publish Errors ---

/// Step of the publish sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStep {
    /// Removing a previous working copy.
    Reset,
    /// Cloning the remote.
    Clone,
    /// Writing the committer identity into the local config.
    Identity,
    /// Resolving (and creating) the target sub-directory.
    Position,
    /// Pulling post-clone updates.
    Pull,
    /// Writing or appending the file.
    Write,
    /// Adding the file to the index.
    Stage,
    /// Committing.
    Commit,
    /// Pushing to the remote.
    Push,
}

impl PublishStep {
    /// Short lowercase name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Clone => "clone",
            Self::Identity => "identity",
            Self::Position => "position",
            Self::Pull => "pull",
            Self::Write => "write",
            Self::Stage => "stage",
            Self::Commit => "commit",
            Self::Push => "push",
        }
    }
}

impl std::fmt::Display for PublishStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a publish run, tagged with the step that failed.
#[derive(Debug, Error)]
#[error("publish failed at step '{step}': {source}")]
pub struct PublishError {
    step: PublishStep,
    #[source]
    source: WikiError,
}

impl PublishError {
    #[must_use]
    pub const fn new(step: PublishStep, source: WikiError) -> Self {
        Self { step, source }
    }

    /// The step that failed.
    #[must_use]
    pub const fn step(&self) -> PublishStep {
        self.step
    }

    /// The underlying error.
    #[must_use]
    pub const fn cause(&self) -> &WikiError {
        &self.source
    }
}

/// Attach a [`PublishStep`] to a fallible step result.
pub trait StepContext<T> {
    /// Tag the error with `step`.
    ///
    /// # Errors
    ///
    /// Returns a [`PublishError`] wrapping the original error.
    fn at_step(self, step: PublishStep) -> std::result::Result<T, PublishError>;
}

impl<T, E> StepContext<T> for std::result::Result<T, E>
where
    E: Into<WikiError>,
{
    fn at_step(self, step: PublishStep) -> std::result::Result<T, PublishError> {
        self.map_err(|e| PublishError::new(step, e.into()))
    }
}

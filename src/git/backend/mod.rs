// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read, sync)     --> GixBackend   (pure Rust gix)
//! GitMutation (write, async) --> ShellBackend (git CLI via ProcessBuilder)
//! ```
//!
//! Every mutation takes the repository path explicitly; nothing depends on
//! the process working directory.

use futures_util::future::BoxFuture;
use std::path::Path;

use crate::core::process::builder::ProcessBuilder;
use crate::error::{GitError, GixError, ProcessError, WikiError, WikiResult};

use super::remote::{RemoteUrl, redact_credentials};

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> WikiResult<Option<String>>;
}

// --- Mutation Trait (Write operations) ---

/// Git operations that modify a working copy or its remote.
///
/// Futures borrow their arguments; each call is one suspension point in a
/// publish run.
pub trait GitMutation: Send + Sync {
    /// Clone `url` into `dest`. Output is suppressed.
    fn clone_repo<'a>(&'a self, url: &'a RemoteUrl, dest: &'a Path)
    -> BoxFuture<'a, WikiResult<()>>;

    /// Set a repository-local config value.
    fn set_config<'a>(
        &'a self,
        repo_path: &'a Path,
        key: &'a str,
        value: &'a str,
    ) -> BoxFuture<'a, WikiResult<()>>;

    /// Pull the tracked branch. `url` is the remote the clone came from.
    fn pull<'a>(&'a self, repo_path: &'a Path, url: &'a RemoteUrl)
    -> BoxFuture<'a, WikiResult<()>>;

    /// Stage a single pathspec, relative to `repo_path`.
    fn add<'a>(&'a self, repo_path: &'a Path, pathspec: &'a str)
    -> BoxFuture<'a, WikiResult<()>>;

    /// Commit staged changes.
    fn commit<'a>(&'a self, repo_path: &'a Path, message: &'a str)
    -> BoxFuture<'a, WikiResult<()>>;

    /// Push to the tracked branch. `url` is the remote the clone came from.
    fn push<'a>(&'a self, repo_path: &'a Path, url: &'a RemoteUrl)
    -> BoxFuture<'a, WikiResult<()>>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix. No subprocesses.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn current_branch(path: &Path) -> WikiResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Git CLI backend.
///
/// Every invocation runs with `GCM_INTERACTIVE=never` and
/// `GIT_TERMINAL_PROMPT=0` so a rejected credential fails instead of
/// prompting. Config overrides are passed as `-c key=value` on every call
/// and never written to the working copy.
#[derive(Debug, Clone, Default)]
pub struct ShellBackend {
    overrides: Vec<(String, String)>,
}

impl ShellBackend {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            overrides: Vec::new(),
        }
    }

    /// Adds a `-c key=value` override.
    #[must_use]
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn overrides(&self) -> &[(String, String)] {
        &self.overrides
    }

    /// Base `git` invocation: environment, overrides, quiet streams.
    fn command(&self) -> WikiResult<ProcessBuilder> {
        let mut builder = ProcessBuilder::which("git")?
            .name("git")
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .quiet();

        for (key, value) in &self.overrides {
            // header values typically carry bearer tokens
            if key.to_ascii_lowercase().ends_with("extraheader") {
                builder = builder.secret(value.as_str());
            }
            builder = builder.arg("-c").arg(format!("{key}={value}"));
        }
        Ok(builder)
    }

    /// Runs `git <args>` and maps a failed exit into `GitError::CommandFailed`.
    async fn git(builder: ProcessBuilder, args: &[&str]) -> WikiResult<()> {
        let builder = builder.args(args);
        let command = redact_credentials(&builder.command_line()).into_owned();

        match builder.run().await {
            Ok(_) => Ok(()),
            Err(WikiError::Process(err)) => match *err {
                ProcessError::NonZeroExit { stderr, code, .. } => Err(GitError::CommandFailed {
                    command,
                    message: failure_message(&stderr, code),
                }
                .into()),
                other => Err(other.into()),
            },
            Err(other) => Err(other),
        }
    }

    /// Base invocation for a command that talks to `url`.
    ///
    /// git echoes `origin` in transport errors, so the secret is masked on
    /// every such call, not only on clone.
    fn remote_command(&self, url: &RemoteUrl) -> WikiResult<ProcessBuilder> {
        let builder = self.command()?;
        Ok(match url.secret() {
            Some(secret) => builder.secret(secret),
            None => builder,
        })
    }

    async fn git_in(&self, repo_path: &Path, args: &[&str]) -> WikiResult<()> {
        let builder = self.command()?.cwd(repo_path);
        Self::git(builder, args).await
    }

    async fn git_remote_in(
        &self,
        repo_path: &Path,
        url: &RemoteUrl,
        args: &[&str],
    ) -> WikiResult<()> {
        let builder = self.remote_command(url)?.cwd(repo_path);
        Self::git(builder, args).await
    }

    async fn clone_into(&self, url: &RemoteUrl, dest: &Path) -> WikiResult<()> {
        let dest_str = dest.to_str().ok_or_else(|| GitError::CloneFailed {
            url: url.masked().to_string(),
            message: "invalid destination path".to_string(),
        })?;

        let builder = self.remote_command(url)?;

        Self::git(builder, &["clone", "--quiet", "--", url.expose(), dest_str])
            .await
            .map_err(|e| match e {
                WikiError::Git(git) => match *git {
                    GitError::CommandFailed { message, .. } => GitError::CloneFailed {
                        url: url.masked().to_string(),
                        message,
                    }
                    .into(),
                    other => other.into(),
                },
                other => other,
            })
    }
}

fn failure_message(stderr: &str, code: i32) -> String {
    if stderr.is_empty() {
        format!("exited with code {code}")
    } else {
        redact_credentials(stderr).into_owned()
    }
}

impl GitMutation for ShellBackend {
    fn clone_repo<'a>(
        &'a self,
        url: &'a RemoteUrl,
        dest: &'a Path,
    ) -> BoxFuture<'a, WikiResult<()>> {
        Box::pin(self.clone_into(url, dest))
    }

    fn set_config<'a>(
        &'a self,
        repo_path: &'a Path,
        key: &'a str,
        value: &'a str,
    ) -> BoxFuture<'a, WikiResult<()>> {
        Box::pin(async move { self.git_in(repo_path, &["config", "--local", key, value]).await })
    }

    fn pull<'a>(
        &'a self,
        repo_path: &'a Path,
        url: &'a RemoteUrl,
    ) -> BoxFuture<'a, WikiResult<()>> {
        Box::pin(async move {
            self.git_remote_in(repo_path, url, &["pull", "--quiet"])
                .await
        })
    }

    fn add<'a>(&'a self, repo_path: &'a Path, pathspec: &'a str) -> BoxFuture<'a, WikiResult<()>> {
        Box::pin(async move { self.git_in(repo_path, &["add", "--", pathspec]).await })
    }

    fn commit<'a>(
        &'a self,
        repo_path: &'a Path,
        message: &'a str,
    ) -> BoxFuture<'a, WikiResult<()>> {
        Box::pin(async move {
            self.git_in(repo_path, &["commit", "--quiet", "-m", message])
                .await
        })
    }

    fn push<'a>(
        &'a self,
        repo_path: &'a Path,
        url: &'a RemoteUrl,
    ) -> BoxFuture<'a, WikiResult<()>> {
        Box::pin(async move {
            self.git_remote_in(repo_path, url, &["push", "--quiet"])
                .await
        })
    }
}

// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use bon::Builder;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::process::builder::SECRET_MASK;

/// How the contents land in the target file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Replace the file (create if absent).
    #[default]
    Overwrite,
    /// Append to the file (create if absent).
    Append,
}

/// Everything one publish run needs.
#[derive(Clone, Builder)]
#[builder(on(String, into))]
pub struct PublishRequest {
    /// Host and path of the repository, without scheme.
    repo: String,
    /// Where the working copy is cloned. Removed first if present.
    #[builder(into)]
    local_path: PathBuf,
    user: Option<String>,
    password: Option<String>,
    /// Committer name.
    name: String,
    /// Committer email.
    email: String,
    /// Target file, relative to the working-copy root. `/` or `\`.
    filename: String,
    message: String,
    contents: String,
    #[builder(default)]
    mode: WriteMode,
}

impl PublishRequest {
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    #[must_use]
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    #[must_use]
    pub const fn mode(&self) -> WriteMode {
        self.mode
    }
}

impl std::fmt::Debug for PublishRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishRequest")
            .field("repo", &self.repo)
            .field("local_path", &self.local_path)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| SECRET_MASK))
            .field("name", &self.name)
            .field("email", &self.email)
            .field("filename", &self.filename)
            .field("message", &self.message)
            .field("contents", &format_args!("<{} bytes>", self.contents.len()))
            .field("mode", &self.mode)
            .finish()
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishOutcome {
    /// Remote URL with the secret replaced by `***`.
    pub masked_url: String,
    /// Directory the file was written in.
    pub working_dir: PathBuf,
    /// Full path of the written file.
    pub file: PathBuf,
    /// Path handed to `git add`, relative to the working-copy root.
    pub pathspec: String,
    /// Branch that was pushed; `None` on a detached HEAD or in a dry run.
    pub branch: Option<String>,
    pub dry_run: bool,
}

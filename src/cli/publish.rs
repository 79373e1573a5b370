// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish command arguments.
//!
//! ```text
//! publish --repo HOST/PATH --local-path DIR [--user U] [--password P]
//!         --name N --email E --filename REL --message M
//!         (--contents TEXT | --contents-file FILE) [--append] [--json]
//!         [-c key=value]...
//! ```
//!
//! Every value except the contents can also come from `[wiki]` in the
//! configuration; flags win.

use clap::{ArgGroup, Args};
use std::path::PathBuf;

/// Environment variable read for `--password`.
pub const PASSWORD_ENV: &str = "WIKI_UPDATER_PASSWORD";

/// Arguments for the `publish` command.
#[derive(Debug, Clone, Args)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["contents", "contents_file"]),
))]
pub struct PublishArgs {
    /// Repository host and path, without scheme (e.g. dev.azure.com/org/p/_git/p.wiki).
    #[arg(short = 'r', long, value_name = "HOST/PATH")]
    pub repo: Option<String>,

    /// Checkout directory. Removed and recreated.
    #[arg(short = 'p', long, value_name = "DIR")]
    pub local_path: Option<PathBuf>,

    /// User name embedded in the clone URL (only with a password).
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Password or access token embedded in the clone URL.
    #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
    pub password: Option<String>,

    /// Committer name.
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Committer email.
    #[arg(short = 'e', long)]
    pub email: Option<String>,

    /// Target file relative to the repository root, '/' or '\' separated.
    #[arg(short = 'f', long, required = true)]
    pub filename: String,

    /// Commit message.
    #[arg(short = 'm', long, required = true)]
    pub message: String,

    /// File contents. "`n" is written as CRLF.
    #[arg(long, value_name = "TEXT")]
    pub contents: Option<String>,

    /// Read the contents from a file ("-" for stdin).
    #[arg(long, value_name = "FILE")]
    pub contents_file: Option<PathBuf>,

    /// Append instead of overwrite.
    #[arg(short = 'a', long)]
    pub append: bool,

    /// Print the outcome as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Git config override for every git call. Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub git_config: Vec<String>,
}

impl PublishArgs {
    /// Converts `[wiki]` flags to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();
        let mut push = |key, value: Option<String>| {
            if let Some(value) = value {
                overrides.push((key, value));
            }
        };

        push("wiki.repo", self.repo.clone());
        push(
            "wiki.local_path",
            self.local_path.as_ref().map(|p| p.display().to_string()),
        );
        push("wiki.user", self.user.clone());
        push("wiki.password", self.password.clone());
        push("wiki.name", self.name.clone());
        push("wiki.email", self.email.clone());
        overrides
    }
}

// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish command implementation.

use anyhow::Context;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::cli::publish::PublishArgs;
use crate::config::Config;
use crate::config::types::{WikiConfig, parse_override};
use crate::error::Result;
use crate::git::backend::ShellBackend;
use crate::logging::TracingLog;
use crate::publish::{PublishOutcome, PublishRequest, Publisher, WriteMode};

/// Main handler for the publish command.
///
/// `config` must already carry the `[wiki]` overrides from `args`
/// (see [`PublishArgs::to_config_overrides`]).
///
/// # Errors
///
/// Returns an error if a required value is missing, the contents cannot be
/// read, or any publish step fails.
pub async fn run_publish_command(
    args: &PublishArgs,
    config: &Config,
    dry_run: bool,
) -> Result<PublishOutcome> {
    let request = build_request(args, config).await?;
    let backend = build_backend(args, config)?;
    debug!(overrides = backend.overrides().len(), dry_run, "publishing");

    let publisher = Publisher::with_backend(backend).dry_run(dry_run);
    let outcome = publisher.publish(&request, &TracingLog).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        info!(
            "Published {} to {}",
            outcome.pathspec, outcome.masked_url
        );
    }
    Ok(outcome)
}

/// Merges `args` with `[wiki]` and reads the contents.
///
/// # Errors
///
/// Returns an error if a required key is missing or the contents source
/// cannot be read.
pub async fn build_request(args: &PublishArgs, config: &Config) -> Result<PublishRequest> {
    let wiki = &config.wiki;
    let contents = read_contents(args).await?;

    let request = PublishRequest::builder()
        .repo(WikiConfig::require(wiki.repo.as_deref(), "repo")?)
        .local_path(wiki.require_local_path()?)
        .maybe_user(wiki.user.clone())
        .maybe_password(wiki.password.clone())
        .name(WikiConfig::require(wiki.name.as_deref(), "name")?)
        .email(WikiConfig::require(wiki.email.as_deref(), "email")?)
        .filename(args.filename.as_str())
        .message(args.message.as_str())
        .contents(contents)
        .mode(if args.append {
            WriteMode::Append
        } else {
            WriteMode::Overwrite
        })
        .build();
    Ok(request)
}

/// `[git] config` entries first, then `-c` flags.
///
/// # Errors
///
/// Returns an error for an entry that is not `key=value`.
pub fn build_backend(args: &PublishArgs, config: &Config) -> Result<ShellBackend> {
    let mut backend = ShellBackend::new();
    for (key, value) in config.git.overrides()? {
        backend = backend.with_config(key, value);
    }
    for entry in &args.git_config {
        let (key, value) = parse_override(entry)?;
        backend = backend.with_config(key, value);
    }
    Ok(backend)
}

async fn read_contents(args: &PublishArgs) -> Result<String> {
    if let Some(contents) = &args.contents {
        return Ok(contents.clone());
    }
    match args.contents_file.as_deref() {
        Some(path) if path == Path::new("-") => {
            let mut contents = String::new();
            tokio::io::stdin()
                .read_to_string(&mut contents)
                .await
                .context("Failed to read contents from stdin")?;
            Ok(contents)
        }
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read contents from {}", path.display())),
        None => anyhow::bail!("either --contents or --contents-file is required"),
    }
}

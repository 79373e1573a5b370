// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish orchestration.
//!
//! ```text
//! PublishRequest
//!   |
//!   v
//! RemoteUrl::new --> reset --> clone --> identity --> position
//!                                                        |
//!           push <-- commit <-- stage <-- write <-- pull
//!             |
//!             v
//! Ok(PublishOutcome) | Err(PublishError { step, .. }) + log.error once
//! ```
//!
//! Every step receives the working-copy path explicitly. The process
//! working directory is never touched, so independent publishes can share
//! a runtime.
//!
//! # Example
//!
//! ```ignore
//! let request = PublishRequest::builder()
//!     .repo("dev.azure.com/org/project/_git/project.wiki")
//!     .local_path("wiki-checkout")
//!     .password(token)
//!     .name("Build Agent")
//!     .email("build@example.com")
//!     .filename("Releases/1.0.md")
//!     .message("Release notes 1.0")
//!     .contents("# 1.0`n`nFirst release")
//!     .build();
//!
//! let outcome = Publisher::new().publish(&request, &TracingLog).await?;
//! ```

pub mod content;
pub mod request;

use std::path::{Path, PathBuf};

use crate::error::{PublishError, PublishStep, StepContext, WikiResult};
use crate::git::backend::{GitMutation, ShellBackend};
use crate::git::query;
use crate::git::remote::RemoteUrl;
use crate::logging::PublishLog;
use crate::workspace;

pub use content::{normalize_newlines, write_contents};
pub use request::{PublishOutcome, PublishRequest, WriteMode};

/// Runs publish sequences against a git backend.
#[derive(Debug, Clone, Default)]
pub struct Publisher<G: GitMutation = ShellBackend> {
    backend: G,
    dry_run: bool,
}

impl Publisher<ShellBackend> {
    /// Publisher on the `git` CLI with no config overrides.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_backend(ShellBackend::new())
    }
}

impl<G: GitMutation> Publisher<G> {
    #[must_use]
    pub const fn with_backend(backend: G) -> Self {
        Self {
            backend,
            dry_run: false,
        }
    }

    /// Log the plan instead of running it.
    #[must_use]
    pub const fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[must_use]
    pub const fn backend(&self) -> &G {
        &self.backend
    }

    /// Publishes one file.
    ///
    /// On failure the error is reported to `log.error` exactly once and
    /// then returned. The working copy is left on disk either way.
    ///
    /// # Errors
    ///
    /// Returns a [`PublishError`] tagged with the step that failed.
    pub async fn publish(
        &self,
        request: &PublishRequest,
        log: &dyn PublishLog,
    ) -> Result<PublishOutcome, PublishError> {
        let result = if self.dry_run {
            plan(request, log)
        } else {
            self.run(request, log).await
        };

        if let Err(err) = &result {
            log.error(err);
        }
        result
    }

    async fn run(
        &self,
        request: &PublishRequest,
        log: &dyn PublishLog,
    ) -> Result<PublishOutcome, PublishError> {
        let url = RemoteUrl::new(request.repo(), request.user(), request.password());
        log.info(&format!("URL used {}", url.masked()));

        let root = absolute(request.local_path()).at_step(PublishStep::Reset)?;
        workspace::reset_workspace(&root)
            .await
            .at_step(PublishStep::Reset)?;
        log.info(&format!("Cleaned {}", root.display()));

        self.backend
            .clone_repo(&url, &root)
            .await
            .at_step(PublishStep::Clone)?;
        log.info(&format!("Cloned {} to {}", request.repo(), root.display()));

        self.backend
            .set_config(&root, "user.name", request.name())
            .await
            .at_step(PublishStep::Identity)?;
        self.backend
            .set_config(&root, "user.email", request.email())
            .await
            .at_step(PublishStep::Identity)?;
        log.info(&format!("Set GIT values in {}", root.display()));

        let dir = workspace::resolve_working_dir(&root, request.filename(), log)
            .await
            .at_step(PublishStep::Position)?;

        log.info("Pull in case of post clone updates from other users");
        self.backend
            .pull(&root, &url)
            .await
            .at_step(PublishStep::Pull)?;

        let name =
            workspace::resolve_file_name(request.filename(), log).at_step(PublishStep::Write)?;
        let contents = normalize_newlines(request.contents());
        let file = write_contents(&dir, &name, &contents, request.mode())
            .await
            .at_step(PublishStep::Write)?;
        log.info(&match request.mode() {
            WriteMode::Overwrite => format!("Created the {name} in {}", dir.display()),
            WriteMode::Append => format!("Appended to the {name} in {}", dir.display()),
        });

        let pathspec = workspace::pathspec(request.filename()).at_step(PublishStep::Stage)?;
        self.backend
            .add(&root, &pathspec)
            .await
            .at_step(PublishStep::Stage)?;
        log.info(&format!(
            "Added {} to repo {}",
            request.filename(),
            root.display()
        ));

        self.backend
            .commit(&root, request.message())
            .await
            .at_step(PublishStep::Commit)?;
        log.info(&format!(
            "Committed to {} with message \"{}\"",
            root.display(),
            request.message()
        ));

        self.backend
            .push(&root, &url)
            .await
            .at_step(PublishStep::Push)?;
        log.info(&format!("Pushed to {}", request.repo()));

        Ok(PublishOutcome {
            masked_url: url.masked().to_string(),
            working_dir: dir,
            file,
            pathspec,
            branch: query::current_branch(&root).ok().flatten(),
            dry_run: false,
        })
    }
}

/// Dry run: validate the target and log what would happen.
fn plan(request: &PublishRequest, log: &dyn PublishLog) -> Result<PublishOutcome, PublishError> {
    let url = RemoteUrl::new(request.repo(), request.user(), request.password());
    log.info(&format!("URL used {}", url.masked()));

    let root = absolute(request.local_path()).at_step(PublishStep::Reset)?;
    let target = workspace::TargetPath::parse(request.filename()).at_step(PublishStep::Position)?;
    let dir = target.dir_under(&root);
    let file = dir.join(target.base());
    let pathspec = target.pathspec();

    let verb = match request.mode() {
        WriteMode::Overwrite => "write",
        WriteMode::Append => "append to",
    };
    for step in [
        format!("remove {}", root.display()),
        format!("clone {} into {}", request.repo(), root.display()),
        format!("set user.name and user.email in {}", root.display()),
        "pull".to_string(),
        format!("{verb} {}", file.display()),
        format!("add {pathspec}"),
        format!("commit with message \"{}\"", request.message()),
        "push".to_string(),
    ] {
        log.info(&format!("[dry-run] {step}"));
    }

    Ok(PublishOutcome {
        masked_url: url.masked().to_string(),
        working_dir: dir,
        file,
        pathspec,
        branch: None,
        dry_run: true,
    })
}

fn absolute(path: &Path) -> WikiResult<PathBuf> {
    Ok(std::path::absolute(path)?)
}

#[cfg(test)]
mod tests;

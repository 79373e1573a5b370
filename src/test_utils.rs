// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities.
//!
//! Remotes are bare repositories on disk. The shell backend reaches them
//! through a `url.<file-url>.insteadOf=https://wiki.test/` override, so the
//! publisher still builds real `https://` URLs.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;

use crate::error::{PublishError, PublishStep};
use crate::git::backend::ShellBackend;
use crate::logging::PublishLog;

/// Host part that tests pass as the repository address.
pub(crate) const WIKI_HOST: &str = "wiki.test";

/// Runs git in `cwd`, panicking with stderr on failure.
pub(crate) fn run_git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Seed")
        .env("GIT_AUTHOR_EMAIL", "seed@test.com")
        .env("GIT_COMMITTER_NAME", "Seed")
        .env("GIT_COMMITTER_EMAIL", "seed@test.com")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Creates `<root>/remote.git`, a bare repository whose single commit holds
/// `README.md` plus `files`.
pub(crate) fn seeded_remote(root: &Path, files: &[(&str, &str)]) -> PathBuf {
    let seed = root.join("seed");
    std::fs::create_dir_all(&seed).expect("failed to create seed dir");
    run_git(&["init", "-q"], &seed);
    run_git(&["config", "commit.gpgsign", "false"], &seed);

    std::fs::write(seed.join("README.md"), "# Wiki").expect("failed to write README");
    for (path, contents) in files {
        let target = seed.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).expect("failed to create seed subdir");
        }
        std::fs::write(target, contents).expect("failed to write seed file");
    }
    run_git(&["add", "."], &seed);
    run_git(&["commit", "-q", "-m", "Initial commit"], &seed);

    let bare = root.join("remote.git");
    run_git(
        &[
            "clone",
            "-q",
            "--bare",
            seed.to_str().expect("utf-8 temp path"),
            bare.to_str().expect("utf-8 temp path"),
        ],
        root,
    );
    bare
}

/// Repository address (no scheme) for the remote created by [`seeded_remote`].
pub(crate) fn remote_address() -> String {
    format!("{WIKI_HOST}/remote.git")
}

/// Shell backend that maps `https://wiki.test/` onto `root`.
pub(crate) fn local_backend(root: &Path) -> ShellBackend {
    ShellBackend::new()
        .with_config(
            format!("url.file://{}/.insteadOf", root.display()),
            format!("https://{WIKI_HOST}/"),
        )
        .with_config("commit.gpgsign", "false")
}

/// `git show <rev>:<path>` against a bare repository.
pub(crate) fn show_file(bare: &Path, rev_path: &str) -> String {
    let output = Command::new("git")
        .args(["show", rev_path])
        .current_dir(bare)
        .output()
        .expect("failed to run git show");
    assert!(
        output.status.success(),
        "git show {rev_path} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// [`PublishLog`] that keeps every message for later assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingLog {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<(PublishStep, String)>>,
}

impl RecordingLog {
    pub(crate) fn infos(&self) -> Vec<String> {
        self.infos.lock().expect("log mutex poisoned").clone()
    }

    pub(crate) fn errors(&self) -> Vec<(PublishStep, String)> {
        self.errors.lock().expect("log mutex poisoned").clone()
    }
}

impl PublishLog for RecordingLog {
    fn info(&self, message: &str) {
        self.infos
            .lock()
            .expect("log mutex poisoned")
            .push(message.to_string());
    }

    fn error(&self, error: &PublishError) {
        self.errors
            .lock()
            .expect("log mutex poisoned")
            .push((error.step(), error.to_string()));
    }
}

// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Working copy layout: where the target file lives and how to get there.
//!
//! ```text
//! filename "notes\\2026/page.md"
//!   split on '/' and '\'   -> dir ["notes", "2026"], base "page.md"
//!
//! resolve_working_dir(root, filename)  root/notes/2026  (created if absent)
//! resolve_file_name(filename)          page.md
//! pathspec(filename)                   notes/2026/page.md  (for git add)
//!
//! ensure_dir_tree(path)    create_dir_all; exists = ok, denied = fatal
//! reset_workspace(path)    rm -rf if present
//! ```
//!
//! Empty and `.` segments are dropped, so `/page.md` and `./page.md` both
//! resolve to the root. `..` is rejected.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::{FsError, WikiResult};
use crate::logging::PublishLog;

/// A target filename split into its directory segments and base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath<'a> {
    dirs: Vec<&'a str>,
    base: &'a str,
}

impl<'a> TargetPath<'a> {
    /// Splits `filename` on both `/` and `\`.
    ///
    /// # Errors
    ///
    /// Returns `FsError::InvalidTarget` if the name has no base name or
    /// contains a `..` segment.
    pub fn parse(filename: &'a str) -> Result<Self, FsError> {
        let invalid = |reason: &str| FsError::InvalidTarget {
            target: filename.to_string(),
            reason: reason.to_string(),
        };

        let mut segments: Vec<&str> = filename
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();

        if segments.contains(&"..") {
            return Err(invalid("parent directory segments are not allowed"));
        }
        if filename.ends_with(['/', '\\']) {
            return Err(invalid("no file name after the last separator"));
        }
        let base = segments.pop().ok_or_else(|| invalid("empty file name"))?;

        Ok(Self {
            dirs: segments,
            base,
        })
    }

    /// Directory segments below the working-copy root.
    #[must_use]
    pub fn dirs(&self) -> &[&'a str] {
        &self.dirs
    }

    /// The file's own name.
    #[must_use]
    pub const fn base(&self) -> &'a str {
        self.base
    }

    /// True when the file sits directly in the working-copy root.
    #[must_use]
    pub fn is_root_level(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Forward-slash path relative to the root, as handed to `git add`.
    #[must_use]
    pub fn pathspec(&self) -> String {
        let mut spec = self.dirs.join("/");
        if !spec.is_empty() {
            spec.push('/');
        }
        spec.push_str(self.base);
        spec
    }

    /// `root` joined with the directory segments.
    #[must_use]
    pub fn dir_under(&self, root: &Path) -> PathBuf {
        self.dirs.iter().fold(root.to_path_buf(), |acc, d| acc.join(d))
    }
}

/// Resolves (and creates, if needed) the directory the target file goes in.
///
/// # Errors
///
/// Returns an `FsError` if the filename is invalid, a file already sits
/// where the directory should be, or the directory tree cannot be created.
pub async fn resolve_working_dir(
    root: &Path,
    filename: &str,
    log: &dyn PublishLog,
) -> WikiResult<PathBuf> {
    let target = TargetPath::parse(filename)?;

    if target.is_root_level() {
        log.info(&format!(
            "No sub-directory passed, using {}",
            root.display()
        ));
        return Ok(root.to_path_buf());
    }

    let dir = target.dir_under(root);
    match fs::metadata(&dir).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(FsError::NotADirectory(dir.display().to_string()).into()),
        Err(_) => {
            log.info(&format!("Creating the directory {}", dir.display()));
            ensure_dir_tree(&dir).await?;
        }
    }
    Ok(dir)
}

/// Returns the bare file name of `filename`.
///
/// # Errors
///
/// Returns `FsError::InvalidTarget` if the filename is invalid.
pub fn resolve_file_name(filename: &str, log: &dyn PublishLog) -> WikiResult<String> {
    let name = TargetPath::parse(filename)?.base().to_string();
    log.info(&format!("Working file name is {name}"));
    Ok(name)
}

/// Returns the pathspec for `filename`, relative to the working-copy root.
///
/// # Errors
///
/// Returns `FsError::InvalidTarget` if the filename is invalid.
pub fn pathspec(filename: &str) -> WikiResult<String> {
    Ok(TargetPath::parse(filename)?.pathspec())
}

/// Creates `path` and all missing ancestors.
///
/// An existing directory is success. Anything else in the way, or any
/// permission failure along the chain, is an error.
///
/// # Errors
///
/// - `FsError::PermissionDenied` if any segment cannot be created.
/// - `FsError::NotADirectory` if `path` or an ancestor is a file.
/// - `FsError::Io` for any other failure.
pub async fn ensure_dir_tree(path: &Path) -> WikiResult<()> {
    match fs::create_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            if fs::metadata(path).await.is_ok_and(|m| m.is_dir()) {
                Ok(())
            } else {
                Err(FsError::NotADirectory(path.display().to_string()).into())
            }
        }
        Err(e) => Err(FsError::from_io(path, e).into()),
    }
}

/// Removes `path` recursively if it exists. Returns whether anything was removed.
///
/// # Errors
///
/// Returns an `FsError` if the path exists but cannot be removed.
pub async fn reset_workspace(path: &Path) -> WikiResult<bool> {
    let meta = match fs::symlink_metadata(path).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(FsError::from_io(path, e).into()),
    };

    debug!(path = %path.display(), dir = meta.is_dir(), "removing previous workspace");
    let removed = if meta.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };
    removed.map_err(|e| FsError::from_io(path, e))?;
    Ok(true)
}

// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use super::request::WriteMode;
use crate::error::{FsError, WikiResult};

/// Two-character newline placeholder accepted in file contents.
pub const NEWLINE_PLACEHOLDER: &str = "`n";

/// Replaces every `` `n `` with `\r\n`. Borrowed when there is nothing to do.
#[must_use]
pub fn normalize_newlines(contents: &str) -> Cow<'_, str> {
    if contents.contains(NEWLINE_PLACEHOLDER) {
        Cow::Owned(contents.replace(NEWLINE_PLACEHOLDER, "\r\n"))
    } else {
        Cow::Borrowed(contents)
    }
}

/// Writes `contents` to `dir/name`. Append creates the file if it is absent.
///
/// # Errors
///
/// Returns an `FsError` if the file cannot be opened or written.
pub async fn write_contents(
    dir: &Path,
    name: &str,
    contents: &str,
    mode: WriteMode,
) -> WikiResult<PathBuf> {
    let path = dir.join(name);
    let io_err = |e| FsError::from_io(&path, e);

    match mode {
        WriteMode::Overwrite => fs::write(&path, contents).await.map_err(io_err)?,
        WriteMode::Append => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .await
                .map_err(io_err)?;
            file.write_all(contents.as_bytes()).await.map_err(io_err)?;
            file.flush().await.map_err(io_err)?;
        }
    }
    Ok(path)
}

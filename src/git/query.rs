// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only lookups on a finished working copy, via gix.

use crate::error::WikiResult;
use std::path::Path;

use super::backend::{GitQuery, GixBackend};

/// Branch checked out in the working copy at `path`, or `None` when HEAD
/// is detached.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> WikiResult<Option<String>> {
    GixBackend::current_branch(path)
}

// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!      remote.rs          query.rs
//!   RemoteUrl (auth +    current_branch
//!   masked), redaction
//!          \                 /
//!           v               v
//!      ,----------------------,
//!      |   backend (traits)   |
//!      '--+---------------+---'
//!         |               |
//!         v               v
//!    GitMutation       GitQuery
//!   (CLI, async)     (gix, sync)
//!         |               |
//!         v               v
//!    ShellBackend     GixBackend
//!    clone/config     .branch
//!    pull/add
//!    commit/push
//! ```
//!
//! **`ShellBackend`**: git CLI for everything that touches the network or
//! writes history. **`GixBackend`**: pure Rust, read-only.

pub mod backend;
pub mod query;
pub mod remote;

// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules.
//!
//! ```text
//!   core
//!    |
//!    v
//! process
//!    |
//! Builder --> run() --> ProcessOutput
//! (secrets masked in logs and output)
//! ```

pub mod process;

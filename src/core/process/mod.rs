// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::which("git")
//!   .args() .cwd() .env() .secret() .quiet()
//!   .run()
//!       --> tokio::process::Command
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```

pub mod builder;
mod runner;

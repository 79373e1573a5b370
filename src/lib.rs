// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          options / inis / publish
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML + env, layered      |
//!              '-------------+-------------'
//!                            v
//!                         publish
//!                   (10-step sequence)
//!                      |          |
//!                      v          v
//!                 workspace      git
//!               paths, mkdir   gix / CLI
//!                                 |
//!   +-----------------------------v-----------+
//!   |  core   process builder / runner        |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod publish;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_utils;

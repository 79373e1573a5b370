// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for wiki-updater using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! wiki-updater [global options] <command>
//! publish --repo ... --filename ... (--contents | --contents-file)
//! options
//! inis
//! version
//! ```

pub mod global;
pub mod publish;


use crate::cli::global::GlobalOptions;
use crate::cli::publish::PublishArgs;
use clap::{Parser, Subcommand};

/// Git Wiki Publishing Tool
///
/// Publishes a generated file to a git-backed wiki from a build pipeline.
#[derive(Debug, Parser)]
#[command(
    name = "wiki-updater",
    author,
    version,
    about = "Git Wiki Publishing Tool",
    long_about = "wiki-updater Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Clones a wiki repository, writes or appends one file and\n\
                  pushes the result. See `wiki-updater publish --help`.",
    after_help = "INI FILES:\n\n\
                  wiki-updater reads `wiki-updater.toml` from the current\n\
                  directory if it exists. Additional files can be given with\n\
                  --ini and are loaded after it, in order. WIKIUPDATER_* environment\n\
                  variables (e.g. WIKIUPDATER_WIKI__PASSWORD) override files, and\n\
                  command-line flags override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by wiki-updater.
    Inis,

    /// Publishes one file to the wiki repository.
    Publish(PublishArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

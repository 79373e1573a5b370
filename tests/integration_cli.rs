// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use clap::error::ErrorKind;
use wiki_updater::cli::{Cli, Command};
use wiki_updater::cli::publish::PublishArgs;

fn publish(args: &[&str]) -> PublishArgs {
    let mut argv = vec!["wiki-updater", "publish"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Some(Command::Publish(args)) => args,
        other => panic!("expected publish, got {other:?}"),
    }
}

// =============================================================================
// Version / Info Commands
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["wiki-updater", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["wiki-updater", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_options_and_inis() {
    let cli = Cli::try_parse_from(["wiki-updater", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));

    let cli = Cli::try_parse_from(["wiki-updater", "--ini", "ci.toml", "inis"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Inis)));
    assert_eq!(cli.global.inis.len(), 1);
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["wiki-updater"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Publish Command
// =============================================================================

#[test]
fn cli_publish_full_pipeline_invocation() {
    let args = publish(&[
        "--repo",
        "dev.azure.com/org/project/_git/project.wiki",
        "--local-path",
        "wiki-checkout",
        "--user",
        "build",
        "--password",
        "pat-123",
        "--name",
        "Build Agent",
        "--email",
        "build@example.com",
        "--filename",
        "Releases\\1.0.md",
        "--message",
        "Release notes 1.0",
        "--contents-file",
        "notes.md",
        "--json",
    ]);

    assert_eq!(args.filename, "Releases\\1.0.md");
    assert_eq!(args.contents_file.as_deref(), Some(std::path::Path::new("notes.md")));
    assert!(args.json);
    assert!(!args.append);

    let keys: Vec<&str> = args.to_config_overrides().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        [
            "wiki.repo",
            "wiki.local_path",
            "wiki.user",
            "wiki.password",
            "wiki.name",
            "wiki.email",
        ]
    );
}

#[test]
fn cli_publish_short_flags() {
    let args = publish(&[
        "-f", "Home.md", "-m", "msg", "-a", "--contents", "x", "-c", "a.b=c",
    ]);
    assert!(args.append);
    assert_eq!(args.git_config, ["a.b=c"]);
    assert!(args.to_config_overrides().is_empty());
}

#[test]
fn cli_publish_missing_filename_rejected() {
    let err = Cli::try_parse_from(["wiki-updater", "publish", "-m", "msg", "--contents", "x"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from([
        "wiki-updater",
        "--dry",
        "--log-level",
        "2",
        "--file-log-level",
        "6",
        "--log-file",
        "wiki.log",
        "publish",
        "-f",
        "Home.md",
        "-m",
        "msg",
        "--contents",
        "x",
    ])
    .unwrap();

    assert!(cli.global.dry);
    let overrides = cli.global.to_config_overrides();
    assert_eq!(
        overrides,
        [
            ("global.output_log_level", "2".to_string()),
            ("global.file_log_level", "6".to_string()),
            ("global.log_file", "wiki.log".to_string()),
        ]
    );
}

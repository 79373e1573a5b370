// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::config::types::{WikiConfig, parse_override};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::path::PathBuf;

const FULL: &str = r#"
[global]
output_log_level = 4
log_file = "publish.log"

[wiki]
repo = "dev.azure.com/org/project/_git/project.wiki"
local_path = "wiki-checkout"
user = "build"
password = "pat-secret-42"
name = "Build Agent"
email = "build@example.com"

[git]
config = ["http.sslVerify=true", "http.extraHeader=AUTHORIZATION: bearer abc"]
"#;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert!(config.wiki.repo.is_none());
    assert!(config.git.config.is_empty());
}

#[test]
fn test_config_parse_full() {
    let config = Config::parse(FULL).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("publish.log")));
    assert_eq!(config.wiki.user.as_deref(), Some("build"));
    assert_eq!(
        config.wiki.local_path,
        Some(PathBuf::from("wiki-checkout"))
    );
    assert_eq!(
        config.git.overrides().unwrap(),
        [
            ("http.sslVerify".to_string(), "true".to_string()),
            (
                "http.extraHeader".to_string(),
                "AUTHORIZATION: bearer abc".to_string()
            ),
        ]
    );
}

#[test]
fn test_format_options_hides_sensitive() {
    let config = Config::parse(FULL).unwrap();
    let formatted = config.format_options().join("\n");

    assert!(formatted.contains("wiki.password") && formatted.contains("[hidden]"));
    assert!(!formatted.contains("pat-secret-42"));
    assert!(!formatted.contains("bearer abc"));
}

#[test]
fn test_format_options_layout() {
    let config = Config::parse(
        r#"
[wiki]
repo = "example.com/wiki.git"
name = "Bot"
"#,
    )
    .unwrap();

    let lines = config.format_options();
    let keys: Vec<&str> = lines
        .iter()
        .map(|l| l.split_whitespace().next().unwrap_or_default())
        .collect();
    assert_eq!(
        keys,
        [
            "global.file_log_level",
            "global.log_file",
            "global.output_log_level",
            "wiki.email",
            "wiki.local_path",
            "wiki.name",
            "wiki.repo",
            "wiki.user",
        ]
    );

    // values line up after the longest key
    let column = "global.output_log_level".len() + 1;
    assert!(lines.iter().all(|l| l[column..].starts_with("= ")));
    assert!(lines.contains(&"wiki.name               = Bot".to_string()));
}

#[test]
fn test_wiki_config_debug_hides_password() {
    let config = Config::parse(FULL).unwrap();
    let rendered = format!("{:?}", config.wiki);
    assert!(!rendered.contains("pat-secret-42"));
    assert!(rendered.contains("[hidden]"));
}

#[test]
fn test_require_reports_missing_key() {
    let config = Config::default();
    let err = WikiConfig::require(config.wiki.repo.as_deref(), "repo").unwrap_err();
    insta::assert_snapshot!(err, @"missing required config key 'repo' in section '[wiki]'");

    assert!(WikiConfig::require(Some(""), "name").is_err());
    assert_eq!(WikiConfig::require(Some("x"), "name").unwrap(), "x");
    assert!(matches!(
        config.wiki.require_local_path(),
        Err(ConfigError::MissingKey { .. })
    ));
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("core.autocrlf=false").unwrap(),
        ("core.autocrlf".to_string(), "false".to_string())
    );
    assert_eq!(
        parse_override("http.extraHeader=A=B").unwrap().1,
        "A=B",
        "only the first '=' splits"
    );
    assert!(parse_override("no-equals").is_err());
    assert!(parse_override("=value").is_err());
}

#[test]
fn test_invalid_git_override_rejected_at_build() {
    let result = Config::parse("[git]\nconfig = [\"broken\"]");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("expected 'key=value'"), "{err}");
}

#[test]
fn test_deny_unknown_fields() {
    assert!(Config::parse("[unknown_section]\nfoo = 1").is_err());
    assert!(Config::parse("[wiki]\npasword = \"typo\"").is_err());
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Config::parse("[global]\noutput_log_level = 9").is_err());
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_tracks_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[wiki]\nname = \"a\"")
        .add_toml_file_optional("/nonexistent/optional.toml")
        .add_toml_file("/nonexistent/required.toml");

    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @r"
    1. [string] <string>
    2. [file] /nonexistent/required.toml
    ");
}

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[wiki]\nrepo = \"example.com/wiki.git\"").expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");
    assert_eq!(config.wiki.repo.as_deref(), Some("example.com/wiki.git"));
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/to/config.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("WIKITEST_WIKI__PASSWORD", "from-env");
        std::env::set_var("WIKITEST_GLOBAL__OUTPUT_LOG_LEVEL", "1");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[wiki]\npassword = \"from-file\"")
        .with_env_prefix("WIKITEST")
        .build()
        .expect("build should succeed");

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("WIKITEST_WIKI__PASSWORD");
        std::env::remove_var("WIKITEST_GLOBAL__OUTPUT_LOG_LEVEL");
    }

    assert_eq!(config.wiki.password.as_deref(), Some("from-env"));
    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
}

#[test]
fn test_config_loader_env_values_stay_verbatim() {
    // SAFETY: the variable names are unique to this test.
    unsafe {
        std::env::set_var("WIKIDIGITS_WIKI__PASSWORD", "00123456");
        std::env::set_var("WIKIDIGITS_WIKI__NAME", "1e3");
        std::env::set_var("WIKIDIGITS_WIKI__USER", "007");
    }

    let config = ConfigLoader::new()
        .with_env_prefix("WIKIDIGITS")
        .build()
        .expect("build should succeed");

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("WIKIDIGITS_WIKI__PASSWORD");
        std::env::remove_var("WIKIDIGITS_WIKI__NAME");
        std::env::remove_var("WIKIDIGITS_WIKI__USER");
    }

    assert_eq!(config.wiki.password.as_deref(), Some("00123456"));
    assert_eq!(config.wiki.name.as_deref(), Some("1e3"));
    assert_eq!(config.wiki.user.as_deref(), Some("007"));
}

#[test]
fn test_config_loader_layered_sources() {
    let config = ConfigLoader::new()
        .add_toml_str("[wiki]\nname = \"File\"\nemail = \"file@example.com\"")
        .add_toml_str("[wiki]\nname = \"Later\"")
        .set("wiki.email", "cli@example.com")
        .unwrap()
        .build()
        .expect("build should succeed");

    assert_eq!(config.wiki.name.as_deref(), Some("Later"));
    assert_eq!(config.wiki.email.as_deref(), Some("cli@example.com"));
    assert!(config.wiki.user.is_none());
}

#[test]
fn test_config_loader_set_git_overrides() {
    let config = ConfigLoader::new()
        .add_toml_str("[git]\nconfig = [\"a.b=1\"]")
        .set("git.config", vec!["c.d=2".to_string()])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.git.config, ["c.d=2"]);
}

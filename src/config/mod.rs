// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for wiki-updater.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. wiki-updater.toml (cwd, optional)
//! 3. --ini files, in order
//! 4. WIKIUPDATER_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! WIKIUPDATER_WIKI__PASSWORD=...          → wiki.password
//! WIKIUPDATER_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, WikiConfig};

/// Default configuration file, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "wiki-updater.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "WIKIUPDATER";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Wiki repository and committer.
    pub wiki: WikiConfig,
    /// Git overrides.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wiki_updater::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("wiki-updater.toml")
    ///     .with_env_prefix("WIKIUPDATER")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// Required `[wiki]` keys are checked when publishing, not here, so
    /// `options` and `inis` work on partial configs.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed `git.config` entry.
    pub fn validate(&self) -> Result<()> {
        self.git.overrides()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Sorted by key. The password and `extraHeader` values are shown as
    /// `[hidden]`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_wiki_options(&mut options);
        self.format_git_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_wiki_options(&self, options: &mut BTreeMap<String, String>) {
        let wiki = &self.wiki;
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        options.insert("wiki.repo".into(), text(&wiki.repo));
        options.insert(
            "wiki.local_path".into(),
            wiki.local_path
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("wiki.user".into(), text(&wiki.user));
        if wiki.password.as_ref().is_some_and(|p| !p.is_empty()) {
            options.insert("wiki.password".into(), "[hidden]".into());
        }
        options.insert("wiki.name".into(), text(&wiki.name));
        options.insert("wiki.email".into(), text(&wiki.email));
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        for (i, entry) in self.git.config.iter().enumerate() {
            let shown = match entry.split_once('=') {
                Some((key, _)) if key.to_ascii_lowercase().ends_with("extraheader") => {
                    format!("{key}=[hidden]")
                }
                _ => entry.clone(),
            };
            options.insert(format!("git.config[{i}]"), shown);
        }
    }
}

// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]  logging
//! [wiki]    remote, checkout, credentials, committer
//! [git]     -c overrides ("key=value")
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// The wiki repository and the identity that publishes to it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WikiConfig {
    /// Host and path, without scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Checkout directory. Deleted and recreated on every publish.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Password or personal access token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Committer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Committer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl WikiConfig {
    /// Returns a required string value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if the value is unset or empty.
    pub fn require<'a>(value: Option<&'a str>, key: &str) -> Result<&'a str, ConfigError> {
        value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingKey {
                section: "wiki".to_string(),
                key: key.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if `wiki.local_path` is unset.
    pub fn require_local_path(&self) -> Result<&std::path::Path, ConfigError> {
        self.local_path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| ConfigError::MissingKey {
                section: "wiki".to_string(),
                key: "local_path".to_string(),
            })
    }
}

impl std::fmt::Debug for WikiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikiConfig")
            .field("repo", &self.repo)
            .field("local_path", &self.local_path)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[hidden]"))
            .field("name", &self.name)
            .field("email", &self.email)
            .finish()
    }
}

/// Git settings applied to every `git` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// `key=value` entries passed as `git -c key=value`.
    pub config: Vec<String>,
}

impl GitConfig {
    /// Splits each entry at its first `=`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an entry without `=` or with an
    /// empty key.
    pub fn overrides(&self) -> Result<Vec<(String, String)>, ConfigError> {
        self.config.iter().map(|entry| parse_override(entry)).collect()
    }
}

/// Parses one `key=value` git override.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if there is no `=` or the key is empty.
pub fn parse_override(entry: &str) -> Result<(String, String), ConfigError> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidValue {
            section: "git".to_string(),
            key: "config".to_string(),
            message: format!("expected 'key=value', got '{entry}'"),
        }),
    }
}

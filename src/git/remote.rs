// wiki-updater: Git Wiki Publishing Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote URLs with embedded credentials.
//!
//! ```text
//! RemoteUrl::new(repo, user, password)
//!   (_,     None)      https://<repo>                 https://<repo>
//!   (None,  Some(pw))  https://<pw>@<repo>            https://***@<repo>
//!   (Some(u), Some(pw))https://<u>:<pw>@<repo>        https://<u>:***@<repo>
//!                      \__ expose() __/               \__ masked() __/
//!
//! redact_credentials(text)   scheme://user:secret@ --> scheme://user:***@
//! ```

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::core::process::builder::SECRET_MASK;

/// A remote URL in two renderings: the authenticated one handed to git, and
/// a masked one that is the only form ever logged.
///
/// `Debug` and `Display` both print the masked form.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    authenticated: String,
    masked: String,
    secret: Option<String>,
}

impl RemoteUrl {
    /// Builds the HTTPS URL for `repo` (host and path, no scheme).
    ///
    /// A username is only embedded together with a password; empty strings
    /// count as absent.
    #[must_use]
    pub fn new(repo: &str, user: Option<&str>, password: Option<&str>) -> Self {
        let user = user.filter(|u| !u.is_empty());
        let password = password.filter(|p| !p.is_empty());

        match (user, password) {
            (_, None) => {
                let url = format!("https://{repo}");
                Self {
                    authenticated: url.clone(),
                    masked: url,
                    secret: None,
                }
            }
            (None, Some(password)) => Self {
                authenticated: format!("https://{password}@{repo}"),
                masked: format!("https://{SECRET_MASK}@{repo}"),
                secret: Some(password.to_string()),
            },
            (Some(user), Some(password)) => Self {
                authenticated: format!("https://{user}:{password}@{repo}"),
                masked: format!("https://{user}:{SECRET_MASK}@{repo}"),
                secret: Some(password.to_string()),
            },
        }
    }

    /// The URL with credentials in plain text. Only for handing to git.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.authenticated
    }

    /// The URL with the secret replaced by `***`.
    #[must_use]
    pub fn masked(&self) -> &str {
        &self.masked
    }

    /// The embedded secret, if any.
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.secret.is_some()
    }
}

impl std::fmt::Debug for RemoteUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RemoteUrl").field(&self.masked).finish()
    }
}

impl std::fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.masked)
    }
}

fn userinfo_regex() -> &'static Regex {
    static USERINFO: OnceLock<Regex> = OnceLock::new();
    USERINFO.get_or_init(|| {
        Regex::new(r"(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*://)(?P<userinfo>[^/\s]+)@")
            .unwrap_or_else(|e| unreachable!("userinfo pattern is valid: {e}"))
    })
}

/// Masks credentials embedded in any URL inside `text`.
///
/// git echoes the remote URL from `.git/config` in many error messages, so
/// this is applied to everything read back from git.
#[must_use]
pub fn redact_credentials(text: &str) -> Cow<'_, str> {
    userinfo_regex().replace_all(text, |caps: &Captures<'_>| {
        let scheme = &caps["scheme"];
        match caps["userinfo"].split_once(':') {
            Some((user, _)) => format!("{scheme}{user}:{SECRET_MASK}@"),
            None => format!("{scheme}{SECRET_MASK}@"),
        }
    })
}

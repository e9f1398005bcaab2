// Client configuration.
// Holds credentials and endpoint settings that are forwarded to the HTTP client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "gists-rs";

/// How requests are authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    Anonymous,
    Basic { username: String, password: String },
    Token(String),
}

/// Settings for building an [`HttpClient`](crate::github::HttpClient).
///
/// Deserializes from the same object shape the GitHub base client accepts,
/// so `{"username": "...", "password": "...", "apiUrl": "..."}` works.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, alias = "apiUrl", skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, alias = "userAgent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, alias = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Millisecond timeout; wins over `timeout_secs` when both are set.
    #[serde(default, alias = "timeoutMs", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from `GITHUB_TOKEN`, `GITHUB_USERNAME`, `GITHUB_PASSWORD`
    /// and `GITHUB_API_URL`. Missing variables leave the field unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            username: non_empty("GITHUB_USERNAME"),
            password: non_empty("GITHUB_PASSWORD"),
            token: non_empty("GITHUB_TOKEN"),
            api_url: non_empty("GITHUB_API_URL"),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_basic(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sub-millisecond remainders round up so a non-zero timeout never becomes zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let mut millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        if Duration::from_millis(millis) < timeout {
            millis = millis.saturating_add(1);
        }
        self.timeout_ms = Some(millis);
        self.timeout_secs = None;
        self
    }

    /// Resolve the credentials. A token takes precedence over basic auth.
    pub fn auth(&self) -> Auth {
        match (&self.token, &self.username, &self.password) {
            (Some(token), _, _) => Auth::Token(token.clone()),
            (None, Some(username), Some(password)) => Auth::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            _ => Auth::Anonymous,
        }
    }

    /// Base URL without a trailing slash.
    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or(GITHUB_API_BASE)
            .trim_end_matches('/')
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Request timeout. Zero means no timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms
            .map(Duration::from_millis)
            .or_else(|| self.timeout_secs.map(Duration::from_secs))
            .filter(|timeout| !timeout.is_zero())
    }
}

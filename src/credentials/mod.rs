// Credential resolution for demos and live tests.
// Looks up a username/password pair and remembers it in a local store.

pub mod paths;
pub mod store;

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{GistsError, Result};

pub use paths::{config_dir, local_auth_path, store_path};
pub use store::{Store, StoredEntry};

/// Store key the resolved pair is saved under.
pub const STORE_KEY: &str = "auth";

/// A complete username/password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn into_config(self) -> ClientConfig {
        ClientConfig::new().with_basic(self.username, self.password)
    }
}

/// Shape of auth files and store entries, where either field may be missing.
#[derive(Debug, Default, Deserialize)]
struct PartialCredentials {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl PartialCredentials {
    fn complete(self) -> Option<Credentials> {
        match (self.username, self.password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(Credentials { username, password })
            }
            _ => None,
        }
    }
}

/// Where credentials may come from, in lookup order after the auth file and store.
#[derive(Debug, Clone, Default)]
pub struct CredentialSources {
    /// JSON file with `username` and `password`; wins when it exists.
    pub auth_file: Option<PathBuf>,
    /// `--username` / `-u`
    pub username: Option<String>,
    /// `--password` / `-p`
    pub password: Option<String>,
    /// Positional arguments: username then password.
    pub positional: Vec<String>,
    pub env_username: Option<String>,
    pub env_password: Option<String>,
}

impl CredentialSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the environment fields from `GITHUB_USERNAME` and `GITHUB_PASSWORD`.
    pub fn with_env(mut self) -> Self {
        self.env_username = std::env::var("GITHUB_USERNAME").ok();
        self.env_password = std::env::var("GITHUB_PASSWORD").ok();
        self
    }

    fn argument_credentials(&self) -> PartialCredentials {
        PartialCredentials {
            username: self
                .username
                .clone()
                .or_else(|| self.positional.first().cloned())
                .or_else(|| self.env_username.clone()),
            password: self
                .password
                .clone()
                .or_else(|| self.positional.get(1).cloned())
                .or_else(|| self.env_password.clone()),
        }
    }
}

/// Resolve credentials.
///
/// Lookup order: the auth file (if it exists), the `auth` entry of `store`,
/// then arguments, positional arguments and environment. The first source
/// found is used; if it does not hold a non-empty username and password the
/// result is [`GistsError::MissingCredentials`]. A valid pair is written back
/// to `store`.
pub fn resolve(sources: &CredentialSources, store: Option<&Store>) -> Result<Credentials> {
    let found = lookup(sources, store)?;

    let credentials = found.complete().ok_or(GistsError::MissingCredentials)?;
    if let Some(store) = store {
        store.set(STORE_KEY, &credentials)?;
    }
    Ok(credentials)
}

fn lookup(sources: &CredentialSources, store: Option<&Store>) -> Result<PartialCredentials> {
    if let Some(path) = sources.auth_file.as_ref().filter(|p| p.exists()) {
        debug!(path = %path.display(), "reading credentials from auth file");
        let contents = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&contents)?);
    }

    if let Some(store) = store
        && let Some(saved) = store.get::<PartialCredentials>(STORE_KEY)?
    {
        debug!(path = %store.path().display(), "using stored credentials");
        return Ok(saved);
    }

    Ok(sources.argument_credentials())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> Store {
        Store::open(dir.path().join("store.json"))
    }

    #[test]
    fn test_flags_win_over_positional_and_env() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let sources = CredentialSources {
            username: Some("flag-user".to_string()),
            positional: vec!["pos-user".to_string(), "pos-pass".to_string()],
            env_username: Some("env-user".to_string()),
            env_password: Some("env-pass".to_string()),
            ..CredentialSources::default()
        };

        let credentials = resolve(&sources, Some(&store)).unwrap();
        assert_eq!(credentials.username, "flag-user");
        assert_eq!(credentials.password, "pos-pass");
    }

    #[test]
    fn test_resolved_pair_is_persisted() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let sources = CredentialSources {
            env_username: Some("doowb".to_string()),
            env_password: Some("secret".to_string()),
            ..CredentialSources::default()
        };

        resolve(&sources, Some(&store)).unwrap();

        // A later run with no arguments reuses the stored pair.
        let reused = resolve(&CredentialSources::new(), Some(&store)).unwrap();
        assert_eq!(
            reused,
            Credentials {
                username: "doowb".to_string(),
                password: "secret".to_string(),
            }
        );
    }

    #[test]
    fn test_auth_file_wins() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .set(
                STORE_KEY,
                &Credentials {
                    username: "stored".to_string(),
                    password: "stored-pass".to_string(),
                },
            )
            .unwrap();

        let auth_file = local_auth_path(dir.path());
        fs::create_dir_all(auth_file.parent().unwrap()).unwrap();
        fs::write(&auth_file, r#"{"username": "file-user", "password": "file-pass"}"#).unwrap();

        let sources = CredentialSources {
            auth_file: Some(auth_file),
            ..CredentialSources::default()
        };
        let credentials = resolve(&sources, Some(&store)).unwrap();
        assert_eq!(credentials.username, "file-user");
    }

    #[test]
    fn test_missing_auth_file_falls_through() {
        let dir = TempDir::new().unwrap();
        let sources = CredentialSources {
            auth_file: Some(dir.path().join("nope.json")),
            positional: vec!["u".to_string(), "p".to_string()],
            ..CredentialSources::default()
        };

        let credentials = resolve(&sources, None).unwrap();
        assert_eq!(credentials.username, "u");
        assert_eq!(credentials.password, "p");
    }

    #[test]
    fn test_incomplete_pair_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let sources = CredentialSources {
            username: Some("doowb".to_string()),
            password: Some(String::new()),
            ..CredentialSources::default()
        };

        let err = resolve(&sources, Some(&store)).unwrap_err();
        assert!(matches!(err, GistsError::MissingCredentials));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_into_config_uses_basic_auth() {
        let config = Credentials {
            username: "doowb".to_string(),
            password: "secret".to_string(),
        }
        .into_config();

        assert!(matches!(config.auth(), crate::config::Auth::Basic { .. }));
    }
}

// Gists API response types and request bodies.
// Responses stay opaque JSON; these structs are optional typed views over them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::transport::RequestOptions;

/// GitHub user owning a gist or writing a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistOwner {
    pub id: u64,
    pub login: String,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
}

/// One file of a gist. `content` is only present on single-gist responses
/// and may be truncated for large files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistFile {
    pub filename: Option<String>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub language: Option<String>,
    pub raw_url: Option<String>,
    pub size: Option<u64>,
    #[serde(default)]
    pub truncated: bool,
    pub content: Option<String>,
}

/// A gist as returned by get, list and create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gist {
    pub id: String,
    pub url: String,
    pub html_url: String,
    pub description: Option<String>,
    pub public: bool,
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
    pub owner: Option<GistOwner>,
    #[serde(default)]
    pub comments: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub truncated: bool,
}

/// A comment on a gist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistComment {
    pub id: u64,
    pub url: String,
    pub body: String,
    pub user: Option<GistOwner>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Line counts for a gist revision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeStatus {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
}

/// Entry of the commits listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistCommit {
    pub version: String,
    pub url: String,
    pub user: Option<GistOwner>,
    #[serde(default)]
    pub change_status: ChangeStatus,
    pub committed_at: DateTime<Utc>,
}

/// Body builder for creating or editing a gist.
///
/// ```
/// use gists::NewGist;
///
/// let options = NewGist::new()
///     .description("notes")
///     .public(false)
///     .file("readme.md", "# hello")
///     .into_options();
/// assert_eq!(options.get("public"), Some(&serde_json::json!(false)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NewGist {
    description: Option<String>,
    public: Option<bool>,
    files: Map<String, Value>,
}

impl NewGist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    /// Add or replace a file.
    pub fn file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files
            .insert(name.into(), json!({ "content": content.into() }));
        self
    }

    /// Rename a file while editing, optionally replacing its content.
    pub fn rename(
        mut self,
        name: impl Into<String>,
        new_name: impl Into<String>,
        content: Option<String>,
    ) -> Self {
        let mut file = Map::new();
        file.insert("filename".to_string(), Value::String(new_name.into()));
        if let Some(content) = content {
            file.insert("content".to_string(), Value::String(content));
        }
        self.files.insert(name.into(), Value::Object(file));
        self
    }

    /// Remove a file while editing.
    pub fn remove(mut self, name: impl Into<String>) -> Self {
        self.files.insert(name.into(), Value::Null);
        self
    }

    pub fn into_options(self) -> RequestOptions {
        let mut options = RequestOptions::new();
        if let Some(description) = self.description {
            options.insert("description", description);
        }
        if let Some(public) = self.public {
            options.insert("public", public);
        }
        if !self.files.is_empty() {
            options.insert("files", Value::Object(self.files));
        }
        options
    }
}

impl From<NewGist> for RequestOptions {
    fn from(gist: NewGist) -> Self {
        gist.into_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_gist_body() {
        let options = NewGist::new()
            .description("snippets")
            .public(true)
            .file("a.rs", "fn main() {}")
            .remove("old.txt")
            .rename("b.md", "c.md", None)
            .into_options();

        let body: Value = options.into();
        assert_eq!(
            body,
            json!({
                "description": "snippets",
                "public": true,
                "files": {
                    "a.rs": { "content": "fn main() {}" },
                    "old.txt": null,
                    "b.md": { "filename": "c.md" }
                }
            })
        );
    }

    #[test]
    fn test_empty_new_gist_has_no_keys() {
        assert!(NewGist::new().into_options().is_empty());
    }

    #[test]
    fn test_deserialize_gist() {
        let gist: Gist = serde_json::from_value(json!({
            "id": "3b7a6e680ea8aa0395d92d18304e575e",
            "url": "https://api.github.com/gists/3b7a6e680ea8aa0395d92d18304e575e",
            "html_url": "https://gist.github.com/3b7a6e680ea8aa0395d92d18304e575e",
            "description": null,
            "public": true,
            "files": {
                "readme.md": {
                    "filename": "readme.md",
                    "type": "text/markdown",
                    "language": "Markdown",
                    "raw_url": "https://gist.githubusercontent.com/raw/readme.md",
                    "size": 7,
                    "content": "# hello"
                }
            },
            "owner": { "id": 1, "login": "doowb" },
            "comments": 1,
            "created_at": "2017-05-01T12:00:00Z",
            "updated_at": "2017-05-02T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(gist.owner.unwrap().login, "doowb");
        let file = &gist.files["readme.md"];
        assert_eq!(file.mime_type.as_deref(), Some("text/markdown"));
        assert_eq!(file.content.as_deref(), Some("# hello"));
        assert!(!file.truncated);
    }

    #[test]
    fn test_deserialize_commit_without_change_status() {
        let commit: GistCommit = serde_json::from_value(json!({
            "version": "57a7f021a713b1c5a6a199b54cc514735d2d462f",
            "url": "https://api.github.com/gists/aa5a315d61ae9438b18d/57a7f021a713b1c5a6a199b54cc514735d2d462f",
            "user": null,
            "committed_at": "2010-04-14T02:15:15Z"
        }))
        .unwrap();

        assert_eq!(commit.change_status.total, 0);
        assert!(commit.user.is_none());
    }
}

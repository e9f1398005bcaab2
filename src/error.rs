// Error types for the gists client.
// Separates transport failures, API status errors, and local configuration problems.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GistsError {
    #[error("GitHub API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for {url}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request options must be a JSON object, got {0}")]
    InvalidOptions(String),

    #[error("Unexpected response body from {url}: {body}")]
    UnexpectedBody { url: String, body: String },

    #[error("Refusing to follow pagination link to another origin: {0}")]
    ForeignLink(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("No GitHub username/password found in auth file, store, arguments or environment")]
    MissingCredentials,
}

impl GistsError {
    /// HTTP status of an API error, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GistsError::Status { status, .. } => Some(*status),
            GistsError::Http(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

pub type Result<T> = std::result::Result<T, GistsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_reports_code() {
        let err = GistsError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://api.github.com/gists/abc/star".to_string(),
            body: r#"{"message":"Not Found"}"#.to_string(),
        };

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.is_not_found());
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("/gists/abc/star"));
    }

    #[test]
    fn test_local_errors_have_no_status() {
        assert_eq!(GistsError::MissingCredentials.status(), None);
        assert!(!GistsError::InvalidOptions("[]".to_string()).is_not_found());
    }
}

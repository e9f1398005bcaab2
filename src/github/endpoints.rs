// Gists API endpoint methods.
// Each method maps one operation to a verb and path on the injected transport.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::Result;

use super::client::HttpClient;
use super::transport::{RequestOptions, Transport};

/// Gists API façade over a [`Transport`].
///
/// ```no_run
/// # async fn run() -> gists::Result<()> {
/// use gists::{ClientConfig, Gists};
///
/// let gists = Gists::new(&ClientConfig::new().with_token("ghp_..."))?;
/// let gist = gists.get("3b7a6e680ea8aa0395d92d18304e575e", None).await?;
/// println!("{}", gist["url"]);
/// # Ok(())
/// # }
/// ```
pub struct Gists<T = HttpClient> {
    transport: T,
}

impl Gists<HttpClient> {
    /// Build a façade backed by the reqwest client.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpClient::new(config)?))
    }

    /// Build a façade from `GITHUB_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_transport(HttpClient::from_env()?))
    }
}

impl<T: Transport> Gists<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a new gist. `POST /gists`
    pub async fn create(&self, options: &RequestOptions) -> Result<Value> {
        self.transport.post("/gists", Some(options)).await
    }

    /// Get a gist. `GET /gists/:gist_id`
    pub async fn get(&self, gist_id: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport
            .get(&format!("/gists/{}", gist_id), options)
            .await
    }

    /// List public gists for `username`. `GET /users/:username/gists`
    pub async fn list(&self, username: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport
            .get(&format!("/users/{}/gists", username), options)
            .await
    }

    /// The authenticated user's gists, or all public gists when anonymous.
    /// Follows every page. `GET /gists`
    pub async fn all(&self, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport.paged("/gists", options).await
    }

    /// All public gists, most recently updated first. Follows every page.
    /// `GET /gists/public`
    pub async fn public(&self, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport.paged("/gists/public", options).await
    }

    /// The authenticated user's starred gists. `GET /gists/starred`
    pub async fn starred(&self, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport.get("/gists/starred", options).await
    }

    /// A specific revision of a gist. `GET /gists/:gist_id/:sha`
    pub async fn revision(
        &self,
        gist_id: &str,
        sha: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        self.transport
            .get(&format!("/gists/{}/{}", gist_id, sha), options)
            .await
    }

    /// `GET /gists/:gist_id/commits`
    pub async fn commits(&self, gist_id: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport
            .get(&format!("/gists/{}/commits", gist_id), options)
            .await
    }

    /// `GET /gists/:gist_id/forks`
    pub async fn forks(&self, gist_id: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport
            .get(&format!("/gists/{}/forks", gist_id), options)
            .await
    }

    /// `POST /gists/:gist_id/forks`
    pub async fn fork(&self, gist_id: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport
            .post(&format!("/gists/{}/forks", gist_id), options)
            .await
    }

    /// `PATCH /gists/:gist_id`
    pub async fn edit(&self, gist_id: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport
            .patch(&format!("/gists/{}", gist_id), options)
            .await
    }

    /// `DELETE /gists/:gist_id`
    pub async fn delete(&self, gist_id: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport
            .delete(&format!("/gists/{}", gist_id), options)
            .await
    }

    /// `PUT /gists/:gist_id/star`
    pub async fn star(&self, gist_id: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport
            .put(&format!("/gists/{}/star", gist_id), options)
            .await
    }

    /// `DELETE /gists/:gist_id/star`
    pub async fn unstar(&self, gist_id: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.transport
            .delete(&format!("/gists/{}/star", gist_id), options)
            .await
    }

    /// Whether the authenticated user starred the gist. `GET /gists/:gist_id/star`
    ///
    /// GitHub answers 204 when starred and 404 when not; the 404 becomes
    /// `Ok(false)`. Every other error is returned unchanged.
    pub async fn is_starred(&self, gist_id: &str, options: Option<&RequestOptions>) -> Result<bool> {
        let result = self
            .transport
            .get(&format!("/gists/{}/star", gist_id), options)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// `POST /gists/:gist_id/comments`
    pub async fn create_comment(
        &self,
        gist_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        self.transport
            .post(&format!("/gists/{}/comments", gist_id), options)
            .await
    }

    /// `GET /gists/:gist_id/comments/:comment_id`
    pub async fn get_comment(
        &self,
        gist_id: &str,
        comment_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        self.transport
            .get(&format!("/gists/{}/comments/{}", gist_id, comment_id), options)
            .await
    }

    /// `GET /gists/:gist_id/comments`
    pub async fn list_comments(
        &self,
        gist_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        self.transport
            .get(&format!("/gists/{}/comments", gist_id), options)
            .await
    }

    /// `PATCH /gists/:gist_id/comments/:comment_id`
    pub async fn edit_comment(
        &self,
        gist_id: &str,
        comment_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        self.transport
            .patch(&format!("/gists/{}/comments/{}", gist_id, comment_id), options)
            .await
    }

    /// `DELETE /gists/:gist_id/comments/:comment_id`
    pub async fn delete_comment(
        &self,
        gist_id: &str,
        comment_id: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        self.transport
            .delete(&format!("/gists/{}/comments/{}", gist_id, comment_id), options)
            .await
    }
}

// GitHub API HTTP client.
// Handles authentication, query/body encoding, status checking and Link-header pagination.

use async_trait::async_trait;
use reqwest::{
    Client, Method, RequestBuilder, Response, Url,
    header::{ACCEPT, CONTENT_LENGTH, HeaderMap, HeaderValue, LINK, USER_AGENT},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Auth, ClientConfig};
use crate::error::{GistsError, Result};

use super::transport::{RequestOptions, Transport};

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Page size requested from paged endpoints unless the caller picks one.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// reqwest-backed [`Transport`] talking to the GitHub REST API.
pub struct HttpClient {
    client: Client,
    api_url: String,
    auth: Auth,
}

impl HttpClient {
    /// Create a new client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(config.user_agent())
                .map_err(|e| GistsError::Config(e.to_string()))?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GistsError::Config(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url().to_string(),
            auth: config.auth(),
        })
    }

    /// Create a client from `GITHUB_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Resolve an API path against the base URL. Absolute URLs pass through.
    fn url(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.api_url, path)
        } else {
            format!("{}/{}", self.api_url, path)
        }
    }

    /// Whether `url` shares scheme, host and port with the base URL.
    fn same_origin(&self, url: &str) -> bool {
        match (Url::parse(&self.api_url), Url::parse(url)) {
            (Ok(base), Ok(target)) => base.origin() == target.origin(),
            _ => false,
        }
    }

    fn build(&self, method: Method, url: &str, options: Option<&RequestOptions>) -> RequestBuilder {
        let sends_body = matches!(method, Method::POST | Method::PUT | Method::PATCH);
        let request = self.client.request(method, url);

        let request = match &self.auth {
            Auth::Anonymous => request,
            Auth::Basic { username, password } => request.basic_auth(username, Some(password)),
            Auth::Token(token) => request.bearer_auth(token),
        };

        match options {
            Some(options) if sends_body => request.json(options.as_map()),
            Some(options) if !options.is_empty() => request.query(&options.to_query()),
            // GitHub rejects bodyless PUTs (star) without an explicit length.
            None if sends_body => request.header(CONTENT_LENGTH, 0),
            _ => request,
        }
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Response> {
        debug!(%method, url, "sending GitHub API request");
        let response = self.build(method, url, options).send().await?;
        self.check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        warn!(%status, url = %url, "GitHub API request failed");
        Err(GistsError::Status { status, url, body })
    }
}

/// Decode a JSON body; empty bodies (204 No Content) become `Null`.
async fn read_body(response: Response) -> Result<Value> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}

/// Extract the `rel="next"` target from a `Link` header.
pub(crate) fn next_link(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;

    link.split(',').find_map(|part| {
        let mut segments = part.split(';');
        let target = segments.next()?.trim();
        let is_next = segments.any(|s| s.trim() == r#"rel="next""#);
        is_next.then(|| {
            target
                .trim_start_matches('<')
                .trim_end_matches('>')
                .to_string()
        })
    })
}

#[async_trait]
impl Transport for HttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        let response = self.send(method, &self.url(path), options).await?;
        read_body(response).await
    }

    async fn paged(&self, path: &str, options: Option<&RequestOptions>) -> Result<Value> {
        let mut first = options.cloned().unwrap_or_default();
        if !first.contains_key("per_page") {
            first.insert("per_page", DEFAULT_PER_PAGE);
        }

        let response = self.send(Method::GET, &self.url(path), Some(&first)).await?;
        let mut next = next_link(response.headers());
        let mut items = match read_body(response).await? {
            Value::Array(items) => items,
            other => return Ok(other),
        };

        while let Some(url) = next.take() {
            if !self.same_origin(&url) {
                warn!(url = %url, "next page link leaves the API origin");
                return Err(GistsError::ForeignLink(url));
            }

            debug!(url = %url, fetched = items.len(), "following next page");
            let response = self.send(Method::GET, &url, None).await?;
            next = next_link(response.headers());
            match read_body(response).await? {
                Value::Array(page) => items.extend(page),
                other => {
                    return Err(GistsError::UnexpectedBody {
                        url,
                        body: other.to_string(),
                    });
                }
            }
        }

        Ok(Value::Array(items))
    }
}

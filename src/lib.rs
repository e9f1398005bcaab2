//! Async client for the GitHub Gists REST API.
//!
//! [`Gists`] maps each Gists operation (create, get, list, edit, delete,
//! stars, comments, forks, revisions) to one request on a [`Transport`].
//! The bundled [`HttpClient`] handles authentication, pagination and status
//! checking; responses come back as `serde_json::Value`.
//!
//! ## Modules
//!
//! - [`github`]: endpoint façade, transport trait, reqwest client and types
//! - [`config`]: client configuration and credentials
//! - [`credentials`]: credential lookup and persistent store for demos and live tests
//! - [`error`]: error type shared by all operations

pub mod config;
pub mod credentials;
pub mod error;
pub mod github;

pub use config::{Auth, ClientConfig};
pub use error::{GistsError, Result};
pub use github::{
    Gist, GistComment, GistCommit, GistFile, GistOwner, Gists, HttpClient, NewGist,
    RequestOptions, Transport,
};

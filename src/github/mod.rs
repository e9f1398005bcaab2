// GitHub Gists API module.
// Provides the endpoint façade, the transport trait and the reqwest client behind it.

pub mod client;
pub mod endpoints;
pub mod transport;
pub mod types;

pub use client::HttpClient;
pub use endpoints::Gists;
pub use transport::{RequestOptions, Transport};
pub use types::*;

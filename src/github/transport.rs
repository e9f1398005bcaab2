// Transport abstraction used by the Gists façade.
// Any client able to issue verb requests and follow paged listings can back the façade.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::{GistsError, Result};

/// Free-form request options.
///
/// Sent as the query string for `GET`/`DELETE` and as the JSON body for
/// `POST`/`PUT`/`PATCH`. The façade never looks inside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions(Map<String, Value>);

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Wrap an arbitrary JSON value; only objects are accepted.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(GistsError::InvalidOptions(other.to_string())),
        }
    }

    /// Flatten into query pairs. Nulls are dropped, nested values are sent as JSON text.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => b.to_string(),
                    Value::Number(n) => n.to_string(),
                    nested => nested.to_string(),
                };
                Some((key.clone(), value))
            })
            .collect()
    }
}

impl From<Map<String, Value>> for RequestOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<RequestOptions> for Value {
    fn from(options: RequestOptions) -> Self {
        Value::Object(options.0)
    }
}

/// The HTTP collaborator behind [`Gists`](super::Gists).
///
/// Implementors own authentication, the base URL, status checking and
/// pagination. Errors for non-2xx responses must carry the status code so
/// callers can inspect it via [`GistsError::status`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single request and return the decoded body (`Null` when empty).
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Value>;

    /// Fetch every page of a list endpoint and return the concatenated array.
    async fn paged(&self, path: &str, options: Option<&RequestOptions>) -> Result<Value>;

    async fn get(&self, path: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.request(Method::GET, path, options).await
    }

    async fn post(&self, path: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.request(Method::POST, path, options).await
    }

    async fn put(&self, path: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.request(Method::PUT, path, options).await
    }

    async fn patch(&self, path: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.request(Method::PATCH, path, options).await
    }

    async fn delete(&self, path: &str, options: Option<&RequestOptions>) -> Result<Value> {
        self.request(Method::DELETE, path, options).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_to_query_flattens_values() {
        let options = RequestOptions::new()
            .with("since", "2024-01-01T00:00:00Z")
            .with("per_page", 30)
            .with("truncated", false)
            .with("skip", Value::Null)
            .with("labels", json!(["a", "b"]));

        let mut query = options.to_query();
        query.sort();

        assert_eq!(
            query,
            vec![
                ("labels".to_string(), r#"["a","b"]"#.to_string()),
                ("per_page".to_string(), "30".to_string()),
                ("since".to_string(), "2024-01-01T00:00:00Z".to_string()),
                ("truncated".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(RequestOptions::from_value(json!({"body": "hi"})).is_ok());
        assert!(matches!(
            RequestOptions::from_value(json!(["body"])),
            Err(GistsError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_into_value_is_object() {
        let value: Value = RequestOptions::new().with("body", "hi").into();
        assert_eq!(value, json!({"body": "hi"}));
    }
}

//! Base HTTP client shared by the Rancher and catalog clients
//!
//! Construction fetches the API root document, follows the `X-API-Schemas`
//! header to the schema collection and indexes the schemas by type. Typed
//! lookups then resolve a type's collection URL from its schema.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use super::schema::{ApiType, Collection, Schema, Schemas, SCHEMAS_HEADER};
use crate::error::ClientError;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection options for a Rancher API client
#[derive(Clone)]
pub struct ClientOpts {
    pub url: String,
    pub access_key: String,
    pub secret_key: String,
    pub timeout: Duration,
}

impl ClientOpts {
    pub fn new(
        url: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keep the secret out of debug output
impl std::fmt::Debug for ClientOpts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOpts")
            .field("url", &self.url)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Schema-aware client over the Rancher HTTP API
#[derive(Debug, Clone)]
pub struct BaseClient {
    http: Client,
    opts: ClientOpts,
    types: HashMap<String, Schema>,
}

impl BaseClient {
    /// Connect to the API at `opts.url` and load its schemas
    pub async fn connect(opts: ClientOpts) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(opts.timeout).build()?;

        let response = authorized(http.get(&opts.url), &opts).send().await?;
        let response = ensure_status(response, &opts.url, |s| s == StatusCode::OK).await?;

        let schemas_url = response
            .headers()
            .get(SCHEMAS_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::SchemasNotFound {
                url: opts.url.clone(),
            })?;

        let response = if schemas_url != opts.url {
            debug!("Loading schemas from {}", schemas_url);
            let response = authorized(http.get(&schemas_url), &opts).send().await?;
            ensure_status(response, &opts.url, |s| s == StatusCode::OK).await?
        } else {
            response
        };

        let schemas: Schemas = decode(response, &schemas_url).await?;
        let types = schemas
            .data
            .into_iter()
            .map(|schema| (schema.id().to_string(), schema))
            .collect::<HashMap<_, _>>();

        debug!("Loaded {} schema types from {}", types.len(), schemas_url);

        Ok(Self { http, opts, types })
    }

    pub fn url(&self) -> &str {
        &self.opts.url
    }

    /// Schema for a type, if the API published one
    pub fn schema(&self, schema_type: &str) -> Option<&Schema> {
        self.types.get(schema_type)
    }

    pub fn has_type(&self, schema_type: &str) -> bool {
        self.types.contains_key(schema_type)
    }

    /// Names of all known schema types, sorted
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn collection_url(&self, schema_type: &str) -> Result<&str, ClientError> {
        let schema = self
            .schema(schema_type)
            .ok_or_else(|| ClientError::UnknownType {
                schema_type: schema_type.to_string(),
            })?;

        schema
            .collection_url()
            .ok_or_else(|| ClientError::MissingCollectionUrl {
                schema_type: schema_type.to_string(),
            })
    }

    /// Fetch a resource by id. A 404 yields `Ok(None)`.
    pub async fn by_id<T: ApiType>(&self, id: &str) -> Result<Option<T>, ClientError> {
        let url = format!("{}/{}", self.collection_url(T::TYPE)?, id);
        debug!("GET {}", url);

        let response = authorized(self.http.get(&url), &self.opts).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = ensure_status(response, &url, |s| s.is_success()).await?;
        decode(response, &url).await.map(Some)
    }

    /// Fetch the first page of a type's collection
    pub async fn list<T: ApiType>(&self) -> Result<Collection<T>, ClientError> {
        let url = self.collection_url(T::TYPE)?.to_string();
        debug!("GET {}", url);

        let response = authorized(self.http.get(&url), &self.opts).send().await?;
        let response = ensure_status(response, &url, |s| s.is_success()).await?;
        decode(response, &url).await
    }
}

fn authorized(request: RequestBuilder, opts: &ClientOpts) -> RequestBuilder {
    request.basic_auth(&opts.access_key, Some(&opts.secret_key))
}

async fn ensure_status(
    response: Response,
    url: &str,
    accept: impl Fn(StatusCode) -> bool,
) -> Result<Response, ClientError> {
    let status = response.status();
    if accept(status) {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        status_text: status.to_string(),
        body,
        url: url.to_string(),
    })
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_opts_defaults() {
        let opts = ClientOpts::new("http://rancher/v2-beta", "access", "secret");
        assert_eq!(opts.timeout, DEFAULT_TIMEOUT);
        assert_eq!(opts.access_key, "access");
    }

    #[test]
    fn test_client_opts_debug_redacts_secret() {
        let opts = ClientOpts::new("http://rancher", "access", "hunter2")
            .with_timeout(Duration::from_secs(3));
        let rendered = format!("{:?}", opts);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("access"));
    }
}

//! Management API client: environments (projects) and registries.

use serde::Deserialize;
use tracing::debug;

use super::base::{BaseClient, ClientOpts};
use super::schema::{null_as_default, ApiType, Resource};
use super::Operations;
use crate::error::ClientError;

/// An environment (called "project" by the API)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,

    #[serde(default)]
    pub orchestration: Option<String>,
}

impl ApiType for Project {
    const TYPE: &'static str = "project";
}

/// Credentials for a container image source, owned by an environment
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub server_address: String,

    /// Id of the owning environment
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
}

impl ApiType for Registry {
    const TYPE: &'static str = "registry";
}

/// Client for the management API, global or scoped to one environment
#[derive(Debug, Clone)]
pub struct RancherClient {
    base: BaseClient,
}

impl RancherClient {
    /// Connect and load schemas
    pub async fn new(opts: ClientOpts) -> Result<Self, ClientError> {
        let base = BaseClient::connect(opts).await?;
        debug!("Connected to {}", base.url());
        Ok(Self { base })
    }

    pub fn url(&self) -> &str {
        self.base.url()
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    pub fn project(&self) -> Operations<'_, Project> {
        Operations::new(&self.base)
    }

    pub fn registry(&self) -> Operations<'_, Registry> {
        Operations::new(&self.base)
    }
}

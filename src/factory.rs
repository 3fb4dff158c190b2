//! Scoped client constructors
//!
//! Each constructor forwards the stored URL and credentials verbatim and
//! returns the first error it hits unchanged.

use tracing::info;

use crate::api::{CatalogClient, RancherClient};
use crate::config::Config;
use crate::error::FactoryError;

/// Path appended to an environment's self link
const ENVIRONMENT_SCHEMAS_PATH: &str = "/schemas";

impl Config {
    /// Client scoped to the global API
    pub async fn global_client(&self) -> Result<RancherClient, FactoryError> {
        let client = RancherClient::new(self.client_opts(&self.api_url)).await?;
        info!("Rancher client configured for url: {}", self.api_url);
        Ok(client)
    }

    /// Client scoped to one environment's API
    pub async fn environment_client(&self, env: &str) -> Result<RancherClient, FactoryError> {
        let global = self.global_client().await?;

        let project = global
            .project()
            .by_id(env)
            .await?
            .ok_or_else(|| FactoryError::EnvironmentNotFound { id: env.to_string() })?;

        let project_url = project
            .resource
            .self_link()
            .ok_or_else(|| FactoryError::MissingSelfLink { id: env.to_string() })?;

        let url = format!("{}{}", project_url, ENVIRONMENT_SCHEMAS_PATH);
        info!("Rancher client configured for url: {}", url);

        let client = RancherClient::new(self.client_opts(url)).await?;
        Ok(client)
    }

    /// Client scoped to the environment that owns a registry
    pub async fn registry_client(&self, id: &str) -> Result<RancherClient, FactoryError> {
        let global = self.global_client().await?;

        let registry = global
            .registry()
            .by_id(id)
            .await?
            .ok_or_else(|| FactoryError::RegistryNotFound { id: id.to_string() })?;

        self.environment_client(&registry.account_id).await
    }

    /// Client scoped to the catalog API
    pub async fn catalog_client(&self) -> Result<CatalogClient, FactoryError> {
        let client = CatalogClient::new(self.client_opts(&self.api_url)).await?;
        Ok(client)
    }
}

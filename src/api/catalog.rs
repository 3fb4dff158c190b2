//! Catalog API client: catalogs, templates and template versions.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use super::base::{BaseClient, ClientOpts};
use super::schema::{null_as_default, ApiType, Resource};
use super::Operations;
use crate::error::ClientError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default)]
    pub branch: Option<String>,

    #[serde(default)]
    pub kind: Option<String>,
}

impl ApiType for Catalog {
    const TYPE: &'static str = "catalog";
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub catalog_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_name: String,

    #[serde(default)]
    pub default_version: Option<String>,

    /// Version string to template-version URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub version_links: HashMap<String, String>,
}

impl ApiType for Template {
    const TYPE: &'static str = "template";
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVersion {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub files: HashMap<String, String>,
}

impl ApiType for TemplateVersion {
    const TYPE: &'static str = "templateVersion";
}

/// Client for the catalog API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base: BaseClient,
}

impl CatalogClient {
    pub async fn new(opts: ClientOpts) -> Result<Self, ClientError> {
        let base = BaseClient::connect(opts).await?;
        debug!("Connected to catalog API at {}", base.url());
        Ok(Self { base })
    }

    pub fn url(&self) -> &str {
        self.base.url()
    }

    pub fn base(&self) -> &BaseClient {
        &self.base
    }

    pub fn catalog(&self) -> Operations<'_, Catalog> {
        Operations::new(&self.base)
    }

    pub fn template(&self) -> Operations<'_, Template> {
        Operations::new(&self.base)
    }

    pub fn template_version(&self) -> Operations<'_, TemplateVersion> {
        Operations::new(&self.base)
    }
}

//! Rancher API client layer
//!
//! - `base`: HTTP transport, Basic auth, schema discovery
//! - `rancher`: management API types (environments, registries)
//! - `catalog`: catalog API types (catalogs, templates)

pub mod base;
pub mod catalog;
pub mod rancher;
pub mod schema;

use std::marker::PhantomData;

use crate::error::ClientError;

pub use base::{BaseClient, ClientOpts, DEFAULT_TIMEOUT};
pub use catalog::{Catalog, CatalogClient, Template, TemplateVersion};
pub use rancher::{Project, RancherClient, Registry};
pub use schema::{ApiType, Collection, Resource, Schema};

/// Typed lookups for one resource type
pub struct Operations<'a, T> {
    client: &'a BaseClient,
    _type: PhantomData<T>,
}

impl<'a, T: ApiType> Operations<'a, T> {
    pub(crate) fn new(client: &'a BaseClient) -> Self {
        Self {
            client,
            _type: PhantomData,
        }
    }

    /// Fetch by id; `None` when the API has no such record
    pub async fn by_id(&self, id: &str) -> Result<Option<T>, ClientError> {
        self.client.by_id::<T>(id).await
    }

    /// List the first page of the collection
    pub async fn list(&self) -> Result<Vec<T>, ClientError> {
        Ok(self.client.list::<T>().await?.data)
    }
}

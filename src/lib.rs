//! Rancher API configuration and scoped client factory
//!
//! Holds the API URL and credential pair and builds clients scoped to the
//! global API, a single environment, a registry's owning environment, or the
//! catalog API.

pub mod api;
pub mod config;
pub mod error;
pub mod factory;

pub use api::{CatalogClient, ClientOpts, RancherClient};
pub use config::{Config, ConfigSources, LoadedConfig};
pub use error::{ClientError, ConfigError, FactoryError};

//! Centralized error types for rancher-config
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Top-level error type for client factory operations
#[derive(Error, Debug)]
pub enum FactoryError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Environment ID {id} not found. Check your API key permissions.")]
    EnvironmentNotFound { id: String },

    #[error("Environment {id} has no self link")]
    MissingSelfLink { id: String },

    #[error("Registry ID {id} not found. Check your API key permissions.")]
    RegistryNotFound { id: String },
}

/// Rancher API client errors
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bad response statusCode [{status}]. Status [{status_text}]. Body: [{body}] from [{url}]")]
    Api {
        status: u16,
        status_text: String,
        body: String,
        url: String,
    },

    #[error("Failed to find schema at [{url}]")]
    SchemasNotFound { url: String },

    #[error("Unknown schema type [{schema_type}]")]
    UnknownType { schema_type: String },

    #[error("Failed to find collection URL for [{schema_type}]")]
    MissingCollectionUrl { schema_type: String },

    #[error("Failed to decode response from [{url}]: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// HTTP status code when the error came from a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required configuration missing: {field}")]
    MissingField { field: String },

    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },
}

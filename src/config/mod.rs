//! # Rancher Connection Configuration
//!
//! Layered configuration loading: explicit values → Rancher CLI config file
//!
//! ## Sources
//!
//! 1. **Explicit** (flags, or `RANCHER_URL` / `RANCHER_ACCESS_KEY` /
//!    `RANCHER_SECRET_KEY` via clap)
//! 2. **CLI config file** (`$HOME/.rancher/cli.json` by default)
//!    - Keys: `url`, `accessKey`, `secretKey`, `environment`
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! let loaded = ConfigSources::default().with_url("https://rancher.example.com").load()?;
//! let client = loaded.config.global_client().await?;
//! ```

mod cli_file;
mod loader;

pub use cli_file::{default_cli_config_path, CliConfigFile};
pub use loader::{api_url, ConfigSources, LoadedConfig, DEFAULT_API_VERSION};

use std::time::Duration;

use crate::api::{ClientOpts, DEFAULT_TIMEOUT};
use crate::error::ConfigError;

/// Connection parameters for a Rancher API
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub access_key: String,
    pub secret_key: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(
        api_url: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// All three connection fields must be non-empty to authenticate
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("api_url", &self.api_url),
            ("access_key", &self.access_key),
            ("secret_key", &self.secret_key),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "timeout".to_string(),
                value: humantime::format_duration(self.timeout).to_string(),
            });
        }

        Ok(())
    }

    /// Client options for `url` with the stored credentials
    pub(crate) fn client_opts(&self, url: impl Into<String>) -> ClientOpts {
        ClientOpts::new(url, &self.access_key, &self.secret_key).with_timeout(self.timeout)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

//! Merge explicit values with the CLI config file into a validated [`Config`].

use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use super::cli_file::{default_cli_config_path, CliConfigFile};
use super::Config;
use crate::api::DEFAULT_TIMEOUT;
use crate::error::ConfigError;

/// API version path appended to the base URL
pub const DEFAULT_API_VERSION: &str = "v2-beta";

/// A validated config plus the default environment, if any
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub environment: Option<String>,
}

/// Configuration inputs in priority order
#[derive(Clone, Default)]
pub struct ConfigSources {
    pub url: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub environment: Option<String>,

    /// Explicit config file; must exist when set
    pub config_path: Option<PathBuf>,

    /// Defaults to [`DEFAULT_API_VERSION`]
    pub api_version: Option<String>,

    pub timeout: Option<Duration>,
}

impl ConfigSources {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_credentials(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Read the config file (if any), merge and validate
    pub fn load(self) -> Result<LoadedConfig, ConfigError> {
        let file = match &self.config_path {
            Some(path) => CliConfigFile::load(path)?,
            None => match default_cli_config_path() {
                Some(path) if path.exists() => {
                    debug!("Reading Rancher CLI config from {}", path.display());
                    CliConfigFile::load(&path)?
                }
                _ => CliConfigFile::default(),
            },
        };

        self.merge(file)
    }

    /// Merge with already-parsed file contents and validate
    pub fn merge(self, file: CliConfigFile) -> Result<LoadedConfig, ConfigError> {
        let pick = |explicit: Option<String>, from_file: Option<String>| {
            explicit
                .filter(|v| !v.is_empty())
                .or(from_file)
                .unwrap_or_default()
        };

        let base_url = pick(self.url, file.url);
        let version = self
            .api_version
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let config = Config {
            api_url: if base_url.is_empty() {
                base_url
            } else {
                api_url(&base_url, &version)
            },
            access_key: pick(self.access_key, file.access_key),
            secret_key: pick(self.secret_key, file.secret_key),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        };
        config.validate()?;

        let environment = self
            .environment
            .filter(|e| !e.is_empty())
            .or(file.environment.filter(|e| !e.is_empty()));

        Ok(LoadedConfig {
            config,
            environment,
        })
    }
}

/// Base URL with trailing slashes trimmed and `/{version}` appended unless present
pub fn api_url(base_url: &str, version: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    let version = version.trim_matches('/');

    if version.is_empty() || trimmed.ends_with(&format!("/{}", version)) {
        trimmed.to_string()
    } else {
        format!("{}/{}", trimmed, version)
    }
}

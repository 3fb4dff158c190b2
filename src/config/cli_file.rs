//! Rancher CLI config file (`~/.rancher/cli.json`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Contents of the Rancher CLI config file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CliConfigFile {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub access_key: Option<String>,

    #[serde(default)]
    pub secret_key: Option<String>,

    /// Default environment id
    #[serde(default)]
    pub environment: Option<String>,
}

impl CliConfigFile {
    /// Read and parse a config file. JSON unless the extension is `.yaml`/`.yml`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let parsed = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| ConfigError::ParseError {
            path: path.display().to_string(),
            message,
        })
    }
}

/// `$HOME/.rancher/cli.json`, when `HOME` is set
pub fn default_cli_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(|home| PathBuf::from(home).join(".rancher").join("cli.json"))
}

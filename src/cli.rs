//! CLI definitions for rancher-config
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use rancher_config::ConfigSources;

#[derive(Parser)]
#[command(
    name = "rancher-config",
    version,
    about = "Build scoped Rancher API clients from connection settings",
    long_about = "Resolves the Rancher API URL and key pair from flags, environment and the\nRancher CLI config file, then connects globally or to an environment, registry or catalog."
)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Rancher server URL (API version path is appended)
    #[arg(long, env = "RANCHER_URL", global = true)]
    pub url: Option<String>,

    /// Rancher API access key
    #[arg(long, env = "RANCHER_ACCESS_KEY", global = true)]
    pub access_key: Option<String>,

    /// Rancher API secret key
    #[arg(long, env = "RANCHER_SECRET_KEY", global = true, hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Rancher CLI config file (default: ~/.rancher/cli.json)
    #[arg(long, env = "RANCHER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API version path
    #[arg(long, env = "RANCHER_API_VERSION", default_value = "v2-beta", global = true)]
    pub api_version: String,

    /// Per-request timeout (e.g. "10s", "1m")
    #[arg(long, env = "RANCHER_TIMEOUT", value_parser = humantime::parse_duration, global = true)]
    pub timeout: Option<Duration>,
}

impl ConnectionArgs {
    pub fn sources(&self, environment: Option<String>) -> ConfigSources {
        ConfigSources {
            url: self.url.clone(),
            access_key: self.access_key.clone(),
            secret_key: self.secret_key.clone(),
            environment,
            config_path: self.config.clone(),
            api_version: Some(self.api_version.clone()),
            timeout: self.timeout,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Connect to the global API and show its schema types
    Global,

    /// List environments visible to the API key
    Environments,

    /// Connect to an environment's API
    Environment {
        /// Environment id (default: `environment` from the CLI config file)
        id: Option<String>,
    },

    /// Connect to the API of the environment that owns a registry
    Registry {
        /// Registry id
        id: String,
    },

    /// Connect to the catalog API and list templates
    Catalog,
}

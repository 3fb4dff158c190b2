use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::{catalog, environment, global, registry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .init();

    let env_arg = match &cli.command {
        Commands::Environment { id } => id.clone(),
        _ => None,
    };

    let loaded = cli
        .connection
        .sources(env_arg)
        .load()
        .context("Failed to load Rancher connection settings")?;

    match cli.command {
        Commands::Global => global::execute(&loaded.config).await?,
        Commands::Environments => global::list_environments(&loaded.config).await?,
        Commands::Environment { .. } => environment::execute(&loaded).await?,
        Commands::Registry { id } => registry::execute(&loaded.config, &id).await?,
        Commands::Catalog => catalog::execute(&loaded.config).await?,
    }

    Ok(())
}

//! Global API commands: schema overview and environment listing.

use anyhow::{Context, Result};
use tracing::info;

use rancher_config::Config;

use crate::ui;

/// Connect to the global API and print its schema types
pub async fn execute(config: &Config) -> Result<()> {
    ui::print_header("Rancher Global API");

    let client = config
        .global_client()
        .await
        .context("Failed to build global Rancher client")?;

    let types = client.base().type_names();
    ui::print_field("URL", client.url());
    ui::print_field("Schema types", &types.len().to_string());
    for name in types {
        println!("    {}", name);
    }

    ui::print_success("Connected to global API");
    Ok(())
}

/// List environments visible to the API key
pub async fn list_environments(config: &Config) -> Result<()> {
    ui::print_header("Rancher Environments");

    let client = config
        .global_client()
        .await
        .context("Failed to build global Rancher client")?;

    let projects = client
        .project()
        .list()
        .await
        .context("Failed to list environments")?;

    info!("Found {} environments", projects.len());

    if projects.is_empty() {
        ui::print_warning("No environments visible. Check your API key permissions.");
        return Ok(());
    }

    for project in &projects {
        println!(
            "  {:<10} {:<24} {:<12} {}",
            project.resource.id,
            project.name,
            project.state,
            project.resource.self_link().unwrap_or("-"),
        );
    }

    Ok(())
}

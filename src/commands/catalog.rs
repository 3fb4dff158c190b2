//! Catalog API command: list templates.

use anyhow::{Context, Result};

use rancher_config::Config;

use crate::ui;

pub async fn execute(config: &Config) -> Result<()> {
    ui::print_header("Rancher Catalog");

    let client = config
        .catalog_client()
        .await
        .context("Failed to build catalog client")?;

    ui::print_field("URL", client.url());

    let templates = client
        .template()
        .list()
        .await
        .context("Failed to list catalog templates")?;

    if templates.is_empty() {
        ui::print_info("No templates found");
        return Ok(());
    }

    for template in &templates {
        println!(
            "  {:<32} {:<12} {}",
            template.resource.id,
            template.catalog_id,
            template.default_version.as_deref().unwrap_or("-"),
        );
    }

    ui::print_success(&format!("{} templates", templates.len()));
    Ok(())
}

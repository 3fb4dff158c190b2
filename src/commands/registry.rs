//! Registry-scoped client command.

use anyhow::{Context, Result};

use rancher_config::Config;

use crate::ui;

pub async fn execute(config: &Config, id: &str) -> Result<()> {
    ui::print_header(&format!("Rancher Registry {}", id));

    let client = config
        .registry_client(id)
        .await
        .with_context(|| format!("Failed to build client for registry {}", id))?;

    ui::print_field("Registry", id);
    ui::print_field("URL", client.url());

    ui::print_success("Connected to the registry's environment API");
    Ok(())
}

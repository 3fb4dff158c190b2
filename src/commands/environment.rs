//! Environment-scoped client command.

use anyhow::{Context, Result};

use rancher_config::LoadedConfig;

use crate::ui;

pub async fn execute(loaded: &LoadedConfig) -> Result<()> {
    let env = loaded.environment.as_deref().context(
        "No environment given. Pass an environment id or set `environment` in the Rancher CLI config",
    )?;

    ui::print_header(&format!("Rancher Environment {}", env));

    let client = loaded
        .config
        .environment_client(env)
        .await
        .with_context(|| format!("Failed to build client for environment {}", env))?;

    ui::print_field("Environment", env);
    ui::print_field("URL", client.url());
    ui::print_field("Schema types", &client.base().type_names().len().to_string());

    ui::print_success("Connected to environment API");
    Ok(())
}

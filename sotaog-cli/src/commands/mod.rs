//! CLI command implementations.

pub mod assets;
pub mod facilities;
pub mod truck_tickets;
pub mod wells;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use sotaog_client::{
    Client, ClientConfig, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_CUSTOMER_ID, ENV_URL,
};

/// Connection flags shared by every subcommand.
#[derive(Args)]
pub struct ConnectionArgs {
    /// API base URL
    #[arg(long, env = ENV_URL, global = true)]
    url: Option<String>,

    /// OAuth client id
    #[arg(long, env = ENV_CLIENT_ID, global = true)]
    client_id: Option<String>,

    /// OAuth client secret
    #[arg(long, env = ENV_CLIENT_SECRET, global = true, hide_env_values = true)]
    client_secret: Option<String>,

    /// Tenant to scope requests to
    #[arg(long, env = ENV_CUSTOMER_ID, global = true)]
    customer_id: Option<String>,
}

impl ConnectionArgs {
    fn config(self) -> Result<ClientConfig> {
        let url = self
            .url
            .with_context(|| format!("--url or {ENV_URL} is required"))?;
        let client_id = self
            .client_id
            .with_context(|| format!("--client-id or {ENV_CLIENT_ID} is required"))?;
        let client_secret = self
            .client_secret
            .with_context(|| format!("--client-secret or {ENV_CLIENT_SECRET} is required"))?;

        let config = ClientConfig::new(url, client_id, client_secret);
        Ok(match self.customer_id.filter(|id| !id.is_empty()) {
            Some(customer_id) => config.with_customer_id(customer_id),
            None => config,
        })
    }

    /// Authenticate and return a ready client.
    pub fn connect(self) -> Result<Client> {
        let config = self.config()?;
        tracing::debug!(url = %config.base_url, "Connecting");
        Client::from_config(&config)
            .with_context(|| format!("Failed to connect to {}", config.base_url))
    }
}

/// Print a JSON value pretty-printed on stdout.
pub(crate) fn print_json(value: &Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render response")?;
    println!("{rendered}");
    Ok(())
}

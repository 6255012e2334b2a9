//! Facility commands.

use super::print_json;
use anyhow::{Context, Result};
use serde_json::Value;
use sotaog_client::Client;

/// List facilities.
pub fn list(client: &Client) -> Result<()> {
    let facilities = client
        .get_facilities()
        .context("Failed to list facilities")?;
    print_json(&facilities)
}

/// List SWD networks, optionally only those serving `facility`.
pub fn swd_networks(client: &Client, facility: Option<&str>) -> Result<()> {
    tracing::info!(?facility, "Listing SWD networks");

    let networks = client
        .get_swd_networks(facility)
        .context("Failed to list SWD networks")?;
    print_json(&Value::Array(networks))
}

//! Asset commands - list and show assets, print strapping tables.

use super::print_json;
use anyhow::{Context, Result};
use serde_json::Value;
use sotaog_client::Client;

/// List assets of a collection, filtered client-side.
pub fn list(
    client: &Client,
    kind: &str,
    facility: Option<&str>,
    asset_type: Option<&str>,
) -> Result<()> {
    tracing::info!(kind = %kind, ?facility, ?asset_type, "Listing assets");

    let assets = client
        .get_assets(kind, facility, asset_type)
        .context("Failed to list assets")?;
    print_json(&Value::Array(assets))
}

/// Show one asset.
pub fn show(client: &Client, id: &str, kind: &str) -> Result<()> {
    let asset = client
        .get_asset(id, kind)
        .with_context(|| format!("Failed to get asset '{id}'"))?;
    print_json(&asset)
}

/// Print a strapping table as `level,volume` rows.
pub fn strapping(client: &Client, id: &str, kind: &str) -> Result<()> {
    let table = client
        .get_strapping_table(id, kind)
        .with_context(|| format!("Failed to get strapping table for '{id}'"))?;

    if table.is_empty() {
        println!("No strapping rows for {id}");
        return Ok(());
    }

    println!("level,volume");
    for (level, volume) in table.iter() {
        println!("{level},{volume}");
    }
    Ok(())
}

//! Well commands.

use super::print_json;
use anyhow::{Context, Result};
use sotaog_client::{Client, WellQuery};

/// List daily well production.
pub fn production(client: &Client, filter: WellQuery) -> Result<()> {
    tracing::info!(
        wells = filter.well_ids.len(),
        facilities = filter.facility_ids.len(),
        "Listing well production"
    );

    let production = client
        .list_well_production(&filter)
        .context("Failed to list well production")?;
    print_json(&production)
}

//! Truck ticket commands - list tickets and upload ticket images.

use super::print_json;
use anyhow::{Context, Result};
use sotaog_client::{Client, TruckTicketQuery};
use std::path::Path;

/// List manual or automatic truck tickets.
pub fn list(client: &Client, filter: TruckTicketQuery, auto: bool) -> Result<()> {
    let tickets = if auto {
        client.get_auto_truck_tickets(&filter)
    } else {
        client.get_truck_tickets(&filter)
    }
    .context("Failed to list truck tickets")?;
    print_json(&tickets)
}

/// Upload a ticket image read from `file`.
pub fn upload_image(
    client: &Client,
    id: &str,
    timestamp: i64,
    file: &str,
    content_type: Option<&str>,
) -> Result<()> {
    let path = Path::new(file);
    let image = std::fs::read(path).with_context(|| format!("Failed to read '{file}'"))?;
    let content_type = content_type.unwrap_or_else(|| guess_content_type(path));

    tracing::info!(id = %id, timestamp, bytes = image.len(), content_type = %content_type, "Uploading ticket image");

    client
        .put_truck_ticket_image(id, timestamp, image, content_type)
        .with_context(|| format!("Failed to upload image for ticket '{id}'"))?;

    println!("Uploaded {file} to truck ticket {id} ({timestamp})");
    Ok(())
}

fn guess_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("tif" | "tiff") => "image/tiff",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

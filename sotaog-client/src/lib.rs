//! Blocking Rust client for the SotaOG oil and gas operations API.
//!
//! The client authenticates once with client credentials, then attaches the
//! bearer token (and an optional tenant id) to every call it makes.
//!
//! # Features
//!
//! - Client-credential authentication against `/v1/authenticate`
//! - Tenant scoping through the `x-sotaog-customer-id` header
//! - Wells, facilities, tanks, compressors, alarms, and truck tickets
//! - Datapoints, financials, and customer data feeds
//! - Strapping tables decoded from CSV into [`StrappingTable`]
//! - Client-side facility filtering for asset and SWD network listings
//!
//! # Example
//!
//! ```no_run
//! use sotaog_client::{Client, WellQuery};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect(
//!     "https://api.example.com",
//!     "my-client-id",
//!     "my-client-secret",
//!     Some("acme"),
//! )?;
//!
//! let production = client.list_well_production(&WellQuery {
//!     well_ids: vec!["W1".to_string()],
//!     ..Default::default()
//! })?;
//! println!("{production:#}");
//!
//! let table = client.get_strapping_table("T1", "tanks")?;
//! println!("volume at 1.5: {:?}", table.get(1.5));
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Connection settings can come from the environment:
//!
//! ```no_run
//! # use sotaog_client::{Client, ClientConfig};
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // SOTAOG_API_URL, SOTAOG_CLIENT_ID, SOTAOG_CLIENT_SECRET, SOTAOG_CUSTOMER_ID
//! let config = ClientConfig::from_env()?;
//! let client = Client::from_config(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`:
//!
//! ```no_run
//! # use sotaog_client::{Client, ClientError};
//! # fn example(client: &Client) {
//! match client.get_facility("F1") {
//!     Ok(facility) => println!("Found: {facility}"),
//!     Err(ClientError::Status { status: 404, .. }) => println!("Facility not found"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! # }
//! ```

mod alarms;
mod assets;
mod client;
mod compressors;
mod config;
mod customers;
mod datapoints;
mod error;
mod facilities;
mod financials;
mod query;
mod request;
mod response;
mod services;
mod strapping;
mod truck_tickets;
mod types;
mod wells;

pub use assets::{DEFAULT_ASSET_KIND, DEFAULT_STRAPPING_KIND};
pub use client::{Client, CUSTOMER_ID_HEADER};
pub use config::{
    ClientConfig, ConfigError, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_CUSTOMER_ID, ENV_URL,
};
pub use error::{ClientError, Result};
pub use strapping::StrappingTable;
pub use types::{
    DatapointQuery, DowntimeQuery, FacilityQuery, FinancialsQuery, TruckTicketQuery,
    TypeCurveQuery, WellQuery,
};

pub use serde_json::Value;

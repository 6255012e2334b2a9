//! Asset, asset type, tank, and SWD network operations.
//!
//! Asset listing and SWD network listing filter on the client: the server
//! returns the full collection and the requested facility (and asset type)
//! is matched locally, preserving server order.

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::request::{segment, Request};
use crate::response::{Json, Strapping};
use crate::strapping::StrappingTable;
use serde::Serialize;
use serde_json::Value;

/// Default collection for [`Client::get_asset`] and [`Client::get_assets`].
pub const DEFAULT_ASSET_KIND: &str = "assets";
/// Default collection for [`Client::get_strapping_table`].
pub const DEFAULT_STRAPPING_KIND: &str = "tanks";

impl Client {
    /// Get one asset from a collection such as `assets`, `wells`, or `tanks`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_asset(&self, asset_id: &str, kind: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v1/{}/{}", segment(kind), segment(asset_id)),
            format!("retrieve asset {asset_id} of type {kind}"),
        ))
    }

    /// List a collection of assets, optionally keeping only those whose
    /// `facility` and/or `asset_type` fields match.
    ///
    /// # Arguments
    ///
    /// * `kind` - Collection, usually [`DEFAULT_ASSET_KIND`]
    /// * `facility` - Keep assets whose `facility` equals this value
    /// * `asset_type` - Keep assets whose `asset_type` equals this value
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200 with a JSON array.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use sotaog_client::{Client, DEFAULT_ASSET_KIND};
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::connect("https://api.example.com", "id", "secret", None)?;
    /// let tanks = client.get_assets(DEFAULT_ASSET_KIND, Some("F1"), Some("tank"))?;
    /// println!("{} tanks at F1", tanks.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_assets(
        &self,
        kind: &str,
        facility: Option<&str>,
        asset_type: Option<&str>,
    ) -> Result<Vec<Value>> {
        let operation = format!("retrieve assets of type {kind}");
        let assets = self.call::<Json<Value>>(Request::get(
            format!("/v1/{}", segment(kind)),
            operation.clone(),
        ))?;
        let mut assets = into_array(&operation, assets)?;

        if let Some(facility) = facility.filter(|f| !f.is_empty()) {
            assets.retain(|asset| field_equals(asset, "facility", facility));
        }
        if let Some(asset_type) = asset_type.filter(|t| !t.is_empty()) {
            assets.retain(|asset| field_equals(asset, "asset_type", asset_type));
        }

        Ok(assets)
    }

    /// List asset types.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_asset_types(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get("/v1/asset-types", "get asset types"))
    }

    /// Get one asset type.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_asset_type(&self, asset_type_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v1/asset-types/{}", segment(asset_type_id)),
            format!("retrieve asset type {asset_type_id}"),
        ))
    }

    /// Download and parse an asset's strapping table.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200 with two-column numeric CSV.
    pub fn get_strapping_table(&self, asset_id: &str, kind: &str) -> Result<StrappingTable> {
        self.call::<Strapping>(Request::get(
            format!("/v1/{}/{}/strapping", segment(kind), segment(asset_id)),
            format!("retrieve strapping table for asset {asset_id} of type {kind}"),
        ))
    }

    /// Save tank production records.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn put_tank_production<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value> {
        let request =
            Request::put("/v1/tanks/production", "save tank production data").json(body)?;
        self.call::<Json<Value>>(request)
    }

    /// Save tank daily sales records.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn put_tank_daily_sales<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value> {
        let request =
            Request::put("/v1/tanks/sales/daily", "save tank sales data").json(body)?;
        self.call::<Json<Value>>(request)
    }

    /// List salt-water disposal networks, optionally keeping only those whose
    /// `facilities` list contains `facility`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200 with a JSON array.
    pub fn get_swd_networks(&self, facility: Option<&str>) -> Result<Vec<Value>> {
        let operation = "retrieve SWD networks";
        let networks = self.call::<Json<Value>>(Request::get("/v1/swd-networks", operation))?;
        let mut networks = into_array(operation, networks)?;

        if let Some(facility) = facility.filter(|f| !f.is_empty()) {
            networks.retain(|network| {
                network
                    .get("facilities")
                    .and_then(Value::as_array)
                    .is_some_and(|facilities| facilities.iter().any(|f| f == facility))
            });
        }

        Ok(networks)
    }
}

fn into_array(operation: &str, value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ClientError::InvalidResponse {
            operation: operation.to_string(),
            message: format!("expected a JSON array, got {}", json_kind(&other)),
        }),
    }
}

fn field_equals(item: &Value, field: &str, expected: &str) -> bool {
    item.get(field).is_some_and(|value| value == expected)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

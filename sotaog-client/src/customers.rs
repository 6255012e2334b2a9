//! Customer operations.

use crate::client::Client;
use crate::error::Result;
use crate::request::{segment, Request};
use crate::response::Json;
use serde_json::Value;

impl Client {
    /// List customers visible to the authenticated client.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_customers(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get("/v1/customers", "retrieve customers"))
    }

    /// Get one customer.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_customer(&self, customer_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v1/customers/{}", segment(customer_id)),
            format!("retrieve customer {customer_id}"),
        ))
    }
}

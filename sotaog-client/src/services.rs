//! Reports, notifications, and customer data feeds.

use crate::client::Client;
use crate::error::Result;
use crate::query::Query;
use crate::request::Request;
use crate::response::Json;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct SmsRequest<'a> {
    to_numbers: &'a [String],
    text: &'a str,
}

impl Client {
    /// List available custom reports.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_custom_reports(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            "/v1/custom_reports",
            "retrieve custom reports list",
        ))
    }

    /// Send one text message to several numbers.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn send_sms(&self, to_numbers: &[String], text: &str) -> Result<Value> {
        let request = Request::post("/v1/sms", "send sms").json(&SmsRequest { to_numbers, text })?;
        self.call::<Json<Value>>(request)
    }

    /// Raw Cimarron feed data of a customer.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_cimarron_raw_data(
        &self,
        customer: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Value> {
        let query = Query::new()
            .with("customer", customer)
            .date("start_date", start_date)
            .date("end_date", end_date);
        self.call::<Json<Value>>(
            Request::get("/v2/cimarron-raw-data", "load cimarron raw data").query(query),
        )
    }

    /// Store raw Cimarron feed data.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn post_cimarron_raw_data<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value> {
        let request =
            Request::post("/v2/cimarron-raw-data", "save cimarron raw data").json(body)?;
        self.call::<Json<Value>>(request)
    }

    /// Scheduled data of a customer, optionally for one month.
    ///
    /// The customer travels as the `customer_id` query parameter.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_scheduled_data(&self, customer: &str, month: Option<&str>) -> Result<Value> {
        let query = Query::new()
            .with("customer_id", customer)
            .opt("month", month);
        self.call::<Json<Value>>(
            Request::get("/v2/scheduled-data", "load scheduled data").query(query),
        )
    }
}

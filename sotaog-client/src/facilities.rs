//! Facility, lease, and platform operations.

use crate::client::Client;
use crate::error::Result;
use crate::query::Query;
use crate::request::{segment, Request, CREATED, OK_OR_CREATED};
use crate::response::{Json, NoContent};
use crate::types::FacilityQuery;
use serde::Serialize;
use serde_json::Value;

impl Client {
    /// List leases.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_leases(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get("/v1/leases", "retrieve leases"))
    }

    /// List platforms.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_platforms(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get("/v1/platforms", "retrieve platforms"))
    }

    /// List facilities.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_facilities(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get("/v1/facilities", "retrieve facilities"))
    }

    /// Get one facility.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_facility(&self, facility_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v1/facilities/{}", segment(facility_id)),
            format!("retrieve facility {facility_id}"),
        ))
    }

    /// Get a facility's configuration.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_facility_config(&self, facility_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v1/facilities/{}/config", segment(facility_id)),
            format!("retrieve config for facility {facility_id}"),
        ))
    }

    /// Replace a facility's configuration.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn put_facility_config<T: Serialize + ?Sized>(
        &self,
        facility_id: &str,
        config: &T,
    ) -> Result<()> {
        let request = Request::put(
            format!("/v1/facilities/{}/config", segment(facility_id)),
            "put facility config",
        )
        .json(config)?
        .expect(CREATED)
        .log_failure();
        self.call::<NoContent>(request)
    }

    /// List facility production.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn list_facility_production(&self, filter: &FacilityQuery) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get("/v1/facilities/production", "retrieve facility production")
                .query(facility_query(filter)),
        )
    }

    /// Save facility production records.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn put_facility_production<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value> {
        let request = Request::put(
            "/v1/facilities/production",
            "save facility production data",
        )
        .json(body)?;
        self.call::<Json<Value>>(request)
    }

    /// List facility daily sales.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn list_facility_daily_sales(&self, filter: &FacilityQuery) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get(
                "/v1/facilities/sales/daily",
                "retrieve facility daily sales",
            )
            .query(facility_query(filter)),
        )
    }

    /// Save facility daily sales records.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn put_facility_daily_sales<T: Serialize + ?Sized>(&self, body: &T) -> Result<Value> {
        let request =
            Request::put("/v1/facilities/sales/daily", "save facility sales data").json(body)?;
        self.call::<Json<Value>>(request)
    }

    /// Replace a facility's sales for one month.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200 or 201.
    pub fn put_facility_sales<T: Serialize + ?Sized>(
        &self,
        facility_id: &str,
        month: &str,
        sales: &T,
    ) -> Result<()> {
        let request = Request::put(
            format!(
                "/v1/facilities/sales/{}/{}",
                segment(facility_id),
                segment(month)
            ),
            "put sales",
        )
        .json(sales)?
        .expect(OK_OR_CREATED)
        .log_failure();
        self.call::<NoContent>(request)
    }

    /// List the monthly oil report.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn list_monthly_oil_report(
        &self,
        facility_ids: &[String],
        start_month: Option<&str>,
        end_month: Option<&str>,
    ) -> Result<Value> {
        let query = Query::new()
            .list("facility_ids", facility_ids)
            .opt("start_month", start_month)
            .opt("end_month", end_month);
        self.call::<Json<Value>>(
            Request::get("/v1/facilities/report/oil", "retrieve oil report list").query(query),
        )
    }

    /// Get the data collection configuration of a customer facility.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_collection_config(&self, customer_label: &str, facility_id: &str) -> Result<Value> {
        let query = Query::new()
            .with("customer_label", customer_label)
            .with("facility_id", facility_id);
        self.call::<Json<Value>>(
            Request::get("/v1/collection-config", "get collection config").query(query),
        )
    }
}

fn facility_query(filter: &FacilityQuery) -> Query {
    Query::new()
        .list("facility_ids", &filter.facility_ids)
        .date("start_date", filter.start_date)
        .date("end_date", filter.end_date)
}

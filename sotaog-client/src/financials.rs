//! Commodity prices, financial categories, and asset financials.

use crate::client::Client;
use crate::error::Result;
use crate::query::Query;
use crate::request::{segment, Request, CREATED, OK_OR_CREATED};
use crate::response::{Json, NoContent};
use crate::types::FinancialsQuery;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

impl Client {
    /// Daily oil and gas prices within an optional date range.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_oil_gas_price(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Value> {
        let query = Query::new()
            .date("start_date", start_date)
            .date("end_date", end_date);
        self.call::<Json<Value>>(
            Request::get(
                "/v1/financials/oil-gas-price",
                "retrieve oil gas prices",
            )
            .query(query),
        )
    }

    /// Monthly oil and gas futures within an optional month range.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_oil_gas_future_price(
        &self,
        start_month: Option<&str>,
        end_month: Option<&str>,
    ) -> Result<Value> {
        let query = Query::new()
            .opt("start_month", start_month)
            .opt("end_month", end_month);
        self.call::<Json<Value>>(
            Request::get(
                "/v1/financials/oil-gas-future-price",
                "retrieve oil gas future prices",
            )
            .query(query),
        )
    }

    /// Replace oil and gas futures.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn put_oil_gas_future_price<T: Serialize + ?Sized>(&self, prices: &T) -> Result<Value> {
        let request = Request::put(
            "/v1/financials/oil-gas-future-price",
            "save oil gas future prices",
        )
        .json(prices)?;
        self.call::<Json<Value>>(request)
    }

    /// List financial categories.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_financials_categories(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            "/v1/financials-categories",
            "retrieve financials categories",
        ))
    }

    /// Create a financial category.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn post_financials_category<T: Serialize + ?Sized>(&self, category: &T) -> Result<Value> {
        let request = Request::post(
            "/v1/financials-categories",
            "create financials category",
        )
        .json(category)?
        .expect(CREATED);
        self.call::<Json<Value>>(request)
    }

    /// Create a financial category price.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn post_financials_category_price<T: Serialize + ?Sized>(&self, price: &T) -> Result<Value> {
        let request = Request::post(
            "/v1/financials-categories-price",
            "create financials category price",
        )
        .json(price)?
        .expect(CREATED);
        self.call::<Json<Value>>(request)
    }

    /// Category prices applying to wells on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_well_financials_category_prices(
        &self,
        date: NaiveDate,
        well_ids: &[String],
    ) -> Result<Value> {
        let query = Query::new()
            .date("date", Some(date))
            .list("well_ids", well_ids);
        self.call::<Json<Value>>(
            Request::get(
                "/v1/financials-categories-well-price",
                "retrieve well financials category prices",
            )
            .query(query),
        )
    }

    /// Replace the financials of one asset for one month.
    ///
    /// # Arguments
    ///
    /// * `kind` - Asset family, e.g. `wells`
    /// * `kind_id` - Asset identifier
    /// * `month` - Month key as the server formats it
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200 or 201.
    pub fn put_financials<T: Serialize + ?Sized>(
        &self,
        kind: &str,
        kind_id: &str,
        month: &str,
        financials: &T,
    ) -> Result<()> {
        let request = Request::put(
            format!(
                "/v1/financials/{}/{}/{}",
                segment(kind),
                segment(kind_id),
                segment(month)
            ),
            "put financials",
        )
        .json(financials)?
        .expect(OK_OR_CREATED)
        .log_failure();
        self.call::<NoContent>(request)
    }

    /// Financials of an asset family.
    ///
    /// The asset family only selects the path; the query carries `type` and
    /// whichever filters are set.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_financials(&self, filter: &FinancialsQuery) -> Result<Value> {
        let query = Query::new()
            .with("type", &filter.kind)
            .list("well_ids", &filter.well_ids)
            .list("facility_ids", &filter.facility_ids)
            .list("lease_ids", &filter.lease_ids)
            .date("start_date", filter.start_date)
            .date("end_date", filter.end_date)
            .opt("start_month", filter.start_month.as_deref())
            .opt("end_month", filter.end_month.as_deref());
        self.call::<Json<Value>>(
            Request::get(
                format!("/v1/financials/{}", segment(&filter.asset_type)),
                format!("retrieve {} financials", filter.asset_type),
            )
            .query(query),
        )
    }
}

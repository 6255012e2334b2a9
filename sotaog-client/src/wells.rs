//! Well production, configuration, curves, and analysis operations.

use crate::client::Client;
use crate::error::Result;
use crate::query::Query;
use crate::request::{segment, Request, CREATED};
use crate::response::{Json, NoContent};
use crate::types::{TypeCurveQuery, WellQuery};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

impl Client {
    /// Save production records for many wells at once.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn batch_put_well_production<T: Serialize + ?Sized>(&self, production: &T) -> Result<()> {
        let request = Request::put("/v1/wells/production", "batch create well production")
            .json(production)?
            .expect(CREATED)
            .log_failure();
        self.call::<NoContent>(request)
    }

    /// Save one well's production for one day.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn put_well_production<T: Serialize + ?Sized>(
        &self,
        well_id: &str,
        date: NaiveDate,
        production: &T,
    ) -> Result<()> {
        let request = Request::put(
            format!(
                "/v1/wells/production/{}/{}",
                segment(well_id),
                date.format("%Y-%m-%d")
            ),
            "create well production",
        )
        .json(production)?
        .expect(CREATED)
        .log_failure();
        self.call::<NoContent>(request)
    }

    /// List well production.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn list_well_production(&self, filter: &WellQuery) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get("/v1/wells/production", "retrieve well production")
                .query(well_query(filter)),
        )
    }

    /// List optimised production targets of wells.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn list_well_optimized_production(
        &self,
        well_ids: &[String],
        facility_ids: &[String],
    ) -> Result<Value> {
        let query = Query::new()
            .list("well_ids", well_ids)
            .list("facility_ids", facility_ids);
        self.call::<Json<Value>>(
            Request::get(
                "/v1/wells/optimized-production",
                "retrieve well optimized production",
            )
            .query(query),
        )
    }

    /// List the daily warehouse rollup of wells.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn list_well_daily_warehouse(&self, filter: &WellQuery) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get("/v1/wells/warehouse", "retrieve well warehouse")
                .query(well_query(filter)),
        )
    }

    /// Latest status of wells.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn list_well_status(&self, well_ids: &[String]) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get("/v1/wells/status/latest", "retrieve well status")
                .query(Query::new().list("well_ids", well_ids)),
        )
    }

    /// Daily well sales.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn list_well_sales(
        &self,
        well_ids: &[String],
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get("/v1/wells/sales/daily", "retrieve well sales")
                .query(dated_wells(well_ids, start_date, end_date)),
        )
    }

    /// Get a well's configuration.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_well_config(&self, well_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v1/wells/{}/config", segment(well_id)),
            format!("retrieve config for well {well_id}"),
        ))
    }

    /// Replace a well's configuration.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn put_well_config<T: Serialize + ?Sized>(&self, well_id: &str, config: &T) -> Result<()> {
        let request = Request::put(
            format!("/v1/wells/{}/config", segment(well_id)),
            "put well config",
        )
        .json(config)?
        .expect(CREATED)
        .log_failure();
        self.call::<NoContent>(request)
    }

    /// Get a well's type curve.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_well_type_curve(&self, well_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v1/wells/{}/type-curve", segment(well_id)),
            format!("retrieve type curve for well {well_id}"),
        ))
    }

    /// Replace a well's type curves.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn batch_well_type_curve<T: Serialize + ?Sized>(&self, well_id: &str, curves: &T) -> Result<()> {
        let request = Request::put(
            format!("/v1/wells/{}/type-curve", segment(well_id)),
            "create well type curve",
        )
        .json(curves)?
        .expect(CREATED)
        .log_failure();
        self.call::<NoContent>(request)
    }

    /// Type curves across wells, facilities, or leases.
    ///
    /// `combine` is always sent, as `True` or `False`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_type_curves(&self, filter: &TypeCurveQuery) -> Result<Value> {
        let query = Query::new()
            .list("well_ids", &filter.well_ids)
            .list("facility_ids", &filter.facility_ids)
            .list("lease_ids", &filter.lease_ids)
            .date("start_date", filter.start_date)
            .date("end_date", filter.end_date)
            .bool("combine", filter.combine);
        self.call::<Json<Value>>(
            Request::get("/v1/type-curves", "retrieve type curves").query(query),
        )
    }

    /// Critical rate analysis of a well.
    ///
    /// The date range is only applied when both ends are given.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_critical_rate_analysis(
        &self,
        well_id: &str,
        refresh: bool,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Value> {
        let mut query = Query::new().flag("refresh", refresh);
        if let (Some(start), Some(end)) = (start_date, end_date) {
            query = query.date("start_date", Some(start)).date("end_date", Some(end));
        }
        self.call::<Json<Value>>(
            Request::get(
                format!("/v1/wells/{}/critical-rate-analysis", segment(well_id)),
                "retrieve critical rate data",
            )
            .query(query),
        )
    }

    /// Tubing performance and inflow performance curves of a well.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_well_tpr_ipr_curve(&self, well_id: &str, refresh: bool) -> Result<Value> {
        self.well_analysis(well_id, "tpr-ipr-curve", refresh, "retrieve TPR/IPR curve")
    }

    /// Reservoir management plot data of a well.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_res_mgmt_plots(&self, well_id: &str, refresh: bool) -> Result<Value> {
        self.well_analysis(
            well_id,
            "res_mgmt_plots",
            refresh,
            "retrieve reservoir mgmt plot data",
        )
    }

    /// Flowing bottom-hole pressure of a well.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_flowing_bottom_hole_pressure(&self, well_id: &str, refresh: bool) -> Result<Value> {
        self.well_analysis(
            well_id,
            "flowing-bottom-hole-pressure",
            refresh,
            "retrieve flowing bottom hole pressure",
        )
    }

    /// Save point-in-time well values in bulk.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn batch_put_well_datapoint<T: Serialize + ?Sized>(&self, datapoints: &T) -> Result<()> {
        let request = Request::put("/v1/wells/datapoint", "batch create well datapoint")
            .json(datapoints)?
            .expect(CREATED)
            .log_failure();
        self.call::<NoContent>(request)
    }

    /// Read point-in-time well values.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_well_datapoint(
        &self,
        well_ids: &[String],
        datapoints: &[String],
        timestamps: &[String],
    ) -> Result<Value> {
        let query = Query::new()
            .list("well_ids", well_ids)
            .list("datapoints", datapoints)
            .list("timestamps", timestamps);
        self.call::<Json<Value>>(
            Request::get("/v1/wells/datapoint", "retrieve well datapoint").query(query),
        )
    }

    /// Tank gauge report of wells.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn list_report_tank_gauge(
        &self,
        well_ids: &[String],
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get(
                "/v1/wells/report/tank-gauge",
                "retrieve tank gauge report list",
            )
            .query(dated_wells(well_ids, start_date, end_date)),
        )
    }

    /// Predicted production of wells for today.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_today_predicted(&self, well_ids: &[String], refresh: bool) -> Result<Value> {
        let query = Query::new()
            .list("well_ids", well_ids)
            .flag("refresh", refresh);
        self.call::<Json<Value>>(
            Request::get(
                "/v1/wells/production/today-prediction",
                "retrieve today predicted production",
            )
            .query(query),
        )
    }

    fn well_analysis(
        &self,
        well_id: &str,
        resource: &str,
        refresh: bool,
        operation: &str,
    ) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get(
                format!("/v1/wells/{}/{resource}", segment(well_id)),
                operation,
            )
            .query(Query::new().flag("refresh", refresh)),
        )
    }
}

fn well_query(filter: &WellQuery) -> Query {
    Query::new()
        .list("well_ids", &filter.well_ids)
        .list("facility_ids", &filter.facility_ids)
        .date("start_date", filter.start_date)
        .date("end_date", filter.end_date)
}

fn dated_wells(
    well_ids: &[String],
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Query {
    Query::new()
        .list("well_ids", well_ids)
        .date("start_date", start_date)
        .date("end_date", end_date)
}

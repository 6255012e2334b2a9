//! Datatype and time-series datapoint operations.

use crate::client::Client;
use crate::error::Result;
use crate::query::Query;
use crate::request::{segment, Request, ACCEPTED};
use crate::response::{Json, NoContent};
use crate::types::DatapointQuery;
use serde::Serialize;
use serde_json::Value;

/// Body of `POST /v1/datapoints`.
#[derive(Serialize)]
struct DatapointsRequest<'a, T: ?Sized> {
    asset_datatypes: &'a T,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_ts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_ts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl<'a, T: Serialize + ?Sized> DatapointsRequest<'a, T> {
    fn new(asset_datatypes: &'a T, window: &'a DatapointQuery) -> Self {
        Self {
            asset_datatypes,
            start_ts: window.start_ts.filter(|ts| *ts != 0),
            end_ts: window.end_ts.filter(|ts| *ts != 0),
            sort: window.sort.as_deref().filter(|s| !s.is_empty()),
            limit: window.limit.filter(|l| *l != 0),
        }
    }
}

impl Client {
    /// List datatypes, grouped server-side by `group_by` when given.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_datatypes(&self, group_by: Option<&str>) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get("/v1/datatypes", "get datatypes").query(Query::new().opt("group_by", group_by)),
        )
    }

    /// Get one datatype, grouped by asset.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_datatype(&self, datatype_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get(
                format!("/v1/datatypes/{}", segment(datatype_id)),
                format!("get datatype {datatype_id}"),
            )
            .query(Query::new().with("group_by", "asset")),
        )
    }

    /// Read datapoints for several asset/datatype pairs at once.
    ///
    /// `asset_datatypes` is sent verbatim as the `asset_datatypes` member of
    /// the JSON body; the window fields are added when set.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_datapoints<T: Serialize + ?Sized>(
        &self,
        asset_datatypes: &T,
        window: &DatapointQuery,
    ) -> Result<Value> {
        let request = Request::post("/v1/datapoints", "get datapoints")
            .json(&DatapointsRequest::new(asset_datatypes, window))?
            .log_failure();
        self.call::<Json<Value>>(request)
    }

    /// Read datapoints of one asset.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_asset_datapoints(
        &self,
        asset_id: &str,
        datatypes: &[String],
        window: &DatapointQuery,
    ) -> Result<Value> {
        let query = Query::new()
            .list("datatypes", datatypes)
            .opt_num("start_ts", window.start_ts)
            .opt_num("end_ts", window.end_ts)
            .opt("sort", window.sort.as_deref())
            .opt_num("limit", window.limit);
        self.call::<Json<Value>>(
            Request::get(
                format!("/v1/datapoints/{}", segment(asset_id)),
                format!("get datapoints for asset {asset_id}"),
            )
            .query(query),
        )
    }

    /// Write datapoints for one asset. The server queues them and answers 202.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 202.
    pub fn post_datapoints<T: Serialize + ?Sized>(&self, asset_id: &str, datapoints: &T) -> Result<()> {
        let request = Request::post(
            format!("/v1/datapoints/{}", segment(asset_id)),
            "post datapoints",
        )
        .json(datapoints)?
        .expect(ACCEPTED)
        .log_failure();
        self.call::<NoContent>(request)
    }
}

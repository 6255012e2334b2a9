//! Compressor and VRU compressor operations.

use crate::client::Client;
use crate::error::Result;
use crate::query::Query;
use crate::request::{Request, CREATED};
use crate::response::{Json, NoContent};
use crate::types::DowntimeQuery;
use serde::Serialize;
use serde_json::Value;

impl Client {
    /// List compressors.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_compressors(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get("/v1/compressors", "retrieve compressors"))
    }

    /// List vapour recovery unit compressors.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_vru_compressors(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            "/v1/vru-compressors",
            "retrieve VRU compressors",
        ))
    }

    /// List compressor downtime records.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_compressors_downtime(&self, filter: &DowntimeQuery) -> Result<Value> {
        let query = Query::new()
            .list("compressor_ids", &filter.compressor_ids)
            .list("facility_ids", &filter.facility_ids)
            .date("start_date", filter.start_date)
            .date("end_date", filter.end_date);
        self.call::<Json<Value>>(
            Request::get("/v1/compressors/downtime", "retrieve compressor downtime")
                .query(query)
                .log_failure(),
        )
    }

    /// Save compressor downtime records.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn put_compressor_downtime<T: Serialize + ?Sized>(&self, downtime: &T) -> Result<()> {
        let request = Request::put("/v1/compressors/downtime", "put compressor downtime")
            .json(downtime)?
            .expect(CREATED)
            .log_failure();
        self.call::<NoContent>(request)
    }

    /// List VRU status codes, optionally of one code type.
    ///
    /// The code type travels as the `key` query parameter.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_vru_status_code(&self, code_type: Option<&str>) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get(
                "/v1/vru-compressors-status-code",
                "retrieve VRU status codes",
            )
            .query(Query::new().opt("key", code_type)),
        )
    }
}

//! Alarm, custom alarm, and alarm incident operations.

use crate::client::Client;
use crate::error::Result;
use crate::query::Query;
use crate::request::{segment, Request, CREATED};
use crate::response::{Json, NoContent};
use serde::Serialize;
use serde_json::Value;

impl Client {
    /// List alarm services.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_alarm_services(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            "/v1/alarm-services",
            "retrieve alarm services",
        ))
    }

    /// Get one alarm service.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_alarm_service(&self, alarm_service_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v1/alarm-services/{}", segment(alarm_service_id)),
            format!("retrieve alarm service {alarm_service_id}"),
        ))
    }

    /// List alarms.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_alarms(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get("/v1/alarms", "retrieve alarms"))
    }

    /// Get the alarms of an asset, optionally narrowed to one datatype.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_alarm(&self, asset_id: &str, datatype: Option<&str>) -> Result<Value> {
        let mut path = format!("/v1/alarms/{}", segment(asset_id));
        if let Some(datatype) = datatype.filter(|d| !d.is_empty()) {
            path.push('/');
            path.push_str(&segment(datatype));
        }
        self.call::<Json<Value>>(Request::get(
            path,
            format!("retrieve alarms for {asset_id}"),
        ))
    }

    /// Create or replace the alarm for an asset datatype.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn put_alarm<T: Serialize + ?Sized>(
        &self,
        asset_id: &str,
        datatype: &str,
        alarm: &T,
    ) -> Result<()> {
        let request = Request::put(
            format!("/v1/alarms/{}/{}", segment(asset_id), segment(datatype)),
            "create alarm",
        )
        .json(alarm)?
        .expect(CREATED)
        .log_failure();
        self.call::<NoContent>(request)
    }

    /// List custom alarms.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_custom_alarms(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            "/v1/custom-alarms",
            "retrieve custom alarms",
        ))
    }

    /// Get one custom alarm.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_custom_alarm(&self, alarm_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v1/custom-alarms/{}", segment(alarm_id)),
            format!("retrieve custom alarm {alarm_id}"),
        ))
    }

    /// List custom alarms from the v2 alarm engine.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_custom_alarms_v2(&self) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            "/v2/custom-alarms-new",
            "retrieve custom alarms",
        ))
    }

    /// Get one custom alarm from the v2 alarm engine.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_custom_alarm_v2(&self, alarm_id: &str) -> Result<Value> {
        self.call::<Json<Value>>(Request::get(
            format!("/v2/custom-alarms-new/{}", segment(alarm_id)),
            format!("retrieve custom alarm {alarm_id}"),
        ))
    }

    /// List incidents of a custom alarm for one well.
    ///
    /// All three filters are required by this endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_alarm_incidents(
        &self,
        alarm_id: &str,
        well_id: &str,
        alarm_status: &str,
    ) -> Result<Value> {
        let query = Query::new()
            .with("alarm_id", alarm_id)
            .with("well_id", well_id)
            .with("alarm_status", alarm_status);
        self.call::<Json<Value>>(
            Request::get("/v1/custom-alarms-incidents", "retrieve alarm incidents").query(query),
        )
    }

    /// Record custom alarm incidents.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn put_alarm_incidents<T: Serialize + ?Sized>(&self, incidents: &T) -> Result<Value> {
        let request = Request::put("/v1/custom-alarms-incidents", "create alarm incidents")
            .json(incidents)?
            .expect(CREATED);
        self.call::<Json<Value>>(request)
    }

    /// List incidents of a v2 custom alarm.
    ///
    /// # Arguments
    ///
    /// * `alarm_id` - Alarm identifier (always sent)
    /// * `customer_id` - Optional customer filter
    /// * `asset_id` - Optional asset filter
    /// * `alarm_status` - Optional status filter
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_alarm_incidents_v2(
        &self,
        alarm_id: &str,
        customer_id: Option<&str>,
        asset_id: Option<&str>,
        alarm_status: Option<&str>,
    ) -> Result<Value> {
        let query = Query::new()
            .with("alarm_id", alarm_id)
            .opt("customer_id", customer_id)
            .opt("asset_id", asset_id)
            .opt("alarm_status", alarm_status);
        self.call::<Json<Value>>(
            Request::get(
                "/v2/custom-alarms-incidents-new",
                "retrieve alarm incidents",
            )
            .query(query),
        )
    }

    /// Record v2 custom alarm incidents.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn put_alarm_incidents_v2<T: Serialize + ?Sized>(&self, incidents: &T) -> Result<Value> {
        let request =
            Request::put("/v2/custom-alarms-incidents-new", "create alarm incidents").json(incidents)?;
        self.call::<Json<Value>>(request)
    }
}

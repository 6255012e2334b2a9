//! Manual and automatic truck ticket operations, including ticket images.

use crate::client::Client;
use crate::error::Result;
use crate::query::Query;
use crate::request::{segment, Request, CREATED, NO_CONTENT, OK_OR_CREATED};
use crate::response::{Json, NoContent};
use crate::types::TruckTicketQuery;
use serde::Serialize;
use serde_json::Value;

impl Client {
    /// List manual truck tickets.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_truck_tickets(&self, filter: &TruckTicketQuery) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get("/v1/truck-tickets", "retrieve truck tickets")
                .query(ticket_query(filter)),
        )
    }

    /// List automatically captured truck tickets.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200.
    pub fn get_auto_truck_tickets(&self, filter: &TruckTicketQuery) -> Result<Value> {
        self.call::<Json<Value>>(
            Request::get("/v1/auto-truck-tickets", "retrieve auto truck tickets")
                .query(ticket_query(filter)),
        )
    }

    /// Create a manual truck ticket.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn post_truck_ticket<T: Serialize + ?Sized>(&self, ticket: &T) -> Result<Value> {
        let request = Request::post("/v1/truck-tickets", "create truck ticket")
            .json(ticket)?
            .expect(CREATED);
        self.call::<Json<Value>>(request)
    }

    /// Create an automatic truck ticket.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201.
    pub fn post_auto_truck_ticket<T: Serialize + ?Sized>(&self, ticket: &T) -> Result<Value> {
        let request = Request::post("/v1/auto-truck-tickets", "create auto truck ticket")
            .json(ticket)?
            .expect(CREATED);
        self.call::<Json<Value>>(request)
    }

    /// Update a truck ticket identified by id and timestamp.
    ///
    /// The server exposes this update as a `POST` on the ticket resource.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 200 or 201.
    pub fn put_truck_ticket<T: Serialize + ?Sized>(
        &self,
        ticket_id: &str,
        timestamp: i64,
        ticket: &T,
    ) -> Result<()> {
        let request = Request::post(
            format!("/v1/truck-tickets/{}/{timestamp}", segment(ticket_id)),
            "update truck-ticket",
        )
        .json(ticket)?
        .expect(OK_OR_CREATED)
        .log_failure();
        self.call::<NoContent>(request)
    }

    /// Upload the scanned image of a truck ticket.
    ///
    /// The bytes are sent unchanged with `content_type` as the request
    /// content type; authentication and tenant headers are still attached.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidHeader`](crate::ClientError::InvalidHeader)
    /// for an unusable content type, and an error unless the server answers 204.
    pub fn put_truck_ticket_image(
        &self,
        ticket_id: &str,
        timestamp: i64,
        image: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let request = Request::put(
            format!("/v1/truck-tickets/{}/{timestamp}/image", segment(ticket_id)),
            "create truck ticket image",
        )
        .raw(image, content_type)?
        .expect(NO_CONTENT)
        .log_failure();
        self.call::<NoContent>(request)
    }
}

fn ticket_query(filter: &TruckTicketQuery) -> Query {
    Query::new()
        .opt_num("start_ts", filter.start_ts)
        .opt_num("end_ts", filter.end_ts)
        .opt("type", filter.kind.as_deref())
        .opt("facility", filter.facility.as_deref())
}

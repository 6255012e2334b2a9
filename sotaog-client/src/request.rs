//! Request descriptors.
//!
//! Every endpoint method describes its call as a [`Request`] and hands it to
//! [`Client::call`](crate::Client). The descriptor carries the per-operation
//! quirks: which statuses count as success and whether a failure body is
//! worth logging.

use crate::error::{ClientError, Result};
use crate::query::Query;
use reqwest::header::HeaderValue;
use reqwest::Method;
use serde::Serialize;

/// Statuses most operations accept.
pub(crate) const OK: &[u16] = &[200];
/// Create-style operations.
pub(crate) const CREATED: &[u16] = &[201];
/// Upserts that answer either way.
pub(crate) const OK_OR_CREATED: &[u16] = &[200, 201];
/// Fire-and-forget ingestion.
pub(crate) const ACCEPTED: &[u16] = &[202];
/// Binary uploads.
pub(crate) const NO_CONTENT: &[u16] = &[204];

#[derive(Debug)]
pub(crate) enum Body {
    Empty,
    Json(Vec<u8>),
    Raw(Vec<u8>),
}

/// One HTTP call, fully described.
#[derive(Debug)]
pub(crate) struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Query,
    pub(crate) body: Body,
    pub(crate) content_type: Option<HeaderValue>,
    pub(crate) expect: &'static [u16],
    pub(crate) operation: String,
    pub(crate) log_failure: bool,
}

impl Request {
    fn new(method: Method, path: String, operation: impl Into<String>) -> Self {
        Self {
            method,
            path,
            query: Query::new(),
            body: Body::Empty,
            content_type: None,
            expect: OK,
            operation: operation.into(),
            log_failure: false,
        }
    }

    pub(crate) fn get(path: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(Method::GET, path.into(), operation)
    }

    pub(crate) fn post(path: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(Method::POST, path.into(), operation)
    }

    pub(crate) fn put(path: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::new(Method::PUT, path.into(), operation)
    }

    pub(crate) fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    pub(crate) fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body).map_err(|source| ClientError::Encode {
            operation: self.operation.clone(),
            source,
        })?;
        self.body = Body::Json(bytes);
        self.content_type = Some(HeaderValue::from_static("application/json"));
        Ok(self)
    }

    /// Attach raw bytes sent as-is under the caller's content type.
    pub(crate) fn raw(mut self, body: Vec<u8>, content_type: &str) -> Result<Self> {
        let value =
            HeaderValue::from_str(content_type).map_err(|e| ClientError::InvalidHeader {
                name: "content-type",
                message: e.to_string(),
            })?;
        self.body = Body::Raw(body);
        self.content_type = Some(value);
        Ok(self)
    }

    pub(crate) fn expect(mut self, statuses: &'static [u16]) -> Self {
        self.expect = statuses;
        self
    }

    /// Log the response body at error level when the call fails.
    pub(crate) fn log_failure(mut self) -> Self {
        self.log_failure = true;
        self
    }

    pub(crate) fn accepts(&self, status: u16) -> bool {
        self.expect.contains(&status)
    }
}

/// Percent-encode a caller-supplied path segment.
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}

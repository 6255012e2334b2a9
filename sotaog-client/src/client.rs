//! Core SotaOG client implementation.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::request::{Body, Request};
use crate::response::ResponseFormat;
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, error, info};

/// Header carrying the tenant id.
pub const CUSTOMER_ID_HEADER: &str = "x-sotaog-customer-id";

/// Body returned by `/v1/authenticate`.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Authenticated session state. Fixed for the lifetime of the client.
#[derive(Clone)]
struct Session {
    base_url: String,
    authorization: HeaderValue,
    customer_id: Option<HeaderValue>,
}

impl Session {
    fn new(base_url: String, token: &str, customer_id: Option<&str>) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            ClientError::InvalidHeader {
                name: "authorization",
                message: e.to_string(),
            }
        })?;
        authorization.set_sensitive(true);

        let customer_id = customer_id
            .filter(|id| !id.is_empty())
            .map(HeaderValue::from_str)
            .transpose()
            .map_err(|e| ClientError::InvalidHeader {
                name: CUSTOMER_ID_HEADER,
                message: e.to_string(),
            })?;

        Ok(Self {
            base_url,
            authorization,
            customer_id,
        })
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        if let Some(ref customer_id) = self.customer_id {
            headers.insert(
                HeaderName::from_static(CUSTOMER_ID_HEADER),
                customer_id.clone(),
            );
        }
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// A blocking client for the SotaOG public API.
///
/// Construction performs the client-credential exchange; every later call
/// reuses the bearer token and the underlying connection pool. Tokens are
/// never refreshed: once the server starts rejecting it, build a new client.
///
/// # Example
///
/// ```no_run
/// use sotaog_client::Client;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::connect("https://api.example.com", "id", "secret", None)?;
/// let facilities = client.get_facilities()?;
/// println!("{facilities:#}");
/// # Ok(())
/// # }
/// ```
pub struct Client {
    http: HttpClient,
    session: Session,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.session.base_url)
            .field("customer_id", &self.session.customer_id)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Authenticate against `base_url` and return a ready client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, e.g. `https://api.example.com`; trailing slashes are ignored
    /// * `client_id` / `client_secret` - credential pair sent with HTTP Basic auth
    /// * `customer_id` - optional tenant id attached to every request
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] for a URL without an http(s) scheme,
    /// [`ClientError::Auth`] when the server answers anything but 200, and
    /// [`ClientError::Transport`] when the server cannot be reached.
    pub fn connect(
        base_url: &str,
        client_id: &str,
        client_secret: &str,
        customer_id: Option<&str>,
    ) -> Result<Self> {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url
            )));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        info!(url = %base_url, "Initializing SotaOG API client");

        let http = HttpClient::builder()
            .build()
            .map_err(|source| ClientError::Transport {
                operation: "build HTTP client".to_string(),
                source,
            })?;

        let token = authenticate(&http, &base_url, client_id, client_secret)?;
        let session = Session::new(base_url, &token, customer_id)?;

        Ok(Self { http, session })
    }

    /// Authenticate using a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`Client::connect`].
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::connect(
            &config.base_url,
            &config.client_id,
            &config.client_secret,
            config.customer_id.as_deref(),
        )
    }

    /// Base URL with trailing slashes removed.
    pub fn base_url(&self) -> &str {
        &self.session.base_url
    }

    /// Headers attached to every request: the bearer token and, when a
    /// tenant was supplied, `x-sotaog-customer-id`.
    pub fn headers(&self) -> HeaderMap {
        self.session.headers()
    }

    /// Send one request and decode it with `F`.
    pub(crate) fn call<F: ResponseFormat>(&self, request: Request) -> Result<F::Output> {
        let operation = request.operation.clone();
        let response = self.dispatch(request)?;
        F::decode(&operation, response)
    }

    fn dispatch(&self, request: Request) -> Result<Response> {
        let url = self.session.url(&request.path);
        debug!(
            method = %request.method,
            url = %url,
            operation = %request.operation,
            "Sending request"
        );

        let mut headers = self.session.headers();
        if let Some(ref content_type) = request.content_type {
            headers.insert(CONTENT_TYPE, content_type.clone());
        }

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(request.query.pairs());
        }
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(ref bytes) | Body::Raw(ref bytes) => builder.body(bytes.clone()),
        };

        let response = builder.send().map_err(|source| ClientError::Transport {
            operation: request.operation.clone(),
            source,
        })?;

        let status = response.status();
        if request.accepts(status.as_u16()) {
            debug!(operation = %request.operation, status = status.as_u16(), "Request succeeded");
            return Ok(response);
        }

        let body = response
            .text()
            .unwrap_or_else(|_| "Unknown error".to_string());
        if request.log_failure {
            error!(
                operation = %request.operation,
                status = status.as_u16(),
                body = %body,
                "Request failed"
            );
        } else {
            debug!(
                operation = %request.operation,
                status = status.as_u16(),
                "Request failed"
            );
        }

        Err(ClientError::Status {
            operation: request.operation,
            status: status.as_u16(),
            body,
        })
    }
}

/// Exchange client credentials for a bearer token.
fn authenticate(
    http: &HttpClient,
    base_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String> {
    let operation = "authenticate to API";
    debug!(url = %base_url, "Authenticating to API");

    let response = http
        .post(format!("{}/v1/authenticate", base_url))
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .map_err(|source| ClientError::Transport {
            operation: operation.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        debug!(status = status.as_u16(), "Authentication rejected");
        return Err(ClientError::Auth {
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().map_err(|source| ClientError::Transport {
        operation: operation.to_string(),
        source,
    })?;
    let token: TokenResponse =
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            operation: operation.to_string(),
            source,
        })?;
    debug!("Authenticated");

    Ok(token.access_token)
}

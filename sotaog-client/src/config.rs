//! Connection settings.

use std::env;
use std::fmt;
use thiserror::Error;

/// Environment variable holding the API base URL.
pub const ENV_URL: &str = "SOTAOG_API_URL";
/// Environment variable holding the client id.
pub const ENV_CLIENT_ID: &str = "SOTAOG_CLIENT_ID";
/// Environment variable holding the client secret.
pub const ENV_CLIENT_SECRET: &str = "SOTAOG_CLIENT_SECRET";
/// Environment variable holding the optional tenant (customer) id.
pub const ENV_CUSTOMER_ID: &str = "SOTAOG_CUSTOMER_ID";

/// Errors raised while assembling a [`ClientConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Everything needed to open an authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, e.g. `https://api.sotaog.com`.
    pub base_url: String,
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Tenant scoping every request, sent as `x-sotaog-customer-id`.
    pub customer_id: Option<String>,
}

impl ClientConfig {
    /// Create a configuration without a tenant.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            customer_id: None,
        }
    }

    /// Scope all requests to a tenant.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// Environment variables:
    /// - `SOTAOG_API_URL` (required)
    /// - `SOTAOG_CLIENT_ID` (required)
    /// - `SOTAOG_CLIENT_SECRET` (required)
    /// - `SOTAOG_CUSTOMER_ID` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &'static str| lookup(key).filter(|v| !v.is_empty());
        let required = |key: &'static str| read(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            base_url: required(ENV_URL)?,
            client_id: required(ENV_CLIENT_ID)?,
            client_secret: required(ENV_CLIENT_SECRET)?,
            customer_id: read(ENV_CUSTOMER_ID),
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("customer_id", &self.customer_id)
            .finish()
    }
}

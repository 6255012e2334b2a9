//! Error types for the SotaOG client.

use thiserror::Error;

/// Errors that can occur when using the SotaOG client.
///
/// Every variant that originates from an API call names the operation that
/// failed, e.g. `unable to retrieve truck tickets (status 500)`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid base URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The authenticate endpoint rejected the client credentials.
    #[error("unable to authenticate to API (status {status})")]
    Auth {
        /// HTTP status code returned by `/v1/authenticate`.
        status: u16,
    },

    /// Server answered with a status outside the operation's success set.
    #[error("unable to {operation} (status {status})")]
    Status {
        /// Operation that failed.
        operation: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// HTTP request could not be completed.
    #[error("unable to {operation}: {source}")]
    Transport {
        /// Operation that failed.
        operation: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Failed to deserialize a JSON response.
    #[error("unable to {operation}: invalid JSON response: {source}")]
    Decode {
        /// Operation that failed.
        operation: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize a request payload.
    #[error("unable to {operation}: invalid request payload: {source}")]
    Encode {
        /// Operation that failed.
        operation: String,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Response body did not have the expected shape.
    #[error("unable to {operation}: {message}")]
    InvalidResponse {
        /// Operation that failed.
        operation: String,
        /// What was wrong with the body.
        message: String,
    },

    /// A value could not be used as an HTTP header.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// Header name.
        name: &'static str,
        /// Reason the value was rejected.
        message: String,
    },
}

impl ClientError {
    /// HTTP status code attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status } | Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this error came from the authentication exchange.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

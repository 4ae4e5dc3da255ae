//! Error types surfaced by the API client.

use thiserror::Error;

use crate::method::Verb;
use crate::transport::HttpError;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for every client operation.
///
/// The core never retries or recovers locally: each failure reaches the
/// caller unchanged and there is no partial-success state.
#[derive(Debug, Error)]
pub enum Error {
    /// The request reached the transport and failed there, or the server
    /// answered with a non-success status or an undecodable body.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response JSON does not match the operation's typed shape.
    #[error("Unexpected response shape from {endpoint}: {source}")]
    Schema {
        /// Endpoint that produced the response
        endpoint: String,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// A request payload could not be serialized to JSON.
    #[error("Failed to encode request payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// The operation needs an access token but the client has none.
    #[error("Operation requires an access token but none is configured")]
    MissingAccessToken,

    /// The transport could not be created.
    #[error("Failed to set up transport: {0}")]
    Setup(#[source] HttpError),

    /// The client was closed; a new client is required.
    #[error("Client session is closed")]
    SessionClosed,

    /// Only GET and POST are part of the API surface.
    #[error("Unsupported HTTP verb '{0}': expected GET or POST")]
    UnsupportedVerb(String),

    /// The endpoint path could not be joined onto the base URL.
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// The endpoint path
        endpoint: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Normalized failure of a single API call.
///
/// Produced only by the request executor. The underlying cause is kept as
/// [`ApiError::failure`] (and as the error `source`) for diagnostics.
#[derive(Debug, Error)]
#[error("{verb} {endpoint} failed: {failure}")]
pub struct ApiError {
    verb: Verb,
    endpoint: String,
    #[source]
    failure: ApiFailure,
}

/// Underlying cause of an [`ApiError`].
#[derive(Debug, Error)]
pub enum ApiFailure {
    /// Connection, DNS, TLS or timeout failure.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    ///
    /// The body is kept verbatim and is never parsed.
    #[error("HTTP {status}{}", body_suffix(.body.as_deref()))]
    Status {
        /// Response status
        status: http::StatusCode,
        /// Raw response body, if it was valid UTF-8
        body: Option<String>,
    },

    /// A 2xx response whose body is not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    pub(crate) fn new(verb: Verb, endpoint: impl Into<String>, failure: ApiFailure) -> Self {
        Self {
            verb,
            endpoint: endpoint.into(),
            failure,
        }
    }

    /// Returns the verb of the failed call.
    #[must_use]
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    /// Returns the endpoint path of the failed call.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the underlying cause.
    #[must_use]
    pub const fn failure(&self) -> &ApiFailure {
        &self.failure
    }

    /// Returns the HTTP status if the server answered with a non-2xx code.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match &self.failure {
            ApiFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl Error {
    /// Returns the HTTP status of a non-2xx response, if that is what failed.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Api(e) => e.status(),
            _ => None,
        }
    }
}

fn body_suffix(body: Option<&str>) -> String {
    match body {
        Some(b) if !b.is_empty() => format!(": {b}"),
        _ => String::new(),
    }
}

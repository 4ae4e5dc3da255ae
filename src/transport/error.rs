//! Error types for the transport layer.

use thiserror::Error;

/// Low-level failure while exchanging bytes with the server.
///
/// HTTP status codes are not errors at this level; a 4xx/5xx response is
/// still a successful exchange and is returned as an [`HttpResponse`].
///
/// [`HttpResponse`]: super::HttpResponse
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake errors and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the transport's configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to initialise HTTP client: {0}")]
    Setup(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body could not be read to completion.
    #[error("Failed to read response body: {0}")]
    Body(#[source] Box<dyn std::error::Error + Send + Sync>),
}

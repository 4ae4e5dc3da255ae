//! Turns method descriptors into network calls.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{ApiError, ApiFailure, Result};
use crate::method::{MethodDescriptor, Verb};
use crate::transport::{HttpClient, HttpRequest};

use super::headers::ACCESS_TOKEN;
use super::session::SessionManager;

/// Request executor.
///
/// Issues exactly one transport call per descriptor through the shared
/// session and returns the decoded JSON body verbatim. No schema
/// validation, retries or recovery happen here.
#[derive(Debug)]
pub struct Executor<H> {
    sessions: SessionManager<H>,
}

impl<H> Executor<H> {
    /// Creates an executor over `sessions`.
    #[must_use]
    pub const fn new(sessions: SessionManager<H>) -> Self {
        Self { sessions }
    }

    /// The session manager backing this executor.
    #[must_use]
    pub const fn sessions(&self) -> &SessionManager<H> {
        &self.sessions
    }
}

impl<H: HttpClient> Executor<H> {
    /// Executes `descriptor` and returns the raw JSON response.
    ///
    /// GET parameters without a value are left out of the query string.
    /// POST payloads are sent as a JSON body.
    ///
    /// # Errors
    ///
    /// - [`Error::SessionClosed`] if the client was closed
    /// - [`Error::InvalidEndpoint`] if the path cannot be joined onto the base URL
    /// - [`Error::Api`] on a transport failure, a non-2xx status or a body
    ///   that is not JSON
    ///
    /// [`Error::SessionClosed`]: crate::Error::SessionClosed
    /// [`Error::InvalidEndpoint`]: crate::Error::InvalidEndpoint
    /// [`Error::Api`]: crate::Error::Api
    pub async fn execute(&self, descriptor: &MethodDescriptor) -> Result<Value> {
        let session = self.sessions.session()?;
        let verb = descriptor.verb();
        let endpoint = descriptor.endpoint();
        let fail = |failure| ApiError::new(verb, endpoint, failure);

        let mut url = session.endpoint_url(endpoint)?;
        let mut headers = session.headers().clone();
        if !descriptor.is_authenticated() {
            headers.remove(ACCESS_TOKEN);
        }

        let request = match verb {
            Verb::Get => {
                let mut params = descriptor.query().present().peekable();
                if params.peek().is_some() {
                    url.query_pairs_mut().extend_pairs(params);
                }
                HttpRequest::get(url)
            }
            Verb::Post => {
                let body = descriptor
                    .payload()
                    .map_or_else(|| b"{}".to_vec(), |p| p.to_string().into_bytes());
                HttpRequest::post(url).with_body(body)
            }
        }
        .with_headers(headers);

        debug!(%verb, url = %request.url, "Sending API request");
        trace!(headers = ?request.headers, payload = ?descriptor.payload(), "Request details");

        let response = session
            .transport()
            .request(request)
            .await
            .map_err(|e| fail(ApiFailure::Transport(e)))?;

        debug!(%verb, endpoint, status = %response.status, "Received API response");

        if !response.is_success() {
            return Err(fail(ApiFailure::Status {
                status: response.status,
                body: response.body_text().map(ToString::to_string),
            })
            .into());
        }

        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        let value: Value =
            serde_json::from_slice(&response.body).map_err(|e| fail(ApiFailure::Decode(e)))?;
        trace!(result = %value, "Decoded API response");

        Ok(value)
    }
}

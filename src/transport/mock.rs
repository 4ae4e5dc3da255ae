//! Recording transport for unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock transport that returns a configurable sequence of responses and
/// records every request it receives.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// A single 200 response with `body` as JSON.
    pub fn ok(body: serde_json::Value) -> Self {
        Self::json(http::StatusCode::OK, body)
    }

    /// A single response with the given status and JSON body.
    pub fn json(status: http::StatusCode, body: serde_json::Value) -> Self {
        Self::new(vec![Ok(HttpResponse::json(status, &body))])
    }

    /// A single response with a raw body.
    pub fn raw(status: http::StatusCode, body: &[u8]) -> Self {
        Self::new(vec![Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.to_vec(),
        ))])
    }

    /// A single transport failure.
    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.captured_requests()
            .pop()
            .expect("no request was sent")
    }

    /// Body of the last request decoded as JSON.
    pub fn last_body(&self) -> serde_json::Value {
        let body = self.last_request().body.expect("request has no body");
        serde_json::from_slice(&body).unwrap()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

//! Scripted [`HttpClient`] shared by the unit tests of every remote client.

use std::sync::{Arc, Mutex};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that returns a configurable sequence of responses
/// and records every request it receives.
///
/// Clones share state, so a test can hand one clone to the component
/// under test and inspect the requests through another.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    /// A client whose single response has the given status and body.
    pub fn responding(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(response(status, body))])
    }

    /// A client whose single call fails at the transport level.
    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.inner.requests.lock().unwrap().len()
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.inner
            .requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.inner.requests.lock().unwrap().push(req);
        self.inner.responses.lock().unwrap().remove(0)
    }
}

/// Builds a response with the given status and text body.
pub fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        body.as_bytes().to_vec(),
    )
}

/// Returns the request body as UTF-8 text.
pub fn body_text(req: &HttpRequest) -> String {
    String::from_utf8(req.body.clone().unwrap_or_default()).unwrap()
}

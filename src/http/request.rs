//! Outbound request, buffered response and the client seam.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::HttpError;

/// A request to one of the remote collaborators (DNS API, echo service,
/// notification service).
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Verb to send
    pub method: http::Method,
    /// Fully built target, query included
    pub url: url::Url,
    /// Outgoing headers
    pub headers: http::HeaderMap,
    /// Raw payload, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Starts a request with no headers and no payload.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Record lookups and echo queries.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Notification delivery.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Full-replace record updates.
    #[must_use]
    pub fn put(url: url::Url) -> Self {
        Self::new(http::Method::PUT, url)
    }

    /// Replaces the payload with `body`.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Encodes `value` as the JSON payload and marks it `application/json`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `value` cannot be represented as JSON.
    pub fn with_json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(value)?;
        Ok(self
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(body))
    }

    /// Appends a header value; repeated names keep every value.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Adds `Authorization: Bearer <token>`.
    ///
    /// The value is flagged sensitive, so `Debug` output never shows it.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains characters not allowed in a header.
    pub fn with_bearer(self, token: &str) -> Result<Self, http::header::InvalidHeaderValue> {
        let mut value = http::HeaderValue::try_from(format!("Bearer {token}"))?;
        value.set_sensitive(true);
        Ok(self.with_header(http::header::AUTHORIZATION, value))
    }
}

/// Status and fully buffered payload of a reply.
///
/// Response headers are not kept; none of the collaborators' replies
/// carry information this crate acts on outside the body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status line code
    pub status: http::StatusCode,
    /// Entire payload
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Wraps a status and payload.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The payload as text, or `None` if it is not UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Decodes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns the decoder error if the payload is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Sends one request and buffers the reply.
///
/// Every remote client is generic over this trait, so tests substitute a
/// scripted implementation and production uses
/// [`ReqwestClient`](super::ReqwestClient).
///
/// A non-2xx reply is still `Ok`; classifying statuses is the caller's job.
pub trait HttpClient: Send + Sync {
    /// Performs `req`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if no reply was received: connection failure
    /// ([`HttpError::Connection`]), timeout ([`HttpError::Timeout`]) or an
    /// unusable URL ([`HttpError::InvalidUrl`]).
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

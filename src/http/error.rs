//! Transport failures.

use thiserror::Error;

/// No usable reply was obtained.
///
/// Status codes are not errors at this layer; see
/// [`HttpResponse::status`](super::HttpResponse::status).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Name resolution, connect, TLS or read failure.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The per-request deadline elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] Box<dyn std::error::Error + Send + Sync>),
}

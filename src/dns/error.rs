//! Error types for DNS provider operations.

use thiserror::Error;

use crate::http::HttpError;

/// Error type for DNS provider operations.
///
/// Display strings are written for the operator: they end up verbatim
/// in failure notifications.
#[derive(Debug, Error)]
pub enum DnsError {
    /// No A record matches the configured name.
    #[error("Did not find any DNS records for {domain}")]
    RecordNotFound {
        /// The record name that was looked up
        domain: String,
    },

    /// More than one A record matches the configured name.
    #[error("Found more than one DNS record for {domain}")]
    AmbiguousRecord {
        /// The record name that was looked up
        domain: String,
        /// How many records matched
        count: u64,
    },

    /// The provider answered with `success: false`.
    ///
    /// `errors` is the provider's own `errors` payload, unmodified.
    #[error("{errors}")]
    Provider {
        /// Serialized provider diagnostics
        errors: String,
    },

    /// The request never produced a response.
    #[error("DNS provider request failed: {0}")]
    Http(#[from] HttpError),

    /// The response could not be understood.
    #[error("Unexpected DNS provider response (HTTP {status}): {reason}")]
    InvalidResponse {
        /// HTTP status of the response
        status: http::StatusCode,
        /// What was wrong with it
        reason: String,
    },

    /// The API base URL cannot have path segments appended.
    #[error("Cannot build DNS provider URL from '{0}'")]
    InvalidUrl(String),

    /// The API token cannot be sent as an HTTP header.
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// The request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

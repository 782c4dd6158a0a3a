//! Wire types of the DNS provider API.

use serde::{Deserialize, Serialize};

/// Record type maintained by this crate.
pub const A_RECORD: &str = "A";

/// One DNS record as returned by the provider.
///
/// Only the fields this crate reads are modelled; the provider sends more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Opaque provider-assigned identifier.
    pub id: String,
    /// Fully qualified record name.
    pub name: String,
    /// Record type, `"A"` for every record this crate touches.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Current record content (an IPv4 address for A records).
    #[serde(default)]
    pub content: String,
    /// Time to live in seconds (`1` means "automatic" on Cloudflare).
    #[serde(default)]
    pub ttl: u32,
}

/// Body of a full-replace record update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordUpdate<'a> {
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: &'a str,
    /// Record name.
    pub name: &'a str,
    /// New content.
    pub content: &'a str,
    /// New TTL in seconds.
    pub ttl: u32,
}

/// Envelope wrapping every provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the provider accepted the request.
    pub success: bool,
    /// Provider diagnostics, kept as-is for the operator.
    #[serde(default)]
    pub errors: serde_json::Value,
    /// Payload of a successful call.
    pub result: Option<T>,
    /// Pagination information for list calls.
    pub result_info: Option<ResultInfo>,
}

/// Pagination block of list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ResultInfo {
    /// Number of records on this page.
    pub count: u64,
}

impl<T> ApiEnvelope<T> {
    /// Returns the `errors` payload serialized as compact JSON.
    #[must_use]
    pub fn errors_json(&self) -> String {
        self.errors.to_string()
    }
}

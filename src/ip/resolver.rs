//! Fetches the caller's public address from an echo service.

use std::fmt;
use std::net::Ipv4Addr;

use thiserror::Error;
use url::Url;

use crate::http::{HttpClient, HttpError, HttpRequest};

/// The caller's externally visible address, as reported by the echo service.
///
/// Treated as an opaque string: surrounding whitespace is trimmed but the
/// text is not required to be a valid IPv4 address. The DNS provider is
/// the one that rejects malformed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicAddress(String);

impl PublicAddress {
    /// Wraps already-trimmed address text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the address text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the text as IPv4, if it is one.
    #[must_use]
    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        self.0.parse().ok()
    }
}

impl fmt::Display for PublicAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for public address lookups.
#[derive(Debug, Error)]
pub enum IpError {
    /// The echo service could not be reached.
    #[error("IP echo request failed: {0}")]
    Http(#[from] HttpError),

    /// The echo service answered with anything other than 200 OK.
    #[error("Unable to get IP: echo service returned HTTP {0}")]
    Status(http::StatusCode),

    /// The body was not UTF-8 text.
    #[error("Unable to get IP: echo service returned a non-text body")]
    InvalidBody,
}

/// Source of the caller's current public address.
pub trait IpResolver: Send + Sync {
    /// Fetches the current public address.
    ///
    /// # Errors
    ///
    /// Returns [`IpError`] if the address cannot be obtained.
    fn resolve(
        &self,
    ) -> impl std::future::Future<Output = Result<PublicAddress, IpError>> + Send;
}

/// [`IpResolver`] backed by a plain-text HTTP echo service such as ipify.
#[derive(Debug, Clone)]
pub struct HttpIpResolver<H> {
    client: H,
    url: Url,
}

impl<H> HttpIpResolver<H> {
    /// Creates a resolver querying `url`.
    #[must_use]
    pub const fn new(client: H, url: Url) -> Self {
        Self { client, url }
    }
}

impl<H: HttpClient> IpResolver for HttpIpResolver<H> {
    async fn resolve(&self) -> Result<PublicAddress, IpError> {
        let response = self.client.request(HttpRequest::get(self.url.clone())).await?;

        if response.status != http::StatusCode::OK {
            return Err(IpError::Status(response.status));
        }

        let text = response.body_text().ok_or(IpError::InvalidBody)?.trim();
        let address = PublicAddress::new(text);

        if address.to_ipv4().is_none() {
            tracing::debug!("Echo service returned '{address}', which is not an IPv4 address");
        }

        Ok(address)
    }
}

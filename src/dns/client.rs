//! DNS provider trait and the Cloudflare API v4 client.

use std::fmt;

use url::Url;

use crate::http::{HttpClient, HttpRequest, HttpResponse};

use super::DnsError;
use super::record::{A_RECORD, ApiEnvelope, DnsRecord, RecordUpdate};

/// Operations the update workflow needs from a DNS provider.
///
/// The record identifier is looked up on every run rather than cached:
/// it cannot be derived from configuration and changes whenever the
/// record is recreated outside this program.
pub trait DnsProvider: Send + Sync {
    /// Finds the single A record named `domain`.
    ///
    /// # Errors
    ///
    /// - [`DnsError::RecordNotFound`] if nothing matches
    /// - [`DnsError::AmbiguousRecord`] if more than one record matches
    /// - [`DnsError::Provider`] if the provider reports failure
    /// - transport and decoding errors otherwise
    fn find_record(
        &self,
        domain: &str,
    ) -> impl std::future::Future<Output = Result<DnsRecord, DnsError>> + Send;

    /// Replaces type, name, content and TTL of record `record_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::Provider`] with the provider's diagnostics if the
    /// update is rejected, or a transport/decoding error.
    fn update_record(
        &self,
        record_id: &str,
        domain: &str,
        content: &str,
        ttl: u32,
    ) -> impl std::future::Future<Output = Result<(), DnsError>> + Send;
}

/// Cloudflare API v4 client scoped to one zone.
///
/// # Example
///
/// ```
/// use ddns_cf::dns::CloudflareClient;
/// use ddns_cf::http::ReqwestClient;
/// use url::Url;
///
/// let dns = CloudflareClient::new(
///     ReqwestClient::new().unwrap(),
///     Url::parse("https://api.cloudflare.com/client/v4/").unwrap(),
///     "zone-id",
///     "api-token",
/// );
/// assert_eq!(dns.zone_id(), "zone-id");
/// ```
pub struct CloudflareClient<H> {
    client: H,
    base_url: Url,
    zone_id: String,
    api_token: String,
}

// Custom Debug keeps the API token out of logs.
impl<H> fmt::Debug for CloudflareClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudflareClient")
            .field("base_url", &self.base_url.as_str())
            .field("zone_id", &self.zone_id)
            .field("api_token", &"<REDACTED>")
            .finish_non_exhaustive()
    }
}

impl<H> CloudflareClient<H> {
    /// Creates a client for `zone_id` under the API rooted at `base_url`.
    #[must_use]
    pub fn new(
        client: H,
        base_url: Url,
        zone_id: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url,
            zone_id: zone_id.into(),
            api_token: api_token.into(),
        }
    }

    /// Returns the zone this client operates on.
    #[must_use]
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// `{base}/zones/{zone_id}/dns_records[/{record_id}]`
    fn records_url(&self, record_id: Option<&str>) -> Result<Url, DnsError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| DnsError::InvalidUrl(self.base_url.to_string()))?;
            segments
                .pop_if_empty()
                .extend(["zones", self.zone_id.as_str(), "dns_records"]);
            if let Some(id) = record_id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// `{base}/zones/{zone_id}/dns_records?type=A&name={domain}`
    fn lookup_url(&self, domain: &str) -> Result<Url, DnsError> {
        let mut url = self.records_url(None)?;
        url.query_pairs_mut()
            .append_pair("type", A_RECORD)
            .append_pair("name", domain);
        Ok(url)
    }

    fn authorize(&self, request: HttpRequest) -> Result<HttpRequest, DnsError> {
        request
            .with_bearer(&self.api_token)
            .map_err(|_| DnsError::InvalidToken)
    }
}

impl<H: HttpClient> CloudflareClient<H> {
    async fn send<T>(&self, request: HttpRequest) -> Result<ApiEnvelope<T>, DnsError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.request(self.authorize(request)?).await?;
        decode(&response)
    }
}

/// Decodes the provider envelope regardless of HTTP status.
///
/// Cloudflare reports failures as JSON with `success: false` on 4xx
/// responses too, so the status alone is not used to classify errors.
fn decode<T: serde::de::DeserializeOwned>(
    response: &HttpResponse,
) -> Result<ApiEnvelope<T>, DnsError> {
    response.json().map_err(|e| DnsError::InvalidResponse {
        status: response.status,
        reason: e.to_string(),
    })
}

impl<H: HttpClient> DnsProvider for CloudflareClient<H> {
    async fn find_record(&self, domain: &str) -> Result<DnsRecord, DnsError> {
        let url = self.lookup_url(domain)?;
        tracing::debug!("Record lookup URL: {url}");

        let envelope: ApiEnvelope<Vec<DnsRecord>> = self.send(HttpRequest::get(url)).await?;
        tracing::debug!(
            success = envelope.success,
            errors = %envelope.errors,
            "Record lookup response"
        );

        if !envelope.success {
            return Err(DnsError::Provider {
                errors: envelope.errors_json(),
            });
        }

        let mut records = envelope.result.unwrap_or_default();
        // Never trust a count smaller than what was actually returned.
        let count = envelope
            .result_info
            .map_or(0, |info| info.count)
            .max(records.len() as u64);

        match count {
            0 => Err(DnsError::RecordNotFound {
                domain: domain.to_string(),
            }),
            1 if records.len() == 1 => Ok(records.swap_remove(0)),
            1 => Err(DnsError::InvalidResponse {
                status: http::StatusCode::OK,
                reason: "result_info.count is 1 but result is empty".to_string(),
            }),
            _ => Err(DnsError::AmbiguousRecord {
                domain: domain.to_string(),
                count,
            }),
        }
    }

    async fn update_record(
        &self,
        record_id: &str,
        domain: &str,
        content: &str,
        ttl: u32,
    ) -> Result<(), DnsError> {
        let url = self.records_url(Some(record_id))?;
        let body = RecordUpdate {
            record_type: A_RECORD,
            name: domain,
            content,
            ttl,
        };
        tracing::debug!("Record update URL: {url}, body: {body:?}");

        let request = HttpRequest::put(url)
            .with_json(&body)
            .map_err(DnsError::Encode)?;
        let envelope: ApiEnvelope<serde_json::Value> = self.send(request).await?;

        if envelope.success {
            Ok(())
        } else {
            Err(DnsError::Provider {
                errors: envelope.errors_json(),
            })
        }
    }
}

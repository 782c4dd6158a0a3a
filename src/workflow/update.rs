//! Orchestration of one update run.

use crate::config::defaults::RECORD_TTL_SECS;
use crate::dns::{DnsError, DnsProvider};
use crate::ip::IpResolver;
use crate::notify::Notifier;

use super::UpdateOutcome;

/// Runs lookup, address fetch and update against injected collaborators.
///
/// # Type Parameters
///
/// - `D`: the DNS provider
/// - `I`: the public address source
/// - `N`: the operator notifier
///
/// # Example
///
/// ```no_run
/// use ddns_cf::dns::CloudflareClient;
/// use ddns_cf::http::ReqwestClient;
/// use ddns_cf::ip::HttpIpResolver;
/// use ddns_cf::notify::{PushoverCredentials, PushoverNotifier};
/// use ddns_cf::workflow::UpdateWorkflow;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let http = ReqwestClient::new()?;
/// let workflow = UpdateWorkflow::new(
///     "home.example.com",
///     CloudflareClient::new(
///         http.clone(),
///         Url::parse("https://api.cloudflare.com/client/v4/")?,
///         "zone-id",
///         "token",
///     ),
///     HttpIpResolver::new(http.clone(), Url::parse("https://api.ipify.org")?),
///     PushoverNotifier::new(
///         http,
///         Url::parse("https://api.pushover.net/1/messages.json")?,
///         PushoverCredentials {
///             app_key: "app".into(),
///             recipient_key: "user".into(),
///         },
///     ),
/// );
/// let outcome = workflow.run().await;
/// println!("updated: {}", outcome.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UpdateWorkflow<D, I, N> {
    domain: String,
    dns: D,
    resolver: I,
    notifier: N,
    ttl: u32,
}

impl<D, I, N> UpdateWorkflow<D, I, N> {
    /// Creates a workflow for the A record named `domain`.
    ///
    /// The record is written with a TTL of
    /// [`RECORD_TTL_SECS`](crate::config::defaults::RECORD_TTL_SECS).
    #[must_use]
    pub fn new(domain: impl Into<String>, dns: D, resolver: I, notifier: N) -> Self {
        Self {
            domain: domain.into(),
            dns,
            resolver,
            notifier,
            ttl: RECORD_TTL_SECS,
        }
    }

    /// Returns the record name this workflow maintains.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl<D: DnsProvider, I: IpResolver, N: Notifier> UpdateWorkflow<D, I, N> {
    /// Performs one run and reports how it ended.
    ///
    /// Failures are terminal: nothing is retried. Every failure except an
    /// address fetch failure is sent to the notifier exactly once before
    /// returning.
    pub async fn run(&self) -> UpdateOutcome {
        let outcome = self.execute().await;

        match &outcome {
            UpdateOutcome::Updated { address, .. } => {
                tracing::info!(
                    "DNS successfully updated. {} now points to {address}",
                    self.domain
                );
            }
            UpdateOutcome::IpFetchFailed(e) => {
                tracing::error!("{e}. Exiting");
            }
            failed => {
                if let Some(message) = failed.notification() {
                    tracing::error!("{message}");
                    self.notify(&message).await;
                }
            }
        }

        outcome
    }

    async fn execute(&self) -> UpdateOutcome {
        let record = match self.dns.find_record(&self.domain).await {
            Ok(record) => record,
            Err(DnsError::AmbiguousRecord { domain, count }) => {
                return UpdateOutcome::AmbiguousRecord { domain, count };
            }
            Err(error) => {
                return UpdateOutcome::LookupFailed {
                    domain: self.domain.clone(),
                    error,
                };
            }
        };
        tracing::debug!(
            "Found record {} ({} -> {})",
            record.id,
            record.name,
            record.content
        );

        let address = match self.resolver.resolve().await {
            Ok(address) => address,
            Err(e) => return UpdateOutcome::IpFetchFailed(e),
        };
        tracing::debug!("Current public address: {address}");

        match self
            .dns
            .update_record(&record.id, &self.domain, address.as_str(), self.ttl)
            .await
        {
            Ok(()) => UpdateOutcome::Updated {
                record_id: record.id,
                address,
            },
            Err(e) => UpdateOutcome::UpdateRejected(e),
        }
    }

    /// Best-effort delivery; a failed notification is only logged.
    async fn notify(&self, message: &str) {
        if let Err(e) = self.notifier.send(message).await {
            tracing::error!("Failed to send notification: {e}");
        }
    }
}

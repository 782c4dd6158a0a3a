//! Application execution logic.
//!
//! Builds the remote clients from the configuration, injects them into
//! the update workflow and runs it once.

use thiserror::Error;
use url::Url;

use ddns_cf::config::{ConfigError, Configuration, defaults};
use ddns_cf::dns::CloudflareClient;
use ddns_cf::http::{HttpError, ReqwestClient};
use ddns_cf::ip::HttpIpResolver;
use ddns_cf::notify::{PushoverCredentials, PushoverNotifier};
use ddns_cf::workflow::{UpdateOutcome, UpdateWorkflow};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Type alias for the production workflow.
type AppWorkflow = UpdateWorkflow<
    CloudflareClient<ReqwestClient>,
    HttpIpResolver<ReqwestClient>,
    PushoverNotifier<ReqwestClient>,
>;

/// Error type for failures before the workflow starts.
#[derive(Debug, Error)]
pub enum RunError {
    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// A URL in the configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Executes one update run.
///
/// # Errors
///
/// Returns an error if the workflow cannot be assembled. Failures inside
/// the run are reported through the returned [`UpdateOutcome`].
///
/// Excluded from coverage - performs real network I/O.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: &Configuration) -> Result<UpdateOutcome, RunError> {
    let client = ReqwestClient::new().map_err(RunError::Client)?;
    let workflow = create_workflow(config, &client)?;
    Ok(workflow.run().await)
}

/// Wires the production clients from configuration.
fn create_workflow(
    config: &Configuration,
    client: &ReqwestClient,
) -> Result<AppWorkflow, RunError> {
    let dns = CloudflareClient::new(
        client.clone(),
        config.base_url()?,
        config.dns.zone_id.clone(),
        config.dns.api_token.clone(),
    );

    let resolver = HttpIpResolver::new(client.clone(), config.ip_echo_url()?);

    let notifier = PushoverNotifier::new(
        client.clone(),
        pushover_endpoint()?,
        PushoverCredentials {
            app_key: config.notification.app_key.clone(),
            recipient_key: config.notification.recipient_key.clone(),
        },
    );

    Ok(UpdateWorkflow::new(
        config.dns.domain.clone(),
        dns,
        resolver,
        notifier,
    ))
}

fn pushover_endpoint() -> Result<Url, ConfigError> {
    Url::parse(defaults::PUSHOVER_URL).map_err(|e| ConfigError::InvalidUrl {
        field: "pushover endpoint",
        url: defaults::PUSHOVER_URL.to_string(),
        reason: e.to_string(),
    })
}

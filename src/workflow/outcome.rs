//! Terminal states of an update run.

use crate::dns::DnsError;
use crate::ip::{IpError, PublicAddress};

/// How an update run ended.
///
/// There is no "unchanged" state: every run that gets as far as the
/// update writes the record, whether or not the address moved.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// The provider accepted the new content.
    Updated {
        /// Record that was written
        record_id: String,
        /// Content written to the record
        address: PublicAddress,
    },

    /// The record could not be identified (not found, provider failure,
    /// transport or decoding error).
    LookupFailed {
        /// Record name that was looked up
        domain: String,
        /// Why the lookup failed
        error: DnsError,
    },

    /// More than one A record carries the configured name.
    AmbiguousRecord {
        /// Record name that was looked up
        domain: String,
        /// How many records matched
        count: u64,
    },

    /// The public address could not be fetched.
    IpFetchFailed(IpError),

    /// The provider refused or never answered the update.
    UpdateRejected(DnsError),
}

impl UpdateOutcome {
    /// Returns true if the record was written.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }

    /// Message for the operator, or `None` when this outcome is not
    /// reported through the notifier.
    ///
    /// IP fetch failures are deliberately not notified; they are only
    /// logged.
    #[must_use]
    pub fn notification(&self) -> Option<String> {
        match self {
            Self::Updated { .. } | Self::IpFetchFailed(_) => None,
            Self::LookupFailed {
                domain,
                error: DnsError::Provider { errors },
            } => Some(format!("Could not get ID for {domain}. {errors}")),
            Self::LookupFailed {
                error: error @ DnsError::RecordNotFound { .. },
                ..
            } => Some(error.to_string()),
            Self::LookupFailed { domain, error } => {
                Some(format!("Could not get ID for {domain}. {error}"))
            }
            Self::AmbiguousRecord { domain, .. } => {
                Some(format!("Found more than one DNS record for {domain}"))
            }
            Self::UpdateRejected(DnsError::Provider { errors }) => {
                Some(format!("DNS update failed: {errors}"))
            }
            Self::UpdateRejected(error) => Some(format!("DNS update failed: {error}")),
        }
    }
}

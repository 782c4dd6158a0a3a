//! Operator notifications.
//!
//! The notifier is the only channel through which failures reach a human,
//! so the workflow routes every notifiable failure through [`Notifier::send`].

mod pushover;


pub use pushover::{PushoverCredentials, PushoverNotifier};

use thiserror::Error;

use crate::http::HttpError;

/// Error type for notification delivery.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notification service could not be reached.
    #[error("Notification request failed: {0}")]
    Http(#[from] HttpError),

    /// The notification service refused the message.
    #[error("Notification rejected with HTTP {status}: {body}")]
    Rejected {
        /// HTTP status returned by the service
        status: http::StatusCode,
        /// Response body, for diagnostics
        body: String,
    },
}

/// Delivers plain-text messages to a pre-configured recipient.
pub trait Notifier: Send + Sync {
    /// Sends `message`.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if delivery fails. Callers treat delivery as
    /// best-effort and do not retry.
    fn send(
        &self,
        message: &str,
    ) -> impl std::future::Future<Output = Result<(), NotifyError>> + Send;
}

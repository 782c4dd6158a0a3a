//! Pushover message API client.

use std::fmt;

use url::Url;
use url::form_urlencoded;

use crate::http::{HttpClient, HttpRequest};

use super::{Notifier, NotifyError};

/// Keys identifying the sending application and the recipient.
#[derive(Clone, PartialEq, Eq)]
pub struct PushoverCredentials {
    /// Application API token.
    pub app_key: String,
    /// User or group key receiving the message.
    pub recipient_key: String,
}

impl fmt::Debug for PushoverCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushoverCredentials")
            .field("app_key", &"<REDACTED>")
            .field("recipient_key", &"<REDACTED>")
            .finish()
    }
}

/// [`Notifier`] posting to the Pushover messages endpoint.
///
/// Messages are sent as `application/x-www-form-urlencoded` with the
/// `token`, `user` and `message` fields.
#[derive(Debug, Clone)]
pub struct PushoverNotifier<H> {
    client: H,
    endpoint: Url,
    credentials: PushoverCredentials,
}

impl<H> PushoverNotifier<H> {
    /// Creates a notifier posting to `endpoint`.
    #[must_use]
    pub const fn new(client: H, endpoint: Url, credentials: PushoverCredentials) -> Self {
        Self {
            client,
            endpoint,
            credentials,
        }
    }

    fn form_body(&self, message: &str) -> Vec<u8> {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("token", &self.credentials.app_key)
            .append_pair("user", &self.credentials.recipient_key)
            .append_pair("message", message)
            .finish()
            .into_bytes()
    }
}

impl<H: HttpClient> Notifier for PushoverNotifier<H> {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        let request = HttpRequest::post(self.endpoint.clone())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/x-www-form-urlencoded"),
            )
            .with_body(self.form_body(message));

        let response = self.client.request(request).await?;

        if response.is_success() {
            tracing::debug!("Notification delivered");
            Ok(())
        } else {
            Err(NotifyError::Rejected {
                status: response.status,
                body: response.body_text().unwrap_or_default().to_string(),
            })
        }
    }
}

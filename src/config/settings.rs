//! The persisted configuration record and its JSON representation.
//!
//! The on-disk layout is shared with existing deployments:
//!
//! ```json
//! {
//!   "pushover": { "key_user": "...", "key_app": "..." },
//!   "cloudflare": {
//!     "url": "https://api.cloudflare.com/client/v4/",
//!     "api_token": "...",
//!     "id_zone": "...",
//!     "domain": "home.example.com"
//!   }
//! }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use super::defaults;
use super::error::{ConfigError, field};

/// Complete configuration for one update run.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Push-notification credentials.
    #[serde(rename = "pushover")]
    pub notification: NotificationSettings,

    /// DNS provider credentials and the record to maintain.
    #[serde(rename = "cloudflare")]
    pub dns: DnsSettings,

    /// Echo service override. Omitted from the file when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_echo_url: Option<String>,
}

/// Push-notification credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// The recipient (user or group) key.
    #[serde(rename = "key_user")]
    pub recipient_key: String,

    /// The sending application's key.
    #[serde(rename = "key_app")]
    pub app_key: String,
}

/// DNS provider settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSettings {
    /// API base URL, e.g. `https://api.cloudflare.com/client/v4/`.
    #[serde(rename = "url")]
    pub base_url: String,

    /// Bearer token with DNS edit permission on the zone.
    pub api_token: String,

    /// Zone identifier.
    #[serde(rename = "id_zone")]
    pub zone_id: String,

    /// Fully qualified record name.
    pub domain: String,
}

// Credentials never reach logs, including via `{:?}`.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("notification", &self.notification)
            .field("dns", &self.dns)
            .field("ip_echo_url", &self.ip_echo_url)
            .finish()
    }
}

impl fmt::Debug for NotificationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationSettings")
            .field("recipient_key", &"<REDACTED>")
            .field("app_key", &"<REDACTED>")
            .finish()
    }
}

impl fmt::Debug for DnsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsSettings")
            .field("base_url", &self.base_url)
            .field("api_token", &"<REDACTED>")
            .field("zone_id", &self.zone_id)
            .field("domain", &self.domain)
            .finish()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ domain: {}, zone: {}, api: {}, ip_echo: {} }}",
            self.dns.domain,
            self.dns.zone_id,
            self.dns.base_url,
            self.ip_echo_url.as_deref().unwrap_or(defaults::IP_ECHO_URL),
        )
    }
}

impl Configuration {
    /// Decodes a configuration from JSON text and validates it.
    ///
    /// `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or a validation
    /// error (see [`Configuration::validate`]).
    pub fn from_json(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Encodes the configuration as pretty-printed JSON (2-space indent).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Loads and validates the configuration stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist,
    /// [`ConfigError::FileRead`] if it cannot be read, and the errors of
    /// [`Configuration::from_json`] otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_json(&content, path)
    }

    /// Writes the configuration to `path`.
    ///
    /// Writes to `{path}.tmp` first and renames it into place so a crash
    /// never leaves a truncated file behind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileWrite`] if any filesystem step fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json()?;
        let write_err = |source| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        // config.json -> config.json.tmp
        let mut temp_name = path.as_os_str().to_os_string();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);
        std::fs::write(&temp_path, content).map_err(write_err)?;
        std::fs::rename(&temp_path, path).map_err(write_err)?;

        Ok(())
    }

    /// Checks that every required field is present and URLs are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] for empty fields and
    /// [`ConfigError::InvalidUrl`] for URLs that are not `http(s)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const HINT: &str = "Edit the config file or delete it to be prompted again.";

        let required = [
            (field::RECIPIENT_KEY, &self.notification.recipient_key),
            (field::APP_KEY, &self.notification.app_key),
            (field::BASE_URL, &self.dns.base_url),
            (field::API_TOKEN, &self.dns.api_token),
            (field::ZONE_ID, &self.dns.zone_id),
            (field::DOMAIN, &self.dns.domain),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::missing(name, HINT));
            }
        }

        parse_http_url(field::BASE_URL, &self.dns.base_url)?;
        if let Some(echo) = &self.ip_echo_url {
            parse_http_url(field::IP_ECHO_URL, echo)?;
        }

        Ok(())
    }

    /// Returns the API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the stored value is not an
    /// `http(s)` URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        parse_http_url(field::BASE_URL, &self.dns.base_url)
    }

    /// Returns the IP echo service URL, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the override is not an
    /// `http(s)` URL.
    pub fn ip_echo_url(&self) -> Result<Url, ConfigError> {
        parse_http_url(
            field::IP_ECHO_URL,
            self.ip_echo_url.as_deref().unwrap_or(defaults::IP_ECHO_URL),
        )
    }
}

/// Parses `value` and requires an `http` or `https` scheme.
fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        field,
        url: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!(
            "unsupported scheme '{other}', expected http or https"
        ))),
    }
}

//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from reading, parsing, prompting, validation and
/// persisting the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for the documented schema.
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        /// Path to the config file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// No configuration file exists and prompting is disabled.
    #[error("Config file '{}' does not exist", path.display())]
    NotFound {
        /// Path that was probed
        path: PathBuf,
    },

    /// Failed to write the configuration file.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the configuration.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Reading an answer from the operator failed.
    #[error("Failed to read '{label}' from the operator: {source}")]
    Prompt {
        /// The question that was being asked
        label: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A required field is missing or empty.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid URL provided.
    #[error("Invalid URL '{url}' for {field}: {reason}")]
    InvalidUrl {
        /// Name of the field holding the URL
        field: &'static str,
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Could not determine where the executable lives.
    #[error("Failed to locate the executable directory: {0}")]
    ExecutableDir(#[source] std::io::Error),
}

/// Well-known field names for `MissingRequired` and `InvalidUrl` errors.
///
/// Names follow the on-disk JSON keys so the operator can find them.
pub mod field {
    /// Pushover user key (recipient).
    pub const RECIPIENT_KEY: &str = "pushover.key_user";
    /// Pushover application key.
    pub const APP_KEY: &str = "pushover.key_app";
    /// DNS provider API base URL.
    pub const BASE_URL: &str = "cloudflare.url";
    /// DNS provider API token.
    pub const API_TOKEN: &str = "cloudflare.api_token";
    /// DNS zone identifier.
    pub const ZONE_ID: &str = "cloudflare.id_zone";
    /// Record name to keep updated.
    pub const DOMAIN: &str = "cloudflare.domain";
    /// IP echo service URL.
    pub const IP_ECHO_URL: &str = "ip_echo_url";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }

    /// Returns true if a configuration exists but cannot be used as-is
    /// (unreadable or malformed file).
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::FileRead { .. } | Self::Parse { .. })
    }
}

//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// File name of the configuration stored beside the executable.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Cloudflare API v4 base URL written into freshly prompted configurations.
pub const BASE_URL: &str = "https://api.cloudflare.com/client/v4/";

/// Echo service returning the caller's public IPv4 address as plain text.
pub const IP_ECHO_URL: &str = "https://api.ipify.org";

/// Pushover message endpoint.
pub const PUSHOVER_URL: &str = "https://api.pushover.net/1/messages.json";

/// TTL written on every update, in seconds.
pub const RECORD_TTL_SECS: u32 = 120;

/// Environment variable names read by [`super::EnvConfigProvider`].
pub mod env {
    /// Pushover user key.
    pub const RECIPIENT_KEY: &str = "DDNS_PUSHOVER_USER_KEY";
    /// Pushover application key.
    pub const APP_KEY: &str = "DDNS_PUSHOVER_APP_KEY";
    /// Optional DNS provider API base URL.
    pub const BASE_URL: &str = "DDNS_CLOUDFLARE_URL";
    /// DNS provider API token.
    pub const API_TOKEN: &str = "DDNS_CLOUDFLARE_API_TOKEN";
    /// DNS zone identifier.
    pub const ZONE_ID: &str = "DDNS_CLOUDFLARE_ZONE_ID";
    /// Record name to keep updated.
    pub const DOMAIN: &str = "DDNS_CLOUDFLARE_DOMAIN";
    /// Optional IP echo service URL.
    pub const IP_ECHO_URL: &str = "DDNS_IP_ECHO_URL";
}

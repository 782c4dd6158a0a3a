//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::Parser;

/// DDNS-CF: keeps a Cloudflare A record pointed at this host's public IP.
///
/// Looks up the record, fetches the current public address, writes it to
/// the record and sends a Pushover notification when something goes wrong.
#[derive(Debug, Parser)]
#[command(name = "ddns-cf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file (default: config.json beside the executable)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Read configuration from DDNS_* environment variables instead of a file
    #[arg(long, conflicts_with = "config")]
    pub env: bool,

    /// Never prompt for missing configuration; fail instead
    #[arg(long = "no-prompt")]
    pub no_prompt: bool,

    /// Show debug output
    #[arg(long, short, visible_alias = "verbose")]
    pub debug: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}

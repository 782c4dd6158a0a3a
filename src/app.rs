//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use ddns_cf::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - missing file, malformed JSON, empty field, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - lookup, IP fetch or update failure.
    ///
    /// Note: This is a function rather than a constant because
    /// `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Crates whose chatter is never useful at the levels this tool logs at.
const QUIET_TARGETS: [&str; 3] = ["hyper=error", "hyper_util=error", "reqwest=error"];

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::NotFound { .. } => {
            eprintln!("\nRun without --no-prompt to create the configuration interactively.");
        }
        ConfigError::Parse { path, .. } | ConfigError::FileRead { path, .. } => {
            eprintln!(
                "\nFix or delete '{}' to be prompted for a new configuration.",
                path.display()
            );
        }
        ConfigError::MissingRequired { .. } => {
            eprintln!("\nEvery credential must be non-empty; see 'ddns-cf --help'.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Only errors are shown unless `debug` is set.
pub fn setup_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::ERROR };

    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    for target in QUIET_TARGETS {
        if let Ok(directive) = target.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

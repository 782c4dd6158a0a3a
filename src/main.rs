//! DDNS-CF: Dynamic DNS updater.
//!
//! Entry point for the ddns-cf application.

use ddns_cf::config::{
    Cli, ConfigError, ConfigProvider, Configuration, EnvConfigProvider, FileConfigProvider,
    StdinPrompter, default_config_path,
};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.debug);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };
    tracing::debug!("{config}");

    run_application(&config)
}

/// Loads the configuration from the source selected on the command line.
fn load_config(cli: &Cli) -> Result<Configuration, ConfigError> {
    if cli.env {
        return EnvConfigProvider::from_process().load();
    }

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    let mut provider = FileConfigProvider::new(path);
    if !cli.no_prompt {
        provider = provider.with_prompter(StdinPrompter);
    }
    provider.load()
}

/// Runs one update on a single-threaded runtime.
///
/// Excluded from coverage - performs real network I/O.
#[cfg(not(tarpaulin_include))]
fn run_application(config: &Configuration) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(config)) {
        Ok(outcome) if outcome.is_success() => exit_code::SUCCESS,
        Ok(_) => exit_code::runtime_error(),
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}

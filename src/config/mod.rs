//! Configuration layer for DDNS-CF.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - The persisted configuration record ([`Configuration`])
//! - Configuration sources behind the [`ConfigProvider`] capability:
//!   a JSON file with an optional first-run prompt ([`FileConfigProvider`])
//!   and environment variables ([`EnvConfigProvider`])
//! - Default values ([`defaults`])
//!
//! # Lifecycle
//!
//! The configuration is created once (by the operator answering prompts,
//! or by deploying the file/environment directly) and is read-only after
//! that. Values are only checked for presence and URL shape; whether the
//! credentials work is discovered through the remote APIs.

mod cli;
pub mod defaults;
mod error;
mod prompt;
mod provider;
mod settings;

#[cfg(test)]
mod settings_tests;

pub use cli::Cli;
pub use error::{ConfigError, field};
pub use prompt::{Prompter, StdinPrompter};
pub use provider::{ConfigProvider, EnvConfigProvider, FileConfigProvider, default_config_path};
pub use settings::{Configuration, DnsSettings, NotificationSettings};

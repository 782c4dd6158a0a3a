//! Configuration providers.
//!
//! [`ConfigProvider`] is the capability the binary depends on; the
//! interactive first-run path lives entirely inside [`FileConfigProvider`]
//! so unattended deployments can use [`EnvConfigProvider`] or a
//! prompt-free file provider instead.

use std::path::{Path, PathBuf};

use super::defaults;
use super::error::{ConfigError, field};
use super::prompt::Prompter;
use super::settings::{Configuration, DnsSettings, NotificationSettings};

/// Something that can produce a validated [`Configuration`].
pub trait ConfigProvider {
    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if no usable configuration can be produced.
    fn load(&mut self) -> Result<Configuration, ConfigError>;
}

/// Reads the JSON configuration file, bootstrapping it on first run.
///
/// When the file is missing and a [`Prompter`] is attached, every required
/// field is collected from the operator and written to the path before
/// being returned. Without a prompter a missing file is an error.
#[derive(Debug)]
pub struct FileConfigProvider<P> {
    path: PathBuf,
    prompter: Option<P>,
}

impl<P> FileConfigProvider<P> {
    /// Creates a provider that never prompts.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            prompter: None,
        }
    }

    /// Attaches a prompter used when the file does not exist.
    #[must_use]
    pub fn with_prompter(mut self, prompter: P) -> Self {
        self.prompter = Some(prompter);
        self
    }

    /// Returns the path to the configuration file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<P: Prompter> FileConfigProvider<P> {
    fn bootstrap(&mut self) -> Result<Configuration, ConfigError> {
        let Some(prompter) = self.prompter.as_mut() else {
            return Err(ConfigError::NotFound {
                path: self.path.clone(),
            });
        };

        let config = collect_configuration(prompter)?;
        config.validate()?;
        config.save(&self.path)?;
        tracing::debug!("Wrote new configuration to {}", self.path.display());

        Ok(config)
    }
}

impl<P: Prompter> ConfigProvider for FileConfigProvider<P> {
    fn load(&mut self) -> Result<Configuration, ConfigError> {
        tracing::debug!(
            "Config file {} exists? {}",
            self.path.display(),
            self.path.exists()
        );

        match Configuration::load(&self.path) {
            Err(ConfigError::NotFound { .. }) => self.bootstrap(),
            other => other,
        }
    }
}

/// Asks the operator for every field of a new configuration.
fn collect_configuration(prompter: &mut impl Prompter) -> Result<Configuration, ConfigError> {
    let mut ask = |label: &str| {
        prompter.ask(label).map_err(|source| ConfigError::Prompt {
            label: label.to_string(),
            source,
        })
    };

    let recipient_key = ask("Enter Pushover User Key")?;
    let app_key = ask("Enter Pushover App Key")?;
    let api_token = ask("Enter your Cloudflare API Token")?;
    let zone_id = ask("Enter your Cloudflare Zone ID")?;
    let domain = ask("Enter your Cloudflare Domain you'd like to update")?;

    Ok(Configuration {
        notification: NotificationSettings {
            recipient_key,
            app_key,
        },
        dns: DnsSettings {
            base_url: defaults::BASE_URL.to_string(),
            api_token,
            zone_id,
            domain,
        },
        ip_echo_url: None,
    })
}

/// Builds the configuration from `DDNS_*` environment variables.
///
/// The variable lookup is injectable so tests do not touch the process
/// environment.
pub struct EnvConfigProvider<F> {
    lookup: F,
}

impl EnvConfigProvider<fn(&str) -> Option<String>> {
    /// Creates a provider reading the process environment.
    #[must_use]
    pub fn from_process() -> Self {
        Self {
            lookup: |key| std::env::var(key).ok(),
        }
    }
}

impl<F: Fn(&str) -> Option<String>> EnvConfigProvider<F> {
    /// Creates a provider using a custom variable lookup.
    pub const fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    fn optional(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, key: &str, name: &'static str) -> Result<String, ConfigError> {
        self.optional(key)
            .ok_or_else(|| ConfigError::missing(name, "Set the corresponding DDNS_* variable."))
    }
}

impl<F: Fn(&str) -> Option<String>> ConfigProvider for EnvConfigProvider<F> {
    fn load(&mut self) -> Result<Configuration, ConfigError> {
        use defaults::env;

        let config = Configuration {
            notification: NotificationSettings {
                recipient_key: self.required(env::RECIPIENT_KEY, field::RECIPIENT_KEY)?,
                app_key: self.required(env::APP_KEY, field::APP_KEY)?,
            },
            dns: DnsSettings {
                base_url: self
                    .optional(env::BASE_URL)
                    .unwrap_or_else(|| defaults::BASE_URL.to_string()),
                api_token: self.required(env::API_TOKEN, field::API_TOKEN)?,
                zone_id: self.required(env::ZONE_ID, field::ZONE_ID)?,
                domain: self.required(env::DOMAIN, field::DOMAIN)?,
            },
            ip_echo_url: self.optional(env::IP_ECHO_URL),
        };
        config.validate()?;

        Ok(config)
    }
}

/// Returns `config.json` in the directory holding the running executable.
///
/// # Errors
///
/// Returns [`ConfigError::ExecutableDir`] if the executable path is unknown.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::ExecutableDir)?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(defaults::CONFIG_FILE_NAME))
}

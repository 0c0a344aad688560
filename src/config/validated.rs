//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::webhook::{ReqwestClient, WebhookClient};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Robot token (required)
    pub token: String,

    /// Webhook endpoint without the token
    pub base_url: Url,

    /// Request timeout
    pub timeout: Duration,

    /// Dry-run mode (print the request body without sending)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ base_url: {}, token: {}, timeout: {}s, dry_run: {} }}",
            self.base_url,
            mask_token(&self.token),
            self.timeout.as_secs(),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The token is missing
    /// - The base URL is invalid
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let token = Self::resolve_token(cli, toml)?;
        let base_url = Self::resolve_base_url(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            token,
            base_url,
            timeout,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Builds the webhook client described by this configuration.
    #[must_use]
    pub fn webhook_client(&self) -> WebhookClient<ReqwestClient> {
        WebhookClient::new(self.token.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout)
    }

    fn resolve_token(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        // CLI takes precedence
        cli.token
            .as_deref()
            .or_else(|| toml.and_then(|t| t.bot.token.as_deref()))
            .map(ToString::to_string)
            .ok_or_else(|| {
                ConfigError::missing(field::TOKEN, "Use --token or set bot.token in config file")
            })
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.bot.base_url.as_deref()))
            .unwrap_or(defaults::BASE_URL);

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: url_str.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.bot.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Keeps the first four characters of the token for log output.
fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("{visible}***")
}

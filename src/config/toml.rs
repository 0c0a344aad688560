//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Robot configuration section
    #[serde(default)]
    pub bot: BotSection,
}

/// Robot configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BotSection {
    /// Robot token
    pub token: Option<String>,

    /// Webhook endpoint without the token
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# wecom-bot Configuration File

[bot]
# Robot token (required), the `key` parameter of the webhook URL
# token = "693a91f6-7xxx-4bc4-97a0-0ec2sifa5aaa"

# Webhook endpoint without the token
# base_url = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send"

# Request timeout in seconds (default: 30)
timeout = 30
"#
    .to_string()
}

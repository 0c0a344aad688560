//! Configuration layer for the `wecom-bot` binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The token has no default and must come from `--token` or `bot.token`.
//!
//! The library itself takes none of this: [`crate::webhook::WebhookClient`]
//! is built from a token and optional builder calls only.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{BotSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};

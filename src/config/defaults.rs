//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

use crate::webhook;

/// Default webhook endpoint (production).
pub const BASE_URL: &str = webhook::DEFAULT_BASE_URL;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = webhook::DEFAULT_TIMEOUT.as_secs();

/// Default path written by the `init` subcommand.
pub const CONFIG_FILE: &str = "wecom-bot.toml";

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}

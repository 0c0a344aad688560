//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// wecom-bot: send a message to a WeCom group robot
///
/// Posts one text, markdown, image, file or news message to the robot
/// webhook and prints the platform's raw reply.
#[derive(Debug, Parser)]
#[command(name = "wecom-bot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Robot token (the `key` query parameter of the webhook URL)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Webhook endpoint without the token
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Print the request body instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for wecom-bot
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a plain text message
    Text {
        /// Message text
        content: String,

        /// User id to mention (can be specified multiple times, "@all" for everyone)
        #[arg(long = "mention", value_name = "USERID")]
        mentions: Vec<String>,

        /// Mobile number to mention (can be specified multiple times)
        #[arg(long = "mention-mobile", value_name = "PHONE")]
        mention_mobiles: Vec<String>,
    },

    /// Send a markdown message
    Markdown {
        /// Markdown source
        content: String,
    },

    /// Send an image file (JPG or PNG)
    Image {
        /// Path to the image
        path: PathBuf,
    },

    /// Send a previously uploaded file
    File {
        /// Media id returned by the upload API
        media_id: String,
    },

    /// Send a news card
    News {
        /// Card title
        #[arg(long)]
        title: String,

        /// Card description
        #[arg(long, default_value = "")]
        description: String,

        /// Link opened when the card is clicked
        #[arg(long)]
        url: String,

        /// Cover image URL
        #[arg(long = "pic-url", default_value = "")]
        pic_url: String,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
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

    /// Parses CLI arguments from an iterator, returning clap's error.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or missing arguments.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}

//! Application execution logic.
//!
//! Turns the chosen subcommand into a [`Message`] and either sends it
//! once or, in dry-run mode, prints the request body.

use std::path::{Path, PathBuf};

use thiserror::Error;

use wecom_bot::config::{Command, ValidatedConfig};
use wecom_bot::webhook::{
    FileContent, HttpClient, ImageContent, MarkdownContent, Message, NewsContent, SendError,
    TextContent, WebhookClient,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read the image to send.
    #[error("Failed to read image '{}': {source}", path.display())]
    ImageRead {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to render the request body for dry-run output.
    #[error("Failed to render request body: {0}")]
    Render(#[source] serde_json::Error),

    /// The webhook request failed.
    #[error("Failed to send message: {0}")]
    Send(#[from] SendError),
}

/// Builds the message described by a send subcommand.
///
/// Returns `None` for commands that send nothing (`init`).
///
/// # Errors
///
/// Returns [`RunError::ImageRead`] if the image file cannot be read.
pub fn build_message(command: &Command) -> Result<Option<Message>, RunError> {
    let message = match command {
        Command::Text {
            content,
            mentions,
            mention_mobiles,
        } => Message::from(TextContent {
            content: content.clone(),
            mentioned_list: mentions.clone(),
            mentioned_mobile_list: mention_mobiles.clone(),
        }),
        Command::Markdown { content } => Message::from(MarkdownContent::new(content.as_str())),
        Command::Image { path } => Message::from(read_image(path)?),
        Command::File { media_id } => Message::from(FileContent::new(media_id.as_str())),
        Command::News {
            title,
            description,
            url,
            pic_url,
        } => Message::from(
            NewsContent::new(title.as_str(), url.as_str())
                .with_description(description.as_str())
                .with_pic_url(pic_url.as_str()),
        ),
        Command::Init { .. } => return Ok(None),
    };

    Ok(Some(message))
}

/// Sends the message, or prints it in dry-run mode.
///
/// The platform's reply goes to stdout verbatim.
///
/// # Errors
///
/// Returns an error if the request fails at the transport level or the
/// dry-run body cannot be rendered.
///
/// # Coverage Note
///
/// Excluded from coverage because it writes to stdout and talks to the
/// configured endpoint; [`deliver`] and [`render_dry_run`] are tested.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, message: Message) -> Result<(), RunError> {
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - {} message will not be sent", message.kind());
        println!("{}", render_dry_run(&message)?);
        return Ok(());
    }

    let client = config.webhook_client();
    let body = deliver(&client, message).await?;
    println!("{}", String::from_utf8_lossy(&body));

    Ok(())
}

/// Sends one message and returns the platform's raw reply.
async fn deliver<H: HttpClient>(
    client: &WebhookClient<H>,
    message: Message,
) -> Result<Vec<u8>, RunError> {
    let kind = message.kind();
    let body = client.send(message).await?;
    tracing::info!("Sent {kind} message ({} byte reply)", body.len());
    Ok(body)
}

/// Renders the request body the way it would be sent, pretty-printed.
fn render_dry_run(message: &Message) -> Result<String, RunError> {
    serde_json::to_string_pretty(message).map_err(RunError::Render)
}

fn read_image(path: &Path) -> Result<ImageContent, RunError> {
    let bytes = std::fs::read(path).map_err(|e| RunError::ImageRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Read {} bytes of image data from {}", bytes.len(), path.display());

    Ok(ImageContent::from_bytes(&bytes))
}

//! Error types for webhook delivery.

use thiserror::Error;

/// Boxed error source carried by transport-level failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport layer without dictating
/// recovery strategy. Converted into [`SendError`] by the webhook client.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] BoxError),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built (invalid URL, bad header, ...).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be read to completion.
    #[error("Failed to read response body: {0}")]
    Body(#[source] BoxError),
}

/// Transport-level failure while talking to the webhook endpoint.
#[derive(Debug, Error)]
pub enum TransportError {
    /// DNS, connect or TLS failure.
    #[error("connection failed: {0}")]
    Connection(#[source] BoxError),

    /// No response within the request timeout.
    #[error("request timed out")]
    Timeout,
}

/// Error returned by every send operation of
/// [`WebhookClient`](super::WebhookClient).
///
/// A non-2xx HTTP status is never reported here: the platform puts its
/// own `errcode`/`errmsg` in the returned body, which the caller inspects.
#[derive(Debug, Error)]
pub enum SendError {
    /// The envelope could not be encoded as JSON. No request was made.
    #[error("Failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP request could not be constructed.
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// The request did not complete at the transport level.
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// The response arrived but its body could not be drained.
    #[error("Failed to read response body: {0}")]
    ResponseRead(#[source] BoxError),
}

impl SendError {
    /// Returns true if the request timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Timeout))
    }

    /// Returns true for any transport-level failure (connection or timeout).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<HttpError> for SendError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Connection(source) => Self::Transport(TransportError::Connection(source)),
            HttpError::Timeout => Self::Transport(TransportError::Timeout),
            HttpError::InvalidUrl(reason) => Self::RequestBuild(reason),
            HttpError::Body(source) => Self::ResponseRead(source),
        }
    }
}

//! Webhook client that delivers messages to a group robot.

use std::time::Duration;

use http::header::{CONTENT_TYPE, HeaderValue};
use url::Url;

use super::{
    FileContent, HttpClient, HttpRequest, ImageContent, MarkdownContent, Message, NewsContent,
    ReqwestClient, SendError, TextContent,
};

/// Production endpoint of the group-robot webhook.
pub const DEFAULT_BASE_URL: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send";

/// Query parameter carrying the robot token.
const TOKEN_PARAM: &str = "key";

/// Client-wide request timeout unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for one group-robot webhook.
///
/// Holds the robot token, the endpoint and an HTTP client handle. Every
/// `send_*` call makes exactly one POST and hands back the response body
/// untouched: the platform reports logical failures as `errcode`/`errmsg`
/// inside a JSON body, and interpreting it is up to the caller.
///
/// The client is immutable after construction, so it can be shared across
/// tasks (e.g. behind an `Arc`) without locking.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use wecom_bot::webhook::{TextContent, WebhookClient};
///
/// # async fn example() -> Result<(), wecom_bot::webhook::SendError> {
/// let client = WebhookClient::new("693a91f6-7xxx-4bc4-97a0-0ec2sifa5aaa");
/// let body = client.send_text(TextContent::new("deploy finished")).await?;
/// println!("{}", String::from_utf8_lossy(&body));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhookClient<H = ReqwestClient> {
    http: H,
    token: String,
    base_url: Url,
    timeout: Duration,
}

impl WebhookClient<ReqwestClient> {
    /// Creates a client for the given robot token.
    ///
    /// The token is not validated; a bad token shows up in the platform's
    /// reply. Uses [`DEFAULT_BASE_URL`] and [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: ReqwestClient::new(),
            token: token.into(),
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl<H> WebhookClient<H> {
    /// Replaces the HTTP client.
    #[must_use]
    pub fn with_http_client<H2>(self, http: H2) -> WebhookClient<H2> {
        WebhookClient {
            http,
            token: self.token,
            base_url: self.base_url,
            timeout: self.timeout,
        }
    }

    /// Points the client at another endpoint, e.g. a stub server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the default timeout applied to every request.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the robot token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the endpoint without the token.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the HTTP client handle.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http
    }

    /// Returns the default request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the full request URL, token included.
    ///
    /// Any query already present on the base URL is kept.
    #[must_use]
    pub fn endpoint(&self) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair(TOKEN_PARAM, &self.token);
        url
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Sends a text message.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_text(&self, msg: TextContent) -> Result<Vec<u8>, SendError> {
        self.send(msg).await
    }

    /// Sends a markdown message.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_markdown(&self, msg: MarkdownContent) -> Result<Vec<u8>, SendError> {
        self.send(msg).await
    }

    /// Sends an image message.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_image(&self, msg: ImageContent) -> Result<Vec<u8>, SendError> {
        self.send(msg).await
    }

    /// Sends a file message.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_file(&self, msg: FileContent) -> Result<Vec<u8>, SendError> {
        self.send(msg).await
    }

    /// Sends a news card.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_news(&self, msg: NewsContent) -> Result<Vec<u8>, SendError> {
        self.send(msg).await
    }

    /// Sends any message with the client's default timeout.
    ///
    /// # Errors
    ///
    /// - [`SendError::Serialization`] if the envelope cannot be encoded
    ///   (no request is made)
    /// - [`SendError::RequestBuild`] if the request cannot be constructed
    /// - [`SendError::Transport`] on connection failure or timeout
    /// - [`SendError::ResponseRead`] if the body cannot be drained
    ///
    /// A non-2xx status is not an error; its body is returned.
    pub async fn send(&self, message: impl Into<Message>) -> Result<Vec<u8>, SendError> {
        self.send_with_timeout(message, self.timeout).await
    }

    /// Sends any message with a per-request timeout.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn send_with_timeout(
        &self,
        message: impl Into<Message>,
        timeout: Duration,
    ) -> Result<Vec<u8>, SendError> {
        let message = message.into();
        let body = message.to_json()?;

        let request = HttpRequest::post(self.endpoint())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(body)
            .with_timeout(timeout);

        tracing::debug!(kind = %message.kind(), "Sending webhook message");

        let response = self.http.request(request).await?;

        tracing::debug!(
            kind = %message.kind(),
            status = %response.status,
            bytes = response.body.len(),
            "Webhook responded"
        );

        Ok(response.body)
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL")
}

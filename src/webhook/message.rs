//! Message payloads and the envelope they are sent in.
//!
//! Every request body is a [`Message`]: a `msgtype` tag plus exactly one
//! payload object stored under the key of the same name.
//!
//! ```
//! use wecom_bot::webhook::{Message, TextContent};
//!
//! let message = Message::from(TextContent::new("hello").with_mention("zhangsan"));
//! let json = serde_json::to_string(&message).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"msgtype":"text","text":{"content":"hello","mentioned_list":["zhangsan"]}}"#
//! );
//! ```

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

/// Mention target that notifies every member of the group.
pub const MENTION_ALL: &str = "@all";

/// Plain text message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    /// Message text.
    pub content: String,

    /// User ids to mention, in order. [`MENTION_ALL`] mentions everyone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentioned_list: Vec<String>,

    /// Mobile numbers to mention, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentioned_mobile_list: Vec<String>,
}

impl TextContent {
    /// Creates a text message without mentions.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Appends a user id to the mention list.
    #[must_use]
    pub fn with_mention(mut self, user_id: impl Into<String>) -> Self {
        self.mentioned_list.push(user_id.into());
        self
    }

    /// Appends a mobile number to the mobile mention list.
    #[must_use]
    pub fn with_mentioned_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mentioned_mobile_list.push(mobile.into());
        self
    }

    /// Mentions every member of the group.
    #[must_use]
    pub fn with_mention_all(self) -> Self {
        self.with_mention(MENTION_ALL)
    }
}

/// Markdown message, limited to the subset the platform renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownContent {
    /// Markdown source.
    pub content: String,
}

impl MarkdownContent {
    /// Creates a markdown message.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Image message.
///
/// The platform wants the raw image inline: `base64` holds the encoded
/// bytes and `md5` the lowercase hex digest of the bytes before encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
    /// Base64-encoded image bytes.
    pub base64: String,
    /// Hex MD5 of the raw image bytes.
    pub md5: String,
}

impl ImageContent {
    /// Creates an image payload from already encoded parts.
    #[must_use]
    pub fn new(base64: impl Into<String>, md5: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
            md5: md5.into(),
        }
    }

    /// Encodes raw image bytes (JPG or PNG) into a payload.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            base64: STANDARD.encode(bytes),
            md5: format!("{:x}", Md5::digest(bytes)),
        }
    }
}

/// File message referring to media uploaded beforehand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    /// Identifier returned by the media upload API.
    pub media_id: String,
}

impl FileContent {
    /// Creates a file message.
    #[must_use]
    pub fn new(media_id: impl Into<String>) -> Self {
        Self {
            media_id: media_id.into(),
        }
    }
}

/// Single news card linking to a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsContent {
    /// Card title.
    pub title: String,
    /// Card description.
    pub description: String,
    /// Link opened when the card is clicked.
    pub url: String,
    /// Cover image URL.
    #[serde(rename = "picurl")]
    pub pic_url: String,
}

impl NewsContent {
    /// Creates a news card with the required title and link.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the card description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the cover image URL.
    #[must_use]
    pub fn with_pic_url(mut self, pic_url: impl Into<String>) -> Self {
        self.pic_url = pic_url.into();
        self
    }
}

/// Kind of a [`Message`], as written in its `msgtype` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// `text`
    Text,
    /// `markdown`
    Markdown,
    /// `image`
    Image,
    /// `file`
    File,
    /// `news`
    News,
}

impl MessageKind {
    /// Returns the wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Image => "image",
            Self::File => "file",
            Self::News => "news",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request envelope: a `msgtype` tag and the matching payload.
///
/// Only the active payload key is serialized, so the platform never sees
/// empty sibling objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "msgtype", rename_all = "lowercase")]
pub enum Message {
    /// Plain text.
    Text {
        /// Payload.
        text: TextContent,
    },
    /// Markdown.
    Markdown {
        /// Payload.
        markdown: MarkdownContent,
    },
    /// Inline image.
    Image {
        /// Payload.
        image: ImageContent,
    },
    /// Previously uploaded file.
    File {
        /// Payload.
        file: FileContent,
    },
    /// News card.
    News {
        /// Payload.
        news: NewsContent,
    },
}

impl Message {
    /// Returns the kind tag of this message.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::Text { .. } => MessageKind::Text,
            Self::Markdown { .. } => MessageKind::Markdown,
            Self::Image { .. } => MessageKind::Image,
            Self::File { .. } => MessageKind::File,
            Self::News { .. } => MessageKind::News,
        }
    }

    /// Encodes the envelope as a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error; not expected for these plain types.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl From<TextContent> for Message {
    fn from(text: TextContent) -> Self {
        Self::Text { text }
    }
}

impl From<MarkdownContent> for Message {
    fn from(markdown: MarkdownContent) -> Self {
        Self::Markdown { markdown }
    }
}

impl From<ImageContent> for Message {
    fn from(image: ImageContent) -> Self {
        Self::Image { image }
    }
}

impl From<FileContent> for Message {
    fn from(file: FileContent) -> Self {
        Self::File { file }
    }
}

impl From<NewsContent> for Message {
    fn from(news: NewsContent) -> Self {
        Self::News { news }
    }
}

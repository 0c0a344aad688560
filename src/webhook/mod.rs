//! Webhook layer for posting messages to a group robot.
//!
//! This module provides types and traits for:
//! - Message payloads and their envelope ([`Message`], [`TextContent`], ...)
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The robot client itself ([`WebhookClient`])

mod bot;
mod client;
mod error;
mod http;
mod message;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;

pub use bot::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, WebhookClient};
pub use client::ReqwestClient;
pub use error::{BoxError, HttpError, SendError, TransportError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use message::{
    FileContent, ImageContent, MENTION_ALL, MarkdownContent, Message, MessageKind, NewsContent,
    TextContent,
};

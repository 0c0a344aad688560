//! wecom-bot: WeCom group-robot webhook client
//!
//! A small library for posting text, markdown, image, file and news
//! messages to a group robot, plus the configuration layer used by the
//! `wecom-bot` command-line tool.

pub mod config;
pub mod webhook;

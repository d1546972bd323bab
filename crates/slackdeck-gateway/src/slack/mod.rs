//! Slack Web API implementation of the chat gateway

mod client;
pub mod format;
pub mod protocol;

pub use client::{SlackGateway, DEFAULT_SLACK_API_URL};
pub use format::{parse_slack_timestamp, render_slack_text};

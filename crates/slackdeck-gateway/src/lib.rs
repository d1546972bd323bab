//! # slackdeck-gateway - Chat Service Access
//!
//! Talks to the chat service on behalf of the app layer. Everything above this
//! crate sees only the [`ChatGateway`] trait, an opaque [`Session`] and the
//! domain types from [`slackdeck_core`].
//!
//! ## Public API
//!
//! ### Gateway Abstraction
//! - [`ChatGateway`] - Async operations the app performs against the service
//! - [`HistoryMessage`] - Raw history entry before author resolution
//! - [`Session`] - Authenticated handle, cheap to clone and share across tasks
//!
//! ### Slack Web API
//! - [`SlackGateway`] - reqwest-backed implementation of [`ChatGateway`]
//! - [`render_slack_text()`] - Convert Slack message markup to plain text
//! - [`parse_slack_timestamp()`] - Parse a Slack `ts` value into UTC
//!
//! ### Test Helpers (feature `test-helpers`)
//! - `FakeGateway` - Scripted in-memory gateway that records every call

pub mod gateway;
pub mod session;
pub mod slack;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use gateway::{ChatGateway, HistoryMessage, LocalChatGateway};
pub use session::Session;
pub use slack::{
    parse_slack_timestamp, render_slack_text, SlackGateway, DEFAULT_SLACK_API_URL,
};

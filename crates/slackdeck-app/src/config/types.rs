//! Configuration types for Slack Deck
//!
//! Every section and field has a default, so a partial or missing
//! `config.toml` is always valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub messages: MessageSettings,

    #[serde(default)]
    pub network: NetworkSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Credential lookup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    /// Environment variable holding the Slack token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
        }
    }
}

fn default_token_env() -> String {
    "SLACK_TOKEN".to_string()
}

/// Message fetch limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageSettings {
    /// Channels read by the aggregate view
    #[serde(default = "default_channel_limit")]
    pub channel_limit: usize,

    /// Messages per channel in the aggregate view
    #[serde(default = "default_per_channel_limit")]
    pub per_channel_limit: usize,

    /// Messages read when a single channel is selected
    #[serde(default = "default_selected_channel_limit")]
    pub selected_channel_limit: usize,

    /// Channel name or ID selected after login. Unset = aggregate view.
    #[serde(default)]
    pub default_channel: Option<String>,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            channel_limit: default_channel_limit(),
            per_channel_limit: default_per_channel_limit(),
            selected_channel_limit: default_selected_channel_limit(),
            default_channel: None,
        }
    }
}

fn default_channel_limit() -> usize {
    5
}

fn default_per_channel_limit() -> usize {
    3
}

fn default_selected_channel_limit() -> usize {
    10
}

/// Slack API access
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Upper bound for one background task, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl NetworkSettings {
    /// Task and HTTP timeout, never below one second
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn default_api_url() -> String {
    slackdeck_gateway::DEFAULT_SLACK_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll interval; also paces the loading spinner
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl UiSettings {
    /// Event poll interval, never below 10ms
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

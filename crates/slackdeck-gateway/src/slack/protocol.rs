//! Slack Web API response types.
//!
//! Every Web API method replies with a JSON envelope carrying an `ok` flag.
//! On failure the envelope holds a short machine-readable `error` code such as
//! `"invalid_auth"` or `"channel_not_found"`, which is surfaced verbatim.
//!
//! API reference: <https://api.slack.com/web>

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use slackdeck_core::prelude::*;
use slackdeck_core::Presence;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Parse a Web API response body, turning `ok: false` into [`Error::Gateway`].
pub fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;

    let ok = value.get("ok").and_then(Value::as_bool).unwrap_or(false);
    if !ok {
        let code = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown_error");
        return Err(Error::gateway(code));
    }

    Ok(serde_json::from_value(value)?)
}

// ---------------------------------------------------------------------------
// Method responses
// ---------------------------------------------------------------------------

/// `auth.test`
#[derive(Debug, Deserialize)]
pub struct AuthTestResponse {
    pub user_id: String,
    /// Handle of the token owner.
    pub user: String,
    /// Workspace name.
    #[serde(default)]
    pub team: Option<String>,
}

/// `conversations.list`
#[derive(Debug, Deserialize)]
pub struct ConversationsListResponse {
    #[serde(default)]
    pub channels: Vec<Conversation>,
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Conversation {
    pub id: String,
    /// Absent for direct messages.
    #[serde(default)]
    pub name: String,
}

/// Pagination cursor. An empty `next_cursor` means the last page.
#[derive(Debug, Default, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: String,
}

impl ConversationsListResponse {
    pub fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .map(|meta| meta.next_cursor.as_str())
            .filter(|cursor| !cursor.is_empty())
    }
}

/// `conversations.history`, newest message first
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub messages: Vec<HistoryItem>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryItem {
    /// Missing on bot and system messages.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: String,
    pub ts: String,
}

/// `users.info`
#[derive(Debug, Deserialize)]
pub struct UserInfoResponse {
    pub user: UserInfo,
}

#[derive(Debug, Deserialize)]
pub struct UserInfo {
    pub name: String,
}

/// `chat.postMessage`
#[derive(Debug, Deserialize)]
pub struct PostMessageResponse {
    pub channel: String,
    pub ts: String,
}

/// Methods whose only payload is the `ok` flag
#[derive(Debug, Deserialize)]
pub struct Ack {}

// ---------------------------------------------------------------------------
// Presence mapping
// ---------------------------------------------------------------------------

/// Value for `users.setPresence`. Slack only knows `auto` and `away`, so
/// Do Not Disturb is broadcast as away and carried by the custom status.
pub fn presence_flag(presence: Presence) -> &'static str {
    match presence {
        Presence::Active => "auto",
        Presence::Away | Presence::DoNotDisturb => "away",
    }
}

/// Custom status `(text, emoji)` for `users.profile.set`
pub fn status_profile(presence: Presence) -> (&'static str, &'static str) {
    match presence {
        Presence::Active => ("Active", ":white_check_mark:"),
        Presence::Away => ("Away", ":away:"),
        Presence::DoNotDisturb => ("Do Not Disturb", ":no_entry:"),
    }
}

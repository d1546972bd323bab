//! Scripted in-memory gateway for tests
//!
//! `FakeGateway` answers every operation from data supplied up front and
//! records each call so tests can assert on what the task runner did.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use slackdeck_core::prelude::*;
use slackdeck_core::{Channel, Identity, MessageReceipt, Presence};

use crate::gateway::{ChatGateway, HistoryMessage};
use crate::session::Session;

/// Operation names used to script failures and inspect calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOp {
    Authenticate,
    ListChannels,
    ListRecentMessages,
    ResolveDisplayName,
    SetPresence,
    PostMessage,
}

/// A recorded call with its interesting arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Authenticate { credential: String },
    ListChannels,
    ListRecentMessages { channel_id: String, limit: usize },
    ResolveDisplayName { user_id: String },
    SetPresence(Presence),
    PostMessage { channel_id: String, text: String },
}

#[derive(Default)]
struct FakeState {
    identity: Option<Identity>,
    channels: Vec<Channel>,
    /// Newest first, as the service delivers them
    history: HashMap<String, Vec<HistoryMessage>>,
    users: HashMap<String, String>,
    failures: HashMap<GatewayOp, String>,
    /// Fail `ListRecentMessages` only for these channels
    failing_channels: HashSet<String>,
    delay: Option<Duration>,
    calls: Vec<GatewayCall>,
}

/// In-memory [`ChatGateway`] with scripted responses
#[derive(Clone, Default)]
pub struct FakeGateway {
    state: Arc<Mutex<FakeState>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity returned by a successful authenticate
    pub fn with_identity(self, user_id: &str, display_name: &str) -> Self {
        self.lock().identity = Some(Identity::new(user_id, display_name));
        self
    }

    pub fn with_channel(self, id: &str, name: &str) -> Self {
        self.lock().channels.push(Channel::new(id, name));
        self
    }

    /// Append a message to a channel's history. Add them newest first.
    pub fn with_message(self, channel_id: &str, user_id: Option<&str>, text: &str, secs: i64) -> Self {
        self.lock()
            .history
            .entry(channel_id.to_string())
            .or_default()
            .push(HistoryMessage::new(user_id, text, at(secs)));
        self
    }

    pub fn with_user(self, user_id: &str, display_name: &str) -> Self {
        self.lock()
            .users
            .insert(user_id.to_string(), display_name.to_string());
        self
    }

    /// Make every call of `op` fail with `message`
    pub fn failing(self, op: GatewayOp, message: &str) -> Self {
        self.lock().failures.insert(op, message.to_string());
        self
    }

    /// Make history fetches for one channel fail
    pub fn failing_channel(self, channel_id: &str, message: &str) -> Self {
        {
            let mut state = self.lock();
            state.failing_channels.insert(channel_id.to_string());
            state
                .failures
                .entry(GatewayOp::ListRecentMessages)
                .or_insert_with(|| message.to_string());
        }
        self
    }

    /// Sleep before answering each call
    pub fn with_delay(self, delay: Duration) -> Self {
        self.lock().delay = Some(delay);
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self, op: GatewayOp) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.op() == op)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        // A panicking test thread must not hide the calls from other assertions
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the call, then return the scripted failure for `op` if any
    fn record(&self, call: GatewayCall) -> Result<()> {
        let mut state = self.lock();
        let op = call.op();
        let channel_scoped = matches!(
            &call,
            GatewayCall::ListRecentMessages { channel_id, .. } if !state.failing_channels.is_empty()
                && !state.failing_channels.contains(channel_id)
        );
        state.calls.push(call);

        match state.failures.get(&op) {
            Some(message) if !channel_scoped => Err(Error::gateway(message.clone())),
            _ => Ok(()),
        }
    }

    async fn pause(&self) {
        let delay = self.lock().delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl GatewayCall {
    pub fn op(&self) -> GatewayOp {
        match self {
            GatewayCall::Authenticate { .. } => GatewayOp::Authenticate,
            GatewayCall::ListChannels => GatewayOp::ListChannels,
            GatewayCall::ListRecentMessages { .. } => GatewayOp::ListRecentMessages,
            GatewayCall::ResolveDisplayName { .. } => GatewayOp::ResolveDisplayName,
            GatewayCall::SetPresence(_) => GatewayOp::SetPresence,
            GatewayCall::PostMessage { .. } => GatewayOp::PostMessage,
        }
    }
}

impl ChatGateway for FakeGateway {
    async fn authenticate(&self, credential: &str) -> Result<(Session, Identity)> {
        self.pause().await;
        self.record(GatewayCall::Authenticate {
            credential: credential.to_string(),
        })?;
        let identity = self
            .lock()
            .identity
            .clone()
            .unwrap_or_else(|| Identity::new("U0", "tester"));
        Ok((Session::new(credential), identity))
    }

    async fn list_channels(&self, _session: &Session) -> Result<Vec<Channel>> {
        self.pause().await;
        self.record(GatewayCall::ListChannels)?;
        Ok(self.lock().channels.clone())
    }

    async fn list_recent_messages(
        &self,
        _session: &Session,
        channel_id: &str,
        limit: usize,
    ) -> Result<Vec<HistoryMessage>> {
        self.pause().await;
        self.record(GatewayCall::ListRecentMessages {
            channel_id: channel_id.to_string(),
            limit,
        })?;
        let state = self.lock();
        let history = state.history.get(channel_id).cloned().unwrap_or_default();
        Ok(history.into_iter().take(limit).collect())
    }

    async fn resolve_display_name(&self, _session: &Session, user_id: &str) -> Result<String> {
        self.pause().await;
        self.record(GatewayCall::ResolveDisplayName {
            user_id: user_id.to_string(),
        })?;
        self.lock()
            .users
            .get(user_id)
            .cloned()
            .ok_or_else(|| Error::gateway("user_not_found"))
    }

    async fn set_presence(&self, _session: &Session, presence: Presence) -> Result<()> {
        self.pause().await;
        self.record(GatewayCall::SetPresence(presence))
    }

    async fn post_message(
        &self,
        _session: &Session,
        channel_id: &str,
        text: &str,
    ) -> Result<MessageReceipt> {
        self.pause().await;
        self.record(GatewayCall::PostMessage {
            channel_id: channel_id.to_string(),
            text: text.to_string(),
        })?;
        Ok(MessageReceipt {
            channel_id: channel_id.to_string(),
            timestamp: "1700000000.000100".to_string(),
        })
    }
}

/// UTC instant `secs` seconds after the epoch
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_records_calls_in_order() {
        let gateway = FakeGateway::new()
            .with_identity("U1", "alice")
            .with_channel("C1", "general");

        let (session, identity) = gateway.authenticate("xoxp-1").await.unwrap();
        assert_eq!(identity, Identity::new("U1", "alice"));
        let channels = gateway.list_channels(&session).await.unwrap();
        assert_eq!(channels, vec![Channel::new("C1", "general")]);

        assert_eq!(
            gateway.calls(),
            vec![
                GatewayCall::Authenticate {
                    credential: "xoxp-1".to_string()
                },
                GatewayCall::ListChannels,
            ]
        );
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let gateway = FakeGateway::new().failing(GatewayOp::PostMessage, "rate limited");
        let session = Session::new("xoxp-1");
        let err = gateway
            .post_message(&session, "C1", "hello")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "rate limited");
        assert_eq!(gateway.call_count(GatewayOp::PostMessage), 1);
    }

    #[tokio::test]
    async fn test_failing_channel_only_affects_that_channel() {
        let gateway = FakeGateway::new()
            .with_message("C1", Some("U1"), "ok", 10)
            .failing_channel("C2", "channel_not_found");
        let session = Session::new("t");

        assert_eq!(
            gateway
                .list_recent_messages(&session, "C1", 3)
                .await
                .unwrap()
                .len(),
            1
        );
        let err = gateway
            .list_recent_messages(&session, "C2", 3)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "channel_not_found");
    }

    #[tokio::test]
    async fn test_history_respects_limit() {
        let gateway = FakeGateway::new()
            .with_message("C1", Some("U1"), "third", 30)
            .with_message("C1", Some("U1"), "second", 20)
            .with_message("C1", Some("U1"), "first", 10);
        let messages = gateway
            .list_recent_messages(&Session::new("t"), "C1", 2)
            .await
            .unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "third");
    }
}

//! Engine - owns the model, the message channel and the gateway
//!
//! The TUI runner drives an `Engine`: it feeds input messages in, drains task
//! results, and renders `engine.state` between iterations.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::{Credential, Settings};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use slackdeck_core::prelude::*;
use slackdeck_gateway::ChatGateway;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Slack Deck.
///
/// Generic over the gateway so tests can run the real update/task loop
/// against a scripted gateway.
pub struct Engine<G> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, task runner).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Loaded settings
    pub settings: Settings,

    gateway: Arc<G>,
}

impl<G> Engine<G>
where
    G: ChatGateway + Sync + 'static,
{
    /// Create the engine. Must be called inside a tokio runtime: it spawns
    /// the signal handler.
    pub fn new(settings: Settings, credential: Option<Credential>, gateway: G) -> Self {
        let state = AppState::with_settings(&settings, credential);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        Self {
            state,
            msg_tx,
            msg_rx,
            settings,
            gateway: Arc::new(gateway),
        }
    }

    /// Process the one-time `Startup` message
    pub fn start(&mut self) {
        info!("Engine starting");
        self.process_message(Message::Startup);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        let task_timeout = self.task_timeout();
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.gateway,
            task_timeout,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Upper bound for one background task
    pub fn task_timeout(&self) -> Duration {
        self.settings.network.request_timeout()
    }

    /// Event poll interval for the frontend
    pub fn tick_rate(&self) -> Duration {
        self.settings.ui.tick_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::state::Page;
    use slackdeck_core::Presence;
    use slackdeck_gateway::test_utils::{FakeGateway, GatewayCall, GatewayOp};

    /// Wait for the next task result and process it
    async fn step(engine: &mut Engine<FakeGateway>) {
        let msg = engine.msg_rx.recv().await.expect("task result");
        engine.process_message(msg);
    }

    fn engine_with(gateway: FakeGateway) -> Engine<FakeGateway> {
        Engine::new(Settings::default(), Credential::new("xoxp-test"), gateway)
    }

    #[tokio::test]
    async fn test_startup_authenticates_then_fetches() {
        let gateway = FakeGateway::new()
            .with_identity("U1", "alice")
            .with_channel("C1", "general");
        let mut engine = engine_with(gateway.clone());

        engine.start();
        assert!(engine.state.is_loading);

        step(&mut engine).await; // Authenticated
        assert!(engine.state.is_loading);
        assert_eq!(
            engine.state.identity.as_ref().map(|i| i.display_name.as_str()),
            Some("alice")
        );

        step(&mut engine).await; // MessagesFetched
        assert!(!engine.state.is_loading);
        assert!(engine.state.error.is_none());
        assert!(engine.state.messages.is_empty());
        assert_eq!(gateway.call_count(GatewayOp::ListRecentMessages), 1);
    }

    #[tokio::test]
    async fn test_missing_credential_stays_in_error_view() {
        let mut engine = Engine::new(Settings::default(), None, FakeGateway::new());

        engine.start();

        assert_eq!(
            engine.state.error.as_deref(),
            Some("SLACK_TOKEN environment variable not set")
        );
        assert!(!engine.state.is_loading);
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_set_status_flow() {
        let gateway = FakeGateway::new().with_channel("C1", "general");
        let mut engine = engine_with(gateway.clone());
        engine.start();
        step(&mut engine).await;
        step(&mut engine).await;

        engine.process_message(Message::Key(InputKey::Down));
        engine.process_message(Message::Key(InputKey::Enter));
        assert_eq!(engine.state.page, Page::SetStatus);

        engine.process_message(Message::Key(InputKey::Down));
        engine.process_message(Message::Key(InputKey::Enter));
        assert!(engine.state.is_loading);

        step(&mut engine).await;
        assert_eq!(engine.state.presence, Presence::Away);
        assert_eq!(engine.state.page, Page::Main);
        assert!(gateway
            .calls()
            .contains(&GatewayCall::SetPresence(Presence::Away)));
    }

    #[tokio::test]
    async fn test_post_refreshes_messages_once() {
        let mut settings = Settings::default();
        settings.messages.default_channel = Some("#general".to_string());
        let gateway = FakeGateway::new().with_channel("C1", "general");
        let mut engine = Engine::new(settings, Credential::new("xoxp-test"), gateway.clone());
        engine.start();
        step(&mut engine).await;
        step(&mut engine).await;
        assert_eq!(engine.state.selected_channel_id.as_deref(), Some("C1"));

        engine.state.page = Page::PresetMessage;
        engine.process_message(Message::Activate);
        step(&mut engine).await; // MessagePosted
        assert_eq!(engine.state.page, Page::Main);
        assert!(!engine.state.is_loading);

        step(&mut engine).await; // silent refresh
        assert_eq!(engine.state.page, Page::Main);
        assert_eq!(gateway.call_count(GatewayOp::PostMessage), 1);
        assert_eq!(gateway.call_count(GatewayOp::ListRecentMessages), 2);
    }

    #[tokio::test]
    async fn test_quit_message_stops_engine() {
        let mut engine = engine_with(FakeGateway::new());
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_durations_from_settings() {
        let mut settings = Settings::default();
        settings.network.request_timeout_secs = 7;
        settings.ui.tick_rate_ms = 250;
        let engine = Engine::new(settings, None, FakeGateway::new());
        assert_eq!(engine.task_timeout(), Duration::from_secs(7));
        assert_eq!(engine.tick_rate(), Duration::from_millis(250));
    }
}

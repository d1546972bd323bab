//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use slackdeck_core::{Channel, ChatMessage, Identity, MessageReceipt, Presence};
use slackdeck_gateway::Session;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal size changed (also sent once at startup)
    Resize { width: u16, height: u16 },

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Sent once by the engine before the first event is processed
    Startup,

    /// Quit key: back to Main from any other page, exit from Main
    RequestQuit,

    /// Force quit regardless of page (signal handler)
    Quit,

    /// Escape: back to Main, or dismiss the error banner on Main
    Back,

    // ─────────────────────────────────────────────────────────
    // Menu Messages
    // ─────────────────────────────────────────────────────────
    /// Move the active menu's cursor down
    SelectNext,
    /// Move the active menu's cursor up
    SelectPrevious,
    /// Enter on the active page
    Activate,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll message panel up one line
    ScrollUp,
    /// Scroll message panel down one line
    ScrollDown,
    /// Scroll to top of message panel
    ScrollToTop,
    /// Scroll to bottom of message panel
    ScrollToBottom,
    /// Page up in message panel
    PageUp,
    /// Page down in message panel
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Task Results
    // ─────────────────────────────────────────────────────────
    /// Credential accepted and channel list loaded
    Authenticated {
        session: Session,
        identity: Identity,
        channels: Vec<Channel>,
    },
    AuthenticateFailed { error: String },

    /// Replacement message list, oldest first within each channel
    MessagesFetched { messages: Vec<ChatMessage> },
    MessagesFetchFailed { error: String },

    /// Background refresh result; leaves loading and error to the foreground
    MessagesRefreshed { messages: Vec<ChatMessage> },
    MessagesRefreshFailed { error: String },

    PresenceUpdated { presence: Presence },
    PresenceUpdateFailed { error: String },

    MessagePosted { receipt: MessageReceipt },
    MessagePostFailed { error: String },
}

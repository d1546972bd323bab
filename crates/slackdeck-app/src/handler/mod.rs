//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping per page
//! - `navigation`: Page changes and menu activation
//! - `results`: Background task result handlers
//! - `scroll`: Message panel scroll handlers

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod results;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::config::Credential;
use crate::message::Message;
use slackdeck_core::{Channel, Presence};

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background task against the chat gateway
    SpawnTask(Task),
}

/// Background tasks to spawn
///
/// Each task ends with exactly one result message.
#[derive(Debug, Clone)]
pub enum Task {
    /// Validate the credential, then load the channel list
    Authenticate { credential: Credential },
    /// Replace the message list
    FetchMessages { plan: FetchPlan },
    /// Replace the message list in the background, without the loading view
    RefreshMessages { plan: FetchPlan },
    /// Set presence and the matching custom status
    SetPresence { presence: Presence },
    /// Post a preset message
    PostMessage { channel_id: String, text: String },
}

/// Which history a fetch reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// One channel, `limit` most recent messages
    Channel { channel: Channel, limit: usize },
    /// `per_channel` messages from each channel, concatenated in list order
    Aggregate {
        channels: Vec<Channel>,
        per_channel: usize,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn task(task: Task) -> Self {
        Self::action(UpdateAction::SpawnTask(task))
    }
}

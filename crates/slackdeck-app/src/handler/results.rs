//! Background task result handlers

use crate::state::{AppState, Page};
use slackdeck_core::prelude::*;
use slackdeck_core::{Channel, ChatMessage, Identity, MessageReceipt, Presence};
use slackdeck_gateway::Session;

use super::{scroll, Task, UpdateResult};

/// Store the session and chain the first fetch. Loading stays on until the
/// fetch resolves.
pub fn handle_authenticated(
    state: &mut AppState,
    session: Session,
    identity: Identity,
    channels: Vec<Channel>,
) -> UpdateResult {
    info!(
        "Logged in as {} to {} with {} channels",
        identity.display_name,
        session.team().unwrap_or("unknown workspace"),
        channels.len()
    );
    state.session = Some(session);
    state.identity = Some(identity);
    state.channels = channels;
    select_default_channel(state);

    UpdateResult::task(Task::FetchMessages {
        plan: state.fetch_plan(),
    })
}

fn select_default_channel(state: &mut AppState) {
    let Some(reference) = state.default_channel.as_deref() else {
        return;
    };
    match state.channels.iter().find(|channel| channel.matches(reference)) {
        Some(channel) => {
            debug!("Default channel '{}' -> {}", reference, channel.id);
            state.selected_channel_id = Some(channel.id.clone());
        }
        None => warn!(
            "Default channel '{}' not found, using all channels",
            reference
        ),
    }
}

pub fn handle_messages_fetched(state: &mut AppState, messages: Vec<ChatMessage>) -> UpdateResult {
    debug!("Fetched {} messages", messages.len());
    state.messages = messages;
    state.message_scroll = 0;
    state.is_loading = false;
    state.error = None;
    UpdateResult::none()
}

pub fn handle_presence_updated(state: &mut AppState, presence: Presence) -> UpdateResult {
    state.presence = presence;
    state.is_loading = false;
    state.error = None;
    state.page = Page::Main;
    UpdateResult::none()
}

/// Back to Main, then refresh messages without the loading view
pub fn handle_message_posted(state: &mut AppState, receipt: MessageReceipt) -> UpdateResult {
    debug!(
        "Message posted to {} at {}",
        receipt.channel_id, receipt.timestamp
    );
    state.is_loading = false;
    state.error = None;
    state.page = Page::Main;
    UpdateResult::task(Task::RefreshMessages {
        plan: state.fetch_plan(),
    })
}

/// Swap in refreshed messages. Loading and error belong to whatever
/// operation the user started since.
pub fn handle_messages_refreshed(state: &mut AppState, messages: Vec<ChatMessage>) -> UpdateResult {
    debug!("Refreshed {} messages", messages.len());
    state.messages = messages;
    scroll::clamp(state);
    UpdateResult::none()
}

/// Surface a refresh failure only when no other operation is showing
pub fn handle_refresh_failed(state: &mut AppState, error: String) -> UpdateResult {
    if state.is_loading || state.error.is_some() {
        warn!("Background refresh failed: {}", error);
        return UpdateResult::none();
    }
    handle_task_failed(state, error)
}

/// Every failure ends loading and shows the error text verbatim
pub fn handle_task_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Task failed: {}", error);
    state.is_loading = false;
    state.error = Some(error);
    UpdateResult::none()
}

//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use slackdeck_core::prelude::*;

use super::{keys::handle_key, navigation, results, scroll, Task, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Startup => handle_startup(state),

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Resize { width, height } => {
            state.layout.width = width;
            state.layout.height = height;
            scroll::clamp(state);
            UpdateResult::none()
        }

        Message::Tick => {
            if state.is_loading {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::RequestQuit => navigation::handle_request_quit(state),
        Message::Back => navigation::handle_back(state),
        Message::SelectNext => navigation::handle_select_next(state),
        Message::SelectPrevious => navigation::handle_select_previous(state),
        Message::Activate => navigation::handle_activate(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Task Results
        // ─────────────────────────────────────────────────────────
        Message::Authenticated {
            session,
            identity,
            channels,
        } => results::handle_authenticated(state, session, identity, channels),
        Message::MessagesFetched { messages } => results::handle_messages_fetched(state, messages),
        Message::MessagesRefreshed { messages } => {
            results::handle_messages_refreshed(state, messages)
        }
        Message::MessagesRefreshFailed { error } => results::handle_refresh_failed(state, error),
        Message::PresenceUpdated { presence } => results::handle_presence_updated(state, presence),
        Message::MessagePosted { receipt } => results::handle_message_posted(state, receipt),

        Message::AuthenticateFailed { error }
        | Message::MessagesFetchFailed { error }
        | Message::PresenceUpdateFailed { error }
        | Message::MessagePostFailed { error } => results::handle_task_failed(state, error),
    }
}

/// Kick off authentication, or surface the missing credential
fn handle_startup(state: &mut AppState) -> UpdateResult {
    match state.credential.clone() {
        Some(credential) => {
            info!("Authenticating with credential from {}", state.token_env);
            state.is_loading = true;
            state.error = None;
            UpdateResult::task(Task::Authenticate { credential })
        }
        None => {
            let error = Error::missing_credential(&state.token_env);
            warn!("{}", error);
            state.error = Some(error.to_string());
            UpdateResult::none()
        }
    }
}

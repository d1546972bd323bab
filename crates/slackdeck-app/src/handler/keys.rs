//! Key event handlers for each page

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Page};

/// Convert key events to messages based on the current page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.page {
        Page::Messages => handle_key_messages(key),
        Page::Main | Page::SetStatus | Page::PresetMessage => handle_key_menu(key),
    }
}

/// Keys shared by every page
fn handle_key_common(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::RequestQuit),
        InputKey::Esc => Some(Message::Back),
        InputKey::Enter => Some(Message::Activate),
        _ => None,
    }
}

/// Menu pages: the cursor moves
fn handle_key_menu(key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_common(&key) {
        return Some(msg);
    }
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        _ => None,
    }
}

/// Messages page: the panel scrolls
fn handle_key_messages(key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_common(&key) {
        return Some(msg);
    }
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),
        _ => None,
    }
}

//! Scroll message handlers
//!
//! Vertical scrolling of the message panel, clamped to its content.

use crate::state::{AppState, Page};

use super::UpdateResult;

/// Handle scroll up message
pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    scroll_by(state, -1);
    UpdateResult::none()
}

/// Handle scroll down message
pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    scroll_by(state, 1);
    UpdateResult::none()
}

/// Handle scroll to top message
pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    if can_scroll(state) {
        state.message_scroll = 0;
    }
    UpdateResult::none()
}

/// Handle scroll to bottom message
pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    if can_scroll(state) {
        state.message_scroll = state.max_message_scroll();
    }
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let page = state.message_page_size() as isize;
    scroll_by(state, -page);
    UpdateResult::none()
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let page = state.message_page_size() as isize;
    scroll_by(state, page);
    UpdateResult::none()
}

/// Keep the offset valid after the layout or content changed
pub fn clamp(state: &mut AppState) {
    state.message_scroll = state.message_scroll.min(state.max_message_scroll());
}

fn can_scroll(state: &AppState) -> bool {
    state.page == Page::Messages && !state.is_loading
}

fn scroll_by(state: &mut AppState, delta: isize) {
    if !can_scroll(state) {
        return;
    }
    let target = state.message_scroll.saturating_add_signed(delta);
    state.message_scroll = target.min(state.max_message_scroll());
}

//! Page changes and menu activation

use crate::catalog::{MainAction, MenuKind};
use crate::state::{AppState, Page};
use slackdeck_core::prelude::*;

use super::{Task, UpdateResult};

/// Shown when a preset is chosen before any channel is selected
pub const NO_CHANNEL_SELECTED: &str = "No channel selected";

/// Quit key: exit from Main, back to Main from anywhere else
pub fn handle_request_quit(state: &mut AppState) -> UpdateResult {
    if state.page == Page::Main {
        info!("Quit requested");
        state.quit();
    } else {
        return_to_main(state);
    }
    UpdateResult::none()
}

/// Escape: back to Main, or dismiss the error banner when already there
pub fn handle_back(state: &mut AppState) -> UpdateResult {
    if state.page == Page::Main {
        state.error = None;
    } else {
        return_to_main(state);
    }
    UpdateResult::none()
}

fn return_to_main(state: &mut AppState) {
    state.page = Page::Main;
    state.error = None;
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    if !state.is_loading {
        if let Some(menu) = state.active_menu_mut() {
            menu.select_next();
        }
    }
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    if !state.is_loading {
        if let Some(menu) = state.active_menu_mut() {
            menu.select_previous();
        }
    }
    UpdateResult::none()
}

/// Enter on the current page
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let Some(item) = state.active_menu().and_then(|menu| menu.selected()) else {
        return UpdateResult::none();
    };

    match item.kind {
        MenuKind::Action(action) => activate_main_action(state, action),
        MenuKind::Status(presence) => {
            if state.is_loading {
                return UpdateResult::none();
            }
            start_operation(state);
            UpdateResult::task(Task::SetPresence { presence })
        }
        MenuKind::Preset => {
            if state.is_loading {
                return UpdateResult::none();
            }
            let Some(channel_id) = state.selected_channel_id.clone() else {
                debug!("Preset '{}' chosen with no channel selected", item.name);
                state.error = Some(NO_CHANNEL_SELECTED.to_string());
                return UpdateResult::none();
            };
            start_operation(state);
            UpdateResult::task(Task::PostMessage {
                channel_id,
                text: item.description.to_string(),
            })
        }
    }
}

fn activate_main_action(state: &mut AppState, action: MainAction) -> UpdateResult {
    match action {
        MainAction::ViewMessages => {
            if state.is_loading {
                return UpdateResult::none();
            }
            state.page = Page::Messages;
            state.message_scroll = 0;
            start_operation(state);
            UpdateResult::task(Task::FetchMessages {
                plan: state.fetch_plan(),
            })
        }
        MainAction::SetStatus => {
            state.page = Page::SetStatus;
            UpdateResult::none()
        }
        MainAction::SendPreset => {
            state.page = Page::PresetMessage;
            UpdateResult::none()
        }
        MainAction::Quit => {
            info!("Quit selected from menu");
            state.quit();
            UpdateResult::none()
        }
    }
}

/// A user-initiated operation clears the banner and gates further input
fn start_operation(state: &mut AppState) {
    state.is_loading = true;
    state.error = None;
    state.spinner_frame = 0;
}

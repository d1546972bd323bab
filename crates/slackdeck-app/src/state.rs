//! Application state (Model in TEA pattern)

use slackdeck_core::{Channel, ChatMessage, Identity, Presence};
use slackdeck_gateway::Session;

use crate::catalog::{MAIN_MENU, PRESET_MENU, STATUS_MENU};
use crate::config::{Credential, Settings};
use crate::handler::FetchPlan;
use crate::layout::LayoutDims;
use crate::menu_state::MenuState;
use crate::message_view;

/// Active top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Main,
    Messages,
    SetStatus,
    PresetMessage,
}

/// Message fetch sizes, copied from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchLimits {
    pub channel_limit: usize,
    pub per_channel_limit: usize,
    pub selected_channel_limit: usize,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            channel_limit: 5,
            per_channel_limit: 3,
            selected_channel_limit: 10,
        }
    }
}

/// Complete application state (the Model in TEA)
///
/// Mutated only by `handler::update`.
#[derive(Debug)]
pub struct AppState {
    /// Current page
    pub page: Page,

    /// An operation started by the user is in flight
    pub is_loading: bool,

    /// Error banner text; replaces the whole content area while set
    pub error: Option<String>,

    // ─────────────────────────────────────────────────────────
    // Chat data (set once after authentication)
    // ─────────────────────────────────────────────────────────
    pub session: Option<Session>,
    pub identity: Option<Identity>,
    pub channels: Vec<Channel>,

    /// Replaced wholesale by every successful fetch
    pub messages: Vec<ChatMessage>,

    /// Last presence confirmed by the service
    pub presence: Presence,

    /// `None` means the aggregate view over the first channels
    pub selected_channel_id: Option<String>,

    // ─────────────────────────────────────────────────────────
    // Menus & view
    // ─────────────────────────────────────────────────────────
    pub main_menu: MenuState,
    pub status_menu: MenuState,
    pub preset_menu: MenuState,

    /// First visible row of the message panel
    pub message_scroll: usize,

    /// Spinner animation counter, advanced on tick while loading
    pub spinner_frame: u64,

    pub layout: LayoutDims,

    // ─────────────────────────────────────────────────────────
    // Startup inputs
    // ─────────────────────────────────────────────────────────
    pub credential: Option<Credential>,

    /// Name of the variable the credential was read from
    pub token_env: String,

    /// Channel to select after login, by name or ID
    pub default_channel: Option<String>,

    pub fetch_limits: FetchLimits,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: Page::Main,
            is_loading: false,
            error: None,
            session: None,
            identity: None,
            channels: Vec::new(),
            messages: Vec::new(),
            presence: Presence::default(),
            selected_channel_id: None,
            main_menu: MenuState::new(MAIN_MENU),
            status_menu: MenuState::new(STATUS_MENU),
            preset_menu: MenuState::new(PRESET_MENU),
            message_scroll: 0,
            spinner_frame: 0,
            layout: LayoutDims::default(),
            credential: None,
            token_env: "SLACK_TOKEN".to_string(),
            default_channel: None,
            fetch_limits: FetchLimits::default(),
            should_quit: false,
        }
    }

    /// Create state from loaded settings and the credential read at startup
    pub fn with_settings(settings: &Settings, credential: Option<Credential>) -> Self {
        Self {
            credential,
            token_env: settings.auth.token_env.clone(),
            default_channel: settings.messages.default_channel.clone(),
            fetch_limits: FetchLimits {
                channel_limit: settings.messages.channel_limit,
                per_channel_limit: settings.messages.per_channel_limit,
                selected_channel_limit: settings.messages.selected_channel_limit,
            },
            ..Self::new()
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Menu that receives navigation on the current page
    pub fn active_menu(&self) -> Option<&MenuState> {
        match self.page {
            Page::Main => Some(&self.main_menu),
            Page::SetStatus => Some(&self.status_menu),
            Page::PresetMessage => Some(&self.preset_menu),
            Page::Messages => None,
        }
    }

    pub fn active_menu_mut(&mut self) -> Option<&mut MenuState> {
        match self.page {
            Page::Main => Some(&mut self.main_menu),
            Page::SetStatus => Some(&mut self.status_menu),
            Page::PresetMessage => Some(&mut self.preset_menu),
            Page::Messages => None,
        }
    }

    pub fn selected_channel(&self) -> Option<&Channel> {
        let id = self.selected_channel_id.as_deref()?;
        self.channels.iter().find(|channel| channel.id == id)
    }

    /// Describe the next fetch from the current channel selection
    pub fn fetch_plan(&self) -> FetchPlan {
        match &self.selected_channel_id {
            Some(id) => FetchPlan::Channel {
                channel: self
                    .selected_channel()
                    .cloned()
                    .unwrap_or_else(|| Channel::new(id.clone(), "")),
                limit: self.fetch_limits.selected_channel_limit,
            },
            None => FetchPlan::Aggregate {
                channels: self
                    .channels
                    .iter()
                    .take(self.fetch_limits.channel_limit)
                    .cloned()
                    .collect(),
                per_channel: self.fetch_limits.per_channel_limit,
            },
        }
    }

    /// Largest valid `message_scroll` for the current messages and layout
    pub fn max_message_scroll(&self) -> usize {
        let (width, height) = self.layout.panel_size();
        message_view::max_scroll(&self.messages, width, height)
    }

    /// Rows moved by PageUp/PageDown
    pub fn message_page_size(&self) -> usize {
        (self.layout.panel_size().1 as usize).max(1)
    }
}

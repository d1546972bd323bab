//! slackdeck-app - Application state and orchestration for Slack Deck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! the `Message` events, the `AppState` model, the `handler::update` transition
//! function, and the background task runner that talks to the chat gateway.
//! It also owns configuration loading and the `Engine` that ties them together.

pub mod actions;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod layout;
pub mod menu_state;
pub mod message;
pub mod message_view;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{FetchPlan, Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Page};

// Re-export gateway types for the TUI and the binary
pub use slackdeck_gateway::{ChatGateway, Session, SlackGateway};

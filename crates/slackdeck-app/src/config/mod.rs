//! Configuration for Slack Deck
//!
//! Supports:
//! - `config.toml` in the user config dir (or `--config <PATH>`) - Global settings
//! - The credential environment variable named by `auth.token_env`

pub mod credential;
pub mod settings;
pub mod types;

pub use credential::{read_credential, Credential};
pub use settings::{default_config_path, load_settings, CONFIG_FILENAME};
pub use types::*;

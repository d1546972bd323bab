//! Settings file loading

use std::path::{Path, PathBuf};

use slackdeck_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";

/// `<config dir>/slackdeck/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slackdeck").join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults.
///
/// A missing file is normal. An unreadable or invalid file is logged and
/// ignored so a typo never keeps the client from starting.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let Some(config_path) = path else {
        debug!("No config directory available, using defaults");
        return Settings::default();
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join(CONFIG_FILENAME)));
        assert_eq!(settings.messages.channel_limit, 5);
    }

    #[test]
    fn test_load_settings_no_path() {
        let settings = load_settings(None);
        assert_eq!(settings.auth.token_env, "SLACK_TOKEN");
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        let config = r#"
[auth]
token_env = "WORK_SLACK_TOKEN"

[messages]
channel_limit = 2
default_channel = "C042"

[network]
request_timeout_secs = 5

[ui]
tick_rate_ms = 250
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(Some(&path));

        assert_eq!(settings.auth.token_env, "WORK_SLACK_TOKEN");
        assert_eq!(settings.messages.channel_limit, 2);
        assert_eq!(settings.messages.per_channel_limit, 3);
        assert_eq!(settings.messages.default_channel.as_deref(), Some("C042"));
        assert_eq!(settings.network.request_timeout_secs, 5);
        assert_eq!(settings.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let settings = load_settings(Some(&path));

        assert_eq!(settings.network.api_url, "https://slack.com/api");
    }

    #[test]
    fn test_default_config_path_ends_with_slackdeck() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("slackdeck/config.toml"));
        }
    }
}

//! Domain types shared by the gateway, the app model and the renderer

use chrono::{DateTime, Utc};

/// The authenticated user, set once after a successful authenticate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub display_name: String,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A conversation snapshot fetched once after authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

impl Channel {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Match a user-supplied reference by ID or by name.
    ///
    /// A leading `#` on the name is ignored, so `general`, `#general` and
    /// `C0123` all match their channel.
    pub fn matches(&self, reference: &str) -> bool {
        let reference = reference.trim();
        if reference.is_empty() {
            return false;
        }
        self.id == reference || self.name == reference.trim_start_matches('#')
    }
}

/// A fetched message with its author already resolved to a display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: String,
    pub text: String,
    pub channel_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Broadcast availability of the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presence {
    #[default]
    Active,
    Away,
    DoNotDisturb,
}

impl Presence {
    /// Human-readable label used by the header indicator
    pub fn label(&self) -> &'static str {
        match self {
            Presence::Active => "Active",
            Presence::Away => "Away",
            Presence::DoNotDisturb => "Do Not Disturb",
        }
    }
}

impl std::fmt::Display for Presence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Acknowledgement returned by the chat service for a posted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReceipt {
    pub channel_id: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_defaults_to_active() {
        assert_eq!(Presence::default(), Presence::Active);
    }

    #[test]
    fn test_presence_labels() {
        assert_eq!(Presence::Active.label(), "Active");
        assert_eq!(Presence::Away.label(), "Away");
        assert_eq!(Presence::DoNotDisturb.to_string(), "Do Not Disturb");
    }

    #[test]
    fn test_channel_matches_id_and_name() {
        let channel = Channel::new("C1", "general");
        assert!(channel.matches("C1"));
        assert!(channel.matches("general"));
        assert!(channel.matches("#general"));
        assert!(channel.matches("  general "));
        assert!(!channel.matches("random"));
        assert!(!channel.matches(""));
    }
}

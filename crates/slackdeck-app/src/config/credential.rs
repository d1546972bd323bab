//! Slack credential read from the environment

use std::fmt;

/// A non-empty Slack token. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// `None` for an empty or whitespace-only value
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Read the credential from environment variable `var`
pub fn read_credential(var: &str) -> Option<Credential> {
    std::env::var(var).ok().and_then(Credential::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const TEST_VAR: &str = "SLACKDECK_TEST_TOKEN";

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::new("xoxp-secret").unwrap();
        assert_eq!(format!("{credential:?}"), "Credential(<redacted>)");
        assert_eq!(credential.expose(), "xoxp-secret");
    }

    #[test]
    fn test_blank_is_rejected() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
    }

    #[test]
    #[serial]
    fn test_read_credential_from_env() {
        std::env::set_var(TEST_VAR, "xoxb-from-env");
        assert_eq!(
            read_credential(TEST_VAR).map(|c| c.expose().to_string()),
            Some("xoxb-from-env".to_string())
        );
        std::env::remove_var(TEST_VAR);
    }

    #[test]
    #[serial]
    fn test_read_credential_missing() {
        std::env::remove_var(TEST_VAR);
        assert!(read_credential(TEST_VAR).is_none());
    }
}

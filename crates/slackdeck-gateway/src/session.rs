//! Authenticated session handle

use std::fmt;
use std::sync::Arc;

/// Opaque handle produced by a successful authentication.
///
/// The token never leaves this crate except through the gateway that issued
/// the session. Cloning is cheap: every clone shares the same inner data, so
/// background tasks can each hold one.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    token: String,
    team: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                token: token.into(),
                team: None,
            }),
        }
    }

    /// Attach the workspace name reported by the service
    pub fn with_team(token: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                token: token.into(),
                team: Some(team.into()),
            }),
        }
    }

    pub fn team(&self) -> Option<&str> {
        self.inner.team.as_deref()
    }

    pub(crate) fn token(&self) -> &str {
        &self.inner.token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("team", &self.inner.team)
            .field("token", &"<redacted>")
            .finish()
    }
}

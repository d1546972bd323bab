//! reqwest-backed Slack Web API client

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use slackdeck_core::prelude::*;
use slackdeck_core::{Channel, Identity, MessageReceipt, Presence};
use url::Url;

use super::format::{parse_slack_timestamp, render_slack_text};
use super::protocol::{
    self, presence_flag, status_profile, Ack, AuthTestResponse, ConversationsListResponse,
    HistoryResponse, PostMessageResponse, UserInfoResponse,
};
use crate::gateway::{ChatGateway, HistoryMessage};
use crate::session::Session;

/// Public Slack Web API base URL
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

/// Page size requested from `conversations.list`
const CHANNEL_PAGE_SIZE: usize = 200;

/// Upper bound on `conversations.list` pages followed per call
const MAX_CHANNEL_PAGES: usize = 10;

/// Chat gateway talking to the Slack Web API over HTTPS
#[derive(Debug, Clone)]
pub struct SlackGateway {
    client: Client,
    api_url: Url,
}

impl SlackGateway {
    /// Build a gateway for `api_url` with a per-request timeout.
    pub fn new(api_url: &str, request_timeout: Duration) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| Error::config(format!("invalid Slack API URL '{api_url}': {e}")))?;

        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("slackdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::config(format!("failed to build Slack HTTP client: {e}")))?;

        Ok(Self { client, api_url })
    }

    fn endpoint(&self, method: &str) -> String {
        let base = self.api_url.as_str().trim_end_matches('/');
        let suffix = method.trim_start_matches('/');
        format!("{base}/{suffix}")
    }

    async fn get<T: DeserializeOwned>(
        &self,
        token: &str,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self
            .client
            .get(self.endpoint(method))
            .bearer_auth(token)
            .query(query);
        self.call(method, request).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        token: &str,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T> {
        let request = self
            .client
            .post(self.endpoint(method))
            .bearer_auth(token)
            .json(&body);
        self.call(method, request).await
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, request: RequestBuilder) -> Result<T> {
        debug!("Slack API call: {}", method);

        let response = request.send().await.map_err(|e| {
            warn!("Slack API {} request failed: {}", method, e);
            Error::http(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("failed to read {method} response: {e}")))?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Slack API {} rate limited", method);
            return Err(Error::gateway("rate limited"));
        }
        if !status.is_success() {
            warn!("Slack API {} returned HTTP {}", method, status);
            return Err(Error::http(format!("{method} returned status {status}")));
        }

        protocol::parse_response(&body)
    }
}

impl ChatGateway for SlackGateway {
    async fn authenticate(&self, credential: &str) -> Result<(Session, Identity)> {
        let auth: AuthTestResponse = self.get(credential, "auth.test", &[]).await?;
        info!("Authenticated as {} ({})", auth.user, auth.user_id);

        let session = match auth.team {
            Some(team) => Session::with_team(credential, team),
            None => Session::new(credential),
        };
        Ok((session, Identity::new(auth.user_id, auth.user)))
    }

    async fn list_channels(&self, session: &Session) -> Result<Vec<Channel>> {
        let mut channels = Vec::new();
        let mut cursor: Option<String> = None;

        for _ in 0..MAX_CHANNEL_PAGES {
            let mut query = vec![
                ("exclude_archived", "true".to_string()),
                ("types", "public_channel,private_channel".to_string()),
                ("limit", CHANNEL_PAGE_SIZE.to_string()),
            ];
            if let Some(cursor) = cursor.take() {
                query.push(("cursor", cursor));
            }

            let page: ConversationsListResponse = self
                .get(session.token(), "conversations.list", &query)
                .await?;
            cursor = page.next_cursor().map(str::to_string);
            channels.extend(
                page.channels
                    .into_iter()
                    .map(|conversation| Channel::new(conversation.id, conversation.name)),
            );

            if cursor.is_none() {
                break;
            }
        }

        debug!("Loaded {} channels", channels.len());
        Ok(channels)
    }

    async fn list_recent_messages(
        &self,
        session: &Session,
        channel_id: &str,
        limit: usize,
    ) -> Result<Vec<HistoryMessage>> {
        let query = [
            ("channel", channel_id.to_string()),
            ("limit", limit.to_string()),
        ];
        let history: HistoryResponse = self
            .get(session.token(), "conversations.history", &query)
            .await?;

        Ok(history
            .messages
            .into_iter()
            .map(|item| HistoryMessage {
                user_id: item.user.filter(|user| !user.is_empty()),
                text: render_slack_text(&item.text),
                timestamp: parse_slack_timestamp(&item.ts),
            })
            .collect())
    }

    async fn resolve_display_name(&self, session: &Session, user_id: &str) -> Result<String> {
        let query = [("user", user_id.to_string())];
        let info: UserInfoResponse = self.get(session.token(), "users.info", &query).await?;
        Ok(info.user.name)
    }

    async fn set_presence(&self, session: &Session, presence: Presence) -> Result<()> {
        let _: Ack = self
            .post(
                session.token(),
                "users.setPresence",
                json!({ "presence": presence_flag(presence) }),
            )
            .await?;

        let (status_text, status_emoji) = status_profile(presence);
        let _: Ack = self
            .post(
                session.token(),
                "users.profile.set",
                json!({
                    "profile": {
                        "status_text": status_text,
                        "status_emoji": status_emoji,
                        "status_expiration": 0,
                    }
                }),
            )
            .await?;

        info!("Presence set to {}", presence);
        Ok(())
    }

    async fn post_message(
        &self,
        session: &Session,
        channel_id: &str,
        text: &str,
    ) -> Result<MessageReceipt> {
        let posted: PostMessageResponse = self
            .post(
                session.token(),
                "chat.postMessage",
                json!({ "channel": channel_id, "text": text, "as_user": true }),
            )
            .await?;

        info!("Posted message to {} at {}", posted.channel, posted.ts);
        Ok(MessageReceipt {
            channel_id: posted.channel,
            timestamp: posted.ts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let gateway = SlackGateway::new("https://slack.com/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            gateway.endpoint("auth.test"),
            "https://slack.com/api/auth.test"
        );
        assert_eq!(
            gateway.endpoint("/chat.postMessage"),
            "https://slack.com/api/chat.postMessage"
        );
    }

    #[test]
    fn test_invalid_api_url_is_config_error() {
        let err = SlackGateway::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        // Port 9 (discard) on localhost is closed on test machines.
        let gateway = SlackGateway::new("http://127.0.0.1:9/api", Duration::from_secs(2)).unwrap();
        let err = gateway.authenticate("xoxb-test").await.unwrap_err();
        assert!(matches!(err, Error::Http { .. }));
    }
}

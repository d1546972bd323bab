//! Message fetch with author resolution

use std::collections::HashMap;

use slackdeck_core::prelude::*;
use slackdeck_core::{Channel, ChatMessage};
use slackdeck_gateway::{ChatGateway, Session};

use crate::handler::FetchPlan;

/// Author shown for bot messages and failed lookups
pub const UNKNOWN_USER: &str = "Unknown User";

/// Fetch and resolve the messages described by `plan`.
///
/// Each channel's history arrives newest first and is reversed, so messages
/// are oldest first within a channel. Channels are concatenated in plan order
/// without a global sort. Any failed history call fails the whole fetch.
pub(super) async fn fetch_messages<G: ChatGateway + Sync>(
    gateway: &G,
    session: &Session,
    plan: &FetchPlan,
) -> Result<Vec<ChatMessage>> {
    let mut authors = AuthorCache::default();
    let mut messages = Vec::new();

    match plan {
        FetchPlan::Channel { channel, limit } => {
            collect_channel(gateway, session, channel, *limit, &mut authors, &mut messages).await?;
        }
        FetchPlan::Aggregate {
            channels,
            per_channel,
        } => {
            for channel in channels {
                collect_channel(
                    gateway,
                    session,
                    channel,
                    *per_channel,
                    &mut authors,
                    &mut messages,
                )
                .await?;
            }
        }
    }

    Ok(messages)
}

async fn collect_channel<G: ChatGateway + Sync>(
    gateway: &G,
    session: &Session,
    channel: &Channel,
    limit: usize,
    authors: &mut AuthorCache,
    out: &mut Vec<ChatMessage>,
) -> Result<()> {
    let history = gateway
        .list_recent_messages(session, &channel.id, limit)
        .await?;
    debug!("#{}: {} messages", channel.name, history.len());

    for entry in history.into_iter().rev() {
        let author = match entry.user_id.as_deref() {
            Some(user_id) => authors.resolve(gateway, session, user_id).await,
            None => UNKNOWN_USER.to_string(),
        };
        out.push(ChatMessage {
            author,
            text: entry.text,
            channel_name: channel.name.clone(),
            timestamp: entry.timestamp,
        });
    }
    Ok(())
}

/// Display names looked up during one fetch
#[derive(Default)]
struct AuthorCache {
    names: HashMap<String, String>,
}

impl AuthorCache {
    async fn resolve<G: ChatGateway + Sync>(
        &mut self,
        gateway: &G,
        session: &Session,
        user_id: &str,
    ) -> String {
        if let Some(name) = self.names.get(user_id) {
            return name.clone();
        }
        let name = match gateway.resolve_display_name(session, user_id).await {
            Ok(name) => name,
            Err(e) => {
                debug!("Could not resolve user {}: {}", user_id, e);
                UNKNOWN_USER.to_string()
            }
        };
        self.names.insert(user_id.to_string(), name.clone());
        name
    }
}

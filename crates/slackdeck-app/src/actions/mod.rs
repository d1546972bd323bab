//! Action handlers: UpdateAction dispatch and background task spawning

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::Credential;
use crate::handler::Task;
use crate::message::Message;
use crate::UpdateAction;
use slackdeck_core::prelude::*;
use slackdeck_gateway::{ChatGateway, Session};

mod fetch;

pub use fetch::UNKNOWN_USER;

/// Execute an action by spawning a background task
///
/// `session` is `None` until authentication succeeds; tasks other than
/// `Authenticate` then fail with "Chat client not initialized".
pub fn handle_action<G>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    gateway: Arc<G>,
    session: Option<Session>,
    task_timeout: Duration,
) where
    G: ChatGateway + Sync + 'static,
{
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, msg_tx, gateway, session, task_timeout).await;
            });
        }
    }
}

/// Run one task to completion and send its single result message
pub async fn execute_task<G>(
    task: Task,
    msg_tx: mpsc::Sender<Message>,
    gateway: Arc<G>,
    session: Option<Session>,
    task_timeout: Duration,
) where
    G: ChatGateway + Sync,
{
    debug!("Executing task: {:?}", task);

    let msg = match run_task(&task, gateway.as_ref(), session.as_ref(), task_timeout).await {
        Ok(msg) => msg,
        Err(e) => {
            if e.is_recoverable() {
                warn!("Task {:?} failed: {}", task, e);
            } else {
                error!("Task {:?} failed: {}", task, e);
            }
            failure_message(&task, e.to_string())
        }
    };

    if msg_tx.send(msg).await.is_err() {
        debug!("Message channel closed, dropping task result");
    }
}

async fn run_task<G: ChatGateway + Sync>(
    task: &Task,
    gateway: &G,
    session: Option<&Session>,
    limit: Duration,
) -> Result<Message> {
    match task {
        Task::Authenticate { credential } => {
            with_timeout(limit, authenticate(gateway, credential)).await
        }
        Task::FetchMessages { plan } => {
            let session = session.ok_or(Error::NotInitialized)?;
            let messages = with_timeout(limit, fetch::fetch_messages(gateway, session, plan)).await?;
            Ok(Message::MessagesFetched { messages })
        }
        Task::RefreshMessages { plan } => {
            let session = session.ok_or(Error::NotInitialized)?;
            let messages = with_timeout(limit, fetch::fetch_messages(gateway, session, plan)).await?;
            Ok(Message::MessagesRefreshed { messages })
        }
        Task::SetPresence { presence } => {
            let session = session.ok_or(Error::NotInitialized)?;
            with_timeout(limit, gateway.set_presence(session, *presence)).await?;
            Ok(Message::PresenceUpdated {
                presence: *presence,
            })
        }
        Task::PostMessage { channel_id, text } => {
            let session = session.ok_or(Error::NotInitialized)?;
            let receipt = with_timeout(limit, gateway.post_message(session, channel_id, text)).await?;
            Ok(Message::MessagePosted { receipt })
        }
    }
}

/// Authenticate, then load the channel list with the new session
async fn authenticate<G: ChatGateway + Sync>(gateway: &G, credential: &Credential) -> Result<Message> {
    let (session, identity) = gateway.authenticate(credential.expose()).await?;
    let channels = gateway.list_channels(&session).await?;
    Ok(Message::Authenticated {
        session,
        identity,
        channels,
    })
}

async fn with_timeout<T>(limit: Duration, work: impl Future<Output = Result<T>>) -> Result<T> {
    match tokio::time::timeout(limit, work).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout {
            secs: limit.as_secs(),
        }),
    }
}

fn failure_message(task: &Task, error: String) -> Message {
    match task {
        Task::Authenticate { .. } => Message::AuthenticateFailed { error },
        Task::FetchMessages { .. } => Message::MessagesFetchFailed { error },
        Task::RefreshMessages { .. } => Message::MessagesRefreshFailed { error },
        Task::SetPresence { .. } => Message::PresenceUpdateFailed { error },
        Task::PostMessage { .. } => Message::MessagePostFailed { error },
    }
}

//! Message processing
//!
//! Runs the TEA update function and hands any resulting action to the task
//! runner, following up with chained messages until none remain.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use slackdeck_gateway::ChatGateway;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    gateway: &Arc<G>,
    task_timeout: Duration,
) where
    G: ChatGateway + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            // The session is read at dispatch time so a task chained from
            // `Authenticated` already sees the new session.
            handle_action(
                action,
                msg_tx.clone(),
                Arc::clone(gateway),
                state.session.clone(),
                task_timeout,
            );
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

//! OS signals that end the session

use std::fmt;
use std::future::Future;

use tokio::sync::mpsc;

use crate::message::Message;
use slackdeck_core::prelude::*;

/// Signal that asked the client to shut down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    /// The controlling terminal went away
    Hangup,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
            ShutdownSignal::Hangup => "SIGHUP",
        };
        f.write_str(name)
    }
}

/// Listen for OS signals and turn the first one into `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_shutdown(wait_for_signal(), tx));
}

/// Send `Message::Quit` once `signal` resolves. A listener that could not be
/// installed sends nothing; keyboard quit still works.
async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<ShutdownSignal>>,
{
    match signal.await {
        Ok(received) => {
            info!("Received {}, shutting down", received);
            if tx.send(Message::Quit).await.is_err() {
                debug!("Engine gone before {} could be delivered", received);
            }
        }
        Err(e) => error!("Signal handler error: {}", e),
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: ShutdownSignal| {
        signal(kind).map_err(|e| Error::terminal(format!("Failed to listen for {name}: {e}")))
    };
    let mut sigint = listen(SignalKind::interrupt(), ShutdownSignal::Interrupt)?;
    let mut sigterm = listen(SignalKind::terminate(), ShutdownSignal::Terminate)?;
    let mut sighup = listen(SignalKind::hangup(), ShutdownSignal::Hangup)?;

    Ok(tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
        _ = sighup.recv() => ShutdownSignal::Hangup,
    })
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {e}")))?;
    Ok(ShutdownSignal::Interrupt)
}

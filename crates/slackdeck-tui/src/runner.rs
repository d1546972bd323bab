//! Main TUI runner - entry point and event loop

use ratatui::DefaultTerminal;

use slackdeck_app::message::Message;
use slackdeck_app::{ChatGateway, Engine};
use slackdeck_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Owns terminal setup and teardown; the engine owns state and tasks.
pub async fn run<G>(mut engine: Engine<G>) -> Result<()>
where
    G: ChatGateway + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = terminal::init().context("initializing terminal")?;

    // Layout is unknown until the first resize; seed it from the terminal
    match term.size() {
        Ok(size) => engine.process_message(Message::Resize {
            width: size.width,
            height: size.height,
        }),
        Err(e) => warn!("Failed to read terminal size: {}", e),
    }

    engine.start();

    let result = run_loop(&mut term, &mut engine);

    terminal::restore();
    info!("Slack Deck exiting");

    result
}

/// Main event loop
fn run_loop<G>(terminal: &mut DefaultTerminal, engine: &mut Engine<G>) -> Result<()>
where
    G: ChatGateway + Sync + 'static,
{
    let tick_rate = engine.tick_rate();

    while !engine.should_quit() {
        // Task results and signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("drawing frame")?;

        if let Some(message) = event::poll(tick_rate).context("polling terminal events")? {
            engine.process_message(message);
        }
    }

    Ok(())
}

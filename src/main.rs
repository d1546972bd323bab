//! Slack Deck - a keyboard-driven Slack client for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use slackdeck_app::config::{default_config_path, load_settings, read_credential};
use slackdeck_app::Engine;
use slackdeck_core::prelude::*;
use slackdeck_gateway::SlackGateway;

/// Slack Deck - browse recent messages, set your status and send quick replies
#[derive(Parser, Debug)]
#[command(name = "slackdeck")]
#[command(about = "A keyboard-driven terminal client for Slack", long_about = None)]
struct Args {
    /// Path to config.toml (default: <config dir>/slackdeck/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Channel name or ID to open after login
    #[arg(long, value_name = "NAME|ID")]
    channel: Option<String>,

    /// Environment variable holding the Slack token
    #[arg(long, value_name = "VAR")]
    token_env: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    if let Err(e) = slackdeck_core::logging::init() {
        eprintln!("slackdeck: logging disabled: {e}");
    }

    let config_path = args.config.or_else(default_config_path);
    let mut settings = load_settings(config_path.as_deref());
    if let Some(channel) = args.channel {
        settings.messages.default_channel = Some(channel);
    }
    if let Some(token_env) = args.token_env {
        settings.auth.token_env = token_env;
    }
    info!(
        "Settings: api_url={}, timeout={}s",
        settings.network.api_url, settings.network.request_timeout_secs
    );

    // A missing credential is reported in the UI, not here
    let credential = read_credential(&settings.auth.token_env);

    let gateway = SlackGateway::new(
        &settings.network.api_url,
        settings.network.request_timeout(),
    )
    .context("building HTTP client")?;

    let engine = Engine::new(settings, credential, gateway);
    let result = slackdeck_tui::run(engine).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if e.is_fatal() {
            eprintln!("slackdeck: {e}");
        }
    }

    result
}

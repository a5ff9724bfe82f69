//! Ring Timer - a work/rest countdown timer with a progress ring
//!
//! This is the main entry point for the ring-timer application.

use std::{io::IsTerminal, sync::Arc};
use tracing::{error, info};

use ring_timer::{
    config::Config,
    state::AppState,
    tasks::{input_task, timer_task},
    ui::{render_task, Output, Renderer, Ring},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the display
    tracing_subscriber::fmt()
        .with_env_filter(format!("ring_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let engine_config = config.engine_config()?;

    info!("Starting ring-timer v1.0.0");
    info!("Configuration: work={:?}, rest={:?}, tick={:?}, display={:?}",
          engine_config.work, engine_config.rest, engine_config.tick_interval, engine_config.display);

    let (state, engine, commands) = AppState::new(engine_config);
    let state = Arc::new(state);

    let output = if config.json {
        Output::Json
    } else {
        let colored = std::io::stdout().is_terminal();
        Output::Ring(Renderer::new(Ring::new(config.width), colored, &state.current_snapshot()))
    };

    tokio::spawn(render_task(Arc::clone(&state), output, tokio::io::stdout()));
    tokio::spawn(input_task(Arc::clone(&state), tokio::io::stdin()));

    info!("Controls:");
    info!("  Enter or p - play/pause");
    info!("  q          - quit");

    tokio::select! {
        _ = timer_task(Arc::clone(&state), engine, commands) => {
            info!("Timer stopped");
        }
        result = shutdown_signal() => {
            if let Err(e) = result {
                error!("Failed to install signal handler: {}", e);
                return Err(e.into());
            }
            info!("Shutdown signal received");
        }
    }

    if !config.json {
        println!();
    }

    let (last_action, last_action_time) = state.get_last_action();
    info!("Session ran for {}", state.get_uptime());
    if let (Some(action), Some(at)) = (last_action, last_action_time) {
        info!("Last action: {} at {}", action, at.to_rfc3339());
    }
    info!("Shutdown complete");

    // A pending stdin read would otherwise keep the runtime alive.
    std::process::exit(0)
}

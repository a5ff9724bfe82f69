//! Play/pause control read from a line-based input

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{error, info, warn};

use crate::state::{AppState, Command};

/// Background task that turns input lines into controller commands.
///
/// End of input is treated as a quit request.
pub async fn input_task<R>(state: Arc<AppState>, reader: R)
where
    R: AsyncRead + Unpin,
{
    info!("Starting input task");

    let mut lines = BufReader::new(reader).lines();

    loop {
        let command = match lines.next_line().await {
            Ok(Some(line)) => match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            },
            Ok(None) => {
                info!("Input closed");
                Command::Quit
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                Command::Quit
            }
        };

        if let Err(e) = state.send_command(command).await {
            error!("{}", e);
            break;
        }
        if command == Command::Quit {
            break;
        }
    }
}

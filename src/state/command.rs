//! Commands accepted from the play/pause control

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Inbound command from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play/pause
    Toggle,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown command: {0:?} (press Enter or 'p' to play/pause, 'q' to quit)")]
pub struct CommandParseError(pub String);

impl FromStr for Command {
    type Err = CommandParseError;

    /// An empty line counts as a press of the play/pause control
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Command::Toggle);
        }

        match s.trim().to_lowercase().as_str() {
            "p" | "toggle" | "play" | "pause" => Ok(Command::Toggle),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandParseError(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Toggle => f.write_str("toggle"),
            Command::Quit => f.write_str("quit"),
        }
    }
}

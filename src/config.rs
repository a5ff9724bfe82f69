//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::state::DisplayFormat;

/// Longest accepted work or rest interval
pub const MAX_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);
/// Longest accepted scheduler cadence
pub const MAX_TICK: Duration = Duration::from_secs(60);

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "ring-timer")]
#[command(about = "A work/rest countdown timer with a progress ring")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Work interval length in seconds
    #[arg(short, long, default_value = "25")]
    pub work: u64,

    /// Rest interval length in seconds
    #[arg(short, long, default_value = "10")]
    pub rest: u64,

    /// Scheduler cadence in milliseconds
    #[arg(long, default_value = "10")]
    pub tick_ms: u64,

    /// Countdown text format
    #[arg(long, value_enum, default_value_t = DisplayFormat::SecondsCentis)]
    pub display: DisplayFormat,

    /// Width of the progress ring in columns
    #[arg(long, default_value = "40")]
    pub width: usize,

    /// Print every snapshot as a JSON line instead of drawing the ring
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Validated engine settings
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        EngineConfig::new(
            Duration::from_secs(self.work),
            Duration::from_secs(self.rest),
            Duration::from_millis(self.tick_ms),
            self.display,
        )
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("work duration must be greater than zero")]
    ZeroWork,
    #[error("rest duration must be greater than zero")]
    ZeroRest,
    #[error("tick interval must be greater than zero")]
    ZeroTick,
    #[error("{name} must be at most {max:?}, got {got:?}")]
    TooLong {
        name: &'static str,
        max: Duration,
        got: Duration,
    },
}

/// Construction-time timer settings, fixed for the life of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub work: Duration,
    pub rest: Duration,
    pub tick_interval: Duration,
    pub display: DisplayFormat,
}

impl EngineConfig {
    pub fn new(
        work: Duration,
        rest: Duration,
        tick_interval: Duration,
        display: DisplayFormat,
    ) -> Result<Self, ConfigError> {
        if work.is_zero() {
            return Err(ConfigError::ZeroWork);
        }
        if rest.is_zero() {
            return Err(ConfigError::ZeroRest);
        }
        if tick_interval.is_zero() {
            return Err(ConfigError::ZeroTick);
        }

        for (name, got, max) in [
            ("work duration", work, MAX_INTERVAL),
            ("rest duration", rest, MAX_INTERVAL),
            ("tick interval", tick_interval, MAX_TICK),
        ] {
            if got > max {
                return Err(ConfigError::TooLong { name, max, got });
            }
        }

        Ok(Self {
            work,
            rest,
            tick_interval,
            display,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            work: Duration::from_secs(25),
            rest: Duration::from_secs(10),
            tick_interval: Duration::from_millis(10),
            display: DisplayFormat::SecondsCentis,
        }
    }
}

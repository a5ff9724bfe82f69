//! Ring Timer - a work/rest countdown timer with a progress ring
//!
//! The timer engine is a plain state machine; background tasks feed it ticks
//! and play/pause commands and draw the snapshots it returns.

pub mod config;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, EngineConfig};
pub use state::{AppState, Mode, Snapshot, TimerEngine};
pub use utils::signals::shutdown_signal;

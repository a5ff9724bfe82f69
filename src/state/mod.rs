//! State management module
//!
//! This module contains the timer engine, the snapshots it produces and the
//! shared application state the background tasks work against.

pub mod app_state;
pub mod command;
pub mod display;
pub mod mode;
pub mod snapshot;
pub mod timer_engine;

// Re-export main types
pub use app_state::AppState;
pub use command::{Command, CommandParseError};
pub use display::DisplayFormat;
pub use mode::{Accent, Mode};
pub use snapshot::Snapshot;
pub use timer_engine::{progress_fraction, TimerEngine};

//! Presentation module
//!
//! Consumes snapshots from the timer and draws them in the terminal.

pub mod render;
pub mod ring;

pub use render::{icon, render_task, Frame, Output, Renderer, SnapshotEvent};
pub use ring::Ring;

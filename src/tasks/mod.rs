//! Background tasks module
//!
//! This module contains the tasks that drive the timer: the controller loop
//! with its tick scheduler, and the input reader.

pub mod input;
pub mod scheduler;
pub mod timer_loop;

// Re-export main functions
pub use input::input_task;
pub use scheduler::Scheduler;
pub use timer_loop::timer_task;

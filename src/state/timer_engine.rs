//! Work/rest countdown state machine
//!
//! The engine has no clock of its own. Whoever owns it feeds `tick()` with
//! the time that has passed and starts or stops its scheduler based on the
//! returned snapshot.
//!
//! ```text
//! (Working, Paused) <-> (Working, Running) -> (Resting, Paused)
//! (Resting, Paused) <-> (Resting, Running) -> (Working, Paused)
//! ```

use std::time::Duration;

use tracing::debug;

use super::{DisplayFormat, Mode, Snapshot};
use crate::config::EngineConfig;

/// Timer engine for one work/rest cycle
#[derive(Debug, Clone)]
pub struct TimerEngine {
    mode: Mode,
    remaining: Duration,
    is_running: bool,
    work_duration: Duration,
    rest_duration: Duration,
    display: DisplayFormat,
}

impl TimerEngine {
    /// Create a paused engine at the start of a work interval
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            mode: Mode::Working,
            remaining: config.work,
            is_running: false,
            work_duration: config.work,
            rest_duration: config.rest,
            display: config.display,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Remaining time in fractional seconds
    pub fn remaining_seconds(&self) -> f64 {
        self.remaining.as_secs_f64()
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Full length of the given mode's interval
    pub fn duration_for(&self, mode: Mode) -> Duration {
        match mode {
            Mode::Working => self.work_duration,
            Mode::Resting => self.rest_duration,
        }
    }

    /// Elapsed share of the current interval
    pub fn progress(&self) -> f64 {
        progress_fraction(self.remaining, self.duration_for(self.mode))
    }

    pub fn display(&self) -> String {
        self.display.format(self.remaining)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display(),
            progress: self.progress(),
            mode: self.mode,
            is_running: self.is_running,
            completed: None,
        }
    }

    /// Flip between running and paused
    pub fn toggle_running(&mut self) -> Snapshot {
        self.is_running = !self.is_running;
        self.snapshot()
    }

    /// Advance the countdown by `delta`.
    ///
    /// Ignored while paused. When the countdown reaches zero the engine moves
    /// to the other mode and pauses itself. The snapshot of that tick carries
    /// the new mode and label, a full ring (`progress == 1.0`) and the
    /// finished mode in `completed`; later snapshots start again from 0.
    pub fn tick(&mut self, delta: Duration) -> Snapshot {
        if !self.is_running || delta.is_zero() {
            return self.snapshot();
        }

        self.remaining = self.remaining.saturating_sub(delta);
        if !self.remaining.is_zero() {
            return self.snapshot();
        }

        let finished = self.mode;
        self.switch_mode();
        Snapshot {
            progress: 1.0,
            completed: Some(finished),
            ..self.snapshot()
        }
    }

    fn switch_mode(&mut self) {
        self.mode = self.mode.next();
        self.remaining = self.duration_for(self.mode);
        self.is_running = false;
        debug!("Switched to {} with {:?} remaining", self.mode, self.remaining);
    }
}

/// `1 - remaining / total`, clamped to `[0, 1]`
pub fn progress_fraction(remaining: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 1.0;
    }
    (1.0 - remaining.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
}

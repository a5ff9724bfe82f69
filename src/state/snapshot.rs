//! Externally observable timer state

use serde::{Deserialize, Serialize};

use super::Mode;

/// Snapshot returned after every state-changing engine operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Remaining time, formatted for the countdown label
    pub display: String,
    /// Elapsed share of the current interval, in `[0, 1]`; 1 on the tick that
    /// ends an interval
    pub progress: f64,
    pub mode: Mode,
    pub is_running: bool,
    /// Mode whose interval ran out on the tick that produced this snapshot.
    /// Its ring reached 1.0 before the switch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<Mode>,
}

impl Snapshot {
    /// Whether this snapshot marks an interval boundary
    pub fn switched(&self) -> bool {
        self.completed.is_some()
    }
}

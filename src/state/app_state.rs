//! Main application state shared by the background tasks

use std::{
    sync::Mutex,
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use super::{Command, Snapshot, TimerEngine};
use crate::config::EngineConfig;

/// Command queue depth; the input task never gets far ahead of the controller
const COMMAND_BUFFER: usize = 16;

/// Channels and metadata shared between the controller, input and renderer
#[derive(Debug)]
pub struct AppState {
    /// Engine settings, fixed at startup
    pub config: EngineConfig,
    pub start_time: Instant,
    /// Last command tracking
    pub last_action: Mutex<Option<Command>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Commands for the controller task
    pub command_tx: mpsc::Sender<Command>,
    /// Latest snapshot for the presentation layer
    pub snapshot_tx: watch::Sender<Snapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<Snapshot>,
}

impl AppState {
    /// Create the shared state and the engine the controller will own.
    ///
    /// The returned receiver must be handed to the controller task.
    pub fn new(config: EngineConfig) -> (Self, TimerEngine, mpsc::Receiver<Command>) {
        let engine = TimerEngine::new(&config);
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());

        let state = Self {
            config,
            start_time: Instant::now(),
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            command_tx,
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        };
        (state, engine, command_rx)
    }

    /// Queue a command for the controller
    pub async fn send_command(&self, command: Command) -> Result<(), String> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| format!("Failed to send command: {}", e))
    }

    /// Remember the last command the controller applied
    pub fn record_action(&self, command: Command) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(command);
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Publish a new snapshot to the presentation layer
    pub fn publish(&self, snapshot: Snapshot) {
        debug!("Publishing snapshot: {} {:.3}", snapshot.display, snapshot.progress);
        if let Err(e) = self.snapshot_tx.send(snapshot) {
            warn!("Failed to publish snapshot: {}", e);
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Most recently published snapshot
    pub fn current_snapshot(&self) -> Snapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Calculate session uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last command information
    pub fn get_last_action(&self) -> (Option<Command>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| *a);
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

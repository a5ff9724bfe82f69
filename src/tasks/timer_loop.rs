//! Timer controller background task

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::Scheduler;
use crate::state::{AppState, Command, TimerEngine};

/// Background task that owns the engine and serializes ticks and commands.
///
/// The tick scheduler runs only while the engine does: it is started on
/// resume and stopped on pause, at every interval boundary and on exit.
pub async fn timer_task(
    state: Arc<AppState>,
    mut engine: TimerEngine,
    mut commands: mpsc::Receiver<Command>,
) {
    let tick = state.config.tick_interval;
    let mut scheduler = Scheduler::new(tick);

    info!("Starting timer task, ticking every {:?} while running", scheduler.period());

    loop {
        tokio::select! {
            _ = scheduler.next() => {
                let snapshot = engine.tick(tick);

                if let Some(finished) = snapshot.completed {
                    info!("{} interval complete, {} ready at {}", finished, snapshot.mode, snapshot.display);
                }
                if !snapshot.is_running {
                    scheduler.stop();
                }

                state.publish(snapshot);
            }

            command = commands.recv() => {
                match command {
                    Some(Command::Toggle) => {
                        state.record_action(Command::Toggle);
                        let snapshot = engine.toggle_running();

                        if snapshot.is_running {
                            info!("Resumed {} at {}", snapshot.mode, snapshot.display);
                            scheduler.start();
                        } else {
                            info!("Paused {} with {:.2}s left", snapshot.mode, engine.remaining_seconds());
                            scheduler.stop();
                        }

                        state.publish(snapshot);
                    }
                    Some(Command::Quit) => {
                        state.record_action(Command::Quit);
                        info!("Quit requested, stopping timer task");
                        break;
                    }
                    None => {
                        debug!("Command channel closed, stopping timer task");
                        break;
                    }
                }
            }
        }
    }

    scheduler.stop();
}

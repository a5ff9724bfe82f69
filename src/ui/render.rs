//! Terminal presentation of timer snapshots

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use super::Ring;
use crate::state::{Accent, AppState, Mode, Snapshot};

const CLEAR_LINE: &str = "\r\x1b[2K";
const RESET: &str = "\x1b[0m";

/// Play/pause icon for the current running state
pub fn icon(is_running: bool) -> &'static str {
    if is_running { "⏸" } else { "▶" }
}

/// One drawn state of the ring and label
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub progress: f64,
    pub accent: Accent,
    pub display: String,
    pub is_running: bool,
    pub mode: Mode,
    /// Last frame of a finished interval; it stays on screen
    pub finished: bool,
}

/// Draws snapshots as a single updating line: ring, countdown, icon, mode
#[derive(Debug)]
pub struct Renderer {
    ring: Ring,
    colored: bool,
    mode: Mode,
    accent: Accent,
    /// Ring fill currently on screen
    progress: f64,
    /// Visible width of the current line, for padding in plain mode
    line_width: usize,
}

impl Renderer {
    pub fn new(ring: Ring, colored: bool, initial: &Snapshot) -> Self {
        Self {
            ring,
            colored,
            mode: initial.mode,
            accent: initial.mode.accent(),
            progress: initial.progress,
            line_width: 0,
        }
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Frames to draw for a snapshot.
    ///
    /// The ring moves forward one cell per frame from the fill on screen to
    /// the snapshot's. A finished interval ends on a full ring in its own
    /// accent; the accent changes only when the mode does.
    pub fn frames(&mut self, snapshot: &Snapshot) -> Vec<Frame> {
        let mut frames = Vec::new();

        if let Some(finished) = snapshot.completed {
            for progress in self.steps(snapshot.progress) {
                frames.push(Frame {
                    progress,
                    accent: finished.accent(),
                    display: snapshot.display.clone(),
                    is_running: true,
                    mode: finished,
                    finished: false,
                });
            }
            frames.push(Frame {
                progress: snapshot.progress,
                accent: finished.accent(),
                display: snapshot.display.clone(),
                is_running: false,
                mode: finished,
                finished: true,
            });
            self.progress = 0.0;
        }

        if snapshot.mode != self.mode {
            debug!("Recoloring ring for {}", snapshot.mode);
            self.mode = snapshot.mode;
            self.accent = snapshot.mode.accent();
        }

        let target = if snapshot.switched() { 0.0 } else { snapshot.progress };
        for progress in self.steps(target) {
            frames.push(Frame {
                progress,
                accent: self.accent,
                display: snapshot.display.clone(),
                is_running: snapshot.is_running,
                mode: snapshot.mode,
                finished: false,
            });
        }
        frames.push(Frame {
            progress: target,
            accent: self.accent,
            display: snapshot.display.clone(),
            is_running: snapshot.is_running,
            mode: snapshot.mode,
            finished: false,
        });
        self.progress = target;
        frames
    }

    /// Fills strictly between the one on screen and `target`, one per cell.
    /// Backward moves jump straight to the target.
    fn steps(&self, target: f64) -> Vec<f64> {
        let width = self.ring.width();
        let from = self.ring.filled_cells(self.progress);
        let to = self.ring.filled_cells(target);
        ((from + 1)..to).map(|cells| cells as f64 / width as f64).collect()
    }

    /// Text for one frame, without a trailing newline
    pub fn line(&self, frame: &Frame) -> String {
        let accent = self.colored.then_some(frame.accent);
        let ring = self.ring.draw(frame.progress, accent);

        if self.colored {
            format!(
                "{}{} {}{}{} {} {}",
                CLEAR_LINE,
                ring,
                frame.accent.ansi(),
                frame.display,
                RESET,
                icon(frame.is_running),
                frame.mode.label(),
            )
        } else {
            format!(
                "\r{} {} {} {}",
                ring,
                frame.display,
                icon(frame.is_running),
                frame.mode.label(),
            )
        }
    }

    /// Everything to write for a snapshot; finished intervals stay on screen
    pub fn render(&mut self, snapshot: &Snapshot) -> String {
        let frames = self.frames(snapshot);
        let mut out = String::new();

        for frame in &frames {
            let mut line = self.line(frame);

            // Plain mode cannot clear the line, so blank out leftovers.
            if !self.colored {
                let width = line.chars().count() - 1;
                if width < self.line_width {
                    line.extend(std::iter::repeat(' ').take(self.line_width - width));
                }
                self.line_width = width;
            }

            out.push_str(&line);
            if frame.finished {
                out.push('\n');
                self.line_width = 0;
            }
        }
        out
    }
}

/// Snapshot as written in JSON mode
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotEvent<'a> {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub snapshot: &'a Snapshot,
}

impl<'a> SnapshotEvent<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            timestamp: Utc::now(),
            snapshot,
        }
    }
}

/// Output style of the render task
#[derive(Debug)]
pub enum Output {
    Ring(Renderer),
    Json,
}

impl Output {
    fn render(&mut self, snapshot: &Snapshot) -> Result<String, serde_json::Error> {
        match self {
            Output::Ring(renderer) => Ok(renderer.render(snapshot)),
            Output::Json => {
                let mut line = serde_json::to_string(&SnapshotEvent::new(snapshot))?;
                line.push('\n');
                Ok(line)
            }
        }
    }
}

/// Background task that draws every published snapshot.
///
/// Ends when the snapshot channel closes or the writer fails.
pub async fn render_task<W>(state: Arc<AppState>, mut output: Output, mut writer: W)
where
    W: AsyncWrite + Unpin,
{
    info!("Starting render task");

    let mut snapshots = state.subscribe();
    let mut snapshot = snapshots.borrow_and_update().clone();

    loop {
        match output.render(&snapshot) {
            Ok(text) => {
                if let Err(e) = write_flush(&mut writer, text.as_bytes()).await {
                    error!("Failed to write display: {}", e);
                    break;
                }
            }
            Err(e) => error!("Failed to encode snapshot: {}", e),
        }

        if snapshots.changed().await.is_err() {
            debug!("Snapshot channel closed, stopping render task");
            break;
        }
        snapshot = snapshots.borrow_and_update().clone();
    }
}

async fn write_flush<W: AsyncWrite + Unpin>(writer: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    writer.write_all(bytes).await?;
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::{
        config::EngineConfig,
        state::{DisplayFormat, TimerEngine},
    };

    fn plain(initial: &Snapshot) -> Renderer {
        Renderer::new(Ring::new(10), false, initial)
    }

    #[test]
    fn draws_initial_state() {
        let engine = TimerEngine::new(&EngineConfig::default());
        let snap = engine.snapshot();
        let mut renderer = plain(&snap);
        assert_eq!(renderer.render(&snap), "\r░░░░░░░░░░ 25:00 ▶ WORK");
    }

    #[test]
    fn running_icon_and_progress() {
        let mut engine = TimerEngine::new(&EngineConfig::default());
        let initial = engine.snapshot();
        let mut renderer = plain(&initial);

        engine.toggle_running();
        let snap = engine.tick(Duration::from_millis(12_500));
        let out = renderer.render(&snap);
        assert!(out.ends_with("\r█████░░░░░ 12:50 ⏸ WORK"));
        assert!(!out.contains('\n'));
    }

    #[test]
    fn large_jump_animates_cell_by_cell() {
        let mut engine = TimerEngine::new(&EngineConfig::default());
        let mut renderer = plain(&engine.snapshot());

        engine.toggle_running();
        let snap = engine.tick(Duration::from_millis(12_500));
        let frames = renderer.frames(&snap);

        let fills: Vec<f64> = frames.iter().map(|f| f.progress).collect();
        assert_eq!(fills, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
        assert!(frames.iter().all(|f| f.accent == Accent::Work && !f.finished));
        assert_eq!(renderer.progress(), 0.5);

        // Within one cell there is nothing to interpolate.
        let snap = engine.tick(Duration::from_millis(10));
        assert_eq!(renderer.frames(&snap).len(), 1);
    }

    #[test]
    fn boundary_draws_full_ring_then_recolors() {
        let config = EngineConfig::new(
            Duration::from_secs(2),
            Duration::from_secs(1),
            Duration::from_millis(10),
            DisplayFormat::SecondsCentis,
        )
        .unwrap();
        let mut engine = TimerEngine::new(&config);
        let mut renderer = plain(&engine.snapshot());
        assert_eq!(renderer.accent(), Accent::Work);

        engine.toggle_running();
        engine.tick(Duration::from_millis(1_900));
        renderer.frames(&engine.snapshot());

        let snap = engine.tick(Duration::from_millis(100));
        assert_eq!(snap.progress, 1.0);
        let frames = renderer.frames(&snap);

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].progress, 1.0);
        assert_eq!(frames[0].accent, Accent::Work);
        assert!(frames[0].finished);
        assert_eq!(frames[1].progress, 0.0);
        assert_eq!(frames[1].accent, Accent::Rest);
        assert_eq!(frames[1].mode, Mode::Resting);
        assert_eq!(renderer.accent(), Accent::Rest);
        assert_eq!(renderer.progress(), 0.0);
    }

    #[test]
    fn finished_interval_stays_on_its_own_line() {
        let config = EngineConfig::new(
            Duration::from_secs(1),
            Duration::from_secs(1),
            Duration::from_millis(10),
            DisplayFormat::SecondsCentis,
        )
        .unwrap();
        let mut engine = TimerEngine::new(&config);
        let mut renderer = plain(&engine.snapshot());

        engine.toggle_running();
        let out = renderer.render(&engine.tick(Duration::from_secs(1)));
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("\r██████████ 01:00 ▶ WORK"));
        assert_eq!(lines[1], "\r░░░░░░░░░░ 01:00 ▶ REST");
    }

    #[test]
    fn plain_lines_blank_out_shorter_text() {
        let config = EngineConfig::new(
            Duration::from_secs(100),
            Duration::from_secs(10),
            Duration::from_millis(10),
            DisplayFormat::SecondsCentis,
        )
        .unwrap();
        let mut engine = TimerEngine::new(&config);
        let mut renderer = plain(&engine.snapshot());
        assert_eq!(renderer.render(&engine.snapshot()), "\r░░░░░░░░░░ 100:00 ▶ WORK");

        engine.toggle_running();
        let out = renderer.render(&engine.tick(Duration::from_millis(10)));
        assert_eq!(out, "\r░░░░░░░░░░ 99:99 ⏸ WORK ");
    }

    #[test]
    fn accent_is_stable_within_a_mode() {
        let mut engine = TimerEngine::new(&EngineConfig::default());
        let mut renderer = Renderer::new(Ring::new(10), true, &engine.snapshot());
        engine.toggle_running();

        for _ in 0..10 {
            let snap = engine.tick(Duration::from_millis(10));
            let frames = renderer.frames(&snap);
            assert_eq!(frames.len(), 1);
            assert_eq!(frames[0].accent, Accent::Work);
        }
        let frames = renderer.frames(&engine.snapshot());
        let line = renderer.line(&frames[0]);
        assert!(line.starts_with(CLEAR_LINE));
        assert!(line.contains(Accent::Work.ansi()));
    }

    #[test]
    fn json_event_flattens_snapshot() {
        let snap = TimerEngine::new(&EngineConfig::default()).snapshot();
        let value = serde_json::to_value(SnapshotEvent::new(&snap)).unwrap();

        assert_eq!(value["display"], "25:00");
        assert_eq!(value["mode"], "working");
        assert_eq!(value["is_running"], false);
        assert_eq!(value["progress"], 0.0);
        assert!(value.get("completed").is_none());
        assert!(value["timestamp"].is_string());
    }

    #[tokio::test]
    async fn render_task_writes_initial_snapshot() {
        let (state, _engine, _rx) = AppState::new(EngineConfig::default());
        let state = Arc::new(state);
        let (client, mut server) = tokio::io::duplex(1024);

        let task = tokio::spawn(render_task(Arc::clone(&state), Output::Json, client));

        let mut buf = vec![0u8; 1024];
        let n = tokio::io::AsyncReadExt::read(&mut server, &mut buf).await.unwrap();
        let line = String::from_utf8_lossy(&buf[..n]);
        assert!(line.contains("\"display\":\"25:00\""));
        assert!(line.ends_with('\n'));

        task.abort();
    }
}

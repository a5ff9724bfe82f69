//! Text rendition of the circular progress ring

use crate::state::Accent;

const FILLED: char = '█';
const TRACK: char = '░';
const TRACK_COLOR: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Progress ring drawn as a bar of `width` cells over a grey track
#[derive(Debug, Clone, Copy)]
pub struct Ring {
    width: usize,
}

impl Ring {
    pub fn new(width: usize) -> Self {
        Self { width: width.max(1) }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cells covered at `progress`; only a complete interval fills the ring
    pub fn filled_cells(&self, progress: f64) -> usize {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        ((progress * self.width as f64).floor() as usize).min(self.width)
    }

    /// Draw the ring; `accent` is `None` when colors are disabled
    pub fn draw(&self, progress: f64, accent: Option<Accent>) -> String {
        let filled = self.filled_cells(progress);
        let fill: String = std::iter::repeat(FILLED).take(filled).collect();
        let track: String = std::iter::repeat(TRACK).take(self.width - filled).collect();

        match accent {
            Some(accent) => format!("{}{}{}{}{}", accent.ansi(), fill, TRACK_COLOR, track, RESET),
            None => format!("{}{}", fill, track),
        }
    }
}

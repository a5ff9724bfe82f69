//! Interval modes and their accent colors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two intervals is currently counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Working,
    Resting,
}

impl Mode {
    /// The mode that follows this one once its interval runs out
    pub fn next(self) -> Self {
        match self {
            Mode::Working => Mode::Resting,
            Mode::Resting => Mode::Working,
        }
    }

    /// Accent the presentation layer paints the ring and icon with
    pub fn accent(self) -> Accent {
        match self {
            Mode::Working => Accent::Work,
            Mode::Resting => Accent::Rest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Working => "WORK",
            Mode::Resting => "REST",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Working => f.write_str("working"),
            Mode::Resting => f.write_str("resting"),
        }
    }
}

/// Color signal derived from the mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Red
    Work,
    /// Green
    Rest,
}

impl Accent {
    /// ANSI SGR foreground sequence for this accent
    pub fn ansi(self) -> &'static str {
        match self {
            Accent::Work => "\x1b[31m",
            Accent::Rest => "\x1b[32m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_alternates() {
        assert_eq!(Mode::Working.next(), Mode::Resting);
        assert_eq!(Mode::Resting.next(), Mode::Working);
    }

    #[test]
    fn accents_follow_mode() {
        assert_eq!(Mode::Working.accent(), Accent::Work);
        assert_eq!(Mode::Resting.accent(), Accent::Rest);
        assert_ne!(Accent::Work.ansi(), Accent::Rest.ansi());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Resting).unwrap(), "\"resting\"");
    }
}

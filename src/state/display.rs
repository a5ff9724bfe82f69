//! Countdown text formatting

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the remaining time is rendered as text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFormat {
    /// `SS:CC`, whole seconds then truncated hundredths
    #[default]
    SecondsCentis,
    /// `MM:SS`, whole minutes then whole seconds
    MinutesSeconds,
}

impl DisplayFormat {
    /// Format a remaining time. Both fields are truncated, never rounded.
    pub fn format(self, remaining: Duration) -> String {
        match self {
            DisplayFormat::SecondsCentis => {
                let seconds = remaining.as_secs();
                let centis = remaining.subsec_nanos() / 10_000_000;
                format!("{:02}:{:02}", seconds, centis)
            }
            DisplayFormat::MinutesSeconds => {
                let total = remaining.as_secs();
                format!("{:02}:{:02}", total / 60, total % 60)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centis_truncate() {
        let f = DisplayFormat::SecondsCentis;
        assert_eq!(f.format(Duration::from_secs_f64(7.345)), "07:34");
        assert_eq!(f.format(Duration::from_millis(7_999)), "07:99");
        assert_eq!(f.format(Duration::from_secs(25)), "25:00");
        assert_eq!(f.format(Duration::ZERO), "00:00");
    }

    #[test]
    fn minutes_seconds() {
        let f = DisplayFormat::MinutesSeconds;
        assert_eq!(f.format(Duration::from_secs(25)), "00:25");
        assert_eq!(f.format(Duration::from_millis(1_500_900)), "25:00");
        assert_eq!(f.format(Duration::from_secs(61)), "01:01");
    }
}

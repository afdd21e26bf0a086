// src/analysis/clock.rs

use std::fmt;
use std::time::Duration;

/// Distribution starts at 07:00.
pub const START_OF_DAY: Duration = Duration::from_secs(7 * 60 * 60);

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Time of day at which a run of a given length, started at [`START_OF_DAY`], ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompletionClock {
    since_midnight: Duration,
}

impl CompletionClock {
    /// Converts the mean to minutes and back at microsecond precision.
    /// Negative or non-finite means count as zero.
    pub fn from_mean_seconds(mean_seconds: f64) -> Self {
        let minutes = mean_seconds / 60.0;
        let micros = (minutes * 60.0 * 1_000_000.0).round().max(0.0);
        Self {
            since_midnight: START_OF_DAY + Duration::from_micros(micros as u64),
        }
    }

    pub fn since_midnight(&self) -> Duration {
        self.since_midnight
    }

    /// Whole days past the start day's midnight.
    pub fn days(&self) -> u64 {
        self.since_midnight.as_secs() / SECS_PER_DAY
    }

    pub fn hour(&self) -> u64 {
        self.since_midnight.as_secs() % SECS_PER_DAY / 3600
    }

    pub fn minute(&self) -> u64 {
        self.since_midnight.as_secs() % 3600 / 60
    }

    /// The first five characters of the `H:MM:SS[.ffffff]` elapsed-time text.
    ///
    /// This is the label the distribution dashboard shows: `"10:07"` for
    /// two-digit hours, `"8:15:"` for single-digit ones, and `"1 day"` once
    /// the run passes midnight.
    pub fn short_label(&self) -> String {
        self.elapsed_text().chars().take(5).collect()
    }

    fn elapsed_text(&self) -> String {
        let secs = self.since_midnight.as_secs();
        let mut text = String::new();

        let days = secs / SECS_PER_DAY;
        if days > 0 {
            let plural = if days == 1 { "" } else { "s" };
            text.push_str(&format!("{} day{}, ", days, plural));
        }

        text.push_str(&format!(
            "{}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            secs % 60
        ));

        let micros = self.since_midnight.subsec_micros();
        if micros != 0 {
            text.push_str(&format!(".{:06}", micros));
        }
        text
    }
}

impl fmt::Display for CompletionClock {
    /// `HH:MM`, truncated to the minute, with `+Nd` once past midnight.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;
        match self.days() {
            0 => Ok(()),
            days => write!(f, "+{}d", days),
        }
    }
}

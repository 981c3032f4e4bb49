//! Run Record - one logged session on a track

use serde::{Deserialize, Serialize};

use super::duration::{elapsed_hours, parse_clock};
use crate::{Error, Result};

/// Run Record represents a single timed session from the run log.
///
/// Times are `HH:MM` strings on the day given by `date`. The date is an
/// opaque display label and is never parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunRecord {
    date: String,
    #[serde(rename = "start")]
    start_time: String,
    #[serde(rename = "end")]
    end_time: String,
    power_start: f64,
    power_end: f64,
}

impl RunRecord {
    /// Create a new run record.
    ///
    /// # Arguments
    ///
    /// * `date` - Display label of the day the run took place
    /// * `start_time` - Start clock time (`HH:MM`)
    /// * `end_time` - End clock time (`HH:MM`)
    /// * `power_start` - Power reading at the start of the run (W)
    /// * `power_end` - Power reading at the end of the run (W)
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        power_start: f64,
        power_end: f64,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            power_start,
            power_end,
        }
    }

    /// Get the date label.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Get the start clock time as logged.
    #[must_use]
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Get the end clock time as logged.
    #[must_use]
    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    /// Get the starting power reading.
    #[must_use]
    pub const fn power_start(&self) -> f64 {
        self.power_start
    }

    /// Get the ending power reading.
    #[must_use]
    pub const fn power_end(&self) -> f64 {
        self.power_end
    }

    /// Time range label, e.g. `"11:00 - 16:00"`.
    #[must_use]
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    /// Elapsed hours of this run, rounded to two decimals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] naming this record's date when either
    /// clock time is not a valid `HH:MM` value.
    pub fn hours(&self) -> Result<f64> {
        let start = self.clock(&self.start_time)?;
        let end = self.clock(&self.end_time)?;
        Ok(elapsed_hours(start, end))
    }

    fn clock(&self, value: &str) -> Result<chrono::NaiveTime> {
        parse_clock(value).ok_or_else(|| Error::Format {
            date: self.date.clone(),
            value: value.to_string(),
        })
    }
}

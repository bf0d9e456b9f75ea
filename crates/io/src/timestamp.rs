//! Calendar labelling of hourly sample indices.
//!
//! The numerical core works purely on sample indices; calendar time only
//! exists to label output rows. A [`TimeIndex`] maps index `i` to
//! `start + i hours`.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

use crate::error::IoError;

/// Maps hourly sample indices to calendar timestamps.
#[derive(Clone, Copy, Debug)]
pub struct TimeIndex {
    start: NaiveDateTime,
}

impl TimeIndex {
    /// Creates a time index starting at the given datetime.
    pub fn new(start: NaiveDateTime) -> Self {
        Self { start }
    }

    /// Parses a start date, accepting `YYYY-MM-DD` (midnight) or
    /// `YYYY-MM-DD HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidStartDate`] for anything else.
    pub fn parse(value: &str) -> Result<Self, IoError> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
            return Ok(Self::new(dt));
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            let dt = date.and_hms_opt(0, 0, 0).expect("midnight is valid");
            return Ok(Self::new(dt));
        }
        Err(IoError::InvalidStartDate {
            value: value.to_string(),
        })
    }

    /// Returns the start datetime.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the timestamp of sample `hour`.
    pub fn at(&self, hour: usize) -> NaiveDateTime {
        self.start + Duration::hours(hour as i64)
    }

    /// Formats the timestamp of sample `hour` as `YYYY-MM-DD HH:MM`.
    pub fn label(&self, hour: usize) -> String {
        self.at(hour).format("%Y-%m-%d %H:%M").to_string()
    }

    /// Returns the 1-indexed calendar month of sample `hour`.
    pub fn month(&self, hour: usize) -> u8 {
        self.at(hour).month() as u8
    }

    /// Returns the calendar month of every sample in an `n`-hour record.
    pub fn months(&self, n: usize) -> Vec<u8> {
        (0..n).map(|hour| self.month(hour)).collect()
    }
}

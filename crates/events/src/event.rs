//! Surge event records.

use serde::Serialize;

/// Sign of a surge event relative to the series mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Water level above the predicted tide.
    Positive,
    /// Water level below the predicted tide.
    Negative,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
        }
    }
}

/// One detected surge event: a maximal gap-tolerant run of
/// threshold-exceeding samples.
///
/// Times are hourly sample indices into the analysed series; calendar
/// labelling is the caller's concern. A single isolated exceedance is a
/// legitimate event with `start_hour == end_hour` and zero duration.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SurgeEvent {
    /// Index of the first exceedance in the group.
    pub start_hour: usize,
    /// Index of the last exceedance in the group.
    pub end_hour: usize,
    /// Index of the sample with the largest absolute value.
    pub peak_hour: usize,
    /// `end_hour - start_hour`, in hours.
    pub duration_hours: f64,
    /// Value at the peak sample.
    pub peak_value: f64,
    /// Positive if the peak lies above the series mean.
    pub direction: Direction,
}

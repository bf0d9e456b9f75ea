//! Threshold-based surge event detection.

use tracing::{debug, info};

use crate::config::DetectorConfig;
use crate::error::EventError;
use crate::event::{Direction, SurgeEvent};

/// Result of one detection run: the events plus the scalar statistics the
/// threshold was derived from.
#[derive(Clone, Debug)]
pub struct Detection {
    events: Vec<SurgeEvent>,
    mean: f64,
    sd: f64,
    threshold: f64,
}

impl Detection {
    /// Returns the detected events, sorted by descending peak magnitude.
    pub fn events(&self) -> &[SurgeEvent] {
        &self.events
    }

    /// Returns the series mean the exceedance test centred on.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the population standard deviation of the series.
    pub fn sd(&self) -> f64 {
        self.sd
    }

    /// Returns the absolute threshold (multiplier × σ).
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the number of events with positive direction.
    pub fn n_positive(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.direction == Direction::Positive)
            .count()
    }

    /// Returns the number of events with negative direction.
    pub fn n_negative(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.direction == Direction::Negative)
            .count()
    }
}

/// Splits exceedance indices into gap-tolerant groups.
///
/// A new group starts whenever the spacing to the previous exceedance is
/// strictly greater than `max_gap_hours`; a gap of exactly the tolerance
/// stays in the same group.
pub(crate) fn group_exceedances(indices: &[usize], max_gap_hours: f64) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for &idx in indices {
        match groups.last_mut() {
            Some(group) => {
                let last = *group.last().expect("groups are never empty");
                if (idx - last) as f64 > max_gap_hours {
                    groups.push(vec![idx]);
                } else {
                    group.push(idx);
                }
            }
            None => groups.push(vec![idx]),
        }
    }
    groups
}

/// Builds the event record for one exceedance group.
pub(crate) fn build_event(values: &[f64], group: &[usize], mean: f64) -> SurgeEvent {
    let start = group[0];
    let end = *group.last().expect("group is never empty");
    let peak = group
        .iter()
        .copied()
        .max_by(|&a, &b| {
            values[a]
                .abs()
                .partial_cmp(&values[b].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("group is never empty");
    let peak_value = values[peak];

    SurgeEvent {
        start_hour: start,
        end_hour: end,
        peak_hour: peak,
        duration_hours: (end - start) as f64,
        peak_value,
        direction: if peak_value > mean {
            Direction::Positive
        } else {
            Direction::Negative
        },
    }
}

/// Detects surge events in a residual series.
///
/// Samples whose deviation from the series mean exceeds
/// `std_multiplier × σ` are grouped into events (gap tolerance
/// `max_gap_hours`); each event is characterised by its peak sample and
/// duration, groups shorter than `min_duration_hours` are dropped, and the
/// survivors are sorted by descending peak magnitude.
///
/// An empty event list is a valid outcome, not an error — a calm record
/// simply has no surges.
///
/// # Errors
///
/// Returns [`EventError::EmptyData`] for empty input or a config
/// validation error.
pub fn detect_events(values: &[f64], config: &DetectorConfig) -> Result<Detection, EventError> {
    config.validate()?;
    if values.is_empty() {
        return Err(EventError::EmptyData);
    }

    let mean = tethys_stats::mean(values);
    let sd = tethys_stats::sd(values);
    let threshold = config.std_multiplier() * sd;

    let exceedances: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| (v - mean).abs() > threshold)
        .map(|(i, _)| i)
        .collect();
    debug!(
        n = values.len(),
        n_exceedances = exceedances.len(),
        threshold,
        "threshold applied"
    );

    let mut events: Vec<SurgeEvent> = group_exceedances(&exceedances, config.max_gap_hours())
        .iter()
        .map(|group| build_event(values, group, mean))
        .filter(|event| event.duration_hours >= config.min_duration_hours())
        .collect();

    events.sort_by(|a, b| {
        b.peak_value
            .abs()
            .partial_cmp(&a.peak_value.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    info!(
        n_events = events.len(),
        std_multiplier = config.std_multiplier(),
        "surge event detection complete"
    );

    Ok(Detection {
        events,
        mean,
        sd,
        threshold,
    })
}

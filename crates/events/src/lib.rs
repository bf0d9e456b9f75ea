//! Tethys surge event detection: σ-threshold exceedance grouping and
//! threshold sensitivity analysis.
//!
//! A surge event is a maximal run of samples whose deviation from the
//! series mean exceeds a configurable multiple of the standard deviation,
//! tolerant of gaps up to three hours. Events are characterised by their
//! peak, direction and duration; the sweep module re-runs detection across
//! a matrix of thresholds and minimum durations to expose how sensitive
//! the event census is to those choices.

mod config;
mod detect;
mod error;
mod event;
mod sweep;

pub use config::DetectorConfig;
pub use detect::{Detection, detect_events};
pub use error::EventError;
pub use event::{Direction, SurgeEvent};
pub use sweep::{
    SweepCell, SweepConfig, ThresholdComparison, compare, split_by_direction, sweep,
};

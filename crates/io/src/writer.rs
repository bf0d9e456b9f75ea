//! CSV export of analysis results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use tethys_events::SurgeEvent;
use tethys_harmonic::FittedConstituent;
use tethys_surge::SurgeSeries;

use crate::error::IoError;
use crate::timestamp::TimeIndex;

/// Writes the fitted constituent table, ordered as given (the fit already
/// sorts by descending amplitude).
///
/// Columns: constituent, frequency in cycles/hour, period in hours,
/// amplitude, phase in degrees, and the raw cosine/sine coefficients.
pub fn write_constituents(path: &Path, table: &[FittedConstituent]) -> Result<(), IoError> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(
        w,
        "constituent,frequency_cph,period_hours,amplitude,phase_degrees,cosine_coef,sine_coef"
    )?;
    for c in table {
        writeln!(
            w,
            "{},{},{},{},{},{},{}",
            c.name,
            c.frequency,
            c.period_hours(),
            c.amplitude,
            c.phase_degrees,
            c.cosine_coef,
            c.sine_coef
        )?;
    }
    w.flush()?;
    info!(path = %path.display(), n = table.len(), "constituent table written");
    Ok(())
}

/// Writes the predicted tide with calendar labels.
///
/// Columns: timestamp, original, predicted. When the prediction
/// extrapolates past the observed record, the original field is left
/// empty for the extra rows.
pub fn write_tide_series(
    path: &Path,
    index: &TimeIndex,
    original: &[f64],
    predicted: &[f64],
) -> Result<(), IoError> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "timestamp,original,predicted")?;
    for (i, &pred) in predicted.iter().enumerate() {
        if let Some(&obs) = original.get(i) {
            writeln!(w, "{},{},{}", index.label(i), obs, pred)?;
        } else {
            writeln!(w, "{},,{}", index.label(i), pred)?;
        }
    }
    w.flush()?;
    info!(path = %path.display(), n = predicted.len(), "predicted tide written");
    Ok(())
}

/// Writes the surge series with calendar labels.
///
/// Columns: timestamp, original, predicted, residual, and filtered when a
/// filtered residual is attached.
pub fn write_surge_series(
    path: &Path,
    index: &TimeIndex,
    series: &SurgeSeries,
) -> Result<(), IoError> {
    let mut w = BufWriter::new(File::create(path)?);
    let has_filtered = series.filtered().is_some();
    if has_filtered {
        writeln!(w, "timestamp,original,predicted,residual,filtered")?;
    } else {
        writeln!(w, "timestamp,original,predicted,residual")?;
    }
    for i in 0..series.len() {
        if let Some(filtered) = series.filtered() {
            writeln!(
                w,
                "{},{},{},{},{}",
                index.label(i),
                series.original()[i],
                series.predicted()[i],
                series.residual()[i],
                filtered[i]
            )?;
        } else {
            writeln!(
                w,
                "{},{},{},{}",
                index.label(i),
                series.original()[i],
                series.predicted()[i],
                series.residual()[i]
            )?;
        }
    }
    w.flush()?;
    info!(path = %path.display(), n = series.len(), "surge series written");
    Ok(())
}

/// Writes the detected event table with calendar labels.
///
/// Events are ranked as given (detection sorts by peak magnitude);
/// `abs_max` is the historic maximum used for the percent-of-maximum
/// column, 0 disables it.
pub fn write_events(
    path: &Path,
    index: &TimeIndex,
    events: &[SurgeEvent],
    abs_max: f64,
) -> Result<(), IoError> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(
        w,
        "rank,direction,peak_value,pct_of_max,duration_hours,start,end,peak_time"
    )?;
    for (rank, event) in events.iter().enumerate() {
        let pct_of_max = if abs_max > 0.0 {
            event.peak_value.abs() / abs_max * 100.0
        } else {
            0.0
        };
        writeln!(
            w,
            "{},{},{},{:.1},{},{},{},{}",
            rank + 1,
            event.direction,
            event.peak_value,
            pct_of_max,
            event.duration_hours,
            index.label(event.start_hour),
            index.label(event.end_hour),
            index.label(event.peak_hour)
        )?;
    }
    w.flush()?;
    info!(path = %path.display(), n = events.len(), "event table written");
    Ok(())
}

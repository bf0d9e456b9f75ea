//! Analyze command: residual extraction, filtering, statistics and event
//! detection in one pass.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tethys_events::detect_events;
use tethys_filter::low_pass;
use tethys_io::{TimeIndex, load_fit, read_series, write_events, write_surge_series};
use tethys_surge::{compute_residual, monthly_stats, residual_stats};

use crate::cli::AnalyzeArgs;
use crate::config;
use crate::convert;
use crate::report;

/// Run the full surge analysis.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    let config = config::load(&args.config)?;

    let input = args
        .input
        .or(config.io.input)
        .context("no input path: set [io].input in config or use --input")?;
    let output_dir = config.io.output_dir;
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    // 1. Observed record and fitted model.
    let values = read_series(&input, config.io.has_header)
        .with_context(|| format!("failed to read record: {}", input.display()))?;
    let params_path = args
        .params
        .unwrap_or_else(|| output_dir.join("model_parameters.json"));
    let model = load_fit(&params_path).context("failed to load fit parameters")?;

    // 2. Predicted tide and residual.
    let predicted = model.predict(values.len());
    let surge = compute_residual(&values, &predicted).context("residual computation failed")?;
    let raw_stats = residual_stats(surge.residual())?;
    info!(
        mean = raw_stats.mean,
        sd = raw_stats.sd,
        abs_max = raw_stats.abs_max,
        "raw surge statistics"
    );

    // 3. Zero-phase low-pass filtering.
    let filter_config = convert::build_filter_config(&config.filter);
    let filtered = low_pass(surge.residual(), &filter_config).context("filtering failed")?;
    let surge = surge.with_filtered(filtered)?;
    let filtered_stats = residual_stats(surge.active_residual())?;
    info!(
        sd = filtered_stats.sd,
        "filtered surge statistics"
    );

    // 4. Event detection.
    let detector = convert::build_detector_config(&config.events);
    let (series_name, detection_input) = if args.raw {
        ("raw", surge.residual())
    } else {
        ("filtered", surge.active_residual())
    };
    let detection = detect_events(detection_input, &detector)
        .context("event detection failed")?;
    for event in detection.events().iter().take(5) {
        info!(
            peak_value = event.peak_value,
            duration_hours = event.duration_hours,
            direction = %event.direction,
            "significant surge event"
        );
    }

    // 5. Monthly summary of the analysed residual.
    let index = TimeIndex::parse(&config.io.start_date)?;
    let months = index.months(surge.len());
    let monthly = monthly_stats(detection_input, &months)?;

    // 6. Outputs.
    let surge_path = output_dir.join("storm_surge.csv");
    write_surge_series(&surge_path, &index, &surge)
        .with_context(|| format!("failed to write {}", surge_path.display()))?;

    let events_path = output_dir.join("surge_events.csv");
    let abs_max = if args.raw {
        raw_stats.abs_max
    } else {
        filtered_stats.abs_max
    };
    write_events(&events_path, &index, detection.events(), abs_max)
        .with_context(|| format!("failed to write {}", events_path.display()))?;

    let stats_report = report::StatsReport {
        fit_r_squared: model.r_squared(),
        raw: (&raw_stats).into(),
        filtered: Some((&filtered_stats).into()),
        monthly: monthly.iter().map(Into::into).collect(),
        detection: report::detection_summary(
            series_name,
            config.events.std_multiplier,
            &detection,
        ),
    };
    let stats_path = output_dir.join("surge_statistics.json");
    let json = serde_json::to_string_pretty(&stats_report)
        .context("failed to serialise statistics report")?;
    std::fs::write(&stats_path, json)
        .with_context(|| format!("failed to write {}", stats_path.display()))?;
    info!(path = %stats_path.display(), "statistics report written");

    Ok(())
}

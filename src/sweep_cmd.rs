//! Sweep command: threshold × duration sensitivity analysis.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tethys_events::{compare, sweep};
use tethys_filter::low_pass;
use tethys_io::{load_fit, read_series};
use tethys_surge::compute_residual;

use crate::cli::SweepArgs;
use crate::config;
use crate::convert;
use crate::report;

/// Run the threshold sensitivity sweep over raw and filtered residuals.
pub fn run(args: SweepArgs) -> Result<()> {
    let _cmd = info_span!("sweep").entered();
    let config = config::load(&args.config)?;

    let input = args
        .input
        .or(config.io.input)
        .context("no input path: set [io].input in config or use --input")?;
    let output_dir = config.io.output_dir;
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    let values = read_series(&input, config.io.has_header)
        .with_context(|| format!("failed to read record: {}", input.display()))?;
    let params_path = args
        .params
        .unwrap_or_else(|| output_dir.join("model_parameters.json"));
    let model = load_fit(&params_path).context("failed to load fit parameters")?;

    let predicted = model.predict(values.len());
    let surge = compute_residual(&values, &predicted).context("residual computation failed")?;
    let filter_config = convert::build_filter_config(&config.filter);
    let filtered = low_pass(surge.residual(), &filter_config).context("filtering failed")?;

    let sweep_config = convert::build_sweep_config(&config.sweep, &config.events);
    let raw_cells = sweep(surge.residual(), &sweep_config).context("raw sweep failed")?;
    let filtered_cells = sweep(&filtered, &sweep_config).context("filtered sweep failed")?;
    let comparison = compare(
        surge.residual(),
        &filtered,
        &sweep_config,
        config.sweep.comparison_min_duration,
    )
    .context("raw vs filtered comparison failed")?;

    for entry in &comparison {
        info!(
            std_multiplier = entry.std_multiplier,
            raw = entry.raw_count,
            filtered = entry.filtered_count,
            reduction_pct = entry.reduction_pct,
            "threshold comparison"
        );
    }

    let sweep_report = report::SweepReport {
        raw: raw_cells,
        filtered: filtered_cells,
        comparison_min_duration: config.sweep.comparison_min_duration,
        comparison,
    };
    let sweep_path = output_dir.join("threshold_sweep.json");
    let json = serde_json::to_string_pretty(&sweep_report)
        .context("failed to serialise sweep report")?;
    std::fs::write(&sweep_path, json)
        .with_context(|| format!("failed to write {}", sweep_path.display()))?;
    info!(path = %sweep_path.display(), "threshold sweep written");

    Ok(())
}

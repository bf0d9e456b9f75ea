//! Predict command: reconstruct the tide from saved fit parameters.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tethys_io::{TimeIndex, load_fit, read_series, write_tide_series};

use crate::cli::PredictArgs;
use crate::config;

/// Run the tide prediction stage against persisted parameters.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();
    let config = config::load(&args.config)?;

    let input = args
        .input
        .or(config.io.input)
        .context("no input path: set [io].input in config or use --input")?;
    let output_dir = config.io.output_dir;
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    let params_path = args
        .params
        .unwrap_or_else(|| output_dir.join("model_parameters.json"));
    let model = load_fit(&params_path).context("failed to load fit parameters")?;
    info!(
        n_constituents = model.n_constituents(),
        r_squared = model.r_squared(),
        "fit parameters loaded"
    );

    let values = read_series(&input, config.io.has_header)
        .with_context(|| format!("failed to read record: {}", input.display()))?;

    let n = args.length.unwrap_or(values.len());
    let predicted = model.predict(n);
    info!(n, "tidal signal reconstructed");

    let index = TimeIndex::parse(&config.io.start_date)?;
    let tide_path = output_dir.join("predicted_tide.csv");
    write_tide_series(&tide_path, &index, &values, &predicted)
        .with_context(|| format!("failed to write {}", tide_path.display()))?;

    Ok(())
}

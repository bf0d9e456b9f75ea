//! Fit command: determine tidal constituents from a sea level record.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tethys_io::{read_series, save_fit, write_constituents};

use crate::cli::FitArgs;
use crate::config;

/// Run the constituent fitting stage.
pub fn run(args: FitArgs) -> Result<()> {
    let _cmd = info_span!("fit").entered();
    let config = config::load(&args.config)?;

    let input = args
        .input
        .or(config.io.input)
        .context("no input path: set [io].input in config or use --input")?;
    let output_dir = args.output_dir.unwrap_or(config.io.output_dir);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    info!(path = %input.display(), "reading sea level record");
    let values = read_series(&input, config.io.has_header)
        .with_context(|| format!("failed to read record: {}", input.display()))?;

    let model = tethys_harmonic::fit(&values, tethys_constituents::standard())
        .context("harmonic fit failed")?;
    info!(r_squared = model.r_squared(), "model fitted");

    let table = model.constituents();
    for c in table.iter().take(5) {
        info!(
            constituent = c.name.as_str(),
            amplitude = c.amplitude,
            period_hours = c.period_hours(),
            phase_degrees = c.phase_degrees,
            "top constituent"
        );
    }

    let constituents_path = output_dir.join("tidal_constituents.csv");
    write_constituents(&constituents_path, &table)
        .with_context(|| format!("failed to write {}", constituents_path.display()))?;

    let params_path = output_dir.join("model_parameters.json");
    save_fit(&model, &params_path)
        .with_context(|| format!("failed to write {}", params_path.display()))?;

    Ok(())
}

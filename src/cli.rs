use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tethys tidal harmonic analysis and storm surge detection.
#[derive(Parser)]
#[command(
    name = "tethys",
    version,
    about = "Tidal harmonic analysis and storm surge detection"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fit tidal constituents to an hourly sea level record.
    Fit(FitArgs),
    /// Reconstruct the predicted tide from saved fit parameters.
    Predict(PredictArgs),
    /// Full surge analysis: residual, filtering, statistics, events.
    Analyze(AnalyzeArgs),
    /// Threshold sensitivity sweep over the surge residual.
    Sweep(SweepArgs),
}

/// Arguments for the `fit` subcommand.
#[derive(clap::Args)]
pub struct FitArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tethys.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tethys.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override fit parameter JSON path (defaults to the fit output).
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Predict this many hours instead of the input length.
    #[arg(short = 'n', long)]
    pub length: Option<usize>,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tethys.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override fit parameter JSON path (defaults to the fit output).
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Detect events on the raw residual instead of the filtered one.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `sweep` subcommand.
#[derive(clap::Args)]
pub struct SweepArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tethys.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override fit parameter JSON path (defaults to the fit output).
    #[arg(short, long)]
    pub params: Option<PathBuf>,
}

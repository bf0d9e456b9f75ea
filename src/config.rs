use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Loads and parses the project TOML configuration.
///
/// A missing file falls back to defaults only when the caller passed the
/// default path; an explicitly named file must exist.
pub fn load(path: &Path) -> Result<TethysConfig> {
    if !path.exists() && path == Path::new("tethys.toml") {
        return Ok(TethysConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&text).context("failed to parse TOML config")
}

/// Top-level Tethys configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TethysConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Low-pass filter settings.
    #[serde(default)]
    pub filter: FilterToml,

    /// Event detection settings.
    #[serde(default)]
    pub events: EventsToml,

    /// Threshold sweep settings.
    #[serde(default)]
    pub sweep: SweepToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub has_header: bool,
    #[serde(default = "default_start_date")]
    pub start_date: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: default_output_dir(),
            has_header: false,
            start_date: default_start_date(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("tethys_results")
}
fn default_start_date() -> String {
    "2022-01-01".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterToml {
    #[serde(default = "default_cutoff_period_hours")]
    pub cutoff_period_hours: f64,
    #[serde(default = "default_order")]
    pub order: usize,
}

impl Default for FilterToml {
    fn default() -> Self {
        Self {
            cutoff_period_hours: default_cutoff_period_hours(),
            order: default_order(),
        }
    }
}

fn default_cutoff_period_hours() -> f64 {
    12.0
}
fn default_order() -> usize {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventsToml {
    #[serde(default = "default_std_multiplier")]
    pub std_multiplier: f64,
    #[serde(default = "default_max_gap_hours")]
    pub max_gap_hours: f64,
    #[serde(default)]
    pub min_duration_hours: f64,
}

impl Default for EventsToml {
    fn default() -> Self {
        Self {
            std_multiplier: default_std_multiplier(),
            max_gap_hours: default_max_gap_hours(),
            min_duration_hours: 0.0,
        }
    }
}

fn default_std_multiplier() -> f64 {
    2.0
}
fn default_max_gap_hours() -> f64 {
    3.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepToml {
    #[serde(default = "default_multipliers")]
    pub multipliers: Vec<f64>,
    #[serde(default = "default_min_durations")]
    pub min_durations: Vec<f64>,
    #[serde(default = "default_comparison_min_duration")]
    pub comparison_min_duration: f64,
}

impl Default for SweepToml {
    fn default() -> Self {
        Self {
            multipliers: default_multipliers(),
            min_durations: default_min_durations(),
            comparison_min_duration: default_comparison_min_duration(),
        }
    }
}

fn default_multipliers() -> Vec<f64> {
    vec![1.0, 1.5, 2.0, 2.5, 3.0]
}
fn default_min_durations() -> Vec<f64> {
    vec![1.0, 3.0, 6.0]
}
fn default_comparison_min_duration() -> f64 {
    3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: TethysConfig = toml::from_str("").unwrap();
        assert_eq!(config.io.output_dir, PathBuf::from("tethys_results"));
        assert_eq!(config.io.start_date, "2022-01-01");
        assert!(!config.io.has_header);
        assert_eq!(config.filter.order, 3);
        assert_eq!(config.events.std_multiplier, 2.0);
        assert_eq!(config.sweep.multipliers.len(), 5);
    }

    #[test]
    fn partial_section_overrides() {
        let config: TethysConfig = toml::from_str(
            r#"
            [filter]
            cutoff_period_hours = 24.0

            [events]
            std_multiplier = 3.0
            "#,
        )
        .unwrap();
        assert_eq!(config.filter.cutoff_period_hours, 24.0);
        assert_eq!(config.filter.order, 3);
        assert_eq!(config.events.std_multiplier, 3.0);
        assert_eq!(config.events.max_gap_hours, 3.0);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<TethysConfig, _> = toml::from_str("[io]\nbogus = 1\n");
        assert!(result.is_err());
    }
}

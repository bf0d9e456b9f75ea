//! Integration tests: file round trips through the io adapters.

use std::f64::consts::PI;
use std::fs;

use approx::assert_relative_eq;

use tethys_constituents::by_name;
use tethys_harmonic::fit;
use tethys_io::{TimeIndex, load_fit, read_series, save_fit, write_surge_series};
use tethys_surge::compute_residual;

#[test]
fn read_series_parses_plain_column() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("ssh.csv");
    fs::write(&path, "1.5\n2.5\n3.5\n").unwrap();

    let values = read_series(&path, false).unwrap();
    assert_eq!(values, vec![1.5, 2.5, 3.5]);
}

#[test]
fn read_series_skips_header_and_coerces_bad_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("ssh.csv");
    fs::write(&path, "ssh\n1.0\nnot-a-number\n3.0\n").unwrap();

    let values = read_series(&path, true).unwrap();
    assert_eq!(values.len(), 3);
    // The bad row is interpolated between its neighbours.
    assert_relative_eq!(values[1], 2.0, epsilon = 1e-12);
}

#[test]
fn read_series_takes_first_field_of_multicolumn_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("ssh.csv");
    fs::write(&path, "1.0,ignored\n2.0,also ignored\n").unwrap();

    let values = read_series(&path, false).unwrap();
    assert_eq!(values, vec![1.0, 2.0]);
}

#[test]
fn read_series_empty_file_errors() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("ssh.csv");
    fs::write(&path, "").unwrap();
    assert!(read_series(&path, false).is_err());
}

#[test]
fn fit_persistence_round_trip_is_equivalent() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("model_parameters.json");

    let f = by_name("M2").unwrap().frequency();
    let values: Vec<f64> = (0..500)
        .map(|t| 3.0 * (2.0 * PI * f * t as f64).sin())
        .collect();
    let model = fit(&values, &[by_name("M2").unwrap()]).unwrap();

    save_fit(&model, &path).unwrap();
    let reloaded = load_fit(&path).unwrap();

    assert_eq!(model.coefficients(), reloaded.coefficients());
    assert_eq!(model.intercept(), reloaded.intercept());
    assert_eq!(model.frequencies(), reloaded.frequencies());
    assert_eq!(model.names(), reloaded.names());
    assert_eq!(model.predict(600), reloaded.predict(600));
}

#[test]
fn surge_series_csv_has_one_row_per_sample() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("surge.csv");

    let original = vec![1.0, 2.0, 3.0];
    let predicted = vec![0.5, 1.5, 2.5];
    let series = compute_residual(&original, &predicted).unwrap();
    let index = TimeIndex::parse("2022-01-01").unwrap();

    write_surge_series(&path, &index, &series).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "timestamp,original,predicted,residual");
    assert!(lines[1].starts_with("2022-01-01 00:00,"));
    assert!(lines[3].starts_with("2022-01-01 02:00,"));
    assert!(lines[1].ends_with("0.5"));
}

use std::fs;

use irs_cosmo::{ObservationPoint, ObservationSet};
use irs_sim::output::{
    load_observations_csv, write_csv, write_curve_csv, write_flrw_csv, write_json,
    write_spectrum_csv,
};
use irs_sim::pipeline::{
    run_coherence, run_flrw, run_galaxy_dimless, run_galaxy_physical, run_hz,
};
use irs_signal::WelchSpec;
use irs_sim::PipelineConfig;
use serde_json::Value;

#[test]
fn default_coherence_run_is_reproducible() {
    let config = PipelineConfig::default();
    let first = run_coherence(&config.coherence, config.seed, "2026-01-01").expect("run");
    let second = run_coherence(&config.coherence, config.seed, "2026-01-01").expect("run");
    assert_eq!(first, second);
    assert_eq!(first.metric.bins, 11);
    let value = first.artifact.value.expect("defined metric");
    assert!(value > 0.0 && value < 1.0, "value {value}");
    assert_eq!(first.artifact.fs, 1000.0);
    assert_eq!(first.artifact.duration_s, 5.0);
    assert_eq!(first.spectrum.len(), 501);
}

#[test]
fn artefact_records_the_configured_duration() {
    let mut config = PipelineConfig::default();
    config.coherence.synth.sample_rate = 100.0;
    config.coherence.synth.duration = 0.2555;
    config.coherence.welch = WelchSpec::with_nperseg(16);
    let outcome = run_coherence(&config.coherence, config.seed, "2026-01-01").expect("run");
    assert_eq!(config.coherence.synth.sample_count(), 25);
    assert_eq!(outcome.artifact.duration_s, 0.2555);
    assert_eq!(outcome.artifact.fs, 100.0);
}

#[test]
fn different_seeds_change_the_noise() {
    let config = PipelineConfig::default();
    let a = run_coherence(&config.coherence, 1, "2026-01-01").expect("run");
    let b = run_coherence(&config.coherence, 2, "2026-01-01").expect("run");
    assert_ne!(a.spectrum, b.spectrum);
}

#[test]
fn coherence_artefacts_are_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = PipelineConfig::default();
    let outcome = run_coherence(&config.coherence, config.seed, "2026-01-01").expect("run");

    let json_path = dir.path().join("coherence.json");
    write_json(&json_path, &outcome.artifact).expect("json");
    let body: Value = serde_json::from_slice(&fs::read(&json_path).expect("read")).expect("parse");
    assert_eq!(body["metric"], "phi_coherence");
    assert_eq!(body["band_hz"][0], 5.0);
    assert_eq!(body["date"], "2026-01-01");

    let csv_path = dir.path().join("coherence_spectrum.csv");
    write_spectrum_csv(&csv_path, &outcome.spectrum.clipped(60.0)).expect("csv");
    let text = fs::read_to_string(&csv_path).expect("read");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("frequency_hz,coherence"));
    assert_eq!(lines.count(), 61);
}

#[test]
fn hz_rows_follow_the_builtin_dataset() {
    let config = PipelineConfig::default();
    let rows = run_hz(&ObservationSet::cosmic_chronometers(), &config).expect("decompose");
    assert_eq!(rows.len(), 10);
    assert!((rows[0].z - 0.07).abs() < 1e-12);
    assert!((rows[0].omega_extra - 0.98801).abs() < 1e-4);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hz_decomposition.csv");
    write_csv(&path, rows.iter()).expect("csv");
    let header = fs::read_to_string(&path).expect("read");
    assert_eq!(
        header.lines().next(),
        Some("z,H,sigma_H,E_z,E_z2,Omega_b_term,Omega_extra")
    );
}

#[test]
fn observation_csv_loads_and_sorts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hz.csv");
    fs::write(&path, "z,H,sigma_H\n0.4,83.0,14.0\n0.1,69.0,12.0\n").expect("write");
    let set = load_observations_csv(&path).expect("load");
    assert_eq!(
        set.points(),
        &[
            ObservationPoint {
                z: 0.1,
                h: 69.0,
                sigma_h: 12.0
            },
            ObservationPoint {
                z: 0.4,
                h: 83.0,
                sigma_h: 14.0
            },
        ]
    );
}

#[test]
fn observation_csv_rejects_bad_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hz.csv");
    fs::write(&path, "z,H,sigma_H\n0.1,not-a-number,12.0\n").expect("write");
    let err = load_observations_csv(&path).expect_err("bad row");
    assert_eq!(err.info().code, "csv");

    fs::write(&path, "z,H,sigma_H\n").expect("write");
    let err = load_observations_csv(&path).expect_err("no rows");
    assert_eq!(err.info().code, "empty-dataset");
}

#[test]
fn galaxy_pipelines_tabulate_their_grids() {
    let config = PipelineConfig::default();
    let dimless = run_galaxy_dimless(&config.galaxy_dimless).expect("dimless");
    assert_eq!(dimless.len(), 200);
    assert_eq!(dimless.radii[0], 0.5);
    assert_eq!(dimless.radii[199], 25.0);

    let physical = run_galaxy_physical(&config.galaxy_physical).expect("physical");
    assert_eq!(physical.curve.len(), 15);
    assert!((physical.alpha / 6.428_951e9 - 1.0).abs() < 1e-5);
    assert!(physical.density_at_r0.per_kpc3 > 0.0);
    assert!((physical.density_at_r0.per_pc3 * 1e9 / physical.density_at_r0.per_kpc3 - 1.0).abs() < 1e-12);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("galaxy_physical.csv");
    write_curve_csv(&path, &physical.curve).expect("csv");
    let text = fs::read_to_string(&path).expect("read");
    assert_eq!(text.lines().next(), Some("r,m_baryon,m_extra,v_baryon,v_total"));
    assert_eq!(text.lines().count(), 16);
}

#[test]
fn flrw_trajectory_is_written() {
    let config = PipelineConfig::default();
    let trajectory = run_flrw(&config.flrw).expect("flrw");
    assert_eq!(trajectory.lambda.len(), 1000);
    assert_eq!(trajectory.a[0], 0.1);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("irs_flrw.csv");
    write_flrw_csv(&path, &trajectory).expect("csv");
    let text = fs::read_to_string(&path).expect("read");
    assert_eq!(text.lines().next(), Some("lambda,a,adot"));
    assert_eq!(text.lines().count(), 1001);
}

use std::process::Command;

use serde_json::Value;

#[test]
fn demo_writes_every_artefact_and_a_manifest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_irs-sim"))
        .args(["demo", "--out"])
        .arg(dir.path())
        .output()
        .expect("run irs-sim demo");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    for name in [
        "coherence.json",
        "coherence_spectrum.csv",
        "hz_decomposition.csv",
        "hz_decomposition.json",
        "galaxy_dimless.csv",
        "galaxy_physical.csv",
        "galaxy_physical.json",
        "irs_flrw.csv",
        "manifest.json",
    ] {
        assert!(dir.path().join(name).exists(), "missing {name}");
    }

    let manifest: Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("manifest.json")).expect("read"))
            .expect("json");
    assert_eq!(manifest["provenance"]["seed"], 2024);
    assert!(manifest["provenance"]["input_hash"].as_str().is_some());
    assert_eq!(manifest["artefacts"].as_array().map(Vec::len), Some(8));
}

#[test]
fn bad_config_fails_the_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("bad.yaml");
    std::fs::write(&config, "coherence:\n  band:\n    lo: 30.0\n    hi: 10.0\n").expect("write");
    let status = Command::new(env!("CARGO_BIN_EXE_irs-sim"))
        .args(["coherence", "--config"])
        .arg(&config)
        .arg("--out")
        .arg(dir.path())
        .status()
        .expect("run irs-sim coherence");
    assert!(!status.success());
}

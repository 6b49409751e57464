use assert_cmd::Command;
use predicates::prelude::*;

const CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/scenarios.yaml");

#[test]
fn adhoc_run_prints_summary() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(["--diameter", "100", "--velocity", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Impact Summary ==="))
        .stdout(predicate::str::contains("65.07 Mt TNT"));
}

#[test]
fn catalog_scenario_run() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args([
            "--scenario",
            "Tunguska Event (1908)",
            "--catalog",
            CATALOG,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tunguska Event (1908)"));
}

#[test]
fn invalid_angle_is_rejected() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(["--diameter", "100", "--velocity", "20", "--angle", "120"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("impact angle"));
}

#[test]
fn missing_diameter_is_rejected() {
    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args(["--velocity", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--diameter is required"));
}

#[test]
fn json_report_carries_run_metadata() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.json");

    Command::cargo_bin("simulate")
        .expect("simulate bin")
        .args([
            "--diameter",
            "100",
            "--velocity",
            "20",
            "--json",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written"));

    let contents = std::fs::read_to_string(&path).expect("report json");
    let report: serde_json::Value = serde_json::from_str(&contents).expect("well-formed JSON");

    assert_eq!(report["scenario"], "ad-hoc");
    assert_eq!(report["profile"], "reference");
    assert!(
        report["generated_utc"].is_string(),
        "missing generated_utc stamp"
    );
    let diameter = report["parameters"]["diameter_m"].as_f64().expect("diameter");
    assert!((diameter - 100.0).abs() < 1e-9, "diameter_m = {diameter}");
    let energy = report["effects"]["kinetic_energy_megatons"]
        .as_f64()
        .expect("energy");
    assert!((energy - 65.074).abs() < 0.01, "energy_mt = {energy}");
}

#[test]
fn sweep_defaults_to_stdout() {
    Command::cargo_bin("sweep")
        .expect("sweep bin")
        .args(["--diameter-steps", "2", "--velocity-steps", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("scenario,diameter_m"));
}

#[test]
fn sweep_writes_header_and_grid() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("sweep.csv");

    Command::cargo_bin("sweep")
        .expect("sweep bin")
        .args([
            "--diameter-steps",
            "3",
            "--velocity-steps",
            "3",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).expect("sweep csv");
    let mut lines = contents.lines();
    assert!(
        lines
            .next()
            .is_some_and(|h| h.starts_with("scenario,diameter_m")),
        "missing header"
    );
    assert_eq!(lines.count(), 9, "3x3 grid should emit 9 rows");
}

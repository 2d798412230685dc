use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn ascent_sim() -> Command {
    Command::cargo_bin("ascent-sim").expect("binary built")
}

fn config_path(name: &str) -> String {
    format!("{}/configs/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn search_preset_prints_solution() {
    ascent_sim()
        .args(["search", "--preset", "rox", "--angle-step", "0.01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pitchover angle:"))
        .stdout(predicate::str::contains("56.660 deg"))
        .stdout(predicate::str::contains("Cutoff altitude:"));
}

#[test]
fn search_exhausted_exits_with_code_two() {
    ascent_sim()
        .args(["search", "--config", &config_path("underpowered.toml"), "--angle-step", "0.1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("No pitchover angle"));
}

#[test]
fn search_writes_json_summary() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("search.json");
    ascent_sim()
        .args([
            "search",
            "--config",
            &config_path("rs112.toml"),
            "--json",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["vehicle"], "RS112");
    assert!(json["predicted_apogee_m"].as_f64().unwrap() >= 150_000.0);
}

#[test]
fn simulate_writes_csv_trajectory() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("traj.csv");
    ascent_sim()
        .args(["simulate", "--preset", "rs112", "--angle", "80", "--csv", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted apogee:"));

    let csv = std::fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("time,altitude,"));
    assert!(lines.count() > 1_000);
}

#[test]
fn simulate_reports_ground_impact() {
    ascent_sim()
        .args(["simulate", "--config", &config_path("underpowered.toml"), "--angle", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hit ground at t+"));
}

#[test]
fn unknown_preset_fails() {
    ascent_sim()
        .args(["search", "--preset", "saturn-v"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"));
}

#[test]
fn invalid_run_file_fails_fast() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        "[vehicle]\nupdate_frequency = 20\nwet_mass = 100\ndry_mass = 200\n\
         thrust_sea_level = 1000\nthrust_vacuum = 1000\nburn_duration = 10\n",
    )
    .unwrap();
    ascent_sim()
        .args(["search", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dry mass"));
}

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn valid_catalog_json() -> &'static str {
    r#"
{
  "version": 1,
  "programs": [
    { "label": "test-cycle", "duration": "1:00" },
    { "label": "rinse", "duration": "0:12" }
  ]
}
"#
}

#[test]
fn plan_reports_exact_and_panel_delay() {
    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.args(["--now", "22:00", "--duration", "1:26", "--finish", "09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9 h 34 min"))
        .stdout(predicate::str::contains("9 h 30 min"))
        .stdout(predicate::str::contains("07:30"))
        .stdout(predicate::str::contains("08:56"));
}

#[test]
fn program_preset_supplies_duration() {
    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.args(["--now", "22:00", "--program", "cotton", "--finish", "09:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 h 39 min"))
        .stdout(predicate::str::contains("7 h 21 min"))
        .stdout(predicate::str::contains("7 h 30 min"));
}

#[test]
fn finish_equal_to_now_schedules_for_tomorrow() {
    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.args(["--now", "12:00", "--duration", "5:00", "--finish", "12:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("19 h delay"));
}

#[test]
fn infeasible_schedule_fails_with_clear_error() {
    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.args(["--now", "10:00", "--duration", "10:00", "--finish", "15:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start in the past"));
}

#[test]
fn malformed_finish_fails_with_expected_grammar() {
    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.args(["--now", "10:00", "--duration", "1:00", "--finish", "24:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --finish '24:00'"));
}

#[test]
fn missing_duration_and_program_fails() {
    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.args(["--now", "10:00", "--finish", "15:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "either --duration or --program is required",
        ));
}

#[test]
fn unknown_program_fails() {
    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.args(["--now", "10:00", "--program", "boil-wash", "--finish", "15:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown program 'boil-wash'"));
}

#[test]
fn list_programs_shows_builtin_catalog() {
    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.arg("--list-programs")
        .assert()
        .success()
        .stdout(predicate::str::contains("cotton"))
        .stdout(predicate::str::contains("3:39"))
        .stdout(predicate::str::contains("express"));
}

#[test]
fn catalog_file_replaces_builtin_programs() {
    let dir = tempdir().expect("tempdir");
    let catalog = dir.path().join("programs.json");
    fs::write(&catalog, valid_catalog_json()).expect("write catalog");

    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.arg("--programs")
        .arg(&catalog)
        .arg("--list-programs")
        .assert()
        .success()
        .stdout(predicate::str::contains("test-cycle"))
        .stdout(predicate::str::contains("cotton").not());

    let mut plan = cargo_bin_cmd!("washplan");
    plan.arg("--programs")
        .arg(&catalog)
        .args(["--now", "20:00", "--program", "test-cycle", "--finish", "23:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 h delay"));
}

#[test]
fn catalog_with_wrong_version_fails() {
    let dir = tempdir().expect("tempdir");
    let catalog = dir.path().join("programs.json");
    fs::write(&catalog, r#"{ "version": 2, "programs": [] }"#).expect("write catalog");

    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.arg("--programs")
        .arg(&catalog)
        .arg("--list-programs")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unsupported program catalog version",
        ));
}

#[test]
fn catalog_with_malformed_json_fails() {
    let dir = tempdir().expect("tempdir");
    let catalog = dir.path().join("programs.json");
    fs::write(&catalog, "{ not-valid-json ").expect("write invalid json");

    let mut cmd = cargo_bin_cmd!("washplan");
    cmd.arg("--programs")
        .arg(&catalog)
        .arg("--list-programs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn json_output_is_machine_readable() {
    let mut cmd = cargo_bin_cmd!("washplan");
    let output = cmd
        .args([
            "--now", "22:00", "--duration", "1:26", "--finish", "09:00", "--json",
        ])
        .output()
        .expect("run washplan");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
    assert_eq!(report["delay_minutes"], 574);
    assert_eq!(report["panel_delay_minutes"], 570);
    assert_eq!(report["panel_start"], "07:30");
    assert_eq!(report["panel_finish"], "08:56");
    assert_eq!(report["finish"], "09:00");
}

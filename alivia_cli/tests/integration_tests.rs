//! Integration tests for the alivia binary.
//!
//! These tests verify end-to-end behavior including:
//! - Stress questionnaire scoring from flags and from stdin
//! - Medication urgency and category views
//! - CSV export
//! - Config and medication file handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("alivia"))
}

/// Helper to get the CLI with an empty config file in `dir`, so the user's
/// own config never leaks into a test
fn cli_with_config(dir: &Path) -> Command {
    let config = dir.join("config.toml");
    fs::write(&config, "").unwrap();
    let mut cmd = cli();
    cmd.arg("--config").arg(config);
    cmd
}

/// Helper to write a medication list to a JSON file
fn write_medications(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("medications.json");
    let meds = serde_json::json!([
        {
            "id": "med-a",
            "patient_id": "patient-001",
            "name": "Alpha",
            "dose": "5mg",
            "category": "pain",
            "schedule": [{ "time": "15:00", "taken": false }],
            "start_date": "2025-01-01",
            "color_tone": "#000000"
        },
        {
            "id": "med-b",
            "patient_id": "patient-001",
            "name": "Beta",
            "dose": "10mg",
            "category": "mood",
            "schedule": [{ "time": "08:00", "taken": true, "taken_at": "08:02" }],
            "start_date": "2025-01-01",
            "color_tone": "#111111"
        },
        {
            "id": "med-c",
            "patient_id": "patient-001",
            "name": "Gamma",
            "dose": "20mg",
            "category": "pain",
            "schedule": [{ "time": "12:00", "taken": false }],
            "start_date": "2025-01-01",
            "color_tone": "#222222"
        }
    ]);
    fs::write(&path, serde_json::to_string_pretty(&meds).unwrap()).unwrap();
    path
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Healthcare companion: stress scoring and medication schedules",
        ));
}

#[test]
fn test_stress_with_answers() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .args(["stress", "--answers", "2,2,2,2,2,2,2,2,2,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PSS-10 score: 20/40"))
        .stdout(predicate::str::contains("Stress level: moderate"));
}

#[test]
fn test_stress_rejects_partial_answers() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .args(["stress", "--answers", "2,2,2"])
        .assert()
        .failure();
}

#[test]
fn test_stress_rejects_out_of_range_answer() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .args(["stress", "--answers", "2,2,2,2,2,2,2,2,2,5"])
        .assert()
        .failure();
}

#[test]
fn test_stress_interactive() {
    let temp_dir = setup_test_dir();

    // One step back, then re-answer and finish
    let input = "4\n4\nb\n4\n4\n0\n0\n0\n0\n4\n0\n0\n";

    cli_with_config(temp_dir.path())
        .arg("stress")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("PSS-10 score: 40/40"))
        .stdout(predicate::str::contains("Stress level: high"));
}

#[test]
fn test_stress_interactive_eof_fails() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .arg("stress")
        .write_stdin("1\n2\n")
        .assert()
        .failure();
}

#[test]
fn test_classify_boundaries() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .args(["classify", "13"])
        .assert()
        .success()
        .stdout(predicate::str::contains("low stress"));

    cli_with_config(temp_dir.path())
        .args(["classify", "27"])
        .assert()
        .success()
        .stdout(predicate::str::contains("high stress"));

    cli_with_config(temp_dir.path())
        .args(["classify", "41"])
        .assert()
        .failure();
}

#[test]
fn test_meds_urgency_order() {
    let temp_dir = setup_test_dir();
    let file = write_medications(temp_dir.path());

    let output = cli_with_config(temp_dir.path())
        .args(["meds", "--at", "10:00", "--by", "urgency", "--file"])
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let gamma = stdout.find("Gamma").unwrap();
    let alpha = stdout.find("Alpha").unwrap();
    let beta = stdout.find("Beta").unwrap();
    assert!(gamma < alpha && alpha < beta, "unexpected order:\n{}", stdout);

    assert!(stdout.contains("in 2.0h"));
    assert!(stdout.contains("all doses taken"));
    assert!(stdout.contains("Total: 3  Completed: 1  Pending: 2"));
}

#[test]
fn test_meds_by_category() {
    let temp_dir = setup_test_dir();
    let file = write_medications(temp_dir.path());

    let output = cli_with_config(temp_dir.path())
        .args(["meds", "--at", "10:00", "--by", "category", "--file"])
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let pain = stdout.find("Pain (2 medications)").unwrap();
    let mood = stdout.find("Mood (1 medication)").unwrap();
    assert!(pain < mood);
}

#[test]
fn test_meds_csv_export() {
    let temp_dir = setup_test_dir();
    let file = write_medications(temp_dir.path());

    cli_with_config(temp_dir.path())
        .args(["meds", "--at", "10:00", "--csv", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "id,name,dose,category,next_time,hours_remaining,status\nmed-c,Gamma,20mg,pain,12:00,2.0,pending",
        ));
}

#[test]
fn test_meds_sample_data_by_default() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .args(["meds", "--at", "10:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ibuprofen"))
        .stdout(predicate::str::contains("Total: 5  Completed: 1  Pending: 4"));
}

#[test]
fn test_config_selects_file_and_view() {
    let temp_dir = setup_test_dir();
    let file = write_medications(temp_dir.path());
    let config = temp_dir.path().join("config.toml");
    fs::write(
        &config,
        format!(
            "[data]\nmedications_file = {:?}\n\n[display]\ndefault_view = \"category\"\n",
            file
        ),
    )
    .unwrap();

    cli()
        .args(["meds", "--at", "10:00", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Medications by category"))
        .stdout(predicate::str::contains("Gamma"));
}

#[test]
fn test_next_dose_for_medication() {
    let temp_dir = setup_test_dir();
    let file = write_medications(temp_dir.path());

    cli_with_config(temp_dir.path())
        .args(["next", "med-a", "--at", "14:30", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha 5mg: next dose at 15:00 (in 0.5h)"))
        .stdout(predicate::str::contains("Due soon!"));

    cli_with_config(temp_dir.path())
        .args(["next", "med-b", "--at", "14:30", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("all doses taken"));
}

#[test]
fn test_next_unknown_medication_fails() {
    let temp_dir = setup_test_dir();
    let file = write_medications(temp_dir.path());

    cli_with_config(temp_dir.path())
        .args(["next", "med-zzz", "--file"])
        .arg(&file)
        .assert()
        .failure();
}

#[test]
fn test_invalid_time_rejected() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .args(["meds", "--at", "25:00"])
        .assert()
        .failure();
}

#[test]
fn test_missing_medications_file_fails() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .args(["meds", "--file"])
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .failure();
}

#[test]
fn test_pain_summary() {
    let temp_dir = setup_test_dir();

    cli_with_config(temp_dir.path())
        .arg("pain")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average: 6.7"))
        .stdout(predicate::str::contains("Max:     8"))
        .stdout(predicate::str::contains("Trend:   Stable"));
}

//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the wiring between the CLI, the record sources and the renderer.

use assert_cmd::Command;
use medication_core::MedicationRecord;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command whose config dir is an empty temporary directory
fn cli_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("medication-record").expect("Failed to find medication-record binary");
    cmd.env("XDG_CONFIG_HOME", config_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write records as a JSON file and return its path
fn write_records(dir: &TempDir, records: &[MedicationRecord]) -> std::path::PathBuf {
    let path = dir.path().join("records.json");
    std::fs::write(&path, serde_json::to_string(records).unwrap()).unwrap();
    path
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_shows_sample_records() {
    let config_dir = TempDir::new().unwrap();

    cli_cmd(&config_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. アモキシシリン錠250mg"))
        .stdout(predicate::str::contains("2. ロキソプロフェンNa錠60mg"))
        .stdout(predicate::str::contains("3. オメプラゾール錠20mg"))
        .stdout(predicate::str::contains("Times: 08:00, 12:30, 19:00"));
}

#[test]
fn test_list_uses_records_file() {
    let config_dir = TempDir::new().unwrap();
    let data_dir = TempDir::new().unwrap();
    let path = write_records(
        &data_dir,
        &[MedicationRecord::new("カロナール錠200mg", "解熱", "頓服", "駅前医院", "2026年1月5日", ["22:00"])],
    );

    cli_cmd(&config_dir)
        .arg("--records")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. カロナール錠200mg"))
        .stdout(predicate::str::contains("アモキシシリン").not());
}

#[test]
fn test_list_empty_records_file() {
    let config_dir = TempDir::new().unwrap();
    let data_dir = TempDir::new().unwrap();
    let path = write_records(&data_dir, &[]);

    cli_cmd(&config_dir)
        .args(["list", "--records"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No medication records"));
}

#[test]
fn test_default_config_file_is_used() {
    let config_dir = TempDir::new().unwrap();
    let app_dir = config_dir.path().join("medication-record");
    std::fs::create_dir_all(&app_dir).unwrap();
    let record = MedicationRecord::new("ムコダイン錠250mg", "痰を出しやすくする", "1日3回", "市民病院", "2026年2月1日", ["08:00"]);
    std::fs::write(app_dir.join("records.json"), serde_json::to_string(&[record]).unwrap()).unwrap();

    cli_cmd(&config_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ムコダイン錠250mg"));
}

#[test]
fn test_default_log_level_is_warn() {
    let config_dir = TempDir::new().unwrap();

    cli_cmd(&config_dir)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Medication book ready").not());

    cli_cmd(&config_dir)
        .args(["-v", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Medication book ready"));
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_missing_records_file_fails() {
    let config_dir = TempDir::new().unwrap();

    cli_cmd(&config_dir)
        .args(["--records", "/nonexistent/records.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load medication records"));
}

#[test]
fn test_malformed_records_file_fails() {
    let config_dir = TempDir::new().unwrap();
    let data_dir = TempDir::new().unwrap();
    let path = data_dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    cli_cmd(&config_dir)
        .arg("--records")
        .arg(&path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

// ============================================================================
// Render Command Tests
// ============================================================================

#[test]
fn test_render_document_to_stdout() {
    let config_dir = TempDir::new().unwrap();

    cli_cmd(&config_dir)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("class=\"tab active\""))
        .stdout(predicate::str::contains("オメプラゾール錠20mg"));
}

#[test]
fn test_render_fragment() {
    let config_dir = TempDir::new().unwrap();

    cli_cmd(&config_dir)
        .args(["render", "--fragment"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<div class=\"medication-app\">"))
        .stdout(predicate::str::contains("<!DOCTYPE").not());
}

#[test]
fn test_render_to_file() {
    let config_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("record.html");

    cli_cmd(&config_dir)
        .arg("render")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("<article class=\"medication-card\"").count(), 3);
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_shows_literal_counters() {
    let config_dir = TempDir::new().unwrap();

    cli_cmd(&config_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("服用中の薬: 3"))
        .stdout(predicate::str::contains("今月の服用: 12"))
        .stdout(predicate::str::contains("処方箋: 2"))
        .stdout(predicate::str::contains("お薬リスト (active)"))
        .stdout(predicate::str::contains("服用カレンダー (inactive)"));
}

#[test]
fn test_info_lists_assets() {
    let config_dir = TempDir::new().unwrap();

    cli_cmd(&config_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("CalendarIcon: https://"));
}

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with --no-color and an isolated config home
fn pacer_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pacer").expect("Failed to find pacer binary");
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.arg("--no-color");
    cmd
}

const PROFILE: [&str; 12] = [
    "--name",
    "Alex Runner",
    "--email",
    "alex@example.com",
    "--age",
    "35",
    "--weight",
    "70",
    "--start-date",
    "2025-07-15",
    "--time",
    "07:30",
];

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[test]
fn test_cli_help_lists_commands() {
    let temp_dir = create_cli_test_environment();
    pacer_cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("settings"));
}

#[test]
fn test_cli_generate_all_formats() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    pacer_cmd(temp_dir.path())
        .arg("generate")
        .args(PROFILE)
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Export report"))
        .stdout(predicate::str::contains("Success: wrote 11 artifact(s)"));

    assert_eq!(
        files_in(&out),
        vec![
            "c25k-apple-health.csv",
            "c25k-checklist.md",
            "c25k-google-fit.csv",
            "c25k-plan-qr-accessible.svg",
            "c25k-plan-qr.svg",
            "c25k-plan.csv",
            "c25k-plan.ics",
            "c25k-plan.json",
            "c25k-plan.pdf",
            "c25k-tracker.xml",
            "c25k-voice-script.txt",
        ]
    );
    let ics = fs::read_to_string(out.join("c25k-plan.ics")).unwrap();
    assert!(ics.contains("DTSTART:20250716T073000"));
    assert!(ics.contains("TRIGGER:-PT30M"));
}

#[test]
fn test_cli_generate_selected_formats() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    pacer_cmd(temp_dir.path())
        .arg("generate")
        .args(PROFILE)
        .args(["--format", "csv,json", "--out", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(files_in(&out), vec!["c25k-plan.csv", "c25k-plan.json"]);
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("c25k-plan.json")).unwrap()).unwrap();
    assert_eq!(json["kind"], "pacer-plan");
    assert_eq!(json["plan"]["weeks"].as_array().unwrap().len(), 10);
    assert!(json.get("generated_at").is_none());
}

#[test]
fn test_cli_invalid_profile_writes_nothing() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    pacer_cmd(temp_dir.path())
        .args(["generate", "--age", "0", "--weight", "70"])
        .args(["--start-date", "2025-07-15", "--out", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid profile field 'age'"));

    assert!(!out.exists());
}

#[test]
fn test_cli_missing_weight_is_reported() {
    let temp_dir = create_cli_test_environment();
    pacer_cmd(temp_dir.path())
        .args(["show", "--age", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'weight': is required"));
}

#[test]
fn test_cli_anonymize_hides_identity() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    pacer_cmd(temp_dir.path())
        .arg("generate")
        .args(PROFILE)
        .args(["--anonymize", "--format", "json,markdown,ics"])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success();

    for name in files_in(&out) {
        let content = fs::read_to_string(out.join(&name)).unwrap();
        assert!(!content.contains("Alex Runner"), "{name}");
        assert!(!content.contains("alex@example.com"), "{name}");
    }
}

#[test]
fn test_cli_failed_format_sets_exit_status() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    pacer_cmd(temp_dir.path())
        .arg("generate")
        .args(PROFILE)
        .args(["--format", "ics,csv", "--alert-minutes", "5000"])
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("- **ics**: failed"))
        .stdout(predicate::str::contains("Partial:"));

    assert_eq!(files_in(&out), vec!["c25k-plan.csv"]);
}

#[test]
fn test_cli_concurrent_generate() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    pacer_cmd(temp_dir.path())
        .args(["--concurrent", "generate"])
        .args(PROFILE)
        .args(["--out", out.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(files_in(&out).len(), 11);
}

#[test]
fn test_cli_show_plan() {
    let temp_dir = create_cli_test_environment();
    pacer_cmd(temp_dir.path())
        .arg("show")
        .args(PROFILE)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Couch to 5K Plan"))
        .stdout(predicate::str::contains("## Week 10"))
        .stdout(predicate::str::contains("2025-07-16 07:30"));
}

#[test]
fn test_cli_show_in_spanish() {
    let temp_dir = create_cli_test_environment();
    pacer_cmd(temp_dir.path())
        .arg("show")
        .args(PROFILE)
        .args(["--locale", "es"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan Couch to 5K"));
}

#[test]
fn test_cli_settings_init_and_use() {
    let temp_dir = create_cli_test_environment();
    let settings = temp_dir.path().join("settings.json");

    pacer_cmd(temp_dir.path())
        .args(["--settings", settings.to_str().unwrap(), "settings", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: wrote settings"));
    assert!(settings.exists());

    pacer_cmd(temp_dir.path())
        .args(["--settings", settings.to_str().unwrap(), "settings", "init"])
        .assert()
        .failure();

    fs::write(&settings, r#"{ "language": "es", "weeks": 4 }"#).unwrap();
    pacer_cmd(temp_dir.path())
        .args(["--settings", settings.to_str().unwrap(), "show"])
        .args(PROFILE)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan Couch to 5K"))
        .stdout(predicate::str::contains("## Semana 4"))
        .stdout(predicate::str::contains("## Semana 5").not());
}

#[test]
fn test_cli_settings_show_defaults() {
    let temp_dir = create_cli_test_environment();
    pacer_cmd(temp_dir.path())
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weeks\": 10"))
        .stdout(predicate::str::contains("settings.json"));
}

#[test]
fn test_cli_malformed_settings_fail() {
    let temp_dir = create_cli_test_environment();
    let settings = temp_dir.path().join("settings.json");
    fs::write(&settings, "not json").unwrap();

    pacer_cmd(temp_dir.path())
        .args(["--settings", settings.to_str().unwrap(), "settings", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

#[test]
fn test_cli_progress_from_generated_csv() {
    let temp_dir = create_cli_test_environment();
    let out = temp_dir.path().join("out");

    pacer_cmd(temp_dir.path())
        .arg("generate")
        .args(PROFILE)
        .args(["--format", "csv", "--out", out.to_str().unwrap()])
        .assert()
        .success();

    // mark the first four sessions done
    let csv = fs::read_to_string(out.join("c25k-plan.csv")).unwrap();
    let log: String = csv
        .lines()
        .enumerate()
        .map(|(index, line)| match index {
            0 => format!("{line},completed\n"),
            1..=4 => format!("{line},yes\n"),
            _ => format!("{line},no\n"),
        })
        .collect();
    let log_path = temp_dir.path().join("progress.csv");
    fs::write(&log_path, log).unwrap();

    pacer_cmd(temp_dir.path())
        .args(["progress", log_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Progress"))
        .stdout(predicate::str::contains("Progress: 4/29 sessions completed (13.8%)."))
        .stdout(predicate::str::contains("- Next: Week 2, Day 3 (2025-07-25)"));
}

#[test]
fn test_cli_progress_rejects_malformed_log() {
    let temp_dir = create_cli_test_environment();
    let log_path = temp_dir.path().join("progress.csv");
    fs::write(&log_path, "week,day,completed\n1,1,perhaps\n").unwrap();

    pacer_cmd(temp_dir.path())
        .args(["progress", log_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid progress log at row 2"));

    pacer_cmd(temp_dir.path())
        .args(["progress", temp_dir.path().join("absent.csv").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read progress log"));
}

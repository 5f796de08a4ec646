use std::fs;

use crate::common::{make_temp_dir, normalized_lines, read_log_contents, run, setup, write_config, write_snapshot};

#[test]
fn config_lists_items() {
    let dir = setup("config");
    let output = run(&dir, &["config"]);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "CONFIG"));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("0  | SNAPSHOT_PATH") && l.ends_with("| snapshot.json")));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("1  | SCHEDULE_DATE") && l.ends_with("| 2024-10-14")));
}

#[test]
fn config_set_persists_and_reports_change() {
    let dir = setup("config");
    let output = run(&dir, &["config", "set", "week_start", "sun"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config WEEK_START changed from 'MON' to 'SUN'"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("config.json")).unwrap()).unwrap();
    assert_eq!(saved["week_start"]["value"], "SUN");

    let week = run(&dir, &["week", "--client", "cl1"]);
    let stdout = String::from_utf8_lossy(&week.stdout);
    assert!(stdout.contains("SUNDAY 13 (2024-10-13)"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let dir = setup("config");
    let output = run(&dir, &["config", "set", "colour", "red"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown configuration key 'colour'"));
}

#[test]
fn global_config_flag_points_at_other_directory() {
    let dir = setup("config");
    let elsewhere = make_temp_dir("config-cwd");
    let config = dir.join("config.json");
    let output = run(
        &elsewhere,
        &["--config", config.to_str().unwrap(), "day"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("SCHEDULE 2024-10-14"));
}

#[test]
fn file_logging_writes_command_log() {
    let dir = make_temp_dir("config");
    write_config(&dir, true);
    write_snapshot(&dir);

    let output = run(&dir, &["unassign", "--id", "a1"]);
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Running 'unassign'"));
    assert!(log.contains("Removed Assignment(id='a1'"));
}

#[test]
fn disabled_file_logging_creates_no_log() {
    let dir = setup("config");
    let output = run(&dir, &["day"]);

    assert!(output.status.success());
    assert!(read_log_contents(&dir).is_none());
}

#[test]
fn undecodable_snapshot_record_is_skipped_and_logged() {
    let dir = make_temp_dir("config");
    write_config(&dir, true);
    let snapshot = r#"{
      "clients": [{ "id": "cl1", "name": "Ana", "program": "limitless" }],
      "coaches": [{ "id": "k1", "name": "Kim" }],
      "assignments": [
        { "id": "a1", "date": "2024-10-14", "timeSlot": "8-10", "clientId": "cl1" },
        { "id": "a2", "date": "2024-10-14", "timeSlot": "1-3", "coachId": "k1", "clientId": "cl1" }
      ]
    }"#;
    fs::write(dir.join("snapshot.json"), snapshot).unwrap();

    let output = run(&dir, &["day"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l.starts_with("1:00 PM - 3:00 PM") && l.contains("Kim")));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Skipped snapshot record"));

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Skipped snapshot record assignments[0]: missing field `coachId`"));
}

use coachboard::core::models::ScheduleAssignment;
use coachboard::core::snapshot::{load_snapshot, save_snapshot};

use crate::common::{make_temp_dir, normalized_lines, run, setup};

#[test]
fn unknown_command_exits_with_error() {
    let dir = setup("command");
    let output = run(&dir, &["frobnicate"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("Error: Unknown command: 'frobnicate'. Valid commands: day, coach"),
        "stderr was: {stderr}"
    );
}

#[test]
fn missing_required_flag_prints_usage() {
    let dir = setup("command");
    let output = run(&dir, &["coach"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(
        "Missing required argument --coach for 'coach'. Usage: coach --coach ID [--date DATE]"
    ));
}

#[test]
fn unknown_coach_is_reported() {
    let dir = setup("command");
    let output = run(&dir, &["coach", "--coach", "ghost"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No coach with id 'ghost'."));
}

#[test]
fn missing_config_fails_to_start() {
    let dir = make_temp_dir("command");
    let output = run(&dir, &["day"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to start with 'config.json'"));
    assert!(stderr.contains("Configuration file 'config.json' not found."));
}

#[test]
fn assign_persists_with_primary_coach_id() {
    let dir = setup("command");
    let output = run(
        &dir,
        &["assign", "--coach", "auth-k1", "--client", "cl3", "--slot", "10-12"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created Assignment("));

    let snapshot = load_snapshot(&dir.join("snapshot.json")).unwrap();
    assert_eq!(snapshot.assignments.len(), 5);
    let created = snapshot.assignments.last().unwrap();
    assert_eq!(created.date, "2024-10-14");
    assert_eq!(created.time_slot, "10-12");
    assert_eq!(created.coach_id, "k1");
    assert_eq!(created.client_id, "cl3");

    let day = run(&dir, &["day"]);
    let lines = normalized_lines(&day.stdout);
    assert!(lines
        .iter()
        .any(|l| l == "10:00 AM - 12:00 PM | Kim   | Cy     | Bridges"));
}

#[test]
fn assign_rejections_leave_snapshot_untouched() {
    let dir = setup("command");
    let before = std::fs::read_to_string(dir.join("snapshot.json")).unwrap();

    let on_leave = run(
        &dir,
        &["assign", "--coach", "k2", "--client", "cl2", "--slot", "8-10", "--date", "2024-10-15"],
    );
    assert_eq!(on_leave.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&on_leave.stderr)
        .contains("Coach 'k2' cannot be scheduled on 2024-10-15: on leave (vacation)"));

    let grace = run(
        &dir,
        &["assign", "--coach", "g1", "--client", "cl2", "--slot", "8-10"],
    );
    assert_eq!(grace.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&grace.stderr).contains("not eligible"));

    let duplicate = run(
        &dir,
        &["assign", "--coach", "k2", "--client", "cl1", "--slot", "8-10"],
    );
    assert_eq!(duplicate.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&duplicate.stderr)
        .contains("Client 'cl1' is already scheduled on 2024-10-14 at 8-10 (assignment a1)."));

    let after = std::fs::read_to_string(dir.join("snapshot.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn unassign_removes_assignment() {
    let dir = setup("command");
    let output = run(&dir, &["unassign", "--id", "a3"]);

    assert!(output.status.success());
    let snapshot = load_snapshot(&dir.join("snapshot.json")).unwrap();
    assert!(snapshot.assignments.iter().all(|a| a.id != "a3"));

    let again = run(&dir, &["unassign", "--id", "a3"]);
    assert_eq!(again.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&again.stderr).contains("No assignment with id 'a3'."));
}

#[test]
fn duplicates_lists_double_bookings() {
    let dir = setup("command");
    let clean = run(&dir, &["duplicates"]);
    assert!(normalized_lines(&clean.stdout)
        .iter()
        .any(|l| l == "No duplicate assignments."));

    let path = dir.join("snapshot.json");
    let mut snapshot = load_snapshot(&path).unwrap();
    snapshot
        .assignments
        .push(ScheduleAssignment::new("a5", "2024-10-14", "8-10", "k2", "cl1"));
    save_snapshot(&snapshot, &path).unwrap();

    let output = run(&dir, &["duplicates"]);
    let lines = normalized_lines(&output.stdout);
    assert!(lines
        .iter()
        .any(|l| l == "2024-10-14 | 8-10      | cl1    | a1, a5"));
}

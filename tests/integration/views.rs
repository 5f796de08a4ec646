use crate::common::{normalized_lines, run, setup};

#[test]
fn day_groups_clients_under_resolved_coach() {
    let dir = setup("views");
    let output = run(&dir, &["day"]);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "SCHEDULE 2024-10-14"));
    assert!(lines.iter().any(|l| l == "TIME                | COACH | CLIENT | PROGRAM"));
    assert!(lines
        .iter()
        .any(|l| l == "8:00 AM - 10:00 AM  | Kim   | Ana    | Limitless"));
    assert!(lines
        .iter()
        .any(|l| l == "8:00 AM - 10:00 AM  | Kim   | Ben    | New Options"));
    assert!(lines.iter().any(|l| l == "10:00 AM - 12:00 PM | -     | -      | -"));
    assert!(lines
        .iter()
        .any(|l| l == "1:00 PM - 3:00 PM   | Lee   | Cy     | Bridges"));
    assert!(!lines.iter().any(|l| l.contains("Orientation")));
}

#[test]
fn day_honors_date_flag() {
    let dir = setup("views");
    let output = run(&dir, &["day", "--date", "2024-10-16"]);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "SCHEDULE 2024-10-16"));
    assert!(!lines.iter().any(|l| l.contains("Kim")));
}

#[test]
fn coach_view_accepts_auth_uid() {
    let dir = setup("views");
    let output = run(&dir, &["coach", "--coach", "auth-k1"]);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "KIM 2024-10-14"));
    assert!(lines.iter().any(|l| l.ends_with("| Ana    | Limitless")));
    assert!(lines.iter().any(|l| l.ends_with("| Ben    | New Options")));
    assert!(lines.iter().any(|l| l.contains("(open)")));
}

#[test]
fn week_lists_core_and_special_sessions() {
    let dir = setup("views");
    let output = run(&dir, &["week", "--client", "cl1", "--date", "2024-10-16"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WEEK OF ANA (LIMITLESS)"));
    assert!(stdout.contains("MONDAY 14 (2024-10-14)"));
    assert!(stdout.contains("WEDNESDAY 16 (2024-10-16)"));
    assert!(stdout.contains("SUNDAY 20 (2024-10-20)"));
    assert!(stdout.contains("Orientation"));
    assert!(stdout.contains("a4"));
}

#[test]
fn month_shows_only_days_with_core_sessions() {
    let dir = setup("views");
    let output = run(&dir, &["month", "--month", "2024-10"]);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "MONTH 2024-10"));
    assert!(lines.iter().any(|l| l == "DATE: 2024-10-14"));
    assert!(!lines.iter().any(|l| l == "DATE: 2024-10-16"));

    let empty = run(&dir, &["month", "--month", "2024-11"]);
    let lines = normalized_lines(&empty.stdout);
    assert!(lines.iter().any(|l| l == "No sessions scheduled this month."));
}

#[test]
fn slots_lists_core_registry() {
    let dir = setup("views");
    let output = run(&dir, &["slots"]);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    let ids: Vec<&str> = lines
        .iter()
        .filter_map(|l| l.split(" | ").next())
        .map(str::trim)
        .filter(|id| ["8-10", "10-12", "1-3"].contains(id))
        .collect();
    assert_eq!(ids, vec!["8-10", "10-12", "1-3"]);
    assert!(lines.iter().any(|l| l.contains("| 13:00 | 15:00 | CORE")));
}

#[test]
fn check_reports_leave_and_availability() {
    let dir = setup("views");
    let output = run(&dir, &["check", "--coach", "k2", "--date", "2024-10-15"]);

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    assert!(lines
        .iter()
        .any(|l| l == "Lee   | 2024-10-15 | on leave | vacation"));

    let output = run(&dir, &["check", "--coach", "k2"]);
    let lines = normalized_lines(&output.stdout);
    assert!(lines
        .iter()
        .any(|l| l == "Lee   | 2024-10-14 | available | -"));
}

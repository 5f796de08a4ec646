use super::{resolve_date, run};
use crate::core::cli::CliArgs;
use crate::core::context::AppContext;
use crate::core::snapshot::load_snapshot;
use crate::errors::Error;
use crate::ui::display_manager::DisplayManager;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("coachboard-command-{nanos}-{uniq}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn setup() -> (AppContext, PathBuf) {
    let dir = temp_dir();
    let snapshot = r#"{
  "clients": [{ "id": "cl1", "name": "Alex", "program": "bridges" }],
  "coaches": [{ "id": "c1", "name": "Sam" }],
  "assignments": [
    { "id": "s1", "date": "2024-06-03", "timeSlot": "8-10", "coachId": "c1", "clientId": "cl1" }
  ]
}"#;
    let config = r#"{
  "snapshot_path": { "value": "snapshot.json", "description": "snapshot" },
  "schedule_date": { "value": "2024-06-03", "description": "date" },
  "file_logging_enabled": { "value": "False", "description": "file logging" }
}"#;
    fs::write(dir.join("snapshot.json"), snapshot).unwrap();
    fs::write(dir.join("config.json"), config).unwrap();
    let ctx = AppContext::new_with_paths(dir.join("config.json"), dir.join("logs")).unwrap();
    (ctx, dir)
}

fn exec(ctx: &mut AppContext, argv: &[&str]) -> crate::errors::Result<String> {
    let cli = CliArgs::from_args(argv.iter().map(|s| s.to_string()))?;
    let mut out = Vec::new();
    run(ctx, &cli, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn resolve_date_prefers_flag_then_config() {
    let (ctx, _) = setup();
    assert_eq!(
        resolve_date(Some("2024-01-02"), &ctx.config).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    );
    assert_eq!(
        resolve_date(None, &ctx.config).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    );
    assert!(matches!(resolve_date(Some("later"), &ctx.config), Err(Error::Parse(_))));
}

#[test]
fn day_uses_configured_date() {
    let (mut ctx, _) = setup();
    let output = exec(&mut ctx, &["day"]).unwrap();
    assert!(output.contains("SCHEDULE 2024-06-03"));
    assert!(output.contains("Sam"));
    assert!(output.contains("Alex"));
}

#[test]
fn coach_and_week_require_their_ids() {
    let (mut ctx, _) = setup();
    match exec(&mut ctx, &["coach"]).unwrap_err() {
        Error::Parse(msg) => assert!(msg.starts_with("Missing required argument --coach for 'coach'.")),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(matches!(exec(&mut ctx, &["week"]), Err(Error::Parse(_))));

    let output = exec(&mut ctx, &["week", "--client", "cl1"]).unwrap();
    assert!(output.contains("MONDAY 3 (2024-06-03)"));
}

#[test]
fn month_and_slots_render() {
    let (mut ctx, _) = setup();
    let output = exec(&mut ctx, &["month", "--month", "2024-06"]).unwrap();
    assert!(output.contains("MONTH 2024-06"));
    assert!(output.contains("DATE: 2024-06-03"));

    let output = exec(&mut ctx, &["slots"]).unwrap();
    assert!(output.contains("1:00 PM - 3:00 PM"));
}

#[test]
fn assign_then_duplicates_then_unassign() {
    let (mut ctx, dir) = setup();
    exec(
        &mut ctx,
        &["assign", "--coach", "c1", "--client", "cl1", "--slot", "1-3"],
    )
    .unwrap();
    assert_eq!(
        load_snapshot(&dir.join("snapshot.json")).unwrap().assignments.len(),
        2
    );

    let err = exec(
        &mut ctx,
        &["assign", "--coach", "c1", "--client", "cl1", "--slot", "8-10"],
    )
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateAssignment { .. }));

    let output = exec(&mut ctx, &["duplicates"]).unwrap();
    assert!(output.contains("No duplicate assignments."));

    exec(&mut ctx, &["unassign", "--id", "s1"]).unwrap();
    assert_eq!(
        load_snapshot(&dir.join("snapshot.json")).unwrap().assignments.len(),
        1
    );
}

#[test]
fn config_shows_and_sets_values() {
    let (mut ctx, dir) = setup();
    let output = exec(&mut ctx, &["config"]).unwrap();
    let mut expected = Vec::new();
    DisplayManager::new()
        .render_config(&ctx.config, &mut expected)
        .unwrap();
    assert_eq!(output, String::from_utf8(expected).unwrap());

    exec(&mut ctx, &["config", "set", "WEEK_START", "sun"]).unwrap();
    let saved = fs::read_to_string(dir.join("config.json")).unwrap();
    assert!(saved.contains("\"SUN\""));

    assert!(matches!(exec(&mut ctx, &["config", "set", "WEEK_START"]), Err(Error::Parse(_))));
}

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_coachboard"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn write_config(dir: &PathBuf, file_logging: bool) {
    let cfg = format!(
        r#"{{
      "snapshot_path": {{ "value": "snapshot.json", "description": "Snapshot file" }},
      "schedule_date": {{ "value": "2024-10-14", "description": "Default date" }},
      "week_start": {{ "value": "MON", "description": "First day of week" }},
      "file_logging_enabled": {{ "value": "{}", "description": "file logging" }}
    }}"#,
        if file_logging { "True" } else { "False" }
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

/// Two coaches, three clients, one special session and one leave day.
pub fn write_snapshot(dir: &PathBuf) {
    let snapshot = r#"{
      "clients": [
        { "id": "cl1", "name": "Ana", "program": "limitless", "businessName": "Ana's Bakery" },
        { "id": "cl2", "name": "Ben", "program": "new_options" },
        { "id": "cl3", "name": "Cy", "program": "bridges" }
      ],
      "coaches": [
        { "id": "k1", "uid": "auth-k1", "name": "Kim" },
        { "id": "k2", "name": "Lee" },
        { "id": "g1", "name": "Gail", "coachType": "grace" }
      ],
      "assignments": [
        { "id": "a1", "date": "2024-10-14", "timeSlot": "8-10", "coachId": "auth-k1", "clientId": "cl1" },
        { "id": "a2", "date": "2024-10-14", "timeSlot": "8-10", "coachId": "k1", "clientId": "cl2" },
        { "id": "a3", "date": "2024-10-14", "timeSlot": "1-3", "coachId": "k2", "clientId": "cl3" },
        { "id": "a4", "date": "2024-10-16", "timeSlot": "Orientation", "coachId": "k2", "clientId": "cl1" }
      ],
      "availability": [
        { "coachId": "k2", "date": "2024-10-15", "status": "on leave", "reason": "vacation" }
      ]
    }"#;
    fs::write(dir.join("snapshot.json"), snapshot).unwrap();
}

pub fn setup(prefix: &str) -> PathBuf {
    let dir = make_temp_dir(prefix);
    write_config(&dir, false);
    write_snapshot(&dir);
    dir
}

pub fn run(dir: &PathBuf, args: &[&str]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run binary")
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && matches!(chars.peek(), Some('[')) {
            chars.next();
            for nc in chars.by_ref() {
                if nc.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| strip_ansi(l).trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn read_log_contents(dir: &PathBuf) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}

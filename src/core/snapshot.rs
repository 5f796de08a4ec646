use crate::core::models::{Client, Coach, ScheduleAssignment};
use crate::errors::{Error, Result};
use crate::schedule::availability::AvailabilityEntry;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Point-in-time copy of the records the schedule views read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
    #[serde(default)]
    pub assignments: Vec<ScheduleAssignment>,
    #[serde(default)]
    pub availability: Vec<AvailabilityEntry>,
}

/// A record that failed to decode and was left out of the loaded snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub section: &'static str,
    pub index: usize,
    pub error: String,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.section, self.index, self.error)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotLoad {
    pub snapshot: Snapshot,
    pub skipped: Vec<SkippedRecord>,
}

/// Sections are kept as raw values so one bad record cannot sink the rest.
#[derive(Debug, Default, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    clients: Vec<Value>,
    #[serde(default)]
    coaches: Vec<Value>,
    #[serde(default)]
    assignments: Vec<Value>,
    #[serde(default)]
    availability: Vec<Value>,
}

fn decode_section<T: DeserializeOwned>(
    section: &'static str,
    values: Vec<Value>,
    skipped: &mut Vec<SkippedRecord>,
) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                skipped.push(SkippedRecord {
                    section,
                    index,
                    error: e.to_string(),
                });
                None
            }
        })
        .collect()
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    load_snapshot_report(path).map(|load| load.snapshot)
}

/// Fails only when the file is missing or is not a JSON object with array
/// sections. Records that do not decode are dropped and listed in `skipped`.
pub fn load_snapshot_report(path: &Path) -> Result<SnapshotLoad> {
    if !path.exists() {
        return Err(Error::snapshot(format!(
            "Snapshot file '{}' not found.",
            path.display()
        )));
    }
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::snapshot(format!("Failed to read {}: {}", path.display(), e)))?;
    let raw: RawSnapshot = serde_json::from_str(&contents)
        .map_err(|e| Error::snapshot(format!("Invalid JSON in '{}': {}", path.display(), e)))?;

    let mut skipped = Vec::new();
    let snapshot = Snapshot {
        clients: decode_section("clients", raw.clients, &mut skipped),
        coaches: decode_section("coaches", raw.coaches, &mut skipped),
        assignments: decode_section("assignments", raw.assignments, &mut skipped),
        availability: decode_section("availability", raw.availability, &mut skipped),
    };
    Ok(SnapshotLoad { snapshot, skipped })
}

pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

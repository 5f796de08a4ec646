use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::directory::CoachDirectory;
use crate::core::models::{Coach, ScheduleAssignment};
use crate::core::types::Date;
use crate::errors::{Error, Result};
use crate::extensions::chrono::NaiveDateExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
    OnLeave,
    Other(String),
}

impl AvailabilityStatus {
    pub fn parse_lenient(s: &str) -> Self {
        let norm = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "available" | "" => AvailabilityStatus::Available,
            "unavailable" | "not available" => AvailabilityStatus::Unavailable,
            "on leave" | "leave" => AvailabilityStatus::OnLeave,
            _ => AvailabilityStatus::Other(s.trim().to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityStatus::Available)
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Unavailable => write!(f, "unavailable"),
            AvailabilityStatus::OnLeave => write!(f, "on leave"),
            AvailabilityStatus::Other(label) => write!(f, "{label}"),
        }
    }
}

impl Serialize for AvailabilityStatus {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AvailabilityStatus {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<AvailabilityStatus, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(AvailabilityStatus::parse_lenient(&s))
    }
}

/// Must be consulted before an assignment is created. View building never
/// calls it; it only renders assignments that already passed this check.
pub trait AvailabilityGate {
    fn is_available(&self, coach_id: &str, date: NaiveDate) -> bool {
        self.status_for(coach_id, date).is_available()
    }
    fn status_for(&self, coach_id: &str, date: NaiveDate) -> AvailabilityStatus;
    fn reason_for(&self, coach_id: &str, date: NaiveDate) -> Option<String>;
}

/// Gate that lets everyone through.
pub struct AlwaysAvailable;
impl AvailabilityGate for AlwaysAvailable {
    fn status_for(&self, _coach_id: &str, _date: NaiveDate) -> AvailabilityStatus {
        AvailabilityStatus::Available
    }
    fn reason_for(&self, _coach_id: &str, _date: NaiveDate) -> Option<String> {
        None
    }
}

/// A coach's unavailability over `date..=end_date` (a single day when
/// `end_date` is absent). `coach_id` may hold either the coach's primary
/// id or auth uid; [`LeaveCalendar::for_coaches`] folds both onto the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityEntry {
    pub coach_id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub status: AvailabilityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AvailabilityEntry {
    pub fn covers(&self, coach_id: &str, date: NaiveDate) -> bool {
        let last = self.end_date.unwrap_or(self.date);
        self.coach_id == coach_id && self.date <= date && date <= last
    }
}

/// In-memory gate over leave/unavailability entries. The first matching
/// entry decides.
#[derive(Debug, Clone, Default)]
pub struct LeaveCalendar {
    entries: Vec<AvailabilityEntry>,
}

impl LeaveCalendar {
    pub fn new(entries: Vec<AvailabilityEntry>) -> Self {
        Self { entries }
    }

    /// Rewrites each entry's coach reference to the resolved coach's primary
    /// id, so lookups by `coach.id` see leave recorded under the uid too.
    /// Entries naming no known coach are kept as written.
    pub fn for_coaches(entries: &[AvailabilityEntry], coaches: &[Coach]) -> Self {
        let directory = CoachDirectory::coaches(coaches);
        let entries = entries
            .iter()
            .map(|entry| {
                let mut entry = entry.clone();
                if let Some(coach) = directory.get(&entry.coach_id) {
                    entry.coach_id = coach.id.clone();
                }
                entry
            })
            .collect();
        Self { entries }
    }

    fn entry_for(&self, coach_id: &str, date: NaiveDate) -> Option<&AvailabilityEntry> {
        self.entries.iter().find(|e| e.covers(coach_id, date))
    }
}

impl AvailabilityGate for LeaveCalendar {
    fn status_for(&self, coach_id: &str, date: NaiveDate) -> AvailabilityStatus {
        self.entry_for(coach_id, date)
            .map(|e| e.status.clone())
            .unwrap_or(AvailabilityStatus::Available)
    }

    fn reason_for(&self, coach_id: &str, date: NaiveDate) -> Option<String> {
        self.entry_for(coach_id, date).and_then(|e| e.reason.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRequest {
    pub date: NaiveDate,
    pub time_slot: String,
    pub coach_id: String,
    pub client_id: String,
}

impl AssignmentRequest {
    pub fn new(
        date: NaiveDate,
        time_slot: impl Into<String>,
        coach_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            date,
            time_slot: time_slot.into(),
            coach_id: coach_id.into(),
            client_id: client_id.into(),
        }
    }

    /// Same as `new` but takes the date as typed by a user.
    pub fn parse(
        date: &str,
        time_slot: impl Into<String>,
        coach_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Result<Self> {
        let date = Date::try_from_str(date)?;
        Ok(Self::new(date.0, time_slot, coach_id, client_id))
    }
}

/// The assignment-creation path: gate first, then duplicate check.
pub struct AssignmentPlanner<'g> {
    gate: &'g dyn AvailabilityGate,
}

impl<'g> AssignmentPlanner<'g> {
    pub fn new(gate: &'g dyn AvailabilityGate) -> Self {
        Self { gate }
    }

    pub fn plan(
        &self,
        request: &AssignmentRequest,
        existing: &[ScheduleAssignment],
    ) -> Result<ScheduleAssignment> {
        let date = request.date.storage_key();

        if !self.gate.is_available(&request.coach_id, request.date) {
            return Err(Error::CoachUnavailable {
                coach_id: request.coach_id.clone(),
                date,
                status: self.gate.status_for(&request.coach_id, request.date),
                reason: self.gate.reason_for(&request.coach_id, request.date),
            });
        }

        let wanted = (
            date.as_str(),
            request.time_slot.as_str(),
            request.client_id.as_str(),
        );
        if let Some(dup) = existing.iter().find(|a| a.booking_key() == wanted) {
            return Err(Error::DuplicateAssignment {
                client_id: request.client_id.clone(),
                date,
                time_slot: request.time_slot.clone(),
                existing_id: dup.id.clone(),
            });
        }

        Ok(ScheduleAssignment::new(
            uuid::Uuid::new_v4().to_string(),
            date,
            request.time_slot.clone(),
            request.coach_id.clone(),
            request.client_id.clone(),
        ))
    }

    /// Only success coaches go on the general schedule.
    pub fn require_general_population(coach: &Coach) -> Result<()> {
        if coach.is_general_population() {
            Ok(())
        } else {
            Err(Error::CoachNotEligible {
                coach_id: coach.id.clone(),
                coach_type: coach.coach_type.to_string(),
            })
        }
    }
}

/// Assignments booking the same client twice at one date and slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateGroup {
    pub date: String,
    pub time_slot: String,
    pub client_id: String,
    pub assignment_ids: Vec<String>,
}

/// Groups in first-seen order; singletons are not reported.
pub fn find_duplicates(assignments: &[ScheduleAssignment]) -> Vec<DuplicateGroup> {
    let mut order: Vec<(&str, &str, &str)> = Vec::new();
    let mut ids: HashMap<(&str, &str, &str), Vec<String>> = HashMap::new();
    for a in assignments {
        let key = a.booking_key();
        let bucket = ids.entry(key).or_insert_with(|| {
            order.push(key);
            Vec::new()
        });
        bucket.push(a.id.clone());
    }

    order
        .into_iter()
        .filter_map(|key| {
            let assignment_ids = ids.remove(&key)?;
            (assignment_ids.len() > 1).then(|| DuplicateGroup {
                date: key.0.to_string(),
                time_slot: key.1.to_string(),
                client_id: key.2.to_string(),
                assignment_ids,
            })
        })
        .collect()
}

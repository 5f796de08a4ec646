use crate::core::types::{CoachType, Program, TimeSlotKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub trait BaseEntity {
    fn id(&self) -> &str;
}

// =======
// Client
// =======

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub program: Program,
    /// Program-specific attributes (business name, job goal, ...) kept as-is.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Client {
    pub fn new(id: impl Into<String>, name: impl Into<String>, program: Program) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            program,
            details: Map::new(),
        }
    }

    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }
}

impl BaseEntity for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client(id='{}', name='{}', program={})",
            self.id, self.name, self.program
        )
    }
}

// ======
// Coach
// ======

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: String,
    /// Auth-side identifier; assignments may reference either field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub coach_type: CoachType,
}

impl Coach {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uid: None,
            name: name.into(),
            role: "coach".into(),
            coach_type: CoachType::Success,
        }
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn with_coach_type(mut self, coach_type: CoachType) -> Self {
        self.coach_type = coach_type;
        self
    }

    /// True when `candidate` is this coach's primary id or auth uid.
    pub fn matches_id(&self, candidate: &str) -> bool {
        self.id == candidate || self.uid.as_deref() == Some(candidate)
    }

    pub fn is_general_population(&self) -> bool {
        self.coach_type.is_general_population()
    }
}

impl BaseEntity for Coach {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Coach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coach(id='{}', uid={:?}, name='{}', type={})",
            self.id, self.uid, self.name, self.coach_type
        )
    }
}

// ===================
// ScheduleAssignment
// ===================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAssignment {
    pub id: String,
    /// `YYYY-MM-DD`, as stored.
    pub date: String,
    pub time_slot: String,
    pub coach_id: String,
    pub client_id: String,
}

impl ScheduleAssignment {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        time_slot: impl Into<String>,
        coach_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time_slot: time_slot.into(),
            coach_id: coach_id.into(),
            client_id: client_id.into(),
        }
    }

    pub fn date_naive(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Key under which two assignments book the same client twice.
    pub fn booking_key(&self) -> (&str, &str, &str) {
        (&self.date, &self.time_slot, &self.client_id)
    }
}

impl BaseEntity for ScheduleAssignment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ScheduleAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Assignment(id='{}', date={}, slot={}, coach='{}', client='{}')",
            self.id, self.date, self.time_slot, self.coach_id, self.client_id
        )
    }
}

// =========
// TimeSlot
// =========

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    pub kind: TimeSlotKind,
}

impl TimeSlot {
    pub fn core(id: &str, label: &str, start: &str, end: &str) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            start: Some(start.into()),
            end: Some(end.into()),
            kind: TimeSlotKind::Core,
        }
    }

    /// Placeholder for an id outside the core set; the raw id doubles as
    /// label and sort start.
    pub fn special(id: &str) -> Self {
        Self {
            id: id.into(),
            label: id.into(),
            start: Some(id.into()),
            end: None,
            kind: TimeSlotKind::Special,
        }
    }

    pub fn is_special(&self) -> bool {
        self.kind == TimeSlotKind::Special
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

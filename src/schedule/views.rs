use chrono::NaiveDate;
use serde::Serialize;

use crate::core::models::{Client, Coach, ScheduleAssignment, TimeSlot};
use crate::schedule::calendar_view::{CalendarView, WeekDay};
use crate::schedule::index::{CoachGroup, IndexObserver, ScheduleIndexer, ScheduledClient};
use crate::schedule::ordering::sort_canonical;
use crate::schedule::selection::AssignmentQuery;
use crate::schedule::time_slots::{core_slots, is_special, resolve};

/// One core slot of the admin day view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedTimeSlot {
    pub time_slot: TimeSlot,
    pub coach_groups: Vec<CoachGroup>,
}

/// One core slot of a coach's own day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachDaySlot {
    pub time_slot: TimeSlot,
    pub clients: Vec<ScheduledClient>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub assignment: ScheduleAssignment,
    pub coach: Option<Coach>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotSessions {
    pub time_slot: TimeSlot,
    pub sessions: Vec<Session>,
}

/// One day of a client's week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientWeekDay {
    pub date: String,
    pub day_name: String,
    pub day_number: u32,
    pub time_slot_groups: Vec<TimeSlotSessions>,
}

/// One calendar day of the monthly view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthDay {
    pub date: NaiveDate,
    pub slots: Vec<GroupedTimeSlot>,
}

impl MonthDay {
    pub fn has_sessions(&self) -> bool {
        self.slots.iter().any(|s| !s.coach_groups.is_empty())
    }
}

/// Builds every schedule view from one pair of directories.
pub struct ScheduleViewBuilder<'a> {
    indexer: ScheduleIndexer<'a>,
}

impl<'a> ScheduleViewBuilder<'a> {
    pub fn new(clients: &'a [Client], coaches: &'a [Coach]) -> Self {
        Self {
            indexer: ScheduleIndexer::new(clients, coaches),
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn IndexObserver) -> Self {
        self.indexer = self.indexer.with_observer(observer);
        self
    }

    /// Core slots only, canonical order; coach groups left without clients are dropped.
    pub fn grouped_day(&self, assignments: &[ScheduleAssignment]) -> Vec<GroupedTimeSlot> {
        let mut index = self.indexer.by_time_slot_and_coach(assignments);
        core_slots()
            .iter()
            .map(|slot| {
                let coach_groups = index
                    .take(&slot.id)
                    .map(|groups| groups.into_groups())
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|g| !g.clients.is_empty())
                    .collect();
                GroupedTimeSlot {
                    time_slot: slot.clone(),
                    coach_groups,
                }
            })
            .collect()
    }

    /// Core slots only, canonical order; empty slots are kept.
    pub fn coach_day(&self, assignments: &[ScheduleAssignment]) -> Vec<CoachDaySlot> {
        let mut index = self.indexer.by_time_slot(assignments);
        core_slots()
            .iter()
            .map(|slot| CoachDaySlot {
                time_slot: slot.clone(),
                clients: index.take(&slot.id).unwrap_or_default(),
            })
            .collect()
    }

    /// Slots actually used each day: core in canonical order, then special.
    /// Days without sessions get no groups.
    pub fn client_week(&self, week_days: &[WeekDay]) -> Vec<ClientWeekDay> {
        week_days
            .iter()
            .map(|day| ClientWeekDay {
                date: day.date.clone(),
                day_name: day.day_name.clone(),
                day_number: day.day_number,
                time_slot_groups: self.slot_groups_for(&day.sessions),
            })
            .collect()
    }

    fn slot_groups_for(&self, sessions: &[ScheduleAssignment]) -> Vec<TimeSlotSessions> {
        let mut present: Vec<&str> = Vec::new();
        for s in sessions {
            if !present.contains(&s.time_slot.as_str()) {
                present.push(&s.time_slot);
            }
        }

        let mut slots: Vec<TimeSlot> = core_slots()
            .iter()
            .filter(|slot| present.contains(&slot.id.as_str()))
            .cloned()
            .collect();
        let mut specials: Vec<TimeSlot> = present
            .iter()
            .filter(|id| is_special(id))
            .map(|id| resolve(id))
            .collect();
        sort_canonical(&mut specials);
        slots.extend(specials);

        slots
            .into_iter()
            .filter_map(|time_slot| {
                let sessions: Vec<Session> = sessions
                    .iter()
                    .filter(|s| s.time_slot == time_slot.id)
                    .map(|s| Session {
                        assignment: s.clone(),
                        coach: self.indexer.resolve_coach(&s.coach_id).cloned(),
                    })
                    .collect();
                (!sessions.is_empty()).then_some(TimeSlotSessions {
                    time_slot,
                    sessions,
                })
            })
            .collect()
    }

    /// Grouped day view for every date of the month. Assignments with
    /// malformed dates are ignored.
    pub fn month(&self, assignments: &[ScheduleAssignment], year: i32, month: u32) -> Vec<MonthDay> {
        CalendarView::month_days(year, month)
            .into_iter()
            .map(|date| {
                let on_day = AssignmentQuery::new(assignments).on_date(date).collect();
                MonthDay {
                    date,
                    slots: self.grouped_day(&on_day),
                }
            })
            .collect()
    }
}

pub fn grouped_day_schedule(
    assignments: &[ScheduleAssignment],
    clients: &[Client],
    coaches: &[Coach],
) -> Vec<GroupedTimeSlot> {
    ScheduleViewBuilder::new(clients, coaches).grouped_day(assignments)
}

pub fn coach_day_schedule(
    assignments: &[ScheduleAssignment],
    clients: &[Client],
) -> Vec<CoachDaySlot> {
    ScheduleViewBuilder::new(clients, &[]).coach_day(assignments)
}

pub fn client_week_schedule(week_days: &[WeekDay], coaches: &[Coach]) -> Vec<ClientWeekDay> {
    ScheduleViewBuilder::new(&[], coaches).client_week(week_days)
}

pub fn monthly_schedule(
    assignments: &[ScheduleAssignment],
    clients: &[Client],
    coaches: &[Coach],
    year: i32,
    month: u32,
) -> Vec<MonthDay> {
    ScheduleViewBuilder::new(clients, coaches).month(assignments, year, month)
}

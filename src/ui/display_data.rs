use crate::core::models::{Client, TimeSlot};
use crate::schedule::availability::DuplicateGroup;
use crate::schedule::index::CoachGroup;
use crate::schedule::views::{ClientWeekDay, CoachDaySlot, GroupedTimeSlot, MonthDay};

#[derive(Debug, Clone)]
pub struct ScheduleSection {
    pub title: String,
    pub rows: Vec<Vec<String>>, // already in slot order
}

#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder;

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// One row per booked client; a slot nobody booked still gets a row.
    pub fn grouped_day_rows(&self, slots: &[GroupedTimeSlot]) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for slot in slots {
            if slot.coach_groups.is_empty() {
                rows.push(vec![
                    slot.time_slot.label.clone(),
                    "-".into(),
                    "-".into(),
                    "-".into(),
                ]);
                continue;
            }
            for group in &slot.coach_groups {
                rows.extend(group_rows(&slot.time_slot, group));
            }
        }
        rows
    }

    pub fn coach_day_rows(&self, slots: &[CoachDaySlot]) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for slot in slots {
            if slot.clients.is_empty() {
                rows.push(vec![slot.time_slot.label.clone(), "(open)".into(), "-".into()]);
                continue;
            }
            for scheduled in &slot.clients {
                rows.push(vec![
                    slot.time_slot.label.clone(),
                    paint_client(&scheduled.client, &scheduled.client.name),
                    paint_client(&scheduled.client, scheduled.client.program.display_name()),
                ]);
            }
        }
        rows
    }

    pub fn client_week_sections(&self, days: &[ClientWeekDay]) -> Vec<ScheduleSection> {
        days.iter()
            .map(|day| {
                let rows = day
                    .time_slot_groups
                    .iter()
                    .flat_map(|group| {
                        group.sessions.iter().map(move |session| {
                            vec![
                                group.time_slot.label.clone(),
                                session
                                    .coach
                                    .as_ref()
                                    .map(|c| c.name.clone())
                                    .unwrap_or_else(|| "Unknown Coach".into()),
                                session.assignment.id.clone(),
                            ]
                        })
                    })
                    .collect();
                ScheduleSection {
                    title: format!("{} {} ({})", day.day_name, day.day_number, day.date),
                    rows,
                }
            })
            .collect()
    }

    /// Days without any session are left out.
    pub fn month_sections(&self, days: &[MonthDay]) -> Vec<ScheduleSection> {
        days.iter()
            .filter(|day| day.has_sessions())
            .map(|day| ScheduleSection {
                title: format!("DATE: {}", day.date.format("%Y-%m-%d")),
                rows: day
                    .slots
                    .iter()
                    .flat_map(|slot| {
                        slot.coach_groups
                            .iter()
                            .flat_map(|group| group_rows(&slot.time_slot, group))
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn slot_rows(&self, slots: &[TimeSlot]) -> Vec<Vec<String>> {
        slots
            .iter()
            .map(|s| {
                vec![
                    s.id.clone(),
                    s.label.clone(),
                    s.start.clone().unwrap_or_else(|| "-".into()),
                    s.end.clone().unwrap_or_else(|| "-".into()),
                    s.kind.to_string().to_uppercase(),
                ]
            })
            .collect()
    }

    pub fn duplicate_rows(&self, groups: &[DuplicateGroup]) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|g| {
                vec![
                    g.date.clone(),
                    g.time_slot.clone(),
                    g.client_id.clone(),
                    g.assignment_ids.join(", "),
                ]
            })
            .collect()
    }
}

fn group_rows(slot: &TimeSlot, group: &CoachGroup) -> Vec<Vec<String>> {
    group
        .clients
        .iter()
        .map(|scheduled| {
            vec![
                slot.label.clone(),
                group.coach_name().to_string(),
                paint_client(&scheduled.client, &scheduled.client.name),
                paint_client(&scheduled.client, scheduled.client.program.display_name()),
            ]
        })
        .collect()
}

fn paint_client(client: &Client, s: &str) -> String {
    client.program.paint(s)
}

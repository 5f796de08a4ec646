use std::collections::HashMap;

use serde::Serialize;

use crate::core::directory::{ClientDirectory, CoachDirectory};
use crate::core::models::{Client, Coach, ScheduleAssignment, TimeSlot};
use crate::schedule::time_slots::{core_slots, resolve};

/// A client booked into a slot, tagged with the assignment that put it there.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledClient {
    #[serde(flatten)]
    pub client: Client,
    pub schedule_id: String,
}

/// Clients one coach sees in one slot. `coach` is `None` when the
/// assignment's coach id matched nobody ("Unknown Coach").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachGroup {
    pub coach: Option<Coach>,
    pub clients: Vec<ScheduledClient>,
}

impl CoachGroup {
    pub fn coach_name(&self) -> &str {
        self.coach
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Unknown Coach")
    }
}

/// Coach groups of one slot, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoachGroups {
    groups: Vec<CoachGroup>,
    positions: HashMap<String, usize>,
}

impl CoachGroups {
    fn group_mut(&mut self, key: &str, coach: Option<&Coach>) -> &mut CoachGroup {
        let idx = match self.positions.get(key) {
            Some(idx) => *idx,
            None => {
                self.groups.push(CoachGroup {
                    coach: coach.cloned(),
                    clients: Vec::new(),
                });
                let idx = self.groups.len() - 1;
                self.positions.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.groups[idx]
    }

    /// Look up by the coach's primary id (or the raw id for unknown coaches).
    pub fn get(&self, coach_key: &str) -> Option<&CoachGroup> {
        self.positions.get(coach_key).map(|idx| &self.groups[*idx])
    }

    pub fn as_slice(&self) -> &[CoachGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_groups(self) -> Vec<CoachGroup> {
        self.groups
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotEntry<E> {
    pub time_slot: TimeSlot,
    pub value: E,
}

/// Per-slot buckets. Core slots are always present, in canonical order;
/// special slots follow in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotIndex<E> {
    entries: Vec<SlotEntry<E>>,
    positions: HashMap<String, usize>,
}

impl<E: Default> SlotIndex<E> {
    pub fn with_core_slots() -> Self {
        let mut index = Self {
            entries: Vec::with_capacity(core_slots().len()),
            positions: HashMap::new(),
        };
        for slot in core_slots() {
            index.push(slot.clone());
        }
        index
    }

    fn push(&mut self, time_slot: TimeSlot) -> usize {
        let idx = self.entries.len();
        self.positions.insert(time_slot.id.clone(), idx);
        self.entries.push(SlotEntry {
            time_slot,
            value: E::default(),
        });
        idx
    }

    fn entry_mut(&mut self, slot_id: &str, observer: &dyn IndexObserver) -> &mut E {
        let idx = match self.positions.get(slot_id) {
            Some(idx) => *idx,
            None => {
                observer.special_slot_created(slot_id);
                self.push(resolve(slot_id))
            }
        };
        &mut self.entries[idx].value
    }

    /// Move a slot's bucket out, leaving an empty one behind.
    pub fn take(&mut self, slot_id: &str) -> Option<E> {
        let idx = *self.positions.get(slot_id)?;
        Some(std::mem::take(&mut self.entries[idx].value))
    }
}

impl<E> SlotIndex<E> {
    pub fn get(&self, slot_id: &str) -> Option<&E> {
        self.positions.get(slot_id).map(|idx| &self.entries[*idx].value)
    }

    pub fn contains(&self, slot_id: &str) -> bool {
        self.positions.contains_key(slot_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlotEntry<E>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slot_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.time_slot.id.as_str()).collect()
    }
}

impl SlotIndex<CoachGroups> {
    /// Empty for unknown slot ids.
    pub fn groups_at(&self, slot_id: &str) -> &[CoachGroup] {
        self.get(slot_id).map(CoachGroups::as_slice).unwrap_or(&[])
    }
}

impl SlotIndex<Vec<ScheduledClient>> {
    /// Empty for unknown slot ids.
    pub fn clients_at(&self, slot_id: &str) -> &[ScheduledClient] {
        self.get(slot_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Hook for dangling references met while indexing (e.g. for logging).
pub trait IndexObserver {
    fn client_unresolved(&self, assignment: &ScheduleAssignment);
    fn coach_unresolved(&self, assignment: &ScheduleAssignment);
    fn special_slot_created(&self, slot_id: &str);
}

pub struct NoopObserver;
impl IndexObserver for NoopObserver {
    fn client_unresolved(&self, _assignment: &ScheduleAssignment) {}
    fn coach_unresolved(&self, _assignment: &ScheduleAssignment) {}
    fn special_slot_created(&self, _slot_id: &str) {}
}

/// Resolves assignment foreign keys against client/coach directories and
/// buckets them per slot.
pub struct ScheduleIndexer<'a> {
    clients: ClientDirectory<'a>,
    coaches: CoachDirectory<'a>,
    observer: &'a dyn IndexObserver,
}

impl<'a> ScheduleIndexer<'a> {
    pub fn new(clients: &'a [Client], coaches: &'a [Coach]) -> Self {
        Self {
            clients: ClientDirectory::clients(clients),
            coaches: CoachDirectory::coaches(coaches),
            observer: &NoopObserver,
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn IndexObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn resolve_coach(&self, coach_id: &str) -> Option<&'a Coach> {
        self.coaches.get(coach_id)
    }

    pub fn by_time_slot_and_coach(
        &self,
        assignments: &[ScheduleAssignment],
    ) -> SlotIndex<CoachGroups> {
        let mut index = SlotIndex::<CoachGroups>::with_core_slots();

        for assignment in assignments {
            let coach = self.coaches.get(&assignment.coach_id);
            if coach.is_none() {
                self.observer.coach_unresolved(assignment);
            }
            // Keyed on the resolved primary id so `id` and `uid` references share a group.
            let key = coach.map(|c| c.id.as_str()).unwrap_or(&assignment.coach_id);
            let group = index
                .entry_mut(&assignment.time_slot, self.observer)
                .group_mut(key, coach);

            let Some(client) = self.clients.get(&assignment.client_id) else {
                self.observer.client_unresolved(assignment);
                continue;
            };
            group.clients.push(ScheduledClient {
                client: client.clone(),
                schedule_id: assignment.id.clone(),
            });
        }

        index
    }

    pub fn by_time_slot(
        &self,
        assignments: &[ScheduleAssignment],
    ) -> SlotIndex<Vec<ScheduledClient>> {
        let mut index = SlotIndex::<Vec<ScheduledClient>>::with_core_slots();

        for assignment in assignments {
            let clients = index.entry_mut(&assignment.time_slot, self.observer);
            let Some(client) = self.clients.get(&assignment.client_id) else {
                self.observer.client_unresolved(assignment);
                continue;
            };
            clients.push(ScheduledClient {
                client: client.clone(),
                schedule_id: assignment.id.clone(),
            });
        }

        index
    }
}

pub fn index_by_time_slot_and_coach(
    assignments: &[ScheduleAssignment],
    clients: &[Client],
    coaches: &[Coach],
) -> SlotIndex<CoachGroups> {
    ScheduleIndexer::new(clients, coaches).by_time_slot_and_coach(assignments)
}

pub fn index_by_time_slot(
    assignments: &[ScheduleAssignment],
    clients: &[Client],
) -> SlotIndex<Vec<ScheduledClient>> {
    ScheduleIndexer::new(clients, &[]).by_time_slot(assignments)
}

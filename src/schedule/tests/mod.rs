mod time_slots_tests;

use std::cell::RefCell;

use crate::core::models::{Client, Coach, ScheduleAssignment};
use crate::core::types::Program;
use crate::schedule::index::IndexObserver;

fn assignment(id: &str, date: &str, slot: &str, coach: &str, client: &str) -> ScheduleAssignment {
    ScheduleAssignment::new(id, date, slot, coach, client)
}

fn alex() -> Client {
    Client::new("cl1", "Alex", Program::Limitless)
}

fn sam() -> Coach {
    Coach::new("c1", "Sam").with_uid("c1")
}

/// Records every callback as a short string.
#[derive(Default)]
struct RecordingObserver {
    events: RefCell<Vec<String>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl IndexObserver for RecordingObserver {
    fn client_unresolved(&self, assignment: &ScheduleAssignment) {
        self.events
            .borrow_mut()
            .push(format!("client:{}", assignment.client_id));
    }

    fn coach_unresolved(&self, assignment: &ScheduleAssignment) {
        self.events
            .borrow_mut()
            .push(format!("coach:{}", assignment.coach_id));
    }

    fn special_slot_created(&self, slot_id: &str) {
        self.events.borrow_mut().push(format!("slot:{slot_id}"));
    }
}

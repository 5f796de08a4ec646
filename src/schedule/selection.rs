use chrono::{Datelike, NaiveDate};

use crate::core::models::{Coach, ScheduleAssignment};

/// Filter chain over an assignment slice. Input order is preserved.
pub struct AssignmentQuery<'a> {
    items: &'a [ScheduleAssignment],
    filters: Vec<Box<dyn Fn(&ScheduleAssignment) -> bool + 'a>>,
}

impl<'a> AssignmentQuery<'a> {
    pub fn new(items: &'a [ScheduleAssignment]) -> Self {
        Self {
            items,
            filters: Vec::new(),
        }
    }

    pub fn r#where(mut self, pred: impl Fn(&ScheduleAssignment) -> bool + 'a) -> Self {
        self.filters.push(Box::new(pred));
        self
    }

    /// Records whose date string does not parse never match.
    pub fn on_date(self, date: NaiveDate) -> Self {
        self.r#where(move |a| a.date_naive() == Some(date))
    }

    pub fn in_month(self, year: i32, month: u32) -> Self {
        self.r#where(move |a| {
            a.date_naive()
                .is_some_and(|d| d.year() == year && d.month() == month)
        })
    }

    pub fn between(self, first: NaiveDate, last: NaiveDate) -> Self {
        self.r#where(move |a| a.date_naive().is_some_and(|d| first <= d && d <= last))
    }

    /// Matches either of the coach's id fields.
    pub fn for_coach(self, coach: &'a Coach) -> Self {
        self.r#where(move |a| coach.matches_id(&a.coach_id))
    }

    pub fn for_client(self, client_id: &'a str) -> Self {
        self.r#where(move |a| a.client_id == client_id)
    }

    pub fn in_slot(self, slot_id: &'a str) -> Self {
        self.r#where(move |a| a.time_slot == slot_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ScheduleAssignment> + '_ {
        self.items
            .iter()
            .filter(move |a| self.filters.iter().all(|f| f(*a)))
    }

    pub fn collect(&self) -> Vec<ScheduleAssignment> {
        self.iter().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

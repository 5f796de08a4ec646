use crate::core::context::AppContext;
use crate::core::models::{Client, Coach, ScheduleAssignment};
use crate::core::snapshot::{Snapshot, save_snapshot};
use crate::core::types::Month;
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::schedule::availability::{
    AssignmentPlanner, AssignmentRequest, AvailabilityGate, AvailabilityStatus, DuplicateGroup,
    LeaveCalendar, find_duplicates,
};
use crate::schedule::calendar_view::CalendarView;
use crate::schedule::index::IndexObserver;
use crate::schedule::selection::AssignmentQuery;
use crate::schedule::views::{
    ClientWeekDay, CoachDaySlot, GroupedTimeSlot, MonthDay, ScheduleViewBuilder,
};
use chrono::NaiveDate;

pub mod availability;
pub mod calendar_view;
pub mod index;
pub mod ordering;
pub mod selection;
pub mod time_slots;
pub mod views;
#[cfg(test)]
mod tests;

struct LoggerObserver {
    logger: Logger,
}

impl IndexObserver for LoggerObserver {
    fn client_unresolved(&self, assignment: &ScheduleAssignment) {
        self.logger.warn(
            format!(
                "Assignment {} references unknown client '{}'; skipped",
                assignment.id, assignment.client_id
            ),
            LogTarget::FileOnly,
        );
    }

    fn coach_unresolved(&self, assignment: &ScheduleAssignment) {
        self.logger.warn(
            format!(
                "Assignment {} references unknown coach '{}'; shown under Unknown Coach",
                assignment.id, assignment.coach_id
            ),
            LogTarget::FileOnly,
        );
    }

    fn special_slot_created(&self, slot_id: &str) {
        self.logger.info(
            format!("Non-core time slot '{slot_id}' found in schedule data"),
            LogTarget::FileOnly,
        );
    }
}

/// Everything the CLI asks of the schedule, over the loaded snapshot.
pub struct ScheduleManager<'a> {
    ctx: &'a mut AppContext,
    observer: LoggerObserver,
}

impl<'a> ScheduleManager<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let observer = LoggerObserver {
            logger: ctx.logger.clone(),
        };
        Self { ctx, observer }
    }

    fn builder(&self) -> ScheduleViewBuilder<'_> {
        let snapshot = &self.ctx.snapshot;
        ScheduleViewBuilder::new(&snapshot.clients, &snapshot.coaches).with_observer(&self.observer)
    }

    fn assignments(&self) -> &[ScheduleAssignment] {
        &self.ctx.snapshot.assignments
    }

    pub fn find_coach(&self, coach_id: &str) -> Result<&Coach> {
        self.ctx
            .snapshot
            .coaches
            .iter()
            .find(|c| c.matches_id(coach_id))
            .ok_or_else(|| Error::not_found("coach", coach_id))
    }

    pub fn find_client(&self, client_id: &str) -> Result<&Client> {
        self.ctx
            .snapshot
            .clients
            .iter()
            .find(|c| c.id == client_id)
            .ok_or_else(|| Error::not_found("client", client_id))
    }

    pub fn grouped_day(&self, date: NaiveDate) -> Vec<GroupedTimeSlot> {
        let on_day = AssignmentQuery::new(self.assignments())
            .on_date(date)
            .collect();
        self.ctx.logger.info(
            format!("Building grouped schedule for {date} ({} assignments)", on_day.len()),
            LogTarget::FileOnly,
        );
        self.builder().grouped_day(&on_day)
    }

    pub fn coach_day(&self, coach_id: &str, date: NaiveDate) -> Result<(Coach, Vec<CoachDaySlot>)> {
        let coach = self.find_coach(coach_id)?;
        let mine = AssignmentQuery::new(self.assignments())
            .on_date(date)
            .for_coach(coach)
            .collect();
        Ok((coach.clone(), self.builder().coach_day(&mine)))
    }

    pub fn client_week(
        &self,
        client_id: &str,
        date: NaiveDate,
    ) -> Result<(Client, Vec<ClientWeekDay>)> {
        let client = self.find_client(client_id)?;
        let dates = CalendarView::week_containing(date, self.ctx.config.week_start());
        let days = CalendarView::client_week_days(&client.id, &dates, self.assignments());
        Ok((client.clone(), self.builder().client_week(&days)))
    }

    pub fn month(&self, month: Month) -> Vec<MonthDay> {
        self.ctx.logger.info(
            format!("Building monthly schedule for {month}"),
            LogTarget::FileOnly,
        );
        let in_month = AssignmentQuery::new(self.assignments())
            .in_month(month.year, month.month)
            .collect();
        self.builder().month(&in_month, month.year, month.month)
    }

    fn gate(&self) -> LeaveCalendar {
        let snapshot = &self.ctx.snapshot;
        LeaveCalendar::for_coaches(&snapshot.availability, &snapshot.coaches)
    }

    pub fn check(
        &self,
        coach_id: &str,
        date: NaiveDate,
    ) -> Result<(Coach, AvailabilityStatus, Option<String>)> {
        let coach = self.find_coach(coach_id)?;
        let gate = self.gate();
        Ok((
            coach.clone(),
            gate.status_for(&coach.id, date),
            gate.reason_for(&coach.id, date),
        ))
    }

    /// Gate, eligibility and duplicate checks, then persist.
    pub fn assign(&mut self, mut request: AssignmentRequest) -> Result<ScheduleAssignment> {
        let coach = self.find_coach(&request.coach_id)?;
        AssignmentPlanner::require_general_population(coach)?;
        request.coach_id = coach.id.clone();
        self.find_client(&request.client_id)?;

        let gate = self.gate();
        let planned = AssignmentPlanner::new(&gate).plan(&request, self.assignments());
        let assignment = match planned {
            Ok(a) => a,
            Err(err) => {
                self.ctx
                    .logger
                    .warn(format!("Assignment rejected: {err}"), LogTarget::FileOnly);
                return Err(err);
            }
        };

        let mut staged = self.ctx.snapshot.assignments.clone();
        staged.push(assignment.clone());
        self.commit_assignments(staged)?;
        self.ctx.logger.info(
            format!("Created {assignment}"),
            LogTarget::ConsoleAndFile,
        );
        Ok(assignment)
    }

    pub fn unassign(&mut self, assignment_id: &str) -> Result<ScheduleAssignment> {
        let pos = self
            .ctx
            .snapshot
            .assignments
            .iter()
            .position(|a| a.id == assignment_id)
            .ok_or_else(|| Error::not_found("assignment", assignment_id))?;
        let mut staged = self.ctx.snapshot.assignments.clone();
        let removed = staged.remove(pos);
        self.commit_assignments(staged)?;
        self.ctx.logger.info(
            format!("Removed {removed}"),
            LogTarget::ConsoleAndFile,
        );
        Ok(removed)
    }

    /// Writes the snapshot with `assignments` swapped in, and only then
    /// replaces the in-memory list. A failed write leaves memory as loaded.
    fn commit_assignments(&mut self, assignments: Vec<ScheduleAssignment>) -> Result<()> {
        let staged = Snapshot {
            assignments,
            ..self.ctx.snapshot.clone()
        };
        save_snapshot(&staged, &self.ctx.snapshot_path)?;
        self.ctx.snapshot = staged;
        Ok(())
    }

    pub fn duplicates(&self) -> Vec<DuplicateGroup> {
        find_duplicates(self.assignments())
    }
}

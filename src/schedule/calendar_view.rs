use crate::core::models::ScheduleAssignment;
use crate::core::types::DayOfWeek;
use crate::extensions::chrono::{NaiveDateExt, WeekdayExt};
use crate::schedule::selection::AssignmentQuery;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// One day handed to the weekly view, already carrying that client's
/// sessions for the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDay {
    pub date: String,
    pub day_name: String,
    pub day_number: u32,
    pub sessions: Vec<ScheduleAssignment>,
}

pub struct CalendarView {
    start: NaiveDate,
    days: u32,
}

impl CalendarView {
    /// Default: 7 days starting at `start`. There is no "today" here; the
    /// caller resolves the date.
    pub fn starting(start: NaiveDate) -> Self {
        Self { start, days: 7 }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Ordered list of dates.
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..self.days)
            .map(|offset| self.start + Duration::days(offset as i64))
            .collect()
    }

    /// The seven days of the week holding `date`, first day `week_start`.
    pub fn week_containing(date: NaiveDate, week_start: DayOfWeek) -> Vec<NaiveDate> {
        let offset = (7 + date.weekday().num_days_from_monday()
            - week_start.to_weekday().num_days_from_monday())
            % 7;
        Self::starting(date - Duration::days(offset as i64)).days()
    }

    /// Every date of the month, empty for an invalid month.
    pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        first
            .iter_days()
            .take_while(|d| d.month() == month)
            .collect()
    }

    /// Day descriptors for one client's week.
    pub fn client_week_days(
        client_id: &str,
        dates: &[NaiveDate],
        assignments: &[ScheduleAssignment],
    ) -> Vec<WeekDay> {
        dates
            .iter()
            .map(|date| WeekDay {
                date: date.storage_key(),
                day_name: date.weekday().to_day_of_week().full_name().to_string(),
                day_number: date.day(),
                sessions: AssignmentQuery::new(assignments)
                    .for_client(client_id)
                    .on_date(*date)
                    .collect(),
            })
            .collect()
    }
}

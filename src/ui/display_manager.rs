use crate::config::Config;
use crate::core::models::{Client, Coach, TimeSlot};
use crate::core::types::Month;
use crate::schedule::availability::{AvailabilityStatus, DuplicateGroup};
use crate::schedule::views::{ClientWeekDay, CoachDaySlot, GroupedTimeSlot, MonthDay};
use crate::ui::display_data::{DisplayDataBuilder, ScheduleSection};
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;
use chrono::NaiveDate;
use std::io;
use std::io::Write;

const GROUPED_HEADERS: [&str; 4] = ["TIME", "COACH", "CLIENT", "PROGRAM"];

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
            util: WidthUtil::default(),
            data: DisplayDataBuilder::new(),
        }
    }

    fn config_rows(config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect()
    }

    /// Centered in the terminal; returns the table width.
    pub fn render_config<W: Write>(&self, config: &Config, out: &mut W) -> io::Result<usize> {
        let headers = ["ID", "KEY", "DESCRIPTION", "VALUE"];
        let rows = Self::config_rows(config);

        let table_w = self
            .printer
            .compute_table_width(&headers, &rows)
            .max(self.util.visible_width("CONFIG"));

        let pad = self.util.center_pad(table_w);
        self.printer.with_left_pad(pad).render_table(
            "Config",
            &headers,
            &rows,
            Some("No config items found."),
            Some(table_w),
            out,
        )?;
        Ok(table_w)
    }

    pub fn render_grouped_day<W: Write>(
        &self,
        date: NaiveDate,
        slots: &[GroupedTimeSlot],
        out: &mut W,
    ) -> io::Result<()> {
        let rows = self.data.grouped_day_rows(slots);
        self.printer.render_table(
            &format!("Schedule {}", date.format("%Y-%m-%d")),
            &GROUPED_HEADERS,
            &rows,
            None,
            None,
            out,
        )
    }

    pub fn render_coach_day<W: Write>(
        &self,
        coach: &Coach,
        date: NaiveDate,
        slots: &[CoachDaySlot],
        out: &mut W,
    ) -> io::Result<()> {
        let headers = ["TIME", "CLIENT", "PROGRAM"];
        let rows = self.data.coach_day_rows(slots);
        self.printer.render_table(
            &format!("{} {}", coach.name, date.format("%Y-%m-%d")),
            &headers,
            &rows,
            None,
            None,
            out,
        )
    }

    pub fn render_client_week<W: Write>(
        &self,
        client: &Client,
        days: &[ClientWeekDay],
        out: &mut W,
    ) -> io::Result<()> {
        let headers = ["TIME", "COACH", "ASSIGNMENT"];
        let sections = self.data.client_week_sections(days);
        let title = format!("Week of {} ({})", client.name, client.program.display_name());
        self.render_sections(&title, &sections, &headers, "No sessions.", out)
    }

    pub fn render_month<W: Write>(
        &self,
        month: Month,
        days: &[MonthDay],
        out: &mut W,
    ) -> io::Result<()> {
        let sections = self.data.month_sections(days);
        let title = format!("Month {month}");
        if sections.is_empty() {
            let no_rows: Vec<Vec<String>> = Vec::new();
            return self.printer.render_table(
                &title,
                &GROUPED_HEADERS,
                &no_rows,
                Some("No sessions scheduled this month."),
                None,
                out,
            );
        }
        self.render_sections(&title, &sections, &GROUPED_HEADERS, "No sessions.", out)
    }

    pub fn render_slots<W: Write>(&self, slots: &[TimeSlot], out: &mut W) -> io::Result<()> {
        let headers = ["ID", "LABEL", "START", "END", "KIND"];
        let rows = self.data.slot_rows(slots);
        self.printer
            .render_table("Time Slots", &headers, &rows, None, None, out)
    }

    pub fn render_duplicates<W: Write>(
        &self,
        groups: &[DuplicateGroup],
        out: &mut W,
    ) -> io::Result<()> {
        let headers = ["DATE", "TIME SLOT", "CLIENT", "ASSIGNMENTS"];
        let rows = self.data.duplicate_rows(groups);
        self.printer.render_table(
            "Duplicates",
            &headers,
            &rows,
            Some("No duplicate assignments."),
            None,
            out,
        )
    }

    pub fn render_availability<W: Write>(
        &self,
        coach: &Coach,
        date: NaiveDate,
        status: &AvailabilityStatus,
        reason: Option<&str>,
        out: &mut W,
    ) -> io::Result<()> {
        let headers = ["COACH", "DATE", "STATUS", "REASON"];
        let rows = vec![vec![
            coach.name.clone(),
            date.format("%Y-%m-%d").to_string(),
            status.to_string(),
            reason.unwrap_or("-").to_string(),
        ]];
        self.printer
            .render_table("Availability", &headers, &rows, None, None, out)
    }

    fn render_sections<W: Write>(
        &self,
        banner: &str,
        sections: &[ScheduleSection],
        headers: &[&str],
        empty_msg: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let max_width = self.sections_max_width(banner, sections, headers, empty_msg);
        self.printer.render_banner(banner, max_width, out)?;

        for s in sections {
            let empty = s.rows.is_empty().then_some(empty_msg);
            self.printer
                .render_table(&s.title, headers, &s.rows, empty, Some(max_width), out)?;
        }
        Ok(())
    }

    fn sections_max_width(
        &self,
        banner: &str,
        sections: &[ScheduleSection],
        headers: &[&str],
        empty_msg: &str,
    ) -> usize {
        let mut max_width = self.util.visible_width(banner);
        for s in sections {
            let table_w = self.printer.compute_table_width(headers, &s.rows);
            let title_w = self.util.visible_width(&s.title);
            let empty_w = if s.rows.is_empty() {
                self.util.visible_width(empty_msg)
            } else {
                0
            };
            max_width = max_width.max(table_w.max(title_w).max(empty_w));
        }
        max_width
    }
}

#[cfg(test)]
mod tests;

use std::io::Write;

use chrono::{Local, NaiveDate};

use crate::config::Config;
use crate::core::cli::{CliArgs, CommandKind, CommandOptions};
use crate::core::context::AppContext;
use crate::core::types::{Date, Month};
use crate::errors::{Error, Result};
use crate::logging::LogTarget;
use crate::schedule::ScheduleManager;
use crate::schedule::availability::AssignmentRequest;
use crate::schedule::time_slots::core_slots;
use crate::ui::display_manager::DisplayManager;

/// `--date`, else the configured schedule date, else today.
pub fn resolve_date(flag: Option<&str>, config: &Config) -> Result<NaiveDate> {
    match flag {
        Some(raw) => Ok(Date::try_from_str(raw)?.0),
        None => Ok(config
            .schedule_date()
            .unwrap_or_else(|| Local::now().date_naive())),
    }
}

/// Runs one parsed command, writing rendered tables to `out`.
pub fn run<W: Write>(ctx: &mut AppContext, cli: &CliArgs, out: &mut W) -> Result<()> {
    let opts = &cli.options;
    let kind = cli.command;
    let display = DisplayManager::new();
    ctx.logger
        .info(format!("Running '{kind}'"), LogTarget::FileOnly);

    match kind {
        CommandKind::Day => {
            let date = resolve_date(opts.date.as_deref(), &ctx.config)?;
            let slots = ScheduleManager::new(ctx).grouped_day(date);
            display.render_grouped_day(date, &slots, out)?;
        }
        CommandKind::Coach => {
            let coach_id = CommandOptions::require(&opts.coach, "--coach", kind)?;
            let date = resolve_date(opts.date.as_deref(), &ctx.config)?;
            let (coach, slots) = ScheduleManager::new(ctx).coach_day(coach_id, date)?;
            display.render_coach_day(&coach, date, &slots, out)?;
        }
        CommandKind::Week => {
            let client_id = CommandOptions::require(&opts.client, "--client", kind)?;
            let date = resolve_date(opts.date.as_deref(), &ctx.config)?;
            let (client, days) = ScheduleManager::new(ctx).client_week(client_id, date)?;
            display.render_client_week(&client, &days, out)?;
        }
        CommandKind::Month => {
            let month = match opts.month.as_deref() {
                Some(raw) => Month::try_from_str(raw)?,
                None => Month::of(resolve_date(None, &ctx.config)?),
            };
            let days = ScheduleManager::new(ctx).month(month);
            display.render_month(month, &days, out)?;
        }
        CommandKind::Slots => display.render_slots(core_slots(), out)?,
        CommandKind::Check => {
            let coach_id = CommandOptions::require(&opts.coach, "--coach", kind)?;
            let date = resolve_date(opts.date.as_deref(), &ctx.config)?;
            let (coach, status, reason) = ScheduleManager::new(ctx).check(coach_id, date)?;
            display.render_availability(&coach, date, &status, reason.as_deref(), out)?;
        }
        CommandKind::Assign => {
            let coach_id = CommandOptions::require(&opts.coach, "--coach", kind)?;
            let client_id = CommandOptions::require(&opts.client, "--client", kind)?;
            let slot = CommandOptions::require(&opts.slot, "--slot", kind)?;
            let request = match opts.date.as_deref() {
                Some(raw) => AssignmentRequest::parse(raw, slot, coach_id, client_id)?,
                None => {
                    let date = resolve_date(None, &ctx.config)?;
                    AssignmentRequest::new(date, slot, coach_id, client_id)
                }
            };
            ScheduleManager::new(ctx).assign(request)?;
        }
        CommandKind::Unassign => {
            let id = CommandOptions::require(&opts.id, "--id", kind)?;
            ScheduleManager::new(ctx).unassign(id)?;
        }
        CommandKind::Duplicates => {
            let groups = ScheduleManager::new(ctx).duplicates();
            display.render_duplicates(&groups, out)?;
        }
        CommandKind::Config => run_config(ctx, &opts.positional, &display, out)?,
    }
    Ok(())
}

fn run_config<W: Write>(
    ctx: &mut AppContext,
    positional: &[String],
    display: &DisplayManager,
    out: &mut W,
) -> Result<()> {
    match positional {
        [] => {
            display.render_config(&ctx.config, out)?;
        }
        [action, key, value] if action.eq_ignore_ascii_case("set") => {
            ctx.config.set(key, value)?;
            if let Some((key, old, new)) = ctx.config.take_last_change() {
                ctx.logger.info(
                    format!("Config {key} changed from '{old}' to '{new}'"),
                    LogTarget::ConsoleAndFile,
                );
            }
        }
        _ => {
            return Err(Error::Parse(format!(
                "Unexpected arguments for 'config'. Usage: {}",
                CommandKind::Config.usage()
            )));
        }
    }
    Ok(())
}

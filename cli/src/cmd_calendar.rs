// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fmt::{self, Write},
    path::PathBuf,
};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use evcal_core::{
    Event, View, events_on_day, filter_events, format_date, format_month, format_week, month_grid,
    week_dates,
};
use jiff::civil::Date;

use crate::arg::EventArgs;
use crate::util::{format_time_range, read_json, today};

const WEEKDAY_NAMES: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

#[derive(Debug, Clone)]
pub struct CmdMonth {
    pub date: Option<Date>,
    pub events: Option<PathBuf>,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the month calendar")
            .arg(EventArgs::date())
            .arg(events_arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: EventArgs::get_date(matches),
            events: matches.get_one("events").cloned(),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month...");
        let date = self.date.unwrap_or_else(today);
        let events = load_events(self.events.as_ref()).await?;
        print!("{}", render_month(date, &events)?);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdWeek {
    pub date: Option<Date>,
    pub events: Option<PathBuf>,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the week containing a date")
            .arg(EventArgs::date())
            .arg(events_arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: EventArgs::get_date(matches),
            events: matches.get_one("events").cloned(),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing week...");
        let date = self.date.unwrap_or_else(today);
        let events = load_events(self.events.as_ref()).await?;
        print!("{}", render_week(date, &events)?);
        Ok(())
    }
}

fn events_arg() -> clap::Arg {
    arg!(-e --events <EVENTS> "Path to a JSON array of events to show on the calendar")
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

async fn load_events(path: Option<&PathBuf>) -> Result<Vec<Event>, Box<dyn Error>> {
    match path {
        Some(path) => read_json(path).await,
        None => Ok(Vec::new()),
    }
}

fn render_month(date: Date, events: &[Event]) -> Result<String, fmt::Error> {
    let events: Vec<Event> = filter_events(events, "", date, View::Month)
        .into_iter()
        .cloned()
        .collect();
    let today = today();
    let is_today = |day: i8| Date::new(date.year(), date.month(), day).is_ok_and(|d| d == today);

    let mut out = String::new();
    writeln!(out, "{}", format_month(date).bold())?;
    writeln!(out, "{}", WEEKDAY_NAMES.join(" "))?;
    for week in month_grid(date) {
        let cells: Vec<String> = week
            .iter()
            .map(|slot| match *slot {
                None => "  ".to_string(),
                Some(day) if is_today(day) => format!("{day:>2}").reversed().to_string(),
                Some(day) if !events_on_day(&events, day).is_empty() => {
                    format!("{day:>2}").cyan().bold().to_string()
                }
                Some(day) => format!("{day:>2}"),
            })
            .collect();
        writeln!(out, "{}", cells.join(" ").trim_end())?;
    }

    for day in 1..=date.days_in_month() {
        for event in events_on_day(&events, day) {
            writeln!(
                out,
                "{:>2}일 {} {}",
                day,
                format_time_range(&event.form.start_time, &event.form.end_time),
                event.form.title
            )?;
        }
    }
    Ok(out)
}

fn render_week(date: Date, events: &[Event]) -> Result<String, fmt::Error> {
    let events = filter_events(events, "", date, View::Week);

    let mut out = String::new();
    writeln!(out, "{}", format_week(date).bold())?;
    for (name, day) in WEEKDAY_NAMES.iter().zip(week_dates(date)) {
        let formatted = format_date(day);
        writeln!(out, "{name} {formatted}")?;
        for event in events.iter().filter(|e| e.form.date == formatted) {
            writeln!(
                out,
                "   {} {}",
                format_time_range(&event.form.start_time, &event.form.end_time),
                event.form.title
            )?;
        }
    }
    Ok(out)
}

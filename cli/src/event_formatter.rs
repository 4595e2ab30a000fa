// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use evcal_core::{Event, EventForm, RepeatEnd, Schedule, format_minute_time, to_interval};
use serde::Serialize;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, format_time_range};

/// Anything that prints as an event row: a stored event or an unsaved form.
pub trait EventRow: Schedule + Serialize {
    fn form(&self) -> &EventForm;
}

impl EventRow for EventForm {
    fn form(&self) -> &EventForm {
        self
    }
}

impl EventRow for Event {
    fn form(&self) -> &EventForm {
        &self.form
    }
}

impl<E: EventRow> EventRow for &E {
    fn form(&self) -> &EventForm {
        (*self).form()
    }
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Date,
                EventColumn::TimeRange,
                EventColumn::Title,
                EventColumn::Repeat,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_id(mut self) -> Self {
        self.columns.insert(0, EventColumn::Id);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.columns.push(EventColumn::Location);
            self.columns.push(EventColumn::Notification);
        }
        self
    }

    pub fn format<'a, E: EventRow>(&'a self, events: &'a [E]) -> Display<'a, E> {
        Display {
            events,
            formatter: self,
        }
    }
}

impl Default for EventFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Display<'a, E: EventRow> {
    events: &'a [E],
    formatter: &'a EventFormatter,
}

impl<E: EventRow> fmt::Display for Display<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(&self.formatter.columns, self.events)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Date,
    TimeRange,
    Title,
    Repeat,
    Location,
    Notification,
}

impl<E: EventRow> TableColumn<E> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id => "ID",
            EventColumn::Date => "Date",
            EventColumn::TimeRange => "Time",
            EventColumn::Title => "Title",
            EventColumn::Repeat => "Repeat",
            EventColumn::Location => "Location",
            EventColumn::Notification => "Reminder",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a E) -> Cow<'a, str> {
        match self {
            EventColumn::Id => data.id().unwrap_or_default().into(),
            EventColumn::Date => data.date().into(),
            EventColumn::TimeRange => format_time_range(data.start_time(), data.end_time()).into(),
            EventColumn::Title => data.title().into(),
            EventColumn::Repeat => format_repeat(data.form()).into(),
            EventColumn::Location => data.form().location.as_str().into(),
            EventColumn::Notification => match data.notification_time() {
                0 => "".into(),
                min => format!("{} 전", format_minute_time(i64::from(min))).into(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &E) -> Option<Color> {
        match self {
            EventColumn::Date | EventColumn::TimeRange if !to_interval(data).is_valid() => {
                Some(Color::Red)
            }
            _ => None,
        }
    }
}

fn format_repeat(form: &EventForm) -> String {
    let repeat = &form.repeat;
    if !repeat.is_recurring() {
        return String::new();
    }

    let mut s = match repeat.interval {
        1 => repeat.kind.to_string(),
        n => format!("{} x{n}", repeat.kind),
    };
    if let Some(day) = repeat.day_of_week {
        s.push_str(&format!(" on {day}"));
    }
    match repeat.end {
        Some(RepeatEnd::ByDate { end_date }) => s.push_str(&format!(" until {end_date}")),
        Some(RepeatEnd::ByCount { end_count }) => s.push_str(&format!(" {end_count} times")),
        Some(RepeatEnd::Endless) | None => {}
    }
    s
}

#[cfg(test)]
mod tests {
    use evcal_core::{DayOfWeek, RepeatInfo, RepeatType};
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_format_repeat() {
        let form = EventForm::new("a", "2025-01-03", "09:00", "10:00");
        assert_eq!(format_repeat(&form), "");

        let repeat = RepeatInfo::new(RepeatType::Weekly, 2, RepeatEnd::ByCount { end_count: 3 })
            .with_day_of_week(DayOfWeek::Friday);
        let form = form.with_repeat(repeat);
        assert_eq!(format_repeat(&form), "weekly x2 on friday 3 times");

        let end = RepeatEnd::ByDate {
            end_date: date(2025, 6, 30),
        };
        let form = form.with_repeat(RepeatInfo::new(RepeatType::Monthly, 1, end));
        assert_eq!(format_repeat(&form), "monthly until 2025-06-30");
    }

    #[test]
    fn test_format_table() {
        colored::control::set_override(false);
        let events = vec![Event::new(
            "1",
            EventForm::new("회의", "2025-01-03", "09:00", "10:00").with_notification_time(10),
        )];
        let out = EventFormatter::new()
            .with_id()
            .with_verbose(true)
            .format(&events)
            .to_string();
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("ID  Date        Time         Title  Repeat  Location  Reminder")
        );
        assert_eq!(
            lines.next(),
            Some(" 1  2025-01-03  09:00~10:00  회의                     10분 전")
        );
    }

    #[test]
    fn test_format_json() {
        let forms = vec![EventForm::new("a", "2025-01-03", "09:00", "10:00")];
        let out = EventFormatter::new()
            .with_output_format(OutputFormat::Json)
            .format(&forms)
            .to_string();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["startTime"], "09:00");
    }
}

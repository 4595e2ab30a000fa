// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::datetime::{parse_date, week_dates};
use crate::{Event, Schedule};

/// The calendar page events are listed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum View {
    /// The Sunday-to-Saturday week of the current date.
    Week,

    /// The month of the current date.
    Month,
}

impl View {
    /// Whether `date` is shown on the page around `current`.
    pub fn contains(self, current: Date, date: Date) -> bool {
        match self {
            View::Week => week_dates(current).contains(&date),
            View::Month => current.year() == date.year() && current.month() == date.month(),
        }
    }
}

/// Events on the current page whose title, description or location contains `term`.
///
/// Matching ignores case, and an empty term keeps every event of the page. Events with a
/// malformed date are on no page.
pub fn filter_events<'a>(
    events: &'a [Event],
    term: &str,
    current: Date,
    view: View,
) -> Vec<&'a Event> {
    let term = term.to_lowercase();
    events
        .iter()
        .filter(|event| parse_date(event.date()).is_ok_and(|date| view.contains(current, date)))
        .filter(|event| {
            term.is_empty()
                || [
                    &event.form.title,
                    &event.form.description,
                    &event.form.location,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        })
        .collect()
}

/// Orders events by date, then start time, keeping the input order of ties.
pub fn sort_events_by_date(events: &mut [Event]) {
    events.sort_by(|a, b| (a.date(), a.start_time()).cmp(&(b.date(), b.start_time())));
}

/// Events falling on the given day of month, for filling one calendar cell.
pub fn events_on_day(events: &[Event], day: i8) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| parse_date(event.date()).is_ok_and(|date| date.day() == day))
        .collect()
}

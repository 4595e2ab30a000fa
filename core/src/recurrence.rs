// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

pub mod daily;
pub mod monthly;
pub mod weekly;
pub mod yearly;

use jiff::civil::Date;

use crate::datetime::parse_date;
use crate::{Config, DEFAULT_HORIZON, Error, EventForm, RepeatEnd, RepeatType};

/// Parameters of recurrence expansion that do not come from the event itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Upper bound, inclusive, for occurrences of endless repeat rules.
    pub horizon: Date,
}

impl Rules {
    /// Creates rules with the given horizon.
    pub const fn new(horizon: Date) -> Self {
        Self { horizon }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON)
    }
}

impl From<&Config> for Rules {
    fn from(config: &Config) -> Self {
        Self::new(config.horizon)
    }
}

/// One expansion ready to be persisted as a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceGroup {
    /// Group identifier stamped into every occurrence, `None` for a single event.
    pub id: Option<String>,

    /// The occurrences in date order.
    pub events: Vec<EventForm>,
}

/// Expands a form into its occurrences.
///
/// A form whose repeat type is `none` yields itself as the only element; every other type is
/// dispatched to its generator. The result is a pure function of the arguments.
pub fn expand(base: &EventForm, rules: &Rules) -> Result<Vec<EventForm>, Error> {
    tracing::debug!(kind = %base.repeat.kind, date = %base.date, "expanding event");
    match base.repeat.kind {
        RepeatType::None => Ok(vec![base.clone()]),
        RepeatType::Daily => daily::generate(base, rules),
        RepeatType::Weekly => weekly::generate(base, rules),
        RepeatType::Monthly => monthly::generate(base, rules),
        RepeatType::Yearly => yearly::generate(base, rules),
    }
}

/// Expands a form and links every occurrence with one freshly generated group id.
pub fn expand_group(base: &EventForm, rules: &Rules) -> Result<RecurrenceGroup, Error> {
    let mut events = expand(base, rules)?;
    if !base.repeat.is_recurring() {
        return Ok(RecurrenceGroup { id: None, events });
    }

    let id = uuid::Uuid::new_v4().to_string();
    for event in &mut events {
        event.repeat.id = Some(id.clone());
    }
    tracing::debug!(%id, count = events.len(), "recurrence group created");
    Ok(RecurrenceGroup {
        id: Some(id),
        events,
    })
}

/// When a generator stops.
#[derive(Debug, Clone, Copy)]
enum Limit {
    /// No occurrence after this date, inclusive.
    Until(Date),

    /// No more than this many occurrences.
    Count(usize),
}

/// The validated shape of a repeat rule, shared by all generators.
#[derive(Debug, Clone, Copy)]
struct Plan {
    start: Date,
    interval: i64,
    limit: Limit,
}

impl Plan {
    fn new(base: &EventForm, rules: &Rules) -> Result<Self, Error> {
        let repeat = &base.repeat;
        let unsupported = |reason: &str| {
            Error::UnsupportedRecurrenceRule(format!("{} rule {reason}", repeat.kind))
        };

        let limit = match repeat.end {
            None => return Err(unsupported("has no end policy")),
            Some(RepeatEnd::Endless) => Limit::Until(rules.horizon),
            Some(RepeatEnd::ByDate { end_date }) => Limit::Until(end_date),
            Some(RepeatEnd::ByCount { end_count: 0 }) => {
                return Err(unsupported("has an end count of zero"));
            }
            Some(RepeatEnd::ByCount { end_count }) => Limit::Count(end_count as usize),
        };

        if repeat.interval == 0 {
            return Err(unsupported("has an interval of zero"));
        }

        Ok(Self {
            start: parse_date(&base.date)?,
            interval: i64::from(repeat.interval),
            limit,
        })
    }

    /// Whether another occurrence may follow the `emitted` ones.
    fn wants_more(&self, emitted: usize) -> bool {
        match self.limit {
            Limit::Count(count) => emitted < count,
            Limit::Until(_) => true,
        }
    }

    /// Whether `date` is within the date bound; count limits never exclude a date.
    fn admits(&self, date: Date) -> bool {
        match self.limit {
            Limit::Until(end) => date <= end,
            Limit::Count(_) => true,
        }
    }

    /// Collects dates stepping `step` days at a time from `first`.
    fn step_days(&self, first: Date, step: i64) -> Vec<Date> {
        let mut dates = vec![first];
        let mut current = first;
        while self.wants_more(dates.len()) {
            let Some(next) = crate::datetime::add_days(current, step) else {
                tracing::warn!(%current, step, "calendar overflow, stopping expansion");
                break;
            };
            if !self.admits(next) {
                break;
            }
            dates.push(next);
            current = next;
        }
        dates
    }
}

/// Copies the base form onto every date.
fn materialize(base: &EventForm, dates: Vec<Date>) -> Vec<EventForm> {
    dates.into_iter().map(|date| base.with_date(date)).collect()
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use jiff::civil::DateTime;
use serde::Serialize;

use crate::{Event, Instant, Schedule, format_minute_time};

const SECONDS_PER_MINUTE: i64 = 60;

/// A reminder ready to be shown for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
}

/// The events whose reminder is due at `now`, in their original order.
///
/// An event is due when it starts within its lead time, strictly after `now`, and its id is not
/// in `notified`. Events with a malformed date or start time are never due.
pub fn due_events<'a>(
    events: &'a [Event],
    now: DateTime,
    notified: &HashSet<String>,
) -> Vec<&'a Event> {
    let now = Instant::from(now);
    events
        .iter()
        .filter(|event| !notified.contains(&event.id))
        .filter(|event| {
            let window = i64::from(event.notification_time()) * SECONDS_PER_MINUTE;
            now.seconds_until(&event.start())
                .is_some_and(|remaining| 0 < remaining && remaining <= window)
        })
        .collect()
}

/// Renders the reminder text, e.g. `10분 후 팀 회의 일정이 시작됩니다.`.
///
/// The remaining time is rounded up to whole minutes.
pub fn format_lead_message(event: &impl Schedule, now: DateTime) -> String {
    let minutes = Instant::from(now)
        .seconds_until(&event.start())
        .filter(|&secs| secs > 0)
        .map_or(0, |secs| (secs + SECONDS_PER_MINUTE - 1) / SECONDS_PER_MINUTE);
    format!(
        "{} 후 {} 일정이 시작됩니다.",
        format_minute_time(minutes),
        event.title()
    )
}

/// The reminders due at `now`, one per due event.
pub fn notifications(
    events: &[Event],
    now: DateTime,
    notified: &HashSet<String>,
) -> Vec<Notification> {
    due_events(events, now, notified)
        .into_iter()
        .map(|event| Notification {
            id: event.id.clone(),
            message: format_lead_message(event, now),
        })
        .collect()
}

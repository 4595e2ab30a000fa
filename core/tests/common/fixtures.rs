// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use evcal_core::{Event, EventForm, RepeatEnd, RepeatInfo, RepeatType, Rules};
use jiff::civil::Date;

/// Creates a fully populated form on the given date and time.
///
/// # Example
///
/// ```ignore
/// let form = test_form("2025-07-01", "09:00", "10:00");
/// ```
#[must_use]
pub fn test_form(date: &str, start: &str, end: &str) -> EventForm {
    let mut form = EventForm::new("팀 회의", date, start, end);
    form.description = "주간 팀 미팅".to_string();
    form.location = "회의실 A".to_string();
    form.category = "업무".to_string();
    form.notification_time = 10;
    form
}

/// Creates a stored event with the given id.
#[must_use]
pub fn test_event(id: &str, date: &str, start: &str, end: &str) -> Event {
    Event::new(id, test_form(date, start, end))
}

/// Creates a repeating form starting on `date`.
#[must_use]
pub fn test_repeat(date: &str, kind: RepeatType, interval: u32, end: RepeatEnd) -> EventForm {
    test_form(date, "09:00", "10:00").with_repeat(RepeatInfo::new(kind, interval, end))
}

/// Creates expansion rules with the given horizon.
#[must_use]
pub fn test_rules(horizon: Date) -> Rules {
    Rules::new(horizon)
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::datetime::format_date;
use crate::{Instant, RepeatInfo};

/// Accessors shared by unsaved forms and stored events.
pub trait Schedule {
    /// The persisted identifier, `None` for a form that was never saved.
    fn id(&self) -> Option<&str>;

    /// The title of the event.
    fn title(&self) -> &str;

    /// The calendar date, `YYYY-MM-DD` when well formed.
    fn date(&self) -> &str;

    /// The start time, `HH:MM` when well formed.
    fn start_time(&self) -> &str;

    /// The end time, `HH:MM` when well formed.
    fn end_time(&self) -> &str;

    /// Minutes before the start at which a reminder is due.
    fn notification_time(&self) -> u32;

    /// The start instant, or the invalid sentinel.
    fn start(&self) -> Instant {
        Instant::combine(self.date(), self.start_time())
    }

    /// The end instant, or the invalid sentinel.
    fn end(&self) -> Instant {
        Instant::combine(self.date(), self.end_time())
    }
}

impl<T: Schedule + ?Sized> Schedule for &T {
    fn id(&self) -> Option<&str> {
        (**self).id()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn date(&self) -> &str {
        (**self).date()
    }

    fn start_time(&self) -> &str {
        (**self).start_time()
    }

    fn end_time(&self) -> &str {
        (**self).end_time()
    }

    fn notification_time(&self) -> u32 {
        (**self).notification_time()
    }
}

/// The user-facing content of an event, without identity.
///
/// Dates and times are kept as the strings the user typed so that malformed input reaches the
/// overlap and notification checks as invalid instants instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub repeat: RepeatInfo,

    #[serde(default)]
    pub notification_time: u32,
}

impl EventForm {
    /// Creates a non-repeating form with empty optional fields.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            repeat: RepeatInfo::none(),
            notification_time: 0,
        }
    }

    /// Sets the repeat rule.
    pub fn with_repeat(mut self, repeat: RepeatInfo) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets the reminder lead time in minutes.
    pub fn with_notification_time(mut self, minutes: u32) -> Self {
        self.notification_time = minutes;
        self
    }

    /// A copy of this form moved to another date, every other field untouched.
    pub fn with_date(&self, date: Date) -> Self {
        Self {
            date: format_date(date),
            ..self.clone()
        }
    }
}

impl Schedule for EventForm {
    fn id(&self) -> Option<&str> {
        None
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn start_time(&self) -> &str {
        &self.start_time
    }

    fn end_time(&self) -> &str {
        &self.end_time
    }

    fn notification_time(&self) -> u32 {
        self.notification_time
    }
}

/// A persisted event: a form plus the identifier assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,

    #[serde(flatten)]
    pub form: EventForm,
}

impl Event {
    /// Wraps a form with its storage identifier.
    pub fn new(id: impl Into<String>, form: EventForm) -> Self {
        Self {
            id: id.into(),
            form,
        }
    }
}

impl Schedule for Event {
    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn title(&self) -> &str {
        &self.form.title
    }

    fn date(&self) -> &str {
        &self.form.date
    }

    fn start_time(&self) -> &str {
        &self.form.start_time
    }

    fn end_time(&self) -> &str {
        &self.form.end_time
    }

    fn notification_time(&self) -> u32 {
        self.form.notification_time
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{RepeatEnd, RepeatType};

    #[test]
    fn deserializes_event_from_camel_case_json() {
        let json = r#"{
            "id": "1",
            "title": "팀 회의",
            "date": "2025-10-15",
            "startTime": "09:00",
            "endTime": "10:00",
            "description": "주간 팀 미팅",
            "location": "회의실 A",
            "category": "업무",
            "repeat": { "type": "weekly", "interval": 1, "endType": "ENDLESS" },
            "notificationTime": 10
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, "1");
        assert_eq!(event.form.start_time, "09:00");
        assert_eq!(event.form.location, "회의실 A");
        assert_eq!(event.form.repeat.kind, RepeatType::Weekly);
        assert_eq!(event.form.repeat.end, Some(RepeatEnd::Endless));
        assert_eq!(event.notification_time(), 10);
        assert_eq!(Schedule::id(&event), Some("1"));
    }

    #[test]
    fn fills_optional_fields_with_defaults() {
        let json = r#"{"title":"a","date":"2025-10-15","startTime":"09:00","endTime":"10:00"}"#;
        let form: EventForm = serde_json::from_str(json).unwrap();
        assert_eq!(form, EventForm::new("a", "2025-10-15", "09:00", "10:00"));
        assert_eq!(Schedule::id(&form), None);
    }

    #[test]
    fn rejects_form_with_malformed_end_policy() {
        let form = |repeat: &str| {
            format!(
                r#"{{"title":"a","date":"2025-01-01","startTime":"09:00","endTime":"10:00","repeat":{repeat}}}"#
            )
        };
        let bad_date =
            form(r#"{"type":"daily","interval":1,"endType":"BY_DATE","endDate":"2025-02-30"}"#);
        assert!(serde_json::from_str::<EventForm>(&bad_date).is_err());

        let unknown = form(r#"{"type":"daily","interval":1,"endType":"SOMETIMES"}"#);
        assert!(serde_json::from_str::<EventForm>(&unknown).is_err());

        let endless = form(r#"{"type":"daily","interval":1,"endType":"ENDLESS"}"#);
        let parsed: EventForm = serde_json::from_str(&endless).unwrap();
        assert_eq!(parsed.repeat.end, Some(RepeatEnd::Endless));
    }

    #[test]
    fn keeps_malformed_dates_as_invalid_instants() {
        let form = EventForm::new("a", "2025-13-01", "09:00", "10:00");
        assert!(!form.start().is_valid());
        assert!(!form.end().is_valid());

        let form = EventForm::new("a", "2025-10-15", "09:00", "10:00");
        assert_eq!(form.start().get(), Some(date(2025, 10, 15).at(9, 0, 0, 0)));
        assert_eq!(form.end().get(), Some(date(2025, 10, 15).at(10, 0, 0, 0)));
    }

    #[test]
    fn moves_form_to_another_date() {
        let form = EventForm::new("a", "2025-01-31", "09:00", "10:00")
            .with_notification_time(10)
            .with_repeat(RepeatInfo::new(RepeatType::Monthly, 1, RepeatEnd::Endless));
        let moved = form.with_date(date(2025, 3, 31));
        assert_eq!(moved.date, "2025-03-31");
        assert_eq!(EventForm { date: form.date.clone(), ..moved }, form);
    }
}

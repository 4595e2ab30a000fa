// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use evcal_core::EventForm;

/// Asserts that the occurrences fall on exactly the expected dates, in order.
pub fn assert_dates(events: &[EventForm], expected: &[&str]) {
    let dates: Vec<_> = events.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, expected, "Occurrence dates mismatch");
}

/// Asserts that every occurrence equals the base in all fields but `date`.
///
/// # Panics
///
/// Panics if any other field differs from the base form.
pub fn assert_same_except_date(base: &EventForm, events: &[EventForm]) {
    for event in events {
        let aligned = EventForm {
            date: base.date.clone(),
            ..event.clone()
        };
        assert_eq!(&aligned, base, "Occurrence on {} differs from base", event.date);
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Span;
use jiff::civil::Date;

/// NOTE: Used for generated occurrence dates which are persisted, so it should be stable across
/// different runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";

/// 24-hour wall clock time as entered in event forms.
pub const STABLE_FORMAT_TIME: &str = "%H:%M";

/// Adds a number of days to the date, `None` once the result leaves the supported calendar range.
pub(crate) fn add_days(date: Date, days: i64) -> Option<Date> {
    Span::new()
        .try_days(days)
        .and_then(|span| date.checked_add(span))
        .ok()
}

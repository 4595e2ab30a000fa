// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of evcal: recurring event expansion, overlap detection and reminder selection.
//!
//! Every entry point is a pure function of its arguments. Nothing here keeps
//! state between calls, so the crate can be used from any number of callers
//! without synchronization.

#![warn(
    trivial_casts,
    missing_debug_implementations,
    unsafe_code,
    unused_import_braces,
    clippy::dbg_macro
)]

mod config;
mod datetime;
mod error;
mod event;
mod notification;
mod overlap;
mod recurrence;
mod repeat;
mod search;
mod validation;

pub use crate::config::{APP_NAME, Config, DEFAULT_HORIZON};
pub use crate::datetime::{
    Instant, STABLE_FORMAT_DATEONLY, STABLE_FORMAT_TIME, days_in_month, format_date,
    format_minute_time, format_month, format_week, is_date_in_range, is_leap_year, month_grid,
    parse_date, parse_time, week_dates, weekday_index,
};
pub use crate::error::Error;
pub use crate::event::{Event, EventForm, Schedule};
pub use crate::notification::{Notification, due_events, format_lead_message, notifications};
pub use crate::overlap::{TimeRange, find_overlapping, overlaps, to_interval};
pub use crate::recurrence::{
    RecurrenceGroup, Rules, daily, expand, expand_group, monthly, weekly, yearly,
};
pub use crate::repeat::{DayOfWeek, RepeatEnd, RepeatInfo, RepeatType};
pub use crate::search::{View, events_on_day, filter_events, sort_events_by_date};
pub use crate::validation::{TimeValidation, ValidationError, time_error_message, validate_form};

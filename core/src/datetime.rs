// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod calendar;
mod humanize;
mod instant;
mod util;

pub use calendar::{
    days_in_month, format_date, format_month, format_week, is_date_in_range, is_leap_year,
    month_grid, week_dates, weekday_index,
};
pub use humanize::format_minute_time;
pub use instant::{Instant, parse_date, parse_time};
pub(crate) use util::add_days;
pub use util::{STABLE_FORMAT_DATEONLY, STABLE_FORMAT_TIME};

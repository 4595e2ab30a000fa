// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Every `interval` months on the base day-of-month.

use jiff::civil::Date;

use crate::recurrence::{Plan, Rules, materialize};
use crate::{Error, EventForm};

const MONTHS_PER_YEAR: i64 = 12;

/// Generates the occurrences of a monthly repeat rule.
///
/// Months lacking the base day-of-month are skipped and do not count towards an end count.
pub fn generate(base: &EventForm, rules: &Rules) -> Result<Vec<EventForm>, Error> {
    let plan = Plan::new(base, rules)?;
    let dates = step_months(&plan, plan.interval);
    Ok(materialize(base, dates))
}

/// Collects the base day in every `step`-th month after the start month.
pub(super) fn step_months(plan: &Plan, step: i64) -> Vec<Date> {
    let start = plan.start;
    let origin = i64::from(start.year()) * MONTHS_PER_YEAR + i64::from(start.month()) - 1;

    let mut dates = vec![start];
    let mut k = 1;
    while plan.wants_more(dates.len()) {
        let index = origin + k * step;
        k += 1;

        let (Ok(year), Ok(month)) = (
            i16::try_from(index.div_euclid(MONTHS_PER_YEAR)),
            i8::try_from(index.rem_euclid(MONTHS_PER_YEAR) + 1),
        ) else {
            break;
        };
        let Ok(first) = Date::new(year, month, 1) else {
            tracing::warn!(%start, "calendar overflow, stopping expansion");
            break;
        };
        if !plan.admits(first) {
            break;
        }

        // Constructed, not added, so Jan 31 + 1 month is rejected instead of rolling into March
        match Date::new(year, month, start.day()) {
            Ok(date) if plan.admits(date) => dates.push(date),
            Ok(_) => break,
            Err(_) => tracing::debug!(year, month, day = start.day(), "skipping missing date"),
        }
    }
    dates
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Every `interval` weeks, optionally anchored on a weekday.

use crate::datetime::add_days;
use crate::recurrence::{Plan, Rules, materialize};
use crate::{Error, EventForm};

const DAYS_PER_WEEK: i64 = 7;

/// Generates the occurrences of a weekly repeat rule.
///
/// With `dayOfWeek` set, the first occurrence is the base date moved forward, zero to six days,
/// onto that weekday, and a moved first occurrence past the end of the rule leaves nothing to
/// generate. Without it the base date's own weekday is kept.
pub fn generate(base: &EventForm, rules: &Rules) -> Result<Vec<EventForm>, Error> {
    let plan = Plan::new(base, rules)?;

    let first = match base.repeat.day_of_week {
        Some(day) => {
            let current = plan.start.weekday().to_sunday_zero_offset();
            let shift = (day.index() - current).rem_euclid(7);
            match add_days(plan.start, i64::from(shift)) {
                Some(first) => first,
                None => {
                    let start = plan.start;
                    tracing::warn!(%start, %day, "no such weekday before end of calendar");
                    return Ok(Vec::new());
                }
            }
        }
        None => plan.start,
    };
    if first != plan.start && !plan.admits(first) {
        tracing::debug!(%first, "anchored weekday is past the end of the rule");
        return Ok(Vec::new());
    }

    let dates = plan.step_days(first, plan.interval * DAYS_PER_WEEK);
    Ok(materialize(base, dates))
}

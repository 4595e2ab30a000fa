// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Every `interval` years on the base month and day.

use crate::recurrence::monthly::step_months;
use crate::recurrence::{Plan, Rules, materialize};
use crate::{Error, EventForm};

const MONTHS_PER_YEAR: i64 = 12;

/// Generates the occurrences of a yearly repeat rule.
///
/// Years lacking the base date, Feb 29 outside leap years, are skipped and do not count towards an
/// end count.
pub fn generate(base: &EventForm, rules: &Rules) -> Result<Vec<EventForm>, Error> {
    let plan = Plan::new(base, rules)?;
    let dates = step_months(&plan, plan.interval * MONTHS_PER_YEAR);
    Ok(materialize(base, dates))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{RepeatEnd, RepeatInfo, RepeatType};

    fn dates(date: &str, interval: u32, end: RepeatEnd) -> Vec<String> {
        let base = EventForm::new("a", date, "09:00", "10:00")
            .with_repeat(RepeatInfo::new(RepeatType::Yearly, interval, end));
        generate(&base, &Rules::default())
            .unwrap()
            .into_iter()
            .map(|e| e.date)
            .collect()
    }

    #[test]
    fn skips_non_leap_years_for_feb_29() {
        let end = RepeatEnd::ByDate {
            end_date: date(2028, 2, 29),
        };
        let got = dates("2024-02-29", 1, end);
        assert_eq!(got, vec!["2024-02-29", "2028-02-29"]);
    }

    #[test]
    fn counts_only_leap_years() {
        let got = dates("2096-02-29", 1, RepeatEnd::ByCount { end_count: 3 });
        assert_eq!(got, vec!["2096-02-29", "2104-02-29", "2108-02-29"]);
    }

    #[test]
    fn steps_by_interval() {
        let got = dates("2020-05-05", 2, RepeatEnd::ByCount { end_count: 3 });
        assert_eq!(got, vec!["2020-05-05", "2022-05-05", "2024-05-05"]);
    }

    #[test]
    fn stops_at_horizon() {
        let got = dates("2023-06-30", 1, RepeatEnd::Endless);
        assert_eq!(got, vec!["2023-06-30", "2024-06-30", "2025-06-30"]);
    }

    #[test]
    fn terminates_when_no_later_date_exists() {
        let got = dates("9996-02-29", 1, RepeatEnd::ByCount { end_count: 2 });
        assert_eq!(got, vec!["9996-02-29"]);
    }
}

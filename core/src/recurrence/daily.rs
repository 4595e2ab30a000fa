// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Every `interval` days.

use crate::recurrence::{Plan, Rules, materialize};
use crate::{Error, EventForm};

/// Generates the occurrences of a daily repeat rule, starting on the base date.
pub fn generate(base: &EventForm, rules: &Rules) -> Result<Vec<EventForm>, Error> {
    let plan = Plan::new(base, rules)?;
    let dates = plan.step_days(plan.start, plan.interval);
    Ok(materialize(base, dates))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{RepeatEnd, RepeatInfo, RepeatType};

    fn dates(date: &str, interval: u32, end: RepeatEnd, rules: &Rules) -> Vec<String> {
        let base = EventForm::new("a", date, "09:00", "10:00")
            .with_repeat(RepeatInfo::new(RepeatType::Daily, interval, end));
        generate(&base, rules)
            .unwrap()
            .into_iter()
            .map(|e| e.date)
            .collect()
    }

    #[test]
    fn counts_consecutive_days() {
        let got = dates(
            "2025-01-01",
            1,
            RepeatEnd::ByCount { end_count: 3 },
            &Rules::default(),
        );
        assert_eq!(got, vec!["2025-01-01", "2025-01-02", "2025-01-03"]);
    }

    #[test]
    fn steps_by_interval() {
        let got = dates(
            "2025-01-01",
            2,
            RepeatEnd::ByCount { end_count: 3 },
            &Rules::default(),
        );
        assert_eq!(got, vec!["2025-01-01", "2025-01-03", "2025-01-05"]);
    }

    #[test]
    fn stops_on_end_date_inclusive() {
        let end = RepeatEnd::ByDate {
            end_date: date(2025, 1, 4),
        };
        let got = dates("2024-12-30", 1, end, &Rules::default());
        assert_eq!(
            got,
            vec![
                "2024-12-30",
                "2024-12-31",
                "2025-01-01",
                "2025-01-02",
                "2025-01-03",
                "2025-01-04"
            ]
        );
    }

    #[test]
    fn stops_at_horizon() {
        let got = dates("2025-06-28", 1, RepeatEnd::Endless, &Rules::default());
        assert_eq!(got, vec!["2025-06-28", "2025-06-29", "2025-06-30"]);

        let rules = Rules::new(date(2025, 7, 1));
        let got = dates("2025-06-28", 3, RepeatEnd::Endless, &rules);
        assert_eq!(got, vec!["2025-06-28", "2025-07-01"]);
    }

    #[test]
    fn always_emits_base_date() {
        let got = dates("2025-07-01", 1, RepeatEnd::Endless, &Rules::default());
        assert_eq!(got, vec!["2025-07-01"]);
    }

    #[test]
    fn stops_at_end_of_calendar() {
        let got = dates(
            "9999-12-30",
            1,
            RepeatEnd::ByCount { end_count: 5 },
            &Rules::default(),
        );
        assert_eq!(got, vec!["9999-12-30", "9999-12-31"]);
    }
}

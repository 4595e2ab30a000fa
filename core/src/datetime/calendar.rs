// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::Date;

use crate::datetime::util::STABLE_FORMAT_DATEONLY;
use crate::{DayOfWeek, Error};

/// Whether the year is a leap year in the Gregorian calendar.
pub const fn is_leap_year(year: i16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the 1-indexed `month` of `year`, or `None` if the month is not in 1..=12.
pub const fn days_in_month(year: i16, month: i8) -> Option<i8> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Maps a weekday name to its index, Sunday being 0 and Saturday 6.
pub fn weekday_index(name: &str) -> Result<i8, Error> {
    name.parse::<DayOfWeek>()
        .map(DayOfWeek::index)
        .map_err(|_| Error::InvalidWeekday(name.to_owned()))
}

/// The Sunday-to-Saturday week containing `date`.
pub fn week_dates(date: Date) -> [Date; 7] {
    let offset = date.weekday().to_sunday_zero_offset();
    let sunday = date.saturating_sub(i64::from(offset).days());
    std::array::from_fn(|i| sunday.saturating_add((i as i64).days()))
}

/// The month containing `date` as Sunday-first week rows.
///
/// Slots before the first and after the last day of the month are `None`.
pub fn month_grid(date: Date) -> Vec<[Option<i8>; 7]> {
    let offset = date.first_of_month().weekday().to_sunday_zero_offset();
    let last = date.days_in_month();

    let mut weeks = Vec::with_capacity(6);
    let mut week = [None; 7];
    for day in 1..=last {
        let index = ((offset + day - 1) % 7) as usize;
        week[index] = Some(day);
        if index == 6 || day == last {
            weeks.push(week);
            week = [None; 7];
        }
    }
    weeks
}

/// Formats the date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.strftime(STABLE_FORMAT_DATEONLY).to_string()
}

/// Formats the month of the date, e.g. `2025년 7월`.
pub fn format_month(date: Date) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Formats the week of the date, e.g. `2025년 2월 2주`.
///
/// A week belongs to the month of its Thursday, and the first week of a month is the one holding
/// that month's first Thursday.
pub fn format_week(date: Date) -> String {
    let to_thursday = 4 - date.weekday().to_sunday_zero_offset();
    let thursday = date.saturating_add(i64::from(to_thursday).days());

    let first = thursday.first_of_month();
    let first_thursday = 1 + (4 - first.weekday().to_sunday_zero_offset() + 7) % 7;
    let week = (thursday.day() - first_thursday) / 7 + 1;

    format!("{}년 {}월 {}주", thursday.year(), thursday.month(), week)
}

/// Whether `date` lies within `start..=end`.
pub fn is_date_in_range(date: Date, start: Date, end: Date) -> bool {
    start <= date && date <= end
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn counts_days_in_month() {
        assert_eq!(days_in_month(2025, 1), Some(31));
        assert_eq!(days_in_month(2025, 4), Some(30));
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2100, 2), Some(28));
        assert_eq!(days_in_month(2025, 2), Some(28));
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
        assert_eq!(days_in_month(2024, -1), None);
    }

    #[test]
    fn days_in_month_agrees_with_calendar() {
        for year in 1890..=2110 {
            for month in 1..=12 {
                let expected = date(year, month, 1).days_in_month();
                assert_eq!(days_in_month(year, month), Some(expected), "{year}-{month}");
            }
            let feb = days_in_month(year, 2);
            assert_eq!(feb, Some(if is_leap_year(year) { 29 } else { 28 }));
        }
    }

    #[test]
    fn maps_weekday_names() {
        assert_eq!(weekday_index("sunday"), Ok(0));
        assert_eq!(weekday_index("wednesday"), Ok(3));
        assert_eq!(weekday_index("saturday"), Ok(6));
        assert_eq!(
            weekday_index("someday"),
            Err(Error::InvalidWeekday("someday".to_string()))
        );
    }

    #[test]
    fn returns_week_of_midweek_date() {
        let week = week_dates(date(2024, 10, 2));
        assert_eq!(week[0], date(2024, 9, 29));
        assert_eq!(week[3], date(2024, 10, 2));
        assert_eq!(week[6], date(2024, 10, 5));
    }

    #[test]
    fn returns_week_across_year_end() {
        let week = week_dates(date(2025, 1, 1));
        assert_eq!(week[0], date(2024, 12, 29));
        assert_eq!(week[3], date(2025, 1, 1));
        assert_eq!(week[6], date(2025, 1, 4));
    }

    #[test]
    fn week_is_consecutive_and_contains_date() {
        let mut d = date(2023, 12, 1);
        while d < date(2025, 3, 1) {
            let week = week_dates(d);
            assert!(week.contains(&d));
            assert_eq!(week[0].weekday(), jiff::civil::Weekday::Sunday);
            for pair in week.windows(2) {
                assert_eq!(pair[0].tomorrow().unwrap(), pair[1]);
            }
            d = d.tomorrow().unwrap();
        }
    }

    #[test]
    fn builds_month_grid() {
        let weeks = month_grid(date(2024, 7, 1));
        assert_eq!(
            weeks,
            vec![
                [None, Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)],
                [Some(7), Some(8), Some(9), Some(10), Some(11), Some(12), Some(13)],
                [Some(14), Some(15), Some(16), Some(17), Some(18), Some(19), Some(20)],
                [Some(21), Some(22), Some(23), Some(24), Some(25), Some(26), Some(27)],
                [Some(28), Some(29), Some(30), Some(31), None, None, None],
            ]
        );
    }

    #[test]
    fn builds_month_grid_starting_on_sunday() {
        // 2026-02 starts on a Sunday and spans exactly four rows
        let weeks = month_grid(date(2026, 2, 14));
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0][0], Some(1));
        assert_eq!(weeks[3][6], Some(28));
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_date(date(2025, 1, 5)), "2025-01-05");
        assert_eq!(format_month(date(2025, 7, 10)), "2025년 7월");
    }

    #[test]
    fn formats_week_of_month() {
        assert_eq!(format_week(date(2025, 2, 13)), "2025년 2월 2주");
        assert_eq!(format_week(date(2025, 2, 20)), "2025년 2월 3주");
        assert_eq!(format_week(date(2025, 2, 1)), "2025년 1월 5주");
        assert_eq!(format_week(date(2025, 2, 6)), "2025년 2월 1주");
        assert_eq!(format_week(date(2025, 3, 1)), "2025년 2월 4주");
        assert_eq!(format_week(date(2024, 12, 29)), "2025년 1월 1주");
        assert_eq!(format_week(date(2025, 1, 5)), "2025년 1월 2주");
        assert_eq!(format_week(date(2024, 2, 29)), "2024년 2월 5주");
    }

    #[test]
    fn checks_inclusive_range() {
        let start = date(2024, 7, 1);
        let end = date(2024, 7, 31);
        assert!(is_date_in_range(date(2024, 7, 1), start, end));
        assert!(is_date_in_range(date(2024, 7, 31), start, end));
        assert!(!is_date_in_range(date(2024, 6, 30), start, end));
        assert!(!is_date_in_range(date(2024, 8, 1), start, end));
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use jiff::civil::{Date, DateTime, Time};
use regex::Regex;

use crate::Error;

/// A naive local date and time, or the invalid sentinel produced by malformed input.
///
/// The sentinel is unordered: every comparison involving it is false, so an event with a broken
/// date or time never matches a range predicate and never aborts a batch.
#[derive(Debug, Clone, Copy)]
pub struct Instant(Option<DateTime>);

impl Instant {
    /// The sentinel for a date or time that failed to parse.
    pub const INVALID: Self = Self(None);

    /// Combines a `YYYY-MM-DD` date and an `HH:MM` time, yielding [`Instant::INVALID`] if either
    /// fails strict validation.
    pub fn combine(date: &str, time: &str) -> Self {
        match (parse_date(date), parse_time(time)) {
            (Ok(date), Ok(time)) => Self(Some(date.to_datetime(time))),
            _ => Self::INVALID,
        }
    }

    /// Whether this holds a real date and time.
    pub const fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The date and time, if valid.
    pub const fn get(&self) -> Option<DateTime> {
        self.0
    }

    /// Whole seconds from `self` until `later`, `None` if either side is invalid.
    pub fn seconds_until(&self, later: &Instant) -> Option<i64> {
        match (self.0, later.0) {
            (Some(a), Some(b)) => Some(a.duration_until(b).as_secs()),
            _ => None,
        }
    }
}

impl From<DateTime> for Instant {
    fn from(dt: DateTime) -> Self {
        Self(Some(dt))
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.strftime("%Y-%m-%dT%H:%M")),
            None => write!(f, "Invalid Date"),
        }
    }
}

/// Parses a strict `YYYY-MM-DD` string naming a real calendar date.
pub fn parse_date(s: &str) -> Result<Date, Error> {
    const RE: &str = r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let invalid = || Error::InvalidDate(s.to_owned());
    let captures = re.captures(s).ok_or_else(invalid)?;
    let year: i16 = captures[1].parse().map_err(|_| invalid())?;
    let month: i8 = captures[2].parse().map_err(|_| invalid())?;
    let day: i8 = captures[3].parse().map_err(|_| invalid())?;
    Date::new(year, month, day).map_err(|_| invalid())
}

/// Parses a strict 24-hour `HH:MM` string.
pub fn parse_time(s: &str) -> Result<Time, Error> {
    const RE: &str = r"^([0-9]{2}):([0-9]{2})$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let invalid = || Error::InvalidTime(s.to_owned());
    let captures = re.captures(s).ok_or_else(invalid)?;
    let hour: i8 = captures[1].parse().map_err(|_| invalid())?;
    let minute: i8 = captures[2].parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Time::new(hour, minute, 0, 0).map_err(|_| invalid())
}

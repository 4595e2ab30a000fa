// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::civil::{Date, Weekday};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Repeat rule of an event form.
///
/// On the wire the end policy shares the object with the other fields, tagged by `endType`:
///
/// ```json
/// { "type": "weekly", "interval": 1, "dayOfWeek": "friday", "endType": "BY_COUNT", "endCount": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawRepeatInfo")]
pub struct RepeatInfo {
    /// Recurrence-group identifier shared by every occurrence of one expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The unit of repetition.
    #[serde(rename = "type")]
    pub kind: RepeatType,

    /// Step size in units of `kind`.
    pub interval: u32,

    /// Weekday weekly occurrences are anchored on; the base date's weekday when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<DayOfWeek>,

    /// When the repetition stops, absent for non-repeating events.
    #[serde(flatten)]
    pub end: Option<RepeatEnd>,
}

impl RepeatInfo {
    /// A rule for a single, non-repeating event.
    pub const fn none() -> Self {
        Self {
            id: None,
            kind: RepeatType::None,
            interval: 1,
            day_of_week: None,
            end: None,
        }
    }

    /// A repeating rule.
    pub const fn new(kind: RepeatType, interval: u32, end: RepeatEnd) -> Self {
        Self {
            id: None,
            kind,
            interval,
            day_of_week: None,
            end: Some(end),
        }
    }

    /// Anchors weekly occurrences on the given weekday.
    pub const fn with_day_of_week(mut self, day: DayOfWeek) -> Self {
        self.day_of_week = Some(day);
        self
    }

    /// Whether the rule expands into more than one occurrence.
    pub const fn is_recurring(&self) -> bool {
        !matches!(self.kind, RepeatType::None)
    }
}

impl Default for RepeatInfo {
    fn default() -> Self {
        Self::none()
    }
}

/// Wire shape of [`RepeatInfo`] with the end policy fields spelled out, so a malformed policy is
/// an error instead of a missing one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRepeatInfo {
    #[serde(default)]
    id: Option<String>,

    #[serde(rename = "type")]
    kind: RepeatType,

    interval: u32,

    #[serde(default)]
    day_of_week: Option<DayOfWeek>,

    #[serde(default)]
    end_type: Option<EndType>,

    #[serde(default)]
    end_date: Option<Date>,

    #[serde(default)]
    end_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum EndType {
    Endless,
    ByDate,
    ByCount,
}

impl TryFrom<RawRepeatInfo> for RepeatInfo {
    type Error = Error;

    fn try_from(raw: RawRepeatInfo) -> Result<Self, Self::Error> {
        let missing = |field: &str| {
            Error::UnsupportedRecurrenceRule(format!("{} rule lacks {field}", raw.kind))
        };
        let end = match raw.end_type {
            None => None,
            Some(EndType::Endless) => Some(RepeatEnd::Endless),
            Some(EndType::ByDate) => Some(RepeatEnd::ByDate {
                end_date: raw.end_date.ok_or_else(|| missing("endDate"))?,
            }),
            Some(EndType::ByCount) => Some(RepeatEnd::ByCount {
                end_count: raw.end_count.ok_or_else(|| missing("endCount"))?,
            }),
        };

        Ok(Self {
            id: raw.id,
            kind: raw.kind,
            interval: raw.interval,
            day_of_week: raw.day_of_week,
            end,
        })
    }
}

/// The termination policy of a repeat rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "endType")]
pub enum RepeatEnd {
    /// Repeat until the configured generation horizon.
    #[serde(rename = "ENDLESS")]
    Endless,

    /// Repeat while the occurrence date is on or before `end_date`.
    #[serde(rename = "BY_DATE", rename_all = "camelCase")]
    ByDate {
        /// Inclusive upper bound.
        end_date: Date,
    },

    /// Repeat until `end_count` occurrences, the first included, have been produced.
    #[serde(rename = "BY_COUNT", rename_all = "camelCase")]
    ByCount {
        /// Total number of occurrences.
        end_count: u32,
    },
}

/// The unit of repetition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    /// A single event.
    #[default]
    None,

    /// Every `interval` days.
    Daily,

    /// Every `interval` weeks.
    Weekly,

    /// Every `interval` months, on the day-of-month of the base date.
    Monthly,

    /// Every `interval` years, on the month and day of the base date.
    Yearly,
}

const TYPE_NONE: &str = "none";
const TYPE_DAILY: &str = "daily";
const TYPE_WEEKLY: &str = "weekly";
const TYPE_MONTHLY: &str = "monthly";
const TYPE_YEARLY: &str = "yearly";

impl AsRef<str> for RepeatType {
    fn as_ref(&self) -> &str {
        match self {
            RepeatType::None => TYPE_NONE,
            RepeatType::Daily => TYPE_DAILY,
            RepeatType::Weekly => TYPE_WEEKLY,
            RepeatType::Monthly => TYPE_MONTHLY,
            RepeatType::Yearly => TYPE_YEARLY,
        }
    }
}

impl Display for RepeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for RepeatType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            TYPE_NONE => Ok(RepeatType::None),
            TYPE_DAILY => Ok(RepeatType::Daily),
            TYPE_WEEKLY => Ok(RepeatType::Weekly),
            TYPE_MONTHLY => Ok(RepeatType::Monthly),
            TYPE_YEARLY => Ok(RepeatType::Yearly),
            _ => Err(Error::UnsupportedRecurrenceRule(format!(
                "unknown repeat type '{value}'"
            ))),
        }
    }
}

/// A named day of the week.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Index of the weekday, Sunday being 0 and Saturday 6.
    pub fn index(self) -> i8 {
        Weekday::from(self).to_sunday_zero_offset()
    }
}

impl From<DayOfWeek> for Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Sunday => Weekday::Sunday,
            DayOfWeek::Monday => Weekday::Monday,
            DayOfWeek::Tuesday => Weekday::Tuesday,
            DayOfWeek::Wednesday => Weekday::Wednesday,
            DayOfWeek::Thursday => Weekday::Thursday,
            DayOfWeek::Friday => Weekday::Friday,
            DayOfWeek::Saturday => Weekday::Saturday,
        }
    }
}

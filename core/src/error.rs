// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised by the scheduling core.
///
/// Malformed dates and times coming from user input are usually carried as
/// [`Instant`](crate::Instant) sentinels instead; these variants only surface
/// from the explicit parse functions and from recurrence expansion.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Date string is not a real `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Time string is not a valid 24-hour `HH:MM` time.
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    /// Weekday name outside `sunday`..`saturday`.
    #[error("Invalid weekday '{0}'")]
    InvalidWeekday(String),

    /// Repeat rule whose type or end policy cannot be expanded.
    #[error("Unsupported recurrence rule: {0}")]
    UnsupportedRecurrenceRule(String),
}

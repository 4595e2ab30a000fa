// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::EventForm;
use crate::datetime::parse_time;

const START_TIME_ERROR: &str = "시작 시간은 종료 시간보다 빨라야 합니다.";
const END_TIME_ERROR: &str = "종료 시간은 시작 시간보다 늦어야 합니다.";

/// Messages to show beside the time inputs of an event form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeValidation {
    pub start_time_error: Option<&'static str>,
    pub end_time_error: Option<&'static str>,
}

impl TimeValidation {
    /// Whether either input has an error.
    pub const fn has_error(&self) -> bool {
        self.start_time_error.is_some() || self.end_time_error.is_some()
    }
}

/// Checks that the start time is before the end time.
///
/// Only well-formed times are compared; an empty or partial input has no error yet.
pub fn time_error_message(start: &str, end: &str) -> TimeValidation {
    match (parse_time(start), parse_time(end)) {
        (Ok(start), Ok(end)) if start >= end => TimeValidation {
            start_time_error: Some(START_TIME_ERROR),
            end_time_error: Some(END_TIME_ERROR),
        },
        _ => TimeValidation::default(),
    }
}

/// Why an event form cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title, date, start time or end time is empty.
    #[error("필수 정보를 모두 입력해주세요.")]
    MissingField,

    /// The start time is not before the end time.
    #[error("시간 설정을 확인해주세요.")]
    InvalidTimeRange,
}

/// Checks that a form may be submitted.
pub fn validate_form(form: &EventForm) -> Result<(), ValidationError> {
    let required = [&form.title, &form.date, &form.start_time, &form.end_time];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ValidationError::MissingField);
    }

    if time_error_message(&form.start_time, &form.end_time).has_error() {
        return Err(ValidationError::InvalidTimeRange);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_start_not_before_end() {
        for (start, end) in [("10:00", "09:00"), ("10:00", "10:00")] {
            let got = time_error_message(start, end);
            assert_eq!(got.start_time_error, Some(START_TIME_ERROR));
            assert_eq!(got.end_time_error, Some(END_TIME_ERROR));
        }
    }

    #[test]
    fn accepts_ordered_or_incomplete_times() {
        for (start, end) in [("09:00", "10:00"), ("", "10:00"), ("10:00", ""), ("1", "0")] {
            assert!(!time_error_message(start, end).has_error(), "{start}-{end}");
        }
    }

    #[test]
    fn validates_form() {
        let form = EventForm::new("a", "2025-10-15", "09:00", "10:00");
        assert_eq!(validate_form(&form), Ok(()));

        let missing = EventForm::new(" ", "2025-10-15", "09:00", "10:00");
        assert_eq!(validate_form(&missing), Err(ValidationError::MissingField));

        let reversed = EventForm::new("a", "2025-10-15", "11:00", "10:00");
        assert_eq!(
            validate_form(&reversed),
            Err(ValidationError::InvalidTimeRange)
        );
        assert_eq!(
            ValidationError::InvalidTimeRange.to_string(),
            "시간 설정을 확인해주세요."
        );
    }
}

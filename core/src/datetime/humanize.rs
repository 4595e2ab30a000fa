// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Renders a positive number of minutes as Korean day/hour/minute text, e.g. `1일 2시간 5분`.
///
/// Zero components are omitted, and non-positive input yields `Invalid Minutes`.
pub fn format_minute_time(min: i64) -> String {
    if min <= 0 {
        return "Invalid Minutes".to_string();
    }

    if min >= MINUTES_PER_DAY {
        let days = min / MINUTES_PER_DAY;
        let hours = min % MINUTES_PER_DAY / MINUTES_PER_HOUR;
        let minutes = min % MINUTES_PER_HOUR;
        return match (hours, minutes) {
            (0, 0) => format!("{days}일"),
            (_, 0) => format!("{days}일 {hours}시간"),
            (0, _) => format!("{days}일 {minutes}분"),
            (_, _) => format!("{days}일 {hours}시간 {minutes}분"),
        };
    }

    if min >= MINUTES_PER_HOUR {
        let hours = min / MINUTES_PER_HOUR;
        let minutes = min % MINUTES_PER_HOUR;
        return match minutes {
            0 => format!("{hours}시간"),
            _ => format!("{hours}시간 {minutes}분"),
        };
    }

    format!("{min}분")
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Event, Instant, Schedule};

/// The span an event occupies on its day, either end possibly invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: Instant,
    pub end: Instant,
}

impl TimeRange {
    /// Whether both ends are real instants.
    pub const fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }
}

/// Combines the date with the start and end times of an event.
///
/// A malformed date invalidates both ends, a malformed time only its own end.
pub fn to_interval(event: &impl Schedule) -> TimeRange {
    TimeRange {
        start: event.start(),
        end: event.end(),
    }
}

/// Whether two events overlap as half-open intervals on the same calendar date.
///
/// Touching boundaries do not overlap, and neither does anything with an invalid end.
pub fn overlaps(a: &impl Schedule, b: &impl Schedule) -> bool {
    if a.date() != b.date() {
        return false;
    }

    let a = to_interval(a);
    let b = to_interval(b);
    a.start < b.end && b.start < a.end
}

/// The existing events the candidate overlaps, in their original order.
///
/// An event sharing the candidate's id is the candidate itself and is never reported.
pub fn find_overlapping<'a>(candidate: &impl Schedule, existing: &'a [Event]) -> Vec<&'a Event> {
    let found: Vec<_> = existing
        .iter()
        .filter(|event| candidate.id() != Some(event.id.as_str()))
        .filter(|event| overlaps(candidate, *event))
        .collect();

    tracing::debug!(
        title = candidate.title(),
        count = found.len(),
        "overlap check finished"
    );
    found
}

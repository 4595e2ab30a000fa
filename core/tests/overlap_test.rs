// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Overlap detection integration tests.

mod common;

use common::{test_event, test_form};
use evcal_core::{find_overlapping, overlaps, to_interval};

#[test]
fn overlap_is_symmetric() {
    let times = [
        ("09:00", "10:00"),
        ("09:30", "10:30"),
        ("10:00", "11:00"),
        ("08:00", "12:00"),
        ("10:30", "10:45"),
        ("xx:00", "10:45"),
    ];
    for (a_start, a_end) in times {
        for (b_start, b_end) in times {
            let a = test_form("2025-07-01", a_start, a_end);
            let b = test_form("2025-07-01", b_start, b_end);
            assert_eq!(
                overlaps(&a, &b),
                overlaps(&b, &a),
                "{a_start}-{a_end} vs {b_start}-{b_end}"
            );
        }
    }
}

#[test]
fn boundary_touching_is_not_overlap() {
    let a = test_form("2025-07-01", "09:00", "10:00");
    let b = test_form("2025-07-01", "10:00", "11:00");
    assert!(!overlaps(&a, &b));
}

#[test]
fn different_dates_never_overlap() {
    let a = test_form("2025-07-01", "00:00", "23:59");
    let b = test_form("2025-07-02", "00:00", "23:59");
    assert!(!overlaps(&a, &b));
}

#[test]
fn excludes_candidate_itself() {
    let existing = vec![
        test_event("1", "2025-07-01", "09:00", "10:00"),
        test_event("2", "2025-07-01", "09:00", "10:00"),
    ];
    let found = find_overlapping(&existing[0], &existing);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "2");
}

#[test]
fn keeps_working_over_invalid_events() {
    let existing = vec![
        test_event("1", "2025-13-01", "09:00", "10:00"),
        test_event("2", "2025-07-01", "9:00", "10:00"),
        test_event("3", "2025-07-01", "09:30", "10:30"),
    ];
    assert!(!to_interval(&existing[0]).is_valid());
    assert!(!to_interval(&existing[1]).start.is_valid());

    let candidate = test_form("2025-07-01", "09:00", "10:00");
    let ids: Vec<_> = find_overlapping(&candidate, &existing)
        .into_iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, vec!["3"]);
}

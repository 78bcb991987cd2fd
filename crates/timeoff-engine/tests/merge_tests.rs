//! Tests for pairwise range merging.
//!
//! January 2024 starts on a Monday: the 6th/7th, 13th/14th and 20th/21st are
//! weekends.

use chrono::NaiveDate;
use timeoff_engine::{build_range, merge, DayOffRange, DayOffType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn range(kind: DayOffType, start: NaiveDate, end: NaiveDate, name: &str) -> DayOffRange {
    build_range(kind, start, end, Some(name.to_string())).unwrap()
}

fn kinds(range: &DayOffRange) -> Vec<DayOffType> {
    range.days().iter().map(|d| d.kind()).collect()
}

// ── Disjoint ranges ─────────────────────────────────────────────────────────

#[test]
fn three_day_gap_never_merges() {
    // Tue 9th, and Mon 15th padded back to Sat 13th: 10th-12th uncovered.
    let a = range(DayOffType::Vacation, date(2024, 1, 9), date(2024, 1, 9), "a");
    let b = range(DayOffType::Vacation, date(2024, 1, 15), date(2024, 1, 15), "b");
    assert_eq!(b.start(), date(2024, 1, 13));

    let merged = merge(a.clone(), b.clone());
    assert_eq!(merged, vec![a.clone(), b.clone()]);

    let swapped = merge(b.clone(), a.clone());
    assert_eq!(swapped, vec![a, b], "output is ordered by start");
}

#[test]
fn single_uncovered_day_keeps_ranges_apart() {
    let a = range(DayOffType::Vacation, date(2024, 1, 9), date(2024, 1, 9), "a");
    let b = range(DayOffType::Vacation, date(2024, 1, 11), date(2024, 1, 11), "b");

    let merged = merge(a, b);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].start(), date(2024, 1, 9));
    assert_eq!(merged[1].start(), date(2024, 1, 11));
}

// ── Adjacent ranges ─────────────────────────────────────────────────────────

#[test]
fn adjacent_ranges_merge() {
    let a = range(DayOffType::Vacation, date(2024, 1, 9), date(2024, 1, 9), "a");
    let b = range(DayOffType::SickLeave, date(2024, 1, 10), date(2024, 1, 10), "b");

    let merged = merge(a, b);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start(), date(2024, 1, 9));
    assert_eq!(merged[0].end(), date(2024, 1, 10));
    assert_eq!(
        kinds(&merged[0]),
        vec![DayOffType::Vacation, DayOffType::SickLeave]
    );
    assert_eq!(merged[0].used_days(), 2);
}

#[test]
fn holiday_followed_by_ski_trip() {
    let holiday = range(DayOffType::Holiday, date(2024, 1, 9), date(2024, 1, 9), "Founders Day");
    let trip = range(DayOffType::Vacation, date(2024, 1, 10), date(2024, 1, 11), "Ski trip");

    let merged = merge(holiday, trip);

    assert_eq!(merged.len(), 1);
    let merged = &merged[0];
    assert_eq!(merged.start(), date(2024, 1, 9));
    assert_eq!(merged.end(), date(2024, 1, 11));
    assert_eq!(merged.total_days(), 3);
    assert_eq!(merged.used_days(), 2);
    assert_eq!(merged.name(), Some("Ski trip"), "longer range names the result");
}

// ── Overlapping ranges ──────────────────────────────────────────────────────

#[test]
fn overlap_upgrades_to_higher_rank() {
    let offsite = range(DayOffType::Holiday, date(2024, 1, 9), date(2024, 1, 11), "Offsite");
    let trip = range(DayOffType::Vacation, date(2024, 1, 10), date(2024, 1, 10), "Trip");

    let merged = merge(offsite, trip);

    assert_eq!(merged.len(), 1);
    assert_eq!(
        kinds(&merged[0]),
        vec![DayOffType::Holiday, DayOffType::Vacation, DayOffType::Holiday]
    );
    assert_eq!(merged[0].used_days(), 1);
    assert_eq!(merged[0].name(), Some("Offsite"));
}

#[test]
fn overlap_never_downgrades() {
    let trip = range(DayOffType::Vacation, date(2024, 1, 9), date(2024, 1, 10), "Trip");
    let holiday = range(DayOffType::Holiday, date(2024, 1, 10), date(2024, 1, 10), "Holiday");

    let merged = merge(trip, holiday);

    assert_eq!(
        kinds(&merged[0]),
        vec![DayOffType::Vacation, DayOffType::Vacation]
    );
}

#[test]
fn both_padded_into_same_weekend() {
    // Fri 12th pads forward to Sun 14th; Mon 15th pads back to Sat 13th.
    let friday = range(DayOffType::Vacation, date(2024, 1, 12), date(2024, 1, 12), "Friday");
    let monday = range(DayOffType::SickLeave, date(2024, 1, 15), date(2024, 1, 15), "Monday");

    let merged = merge(friday, monday);

    assert_eq!(merged.len(), 1);
    let merged = &merged[0];
    assert_eq!(merged.start(), date(2024, 1, 12));
    assert_eq!(merged.end(), date(2024, 1, 15));
    assert_eq!(
        kinds(merged),
        vec![
            DayOffType::Vacation,
            DayOffType::Weekend,
            DayOffType::Weekend,
            DayOffType::SickLeave,
        ]
    );
    assert_eq!(merged.used_days(), 2);
    assert_eq!(merged.name(), Some("Friday"), "equal lengths keep the first argument's name");
}

#[test]
fn contained_range_keeps_outer_tail() {
    // Tue 9th..Fri 12th pads to Sun 14th; the sick day sits inside it.
    let trip = range(DayOffType::Vacation, date(2024, 1, 9), date(2024, 1, 12), "Trip");
    let sick = range(DayOffType::SickLeave, date(2024, 1, 10), date(2024, 1, 10), "Flu");

    let merged = merge(trip.clone(), sick);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start(), trip.start());
    assert_eq!(merged[0].end(), trip.end());
    assert_eq!(merged[0].total_days(), trip.total_days());
    assert_eq!(kinds(&merged[0]), kinds(&trip));
}

#[test]
fn later_range_passed_first_is_still_walked_from_earlier_start() {
    let early = range(DayOffType::Holiday, date(2024, 1, 9), date(2024, 1, 10), "Early");
    let late = range(DayOffType::Vacation, date(2024, 1, 10), date(2024, 1, 11), "Late");

    let merged = merge(late, early);

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].start(), date(2024, 1, 9));
    assert_eq!(
        kinds(&merged[0]),
        vec![DayOffType::Holiday, DayOffType::Vacation, DayOffType::Vacation]
    );
    assert_eq!(merged[0].name(), Some("Late"), "tie favors the first argument");
}

#[test]
fn same_start_takes_max_rank() {
    let holiday = range(DayOffType::Holiday, date(2024, 1, 9), date(2024, 1, 9), "Holiday");
    let sick = range(DayOffType::SickLeave, date(2024, 1, 9), date(2024, 1, 9), "Sick");

    let merged = merge(holiday, sick);

    assert_eq!(merged.len(), 1);
    assert_eq!(kinds(&merged[0]), vec![DayOffType::SickLeave]);
    assert_eq!(merged[0].name(), Some("Holiday"));
}

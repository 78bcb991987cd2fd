//! Tests for report rendering.

use chrono::{NaiveDate, TimeZone, Utc};
use timeoff_engine::{DayOffType, LeaveRequest, Report, TimeOffTracker, TrackerConfig};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_report() -> Report {
    let config = TrackerConfig::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), 18)
        .with_as_of(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap());
    let requests = vec![
        LeaveRequest::new(
            DayOffType::Holiday,
            date(2024, 5, 1),
            date(2024, 5, 1),
            Some("Labour Day".to_string()),
        ),
        LeaveRequest::new(
            DayOffType::Vacation,
            date(2024, 6, 4),
            date(2024, 6, 6),
            Some("Lisbon".to_string()),
        ),
        LeaveRequest::new(DayOffType::SickLeave, date(2024, 6, 18), date(2024, 6, 18), None),
    ];
    let tracker = TimeOffTracker::new(config, &requests).unwrap();
    Report::from(&tracker)
}

#[test]
fn lines_follow_used_total_dates_name_format() {
    let report = sample_report();
    let rendered: Vec<String> = report.lines.iter().map(|l| l.to_string()).collect();

    assert_eq!(
        rendered,
        vec![
            "[0/1]  2024-05-01: Labour Day",
            "[3/3]  2024-06-04..2024-06-06: Lisbon",
            "[1/1]  2024-06-18",
        ]
    );
}

#[test]
fn zero_used_lines_are_muted() {
    let report = sample_report();
    let muted: Vec<bool> = report.lines.iter().map(|l| l.muted).collect();
    assert_eq!(muted, vec![true, false, false]);
}

#[test]
fn summary_totals() {
    let report = sample_report();
    assert_eq!(report.total_used, 4);
    assert_eq!(report.budget, 8);
    assert_eq!(report.remaining, 4);

    let text = report.to_string();
    assert!(text.ends_with("Total used: 4\nBudget: 8"));
}

#[test]
fn serializes_to_json() {
    let report = sample_report();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["budget"], 8);
    assert_eq!(value["lines"][1]["start"], "2024-06-04");
    assert_eq!(value["lines"][1]["name"], "Lisbon");
    assert_eq!(value["lines"][2]["name"], serde_json::Value::Null);
}

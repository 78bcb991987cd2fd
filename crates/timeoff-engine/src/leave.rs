//! Leave requests parsed from calendar event titles.
//!
//! Recognised titles:
//!
//! - `"Company Holiday: <name>"` — company-wide holiday
//! - `"Time Off"` or `"Time Off: <name>"` — vacation
//! - `"Sick Leave"` or `"Sick Leave: <name>"` — sick leave
//!
//! Anything else, and any timed (non all-day) event, is not a leave request.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::day_off::DayOffType;
use crate::error::Result;
use crate::range::DayOffRange;
use crate::source::CalendarEvent;

/// The title conventions a leave event can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveKind {
    CompanyHoliday,
    TimeOff,
    SickLeave,
}

impl LeaveKind {
    const ALL: [LeaveKind; 3] = [
        LeaveKind::CompanyHoliday,
        LeaveKind::TimeOff,
        LeaveKind::SickLeave,
    ];

    fn label(self) -> &'static str {
        match self {
            LeaveKind::CompanyHoliday => "Company Holiday",
            LeaveKind::TimeOff => "Time Off",
            LeaveKind::SickLeave => "Sick Leave",
        }
    }

    /// Holidays are only recognised with a name after the colon.
    fn requires_name(self) -> bool {
        matches!(self, LeaveKind::CompanyHoliday)
    }

    pub fn day_off_type(self) -> DayOffType {
        match self {
            LeaveKind::CompanyHoliday => DayOffType::Holiday,
            LeaveKind::TimeOff => DayOffType::Vacation,
            LeaveKind::SickLeave => DayOffType::SickLeave,
        }
    }

    /// Parse an event title into its leave kind and optional name.
    ///
    /// Returns `None` for titles that follow none of the conventions.
    pub fn parse_title(title: &str) -> Option<(LeaveKind, Option<String>)> {
        let title = title.trim();
        Self::ALL.into_iter().find_map(|kind| {
            let rest = title.strip_prefix(kind.label())?;
            if rest.is_empty() {
                return (!kind.requires_name()).then_some((kind, None));
            }
            let name = rest.strip_prefix(':')?.trim();
            if name.is_empty() {
                return (!kind.requires_name()).then_some((kind, None));
            }
            Some((kind, Some(name.to_string())))
        })
    }
}

/// A classified leave interval: type, inclusive dates and optional name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequest {
    pub kind: DayOffType,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub name: Option<String>,
}

impl LeaveRequest {
    pub fn new(kind: DayOffType, start: NaiveDate, end: NaiveDate, name: Option<String>) -> Self {
        Self {
            kind,
            start,
            end,
            name,
        }
    }

    /// Interpret a calendar event as a leave request.
    ///
    /// Unrecognised titles and timed events yield `None`. A leave title on a
    /// timed event is logged as a warning since it is almost always a typo in
    /// the calendar.
    pub fn from_event(event: &CalendarEvent) -> Option<Self> {
        let Some((kind, name)) = LeaveKind::parse_title(&event.title) else {
            debug!(title = %event.title, "skipping event with unrecognised title");
            return None;
        };
        if !event.is_all_day {
            warn!(title = %event.title, start = %event.start, "skipping timed leave event");
            return None;
        }
        Some(Self::new(kind.day_off_type(), event.start, event.end, name))
    }

    /// Expand into a weekend-padded [`DayOffRange`].
    ///
    /// # Errors
    /// Returns `TimeOffError::InvalidRange` if `start` is after `end`.
    pub fn to_range(&self) -> Result<DayOffRange> {
        DayOffRange::new(self.kind, self.start, self.end, self.name.clone())
    }
}

/// Keep the events that are leave requests, in their original order.
pub fn parse_events(events: &[CalendarEvent]) -> Vec<LeaveRequest> {
    events.iter().filter_map(LeaveRequest::from_event).collect()
}

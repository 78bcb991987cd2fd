//! Calendar event sources.
//!
//! The tracker never talks to a calendar store directly. Callers hand it a
//! [`CalendarEventSource`], which yields all-day and timed events for a date
//! window in chronological order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeOffError};

/// A raw calendar event, before title parsing.
///
/// Dates are calendar days and `end` is inclusive: a one-day all-day event has
/// `start == end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    #[serde(default = "default_all_day")]
    pub is_all_day: bool,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

fn default_all_day() -> bool {
    true
}

impl CalendarEvent {
    /// An all-day event spanning `[start, end]`.
    pub fn all_day(title: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            title: title.into(),
            is_all_day: true,
            start,
            end,
        }
    }
}

/// Inclusive date window used to enumerate events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl EventWindow {
    /// # Errors
    /// Returns `TimeOffError::InvalidWindow` if `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(TimeOffError::InvalidWindow { from, to });
        }
        Ok(Self { from, to })
    }

    /// True when `[start, end]` shares at least one day with the window.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.to && end >= self.from
    }

    /// Whether a source should hand `event` on for this window.
    ///
    /// Events whose end precedes their start are always kept so the tracker
    /// rejects them instead of them vanishing at the window edge.
    pub fn admits(&self, event: &CalendarEvent) -> bool {
        event.start > event.end || self.overlaps(event.start, event.end)
    }
}

/// Anything that can list calendar events for a window.
///
/// Implementations return the events the window [`admits`](EventWindow::admits),
/// sorted by start date (then end date).
pub trait CalendarEventSource {
    fn events(&self, window: &EventWindow) -> Result<Vec<CalendarEvent>>;
}

/// Sort events the way every source is expected to return them.
pub fn sort_chronologically(events: &mut [CalendarEvent]) {
    events.sort_by_key(|e| (e.start, e.end));
}

/// A fixed list of events held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    events: Vec<CalendarEvent>,
}

impl InMemorySource {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }
}

impl CalendarEventSource for InMemorySource {
    fn events(&self, window: &EventWindow) -> Result<Vec<CalendarEvent>> {
        let mut events: Vec<CalendarEvent> = self
            .events
            .iter()
            .filter(|e| window.admits(e))
            .cloned()
            .collect();
        sort_chronologically(&mut events);
        Ok(events)
    }
}

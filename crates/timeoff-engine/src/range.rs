//! Contiguous runs of classified days.
//!
//! A [`DayOffRange`] built from a leave request swallows the weekends that
//! touch it, so a Friday-to-Monday trip and the weekend in between are one
//! range rather than three.

use chrono::NaiveDate;
use tracing::debug;

use crate::day_off::{is_weekend, DayOff, DayOffType};
use crate::error::{Result, TimeOffError};

/// An ordered, gap-free sequence of days off with an optional display name.
///
/// Never empty: every constructor produces at least one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOffRange {
    days: Vec<DayOff>,
    name: Option<String>,
}

impl DayOffRange {
    /// Build a range for `[start, end]`, padded outward over adjacent weekends.
    ///
    /// Every day is classified with `kind` as the requested type, so padded
    /// weekend days (and weekend days inside the interval) come out as
    /// [`DayOffType::Weekend`].
    ///
    /// # Errors
    /// Returns `TimeOffError::InvalidRange` if `start` is after `end`.
    pub fn new(
        kind: DayOffType,
        start: NaiveDate,
        end: NaiveDate,
        name: Option<String>,
    ) -> Result<Self> {
        if start > end {
            return Err(TimeOffError::InvalidRange { start, end });
        }

        let padded_start = pad_backward(start);
        let padded_end = pad_forward(end);
        if padded_start != start || padded_end != end {
            debug!(%start, %end, %padded_start, %padded_end, "padded range over weekend");
        }

        let days = padded_start
            .iter_days()
            .take_while(|d| *d <= padded_end)
            .map(|d| DayOff::new(d, kind))
            .collect();

        Ok(Self { days, name })
    }

    /// Wrap an already merged day list. No weekend padding is applied.
    ///
    /// Callers must pass a non-empty list.
    pub(crate) fn from_days(days: Vec<DayOff>, name: Option<String>) -> Self {
        debug_assert!(!days.is_empty(), "a DayOffRange is never empty");
        Self { days, name }
    }

    pub fn days(&self) -> &[DayOff] {
        &self.days
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn into_parts(self) -> (Vec<DayOff>, Option<String>) {
        (self.days, self.name)
    }

    /// First day of the range.
    pub fn start(&self) -> NaiveDate {
        self.days[0].date()
    }

    /// Last day of the range (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.days[self.days.len() - 1].date()
    }

    pub fn total_days(&self) -> usize {
        self.days.len()
    }

    /// Days that consume budget (sick leave and vacation).
    pub fn used_days(&self) -> usize {
        self.days.iter().filter(|d| d.consumes_budget()).count()
    }
}

/// Build a range for a leave request. See [`DayOffRange::new`].
pub fn build_range(
    kind: DayOffType,
    start: NaiveDate,
    end: NaiveDate,
    name: Option<String>,
) -> Result<DayOffRange> {
    DayOffRange::new(kind, start, end, name)
}

fn pad_backward(mut start: NaiveDate) -> NaiveDate {
    while let Some(prev) = start.pred_opt().filter(|d| is_weekend(*d)) {
        start = prev;
    }
    start
}

fn pad_forward(mut end: NaiveDate) -> NaiveDate {
    while let Some(next) = end.succ_opt().filter(|d| is_weekend(*d)) {
        end = next;
    }
    end
}

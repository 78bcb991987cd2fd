//! Fold leave requests into merged ranges and compute the accrued budget.
//!
//! Requests are expected in chronological order. Only the most recently
//! accumulated range is ever merged with an incoming one; ranges already
//! flushed to the result are not revisited, even if a later request happens to
//! reach back into them.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::Result;
use crate::leave::{parse_events, LeaveRequest};
use crate::merge::merge;
use crate::range::DayOffRange;
use crate::source::{CalendarEventSource, EventWindow};

/// Length of a budget year: 365.25 days of 24 hours.
const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0;

/// Fold chronologically ordered leave requests into merged ranges.
///
/// # Errors
/// Returns `TimeOffError::InvalidRange` for a request whose start is after its end.
pub fn build_ranges(requests: &[LeaveRequest]) -> Result<Vec<DayOffRange>> {
    let mut ranges: Vec<DayOffRange> = Vec::with_capacity(requests.len());

    for request in requests {
        let range = request.to_range()?;
        match ranges.pop() {
            None => ranges.push(range),
            Some(last) => {
                let merged = merge(last, range);
                debug!(returned = merged.len(), "folded request");
                ranges.extend(merged);
            }
        }
    }

    Ok(ranges)
}

/// Days of leave accrued linearly between `start` and `as_of`.
///
/// `floor(target_days_per_year * years_elapsed)`, or zero when `start` is not
/// before `as_of`.
pub fn budget_days(target_days_per_year: u32, start: DateTime<Utc>, as_of: DateTime<Utc>) -> u32 {
    let elapsed_secs = (as_of - start).num_milliseconds() as f64 / 1000.0;
    if elapsed_secs <= 0.0 {
        return 0;
    }
    (f64::from(target_days_per_year) * elapsed_secs / SECONDS_PER_YEAR).floor() as u32
}

/// Budget anchor, rate and reference time for a tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    pub start_date: DateTime<Utc>,
    pub target_days_per_year: u32,
    pub as_of: DateTime<Utc>,
}

impl TrackerConfig {
    pub const DEFAULT_TARGET_DAYS_PER_YEAR: u32 = 18;

    /// Config evaluated against the current time.
    pub fn new(start_date: DateTime<Utc>, target_days_per_year: u32) -> Self {
        Self {
            start_date,
            target_days_per_year,
            as_of: Utc::now(),
        }
    }

    /// Evaluate the budget at `as_of` instead of now.
    pub fn with_as_of(mut self, as_of: DateTime<Utc>) -> Self {
        self.as_of = as_of;
        self
    }
}

/// Merged ranges and budget for one run, computed once at construction.
#[derive(Debug, Clone)]
pub struct TimeOffTracker {
    config: TrackerConfig,
    ranges: Vec<DayOffRange>,
    budget_days: u32,
}

impl TimeOffTracker {
    /// Build a tracker from already parsed, chronologically ordered requests.
    ///
    /// # Errors
    /// Returns `TimeOffError::InvalidRange` for a malformed request.
    pub fn new(config: TrackerConfig, requests: &[LeaveRequest]) -> Result<Self> {
        let ranges = build_ranges(requests)?;
        let budget_days = budget_days(
            config.target_days_per_year,
            config.start_date,
            config.as_of,
        );
        info!(
            requests = requests.len(),
            ranges = ranges.len(),
            budget_days,
            "time-off tracker built"
        );
        Ok(Self {
            config,
            ranges,
            budget_days,
        })
    }

    /// Read events in `window` from `source`, parse the leave requests among
    /// them and build a tracker.
    ///
    /// # Errors
    /// Propagates source failures and malformed requests.
    pub fn from_source(
        config: TrackerConfig,
        source: &dyn CalendarEventSource,
        window: &EventWindow,
    ) -> Result<Self> {
        let events = source.events(window)?;
        let requests = parse_events(&events);
        debug!(
            events = events.len(),
            requests = requests.len(),
            "parsed leave requests"
        );
        Self::new(config, &requests)
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.config.start_date
    }

    pub fn target_days_per_year(&self) -> u32 {
        self.config.target_days_per_year
    }

    pub fn ranges(&self) -> &[DayOffRange] {
        &self.ranges
    }

    pub fn budget_days(&self) -> u32 {
        self.budget_days
    }

    /// Sum of used days across all ranges.
    pub fn total_used(&self) -> usize {
        self.ranges.iter().map(DayOffRange::used_days).sum()
    }

    /// Budget left after subtracting used days. Negative when overspent.
    pub fn remaining_days(&self) -> i64 {
        i64::from(self.budget_days) - self.total_used() as i64
    }
}

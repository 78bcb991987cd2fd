//! Display-ready summary of a [`TimeOffTracker`].
//!
//! `Report` is plain data so it can be printed as text or serialized to JSON.
//! Colouring is left to the caller; lines that use no budget are flagged as
//! `muted`.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::range::DayOffRange;
use crate::tracker::TimeOffTracker;

/// One merged range, rendered as `[used/total]  <dates>[: name]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub used: usize,
    pub total: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub name: Option<String>,
    /// True when the range uses no budget (weekends and holidays only).
    pub muted: bool,
}

impl From<&DayOffRange> for ReportLine {
    fn from(range: &DayOffRange) -> Self {
        let used = range.used_days();
        Self {
            used,
            total: range.total_days(),
            start: range.start(),
            end: range.end(),
            name: range.name().map(str::to_string),
            muted: used == 0,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}]  ", self.used, self.total)?;
        if self.start == self.end {
            write!(f, "{}", self.start)?;
        } else {
            write!(f, "{}..{}", self.start, self.end)?;
        }
        if let Some(name) = &self.name {
            write!(f, ": {}", name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub lines: Vec<ReportLine>,
    pub total_used: usize,
    pub budget: u32,
    /// `budget - total_used`; negative when more days were taken than accrued.
    pub remaining: i64,
}

impl From<&TimeOffTracker> for Report {
    fn from(tracker: &TimeOffTracker) -> Self {
        Self {
            lines: tracker.ranges().iter().map(ReportLine::from).collect(),
            total_used: tracker.total_used(),
            budget: tracker.budget_days(),
            remaining: tracker.remaining_days(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        if !self.lines.is_empty() {
            writeln!(f)?;
        }
        writeln!(f, "Total used: {}", self.total_used)?;
        write!(f, "Budget: {}", self.budget)
    }
}

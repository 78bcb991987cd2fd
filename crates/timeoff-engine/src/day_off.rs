//! Day-off types and the weekend-aware day classifier.
//!
//! Every calendar day in a range carries a [`DayOffType`]. Types are ranked,
//! and a day can only ever move up in rank: a vacation day that overlaps a
//! company holiday stays a vacation day. Saturdays and Sundays are always
//! classified as [`DayOffType::Weekend`], whatever the caller asked for.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

/// Kind of day off, ordered by rank (lowest first).
///
/// The derived `Ord` follows declaration order, which is the rank order used
/// for upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOffType {
    Weekend = 0,
    Holiday = 1,
    SickLeave = 2,
    Vacation = 3,
}

impl DayOffType {
    /// Numeric rank; higher ranks win on upgrade.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Whether a day of this type consumes the yearly time-off budget.
    ///
    /// Weekends and company holidays are free.
    pub fn consumes_budget(self) -> bool {
        matches!(self, DayOffType::SickLeave | DayOffType::Vacation)
    }
}

impl fmt::Display for DayOffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayOffType::Weekend => "weekend",
            DayOffType::Holiday => "holiday",
            DayOffType::SickLeave => "sick leave",
            DayOffType::Vacation => "vacation",
        };
        f.write_str(label)
    }
}

/// Returns true for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A single classified calendar day.
///
/// Fields are private so the weekend rule set up in [`DayOff::new`] can only
/// be changed through [`DayOff::upgraded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOff {
    date: NaiveDate,
    kind: DayOffType,
}

impl DayOff {
    /// Classify `date`, forcing [`DayOffType::Weekend`] on Saturdays and Sundays.
    pub fn new(date: NaiveDate, requested: DayOffType) -> Self {
        let kind = if is_weekend(date) {
            DayOffType::Weekend
        } else {
            requested
        };
        Self { date, kind }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> DayOffType {
        self.kind
    }

    /// Copy of this day with its type raised to `to` if `to` ranks higher.
    ///
    /// Never lowers the rank, so applying it twice with the same type is the
    /// same as applying it once.
    pub fn upgraded(&self, to: DayOffType) -> Self {
        Self {
            date: self.date,
            kind: self.kind.max(to),
        }
    }

    pub fn consumes_budget(&self) -> bool {
        self.kind.consumes_budget()
    }
}

/// Classify a single date. Equivalent to [`DayOff::new`].
pub fn classify(date: NaiveDate, requested: DayOffType) -> DayOff {
    DayOff::new(date, requested)
}

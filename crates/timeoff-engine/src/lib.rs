//! # timeoff-engine
//!
//! Day-off classification and range merging for personal time-off tracking.
//!
//! Leave requests read from a calendar (company holidays, vacation, sick leave)
//! are expanded into per-day ranges, padded over adjacent weekends, and folded
//! into a minimal ordered list of named ranges. The tracker compares the days
//! those ranges consume against a budget that accrues linearly over time.
//!
//! ## Modules
//!
//! - [`day_off`] — `DayOffType` ranks and the weekend-aware day classifier
//! - [`range`] — `DayOffRange` construction with weekend padding
//! - [`merge`] — Pairwise merge of abutting or overlapping ranges
//! - [`tracker`] — Left fold over leave requests + linear budget accrual
//! - [`leave`] — Calendar event title → leave request parsing
//! - [`source`] — `CalendarEventSource` trait and an in-memory source
//! - [`report`] — Serializable summary of a tracker for display
//! - [`error`] — Error types

pub mod day_off;
pub mod error;
pub mod leave;
pub mod merge;
pub mod range;
pub mod report;
pub mod source;
pub mod tracker;

pub use day_off::{classify, is_weekend, DayOff, DayOffType};
pub use error::TimeOffError;
pub use leave::{LeaveKind, LeaveRequest};
pub use merge::merge;
pub use range::{build_range, DayOffRange};
pub use report::{Report, ReportLine};
pub use source::{CalendarEvent, CalendarEventSource, EventWindow, InMemorySource};
pub use tracker::{budget_days, build_ranges, TimeOffTracker, TrackerConfig};

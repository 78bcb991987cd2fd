//! Error types for timeoff-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeOffError {
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid event window: {from} is after {to}")]
    InvalidWindow { from: NaiveDate, to: NaiveDate },

    #[error("Calendar source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, TimeOffError>;
